//! In-memory caching using moka
//!
//! The room catalog is written once by the setup route and read on every
//! homepage and availability request, so it is cached aggressively and
//! refreshed in the background.

use moka::future::Cache;
use serde::Serialize;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::db;
use crate::error::Result;
use crate::models::Room;

const CATALOG_KEY: &str = "catalog";

/// Application cache holding the room catalog
#[derive(Clone)]
pub struct AppCache {
    /// Room catalog (single entry under CATALOG_KEY)
    rooms: Cache<&'static str, Arc<Vec<Room>>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // One catalog entry, 30 min TTL; the warmer refreshes it well
            // before expiry under normal operation
            rooms: Cache::builder()
                .max_capacity(1)
                .time_to_live(Duration::from_secs(30 * 60))
                .build(),
        }
    }

    /// Get the room catalog, falling back to the database on a miss.
    ///
    /// Store failures propagate unchanged; the cache never masks them
    /// with stale data.
    pub async fn get_rooms(&self, pool: &SqlitePool) -> Result<Arc<Vec<Room>>> {
        if let Some(rooms) = self.rooms.get(CATALOG_KEY).await {
            tracing::debug!("Cache HIT for room catalog");
            return Ok(rooms);
        }

        tracing::debug!("Cache MISS for room catalog");
        let rooms = Arc::new(db::get_rooms(pool).await?);
        self.rooms.insert(CATALOG_KEY, rooms.clone()).await;
        Ok(rooms)
    }

    /// Invalidate the cached catalog (after setup seeds rooms)
    pub async fn invalidate_catalog(&self) {
        self.rooms.invalidate(CATALOG_KEY).await;
        info!("Room catalog cache invalidated");
    }

    /// Get cache statistics for the health endpoint
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            catalog_cached: self.rooms.contains_key(CATALOG_KEY),
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub catalog_cached: bool,
}

/// Start background cache warmer
///
/// Warms the catalog on startup and refreshes every 10 minutes.
pub async fn start_cache_warmer(cache: AppCache, db: SqlitePool) {
    warm_cache(&cache, &db).await;

    let mut interval = interval(Duration::from_secs(10 * 60));
    loop {
        interval.tick().await;
        warm_cache(&cache, &db).await;
    }
}

async fn warm_cache(cache: &AppCache, db: &SqlitePool) {
    match db::get_rooms(db).await {
        Ok(rooms) => {
            let count = rooms.len();
            cache.rooms.insert(CATALOG_KEY, Arc::new(rooms)).await;
            info!("Room catalog cache warmed ({} rooms)", count);
        }
        // Expected before /setup has run; the next refresh picks it up
        Err(e) => warn!("Failed to warm room catalog cache: {}", e),
    }
}
