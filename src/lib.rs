//! Naqsh Resort booking-inquiry website.
//!
//! Lists rooms, quotes stay pricing for a date range, and serves the
//! marketing pages. Bookings are inquiries only: nothing is persisted
//! beyond the room catalog, and pricing is a pure per-request
//! calculation over it.

pub mod cache;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use sqlx::SqlitePool;

use cache::AppCache;

/// Shared application state, passed explicitly to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub cache: AppCache,
}
