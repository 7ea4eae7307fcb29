//! One-shot setup route: create the schema and seed the room catalog

use axum::extract::State;

use crate::db;
use crate::error::Result;
use crate::AppState;

/// Create the schema and seed the launch rooms if the catalog is empty.
///
/// Safe to hit more than once; a populated catalog is left untouched.
pub async fn setup(State(state): State<AppState>) -> Result<&'static str> {
    db::create_schema(&state.db).await?;

    if db::seed_rooms(&state.db).await? {
        state.cache.invalidate_catalog().await;
        tracing::info!("Catalog schema created and launch rooms seeded");
        Ok("Database created and rooms added!")
    } else {
        Ok("Database already exists.")
    }
}
