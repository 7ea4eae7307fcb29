//! Room catalog model

use serde::Serialize;
use sqlx::FromRow;

/// A bookable room from the `rooms` table.
///
/// Created once by the setup route and read-only from then on; the
/// pricing flow never mutates it. Prices are whole currency units
/// (integers are safer than floats for currency). Invariants held by
/// the schema: `capacity >= 1`, prices `>= 0`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    /// Image filename under static/img/, e.g. "deluxe_garden.jpg".
    pub image: String,
    pub capacity: i64,
    pub price_weekday: i64,
    pub price_weekend: i64,
    pub description: Option<String>,
}

impl Room {
    /// Description for templates; rooms without one render an empty string.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
