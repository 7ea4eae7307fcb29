//! Quote DTOs produced by the pricing calculator.

use serde::Serialize;

/// A computed price offer for one room over a stay.
///
/// Ephemeral: rendered into the availability page and discarded. Prices
/// stay in whole currency units end to end, so there is nothing to round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomQuote {
    pub room_name: String,
    pub image: String,
    pub capacity: i64,
    pub total_price: i64,
    pub weekend_nights: i64,
}
