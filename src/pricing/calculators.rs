//! Core pricing calculation functions.
//!
//! Pure functions for stay pricing math - no database access. Integer
//! arithmetic in whole currency units throughout; floating point would
//! drift on currency totals.

use crate::models::Room;

use super::calendar::{classify_night, NightTally};
use super::requests::StayRequest;
use super::responses::RoomQuote;

/// Count weekend-rate and weekday-rate nights in a stay.
///
/// Walks each billed night of the closed-open range `[checkin, checkout)`
/// so the check-out day itself is never classified. The tally's total
/// always equals `stay.total_nights()`.
pub fn tally_nights(stay: &StayRequest) -> NightTally {
    let mut tally = NightTally::default();
    for night in stay.nights() {
        tally.add(classify_night(night));
    }
    tally
}

/// Price one room for an already-tallied stay.
pub fn price_room(room: &Room, tally: &NightTally) -> i64 {
    room.price_weekday * tally.weekday_nights + room.price_weekend * tally.weekend_nights
}

/// Produce one quote per room, preserving catalog order.
///
/// An empty catalog quotes nothing; that is not an error.
pub fn quote_rooms(stay: &StayRequest, rooms: &[Room]) -> Vec<RoomQuote> {
    let tally = tally_nights(stay);

    rooms
        .iter()
        .map(|room| RoomQuote {
            room_name: room.name.clone(),
            image: room.image.clone(),
            capacity: room.capacity,
            total_price: price_room(room, &tally),
            weekend_nights: tally.weekend_nights,
        })
        .collect()
}
