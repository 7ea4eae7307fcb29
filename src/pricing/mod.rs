//! Stay pricing for the room catalog.
//!
//! Pure calculation over a validated date range and the read-only room
//! catalog. No database access in here; handlers fetch the catalog and
//! hand it in.

pub mod calculators;
pub mod calendar;
pub mod requests;
pub mod responses;

// Re-export commonly used items
pub use calculators::{quote_rooms, tally_nights};
pub use calendar::{classify_night, NightRate, NightTally, RESORT_WEEKEND};
pub use requests::{AvailabilityForm, QuoteError, StayRequest};
pub use responses::RoomQuote;
