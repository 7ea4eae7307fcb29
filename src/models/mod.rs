//! Database-backed models

mod room;

pub use room::Room;
