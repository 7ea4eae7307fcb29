//! Database access layer

pub mod queries;

pub use queries::{count_rooms, create_schema, get_rooms, seed_rooms};
