//! Maps a school year and its dated events onto a week-indexed raster.
//!
//! One column is one week counted from the first day of school. Event
//! starts round up to the next column and event ends round down, so a band
//! only covers weeks the event actually spans. The today marker and topic
//! ranges use plain floor rounding.

mod error;
mod projector;
mod raster;
mod rows;
mod time_helper;
mod today;
mod types;

pub use error::*;
pub use projector::*;
pub use raster::*;
pub use rows::*;
pub use time_helper::*;
pub use today::*;
pub use types::*;
