//! Attendance status resolution and run compression.
//!
//! Pure and synchronous: every call recomputes from its inputs and keeps no
//! state, so the same inputs always give the same grid.

pub mod compress;
pub mod grid;
pub mod holiday;
pub mod normalize;
pub mod resolve;
pub mod summary;
pub mod window;

pub use grid::{build_grid, GridInput};
pub use holiday::HolidayCalendar;
