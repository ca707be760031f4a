//! Small host-loop utilities.

pub mod time;

pub use time::TickPacer;
