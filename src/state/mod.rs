//! State owned by the character screen.
//!
//! - [`ScreenData`] - the three state variables behind one update entry point
//! - [`ScreenState`] - the render mode derived from them
//! - [`RequestTracker`] - request tokens that make overlapping fetches safe

pub mod request;
pub mod screen;

pub use request::{RequestToken, RequestTracker};
pub use screen::{ScreenData, ScreenState, ScreenUpdate};
