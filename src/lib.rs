//! Futurama character browser for the terminal.
//!
//! The library holds everything except the event loop, so integration tests
//! can drive the screen against a mock or a local HTTP server.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
