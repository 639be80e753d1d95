//! inkweather library
//!
//! The forecast engine plus the pieces the terminal application is built
//! from, exposed for the binary and for integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod forecast;
pub mod logging;
pub mod refresh;
pub mod ui;
