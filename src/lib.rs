//! Library entry for Cloudside exposing core logic for integration tests.

pub mod api;
pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
