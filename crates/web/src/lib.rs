//! MaxArea Web Form
//!
//! Serves the single page that computes the container with most water for a
//! comma-separated list of heights, plus a small JSON API.

pub mod config;
pub mod page;
pub mod server;

pub use config::WebConfig;
pub use server::{serve, WebServer};
