//! MaxArea CLI
//!
//! Command-line interface for computing the container with most water and
//! running the web form.

pub mod commands;
pub mod output;
