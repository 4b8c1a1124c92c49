//! MaxArea Common Library
//!
//! Parsing and validation of height lists, the two-pointer max-area sweep,
//! and the rendered outcome shared by the web page and the CLI.

pub mod container;
pub mod error;
pub mod heights;
pub mod outcome;

// Re-export commonly used types
pub use container::{best_container, max_area, Container};
pub use error::{Constraint, Error, Result};
pub use heights::{parse_heights, HeightToken, Heights, Limits, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_LEN};
pub use outcome::{evaluate, Outcome};

/// MaxArea version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
