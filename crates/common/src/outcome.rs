//! Outcome of a single submission, ready for rendering

use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, info};

use crate::container::{best_container, Container};
use crate::error::{Error, Result};
use crate::heights::{parse_heights, Heights, Limits};

/// Element id of the success slot on the page.
pub const RESULT_ELEMENT_ID: &str = "result";

/// Element id of the error slot on the page.
pub const ERROR_ELEMENT_ID: &str = "error";

/// What one submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `container` is `None` for a single line.
    Success {
        area: u64,
        container: Option<Container>,
    },
    Failure(Error),
}

impl Outcome {
    /// Run the sweep over validated heights.
    pub fn computed(heights: &[u32]) -> Self {
        let container = best_container(heights);
        Outcome::Success {
            area: container.map_or(0, |c| c.area),
            container,
        }
    }

    /// Compute over validated heights or keep the rejection, logging either way.
    pub fn from_result(heights: Result<Heights>) -> Self {
        match heights {
            Ok(heights) => {
                let outcome = Outcome::computed(&heights);
                debug!(len = heights.len(), area = ?outcome.area(), "Computed max area");
                outcome
            }
            Err(err) => {
                let detail = err.detail().unwrap_or_default();
                info!(kind = err.kind(), detail = %detail, "Rejected heights input");
                Outcome::Failure(err)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn area(&self) -> Option<u64> {
        match self {
            Outcome::Success { area, .. } => Some(*area),
            Outcome::Failure(_) => None,
        }
    }

    /// Id of the element this outcome is rendered into.
    pub fn element_id(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => RESULT_ELEMENT_ID,
            Outcome::Failure(_) => ERROR_ELEMENT_ID,
        }
    }

    /// `Result: {area}` or `Error: {message}`
    pub fn text(&self) -> String {
        self.to_string()
    }

    fn body(&self) -> OutcomeBody<'_> {
        match self {
            Outcome::Success { area, container } => OutcomeBody::Success {
                result: *area,
                container: container.as_ref(),
            },
            Outcome::Failure(err) => OutcomeBody::Failure {
                error: err.to_string(),
                kind: err.kind(),
                detail: err.detail(),
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { area, .. } => write!(f, "Result: {}", area),
            Outcome::Failure(err) => write!(f, "Error: {}", err),
        }
    }
}

impl From<Error> for Outcome {
    fn from(err: Error) -> Self {
        Outcome::Failure(err)
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum OutcomeBody<'a> {
    Success {
        result: u64,
        container: Option<&'a Container>,
    },
    Failure {
        error: String,
        kind: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.body().serialize(serializer)
    }
}

/// Parse, validate and compute in one step.
pub fn evaluate(input: &str, limits: &Limits) -> Outcome {
    Outcome::from_result(parse_heights(input, limits))
}
