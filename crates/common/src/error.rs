//! Error types for MaxArea

use thiserror::Error;

/// Result type alias using MaxArea Error
pub type Result<T> = std::result::Result<T, Error>;

/// Input rejections.
///
/// The `Display` text of each variant is the exact message shown to users,
/// so the page and the CLI can render `Error: {err}` directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("Input must be numeric.")]
    NonNumericInput { token: String },

    #[error("Heights must be non-negative.")]
    NegativeValue { index: usize },

    #[error("Invalid input constraints.")]
    ConstraintViolation(Constraint),
}

impl Error {
    /// Stable tag used by the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::EmptyInput => "empty_input",
            Error::NonNumericInput { .. } => "non_numeric_input",
            Error::NegativeValue { .. } => "negative_value",
            Error::ConstraintViolation(_) => "constraint_violation",
        }
    }

    /// Diagnostic detail that never reaches the rendered message.
    pub fn detail(&self) -> Option<String> {
        match self {
            Error::EmptyInput => None,
            Error::NonNumericInput { token } => Some(format!("token {:?} is not an integer", token)),
            Error::NegativeValue { index } => Some(format!("height at index {} is negative", index)),
            Error::ConstraintViolation(c) => Some(c.to_string()),
        }
    }
}

/// Which bound a height sequence broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `value` is `None` when the token overflowed 64-bit parsing.
    #[error("height at index {index} exceeds {max}")]
    HeightTooLarge {
        index: usize,
        value: Option<u64>,
        max: u32,
    },

    #[error("{len} heights given, at most {max} accepted")]
    TooManyHeights { len: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(Error::EmptyInput.to_string(), "Input cannot be empty.");
        assert_eq!(
            Error::NonNumericInput { token: "a".into() }.to_string(),
            "Input must be numeric."
        );
        assert_eq!(
            Error::NegativeValue { index: 0 }.to_string(),
            "Heights must be non-negative."
        );
        let err = Error::ConstraintViolation(Constraint::TooManyHeights { len: 3, max: 2 });
        assert_eq!(err.to_string(), "Invalid input constraints.");
    }

    #[test]
    fn test_detail_keeps_constraint() {
        let err = Error::ConstraintViolation(Constraint::HeightTooLarge {
            index: 1,
            value: Some(10001),
            max: 10000,
        });
        assert_eq!(err.kind(), "constraint_violation");
        assert_eq!(err.detail().as_deref(), Some("height at index 1 exceeds 10000"));
        assert_eq!(Error::EmptyInput.detail(), None);
    }
}
