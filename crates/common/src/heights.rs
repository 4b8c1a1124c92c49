//! Height sequences: parsing and validation of user input

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{Constraint, Error, Result};

/// Largest accepted height.
pub const DEFAULT_MAX_HEIGHT: u32 = 10_000;

/// Longest accepted sequence.
pub const DEFAULT_MAX_LEN: usize = 100_000;

/// Bounds a height sequence must respect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Inclusive upper bound on every height
    pub max_height: u32,

    /// Inclusive upper bound on the number of heights
    pub max_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

/// A validated, non-empty sequence of heights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Heights(Vec<u32>);

impl Heights {
    /// Validate the elements of a JSON array, with the same rule order as
    /// [`parse_heights`].
    pub fn from_tokens(tokens: &[HeightToken], limits: &Limits) -> Result<Self> {
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }

        let raw = tokens
            .iter()
            .map(|t| match &t.0 {
                Token::Numeric(raw) => Ok(*raw),
                Token::NonNumeric(token) => Err(Error::NonNumericInput {
                    token: token.clone(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        validate(&raw, limits)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Deref for Heights {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl FromStr for Heights {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_heights(s, &Limits::default())
    }
}

/// Parse a comma-separated list of heights.
///
/// Checks run in a fixed order over the whole input: emptiness, then
/// numeric tokens, then sign, then the configured limits. The first failing
/// check decides the error.
pub fn parse_heights(input: &str, limits: &Limits) -> Result<Heights> {
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let raw = input
        .split(',')
        .map(|token| parse_token(token.trim()))
        .collect::<Result<Vec<_>>>()?;

    validate(&raw, limits)
}

/// A numeric token before range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Raw {
    Value(i64),
    /// Integer syntax, but outside i64.
    Overflow { negative: bool },
}

impl Raw {
    fn is_negative(self) -> bool {
        match self {
            Raw::Value(v) => v < 0,
            Raw::Overflow { negative } => negative,
        }
    }
}

fn parse_token(token: &str) -> Result<Raw> {
    match token.parse::<i64>() {
        Ok(v) => Ok(Raw::Value(v)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Raw::Overflow { negative: false }),
            IntErrorKind::NegOverflow => Ok(Raw::Overflow { negative: true }),
            _ => Err(Error::NonNumericInput {
                token: token.to_string(),
            }),
        },
    }
}

/// One element of a JSON height array, not yet range-checked.
///
/// Accepts any JSON scalar. Integers beyond 64 bits (which arrive as floats)
/// keep their sign and count as numeric; fractional numbers, booleans, null
/// and non-integer strings are non-numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightToken(Token);

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Numeric(Raw),
    NonNumeric(String),
}

impl HeightToken {
    fn numeric(raw: Raw) -> Self {
        HeightToken(Token::Numeric(raw))
    }

    fn non_numeric(token: impl Into<String>) -> Self {
        HeightToken(Token::NonNumeric(token.into()))
    }
}

impl<'de> Deserialize<'de> for HeightToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(HeightTokenVisitor)
    }
}

struct HeightTokenVisitor;

impl<'de> Visitor<'de> for HeightTokenVisitor {
    type Value = HeightToken;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a height")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<HeightToken, E> {
        Ok(HeightToken::numeric(Raw::Value(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<HeightToken, E> {
        Ok(HeightToken::numeric(match i64::try_from(v) {
            Ok(v) => Raw::Value(v),
            Err(_) => Raw::Overflow { negative: false },
        }))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<HeightToken, E> {
        if !v.is_finite() || v.fract() != 0.0 {
            return Ok(HeightToken::non_numeric(v.to_string()));
        }
        // 2^63, the first magnitude outside i64
        const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
        Ok(HeightToken::numeric(if v > -I64_BOUND && v < I64_BOUND {
            Raw::Value(v as i64)
        } else {
            Raw::Overflow { negative: v < 0.0 }
        }))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<HeightToken, E> {
        let token = v.trim();
        Ok(match parse_token(token) {
            Ok(raw) => HeightToken::numeric(raw),
            Err(_) => HeightToken::non_numeric(token),
        })
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<HeightToken, E> {
        Ok(HeightToken::non_numeric(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<HeightToken, E> {
        Ok(HeightToken::non_numeric("null"))
    }
}

fn validate(raw: &[Raw], limits: &Limits) -> Result<Heights> {
    if raw.is_empty() {
        return Err(Error::EmptyInput);
    }

    if let Some(index) = raw.iter().position(|r| r.is_negative()) {
        return Err(Error::NegativeValue { index });
    }

    if raw.len() > limits.max_len {
        return Err(Error::ConstraintViolation(Constraint::TooManyHeights {
            len: raw.len(),
            max: limits.max_len,
        }));
    }

    let mut heights = Vec::with_capacity(raw.len());
    for (index, r) in raw.iter().enumerate() {
        match *r {
            Raw::Value(v) if v <= i64::from(limits.max_height) => heights.push(v as u32),
            Raw::Value(v) => {
                return Err(Error::ConstraintViolation(Constraint::HeightTooLarge {
                    index,
                    value: Some(v as u64),
                    max: limits.max_height,
                }))
            }
            Raw::Overflow { .. } => {
                return Err(Error::ConstraintViolation(Constraint::HeightTooLarge {
                    index,
                    value: None,
                    max: limits.max_height,
                }))
            }
        }
    }

    Ok(Heights(heights))
}
