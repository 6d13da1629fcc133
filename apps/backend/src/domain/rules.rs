//! Input rules: name normalisation and numeric coercion for scores and
//! thresholds.
//!
//! Numbers arrive as loosely typed JSON. An integer is taken as-is, a finite
//! float is truncated toward zero, and a string is accepted when it holds an
//! integer once surrounding whitespace is trimmed. Booleans count as 1 and 0.
//! Everything else is rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::domain::{DomainError, ValidationKind};

/// Threshold a fresh game starts with.
pub const DEFAULT_WIN_THRESHOLD: i64 = 200;

/// Minimum cumulative score that ends the game. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct WinThreshold(i64);

impl WinThreshold {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(threshold_error());
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }

    pub fn is_met_by(self, score: i64) -> bool {
        score >= self.0
    }
}

impl Default for WinThreshold {
    fn default() -> Self {
        Self(DEFAULT_WIN_THRESHOLD)
    }
}

impl TryFrom<i64> for WinThreshold {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WinThreshold> for i64 {
    fn from(value: WinThreshold) -> Self {
        value.0
    }
}

/// Trim a requested player name, rejecting blanks.
pub fn normalize_name(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::PlayerName,
            "Player name cannot be empty",
        ));
    }
    Ok(trimmed.to_string())
}

/// Coerce a round score. A missing score counts as 0.
pub fn coerce_score(raw: Option<&Value>) -> Result<i64, DomainError> {
    match raw {
        None => Ok(0),
        Some(value) => coerce_int(value).ok_or_else(|| {
            DomainError::validation(ValidationKind::Score, "Score must be a number")
        }),
    }
}

/// Coerce a requested win threshold; it must be present and positive.
pub fn coerce_threshold(raw: Option<&Value>) -> Result<WinThreshold, DomainError> {
    let value = raw.and_then(coerce_int).ok_or_else(threshold_error)?;
    WinThreshold::new(value)
}

fn threshold_error() -> DomainError {
    DomainError::validation(
        ValidationKind::Threshold,
        "Threshold must be a positive integer",
    )
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_float)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn truncate_float(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if t < i64::MIN as f64 || t >= i64::MAX as f64 {
        return None;
    }
    Some(t as i64)
}
