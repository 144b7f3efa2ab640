#![forbid(unsafe_code)]

//! The individual rules a descriptor can carry and the error each one reports.

use std::fmt;

use crate::constraints::Value;

/// Error code for [`Rule::Required`].
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Error code for [`Rule::MinLength`].
pub const ERROR_CODE_MIN_LENGTH: &str = "too_short";
/// Error code for [`Rule::MaxLength`].
pub const ERROR_CODE_MAX_LENGTH: &str = "too_long";
/// Error code for [`Rule::Min`].
pub const ERROR_CODE_MIN: &str = "too_small";
/// Error code for [`Rule::Max`].
pub const ERROR_CODE_MAX: &str = "too_large";

/// Outcome of checking one rule or one descriptor.
pub type ValidationResult = Result<(), ValidationError>;

/// A single constraint on a [`Value`].
///
/// Length rules look only at text and bound rules only at numbers. Checking
/// a rule against the other kind always passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// The trimmed string form must not be empty.
    Required,
    /// At least this many characters once trimmed.
    MinLength(usize),
    /// At most this many characters once trimmed.
    MaxLength(usize),
    /// Inclusive lower bound.
    Min(f64),
    /// Inclusive upper bound.
    Max(f64),
}

impl Rule {
    /// Stable identifier reported when this rule fails.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => ERROR_CODE_REQUIRED,
            Self::MinLength(_) => ERROR_CODE_MIN_LENGTH,
            Self::MaxLength(_) => ERROR_CODE_MAX_LENGTH,
            Self::Min(_) => ERROR_CODE_MIN,
            Self::Max(_) => ERROR_CODE_MAX,
        }
    }

    /// Check `value` against this rule.
    pub fn check(self, value: &Value) -> ValidationResult {
        let passes = match (self, value) {
            // Numbers are rendered first: "0" and "NaN" are both present.
            (Self::Required, value) => !value.to_string().trim().is_empty(),
            (Self::MinLength(min), Value::Text(text)) => trimmed_len(text) >= min,
            (Self::MaxLength(max), Value::Text(text)) => trimmed_len(text) <= max,
            // Written so that NaN fails both bounds.
            (Self::Min(min), Value::Number(n)) => *n >= min,
            (Self::Max(max), Value::Number(n)) => *n <= max,
            (Self::MinLength(_) | Self::MaxLength(_), Value::Number(_)) => true,
            (Self::Min(_) | Self::Max(_), Value::Text(_)) => true,
        };
        if passes {
            Ok(())
        } else {
            Err(ValidationError::new(self, value))
        }
    }
}

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// A failed rule and what it saw.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The rule that failed.
    pub rule: Rule,
    /// What the rule measured: the trimmed length for length rules, the
    /// rendered value otherwise.
    pub found: String,
}

impl ValidationError {
    fn new(rule: Rule, value: &Value) -> Self {
        let found = match (rule, value) {
            (Rule::MinLength(_) | Rule::MaxLength(_), Value::Text(text)) => {
                trimmed_len(text).to_string()
            }
            _ => value.to_string(),
        };
        Self { rule, found }
    }

    /// Stable error code, see [`Rule::code`].
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.rule.code()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::Required => f.write_str("value is required"),
            Rule::MinLength(min) => {
                write!(f, "must be at least {min} characters, got {}", self.found)
            }
            Rule::MaxLength(max) => {
                write!(f, "must be at most {max} characters, got {}", self.found)
            }
            Rule::Min(min) => write!(f, "must be at least {min}, got {}", self.found),
            Rule::Max(max) => write!(f, "must be at most {max}, got {}", self.found),
        }
    }
}

impl std::error::Error for ValidationError {}
