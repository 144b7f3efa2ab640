#![forbid(unsafe_code)]

//! Constraint descriptors: a candidate value bundled with the rules it must satisfy.

use std::fmt;

use crate::rule::{Rule, ValidationError, ValidationResult};

/// A candidate value under test.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw text, validated by the length rules.
    Text(String),
    /// A number, validated by the bound rules.
    Number(f64),
}

impl Value {
    /// Returns `true` for [`Value::Number`].
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Borrow the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// The number, if this is a numeric value.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Text(_) => None,
            Self::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A declarative constraint descriptor.
///
/// Built fresh for every validation attempt. Length rules only apply to
/// text and bound rules only apply to numbers; a rule that does not apply
/// never fails.
///
/// # Example
///
/// ```rust
/// use projform_validate::{Constraints, validate};
///
/// let people = Constraints::new(3.0).required().min(1.0).max(5.0);
/// assert!(validate(&people));
///
/// let description = Constraints::new("shrt").required().min_length(5);
/// assert!(!validate(&description));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    /// The candidate value.
    pub value: Value,
    /// Reject values whose trimmed string form is empty.
    pub required: bool,
    /// Inclusive lower bound on trimmed text length.
    pub min_length: Option<usize>,
    /// Inclusive upper bound on trimmed text length.
    pub max_length: Option<usize>,
    /// Inclusive lower numeric bound.
    pub min: Option<f64>,
    /// Inclusive upper numeric bound.
    pub max: Option<f64>,
}

impl Constraints {
    /// Create a descriptor with no rules.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Mark the value as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the minimum trimmed length.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set the maximum trimmed length.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the lower numeric bound.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper numeric bound.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// The rules this descriptor names, in a fixed order.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules = Vec::with_capacity(5);
        if self.required {
            rules.push(Rule::Required);
        }
        rules.extend(self.min_length.map(Rule::MinLength));
        rules.extend(self.max_length.map(Rule::MaxLength));
        rules.extend(self.min.map(Rule::Min));
        rules.extend(self.max.map(Rule::Max));
        rules
    }
}

/// Evaluate a descriptor, reporting the first failing rule.
pub fn check(constraints: &Constraints) -> ValidationResult {
    constraints
        .rules()
        .into_iter()
        .try_for_each(|rule| rule.check(&constraints.value))
}

/// Evaluate a descriptor to a plain pass/fail.
#[must_use]
pub fn validate(constraints: &Constraints) -> bool {
    check(constraints).is_ok()
}

/// Every failing rule of a descriptor.
#[must_use]
pub fn errors(constraints: &Constraints) -> Vec<ValidationError> {
    constraints
        .rules()
        .into_iter()
        .filter_map(|rule| rule.check(&constraints.value).err())
        .collect()
}
