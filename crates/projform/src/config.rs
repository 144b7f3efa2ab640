#![forbid(unsafe_code)]

//! Per-field rule configuration (deterministic, env-overridable).

use std::env;
use std::fmt;

use projform_validate::Constraints;

use crate::field::{FieldCapture, FieldId, parse_people};
use crate::notify::INVALID_INPUT_MESSAGE;

const ENV_DESCRIPTION_MIN_LENGTH: &str = "PROJFORM_DESCRIPTION_MIN_LENGTH";
const ENV_PEOPLE_MIN: &str = "PROJFORM_PEOPLE_MIN";
const ENV_PEOPLE_MAX: &str = "PROJFORM_PEOPLE_MAX";

/// Rules applied to the project form.
///
/// # Environment Variables
/// - `PROJFORM_DESCRIPTION_MIN_LENGTH` (usize)
/// - `PROJFORM_PEOPLE_MIN` (number)
/// - `PROJFORM_PEOPLE_MAX` (number)
#[derive(Debug, Clone, PartialEq)]
pub struct FormRules {
    /// Minimum trimmed description length. Default: 5.
    pub description_min_length: usize,
    /// Smallest accepted people count (inclusive). Default: 1.
    pub people_min: f64,
    /// Largest accepted people count (inclusive). Default: 5.
    pub people_max: f64,
    /// Message shown when validation fails.
    pub invalid_message: String,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            people_min: 1.0,
            people_max: 5.0,
            invalid_message: INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct ConfigParse {
    /// Rules after applying every usable value.
    pub rules: FormRules,
    /// Values that were rejected, in lookup order.
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Setting the value was meant for.
    pub field: &'static str,
    /// The rejected raw value.
    pub value: String,
    /// Why it was rejected.
    pub message: String,
}

impl ConfigError {
    /// Create an error for `field`.
    #[must_use]
    pub fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl FormRules {
    /// Parse rules from environment variables, ignoring bad values.
    #[must_use]
    pub fn from_env() -> FormRules {
        Self::from_env_with_diagnostics().rules
    }

    /// Parse rules from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse rules through an arbitrary lookup.
    ///
    /// Values that fail to parse keep their default and are reported; a
    /// bound pair that ends up inverted is reported and reset to defaults.
    pub fn from_env_with<F>(mut get: F) -> ConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut rules = FormRules::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_DESCRIPTION_MIN_LENGTH) {
            match parse_usize(&value) {
                Some(parsed) => rules.description_min_length = parsed,
                None => errors.push(ConfigError::new(
                    "description_min_length",
                    value,
                    "expected non-negative integer",
                )),
            }
        }

        if let Some(value) = get(ENV_PEOPLE_MIN) {
            match parse_finite(&value) {
                Some(parsed) => rules.people_min = parsed,
                None => errors.push(ConfigError::new("people_min", value, "expected number")),
            }
        }

        if let Some(value) = get(ENV_PEOPLE_MAX) {
            match parse_finite(&value) {
                Some(parsed) => rules.people_max = parsed,
                None => errors.push(ConfigError::new("people_max", value, "expected number")),
            }
        }

        if let Err(mut bound_errors) = rules.validate() {
            let defaults = FormRules::default();
            rules.people_min = defaults.people_min;
            rules.people_max = defaults.people_max;
            errors.append(&mut bound_errors);
        }

        ConfigParse { rules, errors }
    }

    /// Validate rule constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.people_min > self.people_max {
            errors.push(ConfigError::new(
                "people_min",
                self.people_min.to_string(),
                format!("must be <= people_max ({})", self.people_max),
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the descriptor for one field of a capture.
    #[must_use]
    pub fn constraints_for(&self, id: FieldId, capture: &FieldCapture) -> Constraints {
        match id {
            FieldId::Title => Constraints::new(capture.title.as_str()).required(),
            FieldId::Description => Constraints::new(capture.description.as_str())
                .required()
                .min_length(self.description_min_length),
            FieldId::People => Constraints::new(parse_people(&capture.people_raw))
                .required()
                .min(self.people_min)
                .max(self.people_max),
        }
    }
}

#[inline]
fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

#[inline]
fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
