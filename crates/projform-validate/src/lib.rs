#![forbid(unsafe_code)]

//! Declarative value constraints and the rules that check them.
//!
//! A [`Constraints`] descriptor names a candidate [`Value`] and the optional
//! rules it must satisfy. [`validate`] evaluates it to a plain boolean;
//! [`check`] and [`errors`] report which rules failed.
//!
//! Rules are selected by value kind: length rules only look at text, bound
//! rules only look at numbers, and a rule that does not apply never fails.
//!
//! # Example
//!
//! ```rust
//! use projform_validate::{Constraints, validate};
//!
//! assert!(validate(&Constraints::new("Build a shed").required()));
//! assert!(!validate(&Constraints::new("   ").required()));
//! assert!(validate(&Constraints::new(5.0).min(1.0).max(5.0)));
//! assert!(!validate(&Constraints::new(0.0).min(1.0).max(5.0)));
//! ```

mod constraints;
mod rule;

pub use constraints::{Constraints, Value, check, errors, validate};
pub use rule::{
    ERROR_CODE_MAX, ERROR_CODE_MAX_LENGTH, ERROR_CODE_MIN, ERROR_CODE_MIN_LENGTH,
    ERROR_CODE_REQUIRED, Rule, ValidationError, ValidationResult,
};
