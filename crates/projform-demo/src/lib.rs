#![forbid(unsafe_code)]

//! Terminal front end for `projform`.
//!
//! Reads the three project fields from flags or stdin prompts, submits them
//! through a bound form and prints accepted records on stdout.

pub mod alert;
pub mod app;
pub mod cli;
pub mod logging;
