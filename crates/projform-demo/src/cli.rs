#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Flags are parsed by hand.
//! Supports environment variable overrides via `PROJFORM_*` prefix.

use std::env;
use std::process;

use projform::ConfigError;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
projform demo: capture and validate a project entry

USAGE:
    projform-demo [OPTIONS]

With --title, --description and --people all given, submits once and exits
(status 0 when accepted, 2 when rejected). Otherwise prompts for each field
on stdin until EOF or ':q'.

OPTIONS:
    --title=TEXT          Project title (required, non-blank)
    --description=TEXT    Description (required, at least 5 characters)
    --people=N            Number of people (1 to 5)
    --format=FORMAT       Output format: 'plain' (default) or 'json'
    --log-format=FORMAT   Log format on stderr: 'pretty' (default) or 'json'
    --no-alert-wait       Do not wait for a key press after an alert
    --help, -h            Show this help message
    --version, -V         Show version

ENVIRONMENT VARIABLES:
    PROJFORM_FORMAT                   Override --format
    PROJFORM_LOG_FORMAT               Override --log-format
    PROJFORM_LOG                      Log filter (falls back to RUST_LOG)
    PROJFORM_DESCRIPTION_MIN_LENGTH   Minimum description length
    PROJFORM_PEOPLE_MIN               Smallest accepted people count
    PROJFORM_PEOPLE_MAX               Largest accepted people count";

/// How emitted records are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// How log events are formatted on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Opts {
    pub title: Option<String>,
    pub description: Option<String>,
    pub people: Option<String>,
    pub format: OutputFormat,
    pub log_format: LogFormat,
    /// Whether alerts block until a key press.
    pub alert_wait: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse command-line arguments and environment variables, exiting on
    /// `--help`, `--version` or bad input.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(&args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("projform-demo {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("Error: {err}");
                eprintln!("Try --help for usage.");
                process::exit(1);
            }
        }
    }

    /// Parse from explicit arguments and an environment lookup.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse_from<F>(args: &[String], mut get_env: F) -> Result<Command, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut opts = Self {
            alert_wait: true,
            ..Self::default()
        };

        if let Some(val) = get_env("PROJFORM_FORMAT") {
            opts.format = OutputFormat::parse(&val)
                .ok_or_else(|| ConfigError::new("format", val, "expected plain|json"))?;
        }
        if let Some(val) = get_env("PROJFORM_LOG_FORMAT") {
            opts.log_format = LogFormat::parse(&val)
                .ok_or_else(|| ConfigError::new("log_format", val, "expected pretty|json"))?;
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--no-alert-wait" => opts.alert_wait = false,
                other => {
                    if let Some(val) = other.strip_prefix("--title=") {
                        opts.title = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--description=") {
                        opts.description = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--people=") {
                        opts.people = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        opts.format = OutputFormat::parse(val).ok_or_else(|| {
                            ConfigError::new("format", val, "expected plain|json")
                        })?;
                    } else if let Some(val) = other.strip_prefix("--log-format=") {
                        opts.log_format = LogFormat::parse(val).ok_or_else(|| {
                            ConfigError::new("log_format", val, "expected pretty|json")
                        })?;
                    } else {
                        return Err(ConfigError::new("argument", other, "unknown option"));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }

    /// Field values for one-shot mode, when all three were given.
    pub fn one_shot(&self) -> Option<(&str, &str, &str)> {
        match (&self.title, &self.description, &self.people) {
            (Some(t), Some(d), Some(p)) => Some((t.as_str(), d.as_str(), p.as_str())),
            _ => None,
        }
    }
}
