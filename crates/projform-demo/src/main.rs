#![forbid(unsafe_code)]

//! projform demo binary entry point.

use std::cell::RefCell;
use std::io::{self, IsTerminal};
use std::process;
use std::rc::Rc;

use projform::FormRules;
use projform_demo::alert::TerminalAlert;
use projform_demo::app::App;
use projform_demo::{cli, logging};

/// Exit status when a one-shot submission is rejected.
const EXIT_REJECTED: i32 = 2;

fn main() {
    let opts = cli::Opts::parse();
    logging::init(opts.log_format);

    let parsed = FormRules::from_env_with_diagnostics();
    for err in &parsed.errors {
        tracing::warn!(%err, "ignoring invalid configuration");
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let alert = TerminalAlert::new(opts.alert_wait);
    let out = Rc::new(RefCell::new(io::stdout()));
    let mut app = App::new(alert, out, opts.format, parsed.rules);

    if let Some((title, description, people)) = opts.one_shot() {
        let accepted = app
            .run_once(title, description, people)
            .is_some_and(|o| o.is_submitted());
        if !accepted {
            process::exit(EXIT_REJECTED);
        }
        return;
    }

    if interactive {
        eprintln!("Enter project details. Empty input keeps the current value, ':q' quits.");
    }
    match app.run_interactive(&mut stdin.lock(), &mut io::stderr()) {
        Ok(accepted) => tracing::info!(accepted, "session finished"),
        Err(e) => {
            eprintln!("Runtime error: {e}");
            process::exit(1);
        }
    }
}
