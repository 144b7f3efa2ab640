#![forbid(unsafe_code)]

//! Blocking terminal alert.

use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal;
use projform::Notifier;

/// Prints the alert on stderr and, on an interactive terminal, waits for a
/// key press before returning.
#[derive(Debug, Clone, Copy)]
pub struct TerminalAlert {
    wait_for_key: bool,
}

impl TerminalAlert {
    pub fn new(wait_for_key: bool) -> Self {
        Self { wait_for_key }
    }

    fn show(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        crossterm::queue!(
            out,
            SetForegroundColor(Color::Red),
            SetAttribute(Attribute::Bold),
            Print("! "),
            Print(message),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n"),
        )?;
        out.flush()?;

        if self.wait_for_key && io::stdin().is_terminal() {
            crossterm::execute!(out, Print("  press any key to continue"))?;
            {
                let _raw = RawModeGuard::enter()?;
                wait_for_key_press()?;
            }
            crossterm::execute!(out, Print("\n"))?;
        }
        Ok(())
    }
}

impl Notifier for TerminalAlert {
    fn notify(&mut self, message: &str) {
        if let Err(err) = self.show(&mut io::stderr(), message) {
            tracing::error!(%err, "failed to show alert");
        }
    }
}

/// Raw mode for the lifetime of the guard.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn wait_for_key_press() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(());
        }
    }
}
