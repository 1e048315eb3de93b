//! Console rendering of workflow progress.

use std::io::{self, IsTerminal, Write};

use owo_colors::{OwoColorize, Style};

use dnac_core::Reporter;

use crate::cli::{ColorMode, GlobalOpts};

const FAILURE_BANNER: &str = "------------------";
const DIVIDER_WIDTH: usize = 60;

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Writes workflow output as colored status lines.
///
/// In quiet mode only failures are printed.
pub struct ConsoleReporter<W = io::Stdout> {
    out: W,
    color: bool,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn stdout(global: &GlobalOpts) -> Self {
        Self::new(io::stdout(), should_color(&global.color), global.quiet)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool, quiet: bool) -> Self {
        Self { out, color, quiet }
    }

    fn line(&mut self, text: &str, style: Style) {
        let _ = if self.color {
            writeln!(self.out, "{}", text.style(style))
        } else {
            writeln!(self.out, "{text}")
        };
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn divider(&mut self, title: &str) {
        if self.quiet {
            return;
        }
        let _ = writeln!(self.out);
        self.line(
            &format!("{:=^width$}", format!(" {title} "), width = DIVIDER_WIDTH),
            Style::new().cyan().bold(),
        );
    }

    fn progress(&mut self, message: &str) {
        if !self.quiet {
            self.line(message, Style::new().yellow());
        }
    }

    fn success(&mut self, message: &str) {
        if !self.quiet {
            self.line(message, Style::new().green());
        }
    }

    fn failure(&mut self, message: &str) {
        self.line(FAILURE_BANNER, Style::new().red());
        self.line(message, Style::new().red());
    }
}
