//! Console reporting for the CLI commands.
//!
//! Progress lines are tagged `[V]` and only shown in verbose mode;
//! diagnostics are tagged `[E]` and always shown.

use std::fmt::Display;

use colored::Colorize;

const INDENT: &str = "    ";

/// Prints tagged progress and diagnostic lines to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a `[V]` line if verbose mode is on.
    pub fn verbose(&self, depth: usize, message: impl Display) {
        if self.verbose {
            println!("{}", format_line(depth, &"[V]".dimmed(), message));
        }
    }

    /// Prints an `[E]` line.
    pub fn error(&self, depth: usize, message: impl Display) {
        println!("{}", format_line(depth, &"[E]".red().bold(), message));
    }
}

fn format_line(depth: usize, tag: &dyn Display, message: impl Display) -> String {
    format!("{}{} {}", INDENT.repeat(depth), tag, message)
}
