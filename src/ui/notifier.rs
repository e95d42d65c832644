//! User-facing notifications.
//!
//! One `Notifier` is created per run and passed to whichever command needs
//! to report progress; there is no global lookup.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    /// Strip colors for test runs and dumb terminals.
    pub plain: bool,
}

impl Notifier {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    fn emit(&self, color: &str, tag: &str, msg: impl fmt::Display) {
        if self.plain {
            println!("{} {}", tag, msg);
        } else {
            println!("{}{}{}{} {}", color, BOLD, tag, RESET, msg);
        }
    }

    pub fn info<T: fmt::Display>(&self, msg: T) {
        self.emit(FG_BLUE, "[i]", msg);
    }

    pub fn success<T: fmt::Display>(&self, msg: T) {
        self.emit(FG_GREEN, "[ok]", msg);
    }

    pub fn warning<T: fmt::Display>(&self, msg: T) {
        self.emit(FG_YELLOW, "[!]", msg);
    }

    pub fn error<T: fmt::Display>(&self, msg: T) {
        if self.plain {
            eprintln!("[x] {}", msg);
        } else {
            eprintln!("{}{}[x]{} {}", FG_RED, BOLD, RESET, msg);
        }
    }

    /// Transient progress line for long store operations.
    pub fn progress<T: fmt::Display>(&self, msg: T) {
        self.emit(FG_BLUE, "[..]", msg);
    }
}
