//! Terminal styling.
//!
//! Verse output uses a fixed set of escape sequences so that highlighted and
//! plain renders differ only by the inserted sequences. The sequences are
//! written literally rather than through `colored`, whose reset code differs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bold bright white
pub const ESC_BOLD: &str = "\x1b[1;97m";
pub const ESC_UNDERLINE: &str = "\x1b[4m";
pub const ESC_RESET: &str = "\x1b[m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    /// Apply `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` values on top of `self`.
    pub(crate) fn with_vars(
        self,
        no_color: Option<String>,
        clicolor: Option<String>,
        clicolor_force: Option<String>,
    ) -> Self {
        let mut mode = self;

        // Per no-color.org, presence alone disables color
        if no_color.is_some() {
            mode = Self::Never;
        }

        if clicolor.as_deref() == Some("0") {
            mode = Self::Never;
        }

        if clicolor_force.as_deref() == Some("1") {
            mode = Self::Always;
        }

        mode
    }
}

/// Wraps spans in escape sequences when highlighting is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlighter {
    enabled: bool,
}

impl Highlighter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn bold<D: fmt::Display>(&self, value: D) -> Styled<D> {
        self.styled(ESC_BOLD, value)
    }

    pub fn underline<D: fmt::Display>(&self, value: D) -> Styled<D> {
        self.styled(ESC_UNDERLINE, value)
    }

    fn styled<D: fmt::Display>(&self, open: &'static str, value: D) -> Styled<D> {
        Styled {
            open: self.enabled.then_some(open),
            value,
        }
    }
}

/// A value that displays with an opening sequence and a reset, or bare.
#[derive(Debug, Clone, Copy)]
pub struct Styled<D> {
    open: Option<&'static str>,
    value: D,
}

impl<D: fmt::Display> fmt::Display for Styled<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.open {
            Some(open) => write!(f, "{}{}{}", open, self.value, ESC_RESET),
            None => self.value.fmt(f),
        }
    }
}
