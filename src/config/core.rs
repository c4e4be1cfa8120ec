use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::formatting::ColorMode;

/// Columns reserved on every wrapped line: 8 for the tab before the verse
/// body and 2 of margin.
pub const WRAP_RESERVED_COLUMNS: usize = 8 + 2;

/// Smallest width that still leaves room for one column of verse text.
pub const MIN_LINE_LENGTH: usize = WRAP_RESERVED_COLUMNS + 1;

pub fn default_maximum_line_length() -> usize {
    80
}

pub fn default_pager() -> String {
    "less".to_string()
}

/// Flags for a single render call. Immutable for the duration of the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit ANSI bold/underline sequences
    pub highlighting: bool,
    /// Word-wrapped, book-grouped layout instead of one line per verse
    pub pretty: bool,
    /// Extra blank line after each verse in pretty layout
    pub blank_line_after_verse: bool,
    /// Wrap target in columns
    pub maximum_line_length: usize,
    /// Route output through the pager process
    pub paged: bool,
    /// Pager command line, split into words before launching
    pub pager: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            highlighting: false,
            pretty: true,
            blank_line_after_verse: false,
            maximum_line_length: default_maximum_line_length(),
            paged: true,
            pager: default_pager(),
        }
    }
}

impl RenderConfig {
    /// Number of columns available to verse text on one line.
    pub fn wrap_budget(&self) -> usize {
        self.maximum_line_length.saturating_sub(WRAP_RESERVED_COLUMNS)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maximum_line_length < MIN_LINE_LENGTH {
            return Err(ConfigError::invalid(format!(
                "maximum_line_length must be at least {}, got {}",
                MIN_LINE_LENGTH, self.maximum_line_length
            )));
        }
        if self.paged && self.pager.trim().is_empty() {
            return Err(ConfigError::invalid("pager program must not be empty"));
        }
        Ok(())
    }
}

/// `[render]` table of a configuration file. Unset keys leave the
/// underlying value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOverrides {
    pub highlighting: Option<bool>,
    pub pretty: Option<bool>,
    pub blank_line_after_verse: Option<bool>,
    pub maximum_line_length: Option<usize>,
    pub paged: Option<bool>,
    pub pager: Option<String>,
}

impl RenderOverrides {
    pub fn apply_to(&self, config: &mut RenderConfig) {
        if let Some(v) = self.highlighting {
            config.highlighting = v;
        }
        if let Some(v) = self.pretty {
            config.pretty = v;
        }
        if let Some(v) = self.blank_line_after_verse {
            config.blank_line_after_verse = v;
        }
        if let Some(v) = self.maximum_line_length {
            config.maximum_line_length = v;
        }
        if let Some(v) = self.paged {
            config.paged = v;
        }
        if let Some(ref v) = self.pager {
            config.pager = v.clone();
        }
    }
}

/// Root of `.versepager.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VersepagerConfig {
    /// Highlighting policy; resolved against the terminal by the CLI
    pub color: Option<ColorMode>,

    /// Render flag overrides
    pub render: RenderOverrides,
}
