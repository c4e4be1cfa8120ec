//! Configuration builders for the CLI
//!
//! Render settings come from four layers, later ones winning:
//! built-in defaults, the config file, the environment, command-line flags.
//! Terminal detection happens here and nowhere else; the renderer only sees
//! the resulting booleans.

use crate::cli::args::Cli;
use crate::config::{pager_from_env, RenderConfig, VersepagerConfig};
use crate::corpus::{MemoryCorpus, Selection};
use crate::errors::ConfigError;
use crate::formatting::ColorMode;

/// Environment variables that affect rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub no_color: Option<String>,
    pub clicolor: Option<String>,
    pub clicolor_force: Option<String>,
    pub pager: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            no_color: std::env::var("NO_COLOR").ok(),
            clicolor: std::env::var("CLICOLOR").ok(),
            clicolor_force: std::env::var("CLICOLOR_FORCE").ok(),
            pager: pager_from_env(),
        }
    }
}

/// Whether a color mode means highlighting on a given stdout
pub fn resolve_highlighting(mode: ColorMode, stdout_is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_is_terminal,
    }
}

/// Effective color mode: file, then environment, then `--color`/`--plain`
pub fn resolve_color_mode(cli: &Cli, file: &VersepagerConfig, env: &EnvOverrides) -> ColorMode {
    if cli.plain {
        return ColorMode::Never;
    }
    if let Some(mode) = cli.color {
        return mode;
    }
    file.color.unwrap_or_default().with_vars(
        env.no_color.clone(),
        env.clicolor.clone(),
        env.clicolor_force.clone(),
    )
}

/// Merge all layers into a validated render configuration.
///
/// Paging is dropped when stdout is not a terminal; a pager would only
/// pass the bytes through.
pub fn build_render_config(
    cli: &Cli,
    file: &VersepagerConfig,
    env: &EnvOverrides,
    stdout_is_terminal: bool,
) -> Result<RenderConfig, ConfigError> {
    let mut config = RenderConfig::default();
    file.render.apply_to(&mut config);

    if let Some(ref pager) = env.pager {
        config.pager = pager.clone();
    }

    if cli.compact {
        config.pretty = false;
    }
    if cli.pretty {
        config.pretty = true;
    }
    if cli.blank_lines {
        config.blank_line_after_verse = true;
    }
    if let Some(width) = cli.width {
        config.maximum_line_length = width;
    }
    if let Some(ref pager) = cli.pager {
        config.pager = pager.clone();
        config.paged = true;
    }
    if cli.no_pager || cli.plain {
        config.paged = false;
    }

    let mode = resolve_color_mode(cli, file, env);
    if file.render.highlighting.is_none() || cli.color.is_some() || cli.plain {
        config.highlighting = resolve_highlighting(mode, stdout_is_terminal);
    }

    if config.paged && !stdout_is_terminal {
        log::debug!("stdout is not a terminal; writing without a pager");
        config.paged = false;
    }

    config.validate()?;
    Ok(config)
}

/// Verses to render: one book, or the whole corpus
pub fn build_selection(
    corpus: &MemoryCorpus,
    book: Option<&str>,
    search: Option<&str>,
) -> Selection {
    let selection = match book {
        Some(name) => Selection::book(corpus, name),
        None => Selection::all(corpus),
    };
    match search {
        Some(search) => selection.with_search(search),
        None => selection,
    }
}
