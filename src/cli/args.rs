use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::formatting::ColorMode;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "versepager")]
#[command(about = "Render scripture verses to the terminal, optionally through a pager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON corpus with `books` and `verses`
    #[arg(short, long, env = "VERSEPAGER_CORPUS")]
    pub corpus: PathBuf,

    /// Only render verses of this book (case-insensitive)
    #[arg(short, long)]
    pub book: Option<String>,

    /// Open the pager at the first occurrence of this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// One line per verse, no book headers
    #[arg(long, conflicts_with = "pretty")]
    pub compact: bool,

    /// Word-wrapped layout grouped by book
    #[arg(long)]
    pub pretty: bool,

    /// Blank line after each verse in pretty layout
    #[arg(long)]
    pub blank_lines: bool,

    /// Wrap target in columns
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Write straight to stdout
    #[arg(long, conflicts_with = "pager")]
    pub no_pager: bool,

    /// Pager command, e.g. "less -S" (overrides VERSEPAGER_PAGER and PAGER)
    #[arg(long)]
    pub pager: Option<String>,

    /// When to highlight references and book names
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// No highlighting and no pager
    #[arg(long)]
    pub plain: bool,

    /// Config file to use instead of searching for .versepager.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbosity: u8,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
