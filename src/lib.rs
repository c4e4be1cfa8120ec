// Export modules for library usage
pub mod cli;
pub mod config;
pub mod corpus;
pub mod errors;
pub mod formatting;
pub mod pager;
pub mod render;

// Re-export commonly used types
pub use crate::config::{RenderConfig, VersepagerConfig};

pub use crate::corpus::{Book, Corpus, Cursor, MatchRange, MemoryCorpus, Query, Selection, Verse};

pub use crate::errors::{ConfigError, RenderError};

pub use crate::pager::{render_paged, render_with_pager, PagerCommand, PagerSession};

pub use crate::render::{render, render_to, OutputDriver, RenderStatus, VerseFormatter};
