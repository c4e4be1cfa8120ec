//! Verse rendering.
//!
//! [`render`] is the entry point: it either pages the output through an
//! external viewer (see [`crate::pager`]) or writes it straight to stdout.
//! Both paths share [`render_to`], which drives an [`OutputDriver`] over a
//! buffered writer.
//!
//! Layouts:
//!
//! - pretty: a header per run of same-book verses, each verse as
//!   `chapter:verse<TAB>body` with the body word-wrapped
//! - compact: `Book chapter:verse  text`, one line per verse

pub mod driver;
pub mod verse;
pub mod wrap;

pub use driver::OutputDriver;
pub use verse::{VerseFormatter, VerseRef};
pub use wrap::write_wrapped;

use std::io::{self, BufWriter, Write};

use crate::config::RenderConfig;
use crate::corpus::Corpus;
use crate::errors::{RenderError, Result};
use crate::pager;

/// Outcome of a render call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// At least one verse was written
    Printed,
    /// The query matched nothing
    Empty,
}

impl RenderStatus {
    pub fn from_printed(printed: bool) -> Self {
        if printed {
            Self::Printed
        } else {
            Self::Empty
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Render `query` according to `config`, paged or straight to stdout.
pub fn render<C: Corpus>(
    corpus: &C,
    query: &C::Query,
    config: &RenderConfig,
) -> Result<RenderStatus> {
    if config.paged {
        return pager::render_paged(corpus, query, config);
    }
    render_to(io::stdout().lock(), corpus, query, config)
}

/// Render `query` into `writer`.
///
/// A reader that hangs up early (a pager quit before the end, `| head`) is
/// not an error; rendering stops and the call reports
/// [`RenderStatus::Printed`].
pub fn render_to<W: Write, C: Corpus>(
    writer: W,
    corpus: &C,
    query: &C::Query,
    config: &RenderConfig,
) -> Result<RenderStatus> {
    let mut driver = OutputDriver::new(BufWriter::new(writer), config);

    match driver.run(corpus, query) {
        Ok(printed) => Ok(RenderStatus::from_printed(printed)),
        Err(RenderError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed by reader: {}", e);
            Ok(RenderStatus::Printed)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Book, MemoryCorpus, Selection, Verse};

    fn corpus() -> MemoryCorpus {
        MemoryCorpus::new(
            vec![Book {
                number: 43,
                name: "John".into(),
            }],
            vec![Verse {
                book: 43,
                chapter: 11,
                verse: 35,
                text: "Jesus wept.".into(),
            }],
        )
    }

    /// Accepts nothing, like a pipe whose reader has gone away
    struct HungUp;

    impl Write for HungUp {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("device full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("device full"))
        }
    }

    #[test]
    fn test_render_to_reports_printed() {
        let corpus = corpus();
        let mut out = Vec::new();
        let status = render_to(&mut out, &corpus, &Selection::all(&corpus), &Default::default());

        assert_eq!(status.unwrap(), RenderStatus::Printed);
        assert_eq!(String::from_utf8(out).unwrap(), "John\n\n11:35\tJesus wept.\n");
    }

    #[test]
    fn test_render_to_reports_empty() {
        let corpus = corpus();
        let mut out = Vec::new();
        let status = render_to(&mut out, &corpus, &Selection::default(), &Default::default());

        assert!(status.unwrap().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_broken_pipe_is_not_an_error() {
        let corpus = corpus();
        let status = render_to(HungUp, &corpus, &Selection::all(&corpus), &Default::default());
        assert_eq!(status.unwrap(), RenderStatus::Printed);
    }

    #[test]
    fn test_other_write_errors_propagate() {
        let corpus = corpus();
        let status = render_to(Full, &corpus, &Selection::all(&corpus), &Default::default());
        assert!(matches!(status, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_direct_render_of_empty_query() {
        let corpus = corpus();
        let config = RenderConfig {
            paged: false,
            ..Default::default()
        };
        let status = render(&corpus, &Selection::default(), &config).unwrap();
        assert_eq!(status, RenderStatus::Empty);
    }
}
