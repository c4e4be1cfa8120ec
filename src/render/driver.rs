use std::io::Write;

use super::verse::VerseFormatter;
use crate::config::RenderConfig;
use crate::corpus::{Book, Corpus, Cursor, Verse};
use crate::errors::{RenderError, Result};

/// Walks a corpus query and writes every yielded verse.
///
/// In pretty layout a book header is written whenever the book changes,
/// with a blank separator line before every header but the first.
pub struct OutputDriver<'c, W: Write> {
    writer: W,
    config: &'c RenderConfig,
    formatter: VerseFormatter<'c>,
}

impl<'c, W: Write> OutputDriver<'c, W> {
    pub fn new(writer: W, config: &'c RenderConfig) -> Self {
        Self {
            writer,
            config,
            formatter: VerseFormatter::new(config),
        }
    }

    /// Render all verses of `query`. Returns whether anything was printed.
    pub fn run<C: Corpus>(&mut self, corpus: &C, query: &C::Query) -> Result<bool> {
        let mut cursor = Cursor::default();
        let mut last_printed: Option<&Verse> = None;

        while let Some(index) = corpus.next_verse(query, self.config, &mut cursor) {
            let verse = corpus.verse(index).ok_or(RenderError::MissingVerse(index))?;
            let book = corpus
                .book(verse.book)
                .ok_or(RenderError::MissingBook(verse.book))?;

            if self.config.pretty {
                if last_printed.is_none_or(|last| last.book != verse.book) {
                    self.write_book_header(book, last_printed.is_some())?;
                }
                self.formatter.write_pretty(&mut self.writer, verse)?;
            } else {
                self.formatter.write_compact(&mut self.writer, book, verse)?;
            }
            last_printed = Some(verse);
        }

        self.writer.flush()?;
        Ok(last_printed.is_some())
    }

    fn write_book_header(&mut self, book: &Book, separate: bool) -> Result<()> {
        if separate {
            self.writer.write_all(b"\n")?;
        }
        write!(
            self.writer,
            "{}\n\n",
            self.formatter.highlighter().underline(&book.name)
        )?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
