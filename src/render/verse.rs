use std::fmt;
use std::io::{self, Write};

use super::wrap::write_wrapped;
use crate::config::RenderConfig;
use crate::corpus::{Book, Verse};
use crate::formatting::Highlighter;

/// `chapter:verse`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRef {
    pub chapter: u32,
    pub verse: u32,
}

impl From<&Verse> for VerseRef {
    fn from(verse: &Verse) -> Self {
        Self {
            chapter: verse.chapter,
            verse: verse.verse,
        }
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Writes single verses in either layout.
#[derive(Debug, Clone, Copy)]
pub struct VerseFormatter<'c> {
    config: &'c RenderConfig,
    highlighter: Highlighter,
}

impl<'c> VerseFormatter<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            highlighter: Highlighter::new(config.highlighting),
        }
    }

    pub fn highlighter(&self) -> Highlighter {
        self.highlighter
    }

    /// `chapter:verse<TAB>` followed by the wrapped body.
    pub fn write_pretty<W: Write>(&self, out: &mut W, verse: &Verse) -> io::Result<()> {
        write!(out, "{}\t", self.highlighter.bold(VerseRef::from(verse)))?;
        write_wrapped(out, &verse.text, self.config.wrap_budget())?;

        if self.config.blank_line_after_verse {
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// `Book chapter:verse  text` on one line, text left as is.
    pub fn write_compact<W: Write>(
        &self,
        out: &mut W,
        book: &Book,
        verse: &Verse,
    ) -> io::Result<()> {
        writeln!(
            out,
            "{} {}  {}",
            self.highlighter.underline(&book.name),
            self.highlighter.bold(VerseRef::from(verse)),
            verse.text
        )
    }
}
