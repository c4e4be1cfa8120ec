//! Verse corpus seam.
//!
//! Rendering never owns verse data. It walks a [`Corpus`] through a
//! [`Cursor`] it creates per call and resolves each yielded index back to a
//! [`Verse`] and its [`Book`]. [`MemoryCorpus`] is a plain in-memory
//! implementation loaded from JSON, selecting verses by index ranges.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::BufReader;
use std::path::Path;

use crate::config::RenderConfig;
use crate::errors::ConfigError;

/// One addressable verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Number of the owning book
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
    /// Single line of space-separated words
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub number: u32,
    pub name: String,
}

/// Inclusive range of verse indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(index: usize) -> Self {
        Self::new(index, index)
    }

    /// True if `other` overlaps or directly follows this range
    fn touches(&self, other: &MatchRange) -> bool {
        other.start <= self.end.saturating_add(1) && self.start <= other.end.saturating_add(1)
    }

    fn merge(&self, other: &MatchRange) -> MatchRange {
        MatchRange::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// Iteration state for one render call.
///
/// `matches[0]` is the range being walked and `matches[1]` the lookahead.
/// `next_match` counts how many of the query's ranges have been taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub current: usize,
    pub next_match: usize,
    pub matches: [Option<MatchRange>; 2],
}

/// A caller's request for verses.
pub trait Query {
    /// Text the pager should jump to, if any
    fn search(&self) -> Option<&str>;
}

/// Read-only verse source with its own iteration rules.
pub trait Corpus {
    type Query: Query;

    /// Next verse index for `query`, or `None` once exhausted.
    fn next_verse(
        &self,
        query: &Self::Query,
        config: &RenderConfig,
        cursor: &mut Cursor,
    ) -> Option<usize>;

    fn verse(&self, index: usize) -> Option<&Verse>;

    fn book(&self, number: u32) -> Option<&Book>;
}

/// Verses selected by index ranges, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<MatchRange>,
    search: Option<String>,
}

impl Selection {
    pub fn new(ranges: Vec<MatchRange>) -> Self {
        Self {
            ranges,
            search: None,
        }
    }

    /// Every verse in the corpus
    pub fn all(corpus: &MemoryCorpus) -> Self {
        match corpus.verses.len() {
            0 => Self::default(),
            len => Self::new(vec![MatchRange::new(0, len - 1)]),
        }
    }

    /// Every verse of the book whose name matches `name`, ignoring case.
    /// Unknown names select nothing.
    pub fn book(corpus: &MemoryCorpus, name: &str) -> Self {
        let Some(number) = corpus
            .books
            .iter()
            .find(|book| book.name.eq_ignore_ascii_case(name.trim()))
            .map(|book| book.number)
        else {
            return Self::default();
        };

        let mut ranges: Vec<MatchRange> = Vec::new();
        for (index, verse) in corpus.verses.iter().enumerate() {
            if verse.book != number {
                continue;
            }
            match ranges.last_mut() {
                Some(last) if last.end + 1 == index => last.end = index,
                _ => ranges.push(MatchRange::single(index)),
            }
        }
        Self::new(ranges)
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn ranges(&self) -> &[MatchRange] {
        &self.ranges
    }
}

impl Query for Selection {
    fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Books and verses held in memory, deserialized from JSON:
///
/// ```json
/// {
///   "books": [{ "number": 1, "name": "Genesis" }],
///   "verses": [{ "book": 1, "chapter": 1, "verse": 1, "text": "..." }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCorpus {
    pub books: Vec<Book>,
    pub verses: Vec<Verse>,
}

impl MemoryCorpus {
    pub fn new(books: Vec<Book>, verses: Vec<Verse>) -> Self {
        Self { books, verses }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = fs::File::open(path).map_err(|e| ConfigError::read(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Corpus {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Top up empty cursor slots from the query, folding touching ranges
    /// into the active one so no verse is visited twice.
    fn fill_matches(&self, query: &Selection, cursor: &mut Cursor) {
        let take = |cursor: &mut Cursor| {
            let range = query.ranges.get(cursor.next_match).copied();
            if range.is_some() {
                cursor.next_match += 1;
            }
            range
        };

        if cursor.matches[0].is_none() {
            cursor.matches[0] = take(cursor);
        }
        if cursor.matches[1].is_none() {
            cursor.matches[1] = take(cursor);
        }

        while let [Some(active), Some(next)] = cursor.matches {
            if !active.touches(&next) {
                break;
            }
            cursor.matches[0] = Some(active.merge(&next));
            cursor.matches[1] = take(cursor);
        }
    }
}

impl Corpus for MemoryCorpus {
    type Query = Selection;

    fn next_verse(
        &self,
        query: &Selection,
        _config: &RenderConfig,
        cursor: &mut Cursor,
    ) -> Option<usize> {
        loop {
            self.fill_matches(query, cursor);
            let active = cursor.matches[0]?;

            cursor.current = cursor.current.max(active.start);
            if cursor.current <= active.end && cursor.current < self.verses.len() {
                let index = cursor.current;
                cursor.current += 1;
                return Some(index);
            }

            cursor.matches = [cursor.matches[1], None];
        }
    }

    fn verse(&self, index: usize) -> Option<&Verse> {
        self.verses.get(index)
    }

    fn book(&self, number: u32) -> Option<&Book> {
        self.books.iter().find(|book| book.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn verse(book: u32, chapter: u32, number: u32) -> Verse {
        Verse {
            book,
            chapter,
            verse: number,
            text: format!("text {}:{}", chapter, number),
        }
    }

    fn corpus() -> MemoryCorpus {
        MemoryCorpus::new(
            vec![
                Book {
                    number: 1,
                    name: "Genesis".into(),
                },
                Book {
                    number: 2,
                    name: "Exodus".into(),
                },
            ],
            vec![
                verse(1, 1, 1),
                verse(1, 1, 2),
                verse(1, 2, 1),
                verse(2, 1, 1),
                verse(2, 1, 2),
            ],
        )
    }

    fn collect(corpus: &MemoryCorpus, query: &Selection) -> Vec<usize> {
        let config = RenderConfig::default();
        let mut cursor = Cursor::default();
        std::iter::from_fn(|| corpus.next_verse(query, &config, &mut cursor)).collect()
    }

    #[test]
    fn test_all_visits_every_verse_in_order() {
        let corpus = corpus();
        assert_eq!(collect(&corpus, &Selection::all(&corpus)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_corpus_yields_nothing() {
        let corpus = MemoryCorpus::default();
        assert!(collect(&corpus, &Selection::all(&corpus)).is_empty());
    }

    #[test]
    fn test_book_selection_ignores_case() {
        let corpus = corpus();
        assert_eq!(collect(&corpus, &Selection::book(&corpus, "exodus")), vec![3, 4]);
        assert!(collect(&corpus, &Selection::book(&corpus, "Leviticus")).is_empty());
    }

    #[test]
    fn test_overlapping_ranges_do_not_repeat() {
        let corpus = corpus();
        let query = Selection::new(vec![
            MatchRange::new(0, 2),
            MatchRange::new(1, 3),
            MatchRange::single(4),
        ]);
        assert_eq!(collect(&corpus, &query), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_disjoint_ranges_skip_gaps() {
        let corpus = corpus();
        let query = Selection::new(vec![MatchRange::single(0), MatchRange::new(3, 4)]);
        assert_eq!(collect(&corpus, &query), vec![0, 3, 4]);
    }

    #[test]
    fn test_ranges_past_the_end_are_clamped() {
        let corpus = corpus();
        let query = Selection::new(vec![MatchRange::new(3, 99), MatchRange::new(50, 60)]);
        assert_eq!(collect(&corpus, &query), vec![3, 4]);
    }

    #[test]
    fn test_ranges_already_passed_are_skipped() {
        let corpus = corpus();
        let query = Selection::new(vec![MatchRange::new(2, 3), MatchRange::single(0)]);
        assert_eq!(collect(&corpus, &query), vec![2, 3]);
    }

    #[test]
    fn test_cursor_is_exhausted_after_last_verse() {
        let corpus = corpus();
        let query = Selection::new(vec![MatchRange::single(1)]);
        let config = RenderConfig::default();
        let mut cursor = Cursor::default();

        assert_eq!(corpus.next_verse(&query, &config, &mut cursor), Some(1));
        assert_eq!(corpus.next_verse(&query, &config, &mut cursor), None);
        assert_eq!(corpus.next_verse(&query, &config, &mut cursor), None);
    }

    #[test]
    fn test_empty_search_is_no_search() {
        let corpus = corpus();
        assert_eq!(Selection::all(&corpus).with_search("").search(), None);
        assert_eq!(
            Selection::all(&corpus).with_search("light").search(),
            Some("light")
        );
    }

    #[test]
    fn test_lookup_by_book_number() {
        let corpus = corpus();
        assert_eq!(corpus.book(2).map(|b| b.name.as_str()), Some("Exodus"));
        assert!(corpus.book(3).is_none());
        assert!(corpus.verse(5).is_none());
    }

    #[test]
    fn test_load_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(
            &path,
            r#"{"books":[{"number":1,"name":"Genesis"}],
                "verses":[{"book":1,"chapter":1,"verse":1,"text":"In the beginning"}]}"#,
        )
        .unwrap();

        let loaded = MemoryCorpus::from_path(&path).unwrap();
        assert_eq!(loaded.books.len(), 1);
        assert_eq!(loaded.verses[0].text, "In the beginning");
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(&path, "{").unwrap();

        assert!(matches!(
            MemoryCorpus::from_path(&path),
            Err(ConfigError::Corpus { .. })
        ));
    }
}
