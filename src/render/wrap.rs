//! Greedy word wrapping for pretty verse bodies.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Separator written before a continuation line
pub const CONTINUATION: &[u8] = b"\n\t";

/// Write `text` wrapped to `budget` columns, continuation lines indented by
/// one tab, terminated by a newline.
///
/// Words are split on ASCII spaces only and never broken. Widths are display
/// columns as reported by `unicode-width`, not bytes, so they match byte
/// counts only for ASCII text. A word wider than the budget gets a line to
/// itself; it is never preceded by an empty line.
pub fn write_wrapped<W: Write>(out: &mut W, text: &str, budget: usize) -> io::Result<()> {
    let mut column = 0;

    for word in text.split(' ').filter(|word| !word.is_empty()) {
        let width = word.width();
        let separator = usize::from(column > 0);

        if column > 0 && column + separator + width > budget {
            out.write_all(CONTINUATION)?;
            column = 0;
        }

        if column > 0 {
            out.write_all(b" ")?;
            column += 1;
        }

        out.write_all(word.as_bytes())?;
        column += width;
    }

    out.write_all(b"\n")
}
