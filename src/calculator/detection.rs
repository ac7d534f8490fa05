//! Trigger detection for inline calculations.
//!
//! Decides whether the cursor sits right after a `=`-terminated expression
//! and, if so, which part of the line is the query.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of non-`=` characters followed by a `=` at the very end.
    static ref TRIGGER_PATTERN: Regex = Regex::new(r"([^=]*)=$").unwrap();
}

/// Column range of a recognized trigger on a single line.
///
/// Columns count chars. `end` is the cursor column, immediately after the `=`;
/// `start` is where the query begins. The `=` itself belongs to the span but
/// not to the query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerSpan {
    pub start: usize,
    pub end: usize,
    pub query: String,
}

/// Detect a trigger in the line text that precedes the cursor.
///
/// Returns `None` when the text does not end in `=`. A lone `=` is a valid
/// trigger with an empty query.
pub fn detect(line_up_to_cursor: &str) -> Option<TriggerSpan> {
    let captures = TRIGGER_PATTERN.captures(line_up_to_cursor)?;
    let query = captures.get(1).map_or("", |m| m.as_str());

    let end = line_up_to_cursor.chars().count();
    let start = end - query.chars().count() - 1;

    Some(TriggerSpan {
        start,
        end,
        query: query.to_string(),
    })
}

/// Detect a trigger in `line` with the cursor at char column `cursor_ch`.
///
/// A cursor past the end of the line is treated as being at the end.
pub fn detect_at(line: &str, cursor_ch: usize) -> Option<TriggerSpan> {
    let byte_end = line
        .char_indices()
        .nth(cursor_ch)
        .map_or(line.len(), |(idx, _)| idx);

    detect(&line[..byte_end])
}
