//! In-memory text buffer implementing [`Editor`].

use thiserror::Error;
use tracing::warn;

use crate::suggest::{Editor, EditorPosition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("line {line} out of range (buffer has {lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },
    #[error("column {ch} out of range on line {line} ({len} chars)")]
    ColumnOutOfRange { line: usize, ch: usize, len: usize },
}

/// A document held as lines, with a cursor. Columns count chars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: EditorPosition,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: EditorPosition::default(),
        }
    }
}

impl TextBuffer {
    /// Buffer with the cursor at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            cursor: EditorPosition::default(),
        }
    }

    /// Buffer with the cursor after the last char.
    pub fn with_cursor_at_end(text: &str) -> Self {
        let mut buffer = Self::from_text(text);
        let line = buffer.line_count() - 1;
        buffer.cursor = EditorPosition::new(line, buffer.lines[line].chars().count());
        buffer
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    #[cfg(test)]
    fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Number of lines; never zero.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Insert single-line `text` at `at`.
    pub fn insert(&mut self, at: EditorPosition, text: &str) -> Result<(), BufferError> {
        let lines = self.lines.len();
        let line = self
            .lines
            .get_mut(at.line)
            .ok_or(BufferError::LineOutOfRange {
                line: at.line,
                lines,
            })?;

        let idx = byte_index(line, at.ch).ok_or_else(|| BufferError::ColumnOutOfRange {
            line: at.line,
            ch: at.ch,
            len: line.chars().count(),
        })?;
        line.insert_str(idx, text);
        Ok(())
    }

    /// Insert `text` at the cursor and move the cursor past it, like typing.
    pub fn type_text(&mut self, text: &str) {
        let at = self.cursor;
        match self.insert(at, text) {
            Ok(()) => self.cursor.ch += text.chars().count(),
            Err(err) => warn!(%err, "typing outside the buffer"),
        }
    }
}

impl Editor for TextBuffer {
    fn cursor(&self) -> EditorPosition {
        self.cursor
    }

    fn get_line_substring(&self, line: usize, start_ch: usize, end_ch: usize) -> String {
        self.lines
            .get(line)
            .map(|text| {
                text.chars()
                    .skip(start_ch)
                    .take(end_ch.saturating_sub(start_ch))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn replace_range(&mut self, text: &str, at: EditorPosition) {
        if let Err(err) = self.insert(at, text) {
            warn!(%err, "insertion skipped");
        }
    }

    fn set_cursor(&mut self, at: EditorPosition) {
        let line = at.line.min(self.line_count() - 1);
        let ch = at.ch.min(self.lines[line].chars().count());
        self.cursor = EditorPosition::new(line, ch);
    }
}

/// Byte offset of char column `ch`; the end of the line is a valid column.
fn byte_index(line: &str, ch: usize) -> Option<usize> {
    line.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(line.len()))
        .nth(ch)
}
