//! Editor suggestion contracts.
//!
//! The host exposes an [`Editor`] per document and a [`Workspace`] that knows
//! which editor is active. Suggestion sources implement [`TriggerDetector`]
//! and [`SuggestionProvider`] and are handed to the host through a
//! [`SuggestRegistry`].

mod item;
pub mod session;

pub use item::Suggestion;
pub use session::{InlineCalc, SessionState};

/// A position in a document. `ch` counts chars from the start of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct EditorPosition {
    pub line: usize,
    pub ch: usize,
}

impl EditorPosition {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// An open suggestion trigger: the span `[start, end)` and its query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerInfo {
    pub start: EditorPosition,
    pub end: EditorPosition,
    pub query: String,
}

/// Text surface of a single document.
pub trait Editor {
    fn cursor(&self) -> EditorPosition;

    /// Chars `[start_ch, end_ch)` of `line`; out-of-range parts are dropped.
    fn get_line_substring(&self, line: usize, start_ch: usize, end_ch: usize) -> String;

    /// Insert `text` at `at`.
    fn replace_range(&mut self, text: &str, at: EditorPosition);

    fn set_cursor(&mut self, at: EditorPosition);
}

/// The host's view of open documents.
pub trait Workspace {
    /// The editor that should receive accepted suggestions, if any.
    fn active_editor(&mut self) -> Option<&mut dyn Editor>;
}

/// Decides whether a suggestion session opens at the cursor.
pub trait TriggerDetector {
    /// Called on every edit or cursor move. `None` closes any open session.
    fn on_trigger(&mut self, cursor: EditorPosition, editor: &dyn Editor) -> Option<TriggerInfo>;
}

/// Produces, renders and applies suggestions for an open trigger.
pub trait SuggestionProvider {
    fn get_suggestions(&mut self, trigger: &TriggerInfo) -> Vec<Suggestion>;

    /// Text shown for `item` in the suggestion list.
    fn render_suggestion(&self, item: &Suggestion) -> String;

    /// Apply `item` after the user accepted it.
    fn select_suggestion(&mut self, item: &Suggestion, workspace: &mut dyn Workspace);

    fn close(&mut self);
}

/// A complete suggestion source.
pub trait EditorSuggest: TriggerDetector + SuggestionProvider {}

impl<T: TriggerDetector + SuggestionProvider> EditorSuggest for T {}

/// Registration point offered by the host.
pub trait SuggestRegistry {
    fn register_editor_suggest(&mut self, suggest: Box<dyn EditorSuggest>);
}
