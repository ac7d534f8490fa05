//! Serial dispatch of editor events to registered suggestion sources.

use tracing::debug;

use crate::suggest::{
    Editor, EditorSuggest, Suggestion, SuggestRegistry, TriggerInfo, Workspace,
};

/// Suggestion list currently on screen.
struct OpenSession {
    source: usize,
    trigger: TriggerInfo,
    suggestions: Vec<Suggestion>,
}

/// Holds registered sources and the open suggestion list, if any.
///
/// Every event closes the previous list before the sources are asked again;
/// the first source whose trigger fires owns the new list.
#[derive(Default)]
pub struct SuggestDispatcher {
    sources: Vec<Box<dyn EditorSuggest>>,
    open: Option<OpenSession>,
}

impl SuggestRegistry for SuggestDispatcher {
    fn register_editor_suggest(&mut self, suggest: Box<dyn EditorSuggest>) {
        self.sources.push(suggest);
    }
}

impl SuggestDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Handle an edit or cursor move in `editor`; returns the suggestions now shown.
    pub fn on_editor_event(&mut self, editor: &dyn Editor) -> &[Suggestion] {
        self.dismiss();

        let cursor = editor.cursor();
        for (source, suggest) in self.sources.iter_mut().enumerate() {
            let Some(trigger) = suggest.on_trigger(cursor, editor) else {
                continue;
            };

            let suggestions = suggest.get_suggestions(&trigger);
            if suggestions.is_empty() {
                suggest.close();
            } else {
                self.open = Some(OpenSession {
                    source,
                    trigger,
                    suggestions,
                });
            }
            break;
        }

        self.suggestions()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.open
            .as_ref()
            .map(|open| open.suggestions.as_slice())
            .unwrap_or(&[])
    }

    /// Trigger of the open list.
    pub fn trigger(&self) -> Option<&TriggerInfo> {
        self.open.as_ref().map(|open| &open.trigger)
    }

    /// List entries as the owning source renders them.
    pub fn rendered(&self) -> Vec<String> {
        match &self.open {
            Some(open) => {
                let source = &self.sources[open.source];
                open.suggestions
                    .iter()
                    .map(|item| source.render_suggestion(item))
                    .collect()
            }
            None => Vec::new(),
        }
    }

    /// Accept entry `index` of the open list. Returns `false` if there is no such entry.
    pub fn accept(&mut self, index: usize, workspace: &mut dyn Workspace) -> bool {
        let Some(open) = self.open.take() else {
            return false;
        };

        let source = &mut self.sources[open.source];
        match open.suggestions.get(index) {
            Some(item) => {
                source.select_suggestion(item, workspace);
                true
            }
            None => {
                debug!(index, "no suggestion at index");
                source.close();
                false
            }
        }
    }

    /// Close the open list without accepting anything.
    pub fn dismiss(&mut self) {
        if let Some(open) = self.open.take() {
            self.sources[open.source].close();
        }
    }
}
