//! The inline calculator suggestion session.
//!
//! Every edit or cursor move re-runs detection. A detected trigger is
//! resolved once; the resolved value is offered as the only suggestion and,
//! when accepted, inserted right after the `=`.

use std::sync::Arc;

use tracing::debug;

use super::{
    Editor, EditorPosition, Suggestion, SuggestionProvider, TriggerDetector, TriggerInfo, Workspace,
};
use crate::calculator::{Calculator, detect};
use crate::config::CalcConfig;

/// Where a session is in its cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// No trigger before the cursor.
    #[default]
    Idle,
    /// A trigger was detected but not resolved yet.
    Triggered(TriggerInfo),
    /// The trigger resolved to a value that is on offer.
    Resolved {
        trigger: TriggerInfo,
        suggestion: Suggestion,
    },
    /// No candidate of the trigger evaluated.
    Empty(TriggerInfo),
}

impl SessionState {
    pub fn trigger(&self) -> Option<&TriggerInfo> {
        match self {
            Self::Idle => None,
            Self::Triggered(trigger) | Self::Empty(trigger) => Some(trigger),
            Self::Resolved { trigger, .. } => Some(trigger),
        }
    }
}

/// Suggests the value of a `=`-terminated expression.
pub struct InlineCalc {
    calculator: Arc<Calculator>,
    config: CalcConfig,
    state: SessionState,
}

impl InlineCalc {
    pub fn new(calculator: Arc<Calculator>, config: CalcConfig) -> Self {
        Self {
            calculator,
            config,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Insert the accepted value after the trigger and move the cursor past it.
    fn insert(&self, editor: &mut dyn Editor, trigger: &TriggerInfo, item: &Suggestion) {
        let text = item.prefixed(&self.config.insert_prefix);
        let end = trigger.end;

        editor.replace_range(&text, end);
        editor.set_cursor(EditorPosition::new(end.line, end.ch + text.chars().count()));
    }
}

impl TriggerDetector for InlineCalc {
    fn on_trigger(&mut self, cursor: EditorPosition, editor: &dyn Editor) -> Option<TriggerInfo> {
        let text = editor.get_line_substring(cursor.line, 0, cursor.ch);

        let Some(span) = detect(&text) else {
            self.state = SessionState::Idle;
            return None;
        };

        let trigger = TriggerInfo {
            start: EditorPosition::new(cursor.line, span.start),
            end: EditorPosition::new(cursor.line, span.end),
            query: span.query,
        };
        self.state = SessionState::Triggered(trigger.clone());

        Some(trigger)
    }
}

impl SuggestionProvider for InlineCalc {
    fn get_suggestions(&mut self, trigger: &TriggerInfo) -> Vec<Suggestion> {
        match self.calculator.resolve(&trigger.query) {
            Some(value) => {
                let suggestion = Suggestion::new(trigger.query.clone(), value);
                debug!(query = %trigger.query, value = %suggestion.value, "trigger resolved");
                self.state = SessionState::Resolved {
                    trigger: trigger.clone(),
                    suggestion: suggestion.clone(),
                };
                vec![suggestion]
            }
            None => {
                debug!(query = %trigger.query, "no candidate evaluated");
                self.state = SessionState::Empty(trigger.clone());
                Vec::new()
            }
        }
    }

    fn render_suggestion(&self, item: &Suggestion) -> String {
        item.prefixed(&self.config.render_prefix)
    }

    fn select_suggestion(&mut self, item: &Suggestion, workspace: &mut dyn Workspace) {
        let trigger = self.state.trigger().cloned();
        self.close();

        let Some(trigger) = trigger else {
            debug!("suggestion selected without an open trigger");
            return;
        };

        match workspace.active_editor() {
            Some(editor) => self.insert(editor, &trigger, item),
            None => debug!("no active editor, skipping insertion"),
        }
    }

    fn close(&mut self) {
        self.state = SessionState::Idle;
    }
}
