//! In-memory host: a text buffer, a workspace and an event dispatcher.
//!
//! Enough of an editor to drive suggestion sources end to end without a
//! real application.

mod buffer;
mod registry;

pub use buffer::{BufferError, TextBuffer};
pub use registry::SuggestDispatcher;

use crate::suggest::{Editor, Workspace};

/// Workspace with at most one open editor.
#[derive(Clone, Debug, Default)]
pub struct MemoryWorkspace {
    active: Option<TextBuffer>,
}

impl MemoryWorkspace {
    pub fn with_editor(buffer: TextBuffer) -> Self {
        Self {
            active: Some(buffer),
        }
    }

    pub fn editor(&self) -> Option<&TextBuffer> {
        self.active.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut TextBuffer> {
        self.active.as_mut()
    }

    /// Close the active editor, returning it.
    pub fn close_editor(&mut self) -> Option<TextBuffer> {
        self.active.take()
    }
}

impl Workspace for MemoryWorkspace {
    fn active_editor(&mut self) -> Option<&mut dyn Editor> {
        self.active.as_mut().map(|buffer| buffer as &mut dyn Editor)
    }
}
