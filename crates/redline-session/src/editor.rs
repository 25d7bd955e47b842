//! Narrow capability interface to an embedded editing widget.
//!
//! The core never talks to a concrete editor component; it depends on this
//! trait, and embedders implement one adapter per widget. [`BufferEditor`]
//! is the in-memory implementation used by tests and headless embedding.

use redline_core::Selection;
use redline_diff::{merged_text, LineAnnotation};

use crate::session::{EditSession, WorkflowState};

/// What the session needs from an editing widget, and nothing more.
pub trait EditorSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn set_selection(&mut self, selection: Selection);
    fn highlight_ranges(&mut self, annotations: &[LineAnnotation]);
}

/// A plain in-memory editor surface.
#[derive(Debug, Default)]
pub struct BufferEditor {
    text: String,
    selection: Option<Selection>,
    highlights: Vec<LineAnnotation>,
}

impl BufferEditor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: None,
            highlights: Vec::new(),
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn highlights(&self) -> &[LineAnnotation] {
        &self.highlights
    }
}

impl EditorSurface for BufferEditor {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    fn highlight_ranges(&mut self, annotations: &[LineAnnotation]) {
        self.highlights = annotations.to_vec();
    }
}

impl EditSession {
    /// Push the session's current view into an editor surface: the merged
    /// diff with highlights while a diff is ready for review, otherwise the
    /// live document with the active selection restored.
    pub fn render_preview(&self, editor: &mut dyn EditorSurface) {
        match (self.state(), self.artifacts()) {
            (WorkflowState::DiffReady, Some(artifacts)) => {
                editor.set_text(&merged_text(&artifacts.merged));
                editor.highlight_ranges(&artifacts.merged);
            }
            _ => {
                editor.set_text(self.document());
                editor.highlight_ranges(&[]);
                if let Some(selection) = self.selection() {
                    editor.set_selection(selection);
                }
            }
        }
    }
}
