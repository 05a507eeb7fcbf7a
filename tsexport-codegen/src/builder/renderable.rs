//! Nodes describe themselves as fragments; only [`CodeBuilder`] knows
//! about indentation and line breaks.
//!
//! [`CodeBuilder`]: super::CodeBuilder

use super::{CodeBuilder, Indent};

/// One piece of a declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A line at the current depth; the newline is added when rendered.
    Line(String),
    /// `header`, then `body` one level deeper, then `close` back at the
    /// header's depth.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }
}

/// Anything that can be written into a [`CodeBuilder`].
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render on its own with the given indentation.
    fn render_with(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.build()
    }
}
