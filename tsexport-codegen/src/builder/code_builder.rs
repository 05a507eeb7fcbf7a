//! Line-oriented text buffer with an indentation depth.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates lines at the current depth.
///
/// ```
/// use tsexport_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::Spaces(2));
/// builder
///     .push_line("interface Person {")
///     .push_indent()
///     .push_line("name: string;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "interface Person {\n  name: string;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Saturates at depth zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write every fragment of `node`.
    pub fn emit<R: Renderable + ?Sized>(&mut self, node: &R) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent().push_line(&close);
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_not_indented() {
        let mut builder = CodeBuilder::new(Indent::default());
        builder
            .push_indent()
            .push_line("a;")
            .push_blank()
            .push_line("b;");

        assert_eq!(builder.build(), "    a;\n\n    b;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new(Indent::default());
        builder.push_dedent().push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);
        builder.apply_fragment(CodeFragment::block(
            "a {",
            vec![
                CodeFragment::block("b {", vec![CodeFragment::line("c;")], "}"),
                CodeFragment::line("d;"),
            ],
            "}",
        ));

        assert_eq!(builder.build(), "a {\n  b {\n    c;\n  }\n  d;\n}\n");
    }
}
