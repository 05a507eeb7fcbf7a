//! Where reports go.
//!
//! Reports call the semantic methods on [`Output`]; every one of them
//! becomes a [`Line`], and the implementation only decides where lines go.

use std::fmt;

/// One rendered line of report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Section(&'a str),
    KeyValue(&'a str, &'a str),
    Item(&'a str),
    Added(&'a str),
    Removed(&'a str),
    Warning(&'a str),
    Divider(&'a str),
    Text(&'a str),
    Blank,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Section(name) => write!(f, "{name}:"),
            Line::KeyValue(key, value) => write!(f, "{key}: {value}"),
            Line::Item(text) | Line::Removed(text) => write!(f, "  - {text}"),
            Line::Added(text) => write!(f, "  + {text}"),
            Line::Warning(msg) => write!(f, "warning: {msg}"),
            Line::Divider(label) => write!(f, "── {label} ──"),
            Line::Text(text) => f.write_str(text),
            Line::Blank => Ok(()),
        }
    }
}

pub trait Output {
    fn write_line(&mut self, line: Line<'_>);

    fn section(&mut self, name: &str) {
        self.write_line(Line::Section(name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.write_line(Line::KeyValue(key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.write_line(Line::Item(text));
    }

    /// A file that was or would be written.
    fn added_item(&mut self, text: &str) {
        self.write_line(Line::Added(text));
    }

    /// A file or directory that was or would be deleted.
    fn removed_item(&mut self, text: &str) {
        self.write_line(Line::Removed(text));
    }

    fn warning(&mut self, msg: &str) {
        self.write_line(Line::Warning(msg));
    }

    fn divider(&mut self, label: &str) {
        self.write_line(Line::Divider(label));
    }

    /// Multi-line text, such as a file preview, written as is.
    fn preformatted(&mut self, text: &str) {
        self.write_line(Line::Text(text));
    }

    fn newline(&mut self) {
        self.write_line(Line::Blank);
    }
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Writes to stdout, except warnings which go to stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&mut self, line: Line<'_>) {
        match line {
            Line::Warning(_) => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

/// Collects rendered lines, for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn write_line(&mut self, line: Line<'_>) {
        self.lines.push(line.to_string());
    }
}
