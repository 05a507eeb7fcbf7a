//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Wraps the source content and filename, plus the current path through
/// the manifest (e.g. `["App.Models.Person", "BirthDate"]`), so nested
/// validation can report where it is.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path joined with `::`.
    pub fn path_string(&self) -> String {
        self.path.join("::")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "member in 'App.Models.Person'" or just "type" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of `key = "value"` in the source, pointing at the value.
    pub fn find_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }

    /// Validate that a name is a usable TypeScript identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span("name", name),
            ));
        }
        Ok(())
    }

    /// Validate a name that becomes an interface name in the output.
    pub fn validate_export_name(&self, name: &str, key: &str) -> Result<()> {
        if is_reserved_word(name) {
            return Err(self.source.reserved_word_error(
                name,
                self.context_for("type"),
                self.find_span(key, name),
            ));
        }
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("export"),
                reason,
                self.find_span(key, name),
            ));
        }
        Ok(())
    }

    /// Validate a dotted namespace; every segment must be an identifier.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        if namespace.is_empty() {
            return Ok(());
        }
        for segment in namespace.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    namespace,
                    self.context_for("namespace"),
                    reason,
                    self.find_span("namespace", namespace),
                ));
            }
        }
        Ok(())
    }
}

/// Words that cannot name an interface.
/// Source: ECMAScript reserved words plus TypeScript's predefined type names
pub(crate) const TS_RESERVED_WORDS: &[&str] = &[
    // Reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode reserved words
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield",
    // Predefined type names
    "any", "bigint", "boolean", "never", "number", "object", "string", "symbol", "undefined",
    "unknown",
];

pub(crate) fn is_reserved_word(name: &str) -> bool {
    TS_RESERVED_WORDS.contains(&name)
}

/// Find `key = "value"` (or single-quoted) and return the span of the value.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{} = {}{}{}", key, quote, value, quote);
        if let Some(pos) = src.find(&pattern) {
            // Skip `key = "`
            let start = pos + key.len() + 4;
            return Some(SourceSpan::from((start, value.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is a valid TypeScript identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, numbers, '_' and '$'");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Person").is_none());
        assert!(validate_identifier("birth_date").is_none());
        assert!(validate_identifier("_id").is_none());
        assert!(validate_identifier("$ref").is_none());
        assert!(validate_identifier("Line2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2ndLine").is_some());
        assert!(validate_identifier("first-name").is_some());
        assert!(validate_identifier("App.Person").is_some());
        assert!(validate_identifier("full name").is_some());
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("interface"));
        assert!(is_reserved_word("string"));
        assert!(!is_reserved_word("Person"));
    }

    #[test]
    fn test_find_value_span() {
        let src = "[[types]]\nname = \"Person\"";
        let span = find_value_span(src, "name", "Person").unwrap();
        assert_eq!(span.offset(), 18);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_value_span_single_quotes() {
        let src = "parent = 'App.Entity'";
        let span = find_value_span(src, "parent", "App.Entity").unwrap();
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("name = \"Order\"", "name", "Person").is_none());
    }

    #[test]
    fn test_parse_context_context_for() {
        let ctx = ParseContext::new("", "tsexport.toml");
        assert_eq!(ctx.context_for("type"), "type");

        let nested = ctx.push("App.Models.Person");
        assert_eq!(nested.context_for("member"), "member in 'App.Models.Person'");
    }

    #[test]
    fn test_validate_export_name_reserved() {
        let ctx = ParseContext::new("export = \"interface\"", "tsexport.toml");
        let err = ctx.validate_export_name("interface", "export").unwrap_err();
        assert!(err.to_string().contains("reserved word"));
    }

    #[test]
    fn test_validate_namespace() {
        let ctx = ParseContext::new("", "tsexport.toml");
        assert!(ctx.validate_namespace("App.Models").is_ok());
        assert!(ctx.validate_namespace("").is_ok());
        assert!(ctx.validate_namespace("App..Models").is_err());
    }
}
