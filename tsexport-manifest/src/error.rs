use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn reserved_word_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedWord {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn duplicate_type_error(&self, id: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            span,
            id: id.into(),
        })
    }

    pub fn unknown_parent_error(
        &self,
        ty: impl Into<String>,
        parent: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownParent {
            src: self.named_source(),
            span,
            ty: ty.into(),
            parent: parent.into(),
        })
    }

    pub fn inheritance_cycle_error(
        &self,
        ty: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InheritanceCycle {
            src: self.named_source(),
            span,
            ty: ty.into(),
        })
    }

    pub fn invalid_type_error(
        &self,
        member: impl Into<String>,
        expr: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidType {
            src: self.named_source(),
            span,
            member: member.into(),
            expr: expr.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'tsexport init' to create a starter manifest"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tsexport.toml")]
    #[diagnostic(code(tsexport::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(tsexport::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a TypeScript reserved word")]
    #[diagnostic(
        code(tsexport::reserved_word),
        help("export the {context} under another name, e.g. export = \"{name}Dto\"")
    )]
    ReservedWord {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(tsexport::invalid_identifier),
        help("{reason}. Use only letters, numbers, '_' and '$', not starting with a number.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("type '{id}' is declared more than once")]
    #[diagnostic(
        code(tsexport::duplicate_type),
        help("types are identified by namespace + name; rename one or move it to another namespace")
    )]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("second declaration")]
        span: Option<SourceSpan>,
        id: String,
    },

    #[error("type '{ty}' extends unknown type '{parent}'")]
    #[diagnostic(
        code(tsexport::unknown_parent),
        help("parents are referenced by their qualified id, e.g. \"App.Models.Entity\"")
    )]
    UnknownParent {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared in this manifest")]
        span: Option<SourceSpan>,
        ty: String,
        parent: String,
    },

    #[error("type '{ty}' inherits from itself")]
    #[diagnostic(code(tsexport::inheritance_cycle))]
    InheritanceCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        ty: String,
    },

    #[error("invalid type '{expr}' for member '{member}'")]
    #[diagnostic(code(tsexport::invalid_type), help("{reason}"))]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        member: String,
        expr: String,
        reason: String,
    },
}
