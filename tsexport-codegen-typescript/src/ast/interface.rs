//! `interface Name { ... }` declarations.

use tsexport_codegen::builder::{CodeFragment, Renderable};

/// One `name?: type;` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl std::fmt::Display for InterfaceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.optional { "?" } else { "" };
        write!(f, "{}{}: {};", self.name, marker, self.ty)
    }
}

/// A module-private interface. The file's default export publishes it.
///
/// Fields keep insertion order, and a repeated name is written again
/// rather than merged.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn fields(&self) -> &[InterfaceField] {
        &self.fields
    }

    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.field_with(InterfaceField::new(name, ty))
    }

    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("interface {} {{}}", self.name))];
        }

        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::line(field.to_string()))
            .collect();
        vec![CodeFragment::block(
            format!("interface {} {{", self.name),
            body,
            "}",
        )]
    }
}
