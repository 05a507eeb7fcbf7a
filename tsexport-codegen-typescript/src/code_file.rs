//! Layout of one generated `.ts` file.

use tsexport_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// Imports, then at most one declaration, then exports.
///
/// A blank line separates the imports from what follows. Exports come
/// directly after the declaration, so a declaration file ends in `}`
/// followed by `export default Name;`.
///
/// ```ignore
/// let text = CodeFile::new()
///     .import(Import::type_default("Address", "./Address"))
///     .declare(Interface::new("Person").field("home", "Address"))
///     .export(Export::default_of("Person"))
///     .render();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    declaration: Vec<CodeFragment>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Set the file's declaration, replacing any previous one.
    pub fn declare(mut self, node: impl Renderable) -> Self {
        self.declaration = node.to_fragments();
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render with four-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::default())
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut out = CodeBuilder::new(indent);

        self.imports.iter().for_each(|import| {
            out.emit(import);
        });
        if !self.imports.is_empty() && !(self.declaration.is_empty() && self.exports.is_empty()) {
            out.push_blank();
        }

        self.declaration
            .iter()
            .cloned()
            .for_each(|fragment| out.apply_fragment(fragment));
        self.exports.iter().for_each(|export| {
            out.emit(export);
        });

        out.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Interface;

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_declaration_then_default_export() {
        let code = CodeFile::new()
            .declare(Interface::new("Person").field("name", "string"))
            .export(Export::default_of("Person"))
            .render();

        assert_eq!(
            code,
            "interface Person {\n    name: string;\n}\nexport default Person;\n"
        );
    }

    #[test]
    fn test_imports_then_declaration() {
        let code = CodeFile::new()
            .import(Import::type_default("Address", "./Address"))
            .declare(Interface::new("Person").field("home", "Address"))
            .render_with_indent(Indent::Spaces(2));

        assert_eq!(
            code,
            "import type Address from './Address';\n\ninterface Person {\n  home: Address;\n}\n"
        );
    }

    #[test]
    fn test_exports_only() {
        let code = CodeFile::new()
            .export(Export::default_type_from("Person", "./Models/Person"))
            .export(Export::default_type_from("Order", "./Models/Order"))
            .render();

        assert_eq!(
            code,
            "export type { default as Person } from './Models/Person';\n\
             export type { default as Order } from './Models/Order';\n"
        );
    }

    #[test]
    fn test_declare_replaces_previous() {
        let code = CodeFile::new()
            .declare(Interface::new("A").field("a", "number"))
            .declare(Interface::new("B").field("b", "number"))
            .render();

        assert_eq!(code, "interface B {\n    b: number;\n}\n");
    }
}
