//! Converts one exportable type into an interface declaration.

use tsexport_codegen::{Indent, TypeMapper};
use tsexport_core::{MemberNaming, to_camel_case};
use tsexport_ir::{Member, TypeDef, TypeRegistry};

use crate::{
    TypeScriptTypeMapper,
    ast::{Export, Import, Interface, InterfaceField},
    code_file::CodeFile,
};

/// Emits interface declarations for types in one registry.
///
/// Members are collected by walking from the type up its parent chain:
/// the most-derived level comes first, declaration order within a level.
/// A name declared at two levels appears twice.
pub struct InterfaceEmitter<'a> {
    registry: &'a TypeRegistry,
    mapper: TypeScriptTypeMapper,
    naming: MemberNaming,
    indent: Indent,
}

impl<'a> InterfaceEmitter<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            mapper: TypeScriptTypeMapper,
            naming: MemberNaming::default(),
            indent: Indent::default(),
        }
    }

    pub fn with_naming(mut self, naming: MemberNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Every member across the chain, most-derived level first.
    pub fn chain_members(&self, def: &'a TypeDef) -> impl Iterator<Item = &'a Member> {
        self.registry
            .ancestry(def)
            .flat_map(|level| level.members.iter())
    }

    /// Name written for a member under the configured policy.
    pub fn member_name(&self, member: &Member) -> String {
        match self.naming {
            MemberNaming::Declared => member.name.clone(),
            MemberNaming::Annotated => member
                .annotation
                .as_ref()
                .and_then(|a| a.name.clone())
                .unwrap_or_else(|| to_camel_case(&member.name)),
        }
    }

    /// The interface node for `def`, named `export_name`.
    pub fn interface(&self, def: &'a TypeDef, export_name: &str) -> Interface {
        self.chain_members(def)
            .fold(Interface::new(export_name), |interface, member| {
                let mut field =
                    InterfaceField::new(self.member_name(member), self.mapper.map_type(&member.ty));
                if self.mapper.is_optional(member) {
                    field = field.optional();
                }
                interface.field_with(field)
            })
    }

    /// The whole declaration file: imports, interface, default export.
    pub fn declaration(
        &self,
        def: &'a TypeDef,
        export_name: &str,
        imports: Vec<Import>,
    ) -> CodeFile {
        CodeFile::new()
            .imports(imports)
            .declare(self.interface(def, export_name))
            .export(Export::default_of(export_name))
    }

    /// Render the declaration for `def` without imports.
    pub fn emit(&self, def: &'a TypeDef, export_name: &str) -> String {
        self.declaration(def, export_name, Vec::new())
            .render_with_indent(self.indent)
    }
}
