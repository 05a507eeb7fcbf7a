//! Type definitions, members and their annotations.

use std::fmt;

use crate::TypeDescriptor;

/// Identity of a registered type: its namespace-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(String);

impl TypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the id for `name` declared in `namespace` (`App.Models.Person`).
    pub fn qualified(namespace: &str, name: &str) -> Self {
        if namespace.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", namespace, name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Marks a type (and, through inheritance, its subtypes) for export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportAnnotation {
    /// Name to export under instead of the declared name.
    pub name: Option<String>,
}

impl ExportAnnotation {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Explicit output sub-folder for one type. Never inherited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderAnnotation {
    pub folder: String,
}

/// Per-member overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberAnnotation {
    pub name: Option<String>,
    pub optional: bool,
}

/// A member declared directly on one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: TypeDescriptor,
    pub annotation: Option<MemberAnnotation>,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: MemberAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Mark the member optional through its annotation.
    pub fn optional(mut self) -> Self {
        self.annotation.get_or_insert_with(Default::default).optional = true;
        self
    }

    /// Set the annotation's emitted name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.annotation.get_or_insert_with(Default::default).name = Some(name.into());
        self
    }
}

/// One type as seen by the generator.
///
/// The parent is referenced by id and resolved through the registry; a type
/// never owns its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub id: TypeId,
    pub name: String,
    pub namespace: String,
    pub parent: Option<TypeId>,
    /// Members declared at this level only, in declaration order.
    pub members: Vec<Member>,
    pub export: Option<ExportAnnotation>,
    pub folder: Option<FolderAnnotation>,
    pub is_abstract: bool,
}

impl TypeDef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        Self {
            id: TypeId::qualified(&namespace, &name),
            name,
            namespace,
            parent: None,
            members: Vec::new(),
            export: None,
            folder: None,
            is_abstract: false,
        }
    }

    pub fn extends(mut self, parent: impl Into<TypeId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn exported(mut self) -> Self {
        self.export = Some(ExportAnnotation::default());
        self
    }

    pub fn exported_as(mut self, name: impl Into<String>) -> Self {
        self.export = Some(ExportAnnotation::named(name));
        self
    }

    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(FolderAnnotation {
            folder: folder.into(),
        });
        self
    }

    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }
}
