//! Member type descriptors.

/// Built-in scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Char,
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    Bool,
    DateTime,
    DateTimeOffset,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [PrimitiveKind; 16] = [
        PrimitiveKind::String,
        PrimitiveKind::Char,
        PrimitiveKind::Byte,
        PrimitiveKind::SByte,
        PrimitiveKind::Int16,
        PrimitiveKind::UInt16,
        PrimitiveKind::Int32,
        PrimitiveKind::UInt32,
        PrimitiveKind::Int64,
        PrimitiveKind::UInt64,
        PrimitiveKind::Single,
        PrimitiveKind::Double,
        PrimitiveKind::Decimal,
        PrimitiveKind::Bool,
        PrimitiveKind::DateTime,
        PrimitiveKind::DateTimeOffset,
    ];

    /// Canonical keyword used in manifests and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::SByte => "sbyte",
            PrimitiveKind::Int16 => "short",
            PrimitiveKind::UInt16 => "ushort",
            PrimitiveKind::Int32 => "int",
            PrimitiveKind::UInt32 => "uint",
            PrimitiveKind::Int64 => "long",
            PrimitiveKind::UInt64 => "ulong",
            PrimitiveKind::Single => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::DateTime => "DateTime",
            PrimitiveKind::DateTimeOffset => "DateTimeOffset",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, PrimitiveKind::String | PrimitiveKind::Char)
    }

    /// Integer and floating-point kinds of every width, plus `decimal`.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte
                | PrimitiveKind::SByte
                | PrimitiveKind::Int16
                | PrimitiveKind::UInt16
                | PrimitiveKind::Int32
                | PrimitiveKind::UInt32
                | PrimitiveKind::Int64
                | PrimitiveKind::UInt64
                | PrimitiveKind::Single
                | PrimitiveKind::Double
                | PrimitiveKind::Decimal
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::DateTime | PrimitiveKind::DateTimeOffset
        )
    }
}

/// A type that may sit inside a nullable wrapper.
///
/// Only value types can be wrapped, and a nullable wrapper is not itself a
/// value type, so `Nullable(Nullable(_))` has no representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Primitive(PrimitiveKind),
    /// A value struct with no dedicated mapping (e.g. `Guid`).
    Struct(String),
}

/// Declared type of a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Nullable(ValueType),
    /// Homogeneous ordered sequence (array, list or lazily iterated sequence).
    Sequence(Box<TypeDescriptor>),
    /// A class type, referenced by its declared name.
    Reference(String),
    /// A shape the model does not understand; kept verbatim for diagnostics.
    Unknown(String),
}

impl TypeDescriptor {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    pub fn nullable(kind: PrimitiveKind) -> Self {
        Self::Nullable(ValueType::Primitive(kind))
    }

    pub fn nullable_struct(name: impl Into<String>) -> Self {
        Self::Nullable(ValueType::Struct(name.into()))
    }

    pub fn sequence(element: TypeDescriptor) -> Self {
        Self::Sequence(Box::new(element))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    pub fn unknown(raw: impl Into<String>) -> Self {
        Self::Unknown(raw.into())
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Names of class types referenced anywhere in this descriptor.
    pub fn references(&self) -> Vec<&str> {
        match self {
            Self::Reference(name) => vec![name.as_str()],
            Self::Sequence(element) => element.references(),
            _ => Vec::new(),
        }
    }
}
