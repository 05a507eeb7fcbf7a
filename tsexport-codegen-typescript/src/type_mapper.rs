//! TypeScript type mapper implementation.

use tsexport_codegen::TypeMapper;
use tsexport_ir::PrimitiveKind;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_primitive(&self, kind: PrimitiveKind) -> &'static str {
        if kind.is_text() {
            "string"
        } else if kind.is_numeric() {
            "number"
        } else if kind.is_temporal() {
            "Date"
        } else {
            "boolean"
        }
    }

    fn map_nullable(&self, inner: &str) -> String {
        format!("{} | null", inner)
    }

    fn map_sequence(&self, element: &str) -> String {
        // `number | null[]` would bind the suffix to `null` alone
        if element.contains(" | ") {
            format!("({})[]", element)
        } else {
            format!("{}[]", element)
        }
    }

    fn map_unknown(&self) -> &'static str {
        "any"
    }
}

#[cfg(test)]
mod tests {
    use tsexport_ir::TypeDescriptor;

    use super::*;

    #[test]
    fn test_primitive_families() {
        let mapper = TypeScriptTypeMapper;

        let cases = [
            (PrimitiveKind::String, "string"),
            (PrimitiveKind::Char, "string"),
            (PrimitiveKind::Byte, "number"),
            (PrimitiveKind::UInt64, "number"),
            (PrimitiveKind::Single, "number"),
            (PrimitiveKind::Decimal, "number"),
            (PrimitiveKind::Bool, "boolean"),
            (PrimitiveKind::DateTime, "Date"),
            (PrimitiveKind::DateTimeOffset, "Date"),
        ];
        for (kind, expected) in cases {
            assert_eq!(mapper.map_primitive(kind), expected, "{:?}", kind);
        }
    }

    #[test]
    fn test_nullable() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(
            mapper.map_type(&TypeDescriptor::nullable(PrimitiveKind::DateTime)),
            "Date | null"
        );
        assert_eq!(
            mapper.map_type(&TypeDescriptor::nullable(PrimitiveKind::Int32)),
            "number | null"
        );
        assert_eq!(
            mapper.map_type(&TypeDescriptor::nullable_struct("Guid")),
            "any | null"
        );
    }

    #[test]
    fn test_sequences() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(
            mapper.map_type(&TypeDescriptor::sequence(TypeDescriptor::primitive(
                PrimitiveKind::String
            ))),
            "string[]"
        );
        assert_eq!(
            mapper.map_type(&TypeDescriptor::sequence(TypeDescriptor::reference("Address"))),
            "Address[]"
        );
        assert_eq!(
            mapper.map_type(&TypeDescriptor::sequence(TypeDescriptor::sequence(
                TypeDescriptor::primitive(PrimitiveKind::Double)
            ))),
            "number[][]"
        );
    }

    #[test]
    fn test_sequence_of_nullable_is_parenthesized() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(
            mapper.map_type(&TypeDescriptor::sequence(TypeDescriptor::nullable(
                PrimitiveKind::Int32
            ))),
            "(number | null)[]"
        );
    }

    #[test]
    fn test_references_and_fallback() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(mapper.map_type(&TypeDescriptor::reference("Address")), "Address");
        assert_eq!(
            mapper.map_type(&TypeDescriptor::unknown("Dictionary<string, int>")),
            "any"
        );
    }
}
