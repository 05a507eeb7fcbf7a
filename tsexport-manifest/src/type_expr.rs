//! Member type expressions (`int`, `DateTime?`, `List<Address>`, `string[]`).
//!
//! Parsing is purely syntactic. Lowering to a [`TypeDescriptor`] needs to
//! know which names are registered class types, since `?` only applies to
//! value types.

use std::{collections::HashSet, fmt};

use tsexport_ir::{PrimitiveKind, TypeDescriptor, ValueType};

/// Generic type names treated as homogeneous sequences.
const SEQUENCE_TYPES: &[&str] = &[
    "List",
    "IEnumerable",
    "ICollection",
    "IList",
    "IReadOnlyList",
    "IReadOnlyCollection",
];

/// Host value structs with no dedicated mapping. Bare, they lower to
/// unknown; with `?` they lower to a nullable struct.
const VALUE_STRUCTS: &[&str] = &["Guid", "TimeSpan", "DateOnly", "TimeOnly"];

/// Parsed, not yet lowered, type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named { name: String, args: Vec<TypeExpr> },
    Nullable(Box<TypeExpr>),
    Array(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn parse(src: &str) -> Result<Self, String> {
        let mut parser = Parser { src, pos: 0 };
        let expr = parser.expr()?;
        parser.skip_ws();
        if parser.pos < src.len() {
            return Err(format!("unexpected '{}'", &src[parser.pos..]));
        }
        Ok(expr)
    }

    /// Lower to a descriptor. `classes` holds the declared names of every
    /// registered type.
    pub fn lower(&self, classes: &HashSet<&str>) -> Result<TypeDescriptor, String> {
        match self {
            TypeExpr::Named { name, args } if args.is_empty() => {
                let simple = simple_name(name);
                Ok(match primitive(name) {
                    Some(kind) => TypeDescriptor::Primitive(kind),
                    None if is_value_struct(simple, classes) => TypeDescriptor::unknown(simple),
                    None => TypeDescriptor::Reference(simple.to_string()),
                })
            }
            TypeExpr::Named { name, args }
                if args.len() == 1 && SEQUENCE_TYPES.contains(&simple_name(name)) =>
            {
                Ok(TypeDescriptor::sequence(args[0].lower(classes)?))
            }
            TypeExpr::Named { args, .. } => {
                // Check the arguments anyway so nested mistakes still surface.
                for arg in args {
                    arg.lower(classes)?;
                }
                Ok(TypeDescriptor::unknown(self.to_string()))
            }
            TypeExpr::Array(element) => Ok(TypeDescriptor::sequence(element.lower(classes)?)),
            TypeExpr::Nullable(inner) => match inner.lower(classes)? {
                // `string` is a reference type; `?` on it only annotates nullability.
                TypeDescriptor::Primitive(PrimitiveKind::String) => {
                    Ok(TypeDescriptor::Primitive(PrimitiveKind::String))
                }
                TypeDescriptor::Primitive(kind) => {
                    Ok(TypeDescriptor::Nullable(ValueType::Primitive(kind)))
                }
                TypeDescriptor::Unknown(name) if is_value_struct(&name, classes) => {
                    Ok(TypeDescriptor::Nullable(ValueType::Struct(name)))
                }
                // An unregistered name under `?` can only be a value struct.
                TypeDescriptor::Reference(name) if !classes.contains(name.as_str()) => {
                    Ok(TypeDescriptor::Nullable(ValueType::Struct(name)))
                }
                TypeDescriptor::Nullable(_) => {
                    Err("a nullable type cannot be wrapped in another nullable".to_string())
                }
                _ => Err(
                    "'?' only applies to value types; mark the member optional instead".to_string(),
                ),
            },
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named { name, args } if args.is_empty() => f.write_str(name),
            TypeExpr::Named { name, args } => {
                let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                write!(f, "{}<{}>", name, args.join(", "))
            }
            TypeExpr::Nullable(inner) => write!(f, "{}?", inner),
            TypeExpr::Array(inner) => write!(f, "{}[]", inner),
        }
    }
}

/// Last segment of a dotted name (`System.Int32` -> `Int32`).
fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn is_value_struct(name: &str, classes: &HashSet<&str>) -> bool {
    VALUE_STRUCTS.contains(&name) && !classes.contains(name)
}

fn primitive(name: &str) -> Option<PrimitiveKind> {
    let kind = match simple_name(name) {
        "string" | "String" => PrimitiveKind::String,
        "char" | "Char" => PrimitiveKind::Char,
        "byte" | "Byte" => PrimitiveKind::Byte,
        "sbyte" | "SByte" => PrimitiveKind::SByte,
        "short" | "Int16" => PrimitiveKind::Int16,
        "ushort" | "UInt16" => PrimitiveKind::UInt16,
        "int" | "Int32" => PrimitiveKind::Int32,
        "uint" | "UInt32" => PrimitiveKind::UInt32,
        "long" | "Int64" => PrimitiveKind::Int64,
        "ulong" | "UInt64" => PrimitiveKind::UInt64,
        "float" | "Single" => PrimitiveKind::Single,
        "double" | "Double" => PrimitiveKind::Double,
        "decimal" | "Decimal" => PrimitiveKind::Decimal,
        "bool" | "Boolean" => PrimitiveKind::Bool,
        "DateTime" => PrimitiveKind::DateTime,
        "DateTimeOffset" => PrimitiveKind::DateTimeOffset,
        _ => return None,
    };
    Some(kind)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<TypeExpr, String> {
        let mut expr = self.named()?;
        loop {
            self.skip_ws();
            if self.eat("?") {
                expr = TypeExpr::Nullable(Box::new(expr));
            } else if self.eat("[]") {
                expr = TypeExpr::Array(Box::new(expr));
            } else {
                return Ok(expr);
            }
        }
    }

    fn named(&mut self) -> Result<TypeExpr, String> {
        self.skip_ws();
        let start = self.pos;
        for (i, c) in self.src[start..].char_indices() {
            let valid = if i == 0 {
                c.is_alphabetic() || c == '_'
            } else {
                c.is_alphanumeric() || c == '_' || c == '.'
            };
            if !valid {
                break;
            }
            self.pos = start + i + c.len_utf8();
        }
        if self.pos == start {
            return Err(match self.src[start..].chars().next() {
                Some(c) => format!("expected a type name, found '{}'", c),
                None => "expected a type name".to_string(),
            });
        }
        let name = self.src[start..self.pos].to_string();
        if name.ends_with('.') || name.contains("..") {
            return Err(format!("malformed dotted name '{}'", name));
        }

        let mut args = Vec::new();
        self.skip_ws();
        if self.eat("<") {
            loop {
                args.push(self.expr()?);
                self.skip_ws();
                if self.eat(",") {
                    continue;
                }
                if self.eat(">") {
                    break;
                }
                return Err(format!("unclosed '<' after '{}'", name));
            }
        }
        Ok(TypeExpr::Named { name, args })
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.src[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        let rest = &self.src[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(src: &str) -> Result<TypeDescriptor, String> {
        let classes: HashSet<&str> = ["Address", "Person"].into_iter().collect();
        TypeExpr::parse(src)?.lower(&classes)
    }

    #[test]
    fn test_primitives() {
        assert_eq!(lower("int").unwrap(), TypeDescriptor::primitive(PrimitiveKind::Int32));
        assert_eq!(
            lower("System.Int64").unwrap(),
            TypeDescriptor::primitive(PrimitiveKind::Int64)
        );
        assert_eq!(
            lower("DateTime").unwrap(),
            TypeDescriptor::primitive(PrimitiveKind::DateTime)
        );
    }

    #[test]
    fn test_nullable_value_types() {
        assert_eq!(
            lower("DateTime?").unwrap(),
            TypeDescriptor::nullable(PrimitiveKind::DateTime)
        );
        assert_eq!(lower("Guid?").unwrap(), TypeDescriptor::nullable_struct("Guid"));
    }

    #[test]
    fn test_nullable_string_is_plain_string() {
        let expected = TypeDescriptor::primitive(PrimitiveKind::String);
        assert_eq!(lower("string?").unwrap(), expected);
        assert_eq!(lower("System.String?").unwrap(), expected);
        assert!(!lower("string?").unwrap().is_nullable());
        assert_eq!(
            lower("List<string?>").unwrap(),
            TypeDescriptor::sequence(TypeDescriptor::primitive(PrimitiveKind::String))
        );
    }

    #[test]
    fn test_nullable_rejections() {
        assert!(lower("Address?").is_err());
        assert!(lower("int??").is_err());
        assert!(lower("List<int>?").is_err());
    }

    #[test]
    fn test_sequences() {
        let expected = TypeDescriptor::sequence(TypeDescriptor::reference("Address"));
        assert_eq!(lower("List<Address>").unwrap(), expected);
        assert_eq!(lower("IEnumerable<Address>").unwrap(), expected);
        assert_eq!(lower("Address[]").unwrap(), expected);
        assert_eq!(
            lower("List<int?>").unwrap(),
            TypeDescriptor::sequence(TypeDescriptor::nullable(PrimitiveKind::Int32))
        );
    }

    #[test]
    fn test_references_use_simple_name() {
        assert_eq!(
            lower("App.Models.Address").unwrap(),
            TypeDescriptor::reference("Address")
        );
    }

    #[test]
    fn test_value_structs() {
        assert_eq!(lower("Guid").unwrap(), TypeDescriptor::unknown("Guid"));
        assert_eq!(lower("System.TimeSpan").unwrap(), TypeDescriptor::unknown("TimeSpan"));
        assert_eq!(
            lower("List<Guid>").unwrap(),
            TypeDescriptor::sequence(TypeDescriptor::unknown("Guid"))
        );
    }

    #[test]
    fn test_unsupported_generics_are_unknown() {
        assert_eq!(
            lower("Dictionary<string, int>").unwrap(),
            TypeDescriptor::unknown("Dictionary<string, int>")
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert!(TypeExpr::parse("").is_err());
        assert!(TypeExpr::parse("List<int").is_err());
        assert!(TypeExpr::parse("int int").is_err());
        assert!(TypeExpr::parse("1abc").is_err());
        assert!(TypeExpr::parse("App..Person").is_err());
    }
}
