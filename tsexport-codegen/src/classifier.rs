//! Decides which registered types are emitted, and under what name.
//!
//! A type is exportable when it, or the nearest ancestor that has one,
//! carries an export annotation. Exportable types are still skipped when
//! they are abstract or have no members anywhere in their chain.

use std::fmt;

use tracing::debug;
use tsexport_ir::{ExportAnnotation, TypeDef, TypeRegistry};

/// Why an exportable-looking type produced no file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No export annotation anywhere in the chain
    NotExported,
    /// Abstract types only contribute to their subtypes
    Abstract,
    /// Zero members across the whole chain
    NoMembers,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NotExported => "not exported",
            SkipReason::Abstract => "abstract",
            SkipReason::NoMembers => "no members",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type that will be emitted.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub def: &'a TypeDef,
    pub export_name: &'a str,
}

/// Read-only classification over one registry.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> Classifier<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// The annotation that applies to `def`: its own, else the nearest
    /// ancestor's.
    pub fn resolve_export_annotation(&self, def: &'a TypeDef) -> Option<&'a ExportAnnotation> {
        self.registry
            .ancestry(def)
            .find_map(|level| level.export.as_ref())
    }

    pub fn is_exportable(&self, def: &'a TypeDef) -> bool {
        self.resolve_export_annotation(def).is_some()
    }

    /// The annotation's override name if it has one, else the type's own
    /// declared name (never the ancestor's).
    pub fn export_name(&self, def: &'a TypeDef) -> &'a str {
        self.resolve_export_annotation(def)
            .and_then(|annotation| annotation.name.as_deref())
            .unwrap_or(&def.name)
    }

    /// Number of members declared across the whole chain.
    pub fn member_count(&self, def: &'a TypeDef) -> usize {
        self.registry
            .ancestry(def)
            .map(|level| level.members.len())
            .sum()
    }

    /// Classify one type.
    pub fn classify(&self, def: &'a TypeDef) -> Result<Candidate<'a>, SkipReason> {
        if !self.is_exportable(def) {
            return Err(SkipReason::NotExported);
        }
        if def.is_abstract {
            return Err(SkipReason::Abstract);
        }
        if self.member_count(def) == 0 {
            return Err(SkipReason::NoMembers);
        }
        Ok(Candidate {
            def,
            export_name: self.export_name(def),
        })
    }

    /// Every type that will be emitted, in registration order.
    pub fn candidates(&self) -> Vec<Candidate<'a>> {
        self.registry
            .iter()
            .filter_map(|def| match self.classify(def) {
                Ok(candidate) => Some(candidate),
                Err(reason) => {
                    debug!(ty = %def.id, %reason, "skipping type");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tsexport_ir::{Member, PrimitiveKind, TypeDescriptor};

    use super::*;

    fn int(name: &str) -> Member {
        Member::new(name, TypeDescriptor::primitive(PrimitiveKind::Int32))
    }

    fn registry() -> TypeRegistry {
        TypeRegistry::new()
            .with(TypeDef::new("App", "Entity").exported().abstract_type().member(int("Id")))
            .and_then(|r| r.with(TypeDef::new("App.Models", "Person").extends("App.Entity")))
            .and_then(|r| {
                r.with(
                    TypeDef::new("App.Models", "Order")
                        .exported_as("OrderDto")
                        .member(int("Total")),
                )
            })
            .and_then(|r| {
                r.with(TypeDef::new("App.Models", "SpecialOrder").extends("App.Models.Order"))
            })
            .and_then(|r| r.with(TypeDef::new("App.Models", "Internal").member(int("X"))))
            .and_then(|r| r.with(TypeDef::new("App.Models", "Empty").exported()))
            .unwrap()
    }

    fn get<'a>(registry: &'a TypeRegistry, name: &str) -> &'a TypeDef {
        registry.find_by_name(name).unwrap()
    }

    #[test]
    fn test_inherited_annotation() {
        let registry = registry();
        let classifier = Classifier::new(&registry);
        let person = get(&registry, "Person");

        assert!(classifier.is_exportable(person));
        assert_eq!(classifier.export_name(person), "Person");
        assert_eq!(classifier.member_count(person), 1);
    }

    #[test]
    fn test_override_name_is_inherited() {
        let registry = registry();
        let classifier = Classifier::new(&registry);

        assert_eq!(classifier.export_name(get(&registry, "Order")), "OrderDto");
        // The nearest annotation carries a name, so the subtype uses it too.
        assert_eq!(classifier.export_name(get(&registry, "SpecialOrder")), "OrderDto");
    }

    #[test]
    fn test_skip_reasons() {
        let registry = registry();
        let classifier = Classifier::new(&registry);

        assert_eq!(
            classifier.classify(get(&registry, "Internal")).unwrap_err(),
            SkipReason::NotExported
        );
        assert_eq!(
            classifier.classify(get(&registry, "Entity")).unwrap_err(),
            SkipReason::Abstract
        );
        assert_eq!(
            classifier.classify(get(&registry, "Empty")).unwrap_err(),
            SkipReason::NoMembers
        );
    }

    #[test]
    fn test_candidates_in_registration_order() {
        let registry = registry();
        let names: Vec<&str> = Classifier::new(&registry)
            .candidates()
            .iter()
            .map(|c| c.def.name.as_str())
            .collect();
        assert_eq!(names, vec!["Person", "Order", "SpecialOrder"]);
    }

    #[test]
    fn test_nearest_annotation_wins() {
        let registry = TypeRegistry::new()
            .with(TypeDef::new("", "Base").exported_as("BaseDto").member(int("A")))
            .and_then(|r| r.with(TypeDef::new("", "Mid").extends("Base").exported()))
            .and_then(|r| r.with(TypeDef::new("", "Leaf").extends("Mid")))
            .unwrap();
        let classifier = Classifier::new(&registry);

        assert_eq!(classifier.export_name(get(&registry, "Leaf")), "Leaf");
        assert_eq!(classifier.export_name(get(&registry, "Base")), "BaseDto");
    }

    #[test]
    fn test_cyclic_chain_terminates() {
        let registry = TypeRegistry::new()
            .with(TypeDef::new("", "A").extends("B").member(int("X")))
            .and_then(|r| r.with(TypeDef::new("", "B").extends("A")))
            .unwrap();
        let classifier = Classifier::new(&registry);

        assert!(!classifier.is_exportable(get(&registry, "A")));
        assert_eq!(classifier.member_count(get(&registry, "B")), 1);
    }
}
