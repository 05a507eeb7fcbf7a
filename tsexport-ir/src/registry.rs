//! Explicit registry of type definitions.

use indexmap::IndexMap;
use thiserror::Error;

use crate::{TypeDef, TypeId};

/// Returned when a second definition is registered under an existing id.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("type '{0}' is already registered")]
pub struct DuplicateType(pub TypeId);

/// All type definitions known to one generation run, in registration order.
///
/// Registration order is the discovery order: it drives emission order and
/// therefore the order of lines in the index file.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<TypeId, TypeDef>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: TypeDef) -> Result<(), DuplicateType> {
        if self.types.contains_key(&def.id) {
            return Err(DuplicateType(def.id));
        }
        self.types.insert(def.id.clone(), def);
        Ok(())
    }

    /// Builder-style registration for tests and hosts assembling registries in code.
    pub fn with(mut self, def: TypeDef) -> Result<Self, DuplicateType> {
        self.register(def)?;
        Ok(self)
    }

    pub fn get(&self, id: &TypeId) -> Option<&TypeDef> {
        self.types.get(id)
    }

    /// Resolve a type's parent. A parent id that is not registered ends the
    /// chain, like the universal root does.
    pub fn parent(&self, def: &TypeDef) -> Option<&TypeDef> {
        def.parent.as_ref().and_then(|id| self.types.get(id))
    }

    /// Walk from `def` (inclusive) up to the root.
    pub fn ancestry<'a>(&'a self, def: &'a TypeDef) -> Ancestry<'a> {
        Ancestry {
            registry: self,
            next: Some(def),
            remaining: self.types.len().max(1),
        }
    }

    /// Find a type by its declared (unqualified) name.
    ///
    /// Returns the first registered match; declared names are not unique
    /// across namespaces.
    pub fn find_by_name(&self, name: &str) -> Option<&TypeDef> {
        self.types.values().find(|def| def.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Iterator over a type and its ancestors, most-derived first.
///
/// Bounded by the registry size, so a cyclic chain still terminates.
pub struct Ancestry<'a> {
    registry: &'a TypeRegistry,
    next: Option<&'a TypeDef>,
    remaining: usize,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a TypeDef;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.registry.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> TypeRegistry {
        TypeRegistry::new()
            .with(TypeDef::new("App", "Entity"))
            .and_then(|r| r.with(TypeDef::new("App", "Person").extends("App.Entity")))
            .and_then(|r| r.with(TypeDef::new("App", "Employee").extends("App.Person")))
            .unwrap()
    }

    #[test]
    fn test_ancestry_order() {
        let registry = chain();
        let employee = registry.get(&TypeId::from("App.Employee")).unwrap();
        let names: Vec<_> = registry.ancestry(employee).map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Employee", "Person", "Entity"]);
    }

    #[test]
    fn test_unregistered_parent_ends_chain() {
        let registry = TypeRegistry::new()
            .with(TypeDef::new("App", "Order").extends("System.Object"))
            .unwrap();
        let order = registry.get(&TypeId::from("App.Order")).unwrap();
        assert_eq!(registry.ancestry(order).count(), 1);
    }

    #[test]
    fn test_cycle_is_bounded() {
        let registry = TypeRegistry::new()
            .with(TypeDef::new("", "A").extends("B"))
            .and_then(|r| r.with(TypeDef::new("", "B").extends("A")))
            .unwrap();
        let a = registry.get(&TypeId::from("A")).unwrap();
        assert_eq!(registry.ancestry(a).count(), 2);
    }

    #[test]
    fn test_duplicate_registration() {
        let err = TypeRegistry::new()
            .with(TypeDef::new("App", "Person"))
            .and_then(|r| r.with(TypeDef::new("App", "Person")))
            .unwrap_err();
        assert_eq!(err, DuplicateType(TypeId::from("App.Person")));
    }

    #[test]
    fn test_find_by_name() {
        let registry = chain();
        assert_eq!(
            registry.find_by_name("Person").map(|d| d.id.as_str()),
            Some("App.Person")
        );
        assert!(registry.find_by_name("Missing").is_none());
    }
}
