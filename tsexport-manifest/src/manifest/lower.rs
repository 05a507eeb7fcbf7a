//! Validation of `[[types]]` entries and lowering into a [`TypeRegistry`].

use std::collections::{HashMap, HashSet};

use tsexport_ir::{Member, MemberAnnotation, TypeDef, TypeId, TypeRegistry};

use super::{
    ExportSpec, MemberEntry, ROOT_TYPES, TypeEntry,
    validate::{ParseContext, validate_identifier},
};
use crate::{Result, type_expr::TypeExpr};

/// Validate every type entry and build the registry, in declaration order.
pub(crate) fn build_registry(types: &[TypeEntry], ctx: &ParseContext) -> Result<TypeRegistry> {
    for entry in types {
        validate_entry(entry, &ctx.push(&entry.name))?;
    }

    let ids: Vec<TypeId> = types
        .iter()
        .map(|entry| TypeId::qualified(&entry.namespace, &entry.name))
        .collect();

    let mut seen = HashSet::new();
    for id in &ids {
        if !seen.insert(id) {
            let span = ctx.find_span("name", id.as_str().rsplit('.').next().unwrap_or_default());
            return Err(ctx.source_context().duplicate_type_error(id.as_str(), span));
        }
    }

    let parents = resolve_parents(types, &ids, ctx)?;
    check_cycles(&ids, &parents, ctx)?;

    let classes: HashSet<&str> = types.iter().map(|entry| entry.name.as_str()).collect();
    let mut registry = TypeRegistry::new();
    for (entry, id) in types.iter().zip(&ids) {
        let def = lower_entry(entry, parents.get(id).cloned(), &classes, ctx)?;
        registry
            .register(def)
            .map_err(|e| ctx.source_context().duplicate_type_error(e.0.as_str(), None))?;
    }
    validate_inherited_export_names(&registry, ctx)?;
    Ok(registry)
}

/// A subtype under an unnamed inherited annotation is exported under its
/// own declared name, so that name must be usable as an interface name.
fn validate_inherited_export_names(registry: &TypeRegistry, ctx: &ParseContext) -> Result<()> {
    for def in registry
        .iter()
        .filter(|def| def.export.is_none() && !def.is_abstract)
    {
        let inherited = registry
            .ancestry(def)
            .find_map(|level| level.export.as_ref());
        if inherited.is_some_and(|annotation| annotation.name.is_none()) {
            ctx.push(&def.name).validate_export_name(&def.name, "name")?;
        }
    }
    Ok(())
}

fn validate_entry(entry: &TypeEntry, ctx: &ParseContext) -> Result<()> {
    ctx.validate_name(&entry.name, "type")?;
    ctx.validate_namespace(&entry.namespace)?;

    match &entry.export {
        Some(ExportSpec::Named(name)) => ctx.validate_export_name(name, "export")?,
        Some(ExportSpec::Flag(true)) => ctx.validate_export_name(&entry.name, "name")?,
        _ => {}
    }

    if let Some(folder) = &entry.folder {
        validate_folder(folder, ctx)?;
    }

    let mut names = HashSet::new();
    for member in &entry.members {
        ctx.validate_name(&member.name, "member")?;
        if let Some(ts_name) = &member.ts_name {
            if let Some(reason) = validate_identifier(ts_name) {
                return Err(ctx.source_context().invalid_identifier_error(
                    ts_name,
                    ctx.context_for("ts_name"),
                    reason,
                    ctx.find_span("ts_name", ts_name),
                ));
            }
        }
        if !names.insert(member.name.as_str()) {
            return Err(ctx.source_context().validation_error(
                format!(
                    "member '{}' is declared twice in '{}'",
                    member.name,
                    ctx.path_string()
                ),
                ctx.find_span("name", &member.name),
            ));
        }
    }
    Ok(())
}

/// Folders are relative paths below the output root.
fn validate_folder(folder: &str, ctx: &ParseContext) -> Result<()> {
    let span = ctx.find_span("folder", folder);
    if folder.trim().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("folder cannot be empty", span));
    }
    if folder.starts_with('/') || folder.contains('\\') {
        return Err(ctx.source_context().validation_error(
            format!("folder '{}' must be a relative path using '/'", folder),
            span,
        ));
    }
    if folder
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(ctx.source_context().validation_error(
            format!("folder '{}' must stay inside the output root", folder),
            span,
        ));
    }
    Ok(())
}

/// Map each type to its parent id. Root parents (`object`) map to nothing.
fn resolve_parents(
    types: &[TypeEntry],
    ids: &[TypeId],
    ctx: &ParseContext,
) -> Result<HashMap<TypeId, TypeId>> {
    let known: HashSet<&str> = ids.iter().map(TypeId::as_str).collect();
    let mut parents = HashMap::new();

    for (entry, id) in types.iter().zip(ids) {
        let Some(parent) = entry.parent.as_deref() else {
            continue;
        };
        if ROOT_TYPES.contains(&parent) {
            continue;
        }
        if !known.contains(parent) {
            return Err(ctx.source_context().unknown_parent_error(
                id.as_str(),
                parent,
                ctx.find_span("parent", parent),
            ));
        }
        parents.insert(id.clone(), TypeId::new(parent));
    }
    Ok(parents)
}

fn check_cycles(
    ids: &[TypeId],
    parents: &HashMap<TypeId, TypeId>,
    ctx: &ParseContext,
) -> Result<()> {
    for id in ids {
        let mut current = parents.get(id);
        let mut steps = 0;
        while let Some(parent) = current {
            if parent == id {
                let name = id.as_str().rsplit('.').next().unwrap_or_default();
                return Err(ctx
                    .source_context()
                    .inheritance_cycle_error(id.as_str(), ctx.find_span("name", name)));
            }
            steps += 1;
            if steps > ids.len() {
                // Entered a cycle that does not include `id`; that cycle's
                // own members report it.
                break;
            }
            current = parents.get(parent);
        }
    }
    Ok(())
}

fn lower_entry(
    entry: &TypeEntry,
    parent: Option<TypeId>,
    classes: &HashSet<&str>,
    ctx: &ParseContext,
) -> Result<TypeDef> {
    let mut def = TypeDef::new(entry.namespace.as_str(), entry.name.as_str());
    def.parent = parent;
    def.is_abstract = entry.is_abstract;

    def = match &entry.export {
        Some(ExportSpec::Named(name)) => def.exported_as(name.as_str()),
        Some(ExportSpec::Flag(true)) => def.exported(),
        Some(ExportSpec::Flag(false)) | None => def,
    };

    if let Some(folder) = &entry.folder {
        def = def.in_folder(folder.as_str());
    }

    let member_ctx = ctx.push(&entry.name);
    for member in &entry.members {
        def = def.member(lower_member(member, classes, &member_ctx)?);
    }
    Ok(def)
}

fn lower_member(member: &MemberEntry, classes: &HashSet<&str>, ctx: &ParseContext) -> Result<Member> {
    let ty = TypeExpr::parse(&member.ty)
        .and_then(|expr| expr.lower(classes))
        .map_err(|reason| {
            ctx.source_context().invalid_type_error(
                &member.name,
                &member.ty,
                reason,
                ctx.find_span("type", &member.ty),
            )
        })?;

    let mut lowered = Member::new(member.name.as_str(), ty);
    if member.ts_name.is_some() || member.optional.is_some() {
        lowered = lowered.with_annotation(MemberAnnotation {
            name: member.ts_name.clone(),
            optional: member.optional.unwrap_or(false),
        });
    }
    Ok(lowered)
}
