//! Check operation - manifest validation and classification summary.

use std::{collections::HashMap, path::Path};

use tsexport_codegen::Classifier;
use tsexport_codegen_typescript::Generator;
use tsexport_manifest::Manifest;

use crate::reports::{CheckReport, SkippedType};

/// Execute the check operation.
///
/// Parsing already rejected anything invalid; this reports what a run
/// would do with the types and flags paths claimed by more than one type.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let registry = manifest.registry();
    let classifier = Classifier::new(registry);

    let skipped = registry
        .iter()
        .filter_map(|def| {
            classifier.classify(def).err().map(|reason| SkippedType {
                id: def.id.to_string(),
                reason: reason.to_string(),
            })
        })
        .collect();

    let plan = Generator::from_manifest(manifest).plan(&manifest.output.root);
    let mut claims: HashMap<&str, Vec<&str>> = HashMap::new();
    for planned in &plan {
        claims
            .entry(planned.location.relative.as_str())
            .or_default()
            .push(planned.candidate.def.id.as_str());
    }
    let mut warnings: Vec<String> = claims
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(path, ids)| {
            format!(
                "{} is written by {}; the last one wins",
                path,
                ids.join(", ")
            )
        })
        .collect();
    warnings.sort();

    CheckReport {
        config_path: config_path.to_path_buf(),
        type_count: registry.len(),
        exported_count: plan.len(),
        skipped,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_counts_and_skips() {
        let manifest = Manifest::from_str(
            r#"
[output]
root = "out"

[[types]]
name = "Entity"
namespace = "App"
export = true
abstract = true

[[types.members]]
name = "Id"
type = "int"

[[types]]
name = "Person"
namespace = "App.Models"
parent = "App.Entity"

[[types]]
name = "Internal"
namespace = "App.Models"

[[types.members]]
name = "X"
type = "int"
"#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("tsexport.toml"));
        assert_eq!(report.type_count, 3);
        assert_eq!(report.exported_count, 1);
        assert_eq!(
            report.skipped,
            vec![
                SkippedType {
                    id: "App.Entity".to_string(),
                    reason: "abstract".to_string(),
                },
                SkippedType {
                    id: "App.Models.Internal".to_string(),
                    reason: "not exported".to_string(),
                },
            ]
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_collision_warning() {
        let manifest = Manifest::from_str(
            r#"
[output]
root = "out"

[[types]]
name = "Person"
namespace = "App.Models"
export = true

[[types.members]]
name = "A"
type = "int"

[[types]]
name = "Person"
namespace = "Legacy.Models"
export = true

[[types.members]]
name = "B"
type = "int"
"#,
        )
        .unwrap();

        let report = check(&manifest, Path::new("tsexport.toml"));
        assert_eq!(
            report.warnings,
            vec![
                "Models/Person.ts is written by App.Models.Person, Legacy.Models.Person; the last one wins"
            ]
        );
    }
}
