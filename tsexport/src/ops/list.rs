//! List operation - exported types and where they go.

use tsexport_codegen_typescript::Generator;
use tsexport_core::to_forward_slashes;
use tsexport_manifest::Manifest;

use crate::reports::{ListEntry, ListReport};

/// Execute the list operation against the manifest's output root.
pub fn list(manifest: &Manifest) -> ListReport {
    let types = Generator::from_manifest(manifest)
        .plan(&manifest.output.root)
        .into_iter()
        .map(|planned| ListEntry {
            id: planned.candidate.def.id.to_string(),
            export_name: planned.candidate.export_name.to_string(),
            path: to_forward_slashes(&planned.location.path),
        })
        .collect();

    ListReport {
        root: to_forward_slashes(&manifest.output.root),
        types,
    }
}
