//! TypeScript declaration generator.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use eyre::Result;
use tracing::{debug, info, warn};
use tsexport_codegen::{
    Candidate, Classifier, FolderMap, Indent, Location, OutputPlanner, Synchronizer,
    generation::relative_module_path,
    language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile},
};
use tsexport_core::{GeneratedFile, LineEnding, MemberNaming};
use tsexport_ir::TypeRegistry;
use tsexport_manifest::{Manifest, OutputConfig};

use crate::{
    ast::Import,
    emitter::InterfaceEmitter,
    files::{DeclarationTs, INDEX_FILE, IndexTs},
};

const EXTENSION: &str = "ts";

/// Options that shape the emitted files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub generate_index: bool,
    pub member_naming: MemberNaming,
    pub reference_imports: bool,
    pub indent: Indent,
    pub line_ending: LineEnding,
}

impl From<&OutputConfig> for GeneratorOptions {
    fn from(output: &OutputConfig) -> Self {
        Self {
            generate_index: output.generate_index,
            member_naming: output.member_naming,
            reference_imports: output.reference_imports,
            indent: Indent::Spaces(output.indent),
            line_ending: output.line_ending,
        }
    }
}

/// A candidate together with where it goes.
#[derive(Debug, Clone)]
pub struct PlannedDeclaration<'a> {
    pub candidate: Candidate<'a>,
    pub location: Location,
}

/// Emits one TypeScript interface file per exportable type.
pub struct Generator<'a> {
    registry: &'a TypeRegistry,
    options: GeneratorOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }

    fn clean(&self, output_dir: &Path) -> Result<CleanResult> {
        Synchronizer::new(output_dir, EXTENSION).clear()
    }

    fn preview_clean(&self, output_dir: &Path) -> Result<CleanResult> {
        Synchronizer::new(output_dir, EXTENSION).plan_clear()
    }
}

impl<'a> Generator<'a> {
    pub fn new(registry: &'a TypeRegistry, options: GeneratorOptions) -> Self {
        Self { registry, options }
    }

    pub fn from_manifest(manifest: &'a Manifest) -> Self {
        Self::new(manifest.registry(), GeneratorOptions::from(&manifest.output))
    }

    /// Override index generation (e.g. from a command-line flag).
    pub fn with_index(mut self, generate_index: bool) -> Self {
        self.options.generate_index = generate_index;
        self
    }

    /// Every emitted type with its location under `output_dir`, in
    /// registration order.
    pub fn plan(&self, output_dir: &Path) -> Vec<PlannedDeclaration<'a>> {
        let planner = OutputPlanner::new(output_dir, EXTENSION);
        let mut claimed: HashMap<String, &str> = HashMap::new();

        Classifier::new(self.registry)
            .candidates()
            .into_iter()
            .map(|candidate| {
                let location = planner.plan_location(candidate.def, candidate.export_name);
                let id = candidate.def.id.as_str();
                if let Some(previous) = claimed.insert(location.relative.clone(), id) {
                    warn!(
                        path = %location.relative,
                        first = previous,
                        second = id,
                        "two types map to the same file; the later one wins"
                    );
                }
                PlannedDeclaration {
                    candidate,
                    location,
                }
            })
            .collect()
    }

    fn emitter(&self) -> InterfaceEmitter<'a> {
        InterfaceEmitter::new(self.registry)
            .with_naming(self.options.member_naming)
            .with_indent(self.options.indent)
    }

    /// Build the declaration files for a plan.
    fn declarations(&self, plan: &[PlannedDeclaration<'a>]) -> Vec<DeclarationTs> {
        let emitter = self.emitter();

        plan.iter()
            .map(|planned| {
                let imports = if self.options.reference_imports {
                    self.reference_imports(&emitter, planned, plan)
                } else {
                    Vec::new()
                };
                let file = emitter.declaration(
                    planned.candidate.def,
                    planned.candidate.export_name,
                    imports,
                );
                DeclarationTs::new(planned.location.clone(), file)
                    .with_indent(self.options.indent)
                    .with_line_ending(self.options.line_ending)
            })
            .collect()
    }

    /// `import type` lines for references to other emitted types, sorted by
    /// name. References to types that are not emitted stay global.
    fn reference_imports(
        &self,
        emitter: &InterfaceEmitter<'a>,
        current: &PlannedDeclaration<'a>,
        plan: &[PlannedDeclaration<'a>],
    ) -> Vec<Import> {
        let mut targets: BTreeMap<&str, &PlannedDeclaration<'a>> = BTreeMap::new();

        for member in emitter.chain_members(current.candidate.def) {
            for name in member.ty.references() {
                let Some(target) = plan.iter().find(|p| p.candidate.def.name == name) else {
                    continue;
                };
                if target.candidate.def.id == current.candidate.def.id {
                    continue;
                }
                targets.entry(name).or_insert(target);
            }
        }

        targets
            .into_iter()
            .map(|(name, target)| {
                let module =
                    relative_module_path(&current.location.folder, target.location.module_path());
                Import::type_default(name, module)
            })
            .collect()
    }

    fn folder_map(plan: &[PlannedDeclaration<'a>]) -> FolderMap {
        let mut folders = FolderMap::new();
        for planned in plan {
            folders.insert(planned.location.folder.as_str(), planned.location.relative.as_str());
        }
        folders
    }

    /// Preview generated files without writing to disk.
    fn preview_files(&self) -> Vec<PreviewFile> {
        let plan = self.plan(Path::new(""));
        let mut files: Vec<PreviewFile> = self
            .declarations(&plan)
            .into_iter()
            .map(|declaration| PreviewFile {
                path: declaration.location().relative.clone(),
                content: declaration.render(),
            })
            .collect();

        if self.options.generate_index && !plan.is_empty() {
            let index = IndexTs::new(&Self::folder_map(&plan))
                .with_line_ending(self.options.line_ending);
            files.push(PreviewFile {
                path: INDEX_FILE.to_string(),
                content: index.render(),
            });
        }

        files
    }

    /// Clear the output root, then write every declaration and the index.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let cleaned = Synchronizer::new(output_dir, EXTENSION).clear()?;

        let plan = self.plan(output_dir);
        let mut folders = FolderMap::new();
        let mut written = Vec::new();

        for declaration in self.declarations(&plan) {
            declaration.write(output_dir)?;
            let location = declaration.location();
            debug!(file = %location.relative, "wrote declaration");
            folders.insert(location.folder.as_str(), location.relative.as_str());
            written.push(location.relative.clone());
        }

        let mut index = None;
        if self.options.generate_index && !folders.is_empty() {
            IndexTs::new(&folders)
                .with_line_ending(self.options.line_ending)
                .write(output_dir)?;
            index = Some(INDEX_FILE.to_string());
        }

        info!(
            root = %output_dir.display(),
            files = written.len(),
            index = index.is_some(),
            naming = %self.options.member_naming,
            line_ending = %self.options.line_ending,
            "generated declarations"
        );

        Ok(GenerateResult {
            cleaned,
            written,
            index,
        })
    }
}
