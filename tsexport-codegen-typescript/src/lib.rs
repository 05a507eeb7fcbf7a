//! TypeScript interface generator for tsexport.
//!
//! Emits one `.ts` file per exportable type: a non-exported interface
//! followed by a default export, optionally preceded by `import type`
//! lines, plus an optional `index.ts` barrel at the output root.
//!
//! # Usage
//!
//! ```ignore
//! use tsexport_codegen_typescript::{Generator, LanguageCodegen};
//! use tsexport_manifest::Manifest;
//!
//! let manifest = Manifest::from_file("tsexport.toml")?;
//! let generator = Generator::from_manifest(&manifest);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Clear the output root and write every file
//! let result = generator.generate(&manifest.output.root)?;
//! ```
//!
//! # Generated Output
//!
//! ```text
//! interface Person {
//!     name: string;
//!     age: number;
//!     birthDate?: Date | null;
//! }
//! export default Person;
//! ```

mod code_file;
mod emitter;
mod generator;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use emitter::InterfaceEmitter;
pub use generator::{Generator, GeneratorOptions, PlannedDeclaration};
pub use tsexport_codegen::language::{
    CleanResult, GenerateResult, LanguageCodegen, PreviewFile, TypeMapper,
};
pub use type_mapper::TypeScriptTypeMapper;
