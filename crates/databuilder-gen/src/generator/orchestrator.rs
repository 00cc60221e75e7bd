//! Batch driver for builder generation.
//!
//! The `Orchestrator` owns a host dump and a [`BuilderConfig`], converts every selected declaration
//! independently, and renders each resulting module to a file. A declaration that fails to convert
//! is reported as a skipped-item warning and never stops the rest of the batch.
//!
//! ## Usage
//!
//! ```no_run
//! use databuilder_gen::generator::{
//!   converter::BuilderConfig,
//!   orchestrator::{OutputFormat, Orchestrator},
//! };
//! use databuilder_host::HostDump;
//!
//! # fn example() -> anyhow::Result<()> {
//! let dump = HostDump::from_json_str(&std::fs::read_to_string("declarations.json")?)?;
//! let orchestrator = Orchestrator::new(dump, BuilderConfig::default(), None)?;
//! let (files, stats) = orchestrator.generate_files(OutputFormat::Kotlin, "declarations.json")?;
//!
//! println!("{} builders, {} warnings", stats.builders_generated, stats.warnings.len());
//! for file in files {
//!   println!("{}", file.path.display());
//! }
//! # Ok(())
//! # }
//! ```

use std::{collections::HashSet, path::PathBuf};

use anyhow::Context;
use databuilder_host::{Declaration, DeclarationSource, HostDump};

use crate::generator::{
  ast::{BuilderModule, FieldDef},
  codegen::{FileHeader, KotlinRenderer},
  converter::{BuilderConfig, DeclarationConverter},
  metrics::{GenerationStats, GenerationWarning},
};

/// What each generated file contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
  /// Kotlin source, `{Name}Extension.kt`.
  #[default]
  Kotlin,
  /// The builder model as pretty-printed JSON, `{Name}Extension.json`.
  Model,
}

impl OutputFormat {
  pub const fn extension(self) -> &'static str {
    match self {
      OutputFormat::Kotlin => "kt",
      OutputFormat::Model => "json",
    }
  }
}

/// One file to be written, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub contents: String,
}

/// Classified fields of one declaration, or the reason they could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSummary {
  pub name: String,
  pub package: String,
  pub has_factory: bool,
  pub fields: Result<Vec<FieldDef>, String>,
}

pub struct Orchestrator {
  dump: HostDump,
  config: BuilderConfig,
  only: Option<HashSet<String>>,
}

impl Orchestrator {
  /// Creates an orchestrator over `dump`.
  ///
  /// `only` restricts generation to the named declarations.
  ///
  /// # Errors
  ///
  /// Returns an error if `only` names a declaration the dump does not contain.
  pub fn new(dump: HostDump, config: BuilderConfig, only: Option<Vec<String>>) -> anyhow::Result<Self> {
    let only = only.map(|names| names.into_iter().collect::<HashSet<_>>());
    if let Some(names) = &only {
      let mut unknown = names
        .iter()
        .filter(|name| dump.declaration(name).is_none())
        .cloned()
        .collect::<Vec<_>>();
      unknown.sort();
      anyhow::ensure!(unknown.is_empty(), "unknown declaration(s): {}", unknown.join(", "));
    }
    Ok(Self { dump, config, only })
  }

  fn selected(&self) -> impl Iterator<Item = &Declaration> {
    self
      .dump
      .declarations
      .iter()
      .filter(|decl| self.only.as_ref().is_none_or(|names| names.contains(&decl.name)))
  }

  /// Converts every selected declaration into a builder module.
  pub fn generate(&self) -> (Vec<BuilderModule>, GenerationStats) {
    let converter = DeclarationConverter::new(self.config.clone(), &self.dump);
    let mut stats = GenerationStats::default();
    let mut modules = vec![];

    for decl in self.selected() {
      stats.record_declaration();
      match converter.convert(decl) {
        Ok(output) => {
          stats.record_builder(&output.module);
          stats.record_warnings(output.warnings);
          modules.push(output.module);
        }
        Err(err) => stats.record_warning(GenerationWarning::DeclarationSkipped {
          declaration: decl.name().to_string(),
          error: err.to_string(),
        }),
      }
    }

    (modules, stats)
  }

  /// Converts and renders every selected declaration.
  ///
  /// Each file lands under its package's directory path, e.g. `com/example/PersonExtension.kt`.
  ///
  /// # Errors
  ///
  /// Returns an error if a module cannot be serialized in [`OutputFormat::Model`].
  pub fn generate_files(
    &self,
    format: OutputFormat,
    source_label: &str,
  ) -> anyhow::Result<(Vec<GeneratedFile>, GenerationStats)> {
    let (modules, stats) = self.generate();
    let header = FileHeader::builder().source(source_label).build();

    let files = modules
      .iter()
      .map(|module| -> anyhow::Result<GeneratedFile> {
        let contents = match format {
          OutputFormat::Kotlin => KotlinRenderer::render_with_header(module, &header),
          OutputFormat::Model => serde_json::to_string_pretty(module)
            .with_context(|| format!("failed to serialize builder model for {}", module.file_name))?,
        };
        Ok(GeneratedFile {
          path: Self::file_path(module, format),
          contents,
        })
      })
      .collect::<anyhow::Result<Vec<_>>>()?;

    Ok((files, stats))
  }

  /// Classified fields per selected declaration, for listing.
  pub fn summarize(&self) -> Vec<DeclarationSummary> {
    let converter = DeclarationConverter::new(self.config.clone(), &self.dump);
    self
      .selected()
      .map(|decl| DeclarationSummary {
        name: decl.name().to_string(),
        package: decl.package().to_string(),
        has_factory: decl.has_companion() && decl.creator().companionable,
        fields: converter
          .convert_fields(decl)
          .map(|conversion| conversion.fields)
          .map_err(|err| err.to_string()),
      })
      .collect()
  }

  fn file_path(module: &BuilderModule, format: OutputFormat) -> PathBuf {
    let mut path = module
      .package
      .split('.')
      .filter(|segment| !segment.is_empty())
      .collect::<PathBuf>();
    path.push(format!("{}.{}", module.file_name, format.extension()));
    path
  }
}
