//! Main generator API
//!
//! This module provides the primary interface for the library. The Generator
//! struct is the entry point for loading declarations and running a
//! processing round that writes generated sources.

use crate::config::GeneratorConfig;
use crate::declarations::{manifest, rust, DeclarationTable, TableStats};
use crate::emitter::{self, GeneratedArtifact};
use crate::enumerator;
use crate::naming;
use crate::scanner;
use crate::types::{CodegenError, Diagnostic, Diagnostics, Result, Severity};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no output directory is given
pub const OUT_DIR_ENV: &str = "OUT_DIR";

/// Message of the error diagnostic for a missing output directory
pub const MISSING_OUTPUT_DIR: &str = "Cannot find generated output dir.";

/// The main generator struct - entry point for all generation operations
pub struct Generator {
    config: GeneratorConfig,
    /// Declarations from every loaded input
    table: DeclarationTable,
    /// Files loaded so far (for `cargo:rerun-if-changed`)
    inputs: Vec<PathBuf>,
}

/// Result of scanning, enumerating and emitting without touching disk
#[derive(Debug, Clone)]
pub struct Prepared {
    pub artifacts: Vec<GeneratedArtifact>,
    pub diagnostics: Diagnostics,
}

/// Summary of a written artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    /// Qualified path of the event set
    pub declaration: String,
    /// Full path of the written file
    pub path: PathBuf,
    /// Number of dispatch arms
    pub arms: usize,
}

/// Outcome of a processing round
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub artifacts: Vec<ArtifactSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Number of warning diagnostics
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}

impl Generator {
    /// Create a new generator instance
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            table: DeclarationTable::new(),
            inputs: Vec::new(),
        }
    }

    /// Generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Loaded declarations
    pub fn table(&self) -> &DeclarationTable {
        &self.table
    }

    /// Files loaded so far
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Get statistics about the loaded declarations
    pub fn table_stats(&self) -> TableStats {
        self.table.stats(&self.config.marker)
    }

    /// Load a Rust source file
    ///
    /// # Arguments
    /// * `path` - Path to the `.rs` file
    /// * `module_prefix` - Module path of the file in its crate (e.g. `crate::event`)
    ///
    /// # Example
    /// ```no_run
    /// use event_codegen::{Generator, GeneratorConfig};
    /// use std::path::Path;
    ///
    /// let mut generator = Generator::new(GeneratorConfig::default());
    /// generator.add_rust_file(Path::new("src/event.rs"), "crate::event").unwrap();
    /// ```
    pub fn add_rust_file(&mut self, path: &Path, module_prefix: &str) -> Result<()> {
        let declarations = rust::parse_rust_file(path, module_prefix)?;
        self.table.extend(declarations);
        self.inputs.push(path.to_path_buf());
        log::info!("Rust source loaded successfully: {:?}", path);
        Ok(())
    }

    /// Load Rust source text; `origin` names it in diagnostics
    ///
    /// In-memory text is not recorded in [`Generator::inputs`], so
    /// [`Generator::generate_for_build`] prints no `rerun-if-changed` line for
    /// it. Build scripts that read the text themselves should print their own.
    pub fn add_rust_source(&mut self, source: &str, origin: &str, module_prefix: &str) -> Result<()> {
        let declarations = rust::parse_rust_source(source, origin, module_prefix)?;
        self.table.extend(declarations);
        Ok(())
    }

    /// Load a declaration manifest file
    pub fn add_manifest_file(&mut self, path: &Path) -> Result<()> {
        let declarations = manifest::parse_manifest_file(path)?;
        self.table.extend(declarations);
        self.inputs.push(path.to_path_buf());
        log::info!("Declaration manifest loaded successfully: {:?}", path);
        Ok(())
    }

    /// Load declaration manifest text; `origin` names it in diagnostics
    ///
    /// Like [`Generator::add_rust_source`], the text is not recorded as an
    /// input file.
    pub fn add_manifest_str(&mut self, content: &str, origin: &str) -> Result<()> {
        let declarations = manifest::parse_manifest_str(content, origin)?;
        self.table.extend(declarations);
        Ok(())
    }

    /// Scan, enumerate and emit every marked declaration
    ///
    /// Artifacts come out in table order. When two event sets share a simple
    /// name, the later one is named after its qualified path instead, with a
    /// numeric suffix if that name is taken as well.
    pub fn prepare(&self) -> Result<Prepared> {
        let mut diagnostics = Diagnostics::new();
        let mut artifacts = Vec::new();
        let mut file_names = HashSet::new();

        for declaration in scanner::scan(&self.table, &self.config.marker, &mut diagnostics) {
            let Some(set) = enumerator::enumerate(declaration, &mut diagnostics) else {
                continue;
            };

            let mut artifact = emitter::emit(&set, &self.config)?;
            if file_names.contains(&artifact.file_name) {
                artifact.file_name = unique_file_name(&file_names, &set.path);
                log::debug!(
                    "File name taken, writing {} to {}",
                    set.path,
                    artifact.file_name
                );
            }
            file_names.insert(artifact.file_name.clone());
            artifacts.push(artifact);
        }

        Ok(Prepared {
            artifacts,
            diagnostics,
        })
    }

    /// Run a processing round and write artifacts into `output_dir`
    ///
    /// Without an explicit directory the `OUT_DIR` environment variable is
    /// used. If neither is available the round is aborted with
    /// [`CodegenError::MissingOutputDir`] before anything is generated; the
    /// error carries the ERROR diagnostic for the condition.
    ///
    /// # Example
    /// ```no_run
    /// use event_codegen::{Generator, GeneratorConfig};
    /// use std::path::Path;
    ///
    /// let mut generator = Generator::new(GeneratorConfig::default());
    /// generator.add_rust_file(Path::new("src/event.rs"), "crate::event").unwrap();
    ///
    /// let report = generator.generate(Some(Path::new("target/generated"))).unwrap();
    /// for artifact in &report.artifacts {
    ///     println!("{} -> {:?}", artifact.declaration, artifact.path);
    /// }
    /// ```
    pub fn generate(&self, output_dir: Option<&Path>) -> Result<GenerationReport> {
        let output_dir = match locate_output_dir(output_dir) {
            Some(dir) => dir,
            None => {
                let diagnostic = Diagnostic::error(MISSING_OUTPUT_DIR);
                log::error!("{}", diagnostic);
                return Err(CodegenError::MissingOutputDir { diagnostic });
            }
        };

        let Prepared {
            artifacts,
            diagnostics,
        } = self.prepare()?;

        if !artifacts.is_empty() {
            std::fs::create_dir_all(&output_dir)?;
        }

        let mut summaries = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = output_dir.join(&artifact.file_name);
            std::fs::write(&path, &artifact.source)?;
            log::info!(
                "Generated {} ({} arm(s)) -> {:?}",
                artifact.declaration,
                artifact.arms,
                path
            );
            summaries.push(ArtifactSummary {
                declaration: artifact.declaration,
                path,
                arms: artifact.arms,
            });
        }

        Ok(GenerationReport {
            artifacts: summaries,
            diagnostics: diagnostics.into_vec(),
        })
    }

    /// Run a processing round from a build script
    ///
    /// Writes into `OUT_DIR`, prints `cargo:rerun-if-changed` for every loaded
    /// file and reports each diagnostic to cargo (see [`cargo_directive`]).
    /// A missing `OUT_DIR` is reported as a cargo error and returned, so the
    /// build script exits non-zero.
    pub fn generate_for_build(&self) -> Result<GenerationReport> {
        for input in &self.inputs {
            println!("cargo:rerun-if-changed={}", input.display());
        }

        let report = match self.generate(None) {
            Ok(report) => report,
            Err(error) => {
                if let CodegenError::MissingOutputDir { diagnostic } = &error {
                    println!("{}", cargo_directive(diagnostic));
                }
                return Err(error);
            }
        };

        for diagnostic in &report.diagnostics {
            println!("{}", cargo_directive(diagnostic));
        }

        Ok(report)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Build-script directive for a diagnostic: `cargo:warning` for warnings,
/// `cargo::error` for errors
pub fn cargo_directive(diagnostic: &Diagnostic) -> String {
    let directive = match diagnostic.severity {
        Severity::Warning => "cargo:warning",
        Severity::Error => "cargo::error",
    };
    format!("{}=event-codegen: {}", directive, diagnostic)
}

/// `path`-derived file name that is not in `taken`
fn unique_file_name(taken: &HashSet<String>, path: &str) -> String {
    let stem = naming::qualified_file_stem(path);
    let mut file_name = format!("{}.rs", stem);
    let mut suffix = 2;
    while taken.contains(&file_name) {
        file_name = format!("{}_{}.rs", stem, suffix);
        suffix += 1;
    }
    file_name
}

/// Explicit directory first, then `OUT_DIR`
fn locate_output_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(OUT_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: &str = r#"
#[analytics_event]
pub enum MyEvent {
    ShareImage { image_name: String, full_string: String },
    ButtonTapped,
}

pub mod checkout {
    #[analytics_event]
    pub enum MyEvent { Paid { amount_cents: u64 } }
}
"#;

    #[test]
    fn test_generator_creation() {
        let generator = Generator::default();
        let stats = generator.table_stats();
        assert_eq!(stats.num_declarations, 0);
        assert!(generator.inputs().is_empty());
    }

    #[test]
    fn test_prepare_disambiguates_file_names() {
        let mut generator = Generator::default();
        generator.add_rust_source(EVENTS, "events.rs", "crate").unwrap();

        let prepared = generator.prepare().unwrap();
        let names: Vec<_> = prepared.artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, vec!["my_event.rs", "checkout__my_event.rs"]);
        assert!(prepared.diagnostics.is_empty());
    }

    #[test]
    fn test_qualified_name_collision_gets_suffix() {
        let mut generator = Generator::default();
        generator
            .add_rust_source("#[analytics_event] enum MyEvent { A }", "event.rs", "crate::event")
            .unwrap();
        generator
            .add_rust_source("#[analytics_event] enum MyEvent { B }", "lib.rs", "crate")
            .unwrap();
        generator
            .add_rust_source("#[analytics_event] enum MyEvent { C }", "main.rs", "self")
            .unwrap();

        let prepared = generator.prepare().unwrap();
        let names: Vec<_> = prepared.artifacts.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, vec!["my_event.rs", "my_event_2.rs", "my_event_3.rs"]);
    }

    #[test]
    fn test_cargo_directive_by_severity() {
        let error = Diagnostic::error(MISSING_OUTPUT_DIR);
        assert_eq!(
            cargo_directive(&error),
            "cargo::error=event-codegen: error: Cannot find generated output dir."
        );

        let mut diagnostics = Diagnostics::new();
        diagnostics.warning("crate::Foo", Some("lib.rs:3".to_string()), "`crate::Foo` is not an enum");
        let warning = diagnostics.iter().next().unwrap();
        assert_eq!(
            cargo_directive(warning),
            "cargo:warning=event-codegen: lib.rs:3: warning: `crate::Foo` is not an enum"
        );
    }

    #[test]
    fn test_explicit_output_dir_wins() {
        let dir = Path::new("explicit");
        assert_eq!(locate_output_dir(Some(dir)), Some(PathBuf::from("explicit")));
    }
}
