//! Event Code Generator Library
//!
//! A build-time generator that turns marker-annotated event enums into
//! `TrackEvent` implementations for the `event-tracker` runtime.
//!
//! # Architecture
//!
//! Generation is a single deterministic pass over an explicit declaration
//! table:
//! - Front-ends parse Rust source (`syn`) or TOML manifests into the table
//! - The scanner keeps marked declarations that are closed variant sets
//! - The enumerator lists each set's variants and their named fields
//! - The emitter writes one `TrackEvent<Set>` impl per set
//!
//! Declarations or variants that do not fit are skipped with a warning
//! diagnostic; only a missing output directory (or unreadable input) fails
//! the round.
//!
//! # Example Usage
//!
//! From a `build.rs`:
//!
//! ```no_run
//! use event_codegen::{Generator, GeneratorConfig};
//! use std::path::Path;
//!
//! let mut generator = Generator::new(GeneratorConfig::default());
//! generator.add_rust_file(Path::new("src/event.rs"), "crate::event").unwrap();
//!
//! // Writes `my_event.rs` into OUT_DIR and reports warnings to cargo
//! let report = generator.generate_for_build().unwrap();
//! assert_eq!(report.warning_count(), 0);
//! ```
//!
//! and in `src/event.rs`:
//!
//! ```ignore
//! include!(concat!(env!("OUT_DIR"), "/my_event.rs"));
//! ```

// Public modules
pub mod config;
pub mod declarations;
pub mod emitter;
pub mod enumerator;
pub mod generator;
pub mod naming;
pub mod scanner;
pub mod types;

// Re-export main types for convenience
pub use config::GeneratorConfig;
pub use declarations::{
    Declaration, DeclarationKind, DeclarationTable, Member, MemberFields, Modality, Origin,
    TableStats,
};
pub use emitter::GeneratedArtifact;
pub use enumerator::{EventSet, EventVariant, FieldName};
pub use generator::{ArtifactSummary, GenerationReport, Generator, Prepared};
pub use types::{CodegenError, Diagnostic, Diagnostics, Result, Severity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: ensure we can create a generator
        let generator = Generator::new(GeneratorConfig::default());
        let stats = generator.table_stats();
        assert_eq!(stats.num_declarations, 0);
    }
}
