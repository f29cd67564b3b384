//! Generates the TrackEvent impls for the demo's event enums into OUT_DIR

use anyhow::{Context, Result};
use event_codegen::{Generator, GeneratorConfig};
use std::path::Path;

fn main() -> Result<()> {
    let mut generator = Generator::new(GeneratorConfig::default());

    generator
        .add_rust_file(Path::new("src/event.rs"), "crate::event")
        .context("Failed to load src/event.rs")?;
    generator
        .add_manifest_file(Path::new("events.toml"))
        .context("Failed to load events.toml")?;

    generator
        .generate_for_build()
        .context("Event code generation failed")?;

    Ok(())
}
