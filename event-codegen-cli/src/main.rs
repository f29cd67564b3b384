//! Event Codegen CLI Application
//!
//! This is the command-line interface for the event code generator.
//! It uses the event-codegen library and adds:
//! - Input selection from flags or a codegen.toml file
//! - Dry runs that print generated code instead of writing it
//! - Text or JSON reports

use anyhow::{Context, Result};
use clap::Parser;
use event_codegen::Generator;
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, SourceConfig};

/// Event Codegen - Generate tracking code for annotated event enums
#[derive(Parser, Debug)]
#[command(name = "event-codegen")]
#[command(about = "Generate TrackEvent impls for #[analytics_event] enums", long_about = None)]
#[command(version)]
struct Args {
    /// Rust source file to scan, with its module path (can be repeated)
    #[arg(short, long, value_name = "FILE[=MODULE]", value_parser = config::parse_source_arg)]
    source: Vec<SourceConfig>,

    /// Declaration manifest file (can be repeated)
    #[arg(short, long, value_name = "FILE")]
    manifest: Vec<PathBuf>,

    /// Directory to write generated files into (default: $OUT_DIR)
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Path to configuration file (codegen.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Marker attribute name (overrides the config file)
    #[arg(long, value_name = "NAME")]
    marker: Option<String>,

    /// Print generated code to stdout instead of writing files
    #[arg(long)]
    dry_run: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Event Codegen CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using generator library v{}", event_codegen::VERSION);

    let config = build_config(&args)?;

    if config.has_no_inputs() {
        println!("Event Codegen - No input specified");
        println!("\nQuick Start:");
        println!("  event-codegen --source src/event.rs=crate::event --out-dir generated");
        println!("  event-codegen --manifest events.toml --dry-run");
        println!("\nWith a configuration file:");
        println!("  event-codegen --config codegen.toml");
        println!("\nUse --help for more options");
        return Ok(());
    }

    let generator = load_generator(&config)?;

    let stats = generator.table_stats();
    log::info!(
        "Loaded {} declarations ({} marked, {} members)",
        stats.num_declarations,
        stats.num_marked,
        stats.num_members
    );

    if args.dry_run {
        dry_run(&generator)
    } else {
        run(&generator, &config, &args)
    }
}

/// Merge the config file (if any) with command-line flags
fn build_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    config.input.sources.extend(args.source.iter().cloned());
    config.input.manifests.extend(args.manifest.iter().cloned());
    if let Some(dir) = &args.out_dir {
        config.output.dir = Some(dir.clone());
    }
    if let Some(marker) = &args.marker {
        config.generator.marker = marker.clone();
    }

    Ok(config)
}

fn load_generator(config: &AppConfig) -> Result<Generator> {
    let mut generator = Generator::new(config.generator.clone());

    for source in &config.input.sources {
        generator
            .add_rust_file(&source.path, &source.module)
            .with_context(|| format!("Failed to load Rust source {:?}", source.path))?;
    }

    for manifest in &config.input.manifests {
        generator
            .add_manifest_file(manifest)
            .with_context(|| format!("Failed to load manifest {:?}", manifest))?;
    }

    Ok(generator)
}

/// Generate and write artifacts, then print the report
fn run(generator: &Generator, config: &AppConfig, args: &Args) -> Result<()> {
    let report = generator
        .generate(config.output.dir.as_deref())
        .context("Code generation failed (use --out-dir or set OUT_DIR)")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !args.quiet {
        print!("{}", report::render_text(&report));
    }

    Ok(())
}

/// Print generated sources instead of writing them
fn dry_run(generator: &Generator) -> Result<()> {
    let prepared = generator.prepare()?;

    for artifact in &prepared.artifacts {
        println!("// ---- {} ({}) ----", artifact.file_name, artifact.declaration);
        print!("{}", artifact.source);
    }

    for diagnostic in prepared.diagnostics.iter() {
        eprintln!("{}", diagnostic);
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_extend_config() {
        let args = Args::parse_from([
            "event-codegen",
            "--source",
            "src/event.rs=crate::event",
            "-m",
            "events.toml",
            "--out-dir",
            "gen",
            "--marker",
            "tracked",
        ]);

        let config = build_config(&args).unwrap();
        assert_eq!(config.input.sources.len(), 1);
        assert_eq!(config.input.sources[0].module, "crate::event");
        assert_eq!(config.input.manifests, vec![PathBuf::from("events.toml")]);
        assert_eq!(config.output.dir, Some(PathBuf::from("gen")));
        assert_eq!(config.generator.marker, "tracked");
    }

    #[test]
    fn test_no_inputs() {
        let args = Args::parse_from(["event-codegen"]);
        assert!(build_config(&args).unwrap().has_no_inputs());
    }

    #[test]
    fn test_load_generator_reports_missing_file() {
        let args = Args::parse_from(["event-codegen", "-s", "does/not/exist.rs"]);
        let config = build_config(&args).unwrap();
        let error = load_generator(&config).err().unwrap();
        assert!(error.to_string().contains("Failed to load Rust source"));
    }
}
