//! Configuration loading and parsing

use anyhow::{Context, Result};
use event_codegen::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from codegen.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub manifests: Vec<PathBuf>,
}

/// A Rust source file and its module path inside the crate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    #[serde(default = "default_module")]
    pub module: String,
}

fn default_module() -> String {
    "crate".to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// True if there is nothing to generate from
    pub fn has_no_inputs(&self) -> bool {
        self.input.sources.is_empty() && self.input.manifests.is_empty()
    }

    /// Make relative paths relative to `base` (the config file's directory)
    fn resolve_paths(&mut self, base: &Path) {
        for source in &mut self.input.sources {
            source.path = resolve(base, &source.path);
        }
        for manifest in &mut self.input.manifests {
            *manifest = resolve(base, manifest);
        }
        if let Some(dir) = &self.output.dir {
            self.output.dir = Some(resolve(base, dir));
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Parse a `FILE[=MODULE]` command-line source argument
pub fn parse_source_arg(value: &str) -> std::result::Result<SourceConfig, String> {
    let (path, module) = match value.split_once('=') {
        Some((path, module)) => (path, module.to_string()),
        None => (value, default_module()),
    };
    if path.is_empty() {
        return Err(format!("missing file in source argument {:?}", value));
    }
    if module.is_empty() {
        return Err(format!("missing module path in source argument {:?}", value));
    }
    Ok(SourceConfig {
        path: PathBuf::from(path),
        module,
    })
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            sources = [
                { path = "src/event.rs", module = "crate::event" },
                { path = "src/lib.rs" },
            ]
            manifests = ["schema/events.toml"]

            [output]
            dir = "generated"

            [generator]
            marker = "tracked"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.sources.len(), 2);
        assert_eq!(config.input.sources[0].module, "crate::event");
        assert_eq!(config.input.sources[1].module, "crate");
        assert_eq!(config.input.manifests.len(), 1);
        assert_eq!(config.output.dir, Some(PathBuf::from("generated")));
        assert_eq!(config.generator.marker, "tracked");
        assert_eq!(config.generator.tracker_crate, "::event_tracker");
    }

    #[test]
    fn test_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.has_no_inputs());
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_load_config_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codegen.toml");
        fs::write(
            &path,
            r#"
            [input]
            sources = [{ path = "src/event.rs", module = "crate::event" }]
            [output]
            dir = "/abs/generated"
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.input.sources[0].path, dir.path().join("src/event.rs"));
        assert_eq!(config.output.dir, Some(PathBuf::from("/abs/generated")));
    }

    #[test]
    fn test_parse_source_arg() {
        let source = parse_source_arg("src/event.rs=crate::event").unwrap();
        assert_eq!(source.path, PathBuf::from("src/event.rs"));
        assert_eq!(source.module, "crate::event");

        let source = parse_source_arg("src/lib.rs").unwrap();
        assert_eq!(source.module, "crate");

        assert!(parse_source_arg("=crate").is_err());
        assert!(parse_source_arg("src/lib.rs=").is_err());
    }
}
