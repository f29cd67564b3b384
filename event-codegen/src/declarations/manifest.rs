//! Declaration manifest front-end
//!
//! A manifest describes declarations without Rust source, for event sets whose
//! shape comes from elsewhere (a schema export, another language's model).
//! Member field names are taken as written; camelCase names are converted
//! when keys are derived. Exports that list a declaration among its own
//! enclosed elements are accepted: a member named like its declaration is the
//! declaration itself and is dropped.
//!
//! ```toml
//! [[declaration]]
//! name = "MyEvent"
//! path = "crate::event::MyEvent"
//! kind = "enum"
//! modality = "closed"
//! markers = ["analytics_event"]
//!
//! [[declaration.member]]
//! name = "ShareImage"
//! extends = "MyEvent"
//! fields = ["imageName", "fullString"]
//!
//! [[declaration.member]]
//! name = "ButtonTapped"
//! ```

use crate::declarations::{Declaration, DeclarationKind, Member, MemberFields, Modality, Origin};
use crate::types::{CodegenError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "declaration")]
    declarations: Vec<ManifestDeclaration>,
}

#[derive(Debug, Deserialize)]
struct ManifestDeclaration {
    name: String,
    /// Qualified path; defaults to `name`
    path: Option<String>,
    #[serde(default = "default_kind")]
    kind: DeclarationKind,
    #[serde(default = "default_modality")]
    modality: Modality,
    #[serde(default)]
    markers: Vec<String>,
    #[serde(default)]
    generic: bool,
    #[serde(default, rename = "member")]
    members: Vec<ManifestMember>,
}

#[derive(Debug, Deserialize)]
struct ManifestMember {
    name: String,
    extends: Option<String>,
    fields: Option<Vec<String>>,
    /// Number of positional fields, for members without field names
    positional: Option<usize>,
}

fn default_kind() -> DeclarationKind {
    DeclarationKind::Enum
}

fn default_modality() -> Modality {
    Modality::Closed
}

/// Parse a manifest file and return its declarations
pub fn parse_manifest_file(path: &Path) -> Result<Vec<Declaration>> {
    log::info!("Parsing declaration manifest: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| CodegenError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_manifest_str(&content, &path.display().to_string())
}

/// Parse manifest text and return its declarations
pub fn parse_manifest_str(content: &str, origin: &str) -> Result<Vec<Declaration>> {
    let manifest: ManifestFile =
        toml::from_str(content).map_err(|e| CodegenError::ManifestParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

    let declarations: Vec<Declaration> = manifest
        .declarations
        .into_iter()
        .map(|decl| convert_declaration(decl, origin))
        .collect::<Result<_>>()?;

    log::debug!("Found {} declarations in {}", declarations.len(), origin);

    Ok(declarations)
}

fn convert_declaration(decl: ManifestDeclaration, origin: &str) -> Result<Declaration> {
    let path = decl.path.unwrap_or_else(|| decl.name.clone());

    let members = decl
        .members
        .into_iter()
        .filter(|member| {
            let itself = member.name == decl.name;
            if itself {
                log::debug!("Dropping {} from its own member list", path);
            }
            !itself
        })
        .map(|member| {
            let fields = match (member.fields, member.positional) {
                (Some(_), Some(_)) => {
                    return Err(CodegenError::ManifestParse {
                        origin: origin.to_string(),
                        message: format!(
                            "member {} of {} sets both `fields` and `positional`",
                            member.name, path
                        ),
                    })
                }
                (Some(fields), None) if fields.is_empty() => MemberFields::Unit,
                (Some(fields), None) => MemberFields::Named(fields),
                (None, Some(0)) | (None, None) => MemberFields::Unit,
                (None, Some(count)) => MemberFields::Positional(count),
            };
            Ok(Member {
                name: member.name,
                parent: member.extends,
                fields,
                origin: Origin::new(origin, None),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Declaration {
        name: decl.name,
        path,
        kind: decl.kind,
        modality: decl.modality,
        markers: decl.markers,
        generic: decl.generic,
        members,
        origin: Origin::new(origin, None),
    })
}
