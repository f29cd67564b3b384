//! Marker & declaration scanner
//!
//! Finds every declaration carrying the marker and keeps the ones that are
//! closed variant sets. Anything else is reported with one warning and left
//! out of code generation.

use crate::declarations::{Declaration, DeclarationKind, DeclarationTable, Modality};
use crate::types::Diagnostics;

/// Return the marked declarations that are closed variant sets, in table order
pub fn scan<'a>(
    table: &'a DeclarationTable,
    marker: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<&'a Declaration> {
    let mut accepted = Vec::new();

    for declaration in table.iter() {
        if !declaration.has_marker(marker) {
            log::trace!("Skipping unmarked declaration {}", declaration.path);
            continue;
        }

        if let Some(reason) = rejection(declaration) {
            diagnostics.warning(
                &declaration.path,
                Some(declaration.origin.to_string()),
                format!("`{}` {}, skipping", declaration.path, reason),
            );
            continue;
        }

        log::debug!("Accepted closed variant set {}", declaration.path);
        accepted.push(declaration);
    }

    accepted
}

fn rejection(declaration: &Declaration) -> Option<String> {
    if declaration.kind != DeclarationKind::Enum {
        return Some(format!("is a {}, not an enum", declaration.kind));
    }
    if declaration.modality == Modality::Open {
        return Some("is not a closed variant set".to_string());
    }
    if declaration.generic {
        return Some("has generic parameters".to_string());
    }
    None
}
