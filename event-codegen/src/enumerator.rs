//! Variant enumerator
//!
//! Turns a validated closed-set declaration into an [`EventSet`]: its direct
//! members with their field names, in the order they were declared.

use crate::declarations::{Declaration, Member, MemberFields};
use crate::naming;
use crate::types::Diagnostics;

/// A field of an event variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    /// Identifier as declared, used for field access (may be `r#type`)
    pub ident: String,
    /// Derived parameter key (`image_name`)
    pub key: String,
}

impl FieldName {
    pub fn new(ident: impl Into<String>) -> Self {
        let ident = ident.into();
        let key = naming::param_key(&ident);
        Self { ident, key }
    }
}

/// A conforming member of an event set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventVariant {
    /// Variant name as declared (`ShareImage`)
    pub name: String,
    /// Derived event name (`share_image`)
    pub event_name: String,
    /// Named fields in declaration order; empty for unit variants
    pub fields: Vec<FieldName>,
}

/// A closed set of event variants ready for code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSet {
    /// Simple name of the declaration
    pub name: String,
    /// Qualified path of the declaration
    pub path: String,
    /// Conforming variants in encounter order
    pub variants: Vec<EventVariant>,
    /// True if some variants of the enum were skipped, so dispatch over the
    /// listed variants is not exhaustive on its own
    pub has_unlisted_variants: bool,
}

/// Enumerate the conforming members of a closed-set declaration
///
/// Every member is a candidate, including one that shares the declaration's
/// name (`MyEvent::MyEvent` is a real variant). Returns `None` (with one
/// warning) when no member conforms.
pub fn enumerate(declaration: &Declaration, diagnostics: &mut Diagnostics) -> Option<EventSet> {
    let mut variants = Vec::new();
    let mut has_unlisted_variants = false;

    for member in &declaration.members {
        let subject = format!("{}::{}", declaration.path, member.name);

        if !extends(member, declaration) {
            diagnostics.warning(
                &subject,
                Some(member.origin.to_string()),
                format!(
                    "`{}` does not extend from `{}`, skipping",
                    member.name, declaration.path
                ),
            );
            continue;
        }

        let fields = match &member.fields {
            MemberFields::Unit => Vec::new(),
            MemberFields::Named(names) => names.iter().map(FieldName::new).collect(),
            MemberFields::Positional(count) => {
                diagnostics.warning(
                    &subject,
                    Some(member.origin.to_string()),
                    format!(
                        "`{}` has {} positional field(s) and no named fields, skipping",
                        subject, count
                    ),
                );
                has_unlisted_variants = true;
                continue;
            }
        };

        log::debug!(
            "Variant {} with {} field(s)",
            subject,
            fields.len()
        );

        variants.push(EventVariant {
            event_name: naming::event_name(&member.name),
            name: member.name.clone(),
            fields,
        });
    }

    if variants.is_empty() {
        diagnostics.warning(
            &declaration.path,
            Some(declaration.origin.to_string()),
            format!("`{}` has no valid variants, skipping", declaration.path),
        );
        return None;
    }

    Some(EventSet {
        name: declaration.name.clone(),
        path: declaration.path.clone(),
        variants,
        has_unlisted_variants,
    })
}

/// Direct descent: no explicit parent, or a parent naming the declaration
fn extends(member: &Member, declaration: &Declaration) -> bool {
    match member.parent.as_deref() {
        None => true,
        Some(parent) => parent == declaration.name || parent == declaration.path,
    }
}
