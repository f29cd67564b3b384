//! Rust source front-end
//!
//! Parses Rust source with `syn` and converts every type declaration into our
//! declaration table format. Inline `mod` blocks are walked recursively and
//! contribute to the qualified path; out-of-line modules (`mod foo;`) have to
//! be loaded as separate files with their own module prefix.

use crate::declarations::{Declaration, DeclarationKind, Member, MemberFields, Modality, Origin};
use crate::types::{CodegenError, Result};
use proc_macro2::Span;
use std::path::Path;
use syn::{Attribute, Fields, Generics, Item};

/// Parse a Rust source file and return its declarations
///
/// `module_prefix` is the module path of the file inside its crate
/// (e.g. `crate::event`), used to build qualified paths.
pub fn parse_rust_file(path: &Path, module_prefix: &str) -> Result<Vec<Declaration>> {
    log::info!("Parsing Rust source: {:?}", path);

    let source = std::fs::read_to_string(path).map_err(|e| CodegenError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_rust_source(&source, &path.display().to_string(), module_prefix)
}

/// Parse Rust source text and return its declarations
pub fn parse_rust_source(
    source: &str,
    origin: &str,
    module_prefix: &str,
) -> Result<Vec<Declaration>> {
    let file = syn::parse_file(source).map_err(|e| CodegenError::RustParse {
        origin: match line_of(e.span()) {
            Some(line) => format!("{}:{}", origin, line),
            None => origin.to_string(),
        },
        message: e.to_string(),
    })?;

    let mut declarations = Vec::new();
    collect_items(&file.items, module_prefix, origin, &mut declarations);

    log::debug!(
        "Found {} declarations in {} (module {})",
        declarations.len(),
        origin,
        if module_prefix.is_empty() { "<root>" } else { module_prefix }
    );

    Ok(declarations)
}

/// Walk items, descending into inline modules
fn collect_items(items: &[Item], module: &str, origin: &str, out: &mut Vec<Declaration>) {
    for item in items {
        match item {
            Item::Enum(item_enum) => {
                let members = item_enum
                    .variants
                    .iter()
                    .map(|variant| Member {
                        name: variant.ident.to_string(),
                        parent: None,
                        fields: convert_fields(&variant.fields),
                        origin: Origin::new(origin, line_of(variant.ident.span())),
                    })
                    .collect();

                let modality = if has_attr(&item_enum.attrs, "non_exhaustive") {
                    Modality::Open
                } else {
                    Modality::Closed
                };

                out.push(declaration(
                    module,
                    &item_enum.ident,
                    DeclarationKind::Enum,
                    modality,
                    &item_enum.attrs,
                    &item_enum.generics,
                    members,
                    origin,
                ));
            }
            Item::Struct(item_struct) => out.push(declaration(
                module,
                &item_struct.ident,
                DeclarationKind::Struct,
                Modality::Open,
                &item_struct.attrs,
                &item_struct.generics,
                Vec::new(),
                origin,
            )),
            Item::Trait(item_trait) => out.push(declaration(
                module,
                &item_trait.ident,
                DeclarationKind::Trait,
                Modality::Open,
                &item_trait.attrs,
                &item_trait.generics,
                Vec::new(),
                origin,
            )),
            Item::Union(item_union) => out.push(declaration(
                module,
                &item_union.ident,
                DeclarationKind::Union,
                Modality::Open,
                &item_union.attrs,
                &item_union.generics,
                Vec::new(),
                origin,
            )),
            Item::Type(item_type) => out.push(declaration(
                module,
                &item_type.ident,
                DeclarationKind::TypeAlias,
                Modality::Open,
                &item_type.attrs,
                &item_type.generics,
                Vec::new(),
                origin,
            )),
            Item::Mod(item_mod) => match &item_mod.content {
                Some((_, items)) => {
                    let nested = join_path(module, &item_mod.ident.to_string());
                    collect_items(items, &nested, origin, out);
                }
                None => {
                    log::trace!(
                        "Skipping out-of-line module {} in {}",
                        item_mod.ident,
                        origin
                    );
                }
            },
            _ => {}
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn declaration(
    module: &str,
    ident: &syn::Ident,
    kind: DeclarationKind,
    modality: Modality,
    attrs: &[Attribute],
    generics: &Generics,
    members: Vec<Member>,
    origin: &str,
) -> Declaration {
    let name = ident.to_string();
    Declaration {
        path: join_path(module, &name),
        name,
        kind,
        modality,
        markers: attr_names(attrs),
        generic: !generics.params.is_empty(),
        members,
        origin: Origin::new(origin, line_of(ident.span())),
    }
}

fn convert_fields(fields: &Fields) -> MemberFields {
    match fields {
        Fields::Named(named) => MemberFields::Named(
            named
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| ident.to_string()))
                .collect(),
        ),
        Fields::Unnamed(unnamed) => MemberFields::Positional(unnamed.unnamed.len()),
        Fields::Unit => MemberFields::Unit,
    }
}

/// Last path segment of every attribute (`#[event_marker::analytics_event]` → `analytics_event`)
fn attr_names(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter_map(|attr| attr.path().segments.last())
        .map(|segment| segment.ident.to_string())
        .collect()
}

fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn join_path(module: &str, name: &str) -> String {
    if module.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", module, name)
    }
}

fn line_of(span: Span) -> Option<usize> {
    let line = span.start().line;
    (line > 0).then_some(line)
}
