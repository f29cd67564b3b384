//! Code emitter
//!
//! Generates one `TrackEvent<Set>` impl for the tracker type per event set.
//! The generated `track` function matches on the event, computes the derived
//! event name and the parameter mapping for the matched variant, and hands
//! both to the tracker's `log_event`.
//!
//! Output for a set with `ShareImage { image_name, full_string }` and
//! `ButtonTapped`:
//!
//! ```text
//! impl ::event_tracker::TrackEvent<crate::event::MyEvent> for ::event_tracker::EventTracker {
//!     fn track(&self, event: &crate::event::MyEvent) {
//!         let (name, params) = match event {
//!             crate::event::MyEvent::ShareImage { image_name, full_string, .. } => {
//!                 (
//!                     "share_image",
//!                     ::event_tracker::Params::from([
//!                         ("image_name", ::event_tracker::ParamValue::from(image_name)),
//!                         ("full_string", ::event_tracker::ParamValue::from(full_string)),
//!                     ]),
//!                 )
//!             }
//!             crate::event::MyEvent::ButtonTapped { .. } => {
//!                 ("button_tapped", ::event_tracker::Params::new())
//!             }
//!         };
//!         self.log_event(name, params);
//!     }
//! }
//! ```
//!
//! Paths and identifiers are parsed with `syn` before any tokens are built,
//! so a name that is not valid Rust fails here instead of in the consumer
//! crate.

use crate::config::GeneratorConfig;
use crate::enumerator::{EventSet, EventVariant};
use crate::naming;
use crate::types::{CodegenError, Result};
use proc_macro2::TokenStream;
use quote::quote;
use serde::Serialize;

/// Header written at the top of every artifact
pub const GENERATED_HEADER: &str = "// @generated by event-codegen. Do not edit.";

/// A generated source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    /// Qualified path of the event set
    pub declaration: String,
    /// File name inside the output directory
    pub file_name: String,
    /// Number of dispatch arms for listed variants
    pub arms: usize,
    #[serde(skip)]
    pub source: String,
}

/// Paths the generated impl refers to
struct Paths {
    set: syn::Path,
    tracker: syn::Path,
    track_event: syn::Path,
    params: syn::Path,
    param_value: syn::Path,
}

/// Emit the tracking impl for an event set
pub fn emit(set: &EventSet, config: &GeneratorConfig) -> Result<GeneratedArtifact> {
    let paths = Paths {
        set: parse_path(set, &set.path)?,
        tracker: parse_path(set, &config.tracker_type_path())?,
        track_event: parse_path(set, &config.tracker_item("TrackEvent"))?,
        params: parse_path(set, &config.tracker_item("Params"))?,
        param_value: parse_path(set, &config.tracker_item("ParamValue"))?,
    };

    let arms = set
        .variants
        .iter()
        .map(|variant| emit_arm(set, variant, &paths))
        .collect::<Result<Vec<_>>>()?;

    let fallback = set.has_unlisted_variants.then(|| quote! { _ => return, });
    let allow = needs_non_snake_case_allow(set).then(|| quote! { #[allow(non_snake_case)] });

    let summary = format!(
        " Converts `{}` to an event name and params and logs it using `{}::log_event`.",
        set.path,
        config.tracker_type_path()
    );

    let Paths {
        set: set_path,
        tracker,
        track_event,
        ..
    } = &paths;

    let tokens = quote! {
        #[doc = #summary]
        #[doc = ""]
        #[doc = " This is a generated function. Do not edit."]
        impl #track_event<#set_path> for #tracker {
            #allow
            fn track(&self, event: &#set_path) {
                let (name, params) = match event {
                    #(#arms)*
                    #fallback
                };
                self.log_event(name, params);
            }
        }
    };

    let source = render(set, tokens, config.header)?;

    log::debug!(
        "Emitted {} arm(s) for {}",
        set.variants.len(),
        set.path
    );

    Ok(GeneratedArtifact {
        declaration: set.path.clone(),
        file_name: format!("{}.rs", naming::to_snake_case(&set.name)),
        arms: set.variants.len(),
        source,
    })
}

fn emit_arm(set: &EventSet, variant: &EventVariant, paths: &Paths) -> Result<TokenStream> {
    let Paths {
        set: set_path,
        params,
        param_value,
        ..
    } = paths;

    let variant_ident = parse_ident(set, &variant.name)?;
    let event_name = &variant.event_name;

    if variant.fields.is_empty() {
        return Ok(quote! {
            #set_path::#variant_ident { .. } => (#event_name, #params::new()),
        });
    }

    let idents = variant
        .fields
        .iter()
        .map(|field| parse_ident(set, &field.ident))
        .collect::<Result<Vec<_>>>()?;

    let entries = variant.fields.iter().zip(&idents).map(|(field, ident)| {
        let key = &field.key;
        quote! { (#key, #param_value::from(#ident)) }
    });

    Ok(quote! {
        #set_path::#variant_ident { #(#idents,)* .. } => (
            #event_name,
            #params::from([#(#entries),*]),
        ),
    })
}

/// Pretty-print the impl, behind the generated-file header when enabled
fn render(set: &EventSet, tokens: TokenStream, header: bool) -> Result<String> {
    let file: syn::File = syn::parse2(tokens).map_err(|e| emit_error(set, e.to_string()))?;
    let body = prettyplease::unparse(&file);

    Ok(if header {
        format!("{}\n\n{}", GENERATED_HEADER, body)
    } else {
        body
    })
}

fn parse_path(set: &EventSet, text: &str) -> Result<syn::Path> {
    syn::parse_str(text).map_err(|e| emit_error(set, format!("`{}` is not a valid path: {}", text, e)))
}

fn parse_ident(set: &EventSet, text: &str) -> Result<syn::Ident> {
    syn::parse_str(text)
        .map_err(|e| emit_error(set, format!("`{}` is not a valid identifier: {}", text, e)))
}

fn emit_error(set: &EventSet, message: String) -> CodegenError {
    CodegenError::Emit {
        declaration: set.path.clone(),
        message,
    }
}

fn needs_non_snake_case_allow(set: &EventSet) -> bool {
    set.variants
        .iter()
        .flat_map(|v| v.fields.iter())
        .any(|f| !naming::is_snake_case(&f.ident))
}
