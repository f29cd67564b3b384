//! Marker attribute for analytics event enums
//!
//! `#[analytics_event]` expands to the item unchanged. It only exists so that
//! `event-codegen` can find the annotated declarations when it scans the
//! source at build time; nothing of it remains in the compiled program.
//!
//! ```ignore
//! use event_marker::analytics_event;
//!
//! #[analytics_event]
//! pub enum MyEvent {
//!     ShareImage { image_name: String, full_string: String },
//!     ButtonTapped,
//! }
//! ```

use proc_macro::TokenStream;

/// Tag a closed set of event variants for code generation.
///
/// Arguments are ignored; the annotated item is emitted as-is.
#[proc_macro_attribute]
pub fn analytics_event(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}
