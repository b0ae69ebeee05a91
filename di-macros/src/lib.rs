//! Compile-time dependency injection macros for flightgraph.
//!
//! - `#[derive(Context)]` exposes every field of a root struct through `FromRef`
//! - `#[derive(FromContext)]` builds a struct by resolving each field from the root
//!
//! Generated code refers to `crate::FromRef`, so the consuming crate must
//! define or re-export that trait at its root.

use proc_macro::TokenStream;

mod context;
mod fields;
mod from_context;

/// Derive macro for the DI root.
///
/// Emits `impl FromRef<Root> for FieldType` for every named field, cloning
/// the field out of the root. Every field type must be `Clone` and field
/// types must be distinct, otherwise the generated impls overlap.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub graph: AppGraph,
///     pub config: Arc<Config>,
/// }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::expand(syn::parse_macro_input!(input as syn::DeriveInput))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for types assembled from the DI root.
///
/// Each field is resolved with `<FieldType as FromRef<Root>>::from_ref`.
/// The root defaults to a type named `Context` in scope; override it with
/// `#[from_context(Context = "path::To::Root")]`.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct AirportRepository {
///     graph: AppGraph,
/// }
///
/// let airports = AirportRepository::from_ref(&ctx);
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::expand(syn::parse_macro_input!(input as syn::DeriveInput))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
