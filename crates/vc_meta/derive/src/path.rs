//! Paths into `vc_meta` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `vc_meta` crate.
///
/// 1. For crates that depend on `vc_meta`, `::vc_meta` is returned.
/// 2. For crates that depend on `vc_graph`, `::vc_graph::meta` is returned.
/// 3. Otherwise `::vc_meta` is returned, which may be incorrect.
///
/// Reading the manifest is not free, so the path is obtained once per
/// expansion and passed around.
pub(crate) fn vc_meta() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_meta"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn macro_exports_(vc_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_meta_path::__macro_exports
    }
}
