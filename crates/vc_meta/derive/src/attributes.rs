//! Parsing of `#[bean(...)]` attributes.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Path};

use crate::BEAN_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Helpers

/// Calls `parse` for every nested meta of every `#[bean(...)]` in `attrs`.
fn for_each_meta(
    attrs: &[Attribute],
    mut parse: impl FnMut(ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(BEAN_ATTRIBUTE_NAME) {
            attr.parse_nested_meta(&mut parse)?;
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// `#[bean(...)]` on the struct.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `default`: the type implements `Default`.
    pub default: bool,
    /// `methods`: the type has a `#[methods]` block.
    pub methods: bool,
    /// `debug`: `fmt_object` uses `Debug`.
    pub debug: bool,
    /// `partial_eq`: `object_eq` uses `PartialEq`.
    pub partial_eq: bool,
    /// `adapter = PATH`: a `'static` adapter for the type.
    pub adapter: Option<Path>,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_meta(attrs, |meta| {
            if meta.path.is_ident("default") {
                this.default = true;
            } else if meta.path.is_ident("methods") {
                this.methods = true;
            } else if meta.path.is_ident("debug") {
                this.debug = true;
            } else if meta.path.is_ident("partial_eq") {
                this.partial_eq = true;
            } else if meta.path.is_ident("adapter") {
                this.adapter = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error(
                    "unknown bean attribute, expected one of \
                     `default`, `methods`, `debug`, `partial_eq`, `adapter = ...`",
                ));
            }
            Ok(())
        })?;
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// `#[bean(...)]` on a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub readonly: bool,
    pub parent: bool,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_meta(attrs, |meta| {
            if meta.path.is_ident("skip") {
                this.skip = true;
            } else if meta.path.is_ident("readonly") {
                this.readonly = true;
            } else if meta.path.is_ident("parent") {
                this.parent = true;
            } else {
                return Err(meta.error(
                    "unknown field attribute, expected one of `skip`, `readonly`, `parent`",
                ));
            }
            Ok(())
        })?;
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// Methods

/// Returns `true` if `attrs` contain `#[bean(skip)]`.
pub(crate) fn is_skipped(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for_each_meta(attrs, |meta| {
        if meta.path.is_ident("skip") {
            skip = true;
            Ok(())
        } else {
            Err(meta.error("unknown method attribute, expected `skip`"))
        }
    })?;
    Ok(skip)
}

/// Removes the `#[bean(...)]` helper attributes, which `#[methods]` owns.
pub(crate) fn strip(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident(BEAN_ATTRIBUTE_NAME));
}
