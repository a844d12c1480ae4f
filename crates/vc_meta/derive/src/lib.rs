//! Derive macros for `vc_meta`:
//!
//! - [`Bean`]: class metadata for a struct with named fields.
//! - [`methods`]: methods and constructors from an inherent `impl` block.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

static BEAN_ATTRIBUTE_NAME: &str = "bean";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod bean;
mod methods;
mod path;
mod shape;

// -----------------------------------------------------------------------------
// Macros

/// # Bean Derivation
///
/// `#[derive(Bean)]` implements `Object`, `Typed` and `Bean` for a struct
/// with named fields. Every field becomes a property, private ones included;
/// `Option<T>` fields are nullable. Field types must implement `Typed`, and
/// the struct itself must implement `Clone`.
///
/// Generic structs are not supported.
///
/// ## Type attributes
///
/// ```rust, ignore
/// #[derive(Bean, Clone, Default, Debug, PartialEq)]
/// #[bean(default, methods, debug, partial_eq)]
/// struct User { /* ... */ }
/// ```
///
/// - `default`: the type implements `Default`, which the object factory may
///   use to create instances.
/// - `methods`: the type has a `#[methods]` impl block; its getters,
///   setters and constructors join the class.
/// - `debug`: format the object with `Debug` instead of its type name.
/// - `partial_eq`: compare objects with `PartialEq`.
/// - `adapter = PATH`: the object is navigated by the `'static` adapter
///   `PATH` instead of the one the context would pick.
///
/// ## Field attributes
///
/// - `#[bean(skip)]`: not a property.
/// - `#[bean(readonly)]`: readable, and navigable for writes below it, but
///   not writable itself.
/// - `#[bean(parent)]`: the embedded parent bean. Its properties are
///   inherited; the child's own accessors win over the parent's. At most one
///   field can be the parent.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(Bean, Clone, Default)]
/// #[bean(default)]
/// struct Person {
///     name: String,
///     nickname: Option<String>,
/// }
///
/// #[derive(Bean, Clone, Default)]
/// #[bean(default)]
/// struct Employee {
///     #[bean(parent)]
///     person: Person,
///     #[bean(readonly)]
///     id: u64,
/// }
/// ```
#[proc_macro_derive(Bean, attributes(bean))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    bean::impl_bean(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// # Methods and Constructors
///
/// Placed on an inherent `impl` block, `#[methods]` keeps the block
/// unchanged and implements `BeanMethods` for the type. Enable it on the
/// type with `#[bean(methods)]`.
///
/// Recognized public methods:
///
/// | signature                                   | role       |
/// |---------------------------------------------|------------|
/// | `fn(&self) -> T`, `&T`, `&str`, `Option<T>`, `Option<&T>` | getter |
/// | `fn(&mut self) -> &mut T` or `Option<&mut T>` | mutable companion (`x_mut`) |
/// | `fn(&mut self, T)`, `fn(&mut self, Option<T>)` | setter |
///
/// Associated functions returning `Self` are constructors, whatever their
/// visibility. A zero-parameter constructor is the default constructor.
///
/// Which getters and setters become properties is decided by the naming
/// policy at run time. Methods whose shapes do not fit, generic methods and
/// methods marked `#[bean(skip)]` are ignored.
///
/// ## Example
///
/// ```rust, ignore
/// #[methods]
/// impl Person {
///     fn new() -> Self { /* ... */ }
///
///     pub fn get_name(&self) -> &str { &self.name }
///
///     pub fn set_name(&mut self, name: String) { self.name = name; }
/// }
/// ```
#[proc_macro_attribute]
pub fn methods(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item = parse_macro_input!(input as ItemImpl);

    methods::impl_methods(&mut item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
