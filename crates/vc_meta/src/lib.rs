//! Reflection-driven navigation of object graphs through string paths.
//!
//! The crate is organized in layers, leaves first:
//!
//! - [`object`]: the dyn-safe [`Object`] trait and [`Type`] handles.
//! - [`ops`]: container views ([`List`](ops::List), [`Array`](ops::Array),
//!   [`Map`](ops::Map), [`Set`](ops::Set)).
//! - [`class`]: [`ClassInfo`](class::ClassInfo) metadata, usually generated by
//!   `#[derive(Bean)]` and `#[methods]`.
//! - [`path`]: the path tokenizer.
//! - [`reflector`]: the per-type accessor cache and [`Invoker`](reflector::Invoker)s.
//! - [`factory`]: object construction.
//! - [`adapter`]: uniform get/set over beans, maps and custom containers.
//! - [`navigator`]: the recursive [`Navigator`] facade.
//!
//! # Examples
//!
//! ```
//! use vc_meta::{Bean, MetaContext};
//!
//! #[derive(Bean, Clone, Default)]
//! #[bean(default)]
//! struct Address {
//!     city: Option<String>,
//! }
//!
//! #[derive(Bean, Clone, Default)]
//! #[bean(default)]
//! struct User {
//!     address: Option<Address>,
//! }
//!
//! let ctx = MetaContext::new();
//! let mut user = User::default();
//!
//! let mut nav = ctx.navigator(&mut user);
//! nav.set("address.city", String::from("Beijing")).unwrap();
//!
//! let city = nav.get_value_as::<String>("address.city").unwrap();
//! assert_eq!(city.as_deref(), Some("Beijing"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Derive output refers to `::vc_meta`, which must also resolve inside
// this crate's own tests.
extern crate self as vc_meta;

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod hash;

pub mod adapter;
pub mod class;
pub mod factory;
pub mod impls;
pub mod navigator;
pub mod object;
pub mod ops;
pub mod path;
pub mod reflector;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::MetaError;
pub use navigator::{MetaContext, MetaContextBuilder, Navigator};
pub use object::{Object, Type, Typed, Value};

pub use class::{Bean, BeanMethods};

#[cfg(feature = "derive")]
pub use vc_meta_derive::{Bean, methods};

/// The `vc_meta` prelude.
///
/// This includes the most common types in this crate, re-exported for your convenience.
pub mod prelude {
    pub use crate::adapter::{AdapterFactory, ObjectAdapter};
    pub use crate::factory::ObjectFactory;
    pub use crate::object::{Object, Type, Typed, Value};
    pub use crate::{MetaContext, MetaError, Navigator};

    #[cfg(feature = "derive")]
    pub use crate::{Bean, methods};
}
