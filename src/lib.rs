#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_meta as meta;

use vc_meta::{MetaContext, Navigator, Object};

/// Creates a [`Navigator`] over `object` with the shared default context.
///
/// Use [`MetaContext::builder`] for a custom naming policy, object factory
/// or adapter factory.
#[inline]
pub fn for_object(object: &mut dyn Object) -> Navigator<'_> {
    MetaContext::global().navigator(object)
}
