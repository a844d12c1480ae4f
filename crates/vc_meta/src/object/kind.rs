use alloc::boxed::Box;

use crate::Object;
use crate::ops::{Array, List, Map, Set};

// -----------------------------------------------------------------------------
// ObjectKind

/// The container shape of an [`Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A scalar or otherwise opaque value.
    Value,
    /// A struct with named properties.
    Bean,
    /// A growable ordered sequence.
    List,
    /// A fixed-length sequence.
    Array,
    /// A key-value mapping with string-addressable keys.
    Map,
    /// A collection of unique elements.
    Set,
}

// -----------------------------------------------------------------------------
// ObjectRef

/// An immutable container-shape view, see [`Object::object_ref`].
pub enum ObjectRef<'a> {
    Value(&'a dyn Object),
    Bean(&'a dyn Object),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Set(&'a dyn Set),
}

impl ObjectRef<'_> {
    /// Returns the shape of this view.
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Value(_) => ObjectKind::Value,
            Self::Bean(_) => ObjectKind::Bean,
            Self::List(_) => ObjectKind::List,
            Self::Array(_) => ObjectKind::Array,
            Self::Map(_) => ObjectKind::Map,
            Self::Set(_) => ObjectKind::Set,
        }
    }
}

// -----------------------------------------------------------------------------
// ObjectMut

/// A mutable container-shape view, see [`Object::object_mut`].
pub enum ObjectMut<'a> {
    Value(&'a mut dyn Object),
    Bean(&'a mut dyn Object),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Map(&'a mut dyn Map),
    Set(&'a mut dyn Set),
}

impl ObjectMut<'_> {
    /// Returns the shape of this view.
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Value(_) => ObjectKind::Value,
            Self::Bean(_) => ObjectKind::Bean,
            Self::List(_) => ObjectKind::List,
            Self::Array(_) => ObjectKind::Array,
            Self::Map(_) => ObjectKind::Map,
            Self::Set(_) => ObjectKind::Set,
        }
    }
}

// -----------------------------------------------------------------------------
// ObjectOwned

/// An owned container-shape view, see [`Object::object_owned`].
pub enum ObjectOwned {
    Value(Box<dyn Object>),
    Bean(Box<dyn Object>),
    List(Box<dyn List>),
    Array(Box<dyn Array>),
    Map(Box<dyn Map>),
    Set(Box<dyn Set>),
}

impl ObjectOwned {
    /// Returns the shape of this value.
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Value(_) => ObjectKind::Value,
            Self::Bean(_) => ObjectKind::Bean,
            Self::List(_) => ObjectKind::List,
            Self::Array(_) => ObjectKind::Array,
            Self::Map(_) => ObjectKind::Map,
            Self::Set(_) => ObjectKind::Set,
        }
    }

    /// Forgets the shape and returns the plain object.
    pub fn into_object(self) -> Box<dyn Object> {
        match self {
            Self::Value(value) | Self::Bean(value) => value,
            Self::List(value) => value as Box<dyn Object>,
            Self::Array(value) => value as Box<dyn Object>,
            Self::Map(value) => value as Box<dyn Object>,
            Self::Set(value) => value as Box<dyn Object>,
        }
    }
}
