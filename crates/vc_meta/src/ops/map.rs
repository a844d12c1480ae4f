use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::Object;
use crate::object::Type;
use crate::ops::ElementError;

// -----------------------------------------------------------------------------
// MapKey

/// A map key addressable from a path segment.
///
/// Keys arrive as the raw text between `[` and `]`.
pub trait MapKey: Sized + Clone + Send + Sync + 'static {
    /// Parses a key from its path form.
    fn from_key(key: &str) -> Option<Self>;

    /// Renders the key in path form.
    fn to_key(&self) -> String;
}

impl MapKey for String {
    #[inline]
    fn from_key(key: &str) -> Option<Self> {
        Some(key.into())
    }

    #[inline]
    fn to_key(&self) -> String {
        self.clone()
    }
}

macro_rules! impl_map_key_by_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MapKey for $ty {
                #[inline]
                fn from_key(key: &str) -> Option<Self> {
                    key.parse().ok()
                }

                #[inline]
                fn to_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_map_key_by_parse!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

// -----------------------------------------------------------------------------
// Map

/// A key-value mapping with keys addressable by string.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_meta::ops::Map;
///
/// let mut scores: HashMap<String, u32> = HashMap::new();
/// let map: &mut dyn Map = &mut scores;
///
/// map.insert("alice", Box::new(90_u32)).unwrap();
/// assert!(map.contains_key("alice"));
/// assert_eq!(map.keys(), vec!["alice".to_string()]);
/// ```
pub trait Map: Object {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&dyn Object>;

    /// Returns the value stored under `key` mutably.
    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Object>;

    /// Inserts or replaces the value under `key`, returning the previous value.
    fn insert(
        &mut self,
        key: &str,
        value: Box<dyn Object>,
    ) -> Result<Option<Box<dyn Object>>, ElementError>;

    /// Removes the value stored under `key`.
    fn remove(&mut self, key: &str) -> Option<Box<dyn Object>>;

    /// Returns `true` if the map contains `key`.
    #[inline]
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns all keys in path form, sorted.
    fn keys(&self) -> Vec<String>;

    /// Returns the declared value type.
    fn value_type(&self) -> Type;

    /// Clones the map into a new box.
    fn clone_map(&self) -> Box<dyn Map>;
}

impl Clone for Box<dyn Map> {
    #[inline]
    fn clone(&self) -> Self {
        (**self).clone_map()
    }
}

impl fmt::Debug for dyn Map {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_object(f)
    }
}
