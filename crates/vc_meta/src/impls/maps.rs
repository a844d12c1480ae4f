use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::type_name;
use core::fmt;
use core::hash::{BuildHasher, Hash};

use crate::impls::utils::container_type;
use crate::impls::{impl_object_cast_fn, map_debug, map_eq};
use crate::object::TypeKind;
use crate::ops::{ElementError, Map, MapKey, to_element};
use crate::{Object, Type, Typed};

#[inline]
fn parse_key<K: MapKey>(key: &str) -> Result<K, ElementError> {
    K::from_key(key).ok_or(ElementError::InvalidKey {
        expected: type_name::<K>(),
    })
}

// -----------------------------------------------------------------------------
// HashMap

macro_rules! impl_object_for_hash_map {
    ($($map:ident)::+) => {
        impl<K, V, S> Object for $($map)::+<K, V, S>
        where
            K: MapKey + Eq + Hash,
            V: Typed,
            S: BuildHasher + Default + Clone + Send + Sync + 'static,
        {
            impl_object_cast_fn!(Map);

            #[inline]
            fn clone_object(&self) -> Box<dyn Object> {
                Box::new(Clone::clone(self))
            }

            #[inline]
            fn object_eq(&self, other: &dyn Object) -> Option<bool> {
                map_eq(self, other)
            }

            #[inline]
            fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                map_debug(self, f)
            }
        }

        impl<K, V, S> Typed for $($map)::+<K, V, S>
        where
            K: MapKey + Eq + Hash,
            V: Typed,
            S: BuildHasher + Default + Clone + Send + Sync + 'static,
        {
            fn type_of() -> Type {
                container_type::<Self>(TypeKind::Map)
                    .with_default(|| -> Box<dyn Object> { Box::new(<Self as Default>::default()) })
            }
        }

        impl<K, V, S> Map for $($map)::+<K, V, S>
        where
            K: MapKey + Eq + Hash,
            V: Typed,
            S: BuildHasher + Default + Clone + Send + Sync + 'static,
        {
            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn get(&self, key: &str) -> Option<&dyn Object> {
                let key = K::from_key(key)?;
                Self::get(self, &key).map(|value| value as &dyn Object)
            }

            fn get_mut(&mut self, key: &str) -> Option<&mut dyn Object> {
                let key = K::from_key(key)?;
                Self::get_mut(self, &key).map(|value| value as &mut dyn Object)
            }

            fn insert(
                &mut self,
                key: &str,
                value: Box<dyn Object>,
            ) -> Result<Option<Box<dyn Object>>, ElementError> {
                let key = parse_key::<K>(key)?;
                let value = to_element::<V>(value)?;
                Ok(Self::insert(self, key, value).map(|old| Box::new(old) as Box<dyn Object>))
            }

            fn remove(&mut self, key: &str) -> Option<Box<dyn Object>> {
                let key = K::from_key(key)?;
                Self::remove(self, &key).map(|old| Box::new(old) as Box<dyn Object>)
            }

            fn keys(&self) -> Vec<String> {
                let mut keys: Vec<String> = Self::keys(self).map(MapKey::to_key).collect();
                keys.sort_unstable();
                keys
            }

            #[inline]
            fn value_type(&self) -> Type {
                V::type_of()
            }

            #[inline]
            fn clone_map(&self) -> Box<dyn Map> {
                Box::new(Clone::clone(self))
            }
        }
    };
}

impl_object_for_hash_map!(std::collections::HashMap);
impl_object_for_hash_map!(hashbrown::HashMap);

// -----------------------------------------------------------------------------
// BTreeMap

impl<K: MapKey + Ord, V: Typed> Object for BTreeMap<K, V> {
    impl_object_cast_fn!(Map);

    #[inline]
    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(Clone::clone(self))
    }

    #[inline]
    fn object_eq(&self, other: &dyn Object) -> Option<bool> {
        map_eq(self, other)
    }

    #[inline]
    fn fmt_object(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        map_debug(self, f)
    }
}

impl<K: MapKey + Ord, V: Typed> Typed for BTreeMap<K, V> {
    fn type_of() -> Type {
        container_type::<Self>(TypeKind::Map)
            .with_default(|| -> Box<dyn Object> { Box::new(BTreeMap::<K, V>::new()) })
    }
}

impl<K: MapKey + Ord, V: Typed> Map for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&dyn Object> {
        let key = K::from_key(key)?;
        BTreeMap::get(self, &key).map(|value| value as &dyn Object)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Object> {
        let key = K::from_key(key)?;
        BTreeMap::get_mut(self, &key).map(|value| value as &mut dyn Object)
    }

    fn insert(
        &mut self,
        key: &str,
        value: Box<dyn Object>,
    ) -> Result<Option<Box<dyn Object>>, ElementError> {
        let key = parse_key::<K>(key)?;
        let value = to_element::<V>(value)?;
        Ok(BTreeMap::insert(self, key, value).map(|old| Box::new(old) as Box<dyn Object>))
    }

    fn remove(&mut self, key: &str) -> Option<Box<dyn Object>> {
        let key = K::from_key(key)?;
        BTreeMap::remove(self, &key).map(|old| Box::new(old) as Box<dyn Object>)
    }

    /// Keys in the map's own order.
    fn keys(&self) -> Vec<String> {
        BTreeMap::keys(self).map(MapKey::to_key).collect()
    }

    #[inline]
    fn value_type(&self) -> Type {
        V::type_of()
    }

    #[inline]
    fn clone_map(&self) -> Box<dyn Map> {
        Box::new(Clone::clone(self))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use std::collections::HashMap;

    use crate::Object;
    use crate::ops::{ElementError, Map};

    #[test]
    fn string_keyed_map() {
        let mut map: HashMap<String, Box<dyn Object>> = HashMap::new();
        let view: &mut dyn Map = &mut map;

        assert!(view.insert("scores", Box::new(vec![90_i32, 100, 85])).unwrap().is_none());
        assert!(view.insert("name", Box::new(String::from("a"))).unwrap().is_none());
        assert_eq!(view.keys(), vec!["name".to_string(), "scores".to_string()]);

        let removed = view.remove("name").unwrap();
        assert_eq!(removed.take::<String>().unwrap(), "a");
        assert!(!view.contains_key("name"));
    }

    #[test]
    fn integer_keys_parse_from_text() {
        let mut map: BTreeMap<u32, String> = BTreeMap::new();
        let view: &mut dyn Map = &mut map;

        view.insert("10", Box::new(String::from("ten"))).unwrap();
        assert_eq!(
            view.insert("ten", Box::new(String::from("x"))).unwrap_err(),
            ElementError::InvalidKey { expected: "u32" }
        );
        assert!(view.get("10").is_some());
        assert!(view.get("abc").is_none());
        assert_eq!(map.get(&10).map(String::as_str), Some("ten"));
    }

    #[test]
    fn hashbrown_maps_are_maps() {
        let mut map: crate::hash::HashMap<String, i64> = crate::hash::new_map();
        map.insert(String::from("a"), 1);
        let view: &dyn Object = &map;
        assert_eq!(view.object_eq(&map.clone()), Some(true));
    }
}
