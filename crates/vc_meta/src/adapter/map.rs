use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::adapter::{ObjectAdapter, create_missing, indexed, unsupported};
use crate::object::{Abstract, ObjectMut, ObjectRef, TypeKind};
use crate::ops::Map;
use crate::path::Segment;
use crate::{MetaContext, MetaError, Object, Type, Value};

// -----------------------------------------------------------------------------
// MapAdapter

/// Treats the keys of a string-keyed map as its properties.
///
/// Every name is readable and writable; a missing key reads as `None`.
/// Writing `None` removes the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapAdapter;

fn as_map<'o>(object: &'o dyn Object, operation: &'static str) -> Result<&'o dyn Map, MetaError> {
    match object.object_ref() {
        ObjectRef::Map(map) => Ok(map),
        _ => Err(unsupported(object, operation)),
    }
}

fn as_map_mut<'o>(
    object: &'o mut dyn Object,
    operation: &'static str,
) -> Result<&'o mut dyn Map, MetaError> {
    let type_name = object.object_type().name();
    match object.object_mut() {
        ObjectMut::Map(map) => Ok(map),
        _ => Err(MetaError::UnsupportedOperation {
            type_name,
            operation,
        }),
    }
}

impl MapAdapter {
    fn container<'o>(
        object: &'o dyn Object,
        segment: &Segment<'_>,
    ) -> Result<Option<&'o dyn Object>, MetaError> {
        if segment.name().is_empty() {
            return Ok(Some(object));
        }
        Ok(as_map(object, "property reads")?.get(segment.name()))
    }

    fn container_mut<'o>(
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
    ) -> Result<Option<&'o mut dyn Object>, MetaError> {
        if segment.name().is_empty() {
            return Ok(Some(object));
        }
        Ok(as_map_mut(object, "property writes")?.get_mut(segment.name()))
    }

    fn value_type(object: &dyn Object) -> Option<Type> {
        match object.object_ref() {
            ObjectRef::Map(map) => Some(map.value_type()),
            _ => None,
        }
    }
}

impl ObjectAdapter for MapAdapter {
    fn get<'o>(
        &self,
        object: &'o dyn Object,
        segment: &Segment<'_>,
        _ctx: &MetaContext,
    ) -> Result<Option<Value<'o>>, MetaError> {
        if segment.is_indexed() {
            return match Self::container(object, segment)? {
                Some(container) => indexed::get_value(Value::Ref(container), segment),
                None => Ok(None),
            };
        }
        Ok(as_map(object, "property reads")?.get(segment.name()).map(Value::Ref))
    }

    fn get_mut<'o>(
        &self,
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        _ctx: &MetaContext,
    ) -> Result<Option<&'o mut dyn Object>, MetaError> {
        if segment.is_indexed() {
            return match Self::container_mut(object, segment)? {
                Some(container) => indexed::get_mut(container, segment),
                None => Ok(None),
            };
        }
        Ok(as_map_mut(object, "property writes")?.get_mut(segment.name()))
    }

    fn set(
        &self,
        object: &mut dyn Object,
        segment: &Segment<'_>,
        value: Option<Box<dyn Object>>,
        _ctx: &MetaContext,
    ) -> Result<(), MetaError> {
        if segment.is_indexed() {
            let container = Self::container_mut(object, segment)?
                .ok_or_else(|| indexed::not_indexable(segment, indexed::NONE))?;
            return indexed::set(container, segment, value);
        }

        let type_name = object.object_type().name();
        let map = as_map_mut(object, "property writes")?;
        match value {
            Some(value) => match map.insert(segment.name(), value) {
                Ok(_) => Ok(()),
                Err(source) => Err(MetaError::IncompatibleValue {
                    segment: segment.indexed_name().into(),
                    type_name,
                    source,
                }),
            },
            None => {
                map.remove(segment.name());
                Ok(())
            }
        }
    }

    fn getter_names(&self, object: &dyn Object, _ctx: &MetaContext) -> Vec<String> {
        match object.object_ref() {
            ObjectRef::Map(map) => {
                let mut keys = map.keys();
                keys.sort_unstable();
                keys
            }
            _ => Vec::new(),
        }
    }

    #[inline]
    fn setter_names(&self, object: &dyn Object, ctx: &MetaContext) -> Vec<String> {
        self.getter_names(object, ctx)
    }

    fn getter_type(&self, object: &dyn Object, _name: &str, _ctx: &MetaContext) -> Option<Type> {
        Self::value_type(object)
    }

    fn setter_type(&self, object: &dyn Object, _name: &str, _ctx: &MetaContext) -> Option<Type> {
        Self::value_type(object)
    }

    #[inline]
    fn has_getter(&self, _object: &dyn Object, _name: &str, _ctx: &MetaContext) -> bool {
        true
    }

    #[inline]
    fn has_setter(&self, _object: &dyn Object, _name: &str, _ctx: &MetaContext) -> bool {
        true
    }

    fn instantiate_missing_property<'o>(
        &self,
        object: &'o mut dyn Object,
        segment: &Segment<'_>,
        ctx: &MetaContext,
    ) -> Result<&'o mut dyn Object, MetaError> {
        if segment.is_indexed() {
            let container = Self::container_mut(object, segment)?
                .ok_or_else(|| indexed::not_indexable(segment, indexed::NONE))?;
            return indexed::instantiate(container, segment, ctx);
        }

        let value_type = Self::value_type(object)
            .ok_or_else(|| unsupported(object, "property writes"))?;
        // Untyped maps grow nested maps.
        let ty = match value_type.kind() {
            TypeKind::Any => Type::abstract_of(Abstract::Map),
            _ => value_type,
        };
        let created = create_missing(object, segment, segment.name(), &ty, ctx)?;
        log::trace!("created `{}` for key `{}`", created.object_type(), segment.name());

        self.set(object, segment, Some(created), ctx)?;
        let type_name = object.object_type().name();
        as_map_mut(object, "property writes")?
            .get_mut(segment.name())
            .ok_or_else(|| indexed::not_indexable(segment, type_name))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::{BTreeMap, HashMap};

    use super::MapAdapter;
    use crate::adapter::ObjectAdapter;
    use crate::path::Segment;
    use crate::{Bean, MetaContext, MetaError, Object, Typed};

    type Dynamic = HashMap<String, Box<dyn Object>>;

    fn seg(text: &str) -> Segment<'_> {
        Segment::parse(text)
    }

    #[test]
    fn keys_are_properties() {
        let ctx = MetaContext::new();
        let mut map = Dynamic::new();

        MapAdapter.set(&mut map, &seg("b"), Some(Box::new(1_u8)), &ctx).unwrap();
        MapAdapter.set(&mut map, &seg("a"), Some(Box::new(2_u8)), &ctx).unwrap();
        assert_eq!(MapAdapter.getter_names(&map, &ctx), ["a", "b"]);

        let b = MapAdapter.get(&map, &seg("b"), &ctx).unwrap().unwrap();
        assert_eq!(b.downcast_ref::<u8>(), Some(&1));
        assert!(MapAdapter.get(&map, &seg("c"), &ctx).unwrap().is_none());
        assert!(MapAdapter.has_getter(&map, "c", &ctx));

        MapAdapter.set(&mut map, &seg("a"), None, &ctx).unwrap();
        assert_eq!(MapAdapter.setter_names(&map, &ctx), ["b"]);
    }

    #[test]
    fn typed_values_are_checked() {
        let ctx = MetaContext::new();
        let mut map: BTreeMap<String, i64> = BTreeMap::new();

        let err = MapAdapter
            .set(&mut map, &seg("x"), Some(Box::new(String::new())), &ctx)
            .unwrap_err();
        assert!(matches!(err, MetaError::IncompatibleValue { .. }));
        assert_eq!(MapAdapter.getter_type(&map, "x", &ctx), Some(i64::type_of()));
    }

    #[test]
    fn indexed_entries() {
        let ctx = MetaContext::new();
        let mut map = Dynamic::new();
        map.insert(String::from("scores"), Box::new(vec![1_i32, 2]));

        MapAdapter
            .set(&mut map, &seg("scores[1]"), Some(Box::new(5_i32)), &ctx)
            .unwrap();
        let value = MapAdapter.get(&map, &seg("scores[1]"), &ctx).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&5));

        MapAdapter.set(&mut map, &seg("[k]"), Some(Box::new(3_u8)), &ctx).unwrap();
        assert!(map.contains_key("k"));

        let err = MapAdapter
            .set(&mut map, &seg("missing[0]"), Some(Box::new(0_i32)), &ctx)
            .unwrap_err();
        assert!(matches!(err, MetaError::NotIndexable { type_name: "none", .. }));
    }

    #[test]
    fn untyped_maps_grow_maps() {
        let ctx = MetaContext::new();
        let mut map = Dynamic::new();

        let child = MapAdapter
            .instantiate_missing_property(&mut map, &seg("child"), &ctx)
            .unwrap();
        assert!(child.is::<Dynamic>());
        assert!(map.contains_key("child"));
    }

    #[test]
    fn typed_maps_grow_values() {
        let ctx = MetaContext::new();
        let mut map: HashMap<String, String> = HashMap::new();

        MapAdapter
            .instantiate_missing_property(&mut map, &seg("name"), &ctx)
            .unwrap();
        assert_eq!(map.get("name").map(String::as_str), Some(""));
    }

    #[derive(Bean, Clone)]
    struct Gauge {
        level: u8,
    }

    #[test]
    fn failed_creation_names_the_key() {
        let ctx = MetaContext::new();
        let mut map: HashMap<String, Gauge> = HashMap::new();

        let err = MapAdapter
            .instantiate_missing_property(&mut map, &seg("front"), &ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            MetaError::VivificationFailed { ref property, ref source, .. }
                if property == "front"
                    && matches!(**source, MetaError::InstantiationFailed { .. })
        ));
        assert!(map.is_empty());

        let mut slots: HashMap<String, Vec<Gauge>> = HashMap::new();
        slots.insert(String::from("rack"), Vec::new());
        let err = MapAdapter
            .instantiate_missing_property(&mut slots, &seg("rack[0]"), &ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            MetaError::VivificationFailed { ref segment, ref property, .. }
                if segment == "rack[0]" && property == "0"
        ));
    }

    #[test]
    fn other_objects_are_rejected() {
        let ctx = MetaContext::new();
        let mut text = String::new();
        let err = MapAdapter
            .set(&mut text, &seg("a"), Some(Box::new(1_u8)), &ctx)
            .unwrap_err();
        assert!(matches!(err, MetaError::UnsupportedOperation { .. }));
    }
}
