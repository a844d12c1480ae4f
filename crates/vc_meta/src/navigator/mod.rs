//! Recursive navigation along property paths.
//!
//! A [`Navigator`] wraps one object and resolves a path one segment at a
//! time: the adapter of the current object reads the segment, and the rest
//! of the path continues on the value it returned.
//!
//! Writes create missing intermediates on the way down through the
//! [`ObjectFactory`](crate::factory::ObjectFactory) of the [`MetaContext`],
//! unless the written value is `None`.

// -----------------------------------------------------------------------------
// Modules

mod context;

// -----------------------------------------------------------------------------
// Exports

pub use context::{MetaContext, MetaContextBuilder};

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::adapter::{Adapter, ObjectAdapter, not_borrowable};
use crate::ops::ElementError;
use crate::path::Segment;
use crate::{MetaError, Object, Type, Typed, Value};

/// The type name reported for an absent navigator.
const ABSENT: &str = "none";

// -----------------------------------------------------------------------------
// Navigator

enum Target<'a> {
    Absent,
    Ref(&'a dyn Object),
    Mut(&'a mut dyn Object),
    Owned(Box<dyn Object>),
}

/// Path-based access to an object graph.
///
/// A navigator is cheap to create and holds no state besides the wrapped
/// object and its context. It comes in three flavors:
///
/// - writable, from [`for_object`](Self::for_object) or [`MetaContext::navigator`];
/// - read-only, from [`for_ref`](Self::for_ref);
/// - absent, from [`absent`](Self::absent) or [`for_option`](Self::for_option)
///   with `None`. Reads return `Ok(None)`, introspection reports nothing and
///   writes fail.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_meta::{MetaContext, Object};
///
/// let ctx = MetaContext::new();
/// let mut root: HashMap<String, Box<dyn Object>> = HashMap::new();
///
/// let mut nav = ctx.navigator(&mut root);
/// nav.set("config.retries", 3_u32).unwrap();
///
/// assert_eq!(nav.get_value_as::<u32>("config.retries").unwrap(), Some(3));
/// assert!(nav.get_value("config.missing.deeper").unwrap().is_none());
/// ```
pub struct Navigator<'a> {
    target: Target<'a>,
    ctx: &'a MetaContext,
}

impl<'a> Navigator<'a> {
    /// Wraps a mutable object.
    #[inline]
    pub fn for_object(object: &'a mut dyn Object, ctx: &'a MetaContext) -> Self {
        Self {
            target: Target::Mut(object),
            ctx,
        }
    }

    /// Wraps an object for reading only.
    #[inline]
    pub fn for_ref(object: &'a dyn Object, ctx: &'a MetaContext) -> Self {
        Self {
            target: Target::Ref(object),
            ctx,
        }
    }

    /// Wraps an optional object; `None` gives an absent navigator.
    #[inline]
    pub fn for_option(object: Option<&'a mut dyn Object>, ctx: &'a MetaContext) -> Self {
        match object {
            Some(object) => Self::for_object(object, ctx),
            None => Self::absent(ctx),
        }
    }

    /// A navigator without an object.
    #[inline]
    pub const fn absent(ctx: &'a MetaContext) -> Self {
        Self {
            target: Target::Absent,
            ctx,
        }
    }

    fn from_value(value: Option<Value<'a>>, ctx: &'a MetaContext) -> Self {
        let target = match value {
            None => Target::Absent,
            Some(Value::Ref(object)) => Target::Ref(object),
            Some(Value::Owned(object)) => Target::Owned(object),
        };
        Self { target, ctx }
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self.target, Target::Absent)
    }

    #[inline]
    pub const fn context(&self) -> &'a MetaContext {
        self.ctx
    }

    /// The wrapped object.
    pub fn original_object(&self) -> Option<&dyn Object> {
        match &self.target {
            Target::Absent => None,
            Target::Ref(object) => Some(*object),
            Target::Mut(object) => Some(&**object),
            Target::Owned(object) => Some(&**object),
        }
    }

    /// The wrapped object, unless it is read-only.
    pub fn original_object_mut(&mut self) -> Option<&mut dyn Object> {
        match &mut self.target {
            Target::Mut(object) => Some(&mut **object),
            Target::Owned(object) => Some(&mut **object),
            Target::Absent | Target::Ref(_) => None,
        }
    }

    // -------------------------------------------------------------------------
    // Reads

    /// Reads the value at `path`.
    ///
    /// A `None` anywhere along the path reads as `None`; this cannot be told
    /// apart from a property that actually holds `None`.
    ///
    /// # Errors
    ///
    /// Unknown properties, bad indices and failing accessors.
    pub fn get_value(&self, path: &str) -> Result<Option<Value<'_>>, MetaError> {
        match self.original_object() {
            Some(object) => get_path(object, path, self.ctx),
            None => Ok(None),
        }
    }

    /// Reads the value at `path` as a `T`, cloning borrowed values.
    ///
    /// # Errors
    ///
    /// As [`get_value`](Self::get_value), plus [`MetaError::IncompatibleValue`]
    /// if the value is not a `T`.
    pub fn get_value_as<T: Typed>(&self, path: &str) -> Result<Option<T>, MetaError> {
        let Some(value) = self.get_value(path)? else {
            return Ok(None);
        };
        value.take::<T>().map(Some).map_err(|found| MetaError::IncompatibleValue {
            segment: path.into(),
            type_name: self.type_name(),
            source: ElementError::Incompatible {
                expected: T::type_of().name(),
                found: found.object_type().name(),
            },
        })
    }

    /// Borrows the value at `path` mutably.
    ///
    /// Computed properties without a mutable path fail, see
    /// [`InvokeError::NoMutableAccess`](crate::class::InvokeError::NoMutableAccess).
    pub fn get_value_mut(&mut self, path: &str) -> Result<Option<&mut dyn Object>, MetaError> {
        let ctx = self.ctx;
        match self.original_object_mut() {
            Some(object) => get_path_mut(object, path, ctx),
            None => Ok(None),
        }
    }

    // -------------------------------------------------------------------------
    // Writes

    /// Writes `value` at `path`, creating missing intermediates.
    ///
    /// Writing `None` through a missing intermediate does nothing.
    ///
    /// # Errors
    ///
    /// [`MetaError::UnsupportedOperation`] on read-only and absent navigators,
    /// [`MetaError::VivificationFailed`] if an intermediate cannot be
    /// created, and whatever the adapters report.
    pub fn set_value(
        &mut self,
        path: &str,
        value: Option<Box<dyn Object>>,
    ) -> Result<(), MetaError> {
        let ctx = self.ctx;
        let object = self.writable("writes")?;
        set_path(object, path, value, ctx)
    }

    /// Writes `value` at `path`.
    #[inline]
    pub fn set(&mut self, path: &str, value: impl Object) -> Result<(), MetaError> {
        self.set_value(path, Some(Box::new(value)))
    }

    /// Writes `None` at `path`.
    #[inline]
    pub fn set_null(&mut self, path: &str) -> Result<(), MetaError> {
        self.set_value(path, None)
    }

    /// Appends `element` to the wrapped collection.
    ///
    /// Needs an adapter that supports adding, such as
    /// [`CollectionAdapter`](crate::adapter::CollectionAdapter).
    pub fn add(&mut self, element: impl Object) -> Result<(), MetaError> {
        let ctx = self.ctx;
        let object = self.writable("add")?;
        let adapter = Adapter::resolve(object, ctx)?;
        adapter.as_dyn().add(object, Box::new(element), ctx)
    }

    /// Appends every element to the wrapped collection.
    pub fn add_all(&mut self, elements: Vec<Box<dyn Object>>) -> Result<(), MetaError> {
        let ctx = self.ctx;
        let object = self.writable("add_all")?;
        let adapter = Adapter::resolve(object, ctx)?;
        adapter.as_dyn().add_all(object, elements, ctx)
    }

    // -------------------------------------------------------------------------
    // Children

    /// A read-only navigator over the value at `name`.
    ///
    /// Absent if the value is `None`.
    pub fn child(&self, name: &str) -> Result<Navigator<'_>, MetaError> {
        let value = self.get_value(name)?;
        Ok(Navigator::from_value(value, self.ctx))
    }

    /// A writable navigator over the value at `name`.
    ///
    /// Absent if the value is `None`.
    pub fn child_mut(&mut self, name: &str) -> Result<Navigator<'_>, MetaError> {
        let ctx = self.ctx;
        let child = self.get_value_mut(name)?;
        Ok(Navigator::for_option(child, ctx))
    }

    // -------------------------------------------------------------------------
    // Introspection

    /// Readable property names of the wrapped object, sorted.
    pub fn getter_names(&self) -> Vec<String> {
        self.inspect(Vec::new(), |adapter, object, ctx| adapter.getter_names(object, ctx))
    }

    /// Writable property names of the wrapped object, sorted.
    pub fn setter_names(&self) -> Vec<String> {
        self.inspect(Vec::new(), |adapter, object, ctx| adapter.setter_names(object, ctx))
    }

    pub fn getter_type(&self, name: &str) -> Option<Type> {
        self.inspect(None, |adapter, object, ctx| adapter.getter_type(object, name, ctx))
    }

    pub fn setter_type(&self, name: &str) -> Option<Type> {
        self.inspect(None, |adapter, object, ctx| adapter.setter_type(object, name, ctx))
    }

    pub fn has_getter(&self, name: &str) -> bool {
        self.inspect(false, |adapter, object, ctx| adapter.has_getter(object, name, ctx))
    }

    pub fn has_setter(&self, name: &str) -> bool {
        self.inspect(false, |adapter, object, ctx| adapter.has_setter(object, name, ctx))
    }

    /// Returns `true` if the wrapped object is a list, array or set.
    pub fn is_collection(&self) -> bool {
        self.original_object()
            .is_some_and(|object| self.ctx.object_factory().is_collection(&object.object_type()))
    }

    // -------------------------------------------------------------------------
    // Helpers

    fn type_name(&self) -> &'static str {
        self.original_object()
            .map_or(ABSENT, |object| object.object_type().name())
    }

    fn writable(&mut self, operation: &'static str) -> Result<&mut dyn Object, MetaError> {
        let type_name = self.type_name();
        self.original_object_mut()
            .ok_or(MetaError::UnsupportedOperation {
                type_name,
                operation,
            })
    }

    fn inspect<R>(
        &self,
        nothing: R,
        f: impl FnOnce(&dyn ObjectAdapter, &dyn Object, &MetaContext) -> R,
    ) -> R {
        let Some(object) = self.original_object() else {
            return nothing;
        };
        match Adapter::resolve(object, self.ctx) {
            Ok(adapter) => f(adapter.as_dyn(), object, self.ctx),
            Err(error) => {
                log::warn!("cannot inspect `{}`: {error}", object.object_type());
                nothing
            }
        }
    }
}

impl fmt::Debug for Navigator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.target {
            Target::Absent => "absent",
            Target::Ref(_) => "read-only",
            Target::Mut(_) => "writable",
            Target::Owned(_) => "owned",
        };
        f.debug_struct("Navigator")
            .field("type", &self.type_name())
            .field("mode", &mode)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Recursion

fn get_path<'o>(
    object: &'o dyn Object,
    path: &str,
    ctx: &MetaContext,
) -> Result<Option<Value<'o>>, MetaError> {
    let segment = Segment::parse(path);
    let adapter = Adapter::resolve(object, ctx)?;
    let Some(value) = adapter.as_dyn().get(object, &segment, ctx)? else {
        return Ok(None);
    };
    let Some(rest) = segment.remainder() else {
        return Ok(Some(value));
    };
    match value {
        Value::Ref(child) => get_path(child, rest, ctx),
        Value::Owned(child) => Ok(get_path(&*child, rest, ctx)?.map(Value::detach)),
    }
}

fn get_path_mut<'o>(
    object: &'o mut dyn Object,
    path: &str,
    ctx: &MetaContext,
) -> Result<Option<&'o mut dyn Object>, MetaError> {
    let segment = Segment::parse(path);
    let adapter = Adapter::resolve(object, ctx)?;
    let Some(child) = adapter.as_dyn().get_mut(object, &segment, ctx)? else {
        return Ok(None);
    };
    match segment.remainder() {
        Some(rest) => get_path_mut(child, rest, ctx),
        None => Ok(Some(child)),
    }
}

fn set_path(
    object: &mut dyn Object,
    path: &str,
    value: Option<Box<dyn Object>>,
    ctx: &MetaContext,
) -> Result<(), MetaError> {
    let segment = Segment::parse(path);
    let resolved = Adapter::resolve(object, ctx)?;
    let adapter = resolved.as_dyn();

    let Some(rest) = segment.remainder() else {
        return adapter.set(object, &segment, value, ctx);
    };

    let present = adapter.get(object, &segment, ctx)?.is_some();
    let child = if present {
        let type_name = object.object_type().name();
        adapter
            .get_mut(object, &segment, ctx)?
            .ok_or_else(|| not_borrowable(&segment, type_name, segment.name()))?
    } else if value.is_none() {
        return Ok(());
    } else {
        log::debug!(
            "instantiating missing `{}` on `{}`",
            segment.indexed_name(),
            object.object_type(),
        );
        adapter.instantiate_missing_property(object, &segment, ctx)?
    };
    set_path(child, rest, value, ctx)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use crate::adapter::AdapterRegistry;
    use crate::class::InvokeError;
    use crate::factory::InstantiateError;
    use crate::{Bean, MetaContext, MetaError, Navigator, Object, Typed, methods};

    #[derive(Bean, Clone, Default, Debug, PartialEq)]
    #[bean(default)]
    struct Address {
        city: Option<String>,
        zip: u32,
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default)]
    struct User {
        name: String,
        address: Option<Address>,
        attributes: HashMap<String, Box<dyn Object>>,
        tags: [String; 2],
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default)]
    struct Person {
        name: String,
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default, methods)]
    struct Employee {
        #[bean(parent)]
        person: Person,
        home: Address,
    }

    #[methods]
    impl Employee {
        pub fn get_name(&self) -> String {
            String::from("employee")
        }

        pub fn get_office(&self) -> Address {
            Address {
                city: Some(String::from("Shanghai")),
                zip: 200000,
            }
        }
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default, methods)]
    struct Holder {
        #[bean(skip)]
        slot: Option<Address>,
    }

    #[methods]
    impl Holder {
        pub fn get_address(&self) -> Option<Address> {
            self.slot.clone()
        }

        pub fn set_address(&mut self, address: Option<Address>) {
            self.slot = address;
        }
    }

    #[derive(Bean, Clone)]
    struct Part {
        weight: u32,
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default)]
    struct Assembly {
        first: Option<Part>,
        second: Option<Part>,
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default)]
    struct Secret {
        #[bean(readonly)]
        token: String,
    }

    #[test]
    fn set_then_get() {
        let ctx = MetaContext::new();
        let mut user = User::default();
        let mut nav = ctx.navigator(&mut user);

        nav.set("name", String::from("ann")).unwrap();
        assert_eq!(nav.get_value_as::<String>("name").unwrap().as_deref(), Some("ann"));
        assert_eq!(user.name, "ann");
    }

    #[test]
    fn repeated_writes_are_idempotent() {
        let ctx = MetaContext::new();
        let mut user = User::default();
        let mut nav = ctx.navigator(&mut user);

        nav.set("address.zip", 10_u32).unwrap();
        nav.set("address.zip", 10_u32).unwrap();
        assert_eq!(nav.get_value_as::<u32>("address.zip").unwrap(), Some(10));
        assert_eq!(user.address, Some(Address { city: None, zip: 10 }));

        let mut tree: HashMap<String, Box<dyn Object>> = HashMap::new();
        let mut nav = ctx.navigator(&mut tree);
        nav.set("a.b.c", 1_i32).unwrap();
        nav.set("a.b.c", 1_i32).unwrap();
        assert_eq!(nav.get_value_as::<i32>("a.b.c").unwrap(), Some(1));
        assert_eq!(nav.getter_names(), ["a"]);
        assert_eq!(nav.child("a").unwrap().getter_names(), ["b"]);
    }

    #[test]
    fn vivifies_missing_intermediates() {
        let ctx = MetaContext::new();
        let mut user = User::default();

        ctx.navigator(&mut user)
            .set("address.city", String::from("Beijing"))
            .unwrap();
        let city = user.address.and_then(|address| address.city);
        assert_eq!(city.as_deref(), Some("Beijing"));
    }

    #[test]
    fn null_writes_through_missing_paths_do_nothing() {
        let ctx = MetaContext::new();
        let mut user = User::default();

        ctx.navigator(&mut user).set_null("address.city").unwrap();
        assert!(user.address.is_none());
    }

    #[test]
    fn broken_reads_are_none() {
        let ctx = MetaContext::new();
        let mut user = User::default();
        let nav = ctx.navigator(&mut user);

        assert!(nav.get_value("address.city").unwrap().is_none());
        assert!(matches!(
            nav.get_value("nickname"),
            Err(MetaError::AccessorNotFound { .. })
        ));
    }

    #[test]
    fn indexes_into_map_values() {
        let ctx = MetaContext::new();
        let mut user = User::default();
        user.attributes
            .insert(String::from("scores"), Box::new(vec![90_i32, 100, 85]));
        let mut nav = ctx.navigator(&mut user);

        assert_eq!(nav.get_value_as::<i32>("attributes[scores].[1]").unwrap(), Some(100));
        assert_eq!(nav.get_value_as::<i32>("attributes[scores].[2]").unwrap(), Some(85));

        nav.set("attributes[scores].[0]", 95_i32).unwrap();
        assert_eq!(nav.get_value_as::<i32>("attributes[scores].[0]").unwrap(), Some(95));

        nav.set("attributes[level]", 3_u8).unwrap();
        assert_eq!(nav.get_value_as::<u8>("attributes[level]").unwrap(), Some(3));
    }

    #[test]
    fn array_writes_touch_one_slot() {
        let ctx = MetaContext::new();
        let mut user = User::default();
        user.tags[1] = String::from("kept");

        ctx.navigator(&mut user).set("tags[0]", String::from("new")).unwrap();
        assert_eq!(user.tags, ["new", "kept"]);

        let err = ctx
            .navigator(&mut user)
            .set("tags[2]", String::new())
            .unwrap_err();
        assert!(matches!(err, MetaError::IndexOutOfRange { index: 2, len: 2, .. }));
    }

    #[test]
    fn fields_without_setters_are_writable() {
        let ctx = MetaContext::new();
        let mut person = Person::default();
        let mut nav = ctx.navigator(&mut person);

        assert!(nav.has_setter("name"));
        nav.set("name", String::from("bo")).unwrap();
        assert_eq!(person.name, "bo");
    }

    #[test]
    fn child_getter_wins_over_parent_field() {
        let ctx = MetaContext::new();
        let mut employee = Employee::default();
        let mut nav = ctx.navigator(&mut employee);

        assert_eq!(nav.get_value_as::<String>("name").unwrap().as_deref(), Some("employee"));

        // The parent field still takes writes.
        nav.set("name", String::from("cy")).unwrap();
        assert_eq!(employee.person.name, "cy");
    }

    #[test]
    fn computed_values_are_read_only() {
        let ctx = MetaContext::new();
        let mut employee = Employee::default();
        let mut nav = ctx.navigator(&mut employee);

        let city = nav.get_value_as::<String>("office.city").unwrap();
        assert_eq!(city.as_deref(), Some("Shanghai"));

        let err = nav.set("office.zip", 1_u32).unwrap_err();
        assert!(matches!(
            err,
            MetaError::PropertyAccessFailed {
                source: InvokeError::NoMutableAccess { .. },
                ..
            }
        ));

        nav.set("home.zip", 1_u32).unwrap();
        assert_eq!(employee.home.zip, 1);
    }

    #[test]
    fn failed_vivification_leaves_the_graph_untouched() {
        let ctx = MetaContext::new();
        let mut holder = Holder::default();

        let err = ctx
            .navigator(&mut holder)
            .set("address.zip", 5_u32)
            .unwrap_err();
        assert!(matches!(
            err,
            MetaError::PropertyAccessFailed {
                source: InvokeError::NoMutableAccess { .. },
                ..
            }
        ));
        assert!(holder.slot.is_none());

        // Setting the whole value still goes through the setter.
        let address = Address { city: None, zip: 5 };
        ctx.navigator(&mut holder).set("address", address.clone()).unwrap();
        assert_eq!(holder.slot, Some(address));
    }

    #[test]
    fn vivification_errors_name_the_property() {
        let ctx = MetaContext::new();
        let mut assembly = Assembly::default();

        let err = ctx
            .navigator(&mut assembly)
            .set("second.weight", 1_u32)
            .unwrap_err();
        let MetaError::VivificationFailed {
            ref segment,
            type_name,
            ref property,
            ref source,
        } = err
        else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(segment, "second");
        assert_eq!(property, "second");
        assert!(type_name.ends_with("Assembly"));
        assert!(matches!(
            **source,
            MetaError::InstantiationFailed {
                source: InstantiateError::NoDefaultConstructor,
                ..
            }
        ));
        assert!(assembly.first.is_none() && assembly.second.is_none());
    }

    #[test]
    fn readonly_fields_reject_writes() {
        let ctx = MetaContext::new();
        let mut secret = Secret::default();
        let mut nav = ctx.navigator(&mut secret);

        assert!(nav.has_getter("token"));
        assert!(!nav.has_setter("token"));
        assert!(matches!(
            nav.set("token", String::new()),
            Err(MetaError::AccessorNotFound { role: "setter", .. })
        ));
    }

    #[test]
    fn typed_reads_check_the_type() {
        let ctx = MetaContext::new();
        let mut user = User::default();
        let nav = ctx.navigator(&mut user);

        let err = nav.get_value_as::<u64>("name").unwrap_err();
        assert!(matches!(err, MetaError::IncompatibleValue { .. }));
    }

    #[test]
    fn absent_and_read_only() {
        let ctx = MetaContext::new();

        let mut absent = Navigator::for_option(None, &ctx);
        assert!(absent.is_absent());
        assert!(absent.get_value("a.b").unwrap().is_none());
        assert!(absent.getter_names().is_empty());
        assert!(!absent.has_getter("a"));
        assert!(matches!(
            absent.set("a", 1_u8),
            Err(MetaError::UnsupportedOperation { type_name: "none", .. })
        ));

        let user = User::default();
        let mut nav = Navigator::for_ref(&user, &ctx);
        assert!(nav.get_value("name").unwrap().is_some());
        assert!(matches!(
            nav.set_null("name"),
            Err(MetaError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn children() {
        let ctx = MetaContext::new();
        let mut user = User::default();
        let mut nav = ctx.navigator(&mut user);

        assert!(nav.child("address").unwrap().is_absent());
        nav.set("address.zip", 7_u32).unwrap();

        let child = nav.child("address").unwrap();
        assert_eq!(child.get_value_as::<u32>("zip").unwrap(), Some(7));
        assert!(!child.is_absent());

        nav.child_mut("address").unwrap().set("zip", 8_u32).unwrap();
        assert_eq!(user.address.map(|address| address.zip), Some(8));
    }

    #[test]
    fn introspection_is_shallow() {
        let ctx = MetaContext::new();
        let mut user = User::default();
        let nav = ctx.navigator(&mut user);

        assert_eq!(nav.getter_names(), ["address", "attributes", "name", "tags"]);
        assert_eq!(nav.getter_type("address"), Some(Address::type_of()));
        assert!(nav.has_getter("address"));
        assert!(!nav.has_getter("address.city"));
        assert!(!nav.is_collection());
        assert!(nav.original_object().is_some_and(|object| object.is::<User>()));
    }

    #[test]
    fn collections_through_a_registry() {
        let ctx = MetaContext::builder()
            .adapter_factory(AdapterRegistry::new().with_collections())
            .build();
        let mut list: Vec<String> = Vec::new();
        let mut nav = ctx.navigator(&mut list);

        assert!(nav.is_collection());
        nav.add(String::from("a")).unwrap();
        nav.add_all(vec![Box::new(String::from("b")) as Box<dyn Object>])
            .unwrap();
        assert_eq!(list, ["a", "b"]);

        let mut plain: Vec<String> = Vec::new();
        let err = MetaContext::new().navigator(&mut plain).add(String::new());
        assert!(matches!(err, Err(MetaError::UnsupportedOperation { .. })));
    }
}
