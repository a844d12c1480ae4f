use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Object;
use crate::class::{ConstructorInfo, FieldInfo, MethodInfo};

// -----------------------------------------------------------------------------
// ParentInfo

/// The embedded parent of a bean, marked with `#[bean(parent)]`.
///
/// Rust has no inheritance; a bean "extends" another one by embedding it.
/// The upcast shims project the child onto the embedded parent.
#[derive(Clone, Copy)]
pub struct ParentInfo {
    field: &'static str,
    class: fn() -> &'static ClassInfo,
    upcast: fn(&dyn Object) -> Option<&dyn Object>,
    upcast_mut: fn(&mut dyn Object) -> Option<&mut dyn Object>,
}

impl ParentInfo {
    #[inline]
    pub const fn new(
        field: &'static str,
        class: fn() -> &'static ClassInfo,
        upcast: fn(&dyn Object) -> Option<&dyn Object>,
        upcast_mut: fn(&mut dyn Object) -> Option<&mut dyn Object>,
    ) -> Self {
        Self {
            field,
            class,
            upcast,
            upcast_mut,
        }
    }

    /// Name of the embedding field.
    #[inline]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    #[inline]
    pub fn class(&self) -> &'static ClassInfo {
        (self.class)()
    }

    /// Projects a child onto its parent; `None` if `child` has the wrong type.
    #[inline]
    pub fn upcast<'a>(&self, child: &'a dyn Object) -> Option<&'a dyn Object> {
        (self.upcast)(child)
    }

    /// Projects a child onto its parent mutably.
    #[inline]
    pub fn upcast_mut<'a>(&self, child: &'a mut dyn Object) -> Option<&'a mut dyn Object> {
        (self.upcast_mut)(child)
    }
}

impl fmt::Debug for ParentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParentInfo")
            .field("field", &self.field)
            .field("class", &self.class().name())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ClassInfo

/// Everything a type exposes to the [`Reflector`](crate::reflector::Reflector).
///
/// # Examples
///
/// ```
/// use vc_meta::{Bean, methods};
///
/// #[derive(Bean, Clone)]
/// #[bean(methods)]
/// struct Point {
///     x: i32,
///     #[bean(skip)]
///     cache: u64,
/// }
///
/// #[methods]
/// impl Point {
///     fn origin() -> Self {
///         Point { x: 0, cache: 0 }
///     }
///
///     pub fn get_x(&self) -> i32 {
///         self.x
///     }
/// }
///
/// let class = Point::class();
/// assert_eq!(class.fields().len(), 1);
/// assert!(class.method("get_x").is_some());
/// assert!(class.default_constructor().is_some());
/// ```
pub struct ClassInfo {
    name: &'static str,
    fields: Box<[FieldInfo]>,
    methods: Box<[MethodInfo]>,
    constructors: Box<[ConstructorInfo]>,
    parent: Option<ParentInfo>,
}

impl ClassInfo {
    /// Creates an empty class.
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Box::new([]),
            methods: Box::new([]),
            constructors: Box::new([]),
            parent: None,
        }
    }

    #[inline]
    pub fn with_fields(mut self, fields: Vec<FieldInfo>) -> Self {
        self.fields = fields.into_boxed_slice();
        self
    }

    #[inline]
    pub fn with_methods(mut self, methods: Vec<MethodInfo>) -> Self {
        self.methods = methods.into_boxed_slice();
        self
    }

    #[inline]
    pub fn with_constructors(mut self, constructors: Vec<ConstructorInfo>) -> Self {
        self.constructors = constructors.into_boxed_slice();
        self
    }

    #[inline]
    pub fn with_parent(mut self, parent: ParentInfo) -> Self {
        self.parent = Some(parent);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Looks up a declared field; parents are not searched.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// Looks up a declared method; parents are not searched.
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|method| method.name() == name)
    }

    #[inline]
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    /// The first zero-parameter constructor.
    pub fn default_constructor(&self) -> Option<&ConstructorInfo> {
        self.constructors.iter().find(|ctor| ctor.param_count() == 0)
    }

    #[inline]
    pub const fn parent(&self) -> Option<&ParentInfo> {
        self.parent.as_ref()
    }
}

impl fmt::Debug for ClassInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassInfo")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .field("constructors", &self.constructors)
            .field("parent", &self.parent)
            .finish()
    }
}
