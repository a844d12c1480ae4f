use alloc::boxed::Box;
use core::any::{TypeId, type_name};
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Object;
use crate::class::ClassInfo;
use crate::ops::{List, Map, Set, SortedSet};

// -----------------------------------------------------------------------------
// TypeKind

/// Abstract container requests, resolved by an
/// [`ObjectFactory`](crate::factory::ObjectFactory) to a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Abstract {
    /// Any ordered sequence.
    List,
    /// Any key-value mapping.
    Map,
    /// Any collection of unique elements.
    Set,
    /// A collection of unique elements kept in order.
    SortedSet,
}

/// The category of a [`Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Value,
    Bean,
    List,
    Array,
    Map,
    Set,
    /// `Box<dyn Object>`, a slot accepting every value.
    Any,
    /// An abstract request such as `Box<dyn List>`.
    Abstract(Abstract),
}

// -----------------------------------------------------------------------------
// Type

/// A copyable handle describing one type.
///
/// Two handles are equal if they describe the same [`TypeId`].
///
/// # Examples
///
/// ```
/// use vc_meta::{Type, Typed};
/// use vc_meta::object::TypeKind;
///
/// let ty = <Vec<u32> as Typed>::type_of();
/// assert_eq!(ty.kind(), TypeKind::List);
/// assert!(ty.is::<Vec<u32>>());
/// assert!(ty.default_fn().is_some());
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
    default: Option<fn() -> Box<dyn Object>>,
    class: Option<fn() -> &'static ClassInfo>,
}

impl Type {
    /// Creates a handle for `T` without default constructor or class.
    #[inline]
    pub fn new<T: ?Sized + 'static>(kind: TypeKind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            kind,
            default: None,
            class: None,
        }
    }

    /// Attaches a function producing a default instance.
    #[inline]
    pub const fn with_default(mut self, default: fn() -> Box<dyn Object>) -> Self {
        self.default = Some(default);
        self
    }

    /// Attaches the class metadata accessor.
    #[inline]
    pub const fn with_class(mut self, class: fn() -> &'static ClassInfo) -> Self {
        self.class = Some(class);
        self
    }

    /// Returns the handle of `T`, same as [`Typed::type_of`].
    #[inline]
    pub fn of<T: Typed>() -> Self {
        T::type_of()
    }

    /// The type of `Box<dyn Object>` slots.
    #[inline]
    pub fn any() -> Self {
        Self::new::<dyn Object>(TypeKind::Any)
    }

    /// The type of an abstract container request.
    pub fn abstract_of(kind: Abstract) -> Self {
        let tk = TypeKind::Abstract(kind);
        match kind {
            Abstract::List => Self::new::<dyn List>(tk),
            Abstract::Map => Self::new::<dyn Map>(tk),
            Abstract::Set => Self::new::<dyn Set>(tk),
            Abstract::SortedSet => Self::new::<dyn SortedSet>(tk),
        }
    }

    /// Returns the [`TypeId`].
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type name, e.g. `alloc::string::String`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns `true` if this handle describes `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Returns `true` for [`TypeKind::Abstract`] and [`TypeKind::Any`].
    #[inline]
    pub const fn is_abstract(&self) -> bool {
        matches!(self.kind, TypeKind::Abstract(_) | TypeKind::Any)
    }

    /// Returns the default-instance function, if the type has one.
    #[inline]
    pub const fn default_fn(&self) -> Option<fn() -> Box<dyn Object>> {
        self.default
    }

    /// Returns the class metadata, if the type has one.
    #[inline]
    pub fn class(&self) -> Option<&'static ClassInfo> {
        self.class.map(|class| class())
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for Type {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// -----------------------------------------------------------------------------
// Typed

/// Static type information for a sized [`Object`].
///
/// Every value that can be stored in a property, container element or
/// constructor argument implements `Typed`.
pub trait Typed: Object + Clone {
    /// Returns the [`Type`] handle of `Self`.
    fn type_of() -> Type;

    /// Converts a boxed object into `Self`.
    ///
    /// Returns the value unchanged if it has a different type. No coercion
    /// between types is attempted.
    #[inline]
    fn from_object(value: Box<dyn Object>) -> Result<Self, Box<dyn Object>> {
        value.take::<Self>()
    }
}
