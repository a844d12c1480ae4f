use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::class::{FieldInfo, InvokeError, MethodInfo, ParentInfo};
use crate::{MetaError, Object, Type, Value};

// -----------------------------------------------------------------------------
// Route

/// The chain of embedded parents leading to the declaring class.
///
/// Empty when the accessor is declared by the object's own class.
#[derive(Clone, Default)]
pub(crate) struct Route {
    parents: Box<[ParentInfo]>,
}

impl Route {
    #[inline]
    pub(crate) fn new(parents: &[ParentInfo]) -> Self {
        Self {
            parents: parents.into(),
        }
    }

    fn upcast<'a>(&self, mut target: &'a dyn Object) -> Result<&'a dyn Object, InvokeError> {
        for parent in &self.parents {
            let found = target.object_type().name();
            target = parent.upcast(target).ok_or(InvokeError::TargetMismatch {
                expected: parent.class().name(),
                found,
            })?;
        }
        Ok(target)
    }

    fn upcast_mut<'a>(
        &self,
        mut target: &'a mut dyn Object,
    ) -> Result<&'a mut dyn Object, InvokeError> {
        for parent in &self.parents {
            let found = target.object_type().name();
            target = parent.upcast_mut(target).ok_or(InvokeError::TargetMismatch {
                expected: parent.class().name(),
                found,
            })?;
        }
        Ok(target)
    }

    #[inline]
    fn len(&self) -> usize {
        self.parents.len()
    }
}

// -----------------------------------------------------------------------------
// Invokers

/// Where a method-backed property is borrowed mutably.
#[derive(Clone, Copy)]
pub(crate) enum MutablePath {
    /// The `<getter>_mut` companion.
    Method(&'static MethodInfo),
    /// The field with the property's name.
    Field(&'static FieldInfo),
    None,
}

/// A property accessed through a getter or setter method.
#[derive(Clone)]
pub struct MethodInvoker {
    property: Box<str>,
    method: &'static MethodInfo,
    mutable: MutablePath,
    route: Route,
}

/// A property accessed directly through a field.
#[derive(Clone)]
pub struct FieldInvoker {
    field: &'static FieldInfo,
    route: Route,
}

impl MethodInvoker {
    #[inline]
    pub(crate) fn new(
        property: &str,
        method: &'static MethodInfo,
        mutable: MutablePath,
        route: Route,
    ) -> Self {
        Self {
            property: property.into(),
            method,
            mutable,
            route,
        }
    }

    /// The bound method.
    #[inline]
    pub fn method(&self) -> &'static MethodInfo {
        self.method
    }
}

impl FieldInvoker {
    #[inline]
    pub(crate) fn new(field: &'static FieldInfo, route: Route) -> Self {
        Self { field, route }
    }

    /// The bound field.
    #[inline]
    pub fn field(&self) -> &'static FieldInfo {
        self.field
    }
}

// -----------------------------------------------------------------------------
// Invoker

/// A property accessor resolved once per type.
///
/// Both variants are called the same way; callers never need to know
/// whether a method or a field backs the property.
#[derive(Clone)]
pub enum Invoker {
    Method(MethodInvoker),
    Field(FieldInvoker),
}

impl Invoker {
    /// The property this invoker serves.
    #[inline]
    pub fn property(&self) -> &str {
        match self {
            Self::Method(invoker) => &invoker.property,
            Self::Field(invoker) => invoker.field.name(),
        }
    }

    /// The name of the bound method or field.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Method(invoker) => invoker.method.name(),
            Self::Field(invoker) => invoker.field.name(),
        }
    }

    /// The declared value type, without `Option`.
    #[inline]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Method(invoker) => invoker.method.value_type(),
            Self::Field(invoker) => invoker.field.value_type(),
        }
    }

    /// Returns `true` if the property accepts or may return `None`.
    #[inline]
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Method(invoker) => invoker.method.is_nullable(),
            Self::Field(invoker) => invoker.field.is_nullable(),
        }
    }

    /// Returns `true` if the accessor is declared by an embedded parent.
    #[inline]
    pub fn is_inherited(&self) -> bool {
        let route = match self {
            Self::Method(invoker) => &invoker.route,
            Self::Field(invoker) => &invoker.route,
        };
        route.len() > 0
    }

    /// Returns `true` if [`get_mut`](Self::get_mut) has a way to borrow the
    /// property.
    #[inline]
    pub fn can_borrow_mut(&self) -> bool {
        !matches!(
            self,
            Self::Method(MethodInvoker {
                mutable: MutablePath::None,
                ..
            })
        )
    }

    /// Fails like [`get_mut`](Self::get_mut) would on a property without a
    /// mutable path, without touching the target.
    pub(crate) fn ensure_borrowable(&self, ty: Type) -> Result<(), MetaError> {
        if self.can_borrow_mut() {
            return Ok(());
        }
        Err(self.failed(
            "borrow",
            ty,
            InvokeError::NoMutableAccess { name: self.name() },
        ))
    }

    fn raw_get<'a>(&self, target: &'a dyn Object) -> Result<Option<Value<'a>>, InvokeError> {
        match self {
            Self::Method(invoker) => invoker.method.call_get(invoker.route.upcast(target)?),
            Self::Field(invoker) => {
                let value = invoker.field.get(invoker.route.upcast(target)?)?;
                Ok(value.map(Value::Ref))
            }
        }
    }

    fn raw_get_mut<'a>(
        &self,
        target: &'a mut dyn Object,
    ) -> Result<Option<&'a mut dyn Object>, InvokeError> {
        match self {
            Self::Method(invoker) => {
                let target = invoker.route.upcast_mut(target)?;
                match invoker.mutable {
                    MutablePath::Method(method) => method.call_get_mut(target),
                    MutablePath::Field(field) => field.get_mut(target),
                    MutablePath::None => Err(InvokeError::NoMutableAccess {
                        name: invoker.method.name(),
                    }),
                }
            }
            Self::Field(invoker) => invoker.field.get_mut(invoker.route.upcast_mut(target)?),
        }
    }

    fn raw_set(
        &self,
        target: &mut dyn Object,
        value: Option<Box<dyn Object>>,
    ) -> Result<(), InvokeError> {
        match self {
            Self::Method(invoker) => {
                let target = invoker.route.upcast_mut(target)?;
                invoker.method.call_set(target, value)
            }
            Self::Field(invoker) => invoker.field.set(invoker.route.upcast_mut(target)?, value),
        }
    }

    /// Reads the property; `Ok(None)` means it holds `None`.
    pub fn get<'a>(&self, target: &'a dyn Object) -> Result<Option<Value<'a>>, MetaError> {
        self.raw_get(target)
            .map_err(|source| self.failed("get", target.object_type(), source))
    }

    /// Borrows the property mutably, to descend into it.
    pub fn get_mut<'a>(
        &self,
        target: &'a mut dyn Object,
    ) -> Result<Option<&'a mut dyn Object>, MetaError> {
        let ty = target.object_type();
        self.raw_get_mut(target)
            .map_err(|source| self.failed("borrow", ty, source))
    }

    /// Writes the property; `None` writes null.
    pub fn set(
        &self,
        target: &mut dyn Object,
        value: Option<Box<dyn Object>>,
    ) -> Result<(), MetaError> {
        let ty = target.object_type();
        self.raw_set(target, value)
            .map_err(|source| self.failed("set", ty, source))
    }

    #[cold]
    fn failed(&self, action: &'static str, ty: Type, source: InvokeError) -> MetaError {
        MetaError::PropertyAccessFailed {
            action,
            type_name: ty.name(),
            property: String::from(self.property()),
            source,
        }
    }
}

impl fmt::Debug for Invoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, mutable) = match self {
            Self::Method(invoker) => {
                let mutable = match invoker.mutable {
                    MutablePath::Method(method) => Some(method.name()),
                    MutablePath::Field(field) => Some(field.name()),
                    MutablePath::None => None,
                };
                ("method", mutable)
            }
            Self::Field(_) => ("field", None),
        };
        f.debug_struct("Invoker")
            .field("property", &self.property())
            .field("kind", &kind)
            .field("name", &self.name())
            .field("type", &self.value_type().name())
            .field("mutable", &mutable)
            .field("inherited", &self.is_inherited())
            .finish()
    }
}
