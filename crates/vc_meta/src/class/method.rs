use alloc::boxed::Box;
use core::fmt;

use crate::class::InvokeError;
use crate::{Object, Type, Value};

/// The callable shim of a [`MethodInfo`].
#[derive(Clone, Copy)]
pub enum MethodBody {
    /// `fn(&self) -> T`, `-> &T`, `-> Option<T>` or `-> Option<&T>`.
    Getter(fn(&dyn Object) -> Result<Option<Value<'_>>, InvokeError>),
    /// `fn(&mut self) -> &mut T` or `-> Option<&mut T>`.
    GetterMut(fn(&mut dyn Object) -> Result<Option<&mut dyn Object>, InvokeError>),
    /// `fn(&mut self, T)` or `fn(&mut self, Option<T>)`.
    Setter(fn(&mut dyn Object, Option<Box<dyn Object>>) -> Result<(), InvokeError>),
}

/// A public method with a getter-, `_mut`- or setter-shaped signature.
///
/// Whether the method is a property accessor is decided later by the
/// naming policy, see [`PropertyNamer`](crate::reflector::PropertyNamer).
#[derive(Clone)]
pub struct MethodInfo {
    name: &'static str,
    ty: Type,
    nullable: bool,
    body: MethodBody,
}

impl MethodInfo {
    /// A getter; `ty` is the returned type without `&` or `Option`.
    #[inline]
    pub const fn getter(
        name: &'static str,
        ty: Type,
        body: fn(&dyn Object) -> Result<Option<Value<'_>>, InvokeError>,
    ) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            body: MethodBody::Getter(body),
        }
    }

    /// A mutable companion of a getter.
    #[inline]
    pub const fn getter_mut(
        name: &'static str,
        ty: Type,
        body: fn(&mut dyn Object) -> Result<Option<&mut dyn Object>, InvokeError>,
    ) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            body: MethodBody::GetterMut(body),
        }
    }

    /// A setter; `ty` is the parameter type without `Option`.
    #[inline]
    pub const fn setter(
        name: &'static str,
        ty: Type,
        body: fn(&mut dyn Object, Option<Box<dyn Object>>) -> Result<(), InvokeError>,
    ) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            body: MethodBody::Setter(body),
        }
    }

    /// Marks the returned or accepted value as `Option<T>`.
    #[inline]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The returned type for getters, the parameter type for setters.
    #[inline]
    pub const fn value_type(&self) -> Type {
        self.ty
    }

    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub const fn body(&self) -> MethodBody {
        self.body
    }

    /// Number of parameters besides the receiver.
    #[inline]
    pub const fn param_count(&self) -> usize {
        match self.body {
            MethodBody::Setter(_) => 1,
            MethodBody::Getter(_) | MethodBody::GetterMut(_) => 0,
        }
    }

    #[inline]
    pub const fn is_getter(&self) -> bool {
        matches!(self.body, MethodBody::Getter(_))
    }

    #[inline]
    pub const fn is_getter_mut(&self) -> bool {
        matches!(self.body, MethodBody::GetterMut(_))
    }

    #[inline]
    pub const fn is_setter(&self) -> bool {
        matches!(self.body, MethodBody::Setter(_))
    }

    /// Calls a getter.
    pub fn call_get<'a>(&self, target: &'a dyn Object) -> Result<Option<Value<'a>>, InvokeError> {
        match self.body {
            MethodBody::Getter(body) => body(target),
            _ => Err(self.wrong_role("getter")),
        }
    }

    /// Calls a `_mut` companion.
    pub fn call_get_mut<'a>(
        &self,
        target: &'a mut dyn Object,
    ) -> Result<Option<&'a mut dyn Object>, InvokeError> {
        match self.body {
            MethodBody::GetterMut(body) => body(target),
            _ => Err(self.wrong_role("mutable getter")),
        }
    }

    /// Calls a setter.
    pub fn call_set(
        &self,
        target: &mut dyn Object,
        value: Option<Box<dyn Object>>,
    ) -> Result<(), InvokeError> {
        match self.body {
            MethodBody::Setter(body) => body(target, value),
            _ => Err(self.wrong_role("setter")),
        }
    }

    #[cold]
    fn wrong_role(&self, role: &'static str) -> InvokeError {
        InvokeError::WrongRole {
            name: self.name,
            role,
        }
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.body {
            MethodBody::Getter(_) => "getter",
            MethodBody::GetterMut(_) => "getter_mut",
            MethodBody::Setter(_) => "setter",
        };
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("kind", &kind)
            .field("type", &self.ty.name())
            .field("nullable", &self.nullable)
            .finish()
    }
}
