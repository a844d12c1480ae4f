use alloc::boxed::Box;
use core::fmt;

use crate::class::InvokeError;
use crate::{Object, Type};

type GetFn = fn(&dyn Object) -> Result<Option<&dyn Object>, InvokeError>;
type GetMutFn = fn(&mut dyn Object) -> Result<Option<&mut dyn Object>, InvokeError>;
type SetFn = fn(&mut dyn Object, Option<Box<dyn Object>>) -> Result<(), InvokeError>;

/// A named field of a bean.
///
/// Visibility is ignored: private fields are listed too. `Option<T>` fields
/// are nullable and report `T` as their type.
#[derive(Clone)]
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    nullable: bool,
    get: GetFn,
    get_mut: GetMutFn,
    set: Option<SetFn>,
}

impl FieldInfo {
    /// Creates a writable, non-nullable field.
    #[inline]
    pub fn new(name: &'static str, ty: Type, get: GetFn, get_mut: GetMutFn, set: SetFn) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            get,
            get_mut,
            set: Some(set),
        }
    }

    /// Marks the field as `Option<T>`.
    #[inline]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Removes the write shim.
    ///
    /// A read-only field can still be descended into for writes below it.
    #[inline]
    pub const fn readonly(mut self) -> Self {
        self.set = None;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type, without the `Option` wrapper.
    #[inline]
    pub const fn value_type(&self) -> Type {
        self.ty
    }

    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub const fn is_readonly(&self) -> bool {
        self.set.is_none()
    }

    /// Reads the field; `Ok(None)` means the field holds `None`.
    #[inline]
    pub fn get<'a>(&self, target: &'a dyn Object) -> Result<Option<&'a dyn Object>, InvokeError> {
        (self.get)(target)
    }

    /// Reads the field mutably.
    #[inline]
    pub fn get_mut<'a>(
        &self,
        target: &'a mut dyn Object,
    ) -> Result<Option<&'a mut dyn Object>, InvokeError> {
        (self.get_mut)(target)
    }

    /// Writes the field; `None` stores `None` into nullable fields.
    pub fn set(
        &self,
        target: &mut dyn Object,
        value: Option<Box<dyn Object>>,
    ) -> Result<(), InvokeError> {
        match self.set {
            Some(set) => set(target, value),
            None => Err(InvokeError::ReadOnly { name: self.name }),
        }
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("type", &self.ty.name())
            .field("nullable", &self.nullable)
            .field("readonly", &self.is_readonly())
            .finish()
    }
}
