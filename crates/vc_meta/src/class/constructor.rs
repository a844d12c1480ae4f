use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::class::InvokeError;
use crate::{Object, Type};

type CallFn = fn(Vec<Option<Box<dyn Object>>>) -> Result<Box<dyn Object>, InvokeError>;

/// An associated function returning `Self`.
///
/// Constructors are recorded whatever their visibility, so a private
/// `fn new() -> Self` still serves as the default constructor.
#[derive(Clone)]
pub struct ConstructorInfo {
    name: &'static str,
    params: Box<[Type]>,
    call: CallFn,
}

impl ConstructorInfo {
    #[inline]
    pub fn new(name: &'static str, params: Vec<Type>, call: CallFn) -> Self {
        Self {
            name,
            params: params.into_boxed_slice(),
            call,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared parameter types, without `Option` wrappers.
    #[inline]
    pub fn param_types(&self) -> &[Type] {
        &self.params
    }

    #[inline]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if the parameter types are exactly `types`.
    pub fn matches(&self, types: &[Type]) -> bool {
        *self.params == *types
    }

    /// Calls the constructor; `None` arguments are passed as null.
    pub fn invoke(
        &self,
        args: Vec<Option<Box<dyn Object>>>,
    ) -> Result<Box<dyn Object>, InvokeError> {
        if args.len() != self.params.len() {
            return Err(InvokeError::ArgumentCount {
                expected: self.params.len(),
                found: args.len(),
            });
        }
        (self.call)(args)
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish()
    }
}
