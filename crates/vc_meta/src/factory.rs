//! Object construction.
//!
//! The navigator never builds values itself: every instance created while
//! auto-vivifying a path comes from the [`ObjectFactory`] of the
//! [`MetaContext`](crate::MetaContext).

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::class::{ClassInfo, InvokeError};
use crate::object::{Abstract, TypeKind};
use crate::{MetaError, Object, Type};

// -----------------------------------------------------------------------------
// InstantiateError

/// The cause of a [`MetaError::InstantiationFailed`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InstantiateError {
    #[error("the type has neither a default value nor a zero-parameter constructor")]
    NoDefaultConstructor,

    #[error("no constructor takes exactly these parameter types")]
    NoMatchingConstructor,

    #[error(transparent)]
    Constructor(#[from] InvokeError),
}

// -----------------------------------------------------------------------------
// ObjectFactory

/// A pluggable strategy for creating objects.
pub trait ObjectFactory: Send + Sync {
    /// Creates a default instance of `ty`.
    ///
    /// # Errors
    ///
    /// [`MetaError::InstantiationFailed`] if the type cannot be created.
    fn create(&self, ty: &Type) -> Result<Box<dyn Object>, MetaError> {
        self.create_with(ty, &[], Vec::new())
    }

    /// Creates an instance of `ty` through the constructor whose parameter
    /// types are exactly `arg_types`.
    ///
    /// Empty argument lists select the default instance, as [`create`](Self::create).
    fn create_with(
        &self,
        ty: &Type,
        arg_types: &[Type],
        args: Vec<Option<Box<dyn Object>>>,
    ) -> Result<Box<dyn Object>, MetaError>;

    /// Returns `true` if `ty` is a list, array or set.
    fn is_collection(&self, ty: &Type) -> bool;
}

// -----------------------------------------------------------------------------
// DefaultObjectFactory

/// The factory used unless [`MetaContextBuilder`](crate::MetaContextBuilder)
/// installs another one.
///
/// Abstract requests resolve to:
///
/// | request                  | created                                |
/// |--------------------------|----------------------------------------|
/// | `Box<dyn List>`          | `Vec<Box<dyn Object>>`                 |
/// | `Box<dyn Map>`, `Box<dyn Object>` | `HashMap<String, Box<dyn Object>>` |
/// | `Box<dyn Set>`           | `HashSet<String>`                      |
/// | sorted sets              | `BTreeSet<String>`                     |
///
/// Concrete types use their zero-parameter constructor first, private ones
/// included, then their default value.
///
/// # Examples
///
/// ```
/// use vc_meta::factory::{DefaultObjectFactory, ObjectFactory};
/// use vc_meta::object::Abstract;
/// use vc_meta::{Object, Type};
///
/// let factory = DefaultObjectFactory;
/// let list = factory.create(&Type::abstract_of(Abstract::List)).unwrap();
/// assert!(list.is::<Vec<Box<dyn Object>>>());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultObjectFactory;

impl DefaultObjectFactory {
    /// Maps abstract requests to the concrete type that will be created.
    pub fn resolve_abstract(&self, ty: &Type) -> Type {
        match ty.kind() {
            TypeKind::Abstract(Abstract::List) => Type::of::<Vec<Box<dyn Object>>>(),
            TypeKind::Abstract(Abstract::Map) | TypeKind::Any => {
                Type::of::<HashMap<String, Box<dyn Object>>>()
            }
            TypeKind::Abstract(Abstract::SortedSet) => Type::of::<BTreeSet<String>>(),
            TypeKind::Abstract(Abstract::Set) => Type::of::<HashSet<String>>(),
            _ => *ty,
        }
    }

    fn instantiate(ty: &Type) -> Result<Box<dyn Object>, InstantiateError> {
        if let Some(ctor) = ty.class().and_then(ClassInfo::default_constructor) {
            return Ok(ctor.invoke(Vec::new())?);
        }
        match ty.default_fn() {
            Some(default) => Ok(default()),
            None => Err(InstantiateError::NoDefaultConstructor),
        }
    }

    fn instantiate_with(
        ty: &Type,
        arg_types: &[Type],
        args: Vec<Option<Box<dyn Object>>>,
    ) -> Result<Box<dyn Object>, InstantiateError> {
        let ctor = ty
            .class()
            .and_then(|class| class.constructors().iter().find(|ctor| ctor.matches(arg_types)))
            .ok_or(InstantiateError::NoMatchingConstructor)?;
        Ok(ctor.invoke(args)?)
    }
}

impl ObjectFactory for DefaultObjectFactory {
    fn create_with(
        &self,
        ty: &Type,
        arg_types: &[Type],
        args: Vec<Option<Box<dyn Object>>>,
    ) -> Result<Box<dyn Object>, MetaError> {
        let target = self.resolve_abstract(ty);
        if arg_types.is_empty() && args.is_empty() {
            return Self::instantiate(&target)
                .map_err(|source| instantiation_failed(&target, "", "", source));
        }

        let arg_values = describe_values(&args);
        Self::instantiate_with(&target, arg_types, args).map_err(|source| {
            instantiation_failed(&target, &describe_types(arg_types), &arg_values, source)
        })
    }

    fn is_collection(&self, ty: &Type) -> bool {
        matches!(
            ty.kind(),
            TypeKind::List
                | TypeKind::Array
                | TypeKind::Set
                | TypeKind::Abstract(Abstract::List | Abstract::Set | Abstract::SortedSet)
        )
    }
}

// -----------------------------------------------------------------------------
// Helpers

#[cold]
fn instantiation_failed(
    ty: &Type,
    arg_types: &str,
    arg_values: &str,
    source: InstantiateError,
) -> MetaError {
    MetaError::InstantiationFailed {
        type_name: ty.name(),
        arg_types: arg_types.into(),
        arg_values: arg_values.into(),
        source,
    }
}

fn describe_types(types: &[Type]) -> String {
    let names: Vec<&str> = types.iter().map(Type::name).collect();
    names.join(", ")
}

fn describe_values(values: &[Option<Box<dyn Object>>]) -> String {
    let values: Vec<String> = values
        .iter()
        .map(|value| match value {
            Some(value) => format!("{value:?}"),
            None => String::from("null"),
        })
        .collect();
    values.join(", ")
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeSet;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::{HashMap, HashSet};

    use super::{DefaultObjectFactory, InstantiateError, ObjectFactory};
    use crate::object::Abstract;
    use crate::{Bean, MetaError, Object, Type, Typed, methods};

    #[derive(Bean, Clone)]
    #[bean(methods)]
    struct Account {
        owner: String,
        balance: i64,
    }

    #[methods]
    impl Account {
        fn empty() -> Self {
            Account {
                owner: String::from("nobody"),
                balance: 0,
            }
        }

        pub fn open(owner: String, balance: i64) -> Self {
            Account { owner, balance }
        }
    }

    #[derive(Bean, Clone)]
    struct Opaque {
        _id: u32,
    }

    #[test]
    fn abstract_requests() {
        let factory = DefaultObjectFactory;
        let create = |kind| factory.create(&Type::abstract_of(kind)).unwrap();

        assert!(create(Abstract::List).is::<Vec<Box<dyn Object>>>());
        assert!(create(Abstract::Map).is::<HashMap<String, Box<dyn Object>>>());
        assert!(create(Abstract::Set).is::<HashSet<String>>());
        assert!(create(Abstract::SortedSet).is::<BTreeSet<String>>());
        assert!(factory.create(&Type::any()).unwrap().is::<HashMap<String, Box<dyn Object>>>());
    }

    #[test]
    fn private_default_constructor() {
        let account = DefaultObjectFactory.create(&Account::type_of()).unwrap();
        let account = account.take::<Account>().ok().unwrap();
        assert_eq!(account.owner, "nobody");
        assert_eq!(account.balance, 0);
    }

    #[test]
    fn constructor_by_parameter_types() {
        let account = DefaultObjectFactory
            .create_with(
                &Account::type_of(),
                &[String::type_of(), i64::type_of()],
                vec![Some(Box::new(String::from("ann"))), Some(Box::new(40_i64))],
            )
            .unwrap();
        let account = account.downcast_ref::<Account>().unwrap();
        assert_eq!(account.owner, "ann");
        assert_eq!(account.balance, 40);
    }

    #[test]
    fn failure_describes_arguments() {
        let err = DefaultObjectFactory
            .create_with(&Account::type_of(), &[u32::type_of()], vec![Some(Box::new(5_u32))])
            .unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("error instantiating `"));
        assert!(text.ends_with("with invalid types (u32) or values (5)"));
        assert!(matches!(
            err,
            MetaError::InstantiationFailed {
                source: InstantiateError::NoMatchingConstructor,
                ..
            }
        ));
    }

    #[test]
    fn no_default() {
        let err = DefaultObjectFactory.create(&Opaque::type_of()).unwrap_err();
        assert!(matches!(
            err,
            MetaError::InstantiationFailed {
                source: InstantiateError::NoDefaultConstructor,
                ..
            }
        ));
    }

    #[test]
    fn collections() {
        let factory = DefaultObjectFactory;
        assert!(factory.is_collection(&Vec::<u8>::type_of()));
        assert!(factory.is_collection(&<[u8; 2]>::type_of()));
        assert!(factory.is_collection(&Type::abstract_of(Abstract::Set)));
        assert!(!factory.is_collection(&HashMap::<String, u8>::type_of()));
        assert!(!factory.is_collection(&"x".to_string().object_type()));
    }
}
