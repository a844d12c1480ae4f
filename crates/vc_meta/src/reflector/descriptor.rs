use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::class::{ClassInfo, ConstructorInfo, MethodInfo, ParentInfo};
use crate::hash::{HashMap, new_map};
use crate::reflector::invoker::{FieldInvoker, MethodInvoker, MutablePath, Route};
use crate::reflector::{Invoker, PropertyNamer};
use crate::{MetaError, Type};

// -----------------------------------------------------------------------------
// TypeDescriptor

/// The resolved properties of one type.
///
/// Built once by the [`Reflector`](crate::reflector::Reflector) and never
/// modified afterwards.
///
/// Accessor precedence:
///
/// - a getter or setter method wins over a field of the same name;
/// - a child's accessor wins over one of its embedded parents.
pub struct TypeDescriptor {
    ty: Type,
    get_invokers: HashMap<String, Invoker>,
    set_invokers: HashMap<String, Invoker>,
    default_constructor: Option<&'static ConstructorInfo>,
}

impl TypeDescriptor {
    /// A descriptor without properties, for types without class metadata.
    pub(crate) fn empty(ty: Type) -> Self {
        Self {
            ty,
            get_invokers: new_map(),
            set_invokers: new_map(),
            default_constructor: None,
        }
    }

    pub(crate) fn build(ty: Type, namer: &dyn PropertyNamer) -> Self {
        let Some(class) = ty.class() else {
            return Self::empty(ty);
        };

        let mut this = Self::empty(ty);
        this.default_constructor = class.default_constructor();

        let chain = class_chain(class);
        for &(class, ref route) in &chain {
            this.add_get_methods(class, route, namer);
        }
        for &(class, ref route) in &chain {
            this.add_set_methods(class, route, namer);
        }
        for &(class, ref route) in &chain {
            this.add_fields(class, route, namer);
        }
        this
    }

    fn add_get_methods(
        &mut self,
        class: &'static ClassInfo,
        route: &Route,
        namer: &dyn PropertyNamer,
    ) {
        for method in class.methods() {
            let name = method.name();
            if !method.is_getter() || !namer.is_getter(name) {
                continue;
            }
            if namer.requires_bool(name) && !method.value_type().is::<bool>() {
                continue;
            }
            let Some(property) = valid_property(namer, name) else {
                continue;
            };
            if self.get_invokers.contains_key(&property) {
                continue;
            }
            let mutable = mutable_path(class, method, &property);
            let invoker = MethodInvoker::new(&property, method, mutable, route.clone());
            self.get_invokers.insert(property, Invoker::Method(invoker));
        }
    }

    fn add_set_methods(
        &mut self,
        class: &'static ClassInfo,
        route: &Route,
        namer: &dyn PropertyNamer,
    ) {
        for method in class.methods() {
            let name = method.name();
            if !method.is_setter() || !namer.is_setter(name) {
                continue;
            }
            let Some(property) = valid_property(namer, name) else {
                continue;
            };
            if self.set_invokers.contains_key(&property) {
                continue;
            }
            let invoker = MethodInvoker::new(&property, method, MutablePath::None, route.clone());
            self.set_invokers.insert(property, Invoker::Method(invoker));
        }
    }

    fn add_fields(
        &mut self,
        class: &'static ClassInfo,
        route: &Route,
        namer: &dyn PropertyNamer,
    ) {
        for field in class.fields() {
            let name = field.name();
            if !namer.is_valid_property(name) {
                continue;
            }
            if !self.get_invokers.contains_key(name) {
                let invoker = FieldInvoker::new(field, route.clone());
                self.get_invokers.insert(name.into(), Invoker::Field(invoker));
            }
            if !field.is_readonly() && !self.set_invokers.contains_key(name) {
                let invoker = FieldInvoker::new(field, route.clone());
                self.set_invokers.insert(name.into(), Invoker::Field(invoker));
            }
        }
    }

    /// The described type.
    #[inline]
    pub fn ty(&self) -> Type {
        self.ty
    }

    /// Returns the getter of `property`.
    ///
    /// # Errors
    ///
    /// [`MetaError::AccessorNotFound`] if the type has no such getter.
    pub fn get_get_invoker(&self, property: &str) -> Result<&Invoker, MetaError> {
        self.get_invokers
            .get(property)
            .ok_or_else(|| self.not_found("getter", property))
    }

    /// Returns the setter of `property`.
    ///
    /// # Errors
    ///
    /// [`MetaError::AccessorNotFound`] if the type has no such setter.
    pub fn get_set_invoker(&self, property: &str) -> Result<&Invoker, MetaError> {
        self.set_invokers
            .get(property)
            .ok_or_else(|| self.not_found("setter", property))
    }

    #[inline]
    pub fn has_getter(&self, property: &str) -> bool {
        self.get_invokers.contains_key(property)
    }

    #[inline]
    pub fn has_setter(&self, property: &str) -> bool {
        self.set_invokers.contains_key(property)
    }

    /// The type a getter returns, without `Option`.
    #[inline]
    pub fn getter_type(&self, property: &str) -> Option<Type> {
        self.get_invokers.get(property).map(Invoker::value_type)
    }

    /// The type a setter accepts, without `Option`.
    #[inline]
    pub fn setter_type(&self, property: &str) -> Option<Type> {
        self.set_invokers.get(property).map(Invoker::value_type)
    }

    /// Readable property names, sorted.
    pub fn getter_names(&self) -> Vec<String> {
        sorted_names(&self.get_invokers)
    }

    /// Writable property names, sorted.
    pub fn setter_names(&self) -> Vec<String> {
        sorted_names(&self.set_invokers)
    }

    #[inline]
    pub fn has_default_constructor(&self) -> bool {
        self.default_constructor.is_some()
    }

    /// The zero-parameter constructor, private ones included.
    #[inline]
    pub fn default_constructor(&self) -> Option<&'static ConstructorInfo> {
        self.default_constructor
    }

    #[cold]
    fn not_found(&self, role: &'static str, property: &str) -> MetaError {
        MetaError::AccessorNotFound {
            role,
            type_name: self.ty.name(),
            property: property.into(),
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type", &self.ty.name())
            .field("getters", &self.getter_names())
            .field("setters", &self.setter_names())
            .field("default_constructor", &self.has_default_constructor())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Helpers

/// The class followed by its embedded parents, each with its upcast route.
fn class_chain(class: &'static ClassInfo) -> Vec<(&'static ClassInfo, Route)> {
    let mut chain = Vec::new();
    let mut parents: Vec<ParentInfo> = Vec::new();
    let mut current = Some(class);
    while let Some(class) = current {
        chain.push((class, Route::new(&parents)));
        current = class.parent().map(|parent| {
            parents.push(*parent);
            parent.class()
        });
    }
    chain
}

fn valid_property(namer: &dyn PropertyNamer, method: &str) -> Option<String> {
    let property = namer.property_name(method).ok()?;
    namer.is_valid_property(&property).then_some(property)
}

/// `<getter>_mut` if declared, else the field named like the property.
fn mutable_path(class: &'static ClassInfo, getter: &MethodInfo, property: &str) -> MutablePath {
    let companion = class
        .methods()
        .iter()
        .find(|method| method.is_getter_mut() && is_companion(getter.name(), method.name()));
    if let Some(method) = companion {
        return MutablePath::Method(method);
    }
    match class.field(property) {
        Some(field) => MutablePath::Field(field),
        None => MutablePath::None,
    }
}

#[inline]
fn is_companion(getter: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(getter)
        .is_some_and(|suffix| suffix == "_mut" || suffix == "Mut")
}

fn sorted_names(invokers: &HashMap<String, Invoker>) -> Vec<String> {
    let mut names: Vec<String> = invokers.keys().cloned().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use crate::reflector::{BeanNamer, Invoker, TypeDescriptor};
    use crate::{Bean, MetaError, Typed, methods};

    #[derive(Bean, Clone, Default)]
    #[bean(default)]
    struct Plain {
        name: String,
        #[bean(readonly)]
        id: u64,
        #[bean(skip)]
        _scratch: u8,
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default)]
    struct Base {
        name: String,
        age: u32,
    }

    #[derive(Bean, Clone, Default)]
    #[bean(default, methods)]
    struct Child {
        #[bean(parent)]
        base: Base,
        active: bool,
        level: u8,
    }

    #[methods]
    impl Child {
        pub fn get_name(&self) -> &str {
            "child"
        }

        pub fn is_active(&self) -> bool {
            self.active
        }

        pub fn is_level(&self) -> u8 {
            self.level
        }

        pub fn get_class(&self) -> String {
            String::from("Child")
        }
    }

    fn describe<T: Typed>() -> TypeDescriptor {
        TypeDescriptor::build(T::type_of(), &BeanNamer)
    }

    #[test]
    fn private_fields_without_setter() {
        let desc = describe::<Plain>();
        assert!(desc.has_getter("name"));
        assert!(desc.has_setter("name"));
        assert!(desc.has_getter("id"));
        assert!(!desc.has_setter("id"));
        assert!(!desc.has_getter("_scratch"));
        assert_eq!(desc.getter_names(), vec![String::from("id"), String::from("name")]);
        assert!(!desc.has_default_constructor());
    }

    #[test]
    fn child_getter_wins_over_parent_field() {
        let desc = describe::<Child>();
        let invoker = desc.get_get_invoker("name").unwrap();
        assert!(matches!(invoker, Invoker::Method(_)));
        assert!(!invoker.is_inherited());

        let child = Child::default();
        let value = invoker.get(&child).unwrap().unwrap();
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("child"));

        // No setter method: writes fall back to the parent's field.
        let setter = desc.get_set_invoker("name").unwrap();
        assert!(matches!(setter, Invoker::Field(_)));
        assert!(setter.is_inherited());
    }

    #[test]
    fn parent_fields_are_inherited() {
        let desc = describe::<Child>();
        let mut child = Child::default();
        let age = desc.get_set_invoker("age").unwrap();
        age.set(&mut child, Some(Box::new(7_u32))).unwrap();
        assert_eq!(child.base.age, 7);
    }

    #[test]
    fn is_getters_require_bool() {
        let desc = describe::<Child>();
        assert!(matches!(desc.get_get_invoker("active"), Ok(Invoker::Method(_))));
        // `is_level` returns `u8`; only the field remains.
        assert!(matches!(desc.get_get_invoker("level"), Ok(Invoker::Field(_))));
        assert!(!desc.has_getter("class"));
    }

    #[test]
    fn unknown_property() {
        let desc = describe::<Plain>();
        let err = desc.get_get_invoker("unknown").unwrap_err();
        assert!(matches!(
            err,
            MetaError::AccessorNotFound { role: "getter", ref property, .. }
                if property == "unknown"
        ));
        assert!(!desc.has_getter("unknown"));
    }

    #[test]
    fn values_have_no_properties() {
        let desc = describe::<u32>();
        assert!(desc.getter_names().is_empty());
        assert!(!desc.has_default_constructor());
    }
}
