use alloc::string::String;

use crate::MetaError;

// -----------------------------------------------------------------------------
// PropertyNamer

/// The policy mapping method names to property names.
///
/// The [`Reflector`](crate::reflector::Reflector) consults it once per
/// method while building a descriptor.
pub trait PropertyNamer: Send + Sync {
    /// Returns `true` if a method with this name reads a property.
    fn is_getter(&self, method: &str) -> bool;

    /// Returns `true` if a method with this name writes a property.
    fn is_setter(&self, method: &str) -> bool;

    /// Derives the property name from an accessor name.
    fn property_name(&self, method: &str) -> Result<String, MetaError>;

    /// Returns `true` if the getter only qualifies when it returns `bool`.
    fn requires_bool(&self, method: &str) -> bool;

    /// Returns `false` for names that never become properties.
    fn is_valid_property(&self, name: &str) -> bool {
        !(name.is_empty()
            || name.starts_with('$')
            || name == "serialVersionUID"
            || name == "class")
    }
}

// -----------------------------------------------------------------------------
// BeanNamer

/// The default naming policy.
///
/// Accepts both `get_name`/`is_active` and `getName`/`isActive`: the
/// `get`, `set` or `is` prefix and one following `_` are removed, then the
/// first character is lowercased unless the second one is uppercase.
///
/// # Examples
///
/// ```
/// use vc_meta::reflector::{BeanNamer, PropertyNamer};
///
/// let namer = BeanNamer;
/// assert_eq!(namer.property_name("get_name").unwrap(), "name");
/// assert_eq!(namer.property_name("getFirstName").unwrap(), "firstName");
/// assert_eq!(namer.property_name("getURL").unwrap(), "URL");
/// assert_eq!(namer.property_name("is_empty").unwrap(), "empty");
/// assert!(namer.property_name("name").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BeanNamer;

impl PropertyNamer for BeanNamer {
    #[inline]
    fn is_getter(&self, method: &str) -> bool {
        is_getter(method)
    }

    #[inline]
    fn is_setter(&self, method: &str) -> bool {
        is_setter(method)
    }

    #[inline]
    fn property_name(&self, method: &str) -> Result<String, MetaError> {
        method_to_property(method)
    }

    #[inline]
    fn requires_bool(&self, method: &str) -> bool {
        method.starts_with("is")
    }
}

// -----------------------------------------------------------------------------
// Functions

/// Derives a property name from `is*`, `get*` or `set*`.
///
/// A bare prefix produces an empty name.
pub fn method_to_property(method: &str) -> Result<String, MetaError> {
    let rest = if let Some(rest) = method.strip_prefix("is") {
        rest
    } else if let Some(rest) = method
        .strip_prefix("get")
        .or_else(|| method.strip_prefix("set"))
    {
        rest
    } else {
        return Err(MetaError::MalformedPropertyName {
            method: method.into(),
        });
    };
    let rest = rest.strip_prefix('_').unwrap_or(rest);

    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };
    let keep_case = chars.next().is_some_and(char::is_uppercase);
    if keep_case {
        return Ok(rest.into());
    }

    let mut name = String::with_capacity(rest.len());
    name.extend(first.to_lowercase());
    name.push_str(&rest[first.len_utf8()..]);
    Ok(name)
}

/// Returns `true` for `get*` names longer than the prefix, and `is*` ones.
#[inline]
pub fn is_getter(method: &str) -> bool {
    (method.starts_with("get") && method.len() > 3)
        || (method.starts_with("is") && method.len() > 2)
}

/// Returns `true` for `set*` names longer than the prefix.
#[inline]
pub fn is_setter(method: &str) -> bool {
    method.starts_with("set") && method.len() > 3
}

#[inline]
pub fn is_property(method: &str) -> bool {
    is_getter(method) || is_setter(method)
}

#[cfg(test)]
mod tests {
    use super::{BeanNamer, PropertyNamer, is_getter, is_property, is_setter, method_to_property};
    use crate::MetaError;

    #[test]
    fn decapitalization() {
        assert_eq!(method_to_property("getX").unwrap(), "x");
        assert_eq!(method_to_property("get_x").unwrap(), "x");
        assert_eq!(method_to_property("isActive").unwrap(), "active");
        assert_eq!(method_to_property("setURL").unwrap(), "URL");
        assert_eq!(method_to_property("get").unwrap(), "");
    }

    #[test]
    fn malformed_name() {
        let err = method_to_property("fetch_name").unwrap_err();
        assert!(matches!(
            err,
            MetaError::MalformedPropertyName { ref method } if method == "fetch_name"
        ));
    }

    #[test]
    fn classification() {
        assert!(is_getter("get_name"));
        assert!(is_getter("is_x"));
        assert!(!is_getter("get"));
        assert!(!is_getter("is"));
        assert!(is_setter("set_name"));
        assert!(!is_setter("set"));
        assert!(is_property("isOk"));
        assert!(!is_property("name"));
    }

    #[test]
    fn excluded_names() {
        let namer = BeanNamer;
        assert!(namer.is_valid_property("name"));
        assert!(!namer.is_valid_property("class"));
        assert!(!namer.is_valid_property("$jacoco"));
        assert!(!namer.is_valid_property("serialVersionUID"));
        assert!(!namer.is_valid_property(""));
    }
}
