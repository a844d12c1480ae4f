//! Shape checks on `syn` types.

use syn::{GenericArgument, Ident, PathArguments, ReturnType, Type, TypePath, TypeReference};

/// Returns `T` for `Option<T>`, `std::option::Option<T>` and the like.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let last = path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Returns `true` for `str`.
pub(crate) fn is_str(ty: &Type) -> bool {
    matches!(ty, Type::Path(TypePath { qself: None, path }) if path.is_ident("str"))
}

/// Returns `true` for `Self` or the bare name of the implementing type.
pub(crate) fn is_self(ty: &Type, name: &Ident) -> bool {
    match ty {
        Type::Path(TypePath { qself: None, path }) => {
            path.is_ident("Self") || path.is_ident(name)
        }
        _ => false,
    }
}

/// Returns `true` if values of `ty` can be named in a `Type::of` call.
///
/// Rejects types the generated code could not implement `Typed` for, such
/// as tuples, slices, references, trait objects and `impl Trait`.
pub(crate) fn is_nameable(ty: &Type) -> bool {
    match ty {
        Type::Path(TypePath { qself: None, .. }) => true,
        Type::Array(array) => is_nameable(&array.elem),
        Type::Paren(paren) => is_nameable(&paren.elem),
        Type::Group(group) => is_nameable(&group.elem),
        _ => false,
    }
}

/// Returns the returned type, or `None` for `()`.
pub(crate) fn output(ret: &ReturnType) -> Option<&Type> {
    match ret {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => match &**ty {
            Type::Tuple(tuple) if tuple.elems.is_empty() => None,
            ty => Some(ty),
        },
    }
}

/// Splits `&T` and `&mut T`.
pub(crate) fn reference(ty: &Type) -> Option<&TypeReference> {
    match ty {
        Type::Reference(reference) => Some(reference),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::{is_nameable, is_self, is_str, option_inner};

    #[test]
    fn options() {
        let ty: syn::Type = parse_quote!(Option<String>);
        assert!(option_inner(&ty).is_some());
        let ty: syn::Type = parse_quote!(::core::option::Option<&u8>);
        assert!(option_inner(&ty).is_some());
        let ty: syn::Type = parse_quote!(Vec<String>);
        assert!(option_inner(&ty).is_none());
    }

    #[test]
    fn names() {
        let name: syn::Ident = parse_quote!(User);
        assert!(is_self(&parse_quote!(Self), &name));
        assert!(is_self(&parse_quote!(User), &name));
        assert!(!is_self(&parse_quote!(Box<User>), &name));
        assert!(is_str(&parse_quote!(str)));
        assert!(is_nameable(&parse_quote!([u8; 4])));
        assert!(!is_nameable(&parse_quote!((u8, u8))));
        assert!(!is_nameable(&parse_quote!(&[u8])));
    }
}
