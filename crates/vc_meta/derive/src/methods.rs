//! `#[methods]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, LitStr, Signature, Type, Visibility};

use crate::attributes::{is_skipped, strip};
use crate::shape::{is_nameable, is_self, is_str, option_inner, output, reference};

// -----------------------------------------------------------------------------
// Receivers

#[derive(Clone, Copy, PartialEq, Eq)]
enum Receiver {
    None,
    Ref,
    Mut,
    /// `self`, `self: Box<Self>` and other receivers no shim can call.
    Other,
}

fn receiver(sig: &Signature) -> Receiver {
    match sig.receiver() {
        None => Receiver::None,
        Some(recv) if recv.colon_token.is_some() || recv.reference.is_none() => Receiver::Other,
        Some(recv) if recv.mutability.is_some() => Receiver::Mut,
        Some(_) => Receiver::Ref,
    }
}

/// The typed parameters after the receiver.
fn params(sig: &Signature) -> Vec<&Type> {
    sig.inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat) => Some(&*pat.ty),
            FnArg::Receiver(_) => None,
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Shims

/// `<ty as Typed>::type_of()`, with `&str` reported as `String`.
fn type_of(ty: &Type) -> TokenStream {
    if is_str(ty) {
        quote!(<__m::__String as __m::Typed>::type_of())
    } else {
        quote!(<#ty as __m::Typed>::type_of())
    }
}

/// A getter shim, or `None` if the return type cannot be exposed.
fn getter(name: &Ident, ret: &Type) -> Option<TokenStream> {
    let method = LitStr::new(&name.to_string(), name.span());
    let call = quote!(Self::#name(__m::downcast_target::<Self>(target)?));

    let (ty, value, nullable) = if let Some(inner) = option_inner(ret) {
        match reference(inner) {
            Some(r) if r.mutability.is_some() => return None,
            Some(r) if is_str(&r.elem) => (
                &*r.elem,
                quote!(#call.map(|value| __m::value_owned(__m::__String::from(value)))),
                true,
            ),
            Some(r) if is_nameable(&r.elem) => (&*r.elem, quote!(#call.map(__m::value_ref)), true),
            Some(_) => return None,
            None if is_nameable(inner) => (inner, quote!(#call.map(__m::value_owned)), true),
            None => return None,
        }
    } else {
        match reference(ret) {
            Some(r) if r.mutability.is_some() => return None,
            Some(r) if is_str(&r.elem) => (
                &*r.elem,
                quote!(::core::option::Option::Some(
                    __m::value_owned(__m::__String::from(#call))
                )),
                false,
            ),
            Some(r) if is_nameable(&r.elem) => (
                &*r.elem,
                quote!(::core::option::Option::Some(__m::value_ref(#call))),
                false,
            ),
            Some(_) => return None,
            None if is_nameable(ret) => (
                ret,
                quote!(::core::option::Option::Some(__m::value_owned(#call))),
                false,
            ),
            None => return None,
        }
    };

    let ty = type_of(ty);
    let nullable = nullable.then(|| quote!(.nullable()));
    Some(quote! {
        __m::MethodInfo::getter(
            #method,
            #ty,
            |target| ::core::result::Result::Ok(#value),
        )
        #nullable
    })
}

/// A `_mut` companion shim returning `&mut T` or `Option<&mut T>`.
fn getter_mut(name: &Ident, ret: &Type) -> Option<TokenStream> {
    let method = LitStr::new(&name.to_string(), name.span());
    let call = quote!(Self::#name(__m::downcast_target_mut::<Self>(target)?));

    let (inner, nullable) = match option_inner(ret) {
        Some(inner) => (inner, true),
        None => (ret, false),
    };
    let r = reference(inner).filter(|r| r.mutability.is_some())?;
    if !is_nameable(&r.elem) {
        return None;
    }

    let ty = type_of(&r.elem);
    let (value, nullable) = if nullable {
        (
            quote!(#call.map(|value| value as &mut dyn __m::Object)),
            Some(quote!(.nullable())),
        )
    } else {
        (quote!(__m::some_mut(#call)), None)
    };
    Some(quote! {
        __m::MethodInfo::getter_mut(
            #method,
            #ty,
            |target| ::core::result::Result::Ok(#value),
        )
        #nullable
    })
}

/// A setter shim taking one owned argument.
fn setter(name: &Ident, param: &Type) -> Option<TokenStream> {
    let method = LitStr::new(&name.to_string(), name.span());

    let (ty, arg, nullable) = match option_inner(param) {
        Some(inner) => (inner, quote!(__m::optional_arg::<#inner>), Some(quote!(.nullable()))),
        None => (param, quote!(__m::required_arg::<#param>), None),
    };
    if !is_nameable(ty) {
        return None;
    }

    let ty = type_of(ty);
    Some(quote! {
        __m::MethodInfo::setter(
            #method,
            #ty,
            |target, value| {
                let value = #arg(value)?;
                Self::#name(__m::downcast_target_mut::<Self>(target)?, value);
                ::core::result::Result::Ok(())
            },
        )
        #nullable
    })
}

/// A constructor shim reading its arguments in order.
fn constructor(name: &Ident, params: &[&Type]) -> Option<TokenStream> {
    let method = LitStr::new(&name.to_string(), name.span());

    let mut types = Vec::with_capacity(params.len());
    let mut args = Vec::with_capacity(params.len());
    for param in params {
        let (ty, next) = match option_inner(param) {
            Some(inner) => (inner, quote!(args.next_optional::<#inner>()?)),
            None => (*param, quote!(args.next_required::<#param>()?)),
        };
        if !is_nameable(ty) {
            return None;
        }
        types.push(type_of(ty));
        args.push(next);
    }

    Some(quote! {
        __m::ConstructorInfo::new(
            #method,
            __m::__Vec::from([#(#types),*]),
            |args| {
                let mut args = __m::Args::new(args);
                let value: __m::__Box<dyn __m::Object> = __m::__Box::new(Self::#name(#(#args),*));
                ::core::result::Result::Ok(value)
            },
        )
    })
}

// -----------------------------------------------------------------------------
// Classification

#[derive(Default)]
struct Collected {
    methods: Vec<TokenStream>,
    constructors: Vec<TokenStream>,
}

impl Collected {
    fn push(&mut self, func: &ImplItemFn, self_name: &Ident) {
        let sig = &func.sig;
        if !sig.generics.params.is_empty()
            || sig.asyncness.is_some()
            || sig.unsafety.is_some()
            || sig.variadic.is_some()
        {
            return;
        }

        let name = &sig.ident;
        let params = params(sig);
        let ret = output(&sig.output);
        let public = matches!(func.vis, Visibility::Public(_));

        let shim = match (receiver(sig), params.as_slice(), ret) {
            (Receiver::None, _, Some(ret)) if is_self(ret, self_name) => {
                if let Some(ctor) = constructor(name, &params) {
                    self.constructors.push(ctor);
                }
                return;
            }
            (Receiver::Ref, [], Some(ret)) if public => getter(name, ret),
            (Receiver::Mut, [], Some(ret)) if public => getter_mut(name, ret),
            (Receiver::Mut, [param], None) if public => setter(name, param),
            _ => None,
        };
        if let Some(shim) = shim {
            self.methods.push(shim);
        }
    }
}

// -----------------------------------------------------------------------------
// Generation

pub(crate) fn impl_methods(item: &mut ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "`#[methods]` only applies to inherent impl blocks",
        ));
    }
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "`#[methods]` does not support generic impl blocks",
        ));
    }
    let self_name = match &*item.self_ty {
        Type::Path(path) if path.qself.is_none() => match path.path.segments.last() {
            Some(segment) => segment.ident.clone(),
            None => return Err(syn::Error::new_spanned(&item.self_ty, "expected a type name")),
        },
        other => return Err(syn::Error::new_spanned(other, "expected a type name")),
    };

    let mut collected = Collected::default();
    for impl_item in &mut item.items {
        let ImplItem::Fn(func) = impl_item else {
            continue;
        };
        let skipped = is_skipped(&func.attrs)?;
        strip(&mut func.attrs);
        if !skipped {
            collected.push(func, &self_name);
        }
    }

    let vc_meta_path = crate::path::vc_meta();
    let exports = crate::path::macro_exports_(&vc_meta_path);
    let self_ty = &item.self_ty;
    let Collected {
        methods,
        constructors,
    } = collected;

    Ok(quote! {
        #item

        const _: () = {
            use #exports as __m;

            impl __m::BeanMethods for #self_ty {
                fn methods() -> __m::__Vec<__m::MethodInfo> {
                    __m::__Vec::from([#(#methods),*])
                }

                fn constructors() -> __m::__Vec<__m::ConstructorInfo> {
                    __m::__Vec::from([#(#constructors),*])
                }
            }
        };
    })
}
