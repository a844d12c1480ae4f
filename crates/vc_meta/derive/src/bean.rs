//! `#[derive(Bean)]`.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Type};

use crate::attributes::{FieldAttributes, TypeAttributes};
use crate::shape::option_inner;

// -----------------------------------------------------------------------------
// BeanField

/// A property-bearing field of the struct.
struct BeanField<'a> {
    ident: &'a Ident,
    /// The declared type without `Option`.
    ty: &'a Type,
    nullable: bool,
    readonly: bool,
}

/// The fields of a struct, split into properties and the embedded parent.
struct BeanFields<'a> {
    fields: Vec<BeanField<'a>>,
    parent: Option<(&'a Ident, &'a Type)>,
}

impl<'a> BeanFields<'a> {
    fn collect(data: &'a DataStruct) -> syn::Result<Self> {
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "`Bean` can only be derived for structs with named fields",
            ));
        };

        let mut this = Self {
            fields: Vec::with_capacity(named.named.len()),
            parent: None,
        };
        for field in &named.named {
            this.push(field)?;
        }
        Ok(this)
    }

    fn push(&mut self, field: &'a Field) -> syn::Result<()> {
        let attrs = FieldAttributes::parse(&field.attrs)?;
        // Named fields always carry an ident.
        let Some(ident) = &field.ident else {
            return Ok(());
        };

        if attrs.parent {
            if self.parent.is_some() {
                return Err(syn::Error::new_spanned(field, "a bean has at most one parent"));
            }
            if option_inner(&field.ty).is_some() || attrs.skip || attrs.readonly {
                return Err(syn::Error::new_spanned(
                    field,
                    "the parent must be a plain bean field without `skip` or `readonly`",
                ));
            }
            self.parent = Some((ident, &field.ty));
            return Ok(());
        }

        if attrs.skip {
            return Ok(());
        }

        let (ty, nullable) = match option_inner(&field.ty) {
            Some(inner) => (inner, true),
            None => (&field.ty, false),
        };
        self.fields.push(BeanField {
            ident,
            ty,
            nullable,
            readonly: attrs.readonly,
        });
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Generation

pub(crate) fn impl_bean(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &ast.data else {
        return Err(syn::Error::new(
            Span::call_site(),
            "`Bean` can only be derived for structs",
        ));
    };
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &ast.generics,
            "`Bean` does not support generic types",
        ));
    }

    let attrs = TypeAttributes::parse(&ast.attrs)?;
    let fields = BeanFields::collect(data)?;

    let vc_meta_path = crate::path::vc_meta();
    let exports = crate::path::macro_exports_(&vc_meta_path);
    let name = &ast.ident;

    let object_impl = impl_object(name, &attrs);
    let typed_impl = impl_typed(name, &attrs);
    let bean_impl = impl_class(name, &attrs, &fields);

    Ok(quote! {
        const _: () = {
            use #exports as __m;

            #object_impl

            #typed_impl

            #bean_impl
        };
    })
}

fn impl_object(name: &Ident, attrs: &TypeAttributes) -> TokenStream {
    let object_eq = attrs.partial_eq.then(|| {
        quote! {
            #[inline]
            fn object_eq(&self, other: &dyn __m::Object) -> ::core::option::Option<bool> {
                ::core::option::Option::Some(
                    other
                        .downcast_ref::<Self>()
                        .is_some_and(|other| ::core::cmp::PartialEq::eq(self, other)),
                )
            }
        }
    });

    let fmt_object = attrs.debug.then(|| {
        quote! {
            #[inline]
            fn fmt_object(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    });

    let self_adapter = attrs.adapter.as_ref().map(|adapter| {
        quote! {
            #[inline]
            fn self_adapter(
                &self,
            ) -> ::core::option::Option<&'static dyn __m::ObjectAdapter> {
                ::core::option::Option::Some(&#adapter)
            }
        }
    });

    quote! {
        impl __m::Object for #name {
            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            #[inline]
            fn into_any(self: __m::__Box<Self>) -> __m::__Box<dyn ::core::any::Any> {
                self
            }

            #[inline]
            fn as_object(&self) -> &dyn __m::Object {
                self
            }

            #[inline]
            fn as_object_mut(&mut self) -> &mut dyn __m::Object {
                self
            }

            #[inline]
            fn object_type(&self) -> __m::Type {
                <Self as __m::Typed>::type_of()
            }

            #[inline]
            fn object_ref(&self) -> __m::ObjectRef<'_> {
                __m::ObjectRef::Bean(self)
            }

            #[inline]
            fn object_mut(&mut self) -> __m::ObjectMut<'_> {
                __m::ObjectMut::Bean(self)
            }

            #[inline]
            fn object_owned(self: __m::__Box<Self>) -> __m::ObjectOwned {
                __m::ObjectOwned::Bean(self)
            }

            #[inline]
            fn clone_object(&self) -> __m::__Box<dyn __m::Object> {
                __m::__Box::new(::core::clone::Clone::clone(self))
            }

            #object_eq

            #fmt_object

            #self_adapter
        }
    }
}

fn impl_typed(name: &Ident, attrs: &TypeAttributes) -> TokenStream {
    let with_default = attrs.default.then(|| {
        quote! {
            .with_default(|| -> __m::__Box<dyn __m::Object> {
                __m::__Box::new(<#name as ::core::default::Default>::default())
            })
        }
    });

    quote! {
        impl __m::Typed for #name {
            fn type_of() -> __m::Type {
                __m::Type::new::<Self>(__m::TypeKind::Bean)
                    .with_class(<Self as __m::Bean>::class)
                    #with_default
            }
        }
    }
}

fn impl_class(name: &Ident, attrs: &TypeAttributes, fields: &BeanFields) -> TokenStream {
    let class_name = LitStr::new(&name.to_string(), name.span());

    let field_infos = fields.fields.iter().map(|field| field_info(name, field));

    let with_methods = attrs.methods.then(|| {
        quote! {
            .with_methods(<#name as __m::BeanMethods>::methods())
            .with_constructors(<#name as __m::BeanMethods>::constructors())
        }
    });

    let with_parent = fields.parent.map(|(ident, ty)| {
        let field_name = LitStr::new(&ident.to_string(), ident.span());
        quote! {
            .with_parent(__m::ParentInfo::new(
                #field_name,
                <#ty as __m::Bean>::class,
                |child| {
                    child
                        .downcast_ref::<#name>()
                        .map(|child| &child.#ident as &dyn __m::Object)
                },
                |child| {
                    child
                        .downcast_mut::<#name>()
                        .map(|child| &mut child.#ident as &mut dyn __m::Object)
                },
            ))
        }
    });

    quote! {
        impl __m::Bean for #name {
            fn class() -> &'static __m::ClassInfo {
                static CLASS: __m::OnceLock<__m::ClassInfo> = __m::OnceLock::new();
                CLASS.get_or_init(|| {
                    __m::ClassInfo::new(#class_name)
                        .with_fields(__m::__Vec::from([#(#field_infos),*]))
                        #with_methods
                        #with_parent
                })
            }
        }
    }
}

/// A `FieldInfo` with shims reading and writing `name.field`.
fn field_info(name: &Ident, field: &BeanField) -> TokenStream {
    let BeanField {
        ident,
        ty,
        nullable,
        readonly,
    } = field;
    let field_name = LitStr::new(&ident.to_string(), ident.span());

    let (as_ref, as_mut, arg, nullable) = if *nullable {
        (
            quote!(__m::option_ref),
            quote!(__m::option_mut),
            quote!(__m::optional_arg::<#ty>),
            Some(quote!(.nullable())),
        )
    } else {
        (
            quote!(__m::some_ref),
            quote!(__m::some_mut),
            quote!(__m::required_arg::<#ty>),
            None,
        )
    };
    let readonly = readonly.then(|| quote!(.readonly()));

    quote! {
        __m::FieldInfo::new(
            #field_name,
            <#ty as __m::Typed>::type_of(),
            |target| {
                ::core::result::Result::Ok(#as_ref(&__m::downcast_target::<#name>(target)?.#ident))
            },
            |target| {
                ::core::result::Result::Ok(
                    #as_mut(&mut __m::downcast_target_mut::<#name>(target)?.#ident),
                )
            },
            |target, value| {
                __m::downcast_target_mut::<#name>(target)?.#ident = #arg(value)?;
                ::core::result::Result::Ok(())
            },
        )
        #nullable
        #readonly
    }
}
