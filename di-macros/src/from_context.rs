//! `#[derive(FromContext)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, Type};

use crate::fields::named_fields;

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let root = root_type(&input)?;

    let inits = named_fields(&input, "FromContext")?.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote! { #ident: <#ty as crate::FromRef<#root>>::from_ref(root) }
    });

    Ok(quote! {
        impl #impl_generics crate::FromRef<#root> for #name #ty_generics #where_clause {
            fn from_ref(root: &#root) -> Self {
                Self { #(#inits),* }
            }
        }
    })
}

/// Reads `#[from_context(Context = "Root")]`, falling back to `Context`.
fn root_type(input: &DeriveInput) -> syn::Result<TokenStream> {
    let mut root: Option<Type> = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("from_context")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("Context") {
                let lit: LitStr = meta.value()?.parse()?;
                root = Some(lit.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `Context = \"Type\"`"))
            }
        })?;
    }

    Ok(match root {
        Some(ty) => quote! { #ty },
        None => quote! { Context },
    })
}
