//! `#[derive(Context)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::fields::named_fields;

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let root = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let impls = named_fields(&input, "Context")?.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;

        quote! {
            impl #impl_generics crate::FromRef<#root #ty_generics> for #ty #where_clause {
                fn from_ref(root: &#root #ty_generics) -> Self {
                    root.#ident.clone()
                }
            }
        }
    });

    Ok(quote! { #(#impls)* })
}
