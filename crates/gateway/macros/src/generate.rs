//! Code generation for the `Constrained` derive

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields};

use crate::attrs::{ContainerAttrs, FieldAttrs};
use crate::rename::RenameRule;

/// Builds `impl Constrained` with one `PropertyMeta` per named field.
///
/// # Errors
///
/// Returns an error if the input is not a struct with named fields or if a
/// `#[serde]`/`#[constrained]` attribute cannot be parsed.
pub(crate) fn generate_constrained(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "#[derive(Constrained)] can only be used on structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            name,
            "#[derive(Constrained)] needs a struct with named fields",
        ));
    };

    let container = ContainerAttrs::from_attributes(&input.attrs)?;
    let properties = fields
        .named
        .iter()
        .map(|field| property_meta(field, container.rename_all))
        .collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::checkpost_gateway::Constrained for #name #ty_generics #where_clause {
            const PROPERTIES: &'static [::checkpost_gateway::PropertyMeta] = &[
                #(#properties),*
            ];
        }
    })
}

fn property_meta(field: &Field, rename_all: RenameRule) -> syn::Result<TokenStream> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "field has no name"));
    };
    let attrs = FieldAttrs::from_attributes(&field.attrs)?;

    // `validator` keys errors by the serde `rename` literal when there is one.
    let name = attrs.rename.clone().unwrap_or_else(|| ident.to_string());

    let key = if attrs.unassignable {
        quote!(::core::option::Option::None)
    } else {
        let key = attrs
            .rename_deserialize
            .or(attrs.rename)
            .unwrap_or_else(|| rename_all.apply(&ident.unraw().to_string()));
        quote!(::core::option::Option::Some(#key))
    };

    let groups = if attrs.groups.is_empty() {
        quote!(::checkpost_gateway::DEFAULT_GROUPS)
    } else {
        let groups = &attrs.groups;
        quote!(&[#(#groups),*])
    };

    Ok(quote! {
        ::checkpost_gateway::PropertyMeta::new(#name, #key, #groups)
    })
}
