//! Parsing of `#[serde(...)]` and `#[constrained(...)]` attributes

use proc_macro2::TokenStream;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Path, Token};

use crate::rename::RenameRule;

/// Struct-level serde settings that affect field keys.
#[derive(Debug, Default)]
pub(crate) struct ContainerAttrs {
    pub rename_all: RenameRule,
}

impl ContainerAttrs {
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if !meta.path.is_ident("rename_all") {
                    return skip_meta(&meta);
                }

                if meta.input.peek(Token![=]) {
                    let lit: LitStr = meta.value()?.parse()?;
                    result.rename_all = RenameRule::from_lit(&lit)?;
                    return Ok(());
                }

                meta.parse_nested_meta(|inner| {
                    let lit: LitStr = inner.value()?.parse()?;
                    if inner.path.is_ident("deserialize") {
                        result.rename_all = RenameRule::from_lit(&lit)?;
                    }
                    Ok(())
                })
            })?;
        }

        Ok(result)
    }
}

/// Field-level settings read from serde and from `#[constrained(...)]`.
#[derive(Debug, Default)]
pub(crate) struct FieldAttrs {
    /// `rename = "..."`; `validator` reports the field under this name too.
    pub rename: Option<String>,
    /// `rename(deserialize = "...")`.
    pub rename_deserialize: Option<String>,
    /// The field cannot be deserialized on its own.
    pub unassignable: bool,
    pub groups: Vec<Path>,
}

impl FieldAttrs {
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| result.parse_serde(&meta))?;
            } else if attr.path().is_ident("constrained") {
                attr.parse_nested_meta(|meta| result.parse_constrained(&meta))?;
            }
        }

        Ok(result)
    }

    fn parse_serde(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        let path = &meta.path;

        if path.is_ident("rename") {
            if meta.input.peek(Token![=]) {
                let lit: LitStr = meta.value()?.parse()?;
                self.rename = Some(lit.value());
                return Ok(());
            }

            return meta.parse_nested_meta(|inner| {
                let lit: LitStr = inner.value()?.parse()?;
                if inner.path.is_ident("deserialize") {
                    self.rename_deserialize = Some(lit.value());
                }
                Ok(())
            });
        }

        if path.is_ident("skip") || path.is_ident("skip_deserializing") || path.is_ident("flatten")
        {
            self.unassignable = true;
            return Ok(());
        }

        skip_meta(meta)
    }

    fn parse_constrained(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if !meta.path.is_ident("groups") {
            return Err(meta.error("expected `groups(...)`"));
        }

        let before = self.groups.len();
        meta.parse_nested_meta(|inner| {
            self.groups.push(inner.path.clone());
            Ok(())
        })?;

        if self.groups.len() == before {
            return Err(meta.error("`groups` needs at least one group"));
        }
        Ok(())
    }
}

/// Consumes a serde item this macro has no interest in.
fn skip_meta(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}
