//! Derive macro for checkpost constrained types
//!
//! `#[derive(Constrained)]` records, for every named field of a struct, the
//! name `validator` reports violations under, the key serde deserializes it
//! from, and the validation groups its constraints belong to.
//!
//! # Examples
//!
//! ```rust,ignore
//! use checkpost_gateway::prelude::*;
//! use serde::{Deserialize, Serialize};
//! use validator::Validate;
//!
//! const SIGN_UP: Group = Group::new("sign-up");
//!
//! #[derive(Default, Serialize, Deserialize, Validate, Constrained)]
//! #[serde(rename_all = "camelCase")]
//! struct Account {
//!     #[validate(length(min = 3, message = "user name too short"))]
//!     user_name: String,
//!
//!     #[constrained(groups(SIGN_UP))]
//!     #[validate(length(min = 8, message = "password too short"))]
//!     password: String,
//! }
//! ```
//!
//! # Architecture
//!
//! - `attrs` - parsing of `#[serde(...)]` and `#[constrained(...)]`
//! - `rename` - serde's `rename_all` conventions
//! - `generate` - the `Constrained` impl

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod generate;
mod rename;

/// Derives `checkpost_gateway::Constrained` for a struct with named fields.
///
/// # Attributes
///
/// - `#[constrained(groups(A, B))]` on a field: the groups its constraints
///   belong to. Fields without it belong to `Group::DEFAULT`.
///
/// Serde attributes are read, not written: `rename_all` on the struct and
/// `rename`, `skip`, `skip_deserializing` and `flatten` on fields decide the
/// key a candidate value is deserialized under.
#[proc_macro_derive(Constrained, attributes(constrained))]
pub fn derive_constrained(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate::generate_constrained(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
