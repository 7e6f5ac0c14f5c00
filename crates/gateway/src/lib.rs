//! # checkpost-gateway
//!
//! A validation gateway over the `validator` crate: run an object's declared
//! constraints, drop blank messages, and report everything that is left as a
//! single error.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkpost_gateway::prelude::*;
//! use validator::Validate;
//!
//! #[derive(Validate, Constrained)]
//! struct Bean {
//!     #[validate(length(min = 1, message = "name must not be empty"))]
//!     name: String,
//!     #[validate(range(min = 0, max = 150, message = "age must be between {min} and {max}"))]
//!     age: i32,
//! }
//!
//! let bean = Bean { name: String::new(), age: 200 };
//! let error = COLLECT_ALL.validate(&bean, &[]).unwrap_err();
//! assert_eq!(error.to_string(), "age must be between 0 and 150;\nname must not be empty");
//! ```
//!
//! ## Operations
//!
//! - [`ValidationGateway::validate`]: every constraint on an object
//! - [`ValidationGateway::validate_property`]: one named property
//! - [`ValidationGateway::validate_value`]: a candidate value for a property,
//!   without an instance
//!
//! ## Modes
//!
//! [`FAIL_FAST`] stops at the first violation, [`COLLECT_ALL`] reports all of
//! them. Other engines plug in through [`ConstraintEngine`] and
//! [`ValidationGateway::with_engine`].
//!
//! ## Properties
//!
//! `#[derive(Constrained)]` lists a struct's properties for the gateway. A
//! property is named the way `validator` reports it: the field name, or the
//! `#[serde(rename = "...")]` literal when one is given. `rename_all` only
//! changes the key a candidate value is deserialized under.

// Lets `#[derive(Constrained)]` expand to `::checkpost_gateway` paths inside
// this crate as well.
extern crate self as checkpost_gateway;

pub mod config;
pub mod core;
pub mod engine;
pub mod gateway;
pub mod prelude;

pub use crate::config::GatewayConfig;
pub use crate::core::{
    ConstraintEngine, Constrained, DEFAULT_GROUPS, EngineError, GatewayError, GatewayResult,
    Group, PropertyMeta, ValidationMode, ValueEngine, Violation,
};
pub use crate::engine::ValidatorEngine;
pub use crate::gateway::{
    COLLECT_ALL, FAIL_FAST, MESSAGE_DELIMITER, ValidationGateway, collect_all, fail_fast,
};

pub use checkpost_gateway_macros::Constrained;
pub use validator;
