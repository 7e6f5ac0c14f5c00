//! Core gateway types and traits
//!
//! - **Types**: [`Violation`], [`Group`], [`PropertyMeta`], [`ValidationMode`]
//! - **Traits**: [`ConstraintEngine`], [`ValueEngine`], [`Constrained`]
//! - **Errors**: [`GatewayError`], [`EngineError`]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{EngineError, GatewayError, GatewayResult};
pub use traits::{ConstraintEngine, Constrained, ValueEngine};
pub use types::{DEFAULT_GROUPS, Group, PropertyMeta, ValidationMode, Violation};
