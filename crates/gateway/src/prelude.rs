//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use checkpost_gateway::prelude::*;
//!
//! FAIL_FAST.validate(&order, &[])?;
//! ```

pub use crate::config::GatewayConfig;
pub use crate::core::{
    ConstraintEngine, Constrained, EngineError, GatewayError, GatewayResult, Group,
    ValidationMode, ValueEngine, Violation,
};
pub use crate::engine::ValidatorEngine;
pub use crate::gateway::{COLLECT_ALL, FAIL_FAST, ValidationGateway, collect_all, fail_fast};
pub use checkpost_gateway_macros::Constrained;
