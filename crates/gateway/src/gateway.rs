//! The validation gateway and its two preconfigured instances.

use std::any::type_name;

use serde::Serialize;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::core::{
    ConstraintEngine, EngineError, GatewayError, GatewayResult, Group, ValidationMode,
    ValueEngine, Violation,
};
use crate::engine::ValidatorEngine;

/// Separator placed between violation messages in the aggregated error.
pub const MESSAGE_DELIMITER: &str = ";\n";

/// Gateway running in fail-fast mode.
pub static FAIL_FAST: ValidationGateway = ValidationGateway::with_mode(ValidationMode::FailFast);

/// Gateway running in collect-all mode.
pub static COLLECT_ALL: ValidationGateway =
    ValidationGateway::with_mode(ValidationMode::CollectAll);

/// Returns the shared fail-fast gateway.
#[must_use]
pub fn fail_fast() -> &'static ValidationGateway {
    &FAIL_FAST
}

/// Returns the shared collect-all gateway.
#[must_use]
pub fn collect_all() -> &'static ValidationGateway {
    &COLLECT_ALL
}

// ============================================================================
// GATEWAY
// ============================================================================

/// Runs an engine and turns its violations into a single error.
///
/// The gateway owns exactly one engine, set at construction, and keeps no
/// per-call state, so one instance can serve any number of threads.
///
/// # Examples
///
/// ```rust,ignore
/// use checkpost_gateway::{COLLECT_ALL, Constrained};
/// use validator::Validate;
///
/// #[derive(Validate, Constrained)]
/// struct Signup {
///     #[validate(length(min = 1, message = "name must not be empty"))]
///     name: String,
/// }
///
/// let error = COLLECT_ALL.validate(&Signup { name: String::new() }, &[]).unwrap_err();
/// assert_eq!(error.to_string(), "name must not be empty");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationGateway<E = ValidatorEngine> {
    engine: E,
}

impl ValidationGateway {
    /// Creates a fail-fast gateway over the `validator` crate.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_mode(ValidationMode::FailFast)
    }

    /// Creates a gateway over the `validator` crate running in `mode`.
    #[must_use]
    pub const fn with_mode(mode: ValidationMode) -> Self {
        Self {
            engine: ValidatorEngine::new(mode),
        }
    }

    /// Creates a gateway from the boolean fail-fast switch.
    #[must_use]
    pub const fn from_fail_fast(fail_fast: bool) -> Self {
        Self::with_mode(ValidationMode::from_fail_fast(fail_fast))
    }

    /// Creates a gateway from loaded configuration.
    #[must_use]
    pub const fn from_config(config: &GatewayConfig) -> Self {
        Self::from_fail_fast(config.fail_fast)
    }

    /// The mode of the built-in engine.
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.engine.mode()
    }
}

impl Default for ValidationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ValidationGateway<E> {
    /// Wraps an engine that was configured elsewhere.
    ///
    /// An absent engine is a configuration error.
    pub fn with_engine(engine: Option<E>) -> GatewayResult<Self> {
        engine
            .map(|engine| Self { engine })
            .ok_or_else(|| GatewayError::configuration("validation engine must not be absent"))
    }

    /// The wrapped engine.
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Validates every constraint on `object` within `groups`.
    ///
    /// An empty `groups` slice selects the default group.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(operation = "validate", subject = type_name::<T>())
    )]
    pub fn validate<T: ?Sized>(&self, object: &T, groups: &[Group]) -> GatewayResult<()>
    where
        E: ConstraintEngine<T>,
    {
        aggregate(self.engine.validate(object, groups)?)
    }

    /// Validates the constraints on one property of `object`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(operation = "validate_property", subject = type_name::<T>(), property = property)
    )]
    pub fn validate_property<T: ?Sized>(
        &self,
        object: &T,
        property: &str,
        groups: &[Group],
    ) -> GatewayResult<()>
    where
        E: ConstraintEngine<T>,
    {
        aggregate(self.engine.validate_property(object, property, groups)?)
    }

    /// Validates `candidate` as if it were assigned to `property` of `T`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(operation = "validate_value", subject = type_name::<T>(), property = property)
    )]
    pub fn validate_value<T: ?Sized, V: Serialize + ?Sized>(
        &self,
        property: &str,
        candidate: &V,
        groups: &[Group],
    ) -> GatewayResult<()>
    where
        E: ValueEngine<T>,
    {
        let candidate =
            serde_json::to_value(candidate).map_err(|error| EngineError::IncompatibleValue {
                type_name: type_name::<T>(),
                property: property.to_owned(),
                reason: error.to_string(),
            })?;

        aggregate(self.engine.validate_value(property, candidate, groups)?)
    }
}

/// Joins the non-blank messages into one error; blank ones are dropped.
fn aggregate(violations: Vec<Violation>) -> GatewayResult<()> {
    if violations.is_empty() {
        return Ok(());
    }

    let reported = violations.len();
    let messages: Vec<String> = violations
        .into_iter()
        .filter(|violation| !violation.is_blank())
        .map(|violation| violation.message)
        .collect();

    if messages.is_empty() {
        debug!(reported, "only blank violation messages, accepting");
        return Ok(());
    }

    debug!(reported, kept = messages.len(), "validation rejected");
    Err(GatewayError::Violations(messages.join(MESSAGE_DELIMITER)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aggregate_empty_is_ok() {
        assert_eq!(aggregate(Vec::new()), Ok(()));
    }

    #[test]
    fn test_aggregate_joins_in_order() {
        let violations = vec![
            Violation::new("b", "x", "second comes first"),
            Violation::new("a", "x", "then this"),
        ];
        assert_eq!(
            aggregate(violations),
            Err(GatewayError::Violations(
                "second comes first;\nthen this".into()
            ))
        );
    }

    #[test]
    fn test_aggregate_drops_blank_messages() {
        let violations = vec![
            Violation::new("a", "x", ""),
            Violation::new("b", "x", "kept"),
            Violation::new("c", "x", "   "),
        ];
        assert_eq!(
            aggregate(violations),
            Err(GatewayError::Violations("kept".into()))
        );
    }

    // Blank-only violations count as success.
    #[test]
    fn test_aggregate_all_blank_is_ok() {
        let violations = vec![Violation::new("a", "x", ""), Violation::new("b", "y", " ")];
        assert_eq!(aggregate(violations), Ok(()));
    }

    #[test]
    fn test_statics_have_their_modes() {
        assert_eq!(FAIL_FAST.mode(), ValidationMode::FailFast);
        assert_eq!(COLLECT_ALL.mode(), ValidationMode::CollectAll);
        assert_eq!(fail_fast().mode(), ValidationMode::FailFast);
        assert_eq!(collect_all().mode(), ValidationMode::CollectAll);
        assert_eq!(ValidationGateway::default().mode(), ValidationMode::FailFast);
    }

    #[test]
    fn test_absent_engine_is_configuration_error() {
        let error = ValidationGateway::<ValidatorEngine>::with_engine(None).unwrap_err();
        assert!(matches!(error, GatewayError::Configuration(_)));
    }

    #[test]
    fn test_gateway_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationGateway>();
    }
}
