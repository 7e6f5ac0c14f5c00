//! The seam between the gateway and a constraint engine.
//!
//! The gateway never inspects constraints itself. It asks an engine for the
//! violations of an object, a property, or a candidate value, and then
//! aggregates whatever comes back.

use std::sync::Arc;

use crate::core::{DEFAULT_GROUPS, EngineError, Group, PropertyMeta, Violation};

// ============================================================================
// ENGINE TRAITS
// ============================================================================

/// Checks objects of type `T` against their declared constraints.
///
/// Implementations must be safe to share between threads and must not keep
/// per-call state; the gateway reuses one engine for every call.
///
/// # Examples
///
/// ```rust,ignore
/// use checkpost_gateway::{ConstraintEngine, EngineError, Group, Violation};
///
/// struct RejectEverything;
///
/// impl<T: ?Sized> ConstraintEngine<T> for RejectEverything {
///     fn validate(&self, _: &T, _: &[Group]) -> Result<Vec<Violation>, EngineError> {
///         Ok(vec![Violation::new("self", "never", "rejected")])
///     }
///
///     fn validate_property(
///         &self,
///         _: &T,
///         property: &str,
///         _: &[Group],
///     ) -> Result<Vec<Violation>, EngineError> {
///         Ok(vec![Violation::new(property, "never", "rejected")])
///     }
/// }
/// ```
pub trait ConstraintEngine<T: ?Sized>: Send + Sync {
    /// Returns every violation on `object` within `groups`, in engine order.
    fn validate(&self, object: &T, groups: &[Group]) -> Result<Vec<Violation>, EngineError>;

    /// Returns the violations on one property of `object`.
    fn validate_property(
        &self,
        object: &T,
        property: &str,
        groups: &[Group],
    ) -> Result<Vec<Violation>, EngineError>;
}

/// Checks a standalone candidate value as if it were assigned to a property
/// of `T`.
pub trait ValueEngine<T: ?Sized>: Send + Sync {
    /// Returns the violations `candidate` would cause on `property`.
    fn validate_value(
        &self,
        property: &str,
        candidate: serde_json::Value,
        groups: &[Group],
    ) -> Result<Vec<Violation>, EngineError>;
}

impl<T: ?Sized, E: ConstraintEngine<T> + ?Sized> ConstraintEngine<T> for &E {
    fn validate(&self, object: &T, groups: &[Group]) -> Result<Vec<Violation>, EngineError> {
        (**self).validate(object, groups)
    }

    fn validate_property(
        &self,
        object: &T,
        property: &str,
        groups: &[Group],
    ) -> Result<Vec<Violation>, EngineError> {
        (**self).validate_property(object, property, groups)
    }
}

impl<T: ?Sized, E: ConstraintEngine<T> + ?Sized> ConstraintEngine<T> for Arc<E> {
    fn validate(&self, object: &T, groups: &[Group]) -> Result<Vec<Violation>, EngineError> {
        (**self).validate(object, groups)
    }

    fn validate_property(
        &self,
        object: &T,
        property: &str,
        groups: &[Group],
    ) -> Result<Vec<Violation>, EngineError> {
        (**self).validate_property(object, property, groups)
    }
}

impl<T: ?Sized, E: ValueEngine<T> + ?Sized> ValueEngine<T> for &E {
    fn validate_value(
        &self,
        property: &str,
        candidate: serde_json::Value,
        groups: &[Group],
    ) -> Result<Vec<Violation>, EngineError> {
        (**self).validate_value(property, candidate, groups)
    }
}

impl<T: ?Sized, E: ValueEngine<T> + ?Sized> ValueEngine<T> for Arc<E> {
    fn validate_value(
        &self,
        property: &str,
        candidate: serde_json::Value,
        groups: &[Group],
    ) -> Result<Vec<Violation>, EngineError> {
        (**self).validate_value(property, candidate, groups)
    }
}

// ============================================================================
// CONSTRAINED TYPES
// ============================================================================

/// A type whose constraints are declared with `#[derive(validator::Validate)]`.
///
/// On top of `Validate` it lists its properties: the name violations are
/// reported under, the serde key a candidate value is deserialized from, and
/// group membership. `#[derive(Constrained)]` writes the list from the struct
/// definition.
///
/// # Examples
///
/// ```rust,ignore
/// use checkpost_gateway::prelude::*;
/// use validator::Validate;
///
/// const SIGN_UP: Group = Group::new("sign-up");
///
/// #[derive(Validate, Constrained)]
/// struct Account {
///     #[validate(length(min = 3))]
///     username: String,
///     #[constrained(groups(SIGN_UP))]
///     #[validate(length(min = 8, message = "password too short"))]
///     password: String,
/// }
///
/// assert_eq!(Account::groups("password"), &[SIGN_UP]);
/// ```
pub trait Constrained: validator::Validate {
    /// Every named field, in declaration order.
    const PROPERTIES: &'static [PropertyMeta];

    /// Looks up a property by the name violations are reported under.
    fn property(name: &str) -> Option<&'static PropertyMeta> {
        Self::PROPERTIES.iter().find(|property| property.name == name)
    }

    /// Groups the constraints on `property` belong to.
    ///
    /// Undeclared names fall back to [`Group::DEFAULT`].
    fn groups(property: &str) -> &'static [Group] {
        Self::property(property).map_or(DEFAULT_GROUPS, |property| property.groups)
    }
}
