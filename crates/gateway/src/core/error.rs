//! Error types for the gateway and its engines.
//!
//! A failed validation always surfaces as a single
//! [`GatewayError::Violations`] whose text is the `";\n"`-joined list of
//! non-blank violation messages. The other variants cover construction and
//! engine input problems.

/// Result alias used throughout the crate.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors returned by [`ValidationGateway`](crate::ValidationGateway).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// One or more constraints were violated.
    ///
    /// Displays as the joined messages and nothing else.
    #[error("{0}")]
    Violations(String),

    /// The gateway could not be built or configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The engine rejected its input before checking any constraint.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GatewayError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if this error reports constraint violations.
    #[must_use]
    pub fn is_violations(&self) -> bool {
        matches!(self, Self::Violations(_))
    }

    /// The aggregated violation text, if this error reports violations.
    #[must_use]
    pub fn violation_text(&self) -> Option<&str> {
        match self {
            Self::Violations(text) => Some(text),
            _ => None,
        }
    }
}

/// Errors an engine raises when it cannot run the requested check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The named property does not exist on the target type.
    #[error("unknown property `{property}` on `{type_name}`")]
    UnknownProperty {
        /// Target type.
        type_name: &'static str,
        /// Property that was asked for.
        property: String,
    },

    /// The candidate value cannot be assigned to the property.
    #[error("value does not fit `{type_name}.{property}`: {reason}")]
    IncompatibleValue {
        /// Target type.
        type_name: &'static str,
        /// Property the value was meant for.
        property: String,
        /// Deserializer diagnostic.
        reason: String,
    },

    /// The property exists but serde never deserializes it on its own
    /// (`skip`, `skip_deserializing` or `flatten`).
    #[error("`{type_name}.{property}` cannot take a standalone value")]
    Unassignable {
        /// Target type.
        type_name: &'static str,
        /// Property the value was meant for.
        property: String,
    },

    /// The target type does not serialize to a struct with named fields.
    #[error("`{type_name}` does not serialize to a struct")]
    NotAStruct {
        /// Target type.
        type_name: &'static str,
    },
}
