//! Value types shared by the gateway and its engines.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VIOLATION
// ============================================================================

/// A single constraint failure reported by an engine.
///
/// Only [`message`](Self::message) takes part in aggregation; `path` and
/// `code` are carried for diagnostics and property filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Property path, e.g. `name`, `address.city`, `items[0].name`.
    pub path: String,

    /// Constraint code such as `length` or `range`.
    pub code: Cow<'static, str>,

    /// Rendered, human-readable message. Blank when the constraint
    /// declared no message.
    pub message: String,
}

impl Violation {
    /// Creates a violation for `path`.
    pub fn new(
        path: impl Into<String>,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns true if the message is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }

    /// The top-level property this violation was raised on.
    ///
    /// `address.city` and `address[0]` both belong to `address`.
    #[must_use]
    pub fn property(&self) -> &str {
        self.path.split(['.', '[']).next().unwrap_or_default()
    }

    /// Returns true if the violation sits on `property` or anywhere below it.
    #[must_use]
    pub fn is_under(&self, property: &str) -> bool {
        self.path.strip_prefix(property).is_some_and(|rest| {
            rest.is_empty() || rest.starts_with('.') || rest.starts_with('[')
        })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.path, self.code, self.message)
    }
}

// ============================================================================
// GROUP
// ============================================================================

/// A classifier selecting which constraints apply to a validate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Group(&'static str);

/// Group membership of a property that declares none.
pub const DEFAULT_GROUPS: &[Group] = &[Group::DEFAULT];

impl Group {
    /// The group every property belongs to unless it says otherwise.
    pub const DEFAULT: Self = Self("default");

    /// Creates a named group.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The group name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }

    /// Returns true if a property declared in `declared` is selected by a
    /// call restricted to `requested`.
    ///
    /// An empty request selects the default group.
    #[must_use]
    pub fn selects(requested: &[Self], declared: &[Self]) -> bool {
        if requested.is_empty() {
            declared.contains(&Self::DEFAULT)
        } else {
            requested.iter().any(|group| declared.contains(group))
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// PROPERTY METADATA
// ============================================================================

/// What a constrained type declares about one of its properties.
///
/// Written by `#[derive(Constrained)]`, one entry per named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyMeta {
    /// Name violations on this property are reported under.
    pub name: &'static str,

    /// Key the property is deserialized from; `None` when serde skips or
    /// flattens it.
    pub key: Option<&'static str>,

    /// Groups the property's constraints belong to.
    pub groups: &'static [Group],
}

impl PropertyMeta {
    #[must_use]
    pub const fn new(
        name: &'static str,
        key: Option<&'static str>,
        groups: &'static [Group],
    ) -> Self {
        Self { name, key, groups }
    }
}

// ============================================================================
// VALIDATION MODE
// ============================================================================

/// Whether an engine stops at the first violation or gathers all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationMode {
    /// Stop at the first violation found.
    #[default]
    FailFast,
    /// Gather every violation before reporting.
    CollectAll,
}

impl ValidationMode {
    /// Maps the boolean `fail_fast` switch onto a mode.
    #[must_use]
    pub const fn from_fail_fast(fail_fast: bool) -> Self {
        if fail_fast {
            Self::FailFast
        } else {
            Self::CollectAll
        }
    }

    /// Returns true for [`ValidationMode::FailFast`].
    #[must_use]
    pub const fn is_fail_fast(self) -> bool {
        matches!(self, Self::FailFast)
    }

    /// Upper bound on violations an engine reports in this mode.
    #[must_use]
    pub const fn limit(self) -> usize {
        match self {
            Self::FailFast => 1,
            Self::CollectAll => usize::MAX,
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail-fast"),
            Self::CollectAll => write!(f, "collect-all"),
        }
    }
}
