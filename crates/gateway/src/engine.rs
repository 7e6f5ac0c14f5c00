//! Default engine backed by the `validator` crate.
//!
//! [`ValidatorEngine`] turns the nested `validator::ValidationErrors` map into
//! a flat, deterministically ordered list of [`Violation`]s: fields are
//! visited in name order, list entries in index order, nested paths are
//! joined with `.` and `[i]`.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::core::{
    ConstraintEngine, Constrained, EngineError, Group, PropertyMeta, ValidationMode, ValueEngine,
    Violation,
};

/// Engine over `#[derive(validator::Validate)]` types.
///
/// The mode is fixed at construction. In fail-fast mode only the first
/// violation (in engine order, after group filtering) is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatorEngine {
    mode: ValidationMode,
}

impl ValidatorEngine {
    /// Creates an engine running in `mode`.
    #[must_use]
    pub const fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// The mode this engine was built with.
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    fn collect<T: Constrained>(
        &self,
        object: &T,
        groups: &[Group],
        within: Option<&str>,
    ) -> Vec<Violation> {
        let Err(errors) = object.validate() else {
            return Vec::new();
        };

        flatten(&errors)
            .into_iter()
            .filter(|violation| within.is_none_or(|property| violation.is_under(property)))
            .filter(|violation| Group::selects(groups, T::groups(violation.property())))
            .take(self.mode.limit())
            .collect()
    }
}

impl<T: Constrained> ConstraintEngine<T> for ValidatorEngine {
    fn validate(&self, object: &T, groups: &[Group]) -> Result<Vec<Violation>, EngineError> {
        Ok(self.collect(object, groups, None))
    }

    fn validate_property(
        &self,
        object: &T,
        property: &str,
        groups: &[Group],
    ) -> Result<Vec<Violation>, EngineError> {
        let declared = declared::<T>(property)?;
        Ok(self.collect(object, groups, Some(declared.name)))
    }
}

impl<T> ValueEngine<T> for ValidatorEngine
where
    T: Constrained + Default + Serialize + DeserializeOwned,
{
    fn validate_value(
        &self,
        property: &str,
        candidate: Value,
        groups: &[Group],
    ) -> Result<Vec<Violation>, EngineError> {
        let type_name = type_name::<T>();
        let declared = declared::<T>(property)?;
        let Some(key) = declared.key else {
            return Err(EngineError::Unassignable {
                type_name,
                property: property.to_owned(),
            });
        };

        // Start from the type's default and put the candidate under the
        // property's serde key. The key may be missing from the serialized
        // default when serialization skips it.
        let Ok(Value::Object(mut fields)) = serde_json::to_value(T::default()) else {
            return Err(EngineError::NotAStruct { type_name });
        };
        fields.insert(key.to_owned(), candidate);

        let stand_in: T = serde_json::from_value(Value::Object(fields)).map_err(|error| {
            EngineError::IncompatibleValue {
                type_name,
                property: property.to_owned(),
                reason: error.to_string(),
            }
        })?;

        Ok(self.collect(&stand_in, groups, Some(declared.name)))
    }
}

fn declared<T: Constrained>(property: &str) -> Result<&'static PropertyMeta, EngineError> {
    T::property(property).ok_or_else(|| EngineError::UnknownProperty {
        type_name: type_name::<T>(),
        property: property.to_owned(),
    })
}

// ============================================================================
// FLATTENING
// ============================================================================

fn flatten(errors: &ValidationErrors) -> Vec<Violation> {
    let mut violations = Vec::new();
    flatten_into(errors, "", &mut violations);
    violations
}

fn flatten_into(errors: &ValidationErrors, prefix: &str, out: &mut Vec<Violation>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (name, kind) in fields {
        let path = if prefix.is_empty() {
            (*name).to_owned()
        } else {
            format!("{prefix}.{name}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|error| {
                    Violation::new(path.clone(), error.code.clone(), render_message(error))
                }));
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(nested, &path, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    flatten_into(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

/// Renders the declared message, or an empty string if none was declared.
fn render_message(error: &ValidationError) -> String {
    error
        .message
        .as_deref()
        .map(|template| render_template(template, &error.params))
        .unwrap_or_default()
}

/// Replaces `{name}` placeholders with constraint parameters.
///
/// Unknown placeholders and an unmatched `{` are left as written.
fn render_template(template: &str, params: &HashMap<Cow<'static, str>, Value>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            rendered.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let key = &after[..close];
        match params.get(key) {
            Some(value) => rendered.push_str(&display_param(value)),
            None => rendered.push_str(&rest[open..=open + close + 1]),
        }
        rest = &after[close + 1..];
    }

    rendered.push_str(rest);
    rendered
}

fn display_param(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        // `range` bounds arrive as f64; print 150.0 as 150.
        Value::Number(number) => match number.as_f64() {
            Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => {
                format!("{}", float as i64)
            }
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}
