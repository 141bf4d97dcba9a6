// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute reflection: a declarative table from markup attributes to typed fields.
//!
//! ## Overview
//!
//! A widget lists its attributes once as [`AttributeBinding`] entries. When the host sees an
//! attribute change it calls [`reflect_attribute`], which converts the raw string according
//! to the binding's [`AttributeKind`], stores it through the binding's setter, and runs the
//! binding's change callback if the field actually changed.
//!
//! Conversion follows markup conventions:
//! - `String`: the raw value, or `None` when the attribute is removed.
//! - `Number`: the trimmed value parsed as `f64` (empty is `0`), or `None` when removed.
//! - `Boolean`: presence of the attribute; the value is irrelevant.
//!
//! Attribute names match ASCII case-insensitively.

use alloc::string::{String, ToString};

/// How a raw attribute string is converted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AttributeKind {
    /// Kept as text.
    String,
    /// Parsed as a number.
    Number,
    /// Present or absent.
    Boolean,
}

/// A converted attribute value handed to a binding's setter.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue<'a> {
    /// Text value; `None` when the attribute was removed.
    String(Option<&'a str>),
    /// Numeric value; `None` when the attribute was removed.
    Number(Option<f64>),
    /// Whether the attribute is present.
    Boolean(bool),
}

/// Errors from [`reflect_attribute`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ReflectError {
    /// A `Number` attribute did not parse.
    #[error("attribute `{attribute}` expects a number, got `{value}`")]
    InvalidNumber {
        /// Attribute name as declared in the table.
        attribute: &'static str,
        /// The raw value.
        value: String,
    },
    /// The setter rejected the converted value.
    #[error("attribute `{attribute}` does not accept `{value}`")]
    InvalidValue {
        /// Attribute name as declared in the table.
        attribute: &'static str,
        /// The raw value.
        value: String,
    },
}

/// One row of a reflection table.
///
/// `apply` stores the value and reports whether the field changed, or returns `None` to
/// reject it (for example an unknown enum token).
#[derive(Debug)]
pub struct AttributeBinding<T> {
    /// Markup attribute name, e.g. `data-aria-label`.
    pub attribute: &'static str,
    /// Name of the field the attribute maps to, for diagnostics.
    pub field: &'static str,
    /// Conversion applied before `apply`.
    pub kind: AttributeKind,
    /// Store the converted value into the target.
    pub apply: fn(&mut T, AttributeValue<'_>) -> Option<bool>,
    /// Called after `apply` reported a change.
    pub on_change: Option<fn(&mut T, &'static str)>,
}

/// Reflect a changed attribute into `target`.
///
/// `raw` is `None` when the attribute was removed. Returns `Ok(true)` when a field changed,
/// `Ok(false)` when the name is not in `table` or the value was already current.
///
/// ```
/// use understory_list::{AttributeBinding, AttributeKind, AttributeValue, reflect_attribute};
///
/// #[derive(Default)]
/// struct Dense {
///     dense: bool,
/// }
///
/// fn set_dense(d: &mut Dense, v: AttributeValue<'_>) -> Option<bool> {
///     let AttributeValue::Boolean(on) = v else { return None };
///     let changed = d.dense != on;
///     d.dense = on;
///     Some(changed)
/// }
///
/// let table = [AttributeBinding {
///     attribute: "dense",
///     field: "dense",
///     kind: AttributeKind::Boolean,
///     apply: set_dense,
///     on_change: None,
/// }];
///
/// let mut d = Dense::default();
/// assert_eq!(reflect_attribute(&table, &mut d, "DENSE", Some("")), Ok(true));
/// assert!(d.dense);
/// assert_eq!(reflect_attribute(&table, &mut d, "unknown", Some("1")), Ok(false));
/// ```
pub fn reflect_attribute<T>(
    table: &[AttributeBinding<T>],
    target: &mut T,
    name: &str,
    raw: Option<&str>,
) -> Result<bool, ReflectError> {
    let result = reflect(table, target, name, raw);
    if let Err(err) = &result {
        log::warn!("{err}");
    }
    result
}

fn reflect<T>(
    table: &[AttributeBinding<T>],
    target: &mut T,
    name: &str,
    raw: Option<&str>,
) -> Result<bool, ReflectError> {
    let Some(binding) = table
        .iter()
        .find(|b| b.attribute.eq_ignore_ascii_case(name))
    else {
        return Ok(false);
    };

    let value = match binding.kind {
        AttributeKind::String => AttributeValue::String(raw),
        AttributeKind::Boolean => AttributeValue::Boolean(raw.is_some()),
        AttributeKind::Number => AttributeValue::Number(match raw {
            None => None,
            Some(s) => Some(parse_number(s).ok_or_else(|| ReflectError::InvalidNumber {
                attribute: binding.attribute,
                value: s.to_string(),
            })?),
        }),
    };

    let changed = (binding.apply)(target, value).ok_or_else(|| ReflectError::InvalidValue {
        attribute: binding.attribute,
        value: raw.unwrap_or_default().to_string(),
    })?;
    if changed {
        log::trace!("{} <- {}", binding.field, binding.attribute);
        if let Some(on_change) = binding.on_change {
            on_change(target, binding.field);
        }
    }
    Ok(changed)
}

fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse().ok()
}

/// Setter helper: store an optional string, reporting whether it changed.
pub fn set_optional_string(field: &mut Option<String>, value: AttributeValue<'_>) -> Option<bool> {
    let AttributeValue::String(raw) = value else {
        return None;
    };
    if field.as_deref() == raw {
        return Some(false);
    }
    *field = raw.map(String::from);
    Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct Target {
        label: Option<String>,
        count: f64,
        open: bool,
        changes: Vec<&'static str>,
    }

    fn set_label(t: &mut Target, v: AttributeValue<'_>) -> Option<bool> {
        set_optional_string(&mut t.label, v)
    }

    fn set_count(t: &mut Target, v: AttributeValue<'_>) -> Option<bool> {
        let AttributeValue::Number(n) = v else {
            return None;
        };
        let n = n.unwrap_or(0.0);
        if n < 0.0 {
            return None;
        }
        let changed = t.count != n;
        t.count = n;
        Some(changed)
    }

    fn set_open(t: &mut Target, v: AttributeValue<'_>) -> Option<bool> {
        let AttributeValue::Boolean(b) = v else {
            return None;
        };
        let changed = t.open != b;
        t.open = b;
        Some(changed)
    }

    fn record(t: &mut Target, field: &'static str) {
        t.changes.push(field);
    }

    const TABLE: &[AttributeBinding<Target>] = &[
        AttributeBinding {
            attribute: "data-label",
            field: "label",
            kind: AttributeKind::String,
            apply: set_label,
            on_change: Some(record),
        },
        AttributeBinding {
            attribute: "count",
            field: "count",
            kind: AttributeKind::Number,
            apply: set_count,
            on_change: Some(record),
        },
        AttributeBinding {
            attribute: "open",
            field: "open",
            kind: AttributeKind::Boolean,
            apply: set_open,
            on_change: None,
        },
    ];

    #[test]
    fn string_set_and_remove() {
        let mut t = Target::default();
        assert_eq!(reflect_attribute(TABLE, &mut t, "data-label", Some("Fruit")), Ok(true));
        assert_eq!(t.label.as_deref(), Some("Fruit"));
        assert_eq!(reflect_attribute(TABLE, &mut t, "data-label", Some("Fruit")), Ok(false));
        assert_eq!(reflect_attribute(TABLE, &mut t, "data-label", None), Ok(true));
        assert_eq!(t.label, None);
        assert_eq!(t.changes, ["label", "label"]);
    }

    #[test]
    fn number_parsing() {
        let mut t = Target::default();
        assert_eq!(reflect_attribute(TABLE, &mut t, "count", Some(" 12.5 ")), Ok(true));
        assert_eq!(t.count, 12.5);
        assert_eq!(reflect_attribute(TABLE, &mut t, "count", Some("")), Ok(true));
        assert_eq!(t.count, 0.0);
        assert_eq!(
            reflect_attribute(TABLE, &mut t, "count", Some("twelve")),
            Err(ReflectError::InvalidNumber {
                attribute: "count",
                value: String::from("twelve"),
            })
        );
    }

    #[test]
    fn rejected_value_is_an_error_and_leaves_field() {
        let mut t = Target::default();
        t.count = 3.0;
        let err = reflect_attribute(TABLE, &mut t, "count", Some("-1")).unwrap_err();
        assert!(matches!(err, ReflectError::InvalidValue { attribute: "count", .. }));
        assert_eq!(t.count, 3.0);
        assert!(t.changes.is_empty());
    }

    #[test]
    fn boolean_is_presence() {
        let mut t = Target::default();
        assert_eq!(reflect_attribute(TABLE, &mut t, "OPEN", Some("false")), Ok(true));
        assert!(t.open, "any present value means true");
        assert_eq!(reflect_attribute(TABLE, &mut t, "open", None), Ok(true));
        assert!(!t.open);
        assert!(t.changes.is_empty(), "open has no change callback");
    }

    #[test]
    fn unknown_attribute_is_ignored() {
        let mut t = Target::default();
        assert_eq!(reflect_attribute(TABLE, &mut t, "role", Some("menu")), Ok(false));
    }
}
