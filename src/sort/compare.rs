//! Comparator primitives: string and property ordering, chaining, reversal.

use crate::item::Entry;
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::Arc;

/// Total-order comparator over items being arranged.
pub type Comparator = Arc<dyn Fn(&Entry<'_>, &Entry<'_>) -> Ordering + Send + Sync>;

/// Case-insensitive string ordering where absent or empty strings sort first.
pub fn sort_strings(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.filter(|s| !s.is_empty());
    let b = b.filter(|s| !s.is_empty());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Order two property values.
///
/// Falsy values (missing, `null`, `false`, `0`, `""`) sort before everything
/// else. Two numbers compare numerically; every other pairing compares the
/// values' text case-insensitively.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !is_falsy(v));
    let b = b.filter(|v| !is_falsy(v));

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => sort_strings(Some(&x.to_string()), Some(&y.to_string())),
        },
        (Some(a), Some(b)) => sort_strings(Some(&value_text(a)), Some(&value_text(b))),
    }
}

/// Whether a value counts as "absent" for ordering purposes.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Text used when a value is compared as a string.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(values) => Cow::Owned(
            values
                .iter()
                .map(|v| match v {
                    Value::Null => Cow::Borrowed(""),
                    other => value_text(other),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

/// Comparator over one named item property.
pub fn sort_by_property(name: impl Into<String>) -> Comparator {
    let name = name.into();
    Arc::new(move |a: &Entry<'_>, b: &Entry<'_>| {
        compare_values(a.property(&name), b.property(&name))
    })
}

/// Comparator over item paths.
pub fn sort_by_path() -> Comparator {
    Arc::new(|a: &Entry<'_>, b: &Entry<'_>| sort_strings(Some(a.path), Some(b.path)))
}

/// Chain comparators; the first non-equal result wins.
///
/// A single comparator is returned unchanged.
pub fn sort_combine(mut sorts: Vec<Comparator>) -> Comparator {
    if sorts.len() == 1 {
        if let Some(only) = sorts.pop() {
            return only;
        }
    }

    Arc::new(move |a: &Entry<'_>, b: &Entry<'_>| {
        sorts
            .iter()
            .map(|sort| sort(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Invert a comparator. Equal stays equal.
pub fn sort_reverse(sort: Comparator) -> Comparator {
    Arc::new(move |a: &Entry<'_>, b: &Entry<'_>| sort(a, b).reverse())
}
