//! Flat key/value data record consumed by the template engine
//!
//! A `DataRecord` is the view-model handed to a render call: known document
//! fields plus free-form keys, all flattened to string-keyed scalar values.
//! Sequence values exist so callers can carry pre-join material around, but
//! the engine substitutes them as empty text; callers convert sequences to
//! markup before rendering (see `sop::view`).

use std::collections::BTreeMap;

/// A single data value in a record
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Num(f64),
    List(Vec<String>),
    Bool(bool),
    Null,
}

impl Value {
    /// Conditional truthiness: non-blank string, non-empty list,
    /// non-zero number, or `true`. Everything else is falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Str(s) => !s.trim().is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Num(n) => *n != 0.0,
            Value::Bool(b) => *b,
            Value::Null => false,
        }
    }

    /// Stringify for substitution. Lists and nulls render as empty text;
    /// whole numbers render without a trailing `.0`.
    pub fn to_display(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::Bool(b) => b.to_string(),
            Value::List(_) | Value::Null => String::new(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Num(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// Flat mapping from field names to values
///
/// Key order is irrelevant to rendering; a BTreeMap keeps iteration
/// deterministic so repeated renders are byte-identical.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRecord {
    fields: BTreeMap<String, Value>,
}

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Truthiness of a key for conditional blocks. Missing keys are falsy.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(Value::is_truthy)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness_strings() {
        assert!(Value::Str("a".into()).is_truthy());
        assert!(!Value::Str("".into()).is_truthy());
        assert!(!Value::Str("   ".into()).is_truthy());
    }

    #[test]
    fn test_truthiness_lists_and_numbers() {
        assert!(Value::List(vec!["x".into()]).is_truthy());
        assert!(!Value::List(vec![]).is_truthy());
        assert!(Value::Num(2.0).is_truthy());
        assert!(!Value::Num(0.0).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn test_display_whole_numbers() {
        assert_eq!(Value::Num(42.0).to_display(), "42");
        assert_eq!(Value::Num(9.5).to_display(), "9.5");
    }

    #[test]
    fn test_display_empty_kinds() {
        assert_eq!(Value::Null.to_display(), "");
        assert_eq!(Value::List(vec!["a".into()]).to_display(), "");
    }

    #[test]
    fn test_record_missing_key_is_falsy() {
        let record = DataRecord::new();
        assert!(!record.is_truthy("anything"));
        assert!(record.get("anything").is_none());
    }
}
