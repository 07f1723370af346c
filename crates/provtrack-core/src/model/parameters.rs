//! Run parameters
//!
//! Parameter documents arrive as JSON. Each value is classified once, at
//! construction, into a closed [`ParameterValue`] kind so that comparison
//! and rendering code matches on the kind instead of inspecting the value.

use crate::errors::ProvenanceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Separator used when displaying nested parameter names
pub const FLATTEN_SEPARATOR: char = '.';

/// Names of the mappings leading to a flattened parameter, outermost first
///
/// Kept as segments so that a literal `"a.b"` key and the nested path
/// `a` → `b` stay distinct. Only `Display` joins them.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterPath(Vec<String>);

impl ParameterPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    fn child(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }
}

impl std::fmt::Display for ParameterPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", FLATTEN_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// A leaf parameter value
#[derive(Debug, Clone)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            // NaN equals NaN so a record always equals itself
            (Scalar::Float(a), Scalar::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            // 1 and 1.0 are the same parameter value
            (Scalar::Int(a), Scalar::Float(b)) | (Scalar::Float(b), Scalar::Int(a)) => {
                int_equals_float(*a, *b)
            }
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            _ => false,
        }
    }
}

/// Exact comparison, without rounding `i` to the nearest `f64`
fn int_equals_float(i: i64, x: f64) -> bool {
    // i64::MIN is exactly representable, i64::MAX + 1 is the first float past the range
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    x.fract() == 0.0 && (LOWER..UPPER).contains(&x) && x as i64 == i
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{:?}", x),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Parameter value kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Scalar(Scalar),
    Sequence(Vec<ParameterValue>),
    Mapping(BTreeMap<String, ParameterValue>),
}

impl ParameterValue {
    pub fn is_mapping(&self) -> bool {
        matches!(self, ParameterValue::Mapping(_))
    }
}

impl From<Value> for ParameterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ParameterValue::Scalar(Scalar::Null),
            Value::Bool(b) => ParameterValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ParameterValue::Scalar(Scalar::Int(i)),
                // u64 beyond i64::MAX, or a float
                None => ParameterValue::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => ParameterValue::Scalar(Scalar::Str(s)),
            Value::Array(items) => {
                ParameterValue::Sequence(items.into_iter().map(ParameterValue::from).collect())
            }
            Value::Object(map) => ParameterValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, ParameterValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<ParameterValue> for Value {
    fn from(value: ParameterValue) -> Self {
        match value {
            ParameterValue::Scalar(Scalar::Null) => Value::Null,
            ParameterValue::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            ParameterValue::Scalar(Scalar::Int(i)) => Value::from(i),
            // non-finite floats have no JSON form
            ParameterValue::Scalar(Scalar::Float(x)) => serde_json::Number::from_f64(x)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            ParameterValue::Scalar(Scalar::Str(s)) => Value::String(s),
            ParameterValue::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            ParameterValue::Mapping(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterValue::Scalar(s) => write!(f, "{}", s),
            ParameterValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ParameterValue::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// The parameters a run was launched with: a mapping from parameter name to
/// value, possibly nested.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ParameterSet {
    values: BTreeMap<String, ParameterValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if the document root is not an object.
    pub fn from_json(value: Value) -> Result<Self, ProvenanceError> {
        match ParameterValue::from(value) {
            ParameterValue::Mapping(values) => Ok(Self { values }),
            other => Err(ProvenanceError::InvalidParameters {
                reason: format!("expected a mapping at the root, got `{}`", other),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.values.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flatten nested mappings into leaf paths.
    ///
    /// `{"a": {"b": 1}, "c": [1, 2]}` flattens to `{a.b: 1, c: [1, 2]}`.
    /// Sequences and empty mappings are leaves, so two sets flatten to the
    /// same map only if they are equal.
    pub fn flatten(&self) -> BTreeMap<ParameterPath, ParameterValue> {
        let mut out = BTreeMap::new();
        flatten_into(&self.values, &ParameterPath::default(), &mut out);
        out
    }
}

fn flatten_into(
    values: &BTreeMap<String, ParameterValue>,
    prefix: &ParameterPath,
    out: &mut BTreeMap<ParameterPath, ParameterValue>,
) {
    for (name, value) in values {
        let path = prefix.child(name);
        match value {
            ParameterValue::Mapping(inner) if !inner.is_empty() => {
                flatten_into(inner, &path, out)
            }
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

impl TryFrom<Value> for ParameterSet {
    type Error = ProvenanceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        // `null` is how an empty parameter set is often stored
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::from_json(value)
    }
}

impl From<ParameterSet> for Value {
    fn from(set: ParameterSet) -> Self {
        Value::from(ParameterValue::Mapping(set.values))
    }
}

/// One `name = value` line per flattened parameter, sorted by name
impl std::fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.flatten().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} = {}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested() {
        let set = ParameterSet::from_json(json!({
            "dt": 0.1,
            "cell": {"tau_m": 20.0, "v_rest": {"mean": -65}},
            "seeds": [1, 2]
        }))
        .unwrap();
        let flat = set.flatten();
        let keys: Vec<String> = flat.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["cell.tau_m", "cell.v_rest.mean", "dt", "seeds"]);
        assert_eq!(
            flat[&ParameterPath::new(["cell", "v_rest", "mean"])],
            ParameterValue::Scalar(Scalar::Int(-65))
        );
    }

    #[test]
    fn test_flatten_keeps_dotted_key_apart_from_nested_path() {
        let set = ParameterSet::from_json(json!({"a.b": 1, "a": {"b": 2}})).unwrap();
        let flat = set.flatten();
        assert_eq!(flat.len(), 2);
        assert_eq!(
            flat[&ParameterPath::new(["a.b"])],
            ParameterValue::Scalar(Scalar::Int(1))
        );
        assert_eq!(
            flat[&ParameterPath::new(["a", "b"])],
            ParameterValue::Scalar(Scalar::Int(2))
        );
    }

    #[test]
    fn test_empty_nested_mapping_is_a_leaf() {
        let with_empty = ParameterSet::from_json(json!({"a": {}})).unwrap();
        assert_ne!(with_empty.flatten(), ParameterSet::new().flatten());
        assert_eq!(with_empty.to_string(), "a = {}");
    }

    #[test]
    fn test_non_mapping_root_is_rejected() {
        let err = ParameterSet::from_json(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ProvenanceError::InvalidParameters { .. }));
    }

    #[test]
    fn test_null_deserializes_as_empty() {
        let set: ParameterSet = serde_json::from_value(Value::Null).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_int_and_float_compare_numerically() {
        assert_eq!(Scalar::Int(1), Scalar::Float(1.0));
        assert_ne!(Scalar::Int(1), Scalar::Float(1.5));
        assert_ne!(Scalar::Int(1), Scalar::Str("1".to_string()));
    }

    #[test]
    fn test_nan_equals_itself() {
        assert_eq!(Scalar::Float(f64::NAN), Scalar::Float(f64::NAN));
        assert_ne!(Scalar::Float(f64::NAN), Scalar::Float(0.0));
        assert_ne!(Scalar::Int(0), Scalar::Float(f64::NAN));
    }

    #[test]
    fn test_int_and_float_compare_exactly_beyond_f64_precision() {
        // 2^53 + 1 rounds to 2^53 as an f64
        assert_ne!(Scalar::Int(9_007_199_254_740_993), Scalar::Float(9_007_199_254_740_992.0));
        assert_eq!(Scalar::Int(9_007_199_254_740_992), Scalar::Float(9_007_199_254_740_992.0));
        assert_eq!(Scalar::Int(i64::MIN), Scalar::Float(i64::MIN as f64));
        // i64::MAX as f64 is 2^63, one past the range
        assert_ne!(Scalar::Int(i64::MAX), Scalar::Float(i64::MAX as f64));
        assert_ne!(Scalar::Int(0), Scalar::Float(f64::INFINITY));
    }

    #[test]
    fn test_display_flattened_lines() {
        let set = ParameterSet::from_json(json!({"b": {"c": "x"}, "a": 2})).unwrap();
        assert_eq!(set.to_string(), "a = 2\nb.c = x");
    }

    #[test]
    fn test_json_round_trip_keeps_structure() {
        let doc = json!({"a": {"b": [1, 2.5, "s", null, true]}});
        let set = ParameterSet::from_json(doc.clone()).unwrap();
        assert_eq!(Value::from(set), doc);
    }
}
