use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Largest magnitude at which an integral `f64` still fits an `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A single cell of a generated row.
///
/// Numbers carry no integer/float distinction; whether a number is
/// integral only matters when it is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    String(String),
    Number(f64),
    Boolean(bool),
    /// Nested arrays and objects, kept as-is for the JSON export.
    Other(Value),
}

impl CellValue {
    /// Returns the number as an `i64` when it has no fractional part and
    /// fits the integer range.
    #[must_use]
    pub fn as_integral(&self) -> Option<i64> {
        match self {
            Self::Number(n) => integral(*n),
            _ => None,
        }
    }
}

pub(crate) fn integral(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n >= -I64_BOUND && n < I64_BOUND {
        Some(n as i64)
    } else {
        None
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(s) => Self::String(s),
            Value::Bool(b) => Self::Boolean(b),
            // Arbitrary-precision numbers are off, so every JSON number has an f64 view.
            Value::Number(n) => n.as_f64().map_or(Self::Other(Value::Number(n)), Self::Number),
            other @ (Value::Array(_) | Value::Object(_)) => Self::Other(other),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) => match integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Other(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn converts_json_scalars() {
        assert_eq!(CellValue::from(json!(null)), CellValue::Null);
        assert_eq!(CellValue::from(json!("a")), CellValue::String("a".into()));
        assert_eq!(CellValue::from(json!(3)), CellValue::Number(3.0));
        assert_eq!(CellValue::from(json!(2.5)), CellValue::Number(2.5));
        assert_eq!(CellValue::from(json!(false)), CellValue::Boolean(false));
    }

    #[test]
    fn keeps_nested_values() {
        let nested = json!({"street": "Main", "no": 4});
        assert_eq!(CellValue::from(nested.clone()), CellValue::Other(nested));
    }

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        let text = serde_json::to_string(&CellValue::Number(42.0)).unwrap();
        assert_eq!(text, "42");
        let text = serde_json::to_string(&CellValue::Number(1.5)).unwrap();
        assert_eq!(text, "1.5");
    }

    #[test]
    fn huge_numbers_are_not_integral() {
        assert_eq!(CellValue::Number(1e20).as_integral(), None);
        assert_eq!(CellValue::Number(-7.0).as_integral(), Some(-7));
        assert_eq!(CellValue::String("7".into()).as_integral(), None);
    }
}
