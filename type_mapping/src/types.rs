//! Type mapping definitions
//!
//! This module provides the caller-facing `FieldValue` and the driver-facing
//! `BoundValue` that statement builders place into parameter lists.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A value supplied by the caller, either as a filter operand or as column data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Uuid(Uuid),
    Date(NaiveDate),
    /// Instant carrying its UTC offset
    Timestamp(DateTime<FixedOffset>),
    /// Wall-clock instant without zone information
    NaiveTimestamp(NaiveDateTime),
    Json(serde_json::Value),
    List(Vec<FieldValue>),
    /// Unordered collection; element order carries no meaning
    Set(Vec<FieldValue>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Whether the value can feed an IN-list
    pub fn is_sequence(&self) -> bool {
        matches!(self, FieldValue::List(_) | FieldValue::Set(_))
    }

    /// Build an unordered set value
    pub fn set<T: Into<FieldValue>>(items: impl IntoIterator<Item = T>) -> Self {
        FieldValue::Set(items.into_iter().map(Into::into).collect())
    }
}

/// A coerced value ready to be bound to a placeholder
///
/// Instants are always naive here; the coercer resolves offsets before
/// anything reaches a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoundValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Json(serde_json::Value),
    List(Vec<BoundValue>),
}

impl BoundValue {
    pub fn is_null(&self) -> bool {
        matches!(self, BoundValue::Null)
    }

    /// JSON form, used by drivers that bind collections as documents
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            BoundValue::Null => serde_json::Value::Null,
            BoundValue::Boolean(b) => serde_json::Value::Bool(*b),
            BoundValue::Integer(i) => serde_json::Value::from(*i),
            BoundValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            BoundValue::Text(s) => serde_json::Value::String(s.clone()),
            BoundValue::Uuid(u) => serde_json::Value::String(u.to_string()),
            BoundValue::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
            BoundValue::Timestamp(ts) => {
                serde_json::Value::String(ts.format("%Y-%m-%d %H:%M:%S%.f").to_string())
            }
            BoundValue::Json(v) => v.clone(),
            BoundValue::List(items) => {
                serde_json::Value::Array(items.iter().map(BoundValue::to_json).collect())
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(val: String) -> Self {
        FieldValue::Text(val)
    }
}

impl From<&str> for FieldValue {
    fn from(val: &str) -> Self {
        FieldValue::Text(val.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(val: i32) -> Self {
        FieldValue::Integer(val as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(val: i64) -> Self {
        FieldValue::Integer(val)
    }
}

impl From<u32> for FieldValue {
    fn from(val: u32) -> Self {
        FieldValue::Integer(val as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(val: f64) -> Self {
        FieldValue::Float(val)
    }
}

impl From<bool> for FieldValue {
    fn from(val: bool) -> Self {
        FieldValue::Boolean(val)
    }
}

impl From<Uuid> for FieldValue {
    fn from(val: Uuid) -> Self {
        FieldValue::Uuid(val)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(val: NaiveDate) -> Self {
        FieldValue::Date(val)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(val: NaiveDateTime) -> Self {
        FieldValue::NaiveTimestamp(val)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FieldValue {
    fn from(val: DateTime<Tz>) -> Self {
        FieldValue::Timestamp(val.fixed_offset())
    }
}

impl<T> From<Vec<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(val: Vec<T>) -> Self {
        FieldValue::List(val.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(val: serde_json::Value) -> Self {
        match val {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    FieldValue::Float(f)
                } else {
                    FieldValue::Json(serde_json::Value::Number(n))
                }
            }
            serde_json::Value::String(s) => {
                // RFC3339 strings are instants
                if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
                    FieldValue::Timestamp(dt)
                } else {
                    FieldValue::Text(s)
                }
            }
            serde_json::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(FieldValue::from).collect())
            }
            other => FieldValue::Json(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_option_maps_none_to_null() {
        let value: FieldValue = Option::<i64>::None.into();
        assert!(value.is_null());

        let value: FieldValue = Some("x").into();
        assert_eq!(value, FieldValue::Text("x".to_string()));
    }

    #[test]
    fn test_vec_becomes_list() {
        let value: FieldValue = vec![1, 2, 3].into();
        assert!(value.is_sequence());
        assert_eq!(
            value,
            FieldValue::List(vec![
                FieldValue::Integer(1),
                FieldValue::Integer(2),
                FieldValue::Integer(3)
            ])
        );
    }

    #[test]
    fn test_any_zone_keeps_its_offset() {
        let utc = Utc.with_ymd_and_hms(2018, 5, 9, 12, 0, 0).unwrap();
        match FieldValue::from(utc) {
            FieldValue::Timestamp(dt) => assert_eq!(dt.offset().local_minus_utc(), 0),
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(FieldValue::from(json!(7)), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(json!(1.5)), FieldValue::Float(1.5));
        assert_eq!(FieldValue::from(json!("plain")), FieldValue::Text("plain".into()));
        assert!(matches!(
            FieldValue::from(json!("2018-05-09T10:00:00+08:00")),
            FieldValue::Timestamp(_)
        ));
        assert!(matches!(FieldValue::from(json!([1, "a"])), FieldValue::List(_)));
        assert!(matches!(FieldValue::from(json!({"k": 1})), FieldValue::Json(_)));
    }

    #[test]
    fn test_bound_value_to_json() {
        let value = BoundValue::List(vec![BoundValue::Integer(1), BoundValue::Text("a".into())]);
        assert_eq!(value.to_json(), json!([1, "a"]));
        assert_eq!(BoundValue::Float(f64::NAN).to_json(), serde_json::Value::Null);
    }
}
