//! Value coercion
//!
//! Turns caller values into bound values. Offset-aware instants are moved to
//! UTC and stripped of their offset; sequences are coerced element by element.

use type_mapping::{BoundValue, FieldValue};

pub fn coerce(value: &FieldValue) -> BoundValue {
    match value {
        FieldValue::Null => BoundValue::Null,
        FieldValue::Boolean(b) => BoundValue::Boolean(*b),
        FieldValue::Integer(i) => BoundValue::Integer(*i),
        FieldValue::Float(f) => BoundValue::Float(*f),
        FieldValue::Text(s) => BoundValue::Text(s.clone()),
        FieldValue::Uuid(u) => BoundValue::Uuid(*u),
        FieldValue::Date(d) => BoundValue::Date(*d),
        FieldValue::Timestamp(dt) => BoundValue::Timestamp(dt.naive_utc()),
        FieldValue::NaiveTimestamp(ts) => BoundValue::Timestamp(*ts),
        FieldValue::Json(v) => BoundValue::Json(v.clone()),
        FieldValue::List(items) | FieldValue::Set(items) => {
            BoundValue::List(items.iter().map(coerce).collect())
        }
    }
}

/// Element-wise coercion for IN-lists; `None` when the value is not a sequence
pub fn coerce_sequence(value: &FieldValue) -> Option<Vec<BoundValue>> {
    match value {
        FieldValue::List(items) | FieldValue::Set(items) => {
            Some(items.iter().map(coerce).collect())
        }
        _ => None,
    }
}
