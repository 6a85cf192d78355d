//! Serialization utilities
//!
//! This module turns any serializable struct into a `Record`, keeping the
//! struct's field order.

use crate::record::Record;
use crate::types::FieldValue;
use serde::Serialize;

/// Convert serializable data to a Record
///
/// Anything that does not serialize to a JSON object becomes a single
/// `value` field.
pub fn serialize_to_record<T: Serialize>(data: &T) -> Result<Record, serde_json::Error> {
    let record = match serde_json::to_value(data)? {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key, FieldValue::from(value)))
            .collect(),
        other => Record::new().with("value", FieldValue::from(other)),
    };

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Discount {
        store_name: String,
        discount_price: i64,
        category: Option<String>,
    }

    #[test]
    fn test_struct_field_order_survives() {
        let record = serialize_to_record(&Discount {
            store_name: "xxx".into(),
            discount_price: 110,
            category: None,
        })
        .unwrap();

        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["store_name", "discount_price", "category"]
        );
        assert_eq!(record.get("discount_price"), Some(&FieldValue::Integer(110)));
        assert_eq!(record.get("category"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_scalar_becomes_value_field() {
        let record = serialize_to_record(&5).unwrap();
        assert_eq!(record.get("value"), Some(&FieldValue::Integer(5)));
    }
}
