//! Key-addressable records.
//!
//! A table never knows the concrete shape of the rows it displays. It only asks
//! each row for the value stored under a column key, so anything that can answer
//! that question can be rendered: JSON objects straight from the API, maps built
//! by hand, or typed structs that match on the key.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// A row of table data addressed by field name.
pub trait Record {
    /// Returns the value stored under `key`, or `None` when the record has no such field.
    fn field(&self, key: &str) -> Option<Value>;
}

impl Record for Value {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Record for Map<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// Formats a raw field value the way a cell without a renderer shows it.
///
/// `null` becomes an empty string so that absent fields degrade to blank cells.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_fields() {
        let record = json!({ "nombre": "Ron Añejo", "stock": 12 });

        assert_eq!(record.field("nombre"), Some(json!("Ron Añejo")));
        assert_eq!(record.field("stock"), Some(json!(12)));
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn test_non_object_value_has_no_fields() {
        let record = json!(["nombre"]);
        assert_eq!(record.field("nombre"), None, "arrays are not key-addressable");
    }

    #[test]
    fn test_map_records() {
        let mut hash = HashMap::new();
        hash.insert("telefono".to_owned(), json!("555-0101"));
        assert_eq!(hash.field("telefono"), Some(json!("555-0101")));

        let mut tree = BTreeMap::new();
        tree.insert("direccion".to_owned(), json!("Calle 1"));
        assert_eq!(tree.field("direccion"), Some(json!("Calle 1")));
        assert_eq!(tree.field("telefono"), None);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!("texto")), "texto");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(3.5)), "3.5");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
        assert_eq!(display_value(&json!({ "a": 1 })), r#"{"a":1}"#);
    }
}
