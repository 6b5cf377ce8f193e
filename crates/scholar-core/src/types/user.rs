//! User profile record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};

/// A user profile as returned by the backend.
///
/// The fields are opaque to the client: whatever object the backend sends is
/// kept and passed through unchanged, apart from explicit shallow merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Map<String, Value>);

impl User {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a user from an arbitrary JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(InvalidInputError::Other {
                message: format!("user record must be a JSON object, got {}", other),
            }
            .into()),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The `id` field, if the backend sent one.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Shallow-merge `partial` into this record; later keys win.
    pub fn merge(&mut self, partial: Map<String, Value>) {
        for (key, value) in partial {
            self.0.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(value: Value) -> User {
        User::from_value(value).unwrap()
    }

    #[test]
    fn merge_overwrites_only_given_fields() {
        let mut u = user(json!({"id": 1, "name": "Y"}));
        let partial = json!({"name": "X"}).as_object().cloned().unwrap();
        u.merge(partial);
        assert_eq!(u, user(json!({"id": 1, "name": "X"})));
    }

    #[test]
    fn merge_is_shallow() {
        let mut u = user(json!({"prefs": {"theme": "dark", "lang": "en"}}));
        let partial = json!({"prefs": {"theme": "light"}}).as_object().cloned().unwrap();
        u.merge(partial);
        assert_eq!(u.get("prefs"), Some(&json!({"theme": "light"})));
    }

    #[test]
    fn rejects_non_object() {
        assert!(User::from_value(json!([1, 2])).is_err());
        assert!(User::from_value(json!("alice")).is_err());
    }

    #[test]
    fn id_reads_id_field() {
        assert_eq!(user(json!({"id": 7})).id(), Some(&json!(7)));
        assert_eq!(user(json!({})).id(), None);
    }
}
