use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// Wrapper the travel API puts around every payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// A payload did not have the shape the page expects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// `data` was missing or not a JSON array.
    #[error("{what} data is not in the expected format")]
    NotAnArray {
        /// Resource being read, e.g. "Promotions".
        what: &'static str,
    },
    /// The array held records that do not match the model.
    #[error("{what} data could not be read: {message}")]
    Invalid {
        /// Resource being read.
        what: &'static str,
        /// Decoder message.
        message: String,
    },
}

impl Envelope {
    /// Decode `data` as a list of records.
    ///
    /// # Errors
    /// Returns [`ShapeError::NotAnArray`] when `data` is not an array and
    /// [`ShapeError::Invalid`] when its items do not decode as `T`.
    pub fn into_list<T: DeserializeOwned>(self, what: &'static str) -> Result<Vec<T>, ShapeError> {
        if !self.data.is_array() {
            return Err(ShapeError::NotAnArray { what });
        }
        serde_json::from_value(self.data).map_err(|err| ShapeError::Invalid {
            what,
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use serde_json::json;

    #[test]
    fn list_payload_decodes() {
        let envelope: Envelope = serde_json::from_value(json!({
            "code": "200",
            "data": [{ "id": "c1", "name": "Beach" }]
        }))
        .unwrap();
        let categories: Vec<Category> = envelope.into_list("Categories").unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Beach");
    }

    #[test]
    fn object_payload_is_rejected() {
        let envelope: Envelope = serde_json::from_value(json!({ "data": { "id": "c1" } })).unwrap();
        let err = envelope.into_list::<Category>("Categories").unwrap_err();
        assert_eq!(err, ShapeError::NotAnArray { what: "Categories" });
        assert_eq!(err.to_string(), "Categories data is not in the expected format");
    }

    #[test]
    fn missing_data_is_rejected() {
        let envelope: Envelope = serde_json::from_value(json!({ "message": "ok" })).unwrap();
        assert!(matches!(
            envelope.into_list::<Category>("Promotions"),
            Err(ShapeError::NotAnArray { .. })
        ));
    }

    #[test]
    fn malformed_items_are_reported() {
        let envelope: Envelope = serde_json::from_value(json!({ "data": [{ "nope": true }] })).unwrap();
        assert!(matches!(
            envelope.into_list::<Category>("Categories"),
            Err(ShapeError::Invalid { what: "Categories", .. })
        ));
    }
}
