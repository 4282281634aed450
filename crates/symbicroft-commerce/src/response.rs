//! Normalized response envelopes.
//!
//! The admin backend answers list endpoints with `{ <plural>: [...], pagination }`
//! and single-record endpoints with `{ <singular>: {...} }`. Both are folded
//! into a `{ success, data }` envelope keyed by the record's [`Resource`] names.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CommerceError;

/// A backend record with known envelope field names.
pub trait Resource: DeserializeOwned {
    /// Field holding one record, e.g. `product`.
    const ONE: &'static str;
    /// Field holding a list of records, e.g. `products`.
    const MANY: &'static str;
    /// Message reported when a delete response carries none.
    const DELETED: &'static str;
}

/// Normalized list of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl<T: Resource> ListResponse<T> {
    /// Normalize `{ <plural>, pagination: { totalItems } }`.
    ///
    /// A missing or null list yields an empty `data`.
    pub fn from_backend(body: Value) -> Result<Self, CommerceError> {
        let total = body
            .get("pagination")
            .and_then(|p| p.get("totalItems"))
            .and_then(Value::as_i64);
        let data = match body.get(T::MANY) {
            Some(Value::Null) | None => Vec::new(),
            Some(list) => serde_json::from_value(list.clone())?,
        };
        Ok(Self {
            success: true,
            data,
            total,
        })
    }
}

/// Normalized single record, or a payload the backend already wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Resource> ItemResponse<T> {
    /// Normalize `{ <singular> }`.
    pub fn from_backend(body: Value) -> Result<Self, CommerceError> {
        let record = body.get(T::ONE).cloned().ok_or_else(|| {
            CommerceError::Serialization(format!("response has no {}", T::ONE))
        })?;
        Ok(Self {
            success: true,
            data: serde_json::from_value(record)?,
        })
    }
}

/// Acknowledgement for updates and deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Take the backend's `message`, or `fallback` when absent.
    pub fn from_backend(body: &Value, fallback: &str) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string();
        Self {
            success: true,
            message,
        }
    }

    /// Result of deleting a `T`.
    pub fn deleted<T: Resource>(body: &Value) -> Self {
        Self::from_backend(body, T::DELETED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Widget {
        id: i64,
    }

    impl Resource for Widget {
        const ONE: &'static str = "widget";
        const MANY: &'static str = "widgets";
        const DELETED: &'static str = "Widget deleted successfully";
    }

    #[test]
    fn test_list_reads_pagination_total() {
        let body = json!({"widgets": [{"id": 1}, {"id": 2}], "pagination": {"totalItems": 9}});
        let resp = ListResponse::<Widget>::from_backend(body).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data, vec![Widget { id: 1 }, Widget { id: 2 }]);
        assert_eq!(resp.total, Some(9));
    }

    #[test]
    fn test_list_without_records_is_empty() {
        let resp = ListResponse::<Widget>::from_backend(json!({"widgets": null})).unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.total, None);
    }

    #[test]
    fn test_item_requires_field() {
        let resp = ItemResponse::<Widget>::from_backend(json!({"widget": {"id": 3}})).unwrap();
        assert_eq!(resp.data, Widget { id: 3 });

        let err = ItemResponse::<Widget>::from_backend(json!({"message": "ok"})).unwrap_err();
        assert!(err.to_string().contains("widget"));
    }

    #[test]
    fn test_deleted_message_fallback() {
        assert_eq!(
            MessageResponse::deleted::<Widget>(&json!({})).message,
            "Widget deleted successfully"
        );
        assert_eq!(MessageResponse::deleted::<Widget>(&json!({"message": "gone"})).message, "gone");
    }
}
