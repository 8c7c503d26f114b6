use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// ===============================
/// Merge a partial update into a record
/// ===============================
///
/// `payload` must be a non-empty JSON object whose keys are existing fields
/// of the record's serialized form. Keys listed in `protected` cannot be
/// changed. The merged document is deserialized again, so a value of the
/// wrong type is rejected instead of being written.
pub fn apply_patch<T>(record: &T, payload: &Value, protected: &[&str]) -> AppResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let changes = payload
        .as_object()
        .ok_or_else(|| AppError::validation("Payload must be a JSON object"))?;

    if changes.is_empty() {
        return Err(AppError::validation("No fields provided for update"));
    }

    let mut doc = serde_json::to_value(record)?;
    let target = doc
        .as_object_mut()
        .ok_or_else(|| AppError::internal("Record does not serialize to an object"))?;

    for (key, value) in changes {
        if protected.contains(&key.as_str()) {
            return Err(AppError::validation(format!("Field '{}' cannot be changed", key)));
        }
        match target.get_mut(key) {
            Some(slot) => *slot = value.clone(),
            None => return Err(AppError::validation(format!("Unknown field '{}'", key))),
        }
    }

    serde_json::from_value(doc)
        .map_err(|e| AppError::validation(format!("Invalid field value: {}", e)))
}

/// ===============================
/// Serialize an update struct into a patch
/// ===============================
///
/// Use with `#[serde(skip_serializing_if = "Option::is_none")]` fields so
/// that only the provided values end up in the patch.
pub fn to_patch<P: Serialize>(changes: &P) -> AppResult<Value> {
    Ok(serde_json::to_value(changes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Item {
        id: u32,
        name: String,
        price: f64,
        active: bool,
    }

    fn item() -> Item {
        Item {
            id: 7,
            name: "desk".into(),
            price: 120.0,
            active: true,
        }
    }

    #[test]
    fn merges_known_fields() {
        let patched = apply_patch(&item(), &json!({"price": 99.5, "active": false}), &["id"]).unwrap();
        assert_eq!(
            patched,
            Item {
                id: 7,
                name: "desk".into(),
                price: 99.5,
                active: false
            }
        );
    }

    #[test]
    fn rejects_empty_unknown_and_protected() {
        assert!(apply_patch(&item(), &json!({}), &[]).is_err());
        assert!(apply_patch(&item(), &json!([1]), &[]).is_err());
        assert!(apply_patch(&item(), &json!({"colour": "red"}), &[]).is_err());
        assert!(apply_patch(&item(), &json!({"id": 8}), &["id"]).is_err());
    }

    #[test]
    fn rejects_wrong_type() {
        let err = apply_patch(&item(), &json!({"price": "cheap"}), &[]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
