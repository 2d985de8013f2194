//! Shape checks for loosely-typed JSON payloads.
//!
//! Presence is checked for every field before any type is checked, so a
//! payload that is both incomplete and mistyped reports the missing property.

use super::errors::{EntityKind, PayloadError};
use serde_json::Value;

pub fn required_strings<const N: usize>(
    payload: &Value,
    entity: EntityKind,
    fields: [&str; N],
) -> Result<[String; N], PayloadError> {
    let is_missing = |field: &str| match payload.get(field) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if fields.iter().any(|f| is_missing(*f)) {
        return Err(PayloadError::missing(entity));
    }
    if fields.iter().any(|f| !payload[*f].is_string()) {
        return Err(PayloadError::invalid_type(entity));
    }

    Ok(std::array::from_fn(|i| {
        payload[fields[i]].as_str().unwrap_or_default().to_owned()
    }))
}

/// Maps `validator` failures (empty strings) onto the missing-property condition.
pub fn ensure_valid<T: validator::Validate>(
    value: T,
    entity: EntityKind,
) -> Result<T, PayloadError> {
    value
        .validate()
        .map_err(|_| PayloadError::missing(entity))?;
    Ok(value)
}
