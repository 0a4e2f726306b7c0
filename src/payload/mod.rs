//! Request-body construction: flat user fields in, CRM wire shapes out.

use serde_json::{Map, Value};

use crate::error::{CrmError, Result};

pub mod contact;
pub mod deal;
pub mod filter;
mod models;

pub use models::{
    ContactBody, ContactUpdate, DealCreate, DealCustomData, DealUpdate, Filter, FilterRule,
    Property, PropertyKind,
};

/// Where a request body comes from. Exactly one construction path is active
/// per invocation: the raw JSON string is used verbatim, or the structured
/// field-by-field builder runs, never both.
#[derive(Debug, Clone)]
pub enum BodySource<T> {
    Raw(String),
    Structured(T),
}

/// Parses a raw additional-fields override. An empty string yields an empty
/// body; anything else must parse as a JSON object.
pub(crate) fn parse_raw_json(raw: &str) -> Result<Map<String, Value>> {
    if raw.is_empty() {
        return Ok(Map::new());
    }
    let value: Value = serde_json::from_str(raw)
        .map_err(|_| CrmError::validation("Additional fields must be a valid JSON"))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CrmError::validation(
            "Additional fields must be a valid JSON",
        )),
    }
}
