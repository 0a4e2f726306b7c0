//! Deal Payload Builder: flat deal fields into the CRM's opportunity shape.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde_json::Value;

use crate::error::{CrmError, Result};
use crate::payload::{parse_raw_json, BodySource, DealCreate, DealUpdate};
use crate::request::{DealCreateFields, DealUpdateFields};

/// Builds the full opportunity body for deal create.
pub fn build_deal_create(source: &BodySource<DealCreateFields>) -> Result<Value> {
    match source {
        BodySource::Raw(raw) => Ok(Value::Object(parse_raw_json(raw)?)),
        BodySource::Structured(fields) => {
            let body = DealCreate {
                name: fields.name.clone(),
                close_date: close_date_millis(&fields.close_date)?,
                expected_value: fields.expected_value,
                milestone: fields.milestone.clone(),
                probability: fields.probability,
                contact_ids: fields.contact_ids.clone(),
                custom_data: fields.custom_data.clone(),
            };
            Ok(serde_json::to_value(body).expect("deal body serializes"))
        }
    }
}

/// Builds the partial-update opportunity body. In raw mode the parsed object
/// is sent verbatim; the id is injected only on the structured path.
pub fn build_deal_update(id: &str, source: &BodySource<DealUpdateFields>) -> Result<Value> {
    match source {
        BodySource::Raw(raw) => Ok(Value::Object(parse_raw_json(raw)?)),
        BodySource::Structured(fields) => {
            let body = DealUpdate {
                id: id.to_string(),
                expected_value: fields.expected_value,
                name: fields.name.clone(),
                probability: fields.probability,
                contact_ids: fields.contact_ids.clone(),
                custom_data: fields.custom_data.clone(),
            };
            Ok(serde_json::to_value(body).expect("deal body serializes"))
        }
    }
}

/// Close dates arrive as ISO-8601 strings and go out as epoch milliseconds.
/// A bare date is taken as midnight UTC.
fn close_date_millis(value: &str) -> Result<i64> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
    }
    Err(CrmError::validation(format!(
        "Close date is not a valid ISO date: {value}"
    )))
}

#[cfg(test)]
mod tests {
    use super::close_date_millis;

    #[test]
    fn bare_date_is_midnight_utc() {
        assert_eq!(close_date_millis("1970-01-02").unwrap(), 86_400_000);
    }

    #[test]
    fn rfc3339_keeps_offset() {
        assert_eq!(
            close_date_millis("1970-01-01T01:00:00+01:00").unwrap(),
            0
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(close_date_millis("next tuesday").is_err());
    }
}
