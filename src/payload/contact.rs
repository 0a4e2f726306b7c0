//! Property Mapper: flat contact/company fields into the CRM's typed
//! property-list representation.

use serde_json::Value;

use crate::error::{CrmError, Result};
use crate::payload::{parse_raw_json, BodySource, ContactBody, ContactUpdate, Property};
use crate::request::{ContactFields, ContactKind};

// The CRM only accepts websites under this misspelled key. Intentional,
// do not correct.
const WEBSITE_WIRE_NAME: &str = "webiste";

/// Builds the create-mode wire body for a contact or company.
pub fn build_create_body(kind: ContactKind, source: &BodySource<ContactFields>) -> Result<Value> {
    match source {
        BodySource::Raw(raw) => Ok(Value::Object(parse_raw_json(raw)?)),
        BodySource::Structured(fields) => {
            let body = ContactBody {
                // The CRM defaults new records to persons.
                record_type: match kind {
                    ContactKind::Company => Some("COMPANY"),
                    ContactKind::Person => None,
                },
                star_value: fields.star_value.clone(),
                tags: fields.tags.clone(),
                properties: map_properties(kind, fields),
            };
            Ok(serde_json::to_value(body).expect("contact body serializes"))
        }
    }
}

/// Builds the logical update payload for a contact or company. The record
/// type is never set here; the CRM does not allow changing it.
pub fn build_update(
    kind: ContactKind,
    id: &str,
    source: &BodySource<ContactFields>,
) -> Result<ContactUpdate> {
    let mut payload = match source {
        BodySource::Raw(raw) => {
            let map = parse_raw_json(raw)?;
            serde_json::from_value::<ContactUpdate>(Value::Object(map))
                .map_err(|_| CrmError::validation("Additional fields must be a valid JSON"))?
        }
        BodySource::Structured(fields) => {
            let properties = map_properties(kind, fields);
            ContactUpdate {
                id: String::new(),
                properties: if properties.is_empty() {
                    None
                } else {
                    Some(properties)
                },
                lead_score: match kind {
                    ContactKind::Person => fields.lead_score.clone(),
                    ContactKind::Company => None,
                },
                tags: fields.tags.clone(),
                star_value: fields.star_value.clone(),
            }
        }
    };
    payload.id = id.to_string();
    Ok(payload)
}

fn map_properties(kind: ContactKind, fields: &ContactFields) -> Vec<Property> {
    let mut properties = Vec::new();

    match kind {
        ContactKind::Person => {
            if let Some(first_name) = &fields.first_name {
                properties.push(Property::system("first_name", first_name));
            }
            if let Some(last_name) = &fields.last_name {
                properties.push(Property::system("last_name", last_name));
            }
            if let Some(company) = &fields.company {
                properties.push(Property::system("company", company));
            }
            if let Some(title) = &fields.title {
                properties.push(Property::system("title", title));
            }
            for entry in &fields.emails {
                properties.push(Property::system_subtyped("email", &entry.subtype, &entry.email));
            }
            for entry in &fields.addresses {
                properties.push(Property::system_subtyped(
                    "address",
                    &entry.subtype,
                    &entry.address,
                ));
            }
            for entry in &fields.phones {
                properties.push(Property::system_subtyped("phone", &entry.subtype, &entry.number));
            }
        }
        ContactKind::Company => {
            if let Some(email) = &fields.email {
                properties.push(Property::system("email", email));
            }
            if let Some(address) = &fields.address {
                properties.push(Property::system("address", address));
            }
            if let Some(phone) = &fields.phone {
                properties.push(Property::system("phone", phone));
            }
        }
    }

    for entry in &fields.websites {
        properties.push(Property::system_subtyped(
            WEBSITE_WIRE_NAME,
            &entry.subtype,
            &entry.url,
        ));
    }
    for entry in &fields.custom_properties {
        properties.push(Property::custom(
            &entry.name,
            entry.subtype.clone(),
            &entry.value,
        ));
    }

    properties
}
