//! Typed per-record operation model. The host resolves its per-record
//! parameters into one [`CrmRequest`] before dispatch, so every field the
//! adapter consumes is checked at compile time instead of looked up by name.

use crate::payload::{BodySource, DealCustomData};

/// Which record type a contact-family operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Person,
    Company,
}

impl ContactKind {
    /// Discriminator value the CRM expects in filters and create bodies.
    pub fn contact_type(self) -> &'static str {
        match self {
            ContactKind::Person => "PERSON",
            ContactKind::Company => "COMPANY",
        }
    }
}

/// Whether multiple search conditions are ANDed or ORed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOperation {
    All,
    Any,
}

/// One user-specified search predicate. The filter type and operation are
/// passed through to the CRM unchecked; invalid combinations are rejected
/// server-side.
#[derive(Debug, Clone)]
pub struct SearchCondition {
    pub filter_type: String,
    pub search_operation: String,
    pub value: String,
}

/// How a contact/company get-all resolves.
#[derive(Debug, Clone)]
pub enum ListScope {
    /// Unfiltered listing with no page-size limit.
    All,
    /// Unfiltered listing capped at `limit` records.
    Page { limit: u32 },
    /// Dynamic-filter search.
    Filtered {
        conditions: Vec<SearchCondition>,
        combine: CombineOperation,
        limit: u32,
        sort_key: String,
    },
}

/// Structured additional fields for contact/company create and update.
/// The `emails`/`addresses`/`phones` lists apply to persons, the scalar
/// `email`/`address`/`phone` to companies; the mapper selects by kind.
#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub star_value: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Update-only, persons only; sent top-level rather than as a property.
    pub lead_score: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub emails: Vec<EmailEntry>,
    pub addresses: Vec<AddressEntry>,
    pub phones: Vec<PhoneEntry>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub websites: Vec<WebsiteEntry>,
    pub custom_properties: Vec<CustomPropertyEntry>,
}

#[derive(Debug, Clone)]
pub struct EmailEntry {
    pub subtype: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct AddressEntry {
    pub subtype: String,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct PhoneEntry {
    pub subtype: String,
    pub number: String,
}

#[derive(Debug, Clone)]
pub struct WebsiteEntry {
    pub subtype: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct CustomPropertyEntry {
    pub name: String,
    pub subtype: Option<String>,
    pub value: String,
}

/// Structured fields for deal create; the five scalars are mandatory.
#[derive(Debug, Clone)]
pub struct DealCreateFields {
    pub name: String,
    /// ISO-8601 date or datetime, converted to epoch milliseconds.
    pub close_date: String,
    pub expected_value: f64,
    pub milestone: String,
    pub probability: i64,
    pub contact_ids: Option<Vec<String>>,
    pub custom_data: Option<Vec<DealCustomData>>,
}

/// Structured fields for deal partial update; absent fields are left
/// untouched server-side.
#[derive(Debug, Clone, Default)]
pub struct DealUpdateFields {
    pub expected_value: Option<f64>,
    pub name: Option<String>,
    pub probability: Option<i64>,
    pub contact_ids: Option<Vec<String>>,
    pub custom_data: Option<Vec<DealCustomData>>,
}

/// One contact/company operation.
#[derive(Debug, Clone)]
pub enum ContactRequest {
    Get {
        kind: ContactKind,
        id: String,
    },
    Delete {
        kind: ContactKind,
        id: String,
    },
    GetAll {
        kind: ContactKind,
        scope: ListScope,
    },
    Create {
        kind: ContactKind,
        body: BodySource<ContactFields>,
    },
    Update {
        kind: ContactKind,
        id: String,
        body: BodySource<ContactFields>,
    },
}

/// Deal listings have no filtered search, only the optional page cap.
#[derive(Debug, Clone)]
pub enum DealListScope {
    All,
    Page { limit: u32 },
}

/// One deal (opportunity) operation.
#[derive(Debug, Clone)]
pub enum DealRequest {
    Get {
        id: String,
    },
    Delete {
        id: String,
    },
    GetAll {
        scope: DealListScope,
    },
    Create {
        body: BodySource<DealCreateFields>,
    },
    Update {
        id: String,
        body: BodySource<DealUpdateFields>,
    },
}

/// One input record, fully resolved.
#[derive(Debug, Clone)]
pub enum CrmRequest {
    Contact(ContactRequest),
    Deal(DealRequest),
}
