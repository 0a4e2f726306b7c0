use serde::{Deserialize, Serialize};

/// Whether a property is one of the CRM's built-in attributes or user-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyKind {
    System,
    Custom,
}

/// One atomic contact/company attribute in the CRM's property-list shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub value: String,
}

impl Property {
    pub fn system(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: PropertyKind::System,
            name: name.into(),
            subtype: None,
            value: value.into(),
        }
    }

    pub fn system_subtyped(
        name: impl Into<String>,
        subtype: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind: PropertyKind::System,
            name: name.into(),
            subtype: Some(subtype.into()),
            value: value.into(),
        }
    }

    pub fn custom(
        name: impl Into<String>,
        subtype: Option<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind: PropertyKind::Custom,
            name: name.into(),
            subtype,
            value: value.into(),
        }
    }
}

/// One search predicate in the CRM's dynamic-filter rule shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterRule {
    #[serde(rename = "LHS")]
    pub lhs: String,
    #[serde(rename = "CONDITION")]
    pub condition: String,
    #[serde(rename = "RHS")]
    pub rhs: String,
}

/// Dynamic-filter body. `rules` (AND) and `or_rules` (OR) are mutually
/// exclusive; construction via `build_filter` guarantees only one is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub contact_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<FilterRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or_rules: Option<Vec<FilterRule>>,
}

/// Create-mode contact/company wire body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactBody {
    /// Only set on company create; the CRM defaults to a person record and
    /// does not allow changing the type on update.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub properties: Vec<Property>,
}

/// Logical update intent for a contact/company. Up to four independent
/// categories; the CRM exposes no combined endpoint, so each populated
/// category becomes its own PUT (see `CrmClient::update_contact`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_value: Option<String>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        self.properties.is_none()
            && self.lead_score.is_none()
            && self.tags.is_none()
            && self.star_value.is_none()
    }
}

/// Custom attribute entry on a deal, copied through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealCustomData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub value: String,
}

/// Full opportunity payload for deal create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealCreate {
    pub name: String,
    /// Epoch milliseconds.
    pub close_date: i64,
    pub expected_value: f64,
    pub milestone: String,
    pub probability: i64,
    #[serde(rename = "contactIds", skip_serializing_if = "Option::is_none")]
    pub contact_ids: Option<Vec<String>>,
    #[serde(rename = "customData", skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Vec<DealCustomData>>,
}

/// Partial opportunity payload for deal update; absent fields are left
/// untouched server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealUpdate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<i64>,
    #[serde(rename = "contactIds", skip_serializing_if = "Option::is_none")]
    pub contact_ids: Option<Vec<String>>,
    #[serde(rename = "customData", skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Vec<DealCustomData>>,
}
