//! Pure-builder behavior: filters, property mapping, raw-JSON overrides,
//! deal payloads.

use serde_json::json;

use agile_crm::payload::contact::{build_create_body, build_update};
use agile_crm::payload::deal::{build_deal_create, build_deal_update};
use agile_crm::payload::filter::build_filter;
use agile_crm::request::{
    CombineOperation, ContactFields, ContactKind, CustomPropertyEntry, DealCreateFields,
    DealUpdateFields, EmailEntry, SearchCondition, WebsiteEntry,
};
use agile_crm::{BodySource, CrmError};

fn acme_condition() -> SearchCondition {
    SearchCondition {
        filter_type: "name".to_string(),
        search_operation: "EQUALS".to_string(),
        value: "Acme".to_string(),
    }
}

#[test]
fn filter_all_populates_rules_only() {
    let filter = build_filter(
        ContactKind::Company,
        &[acme_condition()],
        CombineOperation::All,
    );

    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({
            "contact_type": "COMPANY",
            "rules": [{ "LHS": "name", "CONDITION": "EQUALS", "RHS": "Acme" }]
        })
    );
}

#[test]
fn filter_any_populates_or_rules_only() {
    let filter = build_filter(
        ContactKind::Person,
        &[acme_condition()],
        CombineOperation::Any,
    );

    assert!(filter.rules.is_none());
    let rules = filter.or_rules.as_ref().unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(filter.contact_type, "PERSON");
}

#[test]
fn filter_preserves_condition_order() {
    let conditions = vec![
        SearchCondition {
            filter_type: "first_name".to_string(),
            search_operation: "EQUALS".to_string(),
            value: "Jane".to_string(),
        },
        SearchCondition {
            filter_type: "email".to_string(),
            search_operation: "NOTEQUALS".to_string(),
            value: "j@x.com".to_string(),
        },
    ];

    let filter = build_filter(ContactKind::Person, &conditions, CombineOperation::All);
    let rules = filter.rules.unwrap();
    assert_eq!(rules[0].lhs, "first_name");
    assert_eq!(rules[1].lhs, "email");
}

#[test]
fn building_twice_from_same_input_is_identical() {
    let conditions = vec![acme_condition()];
    let first = build_filter(ContactKind::Company, &conditions, CombineOperation::All);
    let second = build_filter(ContactKind::Company, &conditions, CombineOperation::All);
    assert_eq!(first, second);
}

#[test]
fn contact_properties_map_in_declared_order() {
    let fields = ContactFields {
        first_name: Some("Jane".to_string()),
        emails: vec![EmailEntry {
            subtype: "work".to_string(),
            email: "j@x.com".to_string(),
        }],
        ..ContactFields::default()
    };

    let body = build_create_body(ContactKind::Person, &BodySource::Structured(fields)).unwrap();

    assert_eq!(
        body["properties"],
        json!([
            { "type": "SYSTEM", "name": "first_name", "value": "Jane" },
            { "type": "SYSTEM", "subtype": "work", "name": "email", "value": "j@x.com" }
        ])
    );
}

#[test]
fn company_create_gets_type_tag_and_scalar_properties() {
    let fields = ContactFields {
        email: Some("info@acme.test".to_string()),
        ..ContactFields::default()
    };

    let body = build_create_body(ContactKind::Company, &BodySource::Structured(fields)).unwrap();

    assert_eq!(body["type"], "COMPANY");
    assert_eq!(
        body["properties"],
        json!([{ "type": "SYSTEM", "name": "email", "value": "info@acme.test" }])
    );
}

#[test]
fn person_create_has_no_type_tag() {
    let body = build_create_body(
        ContactKind::Person,
        &BodySource::Structured(ContactFields::default()),
    )
    .unwrap();

    assert!(body.get("type").is_none());
}

#[test]
fn website_uses_the_crm_misspelled_wire_name() {
    let fields = ContactFields {
        websites: vec![WebsiteEntry {
            subtype: "URL".to_string(),
            url: "https://acme.test".to_string(),
        }],
        ..ContactFields::default()
    };

    let body = build_create_body(ContactKind::Person, &BodySource::Structured(fields)).unwrap();
    assert_eq!(body["properties"][0]["name"], "webiste");
}

#[test]
fn custom_properties_are_typed_custom() {
    let fields = ContactFields {
        custom_properties: vec![CustomPropertyEntry {
            name: "tier".to_string(),
            subtype: None,
            value: "gold".to_string(),
        }],
        ..ContactFields::default()
    };

    let body = build_create_body(ContactKind::Person, &BodySource::Structured(fields)).unwrap();
    assert_eq!(
        body["properties"][0],
        json!({ "type": "CUSTOM", "name": "tier", "value": "gold" })
    );
}

#[test]
fn raw_empty_string_is_an_empty_body() {
    let body =
        build_create_body(ContactKind::Person, &BodySource::Raw(String::new())).unwrap();
    assert_eq!(body, json!({}));
}

#[test]
fn raw_invalid_json_is_a_validation_error() {
    let err = build_create_body(ContactKind::Person, &BodySource::Raw("{bad".to_string()))
        .unwrap_err();

    match err {
        CrmError::Validation(message) => {
            assert_eq!(message, "Additional fields must be a valid JSON")
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn raw_mode_passes_parsed_object_through_verbatim() {
    let raw = r#"{"tags":["vip"],"properties":[{"type":"SYSTEM","name":"title","value":"CEO"}]}"#;
    let body =
        build_create_body(ContactKind::Company, &BodySource::Raw(raw.to_string())).unwrap();

    // Raw mode bypasses the structured builder entirely; no type tag added.
    assert!(body.get("type").is_none());
    assert_eq!(body["tags"], json!(["vip"]));
}

#[test]
fn update_lead_score_is_top_level_and_person_only() {
    let fields = ContactFields {
        lead_score: Some("42".to_string()),
        ..ContactFields::default()
    };

    let person = build_update(
        ContactKind::Person,
        "1",
        &BodySource::Structured(fields.clone()),
    )
    .unwrap();
    assert_eq!(person.lead_score.as_deref(), Some("42"));
    assert!(person.properties.is_none());

    let company =
        build_update(ContactKind::Company, "1", &BodySource::Structured(fields)).unwrap();
    assert!(company.lead_score.is_none());
}

#[test]
fn update_never_sets_a_type_tag() {
    let fields = ContactFields {
        email: Some("info@acme.test".to_string()),
        ..ContactFields::default()
    };

    let payload =
        build_update(ContactKind::Company, "9", &BodySource::Structured(fields)).unwrap();
    let wire = serde_json::to_value(&payload).unwrap();
    assert!(wire.get("type").is_none());
    assert_eq!(wire["id"], "9");
}

#[test]
fn update_from_raw_json_extracts_categories() {
    let raw = r#"{"tags":["a","b"],"star_value":"4","ignored_key":true}"#;
    let payload =
        build_update(ContactKind::Person, "7", &BodySource::Raw(raw.to_string())).unwrap();

    assert_eq!(payload.id, "7");
    assert_eq!(payload.tags, Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(payload.star_value.as_deref(), Some("4"));
    assert!(payload.properties.is_none());
    assert!(payload.lead_score.is_none());
}

#[test]
fn deal_create_converts_close_date_to_epoch_millis() {
    let fields = DealCreateFields {
        name: "Big deal".to_string(),
        close_date: "2024-03-01".to_string(),
        expected_value: 1500.0,
        milestone: "Open".to_string(),
        probability: 75,
        contact_ids: Some(vec!["123".to_string()]),
        custom_data: None,
    };

    let body = build_deal_create(&BodySource::Structured(fields)).unwrap();

    assert_eq!(body["close_date"], 1_709_251_200_000_i64);
    assert_eq!(body["name"], "Big deal");
    assert_eq!(body["expected_value"], 1500.0);
    assert_eq!(body["probability"], 75);
    assert_eq!(body["contactIds"], json!(["123"]));
    assert!(body.get("customData").is_none());
}

#[test]
fn deal_create_rejects_bad_close_date() {
    let fields = DealCreateFields {
        name: "Big deal".to_string(),
        close_date: "not-a-date".to_string(),
        expected_value: 1.0,
        milestone: "Open".to_string(),
        probability: 50,
        contact_ids: None,
        custom_data: None,
    };

    assert!(matches!(
        build_deal_create(&BodySource::Structured(fields)),
        Err(CrmError::Validation(_))
    ));
}

#[test]
fn deal_update_carries_only_populated_fields() {
    let fields = DealUpdateFields {
        probability: Some(90),
        ..DealUpdateFields::default()
    };

    let body = build_deal_update("55", &BodySource::Structured(fields)).unwrap();

    assert_eq!(body, json!({ "id": "55", "probability": 90 }));
}

#[test]
fn deal_update_raw_mode_sends_parsed_object_verbatim() {
    let raw = r#"{"id":"55","expected_value":200.0}"#;
    let body = build_deal_update("ignored", &BodySource::Raw(raw.to_string())).unwrap();
    assert_eq!(body, json!({ "id": "55", "expected_value": 200.0 }));
}
