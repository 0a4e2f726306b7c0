//! Filter/Rule Builder: search conditions into the CRM's dynamic-filter JSON.

use crate::payload::{Filter, FilterRule};
use crate::request::{CombineOperation, ContactKind, SearchCondition};

/// Pure transform; condition order is caller-visible and preserved in the
/// resulting rule array. Filter types and operations are not validated here.
pub fn build_filter(
    kind: ContactKind,
    conditions: &[SearchCondition],
    combine: CombineOperation,
) -> Filter {
    let rules: Vec<FilterRule> = conditions
        .iter()
        .map(|condition| FilterRule {
            lhs: condition.filter_type.clone(),
            condition: condition.search_operation.clone(),
            rhs: condition.value.clone(),
        })
        .collect();

    match combine {
        CombineOperation::All => Filter {
            contact_type: kind.contact_type(),
            rules: Some(rules),
            or_rules: None,
        },
        CombineOperation::Any => Filter {
            contact_type: kind.contact_type(),
            rules: None,
            or_rules: Some(rules),
        },
    }
}
