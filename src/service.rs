//! Operation Router: one resolved record in, zero-or-more CRM responses out.

use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::api::{CrmClient, RequestBody};
use crate::config::Credentials;
use crate::error::Result;
use crate::payload::contact::{build_create_body, build_update};
use crate::payload::deal::{build_deal_create, build_deal_update};
use crate::payload::filter::build_filter;
use crate::request::{ContactKind, ContactRequest, CrmRequest, DealListScope, DealRequest, ListScope};

pub struct AgileCrmService {
    client: CrmClient,
}

impl AgileCrmService {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: CrmClient::new(credentials),
        }
    }

    pub fn with_client(client: CrmClient) -> Self {
        Self { client }
    }

    /// Processes a batch strictly sequentially, in input order. Later
    /// records must not race earlier ones against the same CRM record, so
    /// no two calls are ever in flight at once. The first failure aborts
    /// the remaining records.
    pub async fn execute(&self, records: &[CrmRequest]) -> Result<Vec<Value>> {
        let mut output = Vec::new();

        for (index, record) in records.iter().enumerate() {
            debug!(index, "processing record");
            let folded = self.execute_one(record).await?;
            output.extend(folded);
        }

        info!(total = output.len(), "batch complete");
        Ok(output)
    }

    /// Runs one record and folds its response: arrays are flattened into
    /// the output, anything else is a single element.
    pub async fn execute_one(&self, record: &CrmRequest) -> Result<Vec<Value>> {
        let response = match record {
            CrmRequest::Contact(request) => self.run_contact(request).await?,
            CrmRequest::Deal(request) => self.run_deal(request).await?,
        };

        Ok(match response {
            Value::Array(items) => items,
            other => vec![other],
        })
    }

    async fn run_contact(&self, request: &ContactRequest) -> Result<Value> {
        match request {
            ContactRequest::Get { id, .. } => {
                self.client
                    .request(Method::GET, &format!("api/contacts/{id}"), RequestBody::None)
                    .await
            }
            ContactRequest::Delete { id, .. } => {
                self.client
                    .request(Method::DELETE, &format!("api/contacts/{id}"), RequestBody::None)
                    .await
            }
            ContactRequest::GetAll { kind, scope } => self.list_contacts(*kind, scope).await,
            ContactRequest::Create { kind, body } => {
                let body = build_create_body(*kind, body)?;
                self.client
                    .request(Method::POST, "api/contacts", RequestBody::Json(&body))
                    .await
            }
            ContactRequest::Update { kind, id, body } => {
                let payload = build_update(*kind, id, body)?;
                self.client.update_contact(&payload).await
            }
        }
    }

    async fn list_contacts(&self, kind: ContactKind, scope: &ListScope) -> Result<Value> {
        match scope {
            // Plain listing is GET for persons but POST for companies; the
            // CRM's asymmetry, preserved as-is.
            ListScope::All => match kind {
                ContactKind::Person => {
                    self.client
                        .request(Method::GET, "api/contacts", RequestBody::None)
                        .await
                }
                ContactKind::Company => {
                    let body = json!({});
                    self.client
                        .request(
                            Method::POST,
                            "api/contacts/companies/list",
                            RequestBody::Json(&body),
                        )
                        .await
                }
            },
            ListScope::Page { limit } => match kind {
                ContactKind::Person => {
                    self.client
                        .request(
                            Method::GET,
                            &format!("api/contacts?page_size={limit}"),
                            RequestBody::None,
                        )
                        .await
                }
                ContactKind::Company => {
                    let body = json!({});
                    self.client
                        .request(
                            Method::POST,
                            &format!("api/contacts/companies/list?page_size={limit}"),
                            RequestBody::Json(&body),
                        )
                        .await
                }
            },
            ListScope::Filtered {
                conditions,
                combine,
                limit,
                sort_key,
            } => {
                let filter = build_filter(kind, conditions, *combine);
                let filter_json =
                    serde_json::to_string(&filter).expect("filter serializes");
                let form = [
                    ("filterJson", filter_json),
                    ("page_size", limit.to_string()),
                    ("global_sort_key", sort_key.clone()),
                ];
                self.client
                    .request(
                        Method::POST,
                        "api/filters/filter/dynamic-filter",
                        RequestBody::Form(&form),
                    )
                    .await
            }
        }
    }

    async fn run_deal(&self, request: &DealRequest) -> Result<Value> {
        match request {
            DealRequest::Get { id } => {
                self.client
                    .request(Method::GET, &format!("api/opportunity/{id}"), RequestBody::None)
                    .await
            }
            DealRequest::Delete { id } => {
                self.client
                    .request(
                        Method::DELETE,
                        &format!("api/opportunity/{id}"),
                        RequestBody::None,
                    )
                    .await
            }
            DealRequest::GetAll { scope } => {
                let endpoint = match scope {
                    DealListScope::All => "api/opportunity".to_string(),
                    DealListScope::Page { limit } => {
                        format!("api/opportunity?page_size={limit}")
                    }
                };
                self.client
                    .request(Method::GET, &endpoint, RequestBody::None)
                    .await
            }
            DealRequest::Create { body } => {
                let body = build_deal_create(body)?;
                self.client
                    .request(Method::POST, "api/opportunity", RequestBody::Json(&body))
                    .await
            }
            DealRequest::Update { id, body } => {
                let body = build_deal_update(id, body)?;
                self.client
                    .request(
                        Method::PUT,
                        "api/opportunity/partial-update",
                        RequestBody::Json(&body),
                    )
                    .await
            }
        }
    }
}
