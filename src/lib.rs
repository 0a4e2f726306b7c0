//! Agile CRM integration adapter.
//!
//! Translates create/get/get-all/update/delete operations over contacts,
//! companies and deals into authenticated calls against the Agile CRM REST
//! API, and folds the JSON responses back into one flat record list. The
//! host resolves its per-record parameters into [`CrmRequest`] values and
//! hands a batch to [`AgileCrmService::execute`]; processing is strictly
//! sequential and the first failure aborts the batch.

pub mod api;
pub mod config;
pub mod error;
pub mod payload;
pub mod request;
pub mod service;

pub use api::CrmClient;
pub use config::Credentials;
pub use error::{CrmError, Result};
pub use payload::BodySource;
pub use request::CrmRequest;
pub use service::AgileCrmService;
