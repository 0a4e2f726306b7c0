use std::env;

/// Agile CRM account credentials supplied by the host.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub api_key: String,
    pub subdomain: String,
}

impl Credentials {
    pub fn new(
        email: impl Into<String>,
        api_key: impl Into<String>,
        subdomain: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
            subdomain: subdomain.into(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            email: env::var("AGILE_CRM_EMAIL")?,
            api_key: env::var("AGILE_CRM_API_KEY")?,
            subdomain: env::var("AGILE_CRM_SUBDOMAIN")?,
        })
    }

    /// Per-account REST base, all endpoint paths are relative to this.
    pub fn base_url(&self) -> String {
        format!("https://{}.agilecrm.com/dev/", self.subdomain)
    }
}
