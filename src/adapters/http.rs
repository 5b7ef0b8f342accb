use crate::config::DirectoryConfig;
use crate::domain::model::PharmacyRecord;
use crate::domain::ports::PharmacyDirectory;
use crate::utils::error::{FarmaError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// `GET {base_url}/{path}` against the pharmacy directory service.
pub struct HttpDirectory {
    client: Client,
    endpoint: Url,
}

impl HttpDirectory {
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let endpoint = endpoint_url(&config.base_url, &config.path)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PharmacyDirectory for HttpDirectory {
    async fn fetch_all(&self) -> Result<Vec<PharmacyRecord>> {
        tracing::debug!("Making directory request to: {}", self.endpoint);
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Directory response status: {}", status);
        if !status.is_success() {
            return Err(FarmaError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        // Read the body first so transport errors and shape errors stay apart.
        let body = response.text().await?;
        let records: Vec<PharmacyRecord> = serde_json::from_str(&body)?;

        tracing::debug!("Directory returned {} records", records.len());
        Ok(records)
    }
}

/// Joins `path` under `base_url`, keeping any path prefix the base carries.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    let invalid = |reason: String| FarmaError::InvalidConfigValueError {
        field: "directory.base_url".to_string(),
        value: base_url.to_string(),
        reason,
    };

    Url::parse(&base)
        .map_err(|e| invalid(format!("Invalid URL format: {}", e)))?
        .join(path.trim_start_matches('/'))
        .map_err(|e| invalid(format!("Cannot join path {:?}: {}", path, e)))
}
