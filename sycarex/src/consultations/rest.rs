use std::collections::HashMap;

use async_trait::async_trait;

use super::request::ConsultationRequest;
use super::store::ConsultationStore;
use crate::base::config::StoreConfig;
use crate::http::http_post_request;
use crate::SycarexError;

/// Table store reached over the managed service's REST endpoint. One
/// insert per call, no retries.
pub struct RestTableStore {
    config: StoreConfig,
    table: String,
}

impl RestTableStore {
    pub fn new(config: StoreConfig, table: &str) -> Self {
        Self {
            config,
            table: table.to_string(),
        }
    }

    fn request_headers(&self) -> HashMap<String, String> {
        HashMap::from([
            ("apikey".to_string(), self.config.anon_key().to_string()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.anon_key()),
            ),
            (
                "Content-Type".to_string(),
                "application/json".to_string(),
            ),
            // the client never reads the row back
            ("Prefer".to_string(), "return=minimal".to_string()),
        ])
    }
}

#[async_trait(?Send)]
impl ConsultationStore for RestTableStore {
    async fn insert(&self, request: &ConsultationRequest) -> Result<(), SycarexError> {
        let url = self.config.rest_endpoint(&self.table);
        let body = serde_json::to_string(&[request])
            .map_err(|e| SycarexError::Request(e.to_string()))?;
        let (message, status) =
            http_post_request(&url, &self.request_headers(), &body).await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(SycarexError::Rejected { status, message })
        }
    }
}
