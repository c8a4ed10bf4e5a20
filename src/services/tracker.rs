//! Lead tracking endpoint client

use super::error::ServiceError;
use super::traits::LeadTracker;
use crate::submission::SubmissionRecord;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Posts submission records as JSON.
///
/// The endpoint's answer is not inspected: any response counts as delivered,
/// only transport failures are errors.
pub struct HttpTracker {
    client: Client,
    endpoint: String,
}

impl HttpTracker {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LeadTracker for HttpTracker {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), ServiceError> {
        let response = self.client.post(&self.endpoint).json(record).send().await?;
        debug!(status = %response.status(), "tracking endpoint answered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::build_client;
    use crate::services::http::test_support::{closed_address, serve_once};

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            privacy_agreement: "Yes".to_string(),
            ..SubmissionRecord::default()
        }
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let (base, request) = serve_once("200 OK", "").await;
        let tracker = HttpTracker::new(build_client(None), format!("{base}/exec"));

        tracker.submit(&record()).await.unwrap();

        let raw = request.await.unwrap();
        assert!(raw.starts_with("POST /exec"));
        assert!(raw.to_lowercase().contains("content-type: application/json"));
        assert!(raw.contains(r#""name":"Ana""#));
        assert!(raw.contains(r#""privacyAgreement":"Yes""#));
    }

    #[tokio::test]
    async fn test_error_status_still_counts_as_delivered() {
        let (base, _request) = serve_once("500 Internal Server Error", "").await;
        let tracker = HttpTracker::new(build_client(None), base);

        assert!(tracker.submit(&record()).await.is_ok());
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        let tracker = HttpTracker::new(build_client(None), closed_address().await);

        assert!(matches!(
            tracker.submit(&record()).await,
            Err(ServiceError::Network(_))
        ));
    }
}
