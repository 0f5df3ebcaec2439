use async_trait::async_trait;
use common::config::BackendConfig;
use scoring::ListingAnalysis;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use url::Url;

use crate::{
    GenericError,
    error::AnalysisError,
    model::{AnalyzeListingRequest, PredictRequest, PredictResponse},
    service::AnalysisService,
};

const ANALYZE_PATH: &str = "analyze-amazon";
const PREDICT_PATH: &str = "predict";

/// Forwards requests to a remote classifier speaking the same JSON contract.
///
/// Failures are returned as-is; there is no retry.
#[derive(Debug, Clone)]
pub struct RemoteAnalysisService {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteAnalysisService {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, GenericError> {
        let base_url = config.remote_base_url()?;
        tracing::info!(remote_url = %base_url, "Initializing remote analysis service");
        Ok(Self::new(
            base_url,
            Duration::from_millis(config.request_timeout_ms),
        )?)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AnalysisError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let endpoint = self.base_url.join(path)?;
        tracing::debug!(endpoint = %endpoint, "Forwarding to remote analyzer");

        let response = self.client.post(endpoint).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AnalysisError::RemotePayload(e.to_string()))
    }
}

#[async_trait]
impl AnalysisService for RemoteAnalysisService {
    async fn analyze_listing(
        &self,
        request: AnalyzeListingRequest,
    ) -> Result<ListingAnalysis, AnalysisError> {
        if !request.check_product && !request.check_reviews {
            return Err(AnalysisError::NothingSelected);
        }
        self.post_json(ANALYZE_PATH, &request).await
    }

    async fn predict_review(
        &self,
        request: PredictRequest,
    ) -> Result<PredictResponse, AnalysisError> {
        self.post_json(PREDICT_PATH, &request).await
    }
}
