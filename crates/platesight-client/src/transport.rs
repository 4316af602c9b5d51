use crate::cache::Endpoint;
use crate::Result;
use platesight_types::{FeedbackRequest, FeedbackResponse, UnifiedRequest, UnifiedResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Seam between the prediction service and everything above it.
///
/// [`PredictionService`](crate::PredictionService) is generic over this so
/// tests can count or script exchanges without a live endpoint.
pub trait PredictTransport {
    fn feedback(
        &self,
        request: &FeedbackRequest,
    ) -> impl std::future::Future<Output = Result<FeedbackResponse>> + Send;

    fn unified(
        &self,
        request: &UnifiedRequest,
    ) -> impl std::future::Future<Output = Result<UnifiedResponse>> + Send;
}

/// Production transport: one JSON POST per prediction, no retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    api_base: String,
}

impl HttpTransport {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn post_json<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.api_base, endpoint.path());
        debug!(url = %url, "dispatching prediction request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<R>().await?)
    }
}

impl PredictTransport for HttpTransport {
    async fn feedback(&self, request: &FeedbackRequest) -> Result<FeedbackResponse> {
        self.post_json(Endpoint::Feedback, request).await
    }

    async fn unified(&self, request: &UnifiedRequest) -> Result<UnifiedResponse> {
        self.post_json(Endpoint::Unified, request).await
    }
}
