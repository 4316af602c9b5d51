use crate::cache::{CachedResponse, Endpoint, RequestKey, ResponseCache};
use crate::transport::PredictTransport;
use crate::Result;
use platesight_types::{
    BusinessProfile, FeedbackRequest, FeedbackResponse, UnifiedRequest, UnifiedResponse,
};
use tracing::debug;

/// Prediction client with dedup-by-key caching.
///
/// One fetch per (endpoint, snapshot): a repeated fetch for an unchanged
/// profile returns the cached resolution without touching the network.
/// Edits produce a new key, so stale entries are never served for a changed
/// form.
pub struct PredictionService<T: PredictTransport> {
    transport: T,
    cache: ResponseCache,
}

impl<T: PredictTransport> PredictionService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: ResponseCache::new(),
        }
    }

    pub async fn fetch_feedback(&mut self, profile: &BusinessProfile) -> Result<FeedbackResponse> {
        let key = RequestKey::new(Endpoint::Feedback, profile)?;
        if let Some(CachedResponse::Feedback(hit)) = self.cache.get(&key) {
            debug!("feedback cache hit; skipping network round trip");
            return Ok(hit.clone());
        }

        let request = FeedbackRequest::from(profile);
        let response = self.transport.feedback(&request).await?;
        self.cache
            .insert(key, CachedResponse::Feedback(response.clone()));
        Ok(response)
    }

    pub async fn fetch_unified(&mut self, profile: &BusinessProfile) -> Result<UnifiedResponse> {
        let key = RequestKey::new(Endpoint::Unified, profile)?;
        if let Some(CachedResponse::Unified(hit)) = self.cache.get(&key) {
            debug!("unified cache hit; skipping network round trip");
            return Ok(hit.clone());
        }

        let request = UnifiedRequest::from(profile);
        let response = self.transport.unified(&request).await?;
        self.cache
            .insert(key, CachedResponse::Unified(response.clone()));
        Ok(response)
    }

    /// Drop any resolved entry for this profile, forcing the next fetch to
    /// hit the network.
    pub fn invalidate(&mut self, profile: &BusinessProfile) -> Result<()> {
        for endpoint in [Endpoint::Feedback, Endpoint::Unified] {
            let key = RequestKey::new(endpoint, profile)?;
            self.cache.invalidate(&key);
        }
        Ok(())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    pub fn transport_ref(&self) -> &T {
        &self.transport
    }
}
