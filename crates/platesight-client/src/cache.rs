use crate::Result;
use platesight_types::{BusinessProfile, FeedbackResponse, UnifiedResponse};
use std::collections::HashMap;

/// The two prediction endpoints this client speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Feedback,
    Unified,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Feedback => "/predict/feedback",
            Endpoint::Unified => "/predict/unified",
        }
    }
}

/// Identity of one request: the endpoint plus the full input snapshot.
///
/// The snapshot is the canonical JSON serialization of the profile, so any
/// field edit produces a different key and naturally invalidates the old
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    endpoint: Endpoint,
    snapshot: String,
}

impl RequestKey {
    pub fn new(endpoint: Endpoint, profile: &BusinessProfile) -> Result<Self> {
        Ok(Self {
            endpoint,
            snapshot: serde_json::to_string(profile)?,
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

/// A resolved response held by the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedResponse {
    Feedback(FeedbackResponse),
    Unified(UnifiedResponse),
}

/// Resolved-response cache, at most one entry per request key.
///
/// Only successful resolutions are stored; a failed fetch leaves no entry so
/// resubmitting the same snapshot tries the network again.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<RequestKey, CachedResponse>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &RequestKey) -> Option<&CachedResponse> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: RequestKey, response: CachedResponse) {
        self.entries.insert(key, response);
    }

    pub fn invalidate(&mut self, key: &RequestKey) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile(name: &str) -> BusinessProfile {
        BusinessProfile {
            restaurant_name: name.to_string(),
            cuisine: "Italian".to_string(),
            location: "X".to_string(),
            city: "Y".to_string(),
            sales_amount: 100.0,
            sales_quantity: 10.0,
            established: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            rating: 4.0,
        }
    }

    #[test]
    fn identical_snapshots_share_a_key() {
        let a = RequestKey::new(Endpoint::Unified, &profile("Test")).unwrap();
        let b = RequestKey::new(Endpoint::Unified, &profile("Test")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn any_field_edit_changes_the_key() {
        let a = RequestKey::new(Endpoint::Unified, &profile("Test")).unwrap();
        let b = RequestKey::new(Endpoint::Unified, &profile("Other")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn endpoints_do_not_collide() {
        let snapshot = profile("Test");
        let feedback = RequestKey::new(Endpoint::Feedback, &snapshot).unwrap();
        let unified = RequestKey::new(Endpoint::Unified, &snapshot).unwrap();
        assert_ne!(feedback, unified);
    }

    #[test]
    fn invalidate_removes_only_the_named_key() {
        let mut cache = ResponseCache::new();
        let a = RequestKey::new(Endpoint::Unified, &profile("A")).unwrap();
        let b = RequestKey::new(Endpoint::Unified, &profile("B")).unwrap();

        cache.insert(a.clone(), CachedResponse::Unified(UnifiedResponse::default()));
        cache.insert(b.clone(), CachedResponse::Unified(UnifiedResponse::default()));
        assert_eq!(cache.len(), 2);

        cache.invalidate(&a);
        assert!(cache.get(&a).is_none());
        assert!(cache.get(&b).is_some());
    }
}
