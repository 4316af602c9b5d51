use platesight_types::UnifiedResponse;

/// Observable outcome of the unified fetch, as the result screen sees it.
///
/// `Unavailable` is deliberately distinct from `Loading`: one shows a
/// blocking error panel, the other a progress indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(UnifiedResponse),
    Unavailable(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Last-request-wins discipline for superseded fetches.
///
/// Every dispatched request takes a generation from `begin`; when a
/// resolution comes back, `accepts` says whether it still belongs to the
/// newest request. There is no cancellation: a stale response is simply
/// dropped on receipt.
#[derive(Debug, Default)]
pub struct FetchGate {
    latest: u64,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new request; older generations become stale immediately.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_generation_is_accepted() {
        let mut gate = FetchGate::new();

        let first = gate.begin();
        assert!(gate.accepts(first));

        let second = gate.begin();
        assert!(!gate.accepts(first));
        assert!(gate.accepts(second));
    }

    #[test]
    fn generations_are_monotonic() {
        let mut gate = FetchGate::new();
        let a = gate.begin();
        let b = gate.begin();
        let c = gate.begin();
        assert!(a < b && b < c);
    }
}
