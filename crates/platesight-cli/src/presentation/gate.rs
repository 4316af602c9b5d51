/// The two dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Form,
    Result,
}

/// Two-state navigation machine between the form and the result view.
///
/// The Result tab stays locked until the first validation-passing
/// submission; after that the user can move between tabs freely. There is
/// no terminal state.
#[derive(Debug)]
pub struct SubmissionGate {
    active: ActiveTab,
    unlocked: bool,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self {
            active: ActiveTab::Form,
            unlocked: false,
        }
    }

    pub fn active(&self) -> ActiveTab {
        self.active
    }

    pub fn result_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Record a successful submission: unlock the Result tab and flip to it.
    /// Callers must only invoke this after validation passed.
    pub fn submit(&mut self) {
        self.unlocked = true;
        self.active = ActiveTab::Result;
    }

    /// Direct tab selection. Returns whether the selection took effect;
    /// the Result tab refuses selection while locked.
    pub fn select(&mut self, tab: ActiveTab) -> bool {
        match tab {
            ActiveTab::Form => {
                self.active = ActiveTab::Form;
                true
            }
            ActiveTab::Result if self.unlocked => {
                self.active = ActiveTab::Result;
                true
            }
            ActiveTab::Result => false,
        }
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_form_tab_with_result_locked() {
        let gate = SubmissionGate::new();
        assert_eq!(gate.active(), ActiveTab::Form);
        assert!(!gate.result_unlocked());
    }

    #[test]
    fn result_tab_is_unselectable_before_the_first_submission() {
        let mut gate = SubmissionGate::new();
        assert!(!gate.select(ActiveTab::Result));
        assert_eq!(gate.active(), ActiveTab::Form);
    }

    #[test]
    fn submission_unlocks_and_flips_to_result() {
        let mut gate = SubmissionGate::new();
        gate.submit();
        assert_eq!(gate.active(), ActiveTab::Result);
        assert!(gate.result_unlocked());
    }

    #[test]
    fn tabs_switch_freely_after_the_first_submission() {
        let mut gate = SubmissionGate::new();
        gate.submit();

        assert!(gate.select(ActiveTab::Form));
        assert_eq!(gate.active(), ActiveTab::Form);

        assert!(gate.select(ActiveTab::Result));
        assert_eq!(gate.active(), ActiveTab::Result);
    }
}
