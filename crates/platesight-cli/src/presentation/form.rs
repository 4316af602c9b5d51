use platesight_types::{BusinessProfile, Field, FieldError, ProfileDraft};

/// Editable state of the input form: the raw draft, the focused field, and
/// the error marks from the last blocked submission.
#[derive(Debug, Default)]
pub struct FormState {
    draft: ProfileDraft,
    focus: usize,
    errors: Vec<FieldError>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn focused_field(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.draft.field_mut(self.focused_field()).push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.field_mut(self.focused_field()).pop();
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Attempt a submission. On a validation pass the error marks clear and
    /// the snapshot is returned; otherwise each failing field is marked and
    /// nothing leaves the form.
    pub fn submit(&mut self) -> Option<BusinessProfile> {
        match self.draft.validate() {
            Ok(profile) => {
                self.errors.clear();
                Some(profile)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platesight_types::FieldErrorKind;

    fn type_text(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    fn fill_valid(form: &mut FormState) {
        // Fields in Field::ALL order.
        for value in [
            "Test", "Italian", "X", "Y", "100", "10", "2020-01-01", "4",
        ] {
            type_text(form, value);
            form.focus_next();
        }
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = FormState::new();
        type_text(&mut form, "Neon Bistro");
        assert_eq!(form.draft().restaurant_name, "Neon Bistro");

        form.backspace();
        assert_eq!(form.draft().restaurant_name, "Neon Bistr");

        form.focus_next();
        type_text(&mut form, "Fusion");
        assert_eq!(form.draft().cuisine, "Fusion");
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = FormState::new();
        assert_eq!(form.focused_field(), Field::RestaurantName);

        form.focus_prev();
        assert_eq!(form.focused_field(), Field::Rating);

        form.focus_next();
        assert_eq!(form.focused_field(), Field::RestaurantName);
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut form = FormState::new();
        form.insert_char('\n');
        form.insert_char('\t');
        assert_eq!(form.draft().restaurant_name, "");
    }

    #[test]
    fn blocked_submission_marks_every_failing_field() {
        let mut form = FormState::new();
        assert!(form.submit().is_none());

        for field in Field::ALL {
            let error = form.error_for(field).unwrap();
            assert_eq!(error.kind, FieldErrorKind::Missing);
        }
    }

    #[test]
    fn successful_submission_returns_the_snapshot_and_clears_marks() {
        let mut form = FormState::new();
        assert!(form.submit().is_none());
        assert!(!form.errors().is_empty());

        fill_valid(&mut form);
        let profile = form.submit().unwrap();
        assert_eq!(profile.restaurant_name, "Test");
        assert_eq!(profile.rating, 4.0);
        assert!(form.errors().is_empty());
    }
}
