use super::fields::FieldId;

/// Status line shown before the first submission.
pub const IDLE_PROMPT: &str = "Enter parameters and click Predict to see yield.";

/// Shown while a request is in flight, on the button and in the result box.
pub const PREDICTING_LABEL: &str = "Predicting...";

/// Raw text for every field, keyed by [`FieldId`]. All thirteen entries exist
/// from construction on; an untouched field is the empty string, never a
/// missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    values: [String; FieldId::COUNT],
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: FieldId) -> &str {
        &self.values[id.index()]
    }

    /// Overwrites the stored text for one field. Text is stored as typed;
    /// numeric interpretation happens at submission time.
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.values[id.index()] = value.into();
    }

    /// Mutable handle for a text edit widget to write through directly.
    pub fn value_mut(&mut self, id: FieldId) -> &mut String {
        &mut self.values[id.index()]
    }
}

/// Lifecycle of the most recent submission. Exactly one variant holds at any
/// time, and the payload (prediction or error message) only exists in the
/// variant it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Done(f64),
    Error(String),
}

/// The whole page state: what the user typed plus where the current
/// submission stands.
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: FieldSet,
    status: RequestStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldSet::new(),
            status: RequestStatus::Idle,
        }
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading)
    }

    /// Enters `Loading`, wiping whatever the previous submission left behind.
    /// Field text is untouched.
    pub fn begin_submission(&mut self) {
        self.status = RequestStatus::Loading;
    }

    pub fn complete_with_result(&mut self, prediction: f64) {
        self.status = RequestStatus::Done(prediction);
    }

    pub fn complete_with_error(&mut self, message: String) {
        self.status = RequestStatus::Error(message);
    }

    pub fn prediction(&self) -> Option<f64> {
        match self.status {
            RequestStatus::Done(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The one line the result box renders. Predictions always get two
    /// decimals, so whole numbers read as percentages ("7.00%"), not counts.
    pub fn status_line(&self) -> String {
        match &self.status {
            RequestStatus::Idle => IDLE_PROMPT.to_string(),
            RequestStatus::Loading => PREDICTING_LABEL.to_string(),
            RequestStatus::Done(prediction) => format!("Predicted Yield: {:.2}%", prediction),
            RequestStatus::Error(message) => format!("Error: {}", message),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::PrawncastError;

    #[test]
    fn field_set_starts_complete_and_empty() {
        let fields = FieldSet::new();
        for id in FieldId::ALL {
            assert_eq!(fields.get(id), "");
        }
    }

    #[test]
    fn set_replaces_only_the_target_field() {
        let mut fields = FieldSet::new();
        fields.set(FieldId::Ph, "7.6");
        fields.set(FieldId::Ph, "8.1"); // last write wins
        fields.set(FieldId::Salinity, "18");

        assert_eq!(fields.get(FieldId::Ph), "8.1");
        assert_eq!(fields.get(FieldId::Salinity), "18");
        assert_eq!(fields.get(FieldId::Temperature), "");
    }

    #[test]
    fn setting_same_value_is_idempotent() {
        let mut fields = FieldSet::new();
        fields.set(FieldId::Turbidity, "40");
        let before = fields.clone();
        fields.set(FieldId::Turbidity, "40");
        assert_eq!(fields, before);
    }

    #[test]
    fn begin_submission_clears_previous_outcome() {
        let mut form = FormState::new();

        form.complete_with_result(50.0);
        assert_eq!(form.prediction(), Some(50.0));
        form.begin_submission();
        assert!(form.is_loading());
        assert_eq!(form.prediction(), None);

        form.complete_with_error("Network response was not OK".to_string());
        assert!(form.error_message().is_some());
        form.begin_submission();
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn begin_submission_keeps_field_text() {
        let mut form = FormState::new();
        form.fields.set(FieldId::Ammonia, "0.15");
        form.begin_submission();
        assert_eq!(form.fields.get(FieldId::Ammonia), "0.15");
    }

    #[test]
    fn status_line_for_each_state() {
        let mut form = FormState::new();
        assert_eq!(form.status_line(), "Enter parameters and click Predict to see yield.");

        form.begin_submission();
        assert_eq!(form.status_line(), "Predicting...");

        form.complete_with_result(82.5);
        assert_eq!(form.status_line(), "Predicted Yield: 82.50%");

        form.complete_with_error("timeout".to_string());
        assert_eq!(form.status_line(), "Error: timeout");
    }

    #[test]
    fn predictions_render_with_two_decimals() {
        let mut form = FormState::new();

        form.complete_with_result(7.0);
        assert_eq!(form.status_line(), "Predicted Yield: 7.00%");

        form.complete_with_result(64.999);
        assert_eq!(form.status_line(), "Predicted Yield: 65.00%");

        form.complete_with_result(0.125);
        assert_eq!(form.status_line(), "Predicted Yield: 0.12%");
    }

    #[test]
    fn error_line_carries_service_messages_verbatim() {
        let mut form = FormState::new();

        let error = PrawncastError::Transport("timeout".to_string());
        form.complete_with_error(error.user_message());
        assert_eq!(form.status_line(), "Error: timeout");

        let error = PrawncastError::Transport(String::new());
        form.complete_with_error(error.user_message());
        assert_eq!(form.status_line(), "Error: Something went wrong");

        let error = PrawncastError::BadStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        form.complete_with_error(error.user_message());
        assert_eq!(form.status_line(), "Error: Network response was not OK");
    }
}
