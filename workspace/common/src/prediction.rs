use tracing::debug;

use crate::error::{PredictionError, ValidationError};
use crate::models::PredictionResult;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionState {
    #[default]
    Idle,
    /// A request for `student_id` is in flight.
    Submitting { student_id: String },
    Success(PredictionResult),
    Failed(String),
}

/// State of the "predict a student's performance" form.
///
/// At most one request is in flight: [`PredictionPanel::begin_submit`] hands
/// out the identifier to send and refuses until [`PredictionPanel::finish`]
/// has been called.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionPanel {
    input: String,
    state: PredictionState,
    validation_error: Option<ValidationError>,
}

impl PredictionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn state(&self) -> &PredictionState {
        &self.state
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, PredictionState::Submitting { .. })
    }

    /// Identifier of the request in flight. The caller issues the request
    /// when this becomes `Some`, so two quick submits yield one request.
    pub fn pending_student_id(&self) -> Option<&str> {
        match &self.state {
            PredictionState::Submitting { student_id } => Some(student_id.as_str()),
            _ => None,
        }
    }

    /// Message shown under the form, if any.
    pub fn error_message(&self) -> Option<String> {
        match (&self.validation_error, &self.state) {
            (Some(err), _) => Some(err.to_string()),
            (None, PredictionState::Failed(message)) => Some(message.clone()),
            _ => None,
        }
    }

    /// Enter `Submitting` and return the trimmed identifier to send.
    ///
    /// A blank input keeps the panel idle and records a validation error.
    pub fn begin_submit(&mut self) -> Result<String, ValidationError> {
        if self.is_submitting() {
            return Err(ValidationError::RequestInFlight);
        }

        let student_id = self.input.trim();
        if student_id.is_empty() {
            debug!("Prediction refused: empty student id");
            self.state = PredictionState::Idle;
            self.validation_error = Some(ValidationError::EmptyStudentId);
            return Err(ValidationError::EmptyStudentId);
        }

        let student_id = student_id.to_string();
        self.validation_error = None;
        self.state = PredictionState::Submitting {
            student_id: student_id.clone(),
        };
        Ok(student_id)
    }

    pub fn finish(&mut self, outcome: Result<PredictionResult, PredictionError>) {
        self.state = match outcome {
            Ok(result) => PredictionState::Success(result),
            Err(PredictionError::Validation(err)) => {
                self.validation_error = Some(err);
                PredictionState::Idle
            }
            Err(err) => PredictionState::Failed(err.to_string()),
        };
    }

    /// Forget the last outcome, e.g. when the panel unmounts.
    pub fn reset(&mut self) {
        self.state = PredictionState::Idle;
        self.validation_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(grade: f64) -> PredictionResult {
        PredictionResult {
            student_id: "STU000001".to_string(),
            predicted_grade: grade,
        }
    }

    #[test]
    fn blank_input_stays_idle_with_validation_error() {
        for input in ["", "   "] {
            let mut panel = PredictionPanel::new();
            panel.set_input(input);
            assert_eq!(panel.begin_submit(), Err(ValidationError::EmptyStudentId));
            assert_eq!(panel.state(), &PredictionState::Idle);
            assert_eq!(panel.error_message().as_deref(), Some("Please enter a student ID"));
        }
    }

    #[test]
    fn successful_round_trip() {
        let mut panel = PredictionPanel::new();
        panel.set_input(" STU000001 ");
        assert_eq!(panel.begin_submit().as_deref(), Ok("STU000001"));
        assert!(panel.is_submitting());

        panel.finish(Ok(result(81.5)));
        assert_eq!(panel.state(), &PredictionState::Success(result(81.5)));
        assert_eq!(panel.error_message(), None);
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut panel = PredictionPanel::new();
        panel.set_input("STU1");
        panel.begin_submit().unwrap();
        assert_eq!(panel.begin_submit(), Err(ValidationError::RequestInFlight));
        assert!(panel.is_submitting());
    }

    #[test]
    fn repeated_submit_keeps_the_first_pending_request() {
        let mut panel = PredictionPanel::new();
        panel.set_input(" STU1 ");
        panel.begin_submit().unwrap();

        // Typing during the request does not change what is being sent.
        panel.set_input("STU2");
        panel.begin_submit().unwrap_err();
        assert_eq!(panel.pending_student_id(), Some("STU1"));

        panel.finish(Ok(result(70.0)));
        assert_eq!(panel.pending_student_id(), None);
    }

    #[test]
    fn resubmitting_clears_previous_outcome() {
        let mut panel = PredictionPanel::new();
        panel.set_input("STU1");
        panel.begin_submit().unwrap();
        panel.finish(Err(PredictionError::Backend("Student not found".to_string())));
        assert_eq!(panel.error_message().as_deref(), Some("Student not found"));

        panel.begin_submit().unwrap();
        assert_eq!(panel.pending_student_id(), Some("STU1"));
        assert_eq!(panel.error_message(), None);
    }

    #[test]
    fn validation_error_clears_on_next_valid_submit() {
        let mut panel = PredictionPanel::new();
        panel.begin_submit().unwrap_err();
        panel.set_input("STU1");
        panel.begin_submit().unwrap();
        assert_eq!(panel.validation_error(), None);
    }
}
