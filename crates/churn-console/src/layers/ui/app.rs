use tokio_util::sync::CancellationToken;

use crate::config::ProbabilityFormat;
use crate::layers::form::{
    FormField, PredictionForm, ResultView, Settlement, Submission, CONNECTION_ERROR_NOTICE,
};
use crate::layers::service::UiEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
    Field(FormField),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FormField::Recency)
    }
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Field(FormField::Recency) => Focus::Field(FormField::Frequency),
            Focus::Field(FormField::Frequency) => Focus::Field(FormField::Monetary),
            Focus::Field(FormField::Monetary) => Focus::Submit,
            Focus::Submit => Focus::Field(FormField::Recency),
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Field(FormField::Recency) => Focus::Submit,
            Focus::Field(FormField::Frequency) => Focus::Field(FormField::Recency),
            Focus::Field(FormField::Monetary) => Focus::Field(FormField::Frequency),
            Focus::Submit => Focus::Field(FormField::Monetary),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum BackendStatus {
    #[default]
    Checking,
    Online(String),
    Offline,
}

pub(crate) struct AppState {
    pub(crate) form: PredictionForm,
    pub(crate) focus: Focus,
    pub(crate) notice: Option<&'static str>,
    pub(crate) backend_status: BackendStatus,
    pub(crate) endpoint: String,
    pub(crate) probability_format: ProbabilityFormat,
    pub(crate) confirm_quit: bool,
    shutdown: CancellationToken,
}

impl AppState {
    pub(crate) fn new(endpoint: impl Into<String>, probability_format: ProbabilityFormat) -> Self {
        Self {
            form: PredictionForm::default(),
            focus: Focus::default(),
            notice: None,
            backend_status: BackendStatus::default(),
            endpoint: endpoint.into(),
            probability_format,
            confirm_quit: false,
            shutdown: CancellationToken::new(),
        }
    }

    /// Token tying background work to this app's lifetime.
    pub(crate) fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    pub(crate) fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Settled { seq, outcome } => {
                if self.form.settle(seq, outcome) == Settlement::Failed {
                    self.notice = Some(CONNECTION_ERROR_NOTICE);
                }
            }
            UiEvent::Health(Ok(status)) => {
                self.backend_status = BackendStatus::Online(status.message);
            }
            UiEvent::Health(Err(_)) => self.backend_status = BackendStatus::Offline,
        }
    }

    pub(crate) fn result_view(&self) -> Option<ResultView> {
        self.form
            .result()
            .map(|result| ResultView::from_result(result, self.probability_format))
    }

    /// The trigger is disabled while busy or while a notice blocks the form.
    pub(crate) fn submit_enabled(&self) -> bool {
        !self.form.is_busy() && self.notice.is_none()
    }

    pub(crate) fn request_submit(&mut self) -> Option<Submission> {
        if !self.submit_enabled() {
            return None;
        }
        self.form.begin_submit()
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub(crate) fn type_char(&mut self, ch: char) {
        if let Focus::Field(field) = self.focus {
            self.form.push_char(field, ch);
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let Focus::Field(field) = self.focus {
            self.form.pop_char(field);
        }
    }

    pub(crate) fn clear_field(&mut self) {
        if let Focus::Field(field) = self.focus {
            self.form.set_field(field, String::new());
        }
    }

    pub(crate) fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
