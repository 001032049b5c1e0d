//! Form state for one churn prediction: three raw text fields, the last
//! result, and the busy flag guarding the single in-flight request.

mod coerce;
mod view;

pub(crate) use coerce::coerce_number;
pub(crate) use view::{ResultView, CONNECTION_ERROR_NOTICE};

use churn_protocol::{PredictionRequest, PredictionResult};
use std::fmt;
use std::str::FromStr;

use crate::layers::service::backend::{PredictError, PredictionBackend};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum FormField {
    Recency,
    Frequency,
    Monetary,
}

impl FormField {
    pub(crate) const ALL: [FormField; 3] =
        [FormField::Recency, FormField::Frequency, FormField::Monetary];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            FormField::Recency => "Recency (days since last transaction)",
            FormField::Frequency => "Frequency (number of purchases)",
            FormField::Monetary => "Monetary Value (total spend)",
        }
    }

    pub(crate) fn placeholder(&self) -> &'static str {
        match self {
            FormField::Recency => "e.g. 90",
            FormField::Frequency => "e.g. 1",
            FormField::Monetary => "e.g. 1200",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnknownField(pub(crate) String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field {:?}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "recency" | "recency_days" | "recencyDays" => Ok(FormField::Recency),
            "frequency" => Ok(FormField::Frequency),
            "monetary" | "monetary_value" | "monetaryValue" => Ok(FormField::Monetary),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Raw field text, kept across submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FormInput {
    pub(crate) recency_days: String,
    pub(crate) frequency: String,
    pub(crate) monetary_value: String,
}

impl FormInput {
    pub(crate) fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Recency => &self.recency_days,
            FormField::Frequency => &self.frequency,
            FormField::Monetary => &self.monetary_value,
        }
    }

    pub(crate) fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Recency => &mut self.recency_days,
            FormField::Frequency => &mut self.frequency,
            FormField::Monetary => &mut self.monetary_value,
        }
    }

    pub(crate) fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            recency_days: coerce_number(&self.recency_days),
            frequency: coerce_number(&self.frequency),
            monetary: coerce_number(&self.monetary_value),
        }
    }
}

/// A dispatched request. `seq` must be handed back to [`PredictionForm::settle`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Submission {
    pub(crate) seq: u64,
    pub(crate) request: PredictionRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Settlement {
    Applied,
    Failed,
    /// Not the outstanding request; discarded.
    Stale,
    /// Submit rejected because a request is already in flight.
    Busy,
}

#[derive(Debug, Default)]
pub(crate) struct PredictionForm {
    input: FormInput,
    result: Option<PredictionResult>,
    busy: bool,
    generation: u64,
    in_flight: Option<u64>,
}

impl PredictionForm {
    pub(crate) fn input(&self) -> &FormInput {
        &self.input
    }

    pub(crate) fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy
    }

    pub(crate) fn button_label(&self) -> &'static str {
        if self.busy {
            "Predicting..."
        } else {
            "Predict Churn"
        }
    }

    pub(crate) fn set_field(&mut self, field: FormField, raw: impl Into<String>) {
        *self.input.get_mut(field) = raw.into();
    }

    pub(crate) fn set_field_by_name(
        &mut self,
        name: &str,
        raw: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse::<FormField>()?;
        self.set_field(field, raw);
        Ok(())
    }

    pub(crate) fn push_char(&mut self, field: FormField, ch: char) {
        self.input.get_mut(field).push(ch);
    }

    pub(crate) fn pop_char(&mut self, field: FormField) {
        self.input.get_mut(field).pop();
    }

    /// Enters the busy state and hands out the request to send.
    ///
    /// Returns `None` while a request is outstanding.
    pub(crate) fn begin_submit(&mut self) -> Option<Submission> {
        if self.busy {
            tracing::debug!(in_flight = ?self.in_flight, "submit ignored while busy");
            return None;
        }
        self.busy = true;
        self.result = None;
        self.generation += 1;
        self.in_flight = Some(self.generation);
        let request = self.input.to_request();
        tracing::info!(
            seq = self.generation,
            finite = request.is_finite(),
            "prediction dispatched"
        );
        Some(Submission {
            seq: self.generation,
            request,
        })
    }

    /// Applies the outcome of request `seq`. Only the outstanding request
    /// can change state; busy is cleared on both success and failure.
    pub(crate) fn settle(
        &mut self,
        seq: u64,
        outcome: Result<PredictionResult, PredictError>,
    ) -> Settlement {
        if self.in_flight != Some(seq) {
            tracing::debug!(seq, in_flight = ?self.in_flight, "discarding stale response");
            return Settlement::Stale;
        }
        self.in_flight = None;
        self.busy = false;
        match outcome {
            Ok(result) => {
                tracing::info!(seq, risk = result.risk_level().as_str(), "prediction received");
                self.result = if result.is_null() { None } else { Some(result) };
                Settlement::Applied
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "prediction failed");
                Settlement::Failed
            }
        }
    }

    /// One complete cycle: dispatch, await the backend, settle.
    pub(crate) async fn submit(&mut self, backend: &dyn PredictionBackend) -> Settlement {
        let Some(submission) = self.begin_submit() else {
            return Settlement::Busy;
        };
        let outcome = backend.predict(&submission.request).await;
        self.settle(submission.seq, outcome)
    }
}
