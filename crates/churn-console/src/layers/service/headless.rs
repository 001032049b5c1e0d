use super::backend::PredictionBackend;
use crate::config::ProbabilityFormat;
use crate::layers::form::{PredictionForm, ResultView, Settlement, CONNECTION_ERROR_NOTICE};

/// Runs a single submission without the TUI and returns the rendered lines.
///
/// `fields` pairs a form field name with its raw text.
pub(crate) async fn predict_once(
    fields: &[(&str, &str)],
    backend: &dyn PredictionBackend,
    format: ProbabilityFormat,
) -> anyhow::Result<Vec<String>> {
    let mut form = PredictionForm::default();
    for (name, raw) in fields {
        form.set_field_by_name(name, *raw)?;
    }
    match form.submit(backend).await {
        Settlement::Applied => Ok(form
            .result()
            .map(|result| ResultView::from_result(result, format).plain_lines())
            .unwrap_or_default()),
        Settlement::Failed => anyhow::bail!(CONNECTION_ERROR_NOTICE),
        Settlement::Stale | Settlement::Busy => anyhow::bail!("submission was not applied"),
    }
}
