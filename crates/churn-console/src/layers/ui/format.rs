use ratatui::text::{Line, Span, Text};

use super::app::BackendStatus;
use super::text::{pad_right, tail_fit, truncate_with_ellipsis};
use super::theme::{Theme, ValueStyle};
use crate::layers::form::{FormField, ResultView};

const RESULT_LABEL_WIDTH: usize = 20;

pub(super) fn field_lines(
    theme: &Theme,
    field: FormField,
    raw: &str,
    focused: bool,
    width: u16,
) -> Vec<Line<'static>> {
    let marker = if focused { "> " } else { "  " };
    let room = (width as usize).saturating_sub(marker.len() + 1);
    let value = if raw.is_empty() && !focused {
        Span::styled(field.placeholder().to_string(), theme.value_style(ValueStyle::Dim))
    } else {
        let caret = if focused { "_" } else { "" };
        let visible = tail_fit(raw, room);
        Span::styled(format!("{visible}{caret}"), theme.field_style(focused))
    };
    vec![
        Line::from(Span::styled(field.label().to_string(), theme.key_style())),
        Line::from(vec![
            Span::styled(marker.to_string(), theme.value_style(ValueStyle::Important)),
            value,
        ]),
    ]
}

pub(super) fn result_text(theme: &Theme, view: &ResultView) -> Text<'static> {
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(pad_right(label, RESULT_LABEL_WIDTH), theme.key_style()),
            Span::styled(value, theme.value_style(ValueStyle::Important)),
        ])
    };
    Text::from(vec![
        row("Churn Prediction", view.prediction.to_string()),
        row("Churn Probability", view.probability.clone()),
        Line::default(),
        Line::styled(
            format!("Risk Level: {}", view.risk_label),
            theme.risk_style(view.risk),
        )
        .centered(),
    ])
}

pub(super) fn status_line(
    theme: &Theme,
    status: &BackendStatus,
    endpoint: &str,
    width: u16,
) -> Line<'static> {
    let (text, online) = match status {
        BackendStatus::Checking => ("checking...".to_string(), None),
        BackendStatus::Online(message) => (message.clone(), Some(true)),
        BackendStatus::Offline => ("unreachable".to_string(), Some(false)),
    };
    let prefix = "Backend: ";
    let status_width = text.chars().count() + 2;
    let room = (width as usize).saturating_sub(prefix.len() + status_width);
    Line::from(vec![
        Span::styled(prefix, theme.key_style()),
        Span::styled(
            truncate_with_ellipsis(endpoint, room),
            theme.value_style(ValueStyle::Normal),
        ),
        Span::raw("  "),
        Span::styled(text, theme.status_style(online)),
    ])
}
