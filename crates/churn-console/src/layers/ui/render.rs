use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use super::app::{AppState, Focus};
use super::format::{field_lines, result_text, status_line};
use super::theme::{Theme, ValueStyle};
use crate::layers::form::FormField;

pub(crate) fn draw_ui(frame: &mut ratatui::Frame, app: &AppState) {
    let theme = Theme::dark();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header_block = theme.block("Customer Churn Prediction");
    let header_inner = header_block.inner(chunks[0]);
    let header = Paragraph::new(vec![
        Line::styled(
            "Enter customer behavior metrics to predict churn risk",
            theme.help_style(),
        ),
        status_line(&theme, &app.backend_status, &app.endpoint, header_inner.width),
    ])
    .block(header_block);
    frame.render_widget(header, chunks[0]);

    let form_block = if matches!(app.focus, Focus::Field(_)) {
        theme.focused_block("Customer Metrics")
    } else {
        theme.block("Customer Metrics")
    };
    let form_inner = form_block.inner(chunks[1]);
    let mut form_lines = Vec::new();
    for (index, field) in FormField::ALL.iter().enumerate() {
        if index > 0 {
            form_lines.push(Line::default());
        }
        form_lines.extend(field_lines(
            &theme,
            *field,
            app.form.input().get(*field),
            app.focus == Focus::Field(*field),
            form_inner.width,
        ));
    }
    frame.render_widget(Paragraph::new(form_lines).block(form_block), chunks[1]);

    let button_focused = app.focus == Focus::Submit;
    let button_block = if button_focused {
        theme.focused_block("")
    } else {
        theme.block("")
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!("  {}  ", app.form.button_label()),
        theme.button_style(app.submit_enabled(), button_focused),
    )))
    .alignment(Alignment::Center)
    .block(button_block);
    frame.render_widget(button, chunks[2]);

    let result_block = theme.block("Prediction Result");
    let result_body = match app.result_view() {
        Some(view) => result_text(&theme, &view),
        None if app.form.is_busy() => {
            Text::styled("waiting for backend...", theme.value_style(ValueStyle::Dim))
        }
        None => Text::styled("no prediction yet", theme.value_style(ValueStyle::Dim)),
    };
    let result = Paragraph::new(result_body)
        .block(result_block)
        .wrap(Wrap { trim: true });
    frame.render_widget(result, chunks[3]);

    let mut footer_spans = vec![Span::styled(
        "Tab/↑/↓=move  Enter=predict  Ctrl+U=clear  Esc=quit  ",
        theme.help_style(),
    )];
    if app.confirm_quit {
        footer_spans.push(Span::styled(
            "press Esc again to quit / any key to cancel  ",
            theme.warn_style(),
        ));
    }
    let footer = Paragraph::new(Line::from(footer_spans)).block(theme.block("Controls"));
    frame.render_widget(footer, chunks[4]);

    if let Some(notice) = app.notice {
        draw_notice(frame, &theme, notice);
    }
}

fn draw_notice(frame: &mut ratatui::Frame, theme: &Theme, notice: &str) {
    let area = centered_rect(frame.area(), 44, 5);
    let body = vec![
        Line::styled(notice.to_string(), theme.error_style()),
        Line::styled("Enter/Esc to dismiss", theme.help_style()),
    ];
    let popup = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(theme.block("Notice"));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
