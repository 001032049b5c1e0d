use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{AppState, Focus};
use crate::layers::form::Submission;

pub(crate) enum KeyOutcome {
    Continue,
    Quit,
    Dispatch(Submission),
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut AppState) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Continue;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    // The notice is modal: nothing else reaches the form until it is dismissed.
    if app.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return KeyOutcome::Continue;
    }

    if app.confirm_quit {
        if key.code == KeyCode::Esc {
            return KeyOutcome::Quit;
        }
        app.confirm_quit = false;
    }

    match key.code {
        KeyCode::Esc => app.confirm_quit = true,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => return submit(app),
        KeyCode::Char(' ') if app.focus == Focus::Submit => return submit(app),
        KeyCode::Char('u') if ctrl => app.clear_field(),
        KeyCode::Char(ch) if !ctrl => app.type_char(ch),
        KeyCode::Backspace => app.backspace(),
        _ => {}
    }
    KeyOutcome::Continue
}

fn submit(app: &mut AppState) -> KeyOutcome {
    match app.request_submit() {
        Some(submission) => KeyOutcome::Dispatch(submission),
        None => KeyOutcome::Continue,
    }
}
