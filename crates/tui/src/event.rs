//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. The mapping depends on the current input
//! mode: the board view, the new-task form, the delete confirmation
//! prompt, and the help overlay each interpret keys differently.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use taskboard_protocol::{Filter, Message};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// The input mode the application is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal task list navigation.
    #[default]
    Board,
    /// The new-task form is open and captures text input.
    Form,
    /// A deletion is pending interactive confirmation.
    ConfirmDelete,
    /// The help overlay is visible.
    Help,
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message for the given
/// input mode.
///
/// Returns `Some(Message)` if the event maps to an action, or `None` if
/// the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key, mode),
        _ => None,
    }
}

/// Converts a key event to an application message for the given mode.
///
/// `Ctrl+C` quits in every mode.
///
/// # Key Bindings (Board Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `1`–`4` | Show all / completed / incomplete / scheduled view |
/// | `Up` / `Down` | Navigate the task list |
/// | `Enter` or `Space` | Toggle completion of the selected task |
/// | `d` | Delete the selected task (asks for confirmation) |
/// | `a` | Open the new-task form |
/// | `r` | Refresh the active view |
/// | `?` | Toggle help |
/// | `Esc` | Clear selection |
#[must_use]
pub fn key_to_message(key: KeyEvent, mode: InputMode) -> Option<Message> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match mode {
        InputMode::Board => key_to_board_message(key),
        InputMode::Form => key_to_form_message(key),
        InputMode::ConfirmDelete => key_to_confirm_message(key),
        InputMode::Help => Some(Message::ToggleHelp),
    }
}

/// Key mapping for the board view.
fn key_to_board_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Filter views
        KeyCode::Char('1') => show(Filter::All),
        KeyCode::Char('2') => show(Filter::Completed),
        KeyCode::Char('3') => show(Filter::Incomplete),
        KeyCode::Char('4') => show(Filter::Scheduled),

        // Navigation
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Task actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ToggleComplete),
        KeyCode::Char('d') => Some(Message::RequestDelete),
        KeyCode::Char('a') => Some(Message::OpenForm),

        // Other actions
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Key mapping while the new-task form is open: text input goes to the
/// focused field, `Tab` cycles fields, `Enter` submits, `Esc` discards.
fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::FormNextField),
        KeyCode::BackTab => Some(Message::FormPrevField),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}

/// Key mapping while a deletion awaits confirmation: only `y` confirms,
/// any other key declines without feedback.
fn key_to_confirm_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Message::ConfirmDelete),
        _ => Some(Message::CancelDelete),
    }
}

const fn show(filter: Filter) -> Option<Message> {
    Some(Message::ShowFilter { filter })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let ctrl_c = make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [
            InputMode::Board,
            InputMode::Form,
            InputMode::ConfirmDelete,
            InputMode::Help,
        ] {
            assert_eq!(key_to_message(ctrl_c, mode), Some(Message::Quit));
        }
    }

    #[test]
    fn number_keys_select_filters() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('1')), InputMode::Board),
            Some(Message::ShowFilter { filter: Filter::All })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('2')), InputMode::Board),
            Some(Message::ShowFilter {
                filter: Filter::Completed
            })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('3')), InputMode::Board),
            Some(Message::ShowFilter {
                filter: Filter::Incomplete
            })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('4')), InputMode::Board),
            Some(Message::ShowFilter {
                filter: Filter::Scheduled
            })
        );
    }

    #[test]
    fn board_task_action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter), InputMode::Board),
            Some(Message::ToggleComplete)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' ')), InputMode::Board),
            Some(Message::ToggleComplete)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('d')), InputMode::Board),
            Some(Message::RequestDelete)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('a')), InputMode::Board),
            Some(Message::OpenForm)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('r')), InputMode::Board),
            Some(Message::Refresh)
        );
    }

    #[test]
    fn unmapped_board_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x')), InputMode::Board), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1)), InputMode::Board), None);
    }

    #[test]
    fn form_mode_captures_text_input() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('d')), InputMode::Form),
            Some(Message::FormInput { ch: 'd' })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Backspace), InputMode::Form),
            Some(Message::FormBackspace)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab), InputMode::Form),
            Some(Message::FormNextField)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter), InputMode::Form),
            Some(Message::FormSubmit)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc), InputMode::Form),
            Some(Message::Escape)
        );
    }

    #[test]
    fn confirm_mode_only_y_confirms() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('y')), InputMode::ConfirmDelete),
            Some(Message::ConfirmDelete)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('Y')), InputMode::ConfirmDelete),
            Some(Message::ConfirmDelete)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('n')), InputMode::ConfirmDelete),
            Some(Message::CancelDelete)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc), InputMode::ConfirmDelete),
            Some(Message::CancelDelete)
        );
    }

    #[test]
    fn help_mode_any_key_dismisses() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('x')), InputMode::Help),
            Some(Message::ToggleHelp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc), InputMode::Help),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        let resize_event = Event::Resize(80, 24);
        assert_eq!(event_to_message(&resize_event, InputMode::Board), None);
    }
}
