use crate::app::{Action, AppState};
use crate::domain::{Focus, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Action {
    // A fresh keystroke clears the previous transient status message
    app.status = None;

    match app.focus {
        Focus::Todos | Focus::Notes => handle_list_mode(app, key),
        Focus::Input => handle_input_mode(app, key),
    }
}

/// Handle keys while one of the two list panes has focus
fn handle_list_mode(app: &mut AppState, key: KeyEvent) -> Action {
    match key.code {
        // Quit
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,

        // Switch between the todos and notes panes
        KeyCode::Tab => {
            app.switch_focus();
            Action::None
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_up();
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_down();
            Action::None
        }

        // Toggle completion of the selected todo
        KeyCode::Enter => {
            app.toggle_selected();
            Action::None
        }

        // Delete the selected record
        KeyCode::Char('x') | KeyCode::Delete => {
            app.delete_selected();
            Action::None
        }

        // New todo
        KeyCode::Char('t') => {
            app.start_input(InputMode::NewTodo);
            Action::None
        }

        // New note
        KeyCode::Char('n') => {
            app.start_input(InputMode::NewNote);
            Action::None
        }

        // Edit the selected note in the external editor
        KeyCode::Char('e') => app.edit_selected_note(),

        _ => Action::None,
    }
}

/// Handle keys while the text-input overlay has focus
fn handle_input_mode(app: &mut AppState, key: KeyEvent) -> Action {
    match key.code {
        // Discard the buffer
        KeyCode::Esc => {
            app.cancel_input();
            Action::None
        }

        // Commit the buffer (may hand off to the external editor)
        KeyCode::Enter => app.submit_input(),

        // Line editing on the pending buffer
        KeyCode::Backspace => {
            if let Some(input) = app.input.as_mut() {
                input.backspace();
            }
            Action::None
        }
        KeyCode::Delete => {
            if let Some(input) = app.input.as_mut() {
                input.delete_forward();
            }
            Action::None
        }
        KeyCode::Left => {
            if let Some(input) = app.input.as_mut() {
                input.move_left();
            }
            Action::None
        }
        KeyCode::Right => {
            if let Some(input) = app.input.as_mut() {
                input.move_right();
            }
            Action::None
        }
        KeyCode::Home => {
            if let Some(input) = app.input.as_mut() {
                input.move_home();
            }
            Action::None
        }
        KeyCode::End => {
            if let Some(input) = app.input.as_mut() {
                input.move_end();
            }
            Action::None
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = app.input.as_mut() {
                input.insert_char(c);
            }
            Action::None
        }

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Store;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        let store = Store::open_in_memory().unwrap();
        store
            .create_todo("Test task", Utc::now() + Duration::hours(1))
            .unwrap();
        AppState::new(store).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Action::Quit
        );
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.store
            .create_todo("Task 2", Utc::now() + Duration::hours(2))
            .unwrap();
        app = AppState::new(app.store).unwrap();

        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_handle_tab_switches_focus() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Notes);
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Todos);
    }

    #[test]
    fn test_handle_toggle_with_enter() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.todos[0].is_done);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.todos[0].is_done);
    }

    #[test]
    fn test_handle_delete_todo() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(app.todos.is_empty());
    }

    #[test]
    fn test_handle_add_todo_flow() {
        let mut app = create_test_app();
        let initial_count = app.todos.len();

        handle_key(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.focus, Focus::Input);
        assert!(app.input.is_some());

        type_text(&mut app, "New task");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.todos.len(), initial_count + 1);
        assert_eq!(app.focus, Focus::Todos);
        assert!(app.input.is_none());
    }

    #[test]
    fn test_handle_cancel_input() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('n')));
        type_text(&mut app, "discarded");
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.focus, Focus::Todos);
        assert!(app.input.is_none());
        assert!(app.notes.is_empty());
    }

    #[test]
    fn test_handle_new_note_hands_off_to_editor() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('n')));
        type_text(&mut app, "Ideas");
        let action = handle_key(&mut app, key(KeyCode::Enter));

        assert!(matches!(action, Action::OpenEditor { .. }));
        assert_eq!(app.notes.len(), 1);
        assert_eq!(app.notes[0].body, "");
    }

    #[test]
    fn test_handle_edit_note_only_in_notes_focus() {
        let mut app = create_test_app();
        app.store.create_note("Ideas", "body").unwrap();
        app = AppState::new(app.store).unwrap();

        assert_eq!(handle_key(&mut app, key(KeyCode::Char('e'))), Action::None);

        handle_key(&mut app, key(KeyCode::Tab));
        let action = handle_key(&mut app, key(KeyCode::Char('e')));
        let Action::OpenEditor { seed, .. } = action else {
            panic!("expected OpenEditor, got {:?}", action);
        };
        assert_eq!(seed, "body");
    }

    #[test]
    fn test_handle_input_line_editing() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('t')));
        type_text(&mut app, "milkk");
        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Home));
        type_text(&mut app, "Buy ");
        handle_key(&mut app, key(KeyCode::End));

        assert_eq!(app.input.as_ref().unwrap().text, "Buy milk");
    }

    #[test]
    fn test_handle_control_chars_not_inserted() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('t')));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.input.as_ref().unwrap().text, "");
    }
}
