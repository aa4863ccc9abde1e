use crate::domain::{Focus, InputMode, Note, Todo};
use crate::editor::EditorOutcome;
use crate::storage::Store;
use anyhow::Result;
use chrono::{Duration, Utc};
use log::warn;

/// Default due offset applied to newly created todos
const DEFAULT_DUE_OFFSET_HOURS: i64 = 1;

/// Process-level effect requested by a key transition. The event loop owns
/// quitting and the editor suspend/resume boundary; keeping them out of
/// `AppState` lets the state machine run in tests without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Suspend the render loop and run the external editor against this note
    OpenEditor { note_id: i64, seed: String },
}

/// Text-input overlay state: the pending buffer plus its own edit cursor
#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    fn new(mode: InputMode) -> Self {
        Self {
            mode,
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Main application state: the cached snapshot plus ephemeral session state.
///
/// Every mutation goes through the store and is followed by a full snapshot
/// reload, so the rendered lists are always at most one operation away from
/// durable truth. Per-operation store failures surface as a transient status
/// message and leave the prior snapshot unchanged.
pub struct AppState {
    pub store: Store,
    pub todos: Vec<Todo>,
    pub notes: Vec<Note>,
    pub focus: Focus,
    pub cursor: usize,
    pub input: Option<InputState>,
    pub status: Option<String>,
}

impl AppState {
    /// Load the initial snapshot. A failure here is fatal: the session never
    /// starts without a readable store.
    pub fn new(store: Store) -> Result<Self> {
        let todos = store.list_todos()?;
        let notes = store.list_notes()?;
        Ok(Self {
            store,
            todos,
            notes,
            focus: Focus::Todos,
            cursor: 0,
            input: None,
            status: None,
        })
    }

    /// Length of the list the cursor currently moves over
    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Todos => self.todos.len(),
            Focus::Notes => self.notes.len(),
            Focus::Input => 0,
        }
    }

    /// Reload the full snapshot after a mutation. On failure the previous
    /// snapshot stays in place and the error becomes a status message.
    fn reload(&mut self) {
        match (self.store.list_todos(), self.store.list_notes()) {
            (Ok(todos), Ok(notes)) => {
                self.todos = todos;
                self.notes = notes;
            }
            (Err(err), _) | (_, Err(err)) => self.report_error("reload failed", &err),
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.focused_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn report_error(&mut self, what: &str, err: &dyn std::fmt::Display) {
        warn!("{}: {}", what, err);
        self.status = Some(format!("{}: {}", what, err));
    }

    // --- Navigation ---

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.focused_len() {
            self.cursor += 1;
        }
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.toggled();
        self.cursor = 0;
    }

    // --- List mutations ---

    /// Toggle the selected todo's completion flag. The cursor index is kept
    /// as-is even though the reload may reorder the list.
    pub fn toggle_selected(&mut self) {
        if self.focus != Focus::Todos {
            return;
        }
        let Some(todo) = self.todos.get(self.cursor) else {
            return;
        };
        if let Err(err) = self.store.toggle_todo(todo.id, todo.is_done) {
            self.report_error("toggle failed", &err);
            return;
        }
        self.reload();
    }

    /// Delete the selected record in the focused list. The cursor steps back
    /// by one so the selection stays stable when the tail shrinks.
    pub fn delete_selected(&mut self) {
        let result = match self.focus {
            Focus::Todos => match self.todos.get(self.cursor) {
                Some(todo) => self.store.delete_todo(todo.id),
                None => return,
            },
            Focus::Notes => match self.notes.get(self.cursor) {
                Some(note) => self.store.delete_note(note.id),
                None => return,
            },
            Focus::Input => return,
        };
        if let Err(err) = result {
            self.report_error("delete failed", &err);
            return;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.reload();
    }

    // --- Input overlay ---

    pub fn start_input(&mut self, mode: InputMode) {
        self.input = Some(InputState::new(mode));
        self.focus = Focus::Input;
    }

    pub fn cancel_input(&mut self) {
        self.input = None;
        self.focus = Focus::Todos;
        // The overlay may have been opened from the notes pane, so the
        // surviving cursor can point past the todos list
        self.clamp_cursor();
    }

    /// Commit the input buffer. An empty buffer is a no-op and leaves the
    /// overlay open. A new note is created with an empty body, then handed to
    /// the external editor for its first edit session.
    pub fn submit_input(&mut self) -> Action {
        let Some(input) = self.input.as_ref() else {
            return Action::None;
        };
        if input.text.is_empty() {
            return Action::None;
        }
        let (mode, text) = (input.mode, input.text.clone());
        self.input = None;

        match mode {
            InputMode::NewTodo => {
                let due = Utc::now() + Duration::hours(DEFAULT_DUE_OFFSET_HOURS);
                if let Err(err) = self.store.create_todo(&text, due) {
                    self.report_error("create todo failed", &err);
                }
                // The pre-overlay cursor survives the round trip; reload
                // clamps it against the refreshed list
                self.focus = Focus::Todos;
                self.reload();
                Action::None
            }
            InputMode::NewNote => {
                let note_id = match self.store.create_note(&text, "") {
                    Ok(id) => id,
                    Err(err) => {
                        self.report_error("create note failed", &err);
                        self.focus = Focus::Todos;
                        self.clamp_cursor();
                        return Action::None;
                    }
                };
                self.focus = Focus::Notes;
                self.reload();
                Action::OpenEditor {
                    note_id,
                    seed: String::new(),
                }
            }
        }
    }

    // --- External editor coordination ---

    /// Request an editor session for the selected note, seeded with its
    /// current body
    pub fn edit_selected_note(&mut self) -> Action {
        if self.focus != Focus::Notes {
            return Action::None;
        }
        match self.notes.get(self.cursor) {
            Some(note) => Action::OpenEditor {
                note_id: note.id,
                seed: note.body.clone(),
            },
            None => Action::None,
        }
    }

    /// Apply the completion event of a finished editor session. A failed
    /// session leaves the note body unmodified.
    pub fn apply_editor_outcome(&mut self, outcome: EditorOutcome) {
        if outcome.failed {
            self.status = Some("editor session failed, note unchanged".to_string());
        } else if let Err(err) = self
            .store
            .update_note_body(outcome.note_id, &outcome.content)
        {
            self.report_error("note update failed", &err);
        }
        self.reload();
        self.focus = Focus::Notes;
        self.clamp_cursor();
    }
}
