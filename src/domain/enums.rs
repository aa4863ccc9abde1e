/// Which list or overlay currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Todos,
    Notes,
    Input,
}

impl Focus {
    /// Toggle between the two list panes (the input overlay is entered
    /// explicitly, never via Tab)
    pub fn toggled(self) -> Self {
        match self {
            Focus::Todos => Focus::Notes,
            Focus::Notes => Focus::Todos,
            Focus::Input => Focus::Input,
        }
    }
}

/// Which entity type a pending input overlay commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    NewTodo,
    NewNote,
}

impl InputMode {
    /// Placeholder text shown while the input field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputMode::NewTodo => "Task description...",
            InputMode::NewNote => "Note title...",
        }
    }

    /// Display name for the overlay title
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::NewTodo => "Task",
            InputMode::NewNote => "Note",
        }
    }
}
