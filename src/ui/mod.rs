pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod notes_pane;
pub mod styles;
pub mod todos_pane;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use notes_pane::render_notes_pane;
use ratatui::{text::Span, widgets::Paragraph, Frame};
use styles::status_style;
use todos_pane::render_todos_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_todos_pane(f, app, layout.todos_area);
    render_notes_pane(f, app, layout.notes_area);

    // Transient status line (storage failures etc.)
    if let Some(status) = &app.status {
        let paragraph = Paragraph::new(Span::styled(status.clone(), status_style()));
        f.render_widget(paragraph, layout.status_area);
    }

    // Input overlay on top of everything
    if app.input.is_some() {
        render_input_form(f, app, size);
    }
}
