use crate::app::AppState;
use crate::domain::Focus;
use crate::ui::styles::{
    border_style, default_style, focused_border_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the notes pane: titles only, newest first
pub fn render_notes_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Focus::Notes;
    let mut lines = Vec::new();

    for (i, note) in app.notes.iter().enumerate() {
        if focused && app.cursor == i {
            lines.push(Line::from(vec![
                Span::styled("> ", selected_style()),
                Span::styled(note.title.clone(), selected_style()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(note.title.clone(), default_style()),
            ]));
        }
    }

    if app.notes.is_empty() {
        lines.push(Line::styled("  (no notes yet, press n)", hint_style()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" NOTES ", title_style()))
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        });

    f.render_widget(Paragraph::new(lines).block(block), area);
}
