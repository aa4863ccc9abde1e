use crate::app::AppState;
use crate::domain::Focus;
use crate::ui::styles::{
    border_style, default_style, done_style, focused_border_style, pending_style, selected_style,
    title_style,
};
use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn format_due(due_at: DateTime<Utc>) -> String {
    due_at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Render the todos pane: pending items first, completed items below
pub fn render_todos_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Focus::Todos;
    let mut lines = Vec::new();

    lines.push(Line::styled(" PENDING", pending_style()));
    for (i, todo) in app.todos.iter().enumerate() {
        if todo.is_done {
            continue;
        }
        let text = format!("[ ] {}  (due {})", todo.task, format_due(todo.due_at));
        lines.push(row(&text, focused && app.cursor == i, default_style()));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(" COMPLETED", done_style()));
    for (i, todo) in app.todos.iter().enumerate() {
        if !todo.is_done {
            continue;
        }
        let text = format!("[x] {}", todo.task);
        lines.push(row(&text, focused && app.cursor == i, done_style()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" TODOS ", title_style()))
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        });

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn row(text: &str, selected: bool, style: ratatui::style::Style) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("> ", selected_style()),
            Span::styled(text.to_string(), selected_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(text.to_string(), style),
        ])
    }
}
