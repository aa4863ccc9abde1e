use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, placeholder_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the text-input overlay for creating a task or note
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(input) = &app.input {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        // The buffer with a block cursor, or the placeholder when empty
        let field = if input.text.is_empty() {
            Line::from(vec![
                Span::raw("> "),
                Span::styled("█", modal_title_style()),
                Span::styled(input.mode.placeholder(), placeholder_style()),
            ])
        } else {
            let (before, after) = input.text.split_at(input.cursor);
            Line::from(vec![
                Span::raw("> "),
                Span::styled(before.to_string(), modal_title_style()),
                Span::styled("█", modal_title_style()),
                Span::styled(after.to_string(), modal_title_style()),
            ])
        };
        lines.push(field);
        lines.push(Line::raw(""));
        lines.push(Line::raw("Enter to confirm  ·  Esc to cancel"));

        let title = format!(" New {} ", input.mode.label());
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
