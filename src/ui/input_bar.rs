use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{
    border_style, default_style, edit_style, focused_border_style, placeholder_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the add-task input bar
pub fn render_input_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode == UiMode::AddingTask;

    let line = if app.input.is_empty() && !focused {
        Line::from(Span::styled("Add a new task", placeholder_style()))
    } else {
        let mut spans = vec![
            Span::raw("> "),
            Span::styled(app.input.clone(), default_style()),
        ];
        if focused {
            spans.push(Span::styled("█", edit_style())); // Cursor
        }
        Line::from(spans)
    };

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" Add a task ", title_style())),
    );

    f.render_widget(paragraph, area);
}
