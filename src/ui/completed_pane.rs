use crate::app::AppState;
use crate::domain::{completed_rows, completed_stamp, Focus, Task, COMPLETED_EMPTY_HINT};
use crate::ui::styles::{
    border_style, default_style, done_style, focused_border_style, placeholder_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Create a line for a completed task
fn completed_line(task: &Task) -> Line<'static> {
    let mut spans = vec![
        Span::styled("✓ ".to_string(), done_style()),
        Span::styled(task.text.clone(), default_style()),
    ];

    let stamp = completed_stamp(task);
    if !stamp.is_empty() {
        spans.push(Span::raw("  ".to_string()));
        spans.push(Span::styled(format!("({})", stamp), done_style()));
    }

    Line::from(spans)
}

/// Render the completed section
pub fn render_completed_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = completed_rows(&app.board);
    let focused = app.focus == Focus::Completed;

    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new(Line::raw(COMPLETED_EMPTY_HINT)).style(placeholder_style())]
    } else {
        rows.iter()
            .map(|row| {
                let task = &app.board.completed[row.position];
                let style = if focused && row.position == app.selected_completed {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(completed_line(task)).style(style)
            })
            .collect()
    };

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let title = format!(" Completed ({}) ", app.board.completed.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
