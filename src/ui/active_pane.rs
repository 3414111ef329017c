use crate::app::{AppState, EditState};
use crate::domain::{active_rows, Focus, Task, ACTIVE_EMPTY_HINT};
use crate::ui::styles::{
    border_style, default_style, edit_style, focused_border_style, placeholder_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Create a line for an active task in static display
fn task_line(task: &Task) -> Line<'static> {
    Line::from(vec![
        Span::raw("• "),
        Span::styled(task.text.clone(), default_style()),
    ])
}

/// Create a line for the task currently being edited in place
fn edit_line(edit: &EditState) -> Line<'static> {
    Line::from(vec![
        Span::raw("✎ "),
        Span::styled(edit.draft.clone(), edit_style()),
        Span::styled("█", edit_style()), // Cursor
    ])
}

/// Render the active (to-do) section
pub fn render_active_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = active_rows(&app.board);
    let focused = app.focus == Focus::Active;

    let items: Vec<ListItem> = if rows.is_empty() {
        vec![ListItem::new(Line::raw(ACTIVE_EMPTY_HINT)).style(placeholder_style())]
    } else {
        rows.iter()
            .map(|row| {
                let task = &app.board.active[row.position];
                let line = match &app.edit {
                    Some(edit) if edit.id == task.id => edit_line(edit),
                    _ => task_line(task),
                };
                let style = if focused && row.position == app.selected_active {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(line).style(style)
            })
            .collect()
    };

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let title = format!(" To Do ({}) ", app.board.active.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_task_line_contains_text() {
        let task = Task::new("Water the plants".to_string());
        let line = task_line(&task);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Water the plants"));
    }

    #[test]
    fn test_edit_line_shows_draft_not_saved_text() {
        let edit = EditState {
            id: Uuid::new_v4(),
            draft: "half-typed".to_string(),
        };
        let line = edit_line(&edit);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("half-typed"));
    }
}
