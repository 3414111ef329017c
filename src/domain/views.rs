use super::board::Board;
use super::task::Task;
use uuid::Uuid;

/// A rendered row mapped back to its task's stable ID.
///
/// Rows are rebuilt from the current lists on every frame, so a keypress on
/// row N always resolves to the task actually shown there, regardless of
/// which sections the filter hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRef {
    /// Position within the rendered section
    pub position: usize,
    /// Stable task ID
    pub id: Uuid,
}

/// Rows for the active section, in list order
pub fn active_rows(board: &Board) -> Vec<RowRef> {
    rows_of(&board.active)
}

/// Rows for the completed section, in completion order
pub fn completed_rows(board: &Board) -> Vec<RowRef> {
    rows_of(&board.completed)
}

fn rows_of(tasks: &[Task]) -> Vec<RowRef> {
    tasks
        .iter()
        .enumerate()
        .map(|(position, task)| RowRef {
            position,
            id: task.id,
        })
        .collect()
}

/// Placeholder shown when the active section is empty
pub const ACTIVE_EMPTY_HINT: &str = "Press 'a' and type to add a task.";

/// Placeholder shown when the completed section is empty
pub const COMPLETED_EMPTY_HINT: &str = "Completed tasks will show here.";

/// Completion-time stamp for a completed row, e.g. "14:32"
pub fn completed_stamp(task: &Task) -> String {
    match task.completed_at {
        Some(at) => at.format("%H:%M").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_list_order() {
        let mut board = Board::new();
        let a = board.add("A").unwrap();
        let b = board.add("B").unwrap();

        let rows = active_rows(&board);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], RowRef { position: 0, id: a });
        assert_eq!(rows[1], RowRef { position: 1, id: b });
    }

    #[test]
    fn test_rows_track_removals() {
        let mut board = Board::new();
        let a = board.add("A").unwrap();
        let b = board.add("B").unwrap();
        board.complete(a);

        let active = active_rows(&board);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b);

        let completed = completed_rows(&board);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, a);
    }

    #[test]
    fn test_completed_stamp() {
        let mut board = Board::new();
        let id = board.add("A").unwrap();

        assert_eq!(completed_stamp(&board.active[0]), "");

        board.complete(id);
        let stamp = completed_stamp(&board.completed[0]);
        assert_eq!(stamp.len(), 5);
        assert_eq!(stamp.chars().nth(2), Some(':'));
    }
}
