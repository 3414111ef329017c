use super::task::Task;
use uuid::Uuid;

/// Points awarded per completed task
pub const COMPLETION_POINTS: u32 = 10;

/// The task board: both lists plus the daily score.
///
/// All mutating operations are keyed by task ID. Operations on an ID that
/// is not in the targeted list are silent no-ops, so a stale selection can
/// never corrupt the lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Tasks not yet completed, in insertion order
    pub active: Vec<Task>,
    /// Completed tasks, in completion order
    pub completed: Vec<Task>,
    /// Points accumulated today; not derived from the completed list
    pub score: u32,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from persisted state
    pub fn with_state(active: Vec<Task>, completed: Vec<Task>, score: u32) -> Self {
        Self {
            active,
            completed,
            score,
        }
    }

    /// Append a new task. Blank text (after trimming) is ignored; the
    /// stored text keeps its original whitespace.
    pub fn add(&mut self, text: &str) -> Option<Uuid> {
        if text.trim().is_empty() {
            return None;
        }
        let task = Task::new(text.to_string());
        let id = task.id;
        self.active.push(task);
        Some(id)
    }

    /// Move an active task to the end of the completed list and award
    /// points. Returns false if the ID is not in the active list.
    pub fn complete(&mut self, id: Uuid) -> bool {
        let Some(idx) = self.active.iter().position(|t| t.id == id) else {
            return false;
        };
        let mut task = self.active.remove(idx);
        task.mark_completed();
        self.completed.push(task);
        self.score += COMPLETION_POINTS;
        true
    }

    /// Replace an active task's text. No trim, no emptiness check; blank
    /// text is a legal edit.
    pub fn set_text(&mut self, id: Uuid, text: String) -> bool {
        match self.active.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text;
                true
            }
            None => false,
        }
    }

    /// Remove a task from the active list
    pub fn delete_active(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.active, id)
    }

    /// Remove a task from the completed list. The score is untouched, so
    /// score and completed-list length may diverge.
    pub fn delete_completed(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.completed, id)
    }

    /// Midnight reset: clear the completed list and zero the score. The
    /// active list always survives.
    pub fn daily_reset(&mut self) {
        self.completed.clear();
        self.score = 0;
    }
}

fn remove_by_id(tasks: &mut Vec<Task>, id: Uuid) -> bool {
    match tasks.iter().position(|t| t.id == id) {
        Some(idx) => {
            tasks.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_incomplete_task() {
        let mut board = Board::new();
        let id = board.add("Buy milk").unwrap();

        assert_eq!(board.active.len(), 1);
        assert_eq!(board.active[0].id, id);
        assert_eq!(board.active[0].text, "Buy milk");
        assert!(!board.active[0].completed);
        assert!(board.completed.is_empty());
        assert_eq!(board.score, 0);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut board = Board::new();
        assert!(board.add("").is_none());
        assert!(board.add("   \t ").is_none());
        assert!(board.active.is_empty());
        assert_eq!(board.score, 0);
    }

    #[test]
    fn test_add_preserves_surrounding_whitespace() {
        let mut board = Board::new();
        board.add("  padded  ").unwrap();
        assert_eq!(board.active[0].text, "  padded  ");
    }

    #[test]
    fn test_complete_moves_task_and_scores() {
        let mut board = Board::new();
        let id = board.add("Buy milk").unwrap();

        assert!(board.complete(id));
        assert!(board.active.is_empty());
        assert_eq!(board.completed.len(), 1);
        assert_eq!(board.completed[0].text, "Buy milk");
        assert!(board.completed[0].completed);
        assert!(board.completed[0].completed_at.is_some());
        assert_eq!(board.score, COMPLETION_POINTS);
    }

    #[test]
    fn test_complete_appends_in_completion_order() {
        let mut board = Board::new();
        let a = board.add("A").unwrap();
        let b = board.add("B").unwrap();
        let c = board.add("C").unwrap();

        board.complete(c);
        board.complete(a);
        board.complete(b);

        let order: Vec<&str> = board.completed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_complete_unknown_id_is_noop() {
        let mut board = Board::new();
        board.add("A").unwrap();
        let before = board.clone();

        assert!(!board.complete(Uuid::new_v4()));
        assert_eq!(board, before);
    }

    #[test]
    fn test_complete_every_valid_position() {
        for target in 0..3 {
            let mut board = Board::new();
            let ids: Vec<Uuid> = ["A", "B", "C"]
                .iter()
                .map(|t| board.add(t).unwrap())
                .collect();

            assert!(board.complete(ids[target]));
            assert_eq!(board.active.len(), 2);
            assert_eq!(board.completed.len(), 1);
            assert_eq!(board.score, COMPLETION_POINTS);
            assert!(board.active.iter().all(|t| t.id != ids[target]));
        }
    }

    #[test]
    fn test_set_text_replaces_only_target() {
        let mut board = Board::new();
        let a = board.add("A").unwrap();
        let b = board.add("B").unwrap();

        assert!(board.set_text(b, "B edited".to_string()));
        assert_eq!(board.active.len(), 2);
        assert_eq!(board.active[0].id, a);
        assert_eq!(board.active[0].text, "A");
        assert_eq!(board.active[1].text, "B edited");
    }

    #[test]
    fn test_set_text_allows_blank() {
        let mut board = Board::new();
        let id = board.add("A").unwrap();
        assert!(board.set_text(id, String::new()));
        assert_eq!(board.active[0].text, "");
    }

    #[test]
    fn test_set_text_unknown_id_is_noop() {
        let mut board = Board::new();
        board.add("A").unwrap();
        assert!(!board.set_text(Uuid::new_v4(), "x".to_string()));
        assert_eq!(board.active[0].text, "A");
    }

    #[test]
    fn test_delete_active() {
        let mut board = Board::new();
        let a = board.add("A").unwrap();
        board.add("B").unwrap();

        assert!(board.delete_active(a));
        assert_eq!(board.active.len(), 1);
        assert_eq!(board.active[0].text, "B");
        assert!(!board.delete_active(a));
    }

    #[test]
    fn test_delete_completed_keeps_score() {
        let mut board = Board::new();
        let id = board.add("A").unwrap();
        board.complete(id);

        assert!(board.delete_completed(id));
        assert!(board.completed.is_empty());
        assert_eq!(board.score, COMPLETION_POINTS);
    }

    #[test]
    fn test_daily_reset_clears_completed_and_score_only() {
        let mut board = Board::new();
        board.add("keep me").unwrap();
        let done = board.add("done").unwrap();
        board.complete(done);

        board.daily_reset();

        assert_eq!(board.active.len(), 1);
        assert_eq!(board.active[0].text, "keep me");
        assert!(board.completed.is_empty());
        assert_eq!(board.score, 0);
    }

    #[test]
    fn test_scenario_buy_milk() {
        let mut board = Board::new();

        let id = board.add("Buy milk").unwrap();
        assert_eq!(board.active.len(), 1);
        assert!(board.completed.is_empty());
        assert_eq!(board.score, 0);

        board.complete(id);
        assert!(board.active.is_empty());
        assert_eq!(board.completed.len(), 1);
        assert_eq!(board.completed[0].text, "Buy milk");
        assert_eq!(board.score, 10);

        board.delete_completed(id);
        assert!(board.active.is_empty());
        assert!(board.completed.is_empty());
        assert_eq!(board.score, 10);
    }

    #[test]
    fn test_scenario_complete_first_of_two() {
        let mut board = Board::new();
        let a = board.add("A").unwrap();
        board.add("B").unwrap();

        board.complete(a);

        assert_eq!(board.active.len(), 1);
        assert_eq!(board.active[0].text, "B");
        assert!(!board.active[0].completed);
        assert_eq!(board.completed.len(), 1);
        assert_eq!(board.completed[0].text, "A");
        assert!(board.completed[0].completed);
        assert_eq!(board.score, 10);
    }
}
