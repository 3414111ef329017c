use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID; operations are keyed by this, never by list position
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Task text, stored exactly as entered (untrimmed)
    pub text: String,
    /// Whether the task has been completed
    pub completed: bool,
    /// When the task was created
    #[serde(default = "Local::now")]
    pub created_at: DateTime<Local>,
    /// When the task was completed (if it has been)
    #[serde(default)]
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            created_at: Local::now(),
            completed_at: None,
        }
    }

    /// Mark as completed and stamp the completion time
    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.completed_at = Some(Local::now());
    }
}
