use super::store::{Store, StoreError};
use crate::domain::{Board, Task};

/// Store key for the active task list
pub const ACTIVE_KEY: &str = "active";
/// Store key for the completed task list
pub const COMPLETED_KEY: &str = "completed";
/// Store key for the daily score
pub const SCORE_KEY: &str = "score";

/// Tracks which persisted entries have changes pending a write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyState {
    pub active: bool,
    pub completed: bool,
    pub score: bool,
}

impl DirtyState {
    pub fn any(&self) -> bool {
        self.active || self.completed || self.score
    }

    /// All three entries pending (for the initial save or an exit flush)
    pub fn all() -> Self {
        Self {
            active: true,
            completed: true,
            score: true,
        }
    }
}

/// Persistence front for the board: three independent entries, each
/// serialized and written on its own. No transaction spans entries; a
/// crash between writes can leave them mutually inconsistent.
pub struct Repository<S: Store> {
    store: S,
}

impl<S: Store> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Hydrate the board. Entries that are absent, unreadable, or
    /// unparsable degrade to their empty/zero defaults; hydration never
    /// fails and never surfaces an error.
    pub fn load(&self) -> Board {
        let active = decode_tasks(self.read_entry(ACTIVE_KEY));
        let completed = decode_tasks(self.read_entry(COMPLETED_KEY));
        let score = decode_score(self.read_entry(SCORE_KEY));
        Board::with_state(active, completed, score)
    }

    fn read_entry(&self, key: &str) -> Option<String> {
        self.store.get(key).ok().flatten()
    }

    pub fn save_active(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        self.save_tasks(ACTIVE_KEY, tasks)
    }

    pub fn save_completed(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        self.save_tasks(COMPLETED_KEY, tasks)
    }

    pub fn save_score(&mut self, score: u32) -> Result<(), StoreError> {
        let json = serde_json::to_string(&score).map_err(|source| StoreError::Encode {
            key: SCORE_KEY.to_string(),
            source,
        })?;
        self.store.set(SCORE_KEY, &json)
    }

    fn save_tasks(&mut self, key: &str, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }

    /// Write exactly the entries marked dirty, clearing each flag as its
    /// write lands
    pub fn flush(&mut self, board: &Board, dirty: &mut DirtyState) -> Result<(), StoreError> {
        if dirty.active {
            self.save_active(&board.active)?;
            dirty.active = false;
        }
        if dirty.completed {
            self.save_completed(&board.completed)?;
            dirty.completed = false;
        }
        if dirty.score {
            self.save_score(board.score)?;
            dirty.score = false;
        }
        Ok(())
    }

    /// Consume the repository and return the underlying store
    pub fn into_store(self) -> S {
        self.store
    }
}

fn decode_tasks(raw: Option<String>) -> Vec<Task> {
    raw.and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn decode_score(raw: Option<String>) -> u32 {
    raw.and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}
