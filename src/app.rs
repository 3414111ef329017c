use crate::celebration;
use crate::domain::{active_rows, completed_rows, Board, Filter, Focus, UiMode};
use crate::persistence::DirtyState;
use uuid::Uuid;

/// How many ticks the score pane flashes after a celebration
pub const FLASH_TICKS: u8 = 8;

/// In-place edit cursor: the targeted task plus the draft text
#[derive(Debug, Clone)]
pub struct EditState {
    pub id: Uuid,
    pub draft: String,
}

/// Main application state
pub struct AppState {
    pub board: Board,
    pub filter: Filter,
    pub ui_mode: UiMode,
    pub focus: Focus,
    /// Add-task input buffer
    pub input: String,
    /// At most one task is editable at a time
    pub edit: Option<EditState>,
    pub selected_active: usize,
    pub selected_completed: usize,
    pub dirty: DirtyState,
    /// Remaining celebration-flash ticks
    pub flash_ticks: u8,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            filter: Filter::All,
            ui_mode: UiMode::Normal,
            focus: Focus::Active,
            input: String::new(),
            edit: None,
            selected_active: 0,
            selected_completed: 0,
            dirty: DirtyState::default(),
            flash_ticks: 0,
        }
    }

    /// ID of the selected row in the active section
    pub fn selected_active_id(&self) -> Option<Uuid> {
        active_rows(&self.board)
            .get(self.selected_active)
            .map(|row| row.id)
    }

    /// ID of the selected row in the completed section
    pub fn selected_completed_id(&self) -> Option<Uuid> {
        completed_rows(&self.board)
            .get(self.selected_completed)
            .map(|row| row.id)
    }

    /// Submit the add-task input. Blank input is ignored and kept in the
    /// buffer for correction; otherwise the buffer is cleared.
    pub fn submit_input(&mut self) {
        if self.board.add(&self.input).is_some() {
            self.input.clear();
            self.dirty.active = true;
        }
    }

    /// Complete the selected active task
    pub fn complete_selected(&mut self) {
        if self.focus != Focus::Active {
            return;
        }
        let Some(id) = self.selected_active_id() else {
            return;
        };
        if self.board.complete(id) {
            if let Some(task) = self.board.completed.last() {
                celebration::celebrate(&task.text);
            }
            self.flash_ticks = FLASH_TICKS;
            self.dirty.active = true;
            self.dirty.completed = true;
            self.dirty.score = true;
            self.clamp_selections();
        }
    }

    /// Begin editing the selected active task. Starting a new edit
    /// abandons any unsaved draft without confirmation.
    pub fn start_edit_selected(&mut self) {
        if self.focus != Focus::Active {
            return;
        }
        let Some(id) = self.selected_active_id() else {
            return;
        };
        if let Some(task) = self.board.active.iter().find(|t| t.id == id) {
            self.edit = Some(EditState {
                id,
                draft: task.text.clone(),
            });
            self.ui_mode = UiMode::EditingTask;
        }
    }

    pub fn edit_push_char(&mut self, c: char) {
        if let Some(edit) = &mut self.edit {
            edit.draft.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(edit) = &mut self.edit {
            edit.draft.pop();
        }
    }

    /// Apply the edit cursor's draft to its task and clear the cursor.
    /// The cursor is consumed, so a second invocation for the same state
    /// (Enter followed by leaving the field) is a no-op.
    pub fn save_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            if self.board.set_text(edit.id, edit.draft) {
                self.dirty.active = true;
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Delete the selected task in the focused section
    pub fn delete_selected(&mut self) {
        match self.focus {
            Focus::Active => {
                let Some(id) = self.selected_active_id() else {
                    return;
                };
                // Deleting the task under edit abandons the draft
                if self.edit.as_ref().is_some_and(|e| e.id == id) {
                    self.edit = None;
                }
                if self.board.delete_active(id) {
                    self.dirty.active = true;
                    self.clamp_selections();
                }
            }
            Focus::Completed => {
                let Some(id) = self.selected_completed_id() else {
                    return;
                };
                let text = self
                    .board
                    .completed
                    .iter()
                    .find(|t| t.id == id)
                    .map(|t| t.text.clone());
                if self.board.delete_completed(id) {
                    if let Some(text) = text {
                        celebration::celebrate(&text);
                    }
                    self.flash_ticks = FLASH_TICKS;
                    self.dirty.completed = true;
                    self.clamp_selections();
                }
            }
        }
    }

    /// Change the view filter. Never mutates the lists or the score; only
    /// moves focus off a section the new filter hides.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        if !filter.shows_active() && self.focus == Focus::Active {
            self.focus = Focus::Completed;
        }
        if !filter.shows_completed() && self.focus == Focus::Completed {
            self.focus = Focus::Active;
        }
    }

    /// Move focus to the other section, if the filter shows it
    pub fn cycle_focus(&mut self) {
        match self.focus {
            Focus::Active if self.filter.shows_completed() => self.focus = Focus::Completed,
            Focus::Completed if self.filter.shows_active() => self.focus = Focus::Active,
            _ => {}
        }
    }

    /// Move selection up in the focused section
    pub fn move_selection_up(&mut self) {
        let selected = self.focused_selection_mut();
        if *selected > 0 {
            *selected -= 1;
        }
    }

    /// Move selection down in the focused section
    pub fn move_selection_down(&mut self) {
        let len = self.focused_len();
        let selected = self.focused_selection_mut();
        if *selected + 1 < len {
            *selected += 1;
        }
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Active => self.board.active.len(),
            Focus::Completed => self.board.completed.len(),
        }
    }

    fn focused_selection_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Active => &mut self.selected_active,
            Focus::Completed => &mut self.selected_completed,
        }
    }

    /// Keep both selections inside their lists after removals
    pub fn clamp_selections(&mut self) {
        self.selected_active = clamp_index(self.selected_active, self.board.active.len());
        self.selected_completed = clamp_index(self.selected_completed, self.board.completed.len());
    }

    /// Apply the midnight reset and mark the cleared entries dirty
    pub fn apply_daily_reset(&mut self) {
        self.board.daily_reset();
        self.dirty.completed = true;
        self.dirty.score = true;
        self.clamp_selections();
    }

    /// Per-iteration bookkeeping (decays the celebration flash)
    pub fn tick(&mut self) {
        self.flash_ticks = self.flash_ticks.saturating_sub(1);
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
