use crate::app::AppState;
use crate::domain::{Filter, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_adding_mode(app, key),
        UiMode::EditingTask => handle_editing_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Switch section focus
        KeyCode::Tab => {
            app.cycle_focus();
            Ok(false)
        }

        // Filters
        KeyCode::Char('1') => {
            app.set_filter(Filter::All);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.set_filter(Filter::Active);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.set_filter(Filter::Completed);
            Ok(false)
        }

        // Focus the add-task input
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.ui_mode = UiMode::AddingTask;
            Ok(false)
        }

        // Complete selected task
        KeyCode::Char('d') | KeyCode::Enter => {
            app.complete_selected();
            Ok(false)
        }

        // Edit selected task in place
        KeyCode::Char('e') => {
            app.start_edit_selected();
            Ok(false)
        }

        // Delete selected task
        KeyCode::Char('x') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing into the add-task input bar
fn handle_adding_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input();
            Ok(false)
        }
        KeyCode::Esc => {
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while editing a task in place.
/// Enter and Esc (leaving the field) both save; save_edit is idempotent.
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.save_edit();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.edit_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.edit_push_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
