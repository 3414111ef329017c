pub mod active_pane;
pub mod completed_pane;
pub mod input_bar;
pub mod keybindings;
pub mod layout;
pub mod score_pane;
pub mod styles;

use crate::app::AppState;
use active_pane::render_active_pane;
use completed_pane::render_completed_pane;
use input_bar::render_input_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use score_pane::render_score_pane;

/// Main render function - draws the entire UI from current state
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, app.filter);

    render_keybindings(f, layout.keybindings_area);
    render_input_bar(f, app, layout.input_area);

    if let Some(active_area) = layout.active_area {
        render_active_pane(f, app, active_area);
    }

    if let Some(completed_area) = layout.completed_area {
        render_completed_pane(f, app, completed_area);
    }

    render_score_pane(f, app, layout.score_area);
}
