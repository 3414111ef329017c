use crate::app::AppState;
use crate::ui::styles::{flash_style, score_style};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Score line text, with a celebration burst while flashing
fn score_text(score: u32, filter_label: &str, flashing: bool) -> String {
    if flashing {
        format!(" Today's Score: {} ★ 🎉 · Filter: {}", score, filter_label)
    } else {
        format!(" Today's Score: {} ★ · Filter: {}", score, filter_label)
    }
}

/// Render the score line
pub fn render_score_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let flashing = app.flash_ticks > 0;
    let text = score_text(app.board.score, app.filter.label(), flashing);

    let style = if flashing { flash_style() } else { score_style() };
    let paragraph = Paragraph::new(text).style(style);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(
            score_text(30, "All", false),
            " Today's Score: 30 ★ · Filter: All"
        );
        assert!(score_text(10, "Active", true).contains("🎉"));
    }
}
