use crate::domain::Filter;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub input_area: Rect,
    pub active_area: Option<Rect>,
    pub completed_area: Option<Rect>,
    pub score_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Add-task input bar (3 rows)
/// - Middle: the sections the filter shows (60/40 split when both)
/// - Bottom: score line (1 row)
pub fn create_layout(area: Rect, filter: Filter) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Input bar
            Constraint::Min(0),    // Sections
            Constraint::Length(1), // Score line
        ])
        .split(area);

    let keybindings_area = chunks[0];
    let input_area = chunks[1];
    let sections_area = chunks[2];
    let score_area = chunks[3];

    let (active_area, completed_area) = match (filter.shows_active(), filter.shows_completed()) {
        (true, true) => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(60), // Active section
                    Constraint::Percentage(40), // Completed section
                ])
                .split(sections_area);
            (Some(split[0]), Some(split[1]))
        }
        (true, false) => (Some(sections_area), None),
        (false, true) => (None, Some(sections_area)),
        // Unreachable with the current filters; render nothing
        (false, false) => (None, None),
    };

    MainLayout {
        keybindings_area,
        input_area,
        active_area,
        completed_area,
        score_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_all_filter_shows_both_sections() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area, Filter::All);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.score_area.height, 1);
        assert!(layout.active_area.is_some());
        assert!(layout.completed_area.is_some());
    }

    #[test]
    fn test_layout_active_filter_hides_completed() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area, Filter::Active);

        assert!(layout.active_area.is_some());
        assert!(layout.completed_area.is_none());
    }

    #[test]
    fn test_layout_completed_filter_hides_active() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area, Filter::Completed);

        assert!(layout.active_area.is_none());
        assert!(layout.completed_area.is_some());
    }

    #[test]
    fn test_single_section_takes_the_whole_middle() {
        let area = Rect::new(0, 0, 100, 40);
        let both = create_layout(area, Filter::All);
        let solo = create_layout(area, Filter::Active);

        let both_active = both.active_area.unwrap();
        let solo_active = solo.active_area.unwrap();
        assert!(solo_active.height > both_active.height);
    }
}
