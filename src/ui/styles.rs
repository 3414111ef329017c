use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style for unfocused panes
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border style for the focused pane
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Empty-section placeholder style
pub fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Score line style
pub fn score_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Score line style during the celebration flash
pub fn flash_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// In-place edit draft style
pub fn edit_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
