use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Tab section   "),
        Span::raw("a add   "),
        Span::raw("d done   "),
        Span::raw("e edit   "),
        Span::raw("x delete   "),
        Span::raw("1/2/3 filter   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
