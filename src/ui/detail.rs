use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::types::Item;
use crate::ui::colors::current as theme_current;

/// Text rows of the place detail screen.
pub fn format_place_details(item: &Item) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(item.name.clone());
    lines.push(String::new());
    if let Some(rating) = item.rating {
        lines.push(format!("Rating: ★ {rating:.1}"));
    }
    if !item.tags.is_empty() {
        lines.push(format!("Tags: {}", item.tags.join(", ")));
    }
    if !item.image.is_empty() {
        lines.push(format!("Image: {}", item.image));
    }
    lines.push(String::new());
    lines.push(item.description.clone());
    lines
}

pub fn render(f: &mut Frame, area: Rect, item: &Item) {
    let theme = theme_current();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", item.name))
        .title_bottom(Line::from(" Esc: back ").right_aligned())
        .style(theme.detail_style);
    let text: Vec<Line> = format_place_details(item).into_iter().map(Line::from).collect();
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }).block(block), area);
}
