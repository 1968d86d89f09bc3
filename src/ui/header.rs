use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::colors::current as theme_current;

/// Side-drawer glyph, region title and profile glyph, with the latest
/// selection notice along the bottom border.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = theme_current();
    let inner_width = area.width.saturating_sub(2) as usize;
    let title = app.region.to_uppercase();
    let side = 3usize;
    let pad = inner_width.saturating_sub(title.chars().count() + 2 * side);
    let left_pad = pad / 2;
    let right_pad = pad - left_pad;
    let line = Line::from(vec![
        Span::styled(" ≡ ", theme.header_style),
        Span::raw(" ".repeat(left_pad)),
        Span::styled(title, theme.title_style),
        Span::raw(" ".repeat(right_pad)),
        Span::styled(" ◎ ", theme.header_style),
    ]);

    let mut block = Block::default().borders(Borders::ALL).style(theme.header_style);
    if let Some(status) = &app.status {
        block = block.title_bottom(Line::from(format!(" {status} ")).right_aligned());
    }
    f.render_widget(Paragraph::new(line).block(block).style(theme.header_style), area);
}
