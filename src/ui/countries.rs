use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::core::visuals::{country_visual, CountryVisual, VisualRanges};
use crate::app::App;
use crate::ui::colors::{current as theme_current, Colors};
use crate::ui::util::{clip_columns, truncate};

/// Lines for one country cell: an icon bar sized by `icon_size` and the
/// label, emphasised as `font_size` approaches its peak.
pub fn country_lines<'a>(
    name: &str,
    visual: &CountryVisual,
    ranges: &VisualRanges,
    width: u16,
    colors: &Colors,
) -> Vec<Line<'a>> {
    let style = colors.faded_style(visual.opacity);
    let usable = width.saturating_sub(2).max(1) as f32;
    let peak_icon = ranges.icon_size[1].max(f32::EPSILON);
    let icon_cells = ((visual.icon_size / peak_icon) * usable * 0.6).round().max(1.0) as usize;
    let icon_rows = if visual.icon_size >= (ranges.icon_size[0] + ranges.icon_size[1]) / 2.0 { 2 } else { 1 };

    let mut lines = Vec::new();
    for _ in icon_rows..2 {
        lines.push(Line::raw(""));
    }
    for _ in 0..icon_rows {
        lines.push(Line::from(Span::styled("█".repeat(icon_cells), style)));
    }

    let emphasised = visual.font_size >= (ranges.font_size[0] + ranges.font_size[1]) / 2.0;
    let label = truncate(name, usable as usize);
    let label_style = if emphasised { style.add_modifier(Modifier::BOLD) } else { style };
    let label = if emphasised { label.to_uppercase() } else { label };
    lines.push(Line::from(Span::styled(label, label_style)));
    lines
}

/// Upper strip: only entries inside the visible range are interpolated.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = theme_current();
    let block = Block::default().borders(Borders::BOTTOM).style(colors.base_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let list = &app.countries;
    let ranges = &app.settings.visuals;
    let width = list.snap_width();
    let offset = list.offset();
    let viewport = inner.width as f32;

    for index in list.visible_range(viewport) {
        let Some(group) = list.sequence().real(index) else {
            continue;
        };
        let left = viewport / 2.0 + (index as f32 - 1.0) * width - offset - width / 2.0;
        let Some(cell) = clip_columns(inner, left, width) else {
            continue;
        };
        let visual = country_visual(offset, index, width, ranges);
        let lines = country_lines(&group.name, &visual, ranges, cell.width, &colors);
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), cell);
    }
}
