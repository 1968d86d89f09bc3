use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::core::visuals::place_visual;
use crate::app::types::Item;
use crate::app::App;
use crate::ui::colors::{current as theme_current, Colors};
use crate::ui::util::{centre_rows, clip_columns};

pub const EXPLORE_LABEL: &str = "[ Explore ]";

/// Card body: wrapped description followed by the explore button when the
/// card is the committed selection.
pub fn card_lines<'a>(item: &Item, inner_width: u16, opacity: f32, with_button: bool, colors: &Colors) -> Vec<Line<'a>> {
    let style = colors.faded_style(opacity);
    let wrap_width = inner_width.max(1) as usize;
    let mut lines: Vec<Line> = textwrap::wrap(&item.description, wrap_width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l.into_owned(), style)))
        .collect();
    if with_button {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(EXPLORE_LABEL, colors.button_style)));
    }
    lines
}

/// Lower strip: one card per visible place, height and opacity driven by
/// the places scroll signal.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = theme_current();
    let block = Block::default().borders(Borders::NONE).style(colors.base_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let list = &app.places;
    let ranges = &app.settings.visuals;
    let width = list.snap_width();
    let offset = list.offset();
    let viewport = inner.width as f32;
    // The start sentinel fills the padding, so the first card sits right after it.
    let padding = app.metrics.place_padding();
    let committable = app.committable_place().map(|p| p.id);

    for index in list.visible_range(viewport) {
        let Some(item) = list.sequence().real(index) else {
            continue;
        };
        let left = padding + (index as f32 - 1.0) * width - offset + 1.0;
        let Some(columns) = clip_columns(inner, left, (width - 2.0).max(1.0)) else {
            continue;
        };
        let visual = place_visual(offset, index, width, app.metrics.viewport_height, ranges);
        let card = centre_rows(columns, visual.card_height.round().max(3.0) as u16);

        let style = colors.faded_style(visual.opacity);
        let card_block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Line::from(Span::styled(format!(" {} ", item.name), style)).centered());
        let body = card_block.inner(card);
        let with_button = committable == Some(item.id) && index == list.settled_index();
        let lines = card_lines(item, body.width, visual.opacity, with_button, &colors);

        f.render_widget(Clear, card);
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(card_block)
                .style(colors.base_style),
            card,
        );
    }
}
