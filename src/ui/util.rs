use ratatui::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;

/// Cut `s` to at most `max` grapheme clusters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    let graphemes: Vec<&str> = s.graphemes(true).collect();
    if graphemes.len() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = graphemes[..max - 1].concat();
    out.push('…');
    out
}

/// Horizontal slice of `area` starting `left` cells from its left edge and
/// `width` cells wide, clipped to `area`. `None` when nothing is visible.
pub fn clip_columns(area: Rect, left: f32, width: f32) -> Option<Rect> {
    let x0 = (area.x as f32 + left).round();
    let x1 = (area.x as f32 + left + width).round();
    let lo = x0.max(area.x as f32);
    let hi = x1.min(area.right() as f32);
    if hi <= lo {
        return None;
    }
    Some(Rect::new(lo as u16, area.y, (hi - lo) as u16, area.height))
}

/// `height` rows of `area`, vertically centred.
pub fn centre_rows(area: Rect, height: u16) -> Rect {
    let h = height.min(area.height);
    let y = area.y + (area.height - h) / 2;
    Rect::new(area.x, y, area.width, h)
}
