use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Palette;

/// Draws `labels` in one row, highlighting the one at `selected`.
pub fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    selected: usize,
    palette: &Palette,
) {
    let mut spans = vec![Span::raw(" ")];
    for (i, label) in labels.iter().enumerate() {
        let style = if i == selected {
            palette
                .key_style()
                .add_modifier(Modifier::UNDERLINED)
        } else {
            palette.muted_style()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
