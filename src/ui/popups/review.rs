//! Review form for a finished deal.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::state::ReviewForm;
use crate::theme::{ERROR_COLOR, Palette};
use crate::ui::helpers::{label_value, render_popup_frame, stars};
use crate::ui::layout::centered_popup_area;

pub fn render(frame: &mut Frame, area: Rect, form: &ReviewForm, palette: &Palette) {
    let popup_area = centered_popup_area(area, 60, 11);
    let title = format!("Review deal #{}", form.deal_id);
    let content = render_popup_frame(
        frame,
        popup_area,
        &title,
        &[("←→", "Stars"), ("Enter", "Save"), ("Esc", "Cancel")],
        palette,
    );

    let mut lines = vec![
        label_value("Rating", stars(form.rating), 8, palette),
        Line::from(vec![
            Span::styled(format!("{:<8}", "Review"), palette.muted_style()),
            Span::styled(format!("{}▏", form.text), Style::new().fg(palette.text)),
        ]),
    ];
    if let Some(warning) = &form.warning {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            warning.clone(),
            Style::new().fg(ERROR_COLOR),
        )));
    }

    let text_area = Rect::new(
        content.x + 1,
        content.y + 1,
        content.width.saturating_sub(2),
        content.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), text_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_review_form(mut test_terminal: Terminal<TestBackend>) {
        let mut form = ReviewForm::new("3");
        form.decrease();
        form.text = "Slow appeal".to_string();
        form.warning = Some("Review text cannot be empty".to_string());
        test_terminal
            .draw(|frame| render(frame, frame.area(), &form, &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("Review deal #3"));
        assert!(text.contains("★★★★☆"));
        assert!(text.contains("Slow appeal"));
        assert!(text.contains("Review text cannot be empty"));
    }
}
