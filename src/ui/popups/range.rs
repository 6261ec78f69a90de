//! Custom date range for statistics.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{RangeField, RangeForm};
use crate::theme::Palette;
use crate::ui::helpers::render_popup_frame;
use crate::ui::layout::centered_popup_area;

fn field_line(label: &str, value: &str, focused: bool, palette: &Palette) -> Line<'static> {
    let marker = if focused { "› " } else { "  " };
    let shown = if value.is_empty() && !focused {
        Span::styled("dd.mm.yyyy", palette.muted_style())
    } else {
        let cursor = if focused { "▏" } else { "" };
        Span::styled(format!("{value}{cursor}"), Style::new().fg(palette.text))
    };
    Line::from(vec![
        Span::styled(marker, palette.key_style()),
        Span::styled(format!("{label:<6}"), palette.muted_style()),
        shown,
    ])
}

pub fn render(frame: &mut Frame, area: Rect, form: &RangeForm, palette: &Palette) {
    let popup_area = centered_popup_area(area, 44, 9);
    let content = render_popup_frame(
        frame,
        popup_area,
        "Custom range",
        &[("Tab", "Field"), ("Enter", "Apply"), ("Esc", "Cancel")],
        palette,
    );
    let lines = vec![
        field_line("From", &form.from, form.field == RangeField::From, palette),
        field_line("To", &form.to, form.field == RangeField::To, palette),
    ];
    let text_area = Rect::new(
        content.x + 1,
        content.y + 1,
        content.width.saturating_sub(2),
        content.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines), text_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_range_form(mut test_terminal: Terminal<TestBackend>) {
        let form = RangeForm {
            from: "01.01.2026".to_string(),
            to: String::new(),
            field: RangeField::From,
        };
        test_terminal
            .draw(|frame| render(frame, frame.area(), &form, &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("› From  01.01.2026"));
        assert!(text.contains("  To    dd.mm.yyyy"));
    }
}
