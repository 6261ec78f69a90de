//! Single-line prompt for chat messages and notes.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::state::TextTarget;
use crate::theme::Palette;
use crate::ui::helpers::render_popup_frame;
use crate::ui::layout::centered_popup_area;

pub fn render(frame: &mut Frame, area: Rect, target: TextTarget, input: &str, palette: &Palette) {
    let popup_area = centered_popup_area(area, 64, 8);
    let content = render_popup_frame(
        frame,
        popup_area,
        target.title(),
        &[("Enter", "Save"), ("Esc", "Cancel")],
        palette,
    );
    let line = Line::from(vec![
        Span::styled("› ", palette.key_style()),
        Span::styled(format!("{input}▏"), Style::new().fg(palette.text)),
    ]);
    let text_area = Rect::new(
        content.x + 1,
        content.y + 1,
        content.width.saturating_sub(2),
        content.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: false }), text_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case(TextTarget::SendMessage, "New message")]
    #[case(TextTarget::EditNote(2), "Edit note")]
    fn test_prompt_title(
        mut test_terminal: Terminal<TestBackend>,
        #[case] target: TextTarget,
        #[case] title: &str,
    ) {
        test_terminal
            .draw(|frame| render(frame, frame.area(), target, "hello", &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains(title));
        assert!(text.contains("› hello▏"));
    }
}
