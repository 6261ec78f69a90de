//! Team invite code.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Palette;
use crate::ui::helpers::render_popup_frame;
use crate::ui::layout::centered_popup_area;

pub fn render(frame: &mut Frame, area: Rect, code: &str, palette: &Palette) {
    let popup_area = centered_popup_area(area, 52, 9);
    let content = render_popup_frame(
        frame,
        popup_area,
        "Invite to team",
        &[("c", "Copy"), ("Esc", "Close")],
        palette,
    );
    let lines = vec![
        Line::from(Span::styled(
            "Share this code with a teammate:",
            palette.muted_style(),
        )),
        Line::default(),
        Line::from(Span::styled(code.to_string(), palette.focused_title_style())),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        content,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_invite_code(mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| render(frame, frame.area(), "LOUPE-7K3QX2", &Palette::LIGHT))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("Invite to team"));
        assert!(text.contains("LOUPE-7K3QX2"));
        assert!(text.contains("c:Copy"));
    }
}
