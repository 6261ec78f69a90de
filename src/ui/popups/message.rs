//! Message popup rendering.
//!
//! A generic popup for informational messages, warnings and lookup errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
};

use crate::theme::Palette;
use crate::ui::helpers::render_popup_frame;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders a message popup sized to its content.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render to
/// * `area` - The terminal area to render within
/// * `message` - The message text to display (supports multi-line)
/// * `palette` - Colors of the active theme
pub fn render(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let message_lines = u16::try_from(message.lines().count().max(1)).unwrap_or(1);
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let longest_line = u16::try_from(longest_line).unwrap_or(u16::MAX);

    let popup_width = 40.max(longest_line.saturating_add(6)).min(area.width * 8 / 10);
    let popup_height = 7.max(message_lines + 6);
    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let content = render_popup_frame(
        frame,
        popup_area,
        "Message",
        &[("Esc", "Close"), ("Enter", "Close")],
        palette,
    );

    let text_area = Rect::new(
        content.x + 1,
        content.y + 1,
        content.width.saturating_sub(2),
        content.height.saturating_sub(1),
    );
    let prompt = Paragraph::new(message)
        .style(palette.base_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, text_area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_message_popup(mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| {
                render(
                    frame,
                    frame.area(),
                    "Nothing found by nickname: ghost",
                    &Palette::DARK,
                );
            })
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains(" Message "));
        assert!(text.contains("Nothing found by nickname: ghost"));
        assert!(text.contains("Esc:Close"));
    }

    #[test]
    fn test_multiline_message_in_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal
            .draw(|frame| {
                render(frame, frame.area(), "line one\nline two\nline three", &Palette::LIGHT);
            })
            .unwrap();
        assert_eq!(terminal.backend().buffer().area().width, 30);
    }
}
