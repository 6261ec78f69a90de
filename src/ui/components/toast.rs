//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner, above the footer. The
//! message prefix picks the color: `[+]` for success, `[x]` for errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, Palette, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;

const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Rows kept free at the bottom for the footer.
const TOAST_PADDING_BOTTOM: u16 = 3;

/// Borders plus one space on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render into
/// * `area` - The area within which to position the toast
/// * `message` - The message text to display
/// * `palette` - Colors of the active theme
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let toast_area = calculate_toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block(palette);
    frame.render_widget(toast_block.clone(), toast_area);

    let inner_area = toast_block.inner(toast_area);
    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(determine_text_color(message, palette)))
        .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width * 2 / 3)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(
        toast_x,
        toast_y,
        toast_width,
        TOAST_HEIGHT.min(area.height),
    )
}

#[must_use]
fn create_toast_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(palette.border_style())
        .style(Style::default().bg(palette.selected_bg))
}

#[must_use]
fn determine_text_color(message: &str, palette: &Palette) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        palette.text
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::normal(Rect::new(0, 0, 100, 50), "Test message")]
    #[case::long(Rect::new(0, 0, 100, 50), "A rather long message that should be constrained by the area")]
    #[case::short(Rect::new(0, 0, 100, 50), "Hi")]
    #[case::small_area(Rect::new(0, 0, 30, 10), "Test")]
    #[case::tiny_area(Rect::new(0, 0, 12, 2), "Tiny")]
    fn test_toast_stays_inside_area(#[case] area: Rect, #[case] message: &str) {
        let toast = calculate_toast_position(area, message);
        assert!(toast.right() <= area.right(), "{message}: x bounds");
        assert!(toast.bottom() <= area.bottom(), "{message}: y bounds");
        assert!(toast.width >= MIN_TOAST_WIDTH.min(area.width));
        assert!(toast.height <= TOAST_HEIGHT);
    }

    #[test]
    fn test_toast_keeps_footer_visible() {
        let toast = calculate_toast_position(Rect::new(0, 0, 100, 40), "[+] Copied");
        assert_eq!(toast.bottom(), 40 - TOAST_PADDING_BOTTOM);
    }

    #[rstest]
    #[case("[+] Review saved", SUCCESS_COLOR)]
    #[case("[x] Could not save", ERROR_COLOR)]
    #[case("Theme: Light", Palette::DARK.text)]
    #[case("", Palette::DARK.text)]
    fn test_text_color_by_prefix(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(determine_text_color(message, &Palette::DARK), expected);
    }

    #[test]
    fn test_render_toast_text() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] UID copied", &Palette::DARK))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("[+] UID copied"));
    }
}
