//! Help popup showing all keybindings organized by page.
//!
//! Scrollable with ↑/↓. Opened with `?`, closed with Esc, `q` or `?`.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::Palette;
use crate::ui::helpers::section_title;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Keybinding Data
// ============================================================================

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("q", "Quit"),
            ("?", "Toggle help"),
            ("1-5", "Jump to page"),
            ("Tab / S-Tab", "Next / previous page"),
            ("t", "Toggle theme"),
            ("↑↓ / j k", "Move selection"),
            ("Enter", "Open"),
            ("Ctrl+C", "Quit immediately"),
        ],
    ),
    (
        "Search",
        &[
            ("/ or s", "Focus search"),
            ("Enter", "Check counterparty"),
            ("Tab", "Cycle search type"),
            ("↑ / ↓", "Search history"),
            ("Esc", "Leave search"),
            ("y", "Copy selected UID"),
            ("f", "Leave feedback"),
        ],
    ),
    (
        "Deals",
        &[
            ("s", "My / team deals"),
            ("f", "Cycle status filter"),
            ("e", "Cycle exchange filter"),
            ("r", "Review deal"),
            ("c", "Check counterparty"),
        ],
    ),
    (
        "Team",
        &[
            ("← / →", "Switch tab"),
            ("n", "New message or note"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("u", "Unpin message"),
            ("i", "Invite member"),
        ],
    ),
    (
        "Statistics",
        &[
            ("← / →", "My / team"),
            ("r", "Cycle range"),
            ("c", "Custom range"),
        ],
    ),
    (
        "Settings",
        &[
            ("Enter", "Buy selected plan"),
            ("x", "Cancel subscription"),
            ("l", "Toggle label language"),
            ("f", "Leave feedback"),
            ("s / m", "Support via Telegram / email"),
        ],
    ),
];

// ============================================================================
// Public API
// ============================================================================

/// Renders the help popup.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render to
/// * `area` - The terminal area to render within
/// * `scroll_offset` - The current scroll position (in lines), clamped here
/// * `palette` - Colors of the active theme
pub fn render(frame: &mut Frame, area: Rect, scroll_offset: u16, palette: &Palette) {
    let width = (area.width * 7 / 10).max(50).min(area.width);
    let height = (area.height * 8 / 10).max(20).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(" Help (? to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.focused_border_style())
        .style(palette.base_style());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = Vec::new();
    for (title, bindings) in HELP_SECTIONS {
        lines.push(section_title(title, palette));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<14}"), palette.key_style()),
                Span::styled(*description, Style::new().fg(palette.text)),
            ]));
        }
        lines.push(Line::default());
    }

    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(inner.height);
    let scroll = scroll_offset.min(max_scroll);

    let text_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        text_area,
    );

    if max_scroll > 0 {
        render_scroll_indicator(frame, popup_area, scroll, max_scroll, palette);
    }
}

/// Bottom-right marker: top, middle or end of the list.
fn render_scroll_indicator(
    frame: &mut Frame,
    popup_area: Rect,
    scroll: u16,
    max_scroll: u16,
    palette: &Palette,
) {
    let indicator = if scroll >= max_scroll {
        "━"
    } else if scroll == 0 {
        "┯"
    } else {
        "╂"
    };
    let indicator_area = Rect::new(
        popup_area.right().saturating_sub(2),
        popup_area.bottom().saturating_sub(1),
        1,
        1,
    );
    frame.render_widget(
        Paragraph::new(indicator).style(palette.muted_style()),
        indicator_area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal, test_terminal_80x24};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_help_lists_sections(mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| render(frame, frame.area(), 0, &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("Help (? to close)"));
        assert!(text.contains("Global"));
        assert!(text.contains("Check counterparty"));
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    #[case(500)]
    fn test_help_scroll_is_clamped(
        mut test_terminal_80x24: Terminal<TestBackend>,
        #[case] scroll: u16,
    ) {
        test_terminal_80x24
            .draw(|frame| render(frame, frame.area(), scroll, &Palette::LIGHT))
            .unwrap();
        let text = buffer_text(test_terminal_80x24.backend().buffer());
        assert!(text.contains("Help (? to close)"));
        if scroll == 500 {
            assert!(text.contains("Cancel subscription"));
        }
    }

    #[test]
    fn test_help_sections_not_empty() {
        for (name, bindings) in HELP_SECTIONS {
            assert!(!name.is_empty());
            assert!(!bindings.is_empty());
        }
    }
}
