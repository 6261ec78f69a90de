//! Layout calculations for the LOUPE TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, SEARCH_BAR_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Logo, rate and theme indicator.
    pub header: Rect,
    /// The active page.
    pub main: Rect,
    /// Page tabs and key hints.
    pub footer: Rect,
}

/// Home page split into the search bar, its hint line and the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub search: Rect,
    pub hint: Rect,
    pub content: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

#[must_use]
pub fn calculate_home_layout(area: Rect) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    HomeLayout {
        search: chunks[0],
        hint: chunks[1],
        content: chunks[2],
    }
}

/// A tab row on top of the remaining content.
#[must_use]
pub fn split_tabs(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Calculate a centered popup area.
///
/// The popup keeps a two-cell margin to the parent edges.
///
/// # Arguments
/// * `parent` - The parent area
/// * `width` - Desired popup width
/// * `height` - Desired popup height
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_app_layout_fills_area() {
        let layout = calculate_app_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.footer.bottom(), 40);
        assert_eq!(
            layout.header.height + layout.main.height + layout.footer.height,
            40
        );
    }

    #[test]
    fn test_home_layout() {
        let layout = calculate_home_layout(Rect::new(0, 3, 80, 20));
        assert_eq!(layout.search.height, SEARCH_BAR_HEIGHT);
        assert_eq!(layout.hint.y, 6);
        assert_eq!(layout.content.height, 16);
    }

    #[rstest]
    #[case::fits(Rect::new(0, 0, 100, 50), 40, 10, Rect::new(30, 20, 40, 10))]
    #[case::too_wide(Rect::new(0, 0, 30, 20), 60, 10, Rect::new(2, 5, 26, 10))]
    #[case::offset_parent(Rect::new(10, 5, 40, 20), 20, 6, Rect::new(20, 12, 20, 6))]
    fn test_centered_popup_area(
        #[case] parent: Rect,
        #[case] width: u16,
        #[case] height: u16,
        #[case] expected: Rect,
    ) {
        assert_eq!(centered_popup_area(parent, width, height), expected);
    }
}
