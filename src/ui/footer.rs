//! Footer: page tabs with their number keys, and key hints for the current
//! page. Pages the plan does not open carry a lock marker.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, Page, TeamTab};
use crate::theme::Palette;

use super::helpers::key_hints;

/// Appended to pages the plan does not open.
pub const LOCK_MARKER: &str = " ⊘";

// ============================================================================
// Footer Rendering
// ============================================================================

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if area.height == 0 {
        return;
    }

    let tabs_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(page_tabs(app, palette)).alignment(Alignment::Center),
        tabs_area,
    );

    if area.height > 1 {
        let hints_area = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(key_hints(page_hints(app), palette)).alignment(Alignment::Center),
            hints_area,
        );
    }
}

fn page_tabs(app: &App, palette: &Palette) -> Line<'static> {
    let caps = app.data.capabilities();
    let mut spans = Vec::new();
    for (i, page) in Page::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", palette.border_style()));
        }
        let lock = if page.is_unlocked(&caps) { "" } else { LOCK_MARKER };
        let label = format!("{} {}{lock}", page.index() + 1, page.as_str());
        let style = if *page == app.nav.page {
            palette.key_style().add_modifier(Modifier::REVERSED)
        } else {
            palette.muted_style()
        };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans)
}

/// Hints for the current page, shortened when the page is locked.
fn page_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    if !app.current_page_unlocked() {
        return &[("Tab", "Page"), ("5", "Settings"), ("?", "Help"), ("q", "Quit")];
    }
    match app.nav.page {
        Page::Home if app.ui.search.focused => &[
            ("Enter", "Search"),
            ("Tab", "Type"),
            ("↑↓", "History"),
            ("Esc", "Leave"),
        ],
        Page::Home => &[
            ("/", "Search"),
            ("Enter", "Open"),
            ("y", "Copy"),
            ("f", "Feedback"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        Page::Deals => &[
            ("Enter", "Details"),
            ("s", "Scope"),
            ("f", "Status"),
            ("e", "Exchange"),
            ("r", "Review"),
            ("c", "Counterparty"),
        ],
        Page::Team => match app.nav.team_tab {
            TeamTab::Members => &[("←→", "Tab"), ("i", "Invite"), ("d", "Remove"), ("?", "Help")],
            TeamTab::Chat => &[
                ("←→", "Tab"),
                ("n", "Send"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("u", "Unpin"),
            ],
            TeamTab::Notes => &[("←→", "Tab"), ("n", "Add"), ("e", "Edit"), ("d", "Delete")],
        },
        Page::Statistics => &[
            ("←→", "My/Team"),
            ("r", "Range"),
            ("c", "Custom"),
            ("Enter", "Member"),
        ],
        Page::Settings => &[
            ("Enter", "Choose plan"),
            ("x", "Cancel"),
            ("t", "Theme"),
            ("l", "Labels"),
            ("f", "Feedback"),
        ],
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Plan;
    use crate::test_utils::{AppMother, buffer_text};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 2)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app, &Palette::DARK))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_free_plan_marks_locked_pages() {
        let app = AppMother::fresh();
        let text = draw(&app);
        assert!(text.contains("1 Home"));
        assert!(text.contains("2 Deals ⊘"));
        assert!(text.contains("3 Team ⊘"));
        assert!(!text.contains("Settings ⊘"));
        assert!(text.contains("/:Search"));
    }

    #[test]
    fn test_pro_plan_unlocks_everything() {
        let mut app = AppMother::on_plan(Plan::Pro);
        app.nav.go_to(Page::Deals);
        let text = draw(&app);
        assert!(!text.contains(LOCK_MARKER));
        assert!(text.contains("r:Review"));
    }

    #[test]
    fn test_locked_page_hints() {
        let mut app = AppMother::fresh();
        app.nav.go_to(Page::Team);
        let text = draw(&app);
        assert!(text.contains("5:Settings"));
        assert!(!text.contains("i:Invite"));
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        let app = AppMother::fresh();
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &app, &Palette::DARK))
            .unwrap();
    }
}
