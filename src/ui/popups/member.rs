//! Drawer with one teammate's numbers for the selected range.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Paragraph, Wrap},
};

use crate::domain::MemberPerformance;
use crate::theme::Palette;
use crate::ui::helpers::{label_value, render_popup_frame};
use crate::ui::layout::centered_popup_area;

const LABEL_WIDTH: usize = 14;

pub fn render(frame: &mut Frame, area: Rect, member: &MemberPerformance, palette: &Palette) {
    let popup_area = centered_popup_area(area, 48, 12);
    let content = render_popup_frame(frame, popup_area, &member.username, &[("Esc", "Close")], palette);

    let lines = vec![
        label_value("Deals", member.deals.to_string(), LABEL_WIDTH, palette),
        label_value("Completed", member.completed.to_string(), LABEL_WIDTH, palette),
        label_value("Appeals", member.appeals.to_string(), LABEL_WIDTH, palette),
        label_value("Checks", member.checks.to_string(), LABEL_WIDTH, palette),
        label_value(
            "Completion",
            format!("{:.1}%", member.completion_rate()),
            LABEL_WIDTH,
            palette,
        ),
        label_value("Last active", member.last_active.clone(), LABEL_WIDTH, palette),
    ];
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
    fn test_member_drawer(mut test_terminal: Terminal<TestBackend>) {
        let member = MemberPerformance {
            id: "2".to_string(),
            username: "@team_member1".to_string(),
            deals: 40,
            completed: 30,
            appeals: 1,
            checks: 12,
            last_active: "5 minutes ago".to_string(),
        };
        test_terminal
            .draw(|frame| render(frame, frame.area(), &member, &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("@team_member1"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("5 minutes ago"));
    }
}
