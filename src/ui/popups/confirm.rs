//! Yes/no confirmations: quitting and destructive actions.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
};

use crate::state::ConfirmAction;
use crate::theme::Palette;
use crate::ui::helpers::render_popup_frame;
use crate::ui::layout::centered_popup_area;

const HINTS: &[(&str, &str)] = &[("y", "Yes"), ("n", "No"), ("Esc", "Cancel")];

pub fn render_quit(frame: &mut Frame, area: Rect, palette: &Palette) {
    render_prompt(frame, area, "Confirm Quit", "Close LOUPE?", palette);
}

pub fn render_action(frame: &mut Frame, area: Rect, action: &ConfirmAction, palette: &Palette) {
    render_prompt(frame, area, "Confirm", &action.prompt(), palette);
}

fn render_prompt(frame: &mut Frame, area: Rect, title: &str, prompt: &str, palette: &Palette) {
    let width = u16::try_from(prompt.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(8)
        .max(40);
    let popup_area = centered_popup_area(area, width, 7);
    let content = render_popup_frame(frame, popup_area, title, HINTS, palette);

    let message_area = Rect::new(content.x, content.y + 1, content.width, 1);
    frame.render_widget(
        Paragraph::new(prompt.to_string())
            .style(palette.base_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_quit_prompt(mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| render_quit(frame, frame.area(), &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("Close LOUPE?"));
        assert!(text.contains("y:Yes  n:No  Esc:Cancel"));
    }

    #[rstest]
    fn test_action_prompt(mut test_terminal: Terminal<TestBackend>) {
        let action = ConfirmAction::RemoveMember {
            id: "U-10002".to_string(),
            username: "@team_member1".to_string(),
        };
        test_terminal
            .draw(|frame| render_action(frame, frame.area(), &action, &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("Remove @team_member1 from the team?"));
    }
}
