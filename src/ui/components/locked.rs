use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::state::Page;
use crate::theme::Palette;
use crate::ui::helpers::create_border_block;

/// Replaces a page the current plan does not open.
pub fn render_locked_notice(
    frame: &mut Frame,
    area: Rect,
    page: Page,
    current_plan: &str,
    palette: &Palette,
) {
    let block = create_border_block(page.as_str(), false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled("⊘ Locked", palette.focused_title_style())),
        Line::default(),
        Line::from(format!(
            "{} is not available on the {current_plan} plan.",
            page.as_str()
        )),
        Line::from(format!(
            "Upgrade to {} or higher in Settings.",
            page.required_plan()
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("5", palette.key_style()),
            Span::styled(":Open Settings", palette.muted_style()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, test_terminal_80x24};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_locked_notice_names_required_plan(mut test_terminal_80x24: Terminal<TestBackend>) {
        test_terminal_80x24
            .draw(|frame| {
                render_locked_notice(frame, frame.area(), Page::Team, "Light", &Palette::DARK);
            })
            .unwrap();

        let text = buffer_text(test_terminal_80x24.backend().buffer());
        assert!(text.contains("Team is not available on the Light plan."));
        assert!(text.contains("Upgrade to Basic or higher"));
    }
}
