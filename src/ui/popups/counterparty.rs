//! Counterparty card: risk score, contacts and deal history of one profile.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::domain::{CounterpartyProfile, DealOutcome};
use crate::theme::{ERROR_COLOR, Palette, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::{label_value, render_popup_frame, risk_level_style, section_title};
use crate::ui::layout::centered_popup_area;

const LABEL_WIDTH: usize = 12;

/// `a, b, c`, or a dash for an empty list.
fn joined(values: &[String]) -> String {
    if values.is_empty() {
        "—".to_string()
    } else {
        values.join(", ")
    }
}

fn outcome_style(outcome: DealOutcome) -> Style {
    match outcome {
        DealOutcome::Success => Style::new().fg(SUCCESS_COLOR),
        DealOutcome::Cancelled => Style::new().fg(WARNING_COLOR),
        DealOutcome::Dispute => Style::new().fg(ERROR_COLOR),
    }
}

fn card_lines(profile: &CounterpartyProfile, palette: &Palette) -> Vec<Line<'static>> {
    let level = profile.risk_level();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(profile.nickname.clone(), palette.focused_title_style()),
            Span::raw("  "),
            Span::styled(
                profile.exchange.as_str(),
                Style::new().fg(profile.exchange.color()),
            ),
            Span::styled(format!("  UID {}", profile.uid), palette.muted_style()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}/100  ", profile.score), palette.key_style()),
            Span::styled(level.as_str(), risk_level_style(level)),
        ]),
        Line::default(),
        label_value("Deals", profile.deals_count.to_string(), LABEL_WIDTH, palette),
        label_value(
            "Complaints",
            profile.complaints_count.to_string(),
            LABEL_WIDTH,
            palette,
        ),
        label_value("Account age", profile.account_age.clone(), LABEL_WIDTH, palette),
        label_value("Checked", format!("{} times", profile.check_count), LABEL_WIDTH, palette),
        Line::default(),
        section_title("Details", palette),
        label_value("Phones", joined(&profile.phones), LABEL_WIDTH, palette),
        label_value("Cards", joined(&profile.masked_cards()), LABEL_WIDTH, palette),
        label_value("Names", joined(&profile.names), LABEL_WIDTH, palette),
        label_value("Banks", joined(&profile.banks), LABEL_WIDTH, palette),
    ];
    if !profile.tags.is_empty() {
        lines.push(label_value("Tags", joined(&profile.tags), LABEL_WIDTH, palette));
    }

    lines.push(Line::default());
    lines.push(section_title("Deal history", palette));
    if profile.deal_history.is_empty() {
        lines.push(Line::from(Span::styled("No deals yet", palette.muted_style())));
    }
    for entry in &profile.deal_history {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<11}", entry.date), palette.muted_style()),
            Span::styled(
                format!("{:<10}", entry.outcome.as_str()),
                outcome_style(entry.outcome),
            ),
            Span::styled(format!("{} ", entry.trader), Style::new().fg(palette.text)),
            Span::styled(format!("[{}] ", entry.tag), palette.key_style()),
            Span::styled(entry.comment.clone(), palette.muted_style()),
        ]));
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, profile: &CounterpartyProfile, palette: &Palette) {
    let lines = card_lines(profile, palette);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(5);
    let popup_area = centered_popup_area(area, 84, height);

    let content = render_popup_frame(
        frame,
        popup_area,
        "Counterparty",
        &[("Esc", "Close"), ("y", "Copy UID")],
        palette,
    );
    let text_area = Rect::new(
        content.x + 1,
        content.y,
        content.width.saturating_sub(2),
        content.height,
    );
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        text_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ProfileMother, buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[test]
    fn test_joined_placeholder() {
        assert_eq!(joined(&[]), "—");
        assert_eq!(joined(&["a".to_string(), "b".to_string()]), "a, b");
    }

    #[rstest]
    fn test_card_shows_risk_and_masked_cards(mut test_terminal: Terminal<TestBackend>) {
        let profile = ProfileMother::billigans();
        test_terminal
            .draw(|frame| render(frame, frame.area(), &profile, &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("billigans"));
        assert!(text.contains("UID 132465789"));
        assert!(text.contains("45/100"));
        assert!(text.contains("Medium risk"));
        assert!(text.contains("+79991234567"));
        assert!(text.contains("Deal history"));
        assert!(text.contains("y:Copy UID"));
        for card in &profile.cards {
            assert!(!text.contains(card.as_str()), "card must be masked");
        }
    }
}
