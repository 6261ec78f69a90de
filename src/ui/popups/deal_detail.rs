//! Expanded deal: amounts, risk reason, history and reviews.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::domain::Deal;
use crate::theme::Palette;
use crate::ui::helpers::{
    deal_status_style, label_value, render_popup_frame, risk_chip_style, section_title, stars,
};
use crate::ui::layout::centered_popup_area;

const LABEL_WIDTH: usize = 14;

fn detail_lines(deal: &Deal, palette: &Palette) -> Vec<Line<'static>> {
    let chip = deal.risk_chip();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", "Status"), palette.muted_style()),
            Span::styled(deal.status.as_str(), deal_status_style(deal.status, palette)),
        ]),
        label_value(
            "Exchange",
            format!("{} · {}", deal.exchange.as_str(), deal.side.as_str()),
            LABEL_WIDTH,
            palette,
        ),
        label_value(
            "Counterparty",
            format!("{} (UID {})", deal.counterparty, deal.uid),
            LABEL_WIDTH,
            palette,
        ),
        label_value(
            "Amount",
            format!("{:.2} {}", deal.amount, deal.currency),
            LABEL_WIDTH,
            palette,
        ),
        label_value("Rate", format!("{:.2} ₽", deal.rate), LABEL_WIDTH, palette),
        label_value("Total", format!("{:.2} ₽", deal.total), LABEL_WIDTH, palette),
        label_value("Date", deal.date.clone(), LABEL_WIDTH, palette),
    ];
    if let Some(owner) = &deal.owner {
        lines.push(label_value("Owner", owner.clone(), LABEL_WIDTH, palette));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<LABEL_WIDTH$}", "Risk"), palette.muted_style()),
        Span::styled(chip.as_str(), risk_chip_style(chip)),
        Span::styled(format!("  {}", deal.risk_reason()), palette.muted_style()),
    ]));

    lines.push(Line::default());
    lines.push(section_title("History", palette));
    for event in &deal.history {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", event.timestamp), palette.muted_style()),
            Span::styled(event.action.clone(), Style::new().fg(palette.text)),
        ]));
    }

    lines.push(Line::default());
    lines.push(section_title("Reviews", palette));
    if deal.reviews.is_empty() {
        let hint = if deal.can_review() {
            "No reviews yet. Press r to leave one."
        } else {
            "Reviews open once the deal is finished."
        };
        lines.push(Line::from(Span::styled(hint, palette.muted_style())));
    }
    for review in &deal.reviews {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", stars(review.rating)), palette.key_style()),
            Span::styled(format!("{}: ", review.author), palette.muted_style()),
            Span::styled(review.text.clone(), Style::new().fg(palette.text)),
        ]));
    }
    lines
}

/// Renders the deal, or a short notice when it no longer exists.
pub fn render(frame: &mut Frame, area: Rect, deal: Option<&Deal>, palette: &Palette) {
    let (title, lines) = match deal {
        Some(deal) => (format!("Deal #{}", deal.id), detail_lines(deal, palette)),
        None => (
            "Deal".to_string(),
            vec![Line::from(Span::styled("Deal not found", palette.muted_style()))],
        ),
    };
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(5);
    let popup_area = centered_popup_area(area, 76, height);
    let content = render_popup_frame(
        frame,
        popup_area,
        &title,
        &[("r", "Review"), ("c", "Counterparty"), ("Esc", "Close")],
        palette,
    );
    let text_area = Rect::new(
        content.x + 1,
        content.y,
        content.width.saturating_sub(2),
        content.height,
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), text_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DealReview, DealStatus};
    use crate::test_utils::{DealMother, buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, deal: Option<&Deal>) -> String {
        terminal
            .draw(|frame| render(frame, frame.area(), deal, &Palette::DARK))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[rstest]
    fn test_completed_deal(mut test_terminal: Terminal<TestBackend>) {
        let mut deal = DealMother::basic("42");
        deal.reviews.push(DealReview {
            author: "@me".to_string(),
            rating: 5,
            text: "Smooth".to_string(),
        });
        let text = draw(&mut test_terminal, Some(&deal));
        assert!(text.contains("Deal #42"));
        assert!(text.contains("trader123 (UID 987654321)"));
        assert!(text.contains("85640.00 ₽"));
        assert!(text.contains("Deal created"));
        assert!(text.contains("★★★★★ @me: Smooth"));
    }

    #[rstest]
    fn test_active_deal_review_hint(mut test_terminal: Terminal<TestBackend>) {
        let deal = DealMother::with_status(DealStatus::Active);
        let text = draw(&mut test_terminal, Some(&deal));
        assert!(text.contains("Reviews open once the deal is finished."));
    }

    #[rstest]
    fn test_risky_deal(mut test_terminal: Terminal<TestBackend>) {
        let deal = DealMother::with_risks(&["scam reported by team"]);
        let text = draw(&mut test_terminal, Some(&deal));
        assert!(text.contains("scam reported by team"));
    }

    #[rstest]
    fn test_missing_deal(mut test_terminal: Terminal<TestBackend>) {
        let text = draw(&mut test_terminal, None);
        assert!(text.contains("Deal not found"));
    }
}
