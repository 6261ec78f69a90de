//! Deals page: my or team deals with status and exchange filters.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{ListItem, Paragraph},
};

use crate::domain::{Deal, DealScope};
use crate::state::App;
use crate::theme::Palette;
use crate::ui::components::render_tabs;
use crate::ui::helpers::{create_border_block, deal_status_style, risk_chip_style};

use super::render_list;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let scope = app.nav.deal_scope;
    let selected_tab = match scope {
        DealScope::My => 0,
        DealScope::Team => 1,
    };
    render_tabs(
        frame,
        chunks[0],
        &[DealScope::My.as_str(), DealScope::Team.as_str()],
        selected_tab,
        palette,
    );
    frame.render_widget(Paragraph::new(summary_line(app, palette)), chunks[1]);

    let deals = app.data.visible_deals(scope, &app.nav.deal_filter);
    let title = format!("{} ({})", scope.as_str(), deals.len());
    if deals.is_empty() {
        let block = create_border_block(&title, true, palette);
        let inner = block.inner(chunks[2]);
        frame.render_widget(block, chunks[2]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No deals match the filters",
                palette.muted_style(),
            )),
            inner,
        );
        return;
    }

    let show_owner = scope == DealScope::Team;
    let items = deals
        .iter()
        .map(|deal| deal_item(deal, show_owner, palette))
        .collect();
    render_list(frame, chunks[2], &title, items, app.nav.selected_deal, palette);
}

fn summary_line(app: &App, palette: &Palette) -> Line<'static> {
    let summary = app.data.deal_summary(app.nav.deal_scope);
    let filter = &app.nav.deal_filter;
    let status = filter.status.map_or("All", |s| s.as_str());
    let exchange = filter.exchange.map_or("All", |e| e.as_str());

    Line::from(vec![
        Span::styled("  Total ", palette.muted_style()),
        Span::styled(summary.total.to_string(), palette.key_style()),
        Span::styled("  Active ", palette.muted_style()),
        Span::styled(summary.active.to_string(), palette.key_style()),
        Span::styled("   │  Status: ", palette.muted_style()),
        Span::styled(status.to_string(), Style::new().fg(palette.text)),
        Span::styled("  Exchange: ", palette.muted_style()),
        Span::styled(exchange.to_string(), Style::new().fg(palette.text)),
    ])
}

fn deal_item(deal: &Deal, show_owner: bool, palette: &Palette) -> ListItem<'static> {
    let chip = deal.risk_chip();
    let mut spans = vec![
        Span::styled(format!("#{:<4}", deal.id), palette.muted_style()),
        Span::styled(format!("{:<11}", deal.date), palette.muted_style()),
        Span::styled(
            format!("{:<7}", deal.exchange.as_str()),
            Style::new().fg(deal.exchange.color()),
        ),
        Span::styled(format!("{:<5}", deal.side.as_str()), Style::new().fg(palette.text)),
        Span::styled(
            format!("{:<15}", deal.counterparty),
            Style::new().fg(palette.text),
        ),
        Span::styled(
            format!("{:>9.2} {:<5}", deal.amount, deal.currency),
            Style::new().fg(palette.text),
        ),
        Span::styled(
            format!("{:<10}", deal.status.as_str()),
            deal_status_style(deal.status, palette),
        ),
        Span::styled(chip.as_str(), risk_chip_style(chip)),
    ];
    if show_owner && let Some(owner) = &deal.owner {
        spans.push(Span::styled(format!("  {owner}"), palette.muted_style()));
    }
    ListItem::new(Line::from(spans))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DealStatus, Exchange, Plan};
    use crate::test_utils::{AppMother, buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, app: &App) -> String {
        terminal
            .draw(|frame| render(frame, frame.area(), app, &Palette::DARK))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[rstest]
    fn test_my_deals_list(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::on_plan(Plan::Light);
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("My deals (5)"));
        assert!(text.contains("Total 5  Active 1"));
        assert!(text.contains("Status: All"));
        assert!(text.contains("billigans"));
        assert!(text.contains("▶ #1"));
    }

    #[rstest]
    fn test_filters_show_in_summary(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Light);
        app.nav.deal_filter.status = Some(DealStatus::Completed);
        app.nav.deal_filter.exchange = Some(Exchange::Bybit);
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("Status: Completed"));
        assert!(text.contains("Exchange: ByBit"));
        assert!(text.contains("My deals (2)"));
    }

    #[rstest]
    fn test_empty_filter_result(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Light);
        app.nav.deal_filter.exchange = Some(Exchange::Bitget);
        app.nav.deal_filter.status = Some(DealStatus::Dispute);
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("No deals match the filters"));
    }

    #[rstest]
    fn test_team_scope(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Pro);
        app.nav.deal_scope = DealScope::Team;
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("Team deals (7)"));
        assert!(text.contains("Total 7  Active 2"));
    }
}
