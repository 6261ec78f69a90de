//! Settings page: subscription plans, preferences and support links.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{ListItem, Paragraph, Wrap},
};

use crate::constants::{SUPPORT_EMAIL_URL, SUPPORT_TELEGRAM_URL};
use crate::domain::Plan;
use crate::state::App;
use crate::theme::{Palette, SUCCESS_COLOR};
use crate::ui::helpers::{create_border_block, label_value, section_title, stars};

use super::render_list;

const LABEL_WIDTH: usize = 12;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let items = Plan::ALL
        .iter()
        .map(|plan| plan_item(*plan, *plan == app.data.plan, palette))
        .collect();
    render_list(
        frame,
        columns[0],
        "Subscription",
        items,
        app.nav.selected_plan,
        palette,
    );

    render_preferences(frame, columns[1], app, palette);
}

fn price_label(plan: Plan) -> String {
    if plan == Plan::Free {
        "free".to_string()
    } else {
        format!("{} ₽/mo · {:.2} USDT", plan.price_rub(), plan.price_usdt())
    }
}

fn plan_item(plan: Plan, current: bool, palette: &Palette) -> ListItem<'static> {
    let mut header = vec![
        Span::styled(format!("{:<7}", plan.as_str()), palette.key_style()),
        Span::styled(price_label(plan), Style::new().fg(palette.text)),
    ];
    if current {
        header.push(Span::styled("  ✓ current", Style::new().fg(SUCCESS_COLOR)));
    }

    let mut lines = vec![Line::from(header)];
    lines.extend(
        plan.features()
            .iter()
            .map(|feature| Line::from(Span::styled(format!("  · {feature}"), palette.muted_style()))),
    );
    lines.push(Line::default());
    ListItem::new(lines)
}

fn render_preferences(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = create_border_block("Preferences", false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let feedback = app.data.feedback.as_ref().map_or_else(
        || "not left yet".to_string(),
        |f| format!("{} {}", stars(f.rating), f.text),
    );

    let lines = vec![
        section_title("Account", palette),
        label_value("Username", app.config.username.clone(), LABEL_WIDTH, palette),
        label_value("Team", app.data.team.name.clone(), LABEL_WIDTH, palette),
        label_value("Plan", app.data.plan.as_str(), LABEL_WIDTH, palette),
        label_value("Checks", app.data.checks.to_string(), LABEL_WIDTH, palette),
        Line::default(),
        section_title("Interface", palette),
        label_value(
            "Theme",
            format!("{} (t)", app.config.theme.as_str()),
            LABEL_WIDTH,
            palette,
        ),
        label_value(
            "Labels",
            format!("{} (l)", app.config.locale.as_str()),
            LABEL_WIDTH,
            palette,
        ),
        Line::default(),
        section_title("Feedback", palette),
        label_value("Yours", feedback, LABEL_WIDTH, palette),
        Line::default(),
        section_title("Support", palette),
        label_value("Telegram (s)", SUPPORT_TELEGRAM_URL, LABEL_WIDTH + 2, palette),
        label_value(
            "Email (m)",
            SUPPORT_EMAIL_URL.trim_start_matches("mailto:"),
            LABEL_WIDTH + 2,
            palette,
        ),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Locale;
    use crate::test_utils::{AppMother, buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, app: &App) -> String {
        terminal
            .draw(|frame| render(frame, frame.area(), app, &Palette::DARK))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(Plan::Free), "free");
        assert_eq!(price_label(Plan::Light), "990 ₽/mo · 11.56 USDT");
    }

    #[rstest]
    fn test_plans_and_current_marker(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::on_plan(Plan::Basic);
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("Free"));
        assert!(text.contains("Pro"));
        assert!(text.contains("✓ current"));
        assert!(text.contains("Team work (up to 3)"));
        let current_line = text.lines().find(|l| l.contains("✓ current")).unwrap();
        assert!(current_line.contains("Basic"));
    }

    #[rstest]
    fn test_preferences(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::fresh();
        app.config.locale = Locale::Ru;
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("@me"));
        assert!(text.contains("Arbitrage"));
        assert!(text.contains("ru (l)"));
        assert!(text.contains("not left yet"));
        assert!(text.contains("support@loupe.app"));
    }
}
