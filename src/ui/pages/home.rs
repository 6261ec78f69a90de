//! Home page: the counterparty search bar, its live classification and the
//! results of the last lookup.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{ListItem, Paragraph, Wrap},
};

use crate::client::search_hint;
use crate::constants::FEEDBACK_REMINDER;
use crate::domain::CounterpartyProfile;
use crate::search::{SearchType, label_long_in, label_short_in};
use crate::state::App;
use crate::theme::{Palette, WARNING_COLOR};
use crate::ui::helpers::{create_border_block, risk_level_style, section_title};
use crate::ui::layout::calculate_home_layout;

use super::render_list;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let layout = calculate_home_layout(area);

    render_search_bar(frame, layout.search, app, palette);
    render_hint(frame, layout.hint, app, palette);

    if app.data.results.is_empty() {
        render_welcome(frame, layout.content, app, palette);
    } else {
        render_results(frame, layout.content, app, palette);
    }
}

// ============================================================================
// Search Bar
// ============================================================================

fn render_search_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let search = &app.ui.search;
    let block = create_border_block("Counterparty search", search.focused, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let badge = match search.effective_type() {
        Some(search_type) => format!("[{}]", label_short_in(search_type, app.config.locale)),
        None => "[Auto]".to_string(),
    };
    let badge_width = u16::try_from(badge.chars().count() + 1).unwrap_or(0);

    let mut spans = vec![
        Span::styled(badge, palette.key_style()),
        Span::raw(" "),
    ];
    if search.input.is_empty() && !search.focused {
        spans.push(Span::styled(
            "Press / to search by UID, phone, card, name, nickname or link",
            palette.muted_style(),
        ));
    } else {
        spans.push(Span::styled(search.input.clone(), Style::new().fg(palette.text)));
    }
    if search.loading {
        let frame_idx = usize::try_from(app.animation_tick % 4).unwrap_or(0);
        spans.push(Span::styled(
            format!("  {} searching", SPINNER[frame_idx]),
            palette.muted_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    if search.focused {
        let typed = search.input.get(..search.cursor).unwrap_or(&search.input);
        let offset = u16::try_from(typed.chars().count()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(badge_width)
            .saturating_add(offset)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn render_hint(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = if app.data.feedback.is_none() {
        Line::from(Span::styled(
            format!("  {FEEDBACK_REMINDER}"),
            Style::new().fg(WARNING_COLOR),
        ))
    } else if app.ui.search.input.trim().is_empty() {
        Line::default()
    } else {
        Line::from(Span::styled(
            format!("  {}", search_hint(&app.ui.search.parsed())),
            palette.muted_style(),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

// ============================================================================
// Content
// ============================================================================

fn result_item(profile: &CounterpartyProfile, palette: &Palette) -> ListItem<'static> {
    let level = profile.risk_level();
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<18}", profile.nickname),
            Style::new().fg(palette.text),
        ),
        Span::styled(
            format!("{:<8}", profile.exchange.as_str()),
            Style::new().fg(profile.exchange.color()),
        ),
        Span::styled(format!("UID {:<12}", profile.uid), palette.muted_style()),
        Span::styled(format!("{:>3}/100 ", profile.score), Style::new().fg(palette.text)),
        Span::styled(level.as_str(), risk_level_style(level)),
    ]))
}

fn render_results(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = match &app.data.last_query {
        Some(query) => format!(
            "Results {}: {} ({})",
            label_long_in(query.search_type, app.config.locale),
            query.normalized,
            app.data.results.len()
        ),
        None => format!("Results ({})", app.data.results.len()),
    };
    let items = app
        .data
        .results
        .iter()
        .map(|p| result_item(p, palette))
        .collect();
    render_list(frame, area, &title, items, app.nav.selected_result, palette);
}

fn render_welcome(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = create_border_block("Check a counterparty", false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Checks made: ", palette.muted_style()),
            Span::styled(app.data.checks.to_string(), palette.key_style()),
        ]),
        Line::default(),
        section_title("Search by", palette),
    ];
    for search_type in SearchType::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", label_short_in(search_type, app.config.locale)),
                palette.key_style(),
            ),
            Span::styled(example(search_type), palette.muted_style()),
        ]));
    }

    if !app.ui.search.history.is_empty() {
        lines.push(Line::default());
        lines.push(section_title("Recent searches", palette));
        for query in app.ui.search.history.iter().take(5) {
            lines.push(Line::from(Span::styled(
                format!("  {query}"),
                Style::new().fg(palette.text),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

const fn example(search_type: SearchType) -> &'static str {
    match search_type {
        SearchType::Uid => "132465789",
        SearchType::Phone => "+7 (999) 123-45-67",
        SearchType::Card => "4276 1234 1234 1234",
        SearchType::Fio => "Иванов Иван Иванович",
        SearchType::Nickname => "billigans",
        SearchType::ProfileUrl => "https://www.bybit.com/profile/123",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Locale, classify};
    use crate::test_utils::{AppMother, ProfileMother, buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, app: &App) -> String {
        terminal
            .draw(|frame| render(frame, frame.area(), app, &Palette::DARK))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[rstest]
    fn test_fresh_home_reminds_about_feedback(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::fresh();
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains(FEEDBACK_REMINDER));
        assert!(text.contains("[Auto]"));
        assert!(text.contains("Checks made: 0"));
    }

    #[rstest]
    fn test_typing_shows_detected_type(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::onboarded();
        app.ui.search.focus();
        app.ui.search.set_input("8 (999) 123-45-67");
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("[Phone] 8 (999) 123-45-67"));
        assert!(text.contains("Search by phone: +79991234567"));
        assert!(!text.contains(FEEDBACK_REMINDER));
    }

    #[rstest]
    fn test_badge_follows_locale(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::onboarded();
        app.config.locale = Locale::Ru;
        app.ui.search.set_input("4276 1234 1234 1234");
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("[Карта]"));
    }

    #[rstest]
    fn test_results_list(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::onboarded();
        app.data.last_query = Some(classify("+79991234567"));
        app.data.results = vec![ProfileMother::billigans(), ProfileMother::crypto_king()];
        app.nav.selected_result = 1;
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("Results by phone: +79991234567 (2)"));
        assert!(text.contains("billigans"));
        assert!(text.contains("▶ crypto_king"));
    }

    #[rstest]
    fn test_recent_searches(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::onboarded();
        app.ui.search.add_to_history("@billigans");
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("Recent searches"));
        assert!(text.contains("@billigans"));
    }
}
