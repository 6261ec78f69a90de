//! Picker shown when one lookup matches several counterparties.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use crate::domain::CounterpartyProfile;
use crate::theme::Palette;
use crate::ui::helpers::{render_popup_frame, risk_level_style};
use crate::ui::layout::centered_popup_area;

/// Renders the result picker.
///
/// # Arguments
///
/// * `frame` - The Ratatui frame to render to
/// * `area` - The terminal area to render within
/// * `results` - Profiles matching the lookup
/// * `selected` - Index of the highlighted profile
/// * `palette` - Colors of the active theme
pub fn render(
    frame: &mut Frame,
    area: Rect,
    results: &[CounterpartyProfile],
    selected: usize,
    palette: &Palette,
) {
    let height = u16::try_from(results.len() * 2)
        .unwrap_or(u16::MAX)
        .saturating_add(6);
    let popup_area = centered_popup_area(area, 72, height);
    let title = format!("{} profiles found", results.len());
    let content = render_popup_frame(
        frame,
        popup_area,
        &title,
        &[("↑↓", "Move"), ("Enter", "Open"), ("Esc", "Close")],
        palette,
    );

    let items: Vec<ListItem> = results
        .iter()
        .map(|profile| {
            let level = profile.risk_level();
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:<18}", profile.nickname),
                        Style::new().fg(palette.text),
                    ),
                    Span::styled(
                        format!("{:<8}", profile.exchange.as_str()),
                        Style::new().fg(profile.exchange.color()),
                    ),
                    Span::styled(level.as_str(), risk_level_style(level)),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  UID {}  ·  {} deals  ·  {} complaints",
                        profile.uid, profile.deals_count, profile.complaints_count
                    ),
                    palette.muted_style(),
                )),
            ])
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected.min(items.len() - 1)));
    }
    let list = List::new(items)
        .highlight_style(palette.selected_style())
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, content, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ProfileMother, buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_picker_lists_profiles(mut test_terminal: Terminal<TestBackend>) {
        let results = vec![ProfileMother::billigans(), ProfileMother::crypto_king()];
        test_terminal
            .draw(|frame| render(frame, frame.area(), &results, 1, &Palette::DARK))
            .unwrap();
        let text = buffer_text(test_terminal.backend().buffer());
        assert!(text.contains("2 profiles found"));
        assert!(text.contains("  billigans"));
        assert!(text.contains("▶ crypto_king"));
        assert!(text.contains("UID 700800900"));
    }
}
