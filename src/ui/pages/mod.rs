//! Page rendering.
//!
//! Each page draws into the main area between header and footer. Pages the
//! current plan does not open show the locked notice instead.

pub mod deals;
pub mod home;
pub mod settings;
pub mod statistics;
pub mod team;

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{List, ListItem, ListState},
};

use crate::state::{App, Page};
use crate::theme::Palette;

use super::components::render_locked_notice;
use super::helpers::create_border_block;

/// Draws the active page.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if !app.current_page_unlocked() {
        render_locked_notice(frame, area, app.nav.page, app.data.plan.as_str(), palette);
        return;
    }

    match app.nav.page {
        Page::Home => home::render(frame, area, app, palette),
        Page::Deals => deals::render(frame, area, app, palette),
        Page::Team => team::render(frame, area, app, palette),
        Page::Statistics => statistics::render(frame, area, app, palette),
        Page::Settings => settings::render(frame, area, app, palette),
    }
}

/// A bordered, selectable list. `selected` is ignored for empty lists.
pub(super) fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem<'static>>,
    selected: usize,
    palette: &Palette,
) {
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected.min(items.len() - 1)));
    }

    let list = List::new(items)
        .block(create_border_block(title, true, palette))
        .highlight_style(palette.selected_style())
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut state);
}
