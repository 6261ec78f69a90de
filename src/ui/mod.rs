//! UI rendering for the LOUPE TUI.
//!
//! # Module Structure
//!
//! - `pages` - The five main pages (home, deals, team, statistics, settings)
//! - `popups` - Modal dialogs (counterparty card, forms, payment, help)
//! - `components` - Reusable widgets (tabs, toast, locked notice)
//! - `layout` - Layout calculations and structs
//! - `header` / `footer` - Brand bar, page tabs and key hints
//! - `helpers` - Shared styled blocks and lines

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod pages;
pub mod popups;

use ratatui::{Frame, widgets::Block};

use crate::state::App;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws one frame: page chrome, the active page, then overlays.
///
/// Overlays stack in this order: popup, help, toast.
///
/// # Arguments
///
/// * `app` - The application state containing all data to render
/// * `frame` - The ratatui frame to render to
pub fn render(app: &App, frame: &mut Frame) {
    let palette = app.config.theme.palette();
    let size = frame.area();
    frame.render_widget(Block::new().style(palette.base_style()), size);

    let layout = layout::calculate_app_layout(size);
    header::render(frame, layout.header, app, &palette);
    pages::render(frame, layout.main, app, &palette);
    footer::render(frame, layout.footer, app, &palette);

    popups::render(frame, size, app, &palette);
    if app.ui.show_help {
        popups::help::render(frame, size, app.ui.help_scroll_offset, &palette);
    }
    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message, &palette);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Plan;
    use crate::state::{Page, PaymentState, PopupState, RangeForm, TextTarget};
    use crate::test_utils::{
        AppMother, DealMother, ProfileMother, buffer_text, test_terminal, test_terminal_80x24,
    };
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, app: &App) -> String {
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[rstest]
    fn test_every_page_renders(mut test_terminal_80x24: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Pro);
        for page in Page::ALL {
            app.nav.page = page;
            let text = draw(&mut test_terminal_80x24, &app);
            assert!(text.contains("LOUPE"));
            assert!(text.contains(page.as_str()));
        }
    }

    #[rstest]
    fn test_locked_page_on_free_plan(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Free);
        app.nav.page = Page::Team;
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("⊘ Locked"));
    }

    #[rstest]
    fn test_every_popup_renders(mut test_terminal_80x24: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Pro);
        let deal = DealMother::basic("1");
        let popups = vec![
            PopupState::Message("Saved".to_string()),
            PopupState::ConfirmQuit,
            PopupState::Counterparty(Box::new(ProfileMother::billigans())),
            PopupState::SearchResults {
                results: vec![ProfileMother::billigans(), ProfileMother::crypto_king()],
                selected: 0,
            },
            PopupState::DealDetail(deal.id.clone()),
            PopupState::TextInput {
                target: TextTarget::AddNote,
                input: String::new(),
            },
            PopupState::Payment(PaymentState::new(Plan::Basic)),
            PopupState::Invite("LOUPE-TEST".to_string()),
            PopupState::RangeForm(RangeForm::default()),
        ];
        for popup in popups {
            app.ui.popup_state = popup;
            draw(&mut test_terminal_80x24, &app);
        }
    }

    #[rstest]
    fn test_help_and_toast_overlay(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::onboarded();
        app.ui.show_help = true;
        app.ui.toast = Some(("[+] Copied".to_string(), 5));
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("Help (? to close)"));
        assert!(text.contains("[+] Copied"));
    }
}
