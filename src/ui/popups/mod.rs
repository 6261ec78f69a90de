//! Popup rendering modules.
//!
//! Each popup is drawn centered over the page; only one is active at a
//! time, selected by [`PopupState`].

pub mod confirm;
pub mod counterparty;
pub mod deal_detail;
pub mod feedback;
pub mod help;
pub mod invite;
pub mod member;
pub mod message;
pub mod payment;
pub mod range;
pub mod results;
pub mod review;
pub mod text_input;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, PopupState};
use crate::theme::Palette;

/// Draws the active popup, if any.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    match &app.ui.popup_state {
        PopupState::None => {}
        PopupState::Message(text) => message::render(frame, area, text, palette),
        PopupState::ConfirmQuit => confirm::render_quit(frame, area, palette),
        PopupState::Confirm(action) => confirm::render_action(frame, area, action, palette),
        PopupState::Counterparty(profile) => counterparty::render(frame, area, profile, palette),
        PopupState::SearchResults { results, selected } => {
            results::render(frame, area, results, *selected, palette);
        }
        PopupState::Feedback(form) => feedback::render(frame, area, form, palette),
        PopupState::DealReview(form) => review::render(frame, area, form, palette),
        PopupState::DealDetail(id) => {
            deal_detail::render(frame, area, app.data.find_deal(id).as_ref(), palette);
        }
        PopupState::TextInput { target, input } => {
            text_input::render(frame, area, *target, input, palette);
        }
        PopupState::Payment(payment) => payment::render(frame, area, payment, palette),
        PopupState::Invite(code) => invite::render(frame, area, code, palette),
        PopupState::MemberDrawer(member) => member::render(frame, area, member, palette),
        PopupState::RangeForm(form) => range::render(frame, area, form, palette),
    }
}
