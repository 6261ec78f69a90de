//! USDT payment dialog for a plan upgrade.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::domain::PaymentStatus;
use crate::state::PaymentState;
use crate::theme::{Palette, SUCCESS_COLOR, WARNING_COLOR};
use crate::ui::helpers::{label_value, render_popup_frame};
use crate::ui::layout::centered_popup_area;

const LABEL_WIDTH: usize = 10;

fn status_style(status: PaymentStatus, palette: &Palette) -> Style {
    match status {
        PaymentStatus::Pending => palette.muted_style(),
        PaymentStatus::Confirming => Style::new().fg(WARNING_COLOR),
        PaymentStatus::Confirmed => Style::new().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD),
    }
}

pub fn render(frame: &mut Frame, area: Rect, payment: &PaymentState, palette: &Palette) {
    let popup_area = centered_popup_area(area, 64, 14);
    let title = format!("Upgrade to {}", payment.plan.as_str());
    let hints: &[(&str, &str)] = match payment.status {
        PaymentStatus::Pending => &[
            ("←→", "Network"),
            ("c", "Copy"),
            ("Enter", "I have paid"),
            ("Esc", "Cancel"),
        ],
        PaymentStatus::Confirming | PaymentStatus::Confirmed => &[("c", "Copy")],
    };
    let content = render_popup_frame(frame, popup_area, &title, hints, palette);

    let network = if payment.status == PaymentStatus::Pending {
        format!("‹ {} ›", payment.network.as_str())
    } else {
        payment.network.as_str().to_string()
    };
    let lines = vec![
        label_value(
            "Amount",
            format!("{:.2} USDT", payment.plan.price_usdt()),
            LABEL_WIDTH,
            palette,
        ),
        label_value(
            "Price",
            format!("{} ₽/month", payment.plan.price_rub()),
            LABEL_WIDTH,
            palette,
        ),
        label_value("Network", network, LABEL_WIDTH, palette),
        Line::default(),
        Line::from(Span::styled("Send USDT to this wallet:", palette.muted_style())),
        Line::from(Span::styled(payment.network.wallet(), palette.key_style())),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", "Status"), palette.muted_style()),
            Span::styled(payment.status.as_str(), status_style(payment.status, palette)),
        ]),
    ];

    let text_area = Rect::new(
        content.x + 1,
        content.y + 1,
        content.width.saturating_sub(2),
        content.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), text_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PaymentNetwork, Plan};
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, payment: &PaymentState) -> String {
        terminal
            .draw(|frame| render(frame, frame.area(), payment, &Palette::DARK))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[rstest]
    fn test_pending_payment(mut test_terminal: Terminal<TestBackend>) {
        let payment = PaymentState::new(Plan::Light);
        let text = draw(&mut test_terminal, &payment);
        assert!(text.contains("Upgrade to Light"));
        assert!(text.contains("11.56 USDT"));
        assert!(text.contains("990 ₽/month"));
        assert!(text.contains("‹ TRC20 ›"));
        assert!(text.contains(PaymentNetwork::Trc20.wallet()));
        assert!(text.contains("Awaiting payment"));
        assert!(text.contains("Enter:I have paid"));
    }

    #[rstest]
    fn test_confirming_locks_network(mut test_terminal: Terminal<TestBackend>) {
        let mut payment = PaymentState::new(Plan::Light);
        payment.toggle_network();
        payment.status = PaymentStatus::Confirming;
        let text = draw(&mut test_terminal, &payment);
        assert!(text.contains("BEP20"));
        assert!(!text.contains("‹ BEP20 ›"));
        assert!(text.contains("Confirming payment..."));
        assert!(!text.contains("I have paid"));
    }
}
