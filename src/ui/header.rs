//! Header rendering for the LOUPE TUI
//!
//! Renders the logo, the tagline, the USDT rate, the active plan and the
//! theme indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::HEADER_RATE;
use crate::state::App;
use crate::theme::Palette;

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let header_block = create_border_block("", false, palette);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let row = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 1);
    frame.render_widget(Paragraph::new(create_logo(palette)), row);

    if area.width > 50 {
        frame.render_widget(
            Paragraph::new(status_line(app, palette)).alignment(Alignment::Right),
            row,
        );
    }
}

fn create_logo(palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("◉ ", Style::new().fg(palette.primary)),
        Span::styled(
            "LOUPE",
            Style::new()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  P2P ecosystem", palette.muted_style()),
    ])
}

/// Rate, plan and theme icon, right-aligned.
fn status_line(app: &App, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(HEADER_RATE, Style::new().fg(palette.text)),
        Span::styled("  │  ", palette.border_style()),
        Span::styled(format!("{} plan", app.data.plan), palette.key_style()),
        Span::styled("  │  ", palette.border_style()),
        Span::styled(app.config.theme.icon(), palette.key_style()),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Plan;
    use crate::test_utils::{AppMother, buffer_text};
    use crate::theme::ThemeMode;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|frame| {
                let palette = app.config.theme.palette();
                render(frame, frame.area(), app, &palette);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_header_shows_logo_rate_and_plan() {
        let app = AppMother::on_plan(Plan::Basic);
        let text = draw(&app, 90);
        assert!(text.contains("LOUPE"));
        assert!(text.contains("P2P ecosystem"));
        assert!(text.contains(HEADER_RATE));
        assert!(text.contains("Basic plan"));
        assert!(text.contains(ThemeMode::Dark.icon()));
    }

    #[test]
    fn test_narrow_header_keeps_only_logo() {
        let mut app = AppMother::fresh();
        app.config.theme = ThemeMode::Light;
        let text = draw(&app, 40);
        assert!(text.contains("LOUPE"));
        assert!(!text.contains("plan"));
    }
}
