//! Team page: members, chat and notes tabs.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{ListItem, Paragraph},
};

use crate::domain::{ChatMessage, Presence, TeamMember, TeamNote};
use crate::state::{App, TeamTab};
use crate::theme::{Palette, SUCCESS_COLOR};
use crate::ui::components::render_tabs;
use crate::ui::layout::split_tabs;

use super::render_list;

const PIN: &str = "⚑ ";

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (tabs_area, content) = split_tabs(area);
    let tab_index = TeamTab::ALL
        .iter()
        .position(|tab| *tab == app.nav.team_tab)
        .unwrap_or(0);
    let labels: Vec<&str> = TeamTab::ALL.iter().map(TeamTab::as_str).collect();
    render_tabs(frame, tabs_area, &labels, tab_index, palette);

    let team = &app.data.team;
    match app.nav.team_tab {
        TeamTab::Members => {
            let limit = app
                .data
                .capabilities()
                .max_team_members
                .map_or_else(|| "∞".to_string(), |max| max.to_string());
            let title = format!("{} · {}/{limit} members", team.name, team.members.len());
            let items = team.members.iter().map(|m| member_item(m, palette)).collect();
            render_list(frame, content, &title, items, app.nav.selected_member, palette);
        }
        TeamTab::Chat => {
            let title = if app.data.capabilities().can_write_chat {
                "Team chat".to_string()
            } else {
                "Team chat (read only)".to_string()
            };
            let items = team
                .messages
                .iter()
                .map(|m| message_item(m, palette))
                .collect();
            render_list(frame, content, &title, items, app.nav.selected_message, palette);
        }
        TeamTab::Notes => {
            let items = team.notes.iter().map(|n| note_item(n, palette)).collect();
            render_list(frame, content, "Notes", items, app.nav.selected_note, palette);
        }
    }

    if team_tab_is_empty(app) {
        let inner = Rect::new(
            content.x + 2,
            content.y + 1,
            content.width.saturating_sub(4),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled("Nothing here yet. Press n to add.", palette.muted_style())),
            inner,
        );
    }
}

fn team_tab_is_empty(app: &App) -> bool {
    match app.nav.team_tab {
        TeamTab::Members => false,
        TeamTab::Chat => app.data.team.messages.is_empty(),
        TeamTab::Notes => app.data.team.notes.is_empty(),
    }
}

fn member_item(member: &TeamMember, palette: &Palette) -> ListItem<'static> {
    let presence = match member.presence {
        Presence::Online => Span::styled("● online ", Style::new().fg(SUCCESS_COLOR)),
        Presence::Offline => Span::styled("○ offline", palette.muted_style()),
    };
    let role_style = if member.is_owner() {
        palette.key_style()
    } else {
        palette.muted_style()
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<18}", member.username), Style::new().fg(palette.text)),
        Span::styled(format!("{:<8}", member.role.as_str()), role_style),
        presence,
        Span::styled(format!("   {} deals", member.deals_count), palette.muted_style()),
        Span::styled(format!("   {}", member.id), palette.muted_style()),
    ]))
}

fn message_item(message: &ChatMessage, palette: &Palette) -> ListItem<'static> {
    let sender_style = if message.from_me {
        palette.key_style()
    } else {
        Style::new().fg(palette.text)
    };
    ListItem::new(Line::from(vec![
        Span::styled(
            if message.pinned { PIN } else { "  " },
            palette.key_style(),
        ),
        Span::styled(format!("[{}] ", message.timestamp), palette.muted_style()),
        Span::styled(format!("{}: ", message.sender), sender_style),
        Span::styled(message.text.clone(), Style::new().fg(palette.text)),
    ]))
}

fn note_item(note: &TeamNote, palette: &Palette) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(if note.pinned { PIN } else { "  " }, palette.key_style()),
            Span::styled(format!("{}  ", note.date), palette.muted_style()),
            Span::styled(
                note.author.clone(),
                if note.from_me {
                    palette.key_style()
                } else {
                    Style::new().fg(palette.text)
                },
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", note.text),
            Style::new().fg(palette.text),
        )),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Plan;
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
    #[case::basic(Plan::Basic, "Arbitrage · 3/3 members")]
    #[case::pro(Plan::Pro, "Arbitrage · 3/∞ members")]
    fn test_members_tab_shows_limit(
        mut test_terminal: Terminal<TestBackend>,
        #[case] plan: Plan,
        #[case] title: &str,
    ) {
        let app = AppMother::on_plan(plan);
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains(title));
        assert!(text.contains("@owner_user"));
        assert!(text.contains("Owner"));
        assert!(text.contains("○ offline"));
    }

    #[rstest]
    fn test_chat_tab(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Basic);
        app.nav.team_tab = TeamTab::Chat;
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("Team chat"));
        assert!(text.contains("[14:30] @owner_user: Check counterparty 132465789"));
        assert!(text.contains("⚑ [14:32] @me:"));
    }

    #[rstest]
    fn test_empty_notes_tab(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Pro);
        app.nav.team_tab = TeamTab::Notes;
        app.data.team.notes.clear();
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("Nothing here yet. Press n to add."));
    }

    #[rstest]
    fn test_notes_tab(mut test_terminal: Terminal<TestBackend>) {
        let mut app = AppMother::on_plan(Plan::Pro);
        app.nav.team_tab = TeamTab::Notes;
        let text = draw(&mut test_terminal, &app);
        assert!(text.contains("24.01.2026"));
        assert!(text.contains("reliable partner"));
    }
}
