//! Statistics page: personal or team counters, the deals chart for the
//! selected range, and on the team tab the member table and activity feed.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, ListItem, Paragraph},
};

use crate::domain::{
    ActivityItem, ChartPoint, MemberPerformance, StatsRange, StatsSummary, StatsTab, team_points,
};
use crate::state::App;
use crate::theme::{ERROR_COLOR, Palette, SUCCESS_COLOR};
use crate::ui::components::render_tabs;
use crate::ui::helpers::create_border_block;

use super::render_list;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let tab = app.nav.stats_tab;
    let selected = match tab {
        StatsTab::My => 0,
        StatsTab::Team => 1,
    };
    render_tabs(
        frame,
        chunks[0],
        &[StatsTab::My.as_str(), StatsTab::Team.as_str()],
        selected,
        palette,
    );
    frame.render_widget(
        Paragraph::new(range_line(&app.nav.stats_range, palette)),
        chunks[1],
    );

    let (summary, points) = match tab {
        StatsTab::My => (&app.data.my_stats, app.nav.stats_range.points()),
        StatsTab::Team => (
            &app.data.team_stats,
            team_points(&app.nav.stats_range.points()),
        ),
    };
    render_summary(frame, chunks[2], summary, palette);

    match tab {
        StatsTab::My => render_chart(frame, chunks[3], &points, palette),
        StatsTab::Team => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(chunks[3]);
            render_chart(frame, columns[0], &points, palette);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(5), Constraint::Length(5)])
                .split(columns[1]);
            let items = app
                .data
                .performance
                .iter()
                .map(|m| performer_item(m, palette))
                .collect();
            render_list(
                frame,
                rows[0],
                "Members",
                items,
                app.nav.selected_performer,
                palette,
            );
            render_activity(frame, rows[1], &app.data.activity, palette);
        }
    }
}

fn range_line(range: &StatsRange, palette: &Palette) -> Line<'static> {
    let mut spans = vec![
        Span::styled("  Range: ", palette.muted_style()),
        Span::styled(range.as_str().to_string(), palette.key_style()),
    ];
    if let StatsRange::Custom { from, to } = range {
        let from = if from.is_empty() { "…" } else { from.as_str() };
        let to = if to.is_empty() { "…" } else { to.as_str() };
        spans.push(Span::styled(
            format!("  {from} – {to}"),
            Style::new().fg(palette.text),
        ));
    }
    Line::from(spans)
}

/// `128000` → `128 000`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn render_summary(frame: &mut Frame, area: Rect, summary: &StatsSummary, palette: &Palette) {
    let block = create_border_block("Summary", false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = |v: String| Span::styled(v, palette.key_style());
    let label = |l: &'static str| Span::styled(l, palette.muted_style());

    let mut lines = vec![
        Line::from(vec![
            label("Deals "),
            value(summary.deals.to_string()),
            label("   Completed "),
            Span::styled(summary.completed.to_string(), Style::new().fg(SUCCESS_COLOR)),
            label("   Cancelled "),
            value(summary.cancelled.to_string()),
            label("   Appeals "),
            Span::styled(summary.appeals.to_string(), Style::new().fg(ERROR_COLOR)),
        ]),
        Line::from(vec![
            label("Checks "),
            value(summary.checks.to_string()),
            label("   Avg check "),
            value(format!("{} ₽", group_thousands(summary.avg_check))),
            label("   Completion "),
            value(format!("{:.1}%", summary.completion_rate())),
        ]),
    ];
    if let Some(last) = &summary.last_activity {
        lines.push(Line::from(vec![label("Last activity "), value(last.clone())]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_chart(frame: &mut Frame, area: Rect, points: &[ChartPoint], palette: &Palette) {
    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(u64::from(p.deals))
                .label(Line::from(p.label.clone()))
                .style(Style::new().fg(palette.primary))
                .value_style(palette.selected_style())
        })
        .collect();

    let chart = BarChart::default()
        .block(create_border_block("Deals", false, palette))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .label_style(palette.muted_style());

    frame.render_widget(chart, area);
}

fn performer_item(member: &MemberPerformance, palette: &Palette) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<15}", member.username), Style::new().fg(palette.text)),
        Span::styled(format!("{:>4} deals ", member.deals), palette.muted_style()),
        Span::styled(
            format!("{:>5.1}%", member.completion_rate()),
            palette.key_style(),
        ),
    ]))
}

fn render_activity(frame: &mut Frame, area: Rect, activity: &[ActivityItem], palette: &Palette) {
    let block = create_border_block("Activity", false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = activity
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(format!("{:<11}", item.time), palette.muted_style()),
                Span::styled(format!("{} ", item.username), palette.key_style()),
                Span::styled(
                    format!("{}: {}", item.action, item.details),
                    Style::new().fg(palette.text),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Tests
// ============================================================================
