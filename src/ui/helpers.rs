//! Styled blocks and small text builders shared by pages and popups.
//!
//! Everything takes a [`Palette`] so both theme modes render through the
//! same code.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::domain::{DealStatus, RiskChip, RiskLevel};
use crate::theme::{ERROR_COLOR, Palette, SUCCESS_COLOR, WARNING_COLOR};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// Focused blocks get a double border and a `●` marker before the title.
///
/// # Arguments
///
/// * `title` - The title text to display in the block border
/// * `focused` - Whether the block should be styled as focused/active
/// * `palette` - Colors of the active theme
#[must_use]
pub fn create_border_block(title: &str, focused: bool, palette: &Palette) -> Block<'static> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            palette.focused_border_style(),
            border::DOUBLE,
            palette.focused_title_style(),
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            palette.border_style(),
            border::ROUNDED,
            Style::new().fg(palette.muted).add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(palette.focused_title_style())
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(palette.focused_border_style())
        .style(palette.base_style())
}

/// Clears `area`, draws a popup frame with a separator and a key hint row
/// at the bottom, and returns the area left for content.
pub fn render_popup_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    hints: &[(&str, &str)],
    palette: &Palette,
) -> Rect {
    let block = create_popup_block(title, palette);
    frame.render_widget(Clear, area);
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);

    if inner.height < 3 {
        return inner;
    }

    let separator_area = Rect::new(inner.x, inner.bottom() - 2, inner.width, 1);
    frame.render_widget(
        Paragraph::new("─".repeat(inner.width as usize)).style(palette.border_style()),
        separator_area,
    );

    let help_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(key_hints(hints, palette)).alignment(Alignment::Center),
        help_area,
    );

    Rect::new(inner.x, inner.y, inner.width, inner.height - 2)
}

// ============================================================================
// Text Builders
// ============================================================================

/// `key:Action` pairs with highlighted keys, two spaces apart.
#[must_use]
pub fn key_hints(hints: &[(&str, &str)], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled((*key).to_string(), palette.key_style()));
        spans.push(Span::styled(format!(":{action}"), palette.muted_style()));
    }
    Line::from(spans)
}

/// A `label  value` row with a muted label padded to `width`.
#[must_use]
pub fn label_value(label: &str, value: impl Into<String>, width: usize, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<width$}"), palette.muted_style()),
        Span::styled(value.into(), Style::new().fg(palette.text)),
    ])
}

/// Section heading inside a popup or page.
#[must_use]
pub fn section_title(title: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), palette.focused_title_style()))
}

/// `★★★☆☆` for a 0–5 rating.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

// ============================================================================
// Status Styles
// ============================================================================

#[must_use]
pub const fn risk_level_style(level: RiskLevel) -> Style {
    let color = match level {
        RiskLevel::Low => SUCCESS_COLOR,
        RiskLevel::Medium => WARNING_COLOR,
        RiskLevel::High => ERROR_COLOR,
    };
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}

#[must_use]
pub const fn risk_chip_style(chip: RiskChip) -> Style {
    match chip {
        RiskChip::Normal => Style::new().fg(SUCCESS_COLOR),
        RiskChip::Suspicious => Style::new().fg(WARNING_COLOR),
        RiskChip::Risk => Style::new().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
    }
}

#[must_use]
pub fn deal_status_style(status: DealStatus, palette: &Palette) -> Style {
    match status {
        DealStatus::Active => palette.key_style(),
        DealStatus::Completed => Style::new().fg(SUCCESS_COLOR),
        DealStatus::Cancelled => palette.muted_style(),
        DealStatus::Dispute => Style::new().fg(ERROR_COLOR),
    }
}

// ============================================================================
// Tests
// ============================================================================
