//! App feedback dialog: stars, tags and a short review.
//!
//! Shown before the first counterparty check and from Settings. The focused
//! row is marked with `›`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::domain::FEEDBACK_TAGS;
use crate::state::{FeedbackField, FeedbackForm};
use crate::theme::{ERROR_COLOR, Palette};
use crate::ui::helpers::{render_popup_frame, stars};
use crate::ui::layout::centered_popup_area;

fn row_label(label: &str, focused: bool, palette: &Palette) -> Vec<Span<'static>> {
    let marker = if focused { "› " } else { "  " };
    let style = if focused {
        palette.key_style()
    } else {
        palette.muted_style()
    };
    vec![
        Span::styled(marker, palette.key_style()),
        Span::styled(format!("{label:<8}"), style),
    ]
}

fn form_lines(form: &FeedbackForm, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(query) = &form.pending_query {
        lines.push(Line::from(Span::styled(
            format!("Your search for {} runs right after this.", query.normalized),
            palette.muted_style(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "How do you like LOUPE so far?",
            palette.muted_style(),
        )));
    }
    lines.push(Line::default());

    let mut rating = row_label("Rating", form.field == FeedbackField::Rating, palette);
    rating.push(Span::styled(stars(form.rating), palette.key_style()));
    lines.push(Line::from(rating));

    let tags_focused = form.field == FeedbackField::Tags;
    let mut tags = row_label("Tags", tags_focused, palette);
    for (i, (tag, on)) in FEEDBACK_TAGS.iter().zip(form.selected_tags).enumerate() {
        let check = if on { "[x]" } else { "[ ]" };
        let mut style = if on {
            palette.key_style()
        } else {
            Style::new().fg(palette.text)
        };
        if tags_focused && i == form.tag_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        tags.push(Span::styled(format!("{check} {tag}"), style));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));

    let text_focused = form.field == FeedbackField::Text;
    let mut text = row_label("Review", text_focused, palette);
    let cursor = if text_focused { "▏" } else { "" };
    text.push(Span::styled(
        format!("{}{cursor}", form.text),
        Style::new().fg(palette.text),
    ));
    lines.push(Line::from(text));

    if let Some(warning) = &form.warning {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            warning.clone(),
            Style::new().fg(ERROR_COLOR),
        )));
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, form: &FeedbackForm, palette: &Palette) {
    let popup_area = centered_popup_area(area, 76, 14);
    let content = render_popup_frame(
        frame,
        popup_area,
        "Feedback",
        &[
            ("Tab", "Field"),
            ("←→", "Change"),
            ("Space", "Tag"),
            ("Enter", "Send"),
            ("Esc", "Later"),
        ],
        palette,
    );
    let text_area = Rect::new(
        content.x + 1,
        content.y + 1,
        content.width.saturating_sub(2),
        content.height.saturating_sub(1),
    );
    frame.render_widget(
        Paragraph::new(form_lines(form, palette)).wrap(Wrap { trim: false }),
        text_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::classify;
    use crate::test_utils::{buffer_text, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, form: &FeedbackForm) -> String {
        terminal
            .draw(|frame| render(frame, frame.area(), form, &Palette::DARK))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[rstest]
    fn test_pending_query_notice(mut test_terminal: Terminal<TestBackend>) {
        let form = FeedbackForm::new(Some(classify("@billigans")));
        let text = draw(&mut test_terminal, &form);
        assert!(text.contains("Your search for @billigans runs right after this."));
        assert!(text.contains("› Rating"));
        assert!(text.contains("☆☆☆☆☆"));
    }

    #[rstest]
    fn test_filled_form_with_warning(mut test_terminal: Terminal<TestBackend>) {
        let mut form = FeedbackForm::new(None);
        form.rating = 4;
        form.selected_tags[0] = true;
        form.field = FeedbackField::Text;
        form.text = "Fast".to_string();
        form.warning = Some("Please leave at least a text review!".to_string());
        let text = draw(&mut test_terminal, &form);
        assert!(text.contains("★★★★☆"));
        assert!(text.contains("[x] Speed"));
        assert!(text.contains("[ ] Price"));
        assert!(text.contains("› Review  Fast"));
        assert!(text.contains("Please leave at least a text review!"));
    }
}
