use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::order::{FormField, Size, SubmissionOutcome, TOPPINGS};
use crate::tea::model::{Focus, Model};
use crate::theme::Theme;

const SIZE_PLACEHOLDER: &str = "----Choose Size----";

/// Render the order form page
pub fn render(frame: &mut Frame, area: Rect, model: &Model) {
    let theme = &model.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Title + outcome banner
            Constraint::Length(3),                         // Full name
            Constraint::Length(1),                         // Full name error
            Constraint::Length(3),                         // Size
            Constraint::Length(1),                         // Size error
            Constraint::Length(TOPPINGS.len() as u16 + 2), // Toppings
            Constraint::Length(1),                         // Toppings error
            Constraint::Length(3),                         // Submit
            Constraint::Min(0),
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_banner(frame, chunks[0], model, theme);

    let name_line = Line::from(model.form.full_name.as_str());
    render_field(
        frame,
        chunks[1],
        "Full Name",
        name_line,
        model.focus == Focus::FullName,
        theme,
    );
    render_error(frame, chunks[2], model, FormField::FullName, theme);

    render_field(
        frame,
        chunks[3],
        "Size",
        size_line(&model.form.size, theme),
        model.focus == Focus::Size,
        theme,
    );
    render_error(frame, chunks[4], model, FormField::Size, theme);

    render_toppings(frame, chunks[5], model, theme);
    render_error(frame, chunks[6], model, FormField::Toppings, theme);

    render_submit(frame, chunks[7], model, theme);

    let hints = Paragraph::new(
        "Tab/Shift+Tab: Move | ←/→ or S/M/L: Size | ↑/↓ Space or 1-5: Toppings | Enter: Submit | Esc: Home",
    )
    .style(Style::default().fg(theme.colors.palette.text_muted));
    frame.render_widget(hints, chunks[9]);
}

fn render_banner(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let colors = &theme.colors.order_form;

    let (text, style) = match &model.submission.outcome {
        Some(SubmissionOutcome::Success(message)) => (
            message.as_str(),
            Style::default().fg(colors.success_banner).add_modifier(Modifier::BOLD),
        ),
        Some(SubmissionOutcome::Failure(message)) => (
            message.as_str(),
            Style::default().fg(colors.failure_banner).add_modifier(Modifier::BOLD),
        ),
        None if model.is_submitting() => (
            "Sending your order...",
            Style::default().fg(theme.colors.palette.text_secondary),
        ),
        None => ("", Style::default()),
    };

    let banner = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled(
                    "Order Your Pizza",
                    Style::default().fg(theme.colors.palette.accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.colors.palette.border)),
        );
    frame.render_widget(banner, area);
}

fn field_block<'a>(label: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if focused {
        Style::default().fg(theme.colors.palette.border_focused)
    } else {
        Style::default().fg(theme.colors.palette.border)
    };

    Block::default()
        .title(Span::styled(label, Style::default().fg(theme.colors.order_form.label)))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Line,
    focused: bool,
    theme: &Theme,
) {
    let mut style = Style::default().fg(theme.colors.order_form.input);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(value)
        .style(style)
        .block(field_block(label, focused, theme));
    frame.render_widget(paragraph, area);
}

fn size_line<'a>(current: &str, theme: &Theme) -> Line<'a> {
    let colors = &theme.colors.order_form;

    if current.is_empty() {
        let mut spans = vec![Span::styled(
            SIZE_PLACEHOLDER,
            Style::default().fg(theme.colors.palette.text_muted),
        )];
        spans.push(Span::raw("   "));
        spans.extend(Size::ALL.iter().map(|s| Span::raw(format!("( ) {}  ", s.label()))));
        return Line::from(spans);
    }

    let spans = Size::ALL
        .iter()
        .map(|size| {
            if size.as_str() == current {
                Span::styled(
                    format!("(•) {}  ", size.label()),
                    Style::default().fg(colors.checkbox_checked).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!("( ) {}  ", size.label()),
                    Style::default().fg(colors.checkbox_unchecked),
                )
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn render_error(frame: &mut Frame, area: Rect, model: &Model, field: FormField, theme: &Theme) {
    if let Some(message) = model.form.errors.get(field) {
        let error = Paragraph::new(format!("  {}", message))
            .style(Style::default().fg(theme.colors.order_form.field_error));
        frame.render_widget(error, area);
    }
}

fn render_toppings(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let colors = &theme.colors.order_form;
    let focused = model.focus == Focus::Toppings;

    let lines: Vec<Line> = TOPPINGS
        .iter()
        .enumerate()
        .map(|(row, topping)| {
            let checked = model.form.has_topping(topping.id);
            let mark = if checked { "[x]" } else { "[ ]" };
            let mut style = Style::default().fg(if checked {
                colors.checkbox_checked
            } else {
                colors.checkbox_unchecked
            });
            if focused && row == model.topping_cursor {
                style = style
                    .fg(theme.colors.palette.text_inverse)
                    .bg(theme.colors.palette.selection);
            }
            Line::styled(format!("{} {} {}", mark, topping.id, topping.text), style)
        })
        .collect();

    let list = Paragraph::new(lines).block(field_block("Toppings", focused, theme));
    frame.render_widget(list, area);
}

fn render_submit(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let colors = &theme.colors.order_form;
    let enabled = model.submit_enabled();

    let label = if model.is_submitting() {
        "Submitting..."
    } else {
        "Submit"
    };

    let mut style = Style::default().fg(if enabled {
        colors.submit_enabled
    } else {
        colors.submit_disabled
    });
    if enabled {
        style = style.add_modifier(Modifier::BOLD);
    } else {
        style = style.add_modifier(Modifier::DIM);
    }

    let width = (label.len() as u16 + 6).min(area.width);
    let button_area = Rect::new(area.x, area.y, width, area.height);

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(field_block("", model.focus == Focus::Submit, theme));
    frame.render_widget(button, button_area);
}
