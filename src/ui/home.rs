use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Theme;

const PIZZA: [&str; 9] = [
    r"      _....._      ",
    r"   .-'  o  . '-.   ",
    r"  / .  o   .  o \  ",
    r" |  o  .  o  .   | ",
    r" | .   o   .  o  | ",
    r"  \  o  .  o  . /  ",
    r"   '-.  .  o .-'   ",
    r"      '-----'      ",
    r"  [ ORDER  NOW ]   ",
];

fn art_size() -> (u16, u16) {
    let width = PIZZA.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    (width + 2, PIZZA.len() as u16 + 2)
}

fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Picture
            Constraint::Length(1), // Hint
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Screen area of the clickable picture for a given terminal area
pub fn call_to_action_area(area: Rect) -> Rect {
    let [_, body, _] = layout(area);
    let (width, height) = art_size();
    let width = width.min(body.width);
    let height = height.min(body.height);

    Rect::new(
        body.x + (body.width - width) / 2,
        body.y + (body.height - height) / 2,
        width,
        height,
    )
}

/// Render the landing page
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let colors = &theme.colors.home;
    let [title_area, _, hint_area] = layout(area);

    let title = Paragraph::new("Welcome to Bloom Pizza!")
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.title).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.colors.palette.border)),
        );
    frame.render_widget(title, title_area);

    let lines: Vec<Line> = PIZZA
        .iter()
        .enumerate()
        .map(|(row, text)| {
            if row == PIZZA.len() - 1 {
                return Line::styled(
                    *text,
                    Style::default().fg(colors.title).add_modifier(Modifier::BOLD),
                );
            }
            Line::from(
                text.chars()
                    .map(|c| {
                        let color = match c {
                            'o' => colors.topping,
                            '.' => colors.cheese,
                            _ => colors.crust,
                        };
                        Span::styled(c.to_string(), Style::default().fg(color))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let picture = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.colors.palette.border_focused)),
    );
    frame.render_widget(picture, call_to_action_area(area));

    let hint = Paragraph::new("Click the pizza or press Enter to order  |  q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.hint));
    frame.render_widget(hint, hint_area);
}
