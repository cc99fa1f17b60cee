pub mod home;
pub mod order_form;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::tea::message::Route;
use crate::tea::Model;

/// Draw the whole screen for the current model
pub fn render(frame: &mut Frame, model: &Model) {
    let area = frame.size();

    let background =
        Block::default().style(Style::default().bg(model.theme.colors.palette.background));
    frame.render_widget(background, area);

    match model.route {
        Route::Home => home::render(frame, area, &model.theme),
        Route::Order => order_form::render(frame, area, model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::SubmissionOutcome;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(model: &Model) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, model)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn home_shows_welcome() {
        let text = screen_text(&Model::default());
        assert!(text.contains("Welcome to Bloom Pizza!"));
        assert!(text.contains("ORDER  NOW"));
    }

    #[test]
    fn order_page_shows_inline_errors_and_outcome() {
        let mut model = Model::default();
        model.route = Route::Order;
        model.form = model.form.with_full_name("Al");
        model.submission.outcome = Some(SubmissionOutcome::Failure("Something went wrong".into()));

        let text = screen_text(&model);
        assert!(text.contains("Full name must be at least 3 characters"));
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("----Choose Size----"));
        assert!(text.contains("Green Peppers"));
    }
}
