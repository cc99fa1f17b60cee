//! Terminal input to application messages
//!
//! Mapping is a pure function of the current model and the event, so key
//! handling can be tested without a terminal.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::order::{FormField, Size, TOPPINGS};
use crate::tea::message::{FormMessage, Message, Route, SystemMessage, UIMessage};
use crate::tea::model::{Focus, Model};
use crate::ui;

/// Translate any terminal event
pub fn map_event(model: &Model, event: Event) -> Option<Message> {
    match event {
        Event::Key(key) => map_key(model, key),
        Event::Mouse(mouse) => map_mouse(model, mouse),
        Event::Resize(width, height) => Some(SystemMessage::Resize(width, height).into()),
        _ => None,
    }
}

/// Translate a key press
pub fn map_key(model: &Model, key: KeyEvent) -> Option<Message> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(SystemMessage::Quit.into());
    }

    match model.route {
        Route::Home => map_home_key(key),
        Route::Order => map_order_key(model, key),
    }
}

fn map_home_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => {
            Some(UIMessage::Navigate(Route::Order).into())
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(SystemMessage::Quit.into()),
        _ => None,
    }
}

fn map_order_key(model: &Model, key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => return Some(UIMessage::Navigate(Route::Home).into()),
        KeyCode::Tab => return Some(UIMessage::FocusNext.into()),
        KeyCode::BackTab => return Some(UIMessage::FocusPrevious.into()),
        _ => {}
    }

    match model.focus {
        Focus::FullName => map_name_key(model, key),
        Focus::Size => map_size_key(model, key),
        Focus::Toppings => map_toppings_key(model, key),
        Focus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit_if_enabled(model),
            _ => None,
        },
    }
}

fn map_name_key(model: &Model, key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char(c) => {
            let mut value = model.form.full_name.clone();
            value.push(c);
            Some(FormMessage::FieldChanged(FormField::FullName, value).into())
        }
        KeyCode::Backspace => {
            let mut value = model.form.full_name.clone();
            value.pop()?;
            Some(FormMessage::FieldChanged(FormField::FullName, value).into())
        }
        KeyCode::Enter => submit_if_enabled(model),
        _ => None,
    }
}

/// Select options in display order; the empty string is the placeholder
fn size_options() -> impl Iterator<Item = &'static str> {
    std::iter::once("").chain(Size::ALL.iter().map(|s| s.as_str()))
}

fn map_size_key(model: &Model, key: KeyEvent) -> Option<Message> {
    let options: Vec<&str> = size_options().collect();
    let current = options.iter().position(|o| *o == model.form.size);

    let value = match key.code {
        KeyCode::Left | KeyCode::Up => {
            let index = current.map_or(0, |i| i.saturating_sub(1));
            options[index].to_string()
        }
        KeyCode::Right | KeyCode::Down => {
            let index = current.map_or(0, |i| (i + 1).min(options.len() - 1));
            options[index].to_string()
        }
        KeyCode::Char(c) => {
            let code = c.to_ascii_uppercase().to_string();
            if !options.contains(&code.as_str()) {
                return None;
            }
            code
        }
        KeyCode::Backspace | KeyCode::Delete => String::new(),
        KeyCode::Enter => return submit_if_enabled(model),
        _ => return None,
    };

    if value == model.form.size {
        return None;
    }
    Some(FormMessage::FieldChanged(FormField::Size, value).into())
}

fn map_toppings_key(model: &Model, key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Up => Some(UIMessage::MoveToppingCursor(-1).into()),
        KeyCode::Down => Some(UIMessage::MoveToppingCursor(1).into()),
        KeyCode::Char(' ') | KeyCode::Enter => {
            let id = model.topping_under_cursor()?;
            Some(toggle(model, id))
        }
        KeyCode::Char(c) => {
            let id = c.to_string();
            let topping = TOPPINGS.iter().find(|t| t.id == id)?;
            Some(toggle(model, topping.id))
        }
        _ => None,
    }
}

fn toggle(model: &Model, id: &str) -> Message {
    let checked = !model.form.has_topping(id);
    FormMessage::ToppingToggled(id.to_string(), checked).into()
}

/// A disabled submit button cannot be pressed
fn submit_if_enabled(model: &Model) -> Option<Message> {
    model
        .submit_enabled()
        .then(|| FormMessage::Submit.into())
}

/// Translate a mouse event. Only the home call-to-action is clickable.
pub fn map_mouse(model: &Model, mouse: MouseEvent) -> Option<Message> {
    if model.route != Route::Home || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let (width, height) = model.app_state.terminal_size;
    let cta = ui::home::call_to_action_area(Rect::new(0, 0, width, height));
    let inside = mouse.column >= cta.x
        && mouse.column < cta.x + cta.width
        && mouse.row >= cta.y
        && mouse.row < cta.y + cta.height;

    inside.then(|| UIMessage::Navigate(Route::Order).into())
}
