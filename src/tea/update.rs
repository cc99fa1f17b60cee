/// Update function for TEA pattern
///
/// Central update function that handles all messages and updates the model accordingly.
/// This is the only place state changes happen.

use crate::error::OrderError;
use crate::order::{SubmissionOutcome, TOPPINGS};
use crate::tea::command::NetworkCommand;
use crate::tea::message::{FormMessage, OrderMessage, Route, SystemMessage, UIMessage};
use crate::tea::model::{Focus, Validity};
use crate::tea::{Command, Message, Model, UpdateResult};

/// Main update function that processes messages and returns updated model with commands
pub fn update(model: Model, message: Message) -> UpdateResult<Model> {
    tracing::debug!("update: {:?}", message);

    match message {
        Message::System(msg) => update_system(model, msg),
        Message::UI(msg) => update_ui(model, msg),
        Message::Form(msg) => update_form(model, msg),
        Message::Order(msg) => update_order(model, msg),
    }
}

/// Handle system messages
fn update_system(mut model: Model, message: SystemMessage) -> UpdateResult<Model> {
    match message {
        SystemMessage::Quit => {
            model.app_state.should_quit = true;
        }
        SystemMessage::Resize(width, height) => {
            model.app_state.terminal_size = (width, height);
        }
    }
    UpdateResult::just_model(model)
}

/// Handle UI messages
fn update_ui(mut model: Model, message: UIMessage) -> UpdateResult<Model> {
    match message {
        UIMessage::Navigate(route) => {
            tracing::debug!("Navigating to {:?}", route);
            model.route = route;
            if route == Route::Order {
                model.focus = Focus::FullName;
            }
        }
        UIMessage::FocusNext => {
            model.focus = model.focus.next();
        }
        UIMessage::FocusPrevious => {
            model.focus = model.focus.previous();
        }
        UIMessage::MoveToppingCursor(delta) => {
            let last = TOPPINGS.len() as i32 - 1;
            model.topping_cursor = (model.topping_cursor as i32 + delta).clamp(0, last) as usize;
        }
    }
    UpdateResult::just_model(model)
}

/// Handle order form messages
fn update_form(mut model: Model, message: FormMessage) -> UpdateResult<Model> {
    match message {
        FormMessage::FieldChanged(field, value) => {
            model.form = model.form.with_field(field, value);
            let command = Command::validate_form(&model.form);
            UpdateResult::with_command(model, command)
        }

        FormMessage::ToppingToggled(id, checked) => {
            model.form = model.form.with_topping(id, checked);
            let command = Command::validate_form(&model.form);
            UpdateResult::with_command(model, command)
        }

        FormMessage::ValidityComputed { revision, valid } => {
            if revision == model.form.revision {
                model.validity = Some(Validity { revision, valid });
            } else {
                tracing::debug!(
                    "Dropping validity for revision {} (form is at {})",
                    revision,
                    model.form.revision
                );
            }
            UpdateResult::just_model(model)
        }

        FormMessage::Submit => submit(model),
    }
}

/// Validate the exact snapshot being sent, then hand it to the network
fn submit(mut model: Model) -> UpdateResult<Model> {
    if model.is_submitting() {
        tracing::debug!("Submit ignored, an order is already in flight");
        return UpdateResult::just_model(model);
    }

    model.submission.outcome = None;

    match model.form.to_request() {
        Ok(request) => {
            model.submission.in_flight = Some(model.form.revision);
            UpdateResult::with_command(
                model,
                Command::network(NetworkCommand::SubmitOrder(request)),
            )
        }
        Err(errors) => {
            model.form = model.form.with_errors(errors.clone());
            let error = OrderError::Validation(errors);
            tracing::info!("{}", error);
            model.submission.outcome = Some(SubmissionOutcome::Failure(
                error.user_message().to_string(),
            ));
            UpdateResult::just_model(model)
        }
    }
}

/// Handle order submission results
fn update_order(mut model: Model, message: OrderMessage) -> UpdateResult<Model> {
    model.submission.in_flight = None;

    match message {
        OrderMessage::Succeeded(text) => {
            model.submission.outcome = Some(SubmissionOutcome::Success(text));
            model.form = model.form.reset();
            model.validity = None;
            model.focus = Focus::FullName;
            model.topping_cursor = 0;
        }
        OrderMessage::Failed(error) => {
            tracing::warn!("Order submission failed: {}", error);
            model.submission.outcome =
                Some(SubmissionOutcome::Failure(error.user_message().to_string()));
        }
    }

    UpdateResult::just_model(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::FormField;

    fn apply(model: Model, message: impl Into<Message>) -> Model {
        update(model, message.into()).model
    }

    #[test]
    fn field_change_schedules_a_validity_check() {
        let result = update(
            Model::default(),
            FormMessage::FieldChanged(FormField::FullName, "Al".into()).into(),
        );
        assert_eq!(result.model.form.full_name, "Al");
        assert_eq!(result.commands.len(), 1);
        assert!(matches!(result.commands[0], Command::Task(_)));
    }

    #[test]
    fn topping_cursor_is_clamped() {
        let model = apply(Model::default(), UIMessage::MoveToppingCursor(-1));
        assert_eq!(model.topping_cursor, 0);
        let model = apply(model, UIMessage::MoveToppingCursor(100));
        assert_eq!(model.topping_cursor, TOPPINGS.len() - 1);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut model = Model::default();
        model.form = model.form.with_full_name("Alice").with_size("S");

        let first = update(model, FormMessage::Submit.into());
        assert_eq!(first.commands.len(), 1);
        assert!(first.model.is_submitting());

        let second = update(first.model, FormMessage::Submit.into());
        assert!(second.commands.is_empty());
    }

    #[test]
    fn quit_sets_flag() {
        let model = apply(Model::default(), SystemMessage::Quit);
        assert!(model.app_state.should_quit);
    }

    #[test]
    fn navigation_resets_focus_on_order_page() {
        let mut model = Model::default();
        model.focus = Focus::Submit;
        let model = apply(model, UIMessage::Navigate(Route::Order));
        assert_eq!(model.route, Route::Order);
        assert_eq!(model.focus, Focus::FullName);
    }

    #[test]
    fn failed_submission_shows_generic_message_and_keeps_values() {
        let mut model = Model::default();
        model.form = model.form.with_full_name("Alice").with_size("S");
        let model = update(model, FormMessage::Submit.into()).model;
        assert!(model.is_submitting());

        let model = apply(
            model,
            OrderMessage::Failed(OrderError::Timeout(std::time::Duration::from_secs(10))),
        );
        assert!(!model.is_submitting());
        assert_eq!(
            model.submission.outcome,
            Some(SubmissionOutcome::Failure(
                crate::error::GENERIC_FAILURE_MESSAGE.to_string()
            ))
        );
        assert_eq!(model.form.full_name, "Alice");
        assert_eq!(model.form.size, "S");
    }
}

