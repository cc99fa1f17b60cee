/// Drives the update loop: owns the model, runs commands, feeds results back

use crate::order::OrderClient;
use crate::tea::{update, Command, CommandExecutor, Message, Model};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct Runtime {
    model: Model,
    executor: CommandExecutor,
    receiver: mpsc::UnboundedReceiver<Message>,
}

impl Runtime {
    pub fn new(model: Model, order_client: Arc<dyn OrderClient>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            model,
            executor: CommandExecutor::new(sender, order_client),
            receiver,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Apply one message and spawn its commands in the background
    pub fn dispatch(&mut self, message: Message) {
        for command in self.apply(message) {
            let executor = self.executor.clone();
            tokio::spawn(async move { executor.execute(command).await });
        }
    }

    /// Apply every message the background commands have produced so far
    pub fn drain(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            self.dispatch(message);
        }
    }

    /// Apply a message and keep going, awaiting each command inline, until
    /// nothing more is produced
    pub async fn process(&mut self, message: Message) -> &Model {
        let mut queue = VecDeque::from([message]);

        while let Some(message) = queue.pop_front() {
            for command in self.apply(message) {
                self.executor.execute(command).await;
            }
            while let Ok(produced) = self.receiver.try_recv() {
                queue.push_back(produced);
            }
        }

        &self.model
    }

    fn apply(&mut self, message: Message) -> Vec<Command> {
        let model = std::mem::replace(&mut self.model, Model::vacant());
        let result = update(model, message);
        self.model = result.model;
        result.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::order::{FormField, MockOrderClient, SubmissionOutcome};
    use crate::tea::message::FormMessage;
    use std::time::Duration;

    /// Drain until `done` holds, giving spawned commands time to finish
    async fn settle(runtime: &mut Runtime, done: impl Fn(&Model) -> bool) {
        for _ in 0..200 {
            runtime.drain();
            if done(runtime.model()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("runtime did not settle");
    }

    #[tokio::test]
    async fn dispatched_commands_come_back_through_drain() {
        let mut runtime = Runtime::new(Model::default(), Arc::new(MockOrderClient::new()));
        runtime.dispatch(FormMessage::FieldChanged(FormField::FullName, "Alice".into()).into());
        assert_eq!(runtime.model().validity, None);

        for _ in 0..50 {
            tokio::task::yield_now().await;
            runtime.drain();
            if runtime.model().validity.is_some() {
                break;
            }
        }

        let validity = runtime.model().validity.expect("validity computed");
        assert_eq!(validity.revision, runtime.model().form.revision);
        // Size is still missing
        assert!(!validity.valid);
    }

    #[tokio::test]
    async fn second_submit_during_slow_request_sends_nothing() {
        let client =
            MockOrderClient::accepting("Order received").with_latency(Duration::from_millis(100));
        let mut runtime = Runtime::new(Model::default(), Arc::new(client.clone()));
        runtime
            .process(FormMessage::FieldChanged(FormField::FullName, "Alice".into()).into())
            .await;
        runtime
            .process(FormMessage::FieldChanged(FormField::Size, "L".into()).into())
            .await;
        assert!(runtime.model().submit_enabled());

        runtime.dispatch(FormMessage::Submit.into());
        assert!(runtime.model().is_submitting());
        assert!(!runtime.model().submit_enabled());

        runtime.dispatch(FormMessage::Submit.into());
        settle(&mut runtime, |m| m.submission.outcome.is_some()).await;

        assert_eq!(
            runtime.model().submission.outcome,
            Some(SubmissionOutcome::Success("Order received".into()))
        );
        assert_eq!(client.requests().await.len(), 1);
    }

    #[tokio::test]
    async fn model_survives_every_update() {
        let config = AppConfig {
            theme: "High Contrast".to_string(),
            ..AppConfig::default()
        };
        let mut runtime = Runtime::new(Model::new(config.clone()), Arc::new(MockOrderClient::new()));

        runtime
            .process(FormMessage::FieldChanged(FormField::FullName, "Alice".into()).into())
            .await;

        assert_eq!(runtime.model().config, config);
        assert_eq!(runtime.model().theme.name, "High Contrast");
        assert_eq!(runtime.model().app_state.terminal_size, (80, 24));
        assert_eq!(runtime.model().form.full_name, "Alice");
    }
}
