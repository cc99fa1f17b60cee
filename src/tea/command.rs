/// Command system for TEA pattern
///
/// Commands represent side effects that should be executed as a result of
/// model updates. They are processed asynchronously and may generate new messages.

use crate::order::{OrderClient, OrderForm, OrderRequest};
use crate::tea::message::{FormMessage, Message, OrderMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Command that can be executed to perform side effects
#[derive(Debug)]
pub enum Command {
    /// Execute an async task
    Task(TaskCommand),

    /// Network operations
    Network(NetworkCommand),
}

/// Async task command
#[derive(Debug)]
pub struct TaskCommand {
    pub id: String,
    pub name: String,
    pub task: Box<dyn AsyncTask>,
}

/// Trait for async tasks
#[async_trait::async_trait]
pub trait AsyncTask: Send + Sync + std::fmt::Debug {
    /// Execute the task and return messages to send
    async fn execute(&self) -> Vec<Message>;
}

/// Network operation commands
#[derive(Debug)]
pub enum NetworkCommand {
    /// Post an order to the order-intake service
    SubmitOrder(OrderRequest),
}

/// Checks a snapshot of the form against the whole schema
#[derive(Debug)]
pub struct ValidateFormTask {
    pub form: OrderForm,
}

#[async_trait::async_trait]
impl AsyncTask for ValidateFormTask {
    async fn execute(&self) -> Vec<Message> {
        let valid = self.form.is_complete() && self.form.validate().is_empty();
        vec![Message::Form(FormMessage::ValidityComputed {
            revision: self.form.revision,
            valid,
        })]
    }
}

/// Command executor that processes commands asynchronously
#[derive(Clone)]
pub struct CommandExecutor {
    message_sender: mpsc::UnboundedSender<Message>,
    order_client: Arc<dyn OrderClient>,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(
        message_sender: mpsc::UnboundedSender<Message>,
        order_client: Arc<dyn OrderClient>,
    ) -> Self {
        Self {
            message_sender,
            order_client,
        }
    }

    /// Execute a command
    pub async fn execute(&self, command: Command) {
        match command {
            Command::Task(task_command) => {
                self.execute_task(task_command).await;
            }
            Command::Network(net_command) => {
                self.execute_network_command(net_command).await;
            }
        }
    }

    /// Execute a task command
    async fn execute_task(&self, task_command: TaskCommand) {
        tracing::debug!("Executing task {} ({})", task_command.name, task_command.id);

        for message in task_command.task.execute().await {
            self.send(message);
        }
    }

    /// Execute network command
    async fn execute_network_command(&self, command: NetworkCommand) {
        match command {
            NetworkCommand::SubmitOrder(request) => {
                let message = match self.order_client.submit(&request).await {
                    Ok(receipt) => OrderMessage::Succeeded(receipt.message),
                    Err(e) => OrderMessage::Failed(e),
                };
                self.send(Message::Order(message));
            }
        }
    }

    fn send(&self, message: Message) {
        if let Err(e) = self.message_sender.send(message) {
            tracing::error!("Failed to send message: {}", e);
        }
    }
}

/// Helper functions for creating common commands
impl Command {
    /// Create a task command
    pub fn task<T>(name: String, task: T) -> Self
    where
        T: AsyncTask + 'static,
    {
        Command::Task(TaskCommand {
            id: Uuid::new_v4().to_string(),
            name,
            task: Box::new(task),
        })
    }

    /// Create a network command
    pub fn network(command: NetworkCommand) -> Self {
        Command::Network(command)
    }

    /// Schedule a whole-form validity check for this snapshot
    pub fn validate_form(form: &OrderForm) -> Self {
        Self::task(
            format!("validate-form r{}", form.revision),
            ValidateFormTask { form: form.clone() },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::MockOrderClient;

    #[tokio::test]
    async fn validity_task_reports_its_revision() {
        let form = crate::order::OrderForm::new()
            .with_full_name("Alice Smith")
            .with_size("M");
        let messages = ValidateFormTask { form: form.clone() }.execute().await;
        assert_eq!(
            messages,
            vec![Message::Form(FormMessage::ValidityComputed {
                revision: form.revision,
                valid: true,
            })]
        );
    }

    #[tokio::test]
    async fn failed_submission_carries_the_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let client = MockOrderClient::failing(crate::error::OrderError::Status(503));
        let executor = CommandExecutor::new(tx, Arc::new(client.clone()));

        let request = crate::order::OrderForm::new()
            .with_full_name("Alice")
            .with_size("S")
            .to_request()
            .unwrap();
        executor
            .execute(Command::network(NetworkCommand::SubmitOrder(request.clone())))
            .await;

        assert_eq!(
            rx.try_recv().ok(),
            Some(Message::Order(OrderMessage::Failed(
                crate::error::OrderError::Status(503)
            )))
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(client.requests().await, vec![request]);
    }
}
