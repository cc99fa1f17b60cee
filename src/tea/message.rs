/// Central message type following the TEA pattern
///
/// All user interactions, system events and async results flow through
/// these messages into `update`.

use crate::error::OrderError;
use crate::order::FormField;

/// Main application message type
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// System-level messages
    System(SystemMessage),

    /// UI interaction messages
    UI(UIMessage),

    /// Order form edits and submit requests
    Form(FormMessage),

    /// Results of an order submission
    Order(OrderMessage),
}

/// System-level messages for application lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum SystemMessage {
    /// Application should quit
    Quit,

    /// Resize terminal
    Resize(u16, u16),
}

/// UI-related messages for interface interactions
#[derive(Debug, Clone, PartialEq)]
pub enum UIMessage {
    /// Navigate to a different page
    Navigate(Route),

    /// Move keyboard focus forward
    FocusNext,

    /// Move keyboard focus backward
    FocusPrevious,

    /// Move the topping cursor by the given number of rows
    MoveToppingCursor(i32),
}

/// Order form messages
#[derive(Debug, Clone, PartialEq)]
pub enum FormMessage {
    /// A text or select field now holds this value
    FieldChanged(FormField, String),

    /// A topping checkbox changed (catalog id, checked)
    ToppingToggled(String, bool),

    /// Async whole-form check finished for the given form revision
    ValidityComputed { revision: u64, valid: bool },

    /// Submit the form
    Submit,
}

/// Order submission results
#[derive(Debug, Clone, PartialEq)]
pub enum OrderMessage {
    /// The service accepted the order with this message
    Succeeded(String),

    /// Submission failed; the customer only sees the generic message
    Failed(OrderError),
}

/// Application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Order,
}

impl From<SystemMessage> for Message {
    fn from(msg: SystemMessage) -> Self {
        Message::System(msg)
    }
}

impl From<UIMessage> for Message {
    fn from(msg: UIMessage) -> Self {
        Message::UI(msg)
    }
}

impl From<FormMessage> for Message {
    fn from(msg: FormMessage) -> Self {
        Message::Form(msg)
    }
}

impl From<OrderMessage> for Message {
    fn from(msg: OrderMessage) -> Self {
        Message::Order(msg)
    }
}
