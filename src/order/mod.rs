//! Pizza order domain: catalog, form state, schema and the intake client

pub mod catalog;
pub mod client;
pub mod form;
pub mod mock;
pub mod validation;

pub use catalog::{Size, Topping, ToppingId, TOPPINGS};
pub use client::{HttpOrderClient, OrderClient};
pub use form::{FormErrors, FormField, OrderForm, OrderReceipt, OrderRequest, SubmissionOutcome};
pub use mock::MockOrderClient;
