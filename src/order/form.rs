//! Order form state
//!
//! `OrderForm` is a value record. Every change consumes the old form and
//! returns a new one with a bumped revision, so work started against an
//! older revision can be recognised and discarded.

use crate::order::catalog::{Size, TOPPINGS};
use crate::order::validation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    FullName,
    Size,
    Toppings,
}

impl FormField {
    /// Name used in the request body and in error listings
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Size => "size",
            FormField::Toppings => "toppings",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to message. A missing entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    /// Set or clear the entry for one field
    pub fn record(&mut self, field: FormField, error: Option<&str>) {
        match error {
            Some(message) => {
                self.0.insert(field, message.to_string());
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// JSON body posted to the order service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub full_name: String,
    pub size: Size,
    pub toppings: Vec<String>,
}

/// Successful answer from the order service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderReceipt {
    pub message: String,
}

/// Message shown after a submit attempt. Success and failure never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Success(message) | SubmissionOutcome::Failure(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}

/// Current values of the order form plus their per-field errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub full_name: String,
    /// Raw size selection, empty when nothing is chosen
    pub size: String,
    /// Selected topping catalog ids
    pub toppings: BTreeSet<String>,
    pub errors: FormErrors,
    /// Bumped on every value change
    pub revision: u64,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full name and re-check only that field
    pub fn with_full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = value.into();
        let error = validation::validate_full_name(&self.full_name).err();
        self.errors.record(FormField::FullName, error);
        self.revision += 1;
        self
    }

    /// Replace the size selection and re-check only that field
    pub fn with_size(mut self, value: impl Into<String>) -> Self {
        self.size = value.into();
        let error = validation::validate_size(&self.size).err();
        self.errors.record(FormField::Size, error);
        self.revision += 1;
        self
    }

    /// Text/select change dispatch. Toppings change through `with_topping`.
    pub fn with_field(self, field: FormField, value: impl Into<String>) -> Self {
        match field {
            FormField::FullName => self.with_full_name(value),
            FormField::Size => self.with_size(value),
            FormField::Toppings => {
                tracing::debug!("Ignoring text change for toppings field");
                self
            }
        }
    }

    /// Check or uncheck one topping
    pub fn with_topping(mut self, id: impl Into<String>, checked: bool) -> Self {
        let id = id.into();
        if checked {
            self.toppings.insert(id);
        } else {
            self.toppings.remove(&id);
        }
        let error = validation::validate_toppings(self.toppings.iter().map(String::as_str)).err();
        self.errors.record(FormField::Toppings, error);
        self.revision += 1;
        self
    }

    pub fn has_topping(&self, id: &str) -> bool {
        self.toppings.contains(id)
    }

    /// Run the full schema against the current values
    pub fn validate(&self) -> FormErrors {
        validation::validate_all(
            &self.full_name,
            &self.size,
            self.toppings.iter().map(String::as_str),
        )
    }

    /// Both required fields carry something
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.size.is_empty()
    }

    /// Submit gate as far as the form itself can tell
    pub fn can_submit(&self) -> bool {
        self.is_complete() && self.errors.is_empty()
    }

    /// Validate everything and package the values for sending
    pub fn to_request(&self) -> Result<OrderRequest, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let size = validation::validate_size(&self.size).map_err(|message| {
            let mut errors = FormErrors::default();
            errors.record(FormField::Size, Some(message));
            errors
        })?;

        // Catalog order, independent of the order toppings were clicked
        let toppings = TOPPINGS
            .iter()
            .filter(|t| self.toppings.contains(t.id))
            .map(|t| t.id.to_string())
            .collect();

        Ok(OrderRequest {
            full_name: self.full_name.trim().to_string(),
            size,
            toppings,
        })
    }

    /// Same form with every error from a full validation filled in
    pub fn with_errors(mut self, errors: FormErrors) -> Self {
        self.errors = errors;
        self
    }

    /// Back to defaults. The revision keeps counting up.
    pub fn reset(self) -> Self {
        Self {
            revision: self.revision + 1,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::validation::{FULL_NAME_TOO_SHORT, SIZE_INCORRECT};

    #[test]
    fn field_change_only_touches_its_own_error() {
        let form = OrderForm::new().with_size("XL").with_full_name("Al");
        assert_eq!(form.errors.get(FormField::Size), Some(SIZE_INCORRECT));
        assert_eq!(form.errors.get(FormField::FullName), Some(FULL_NAME_TOO_SHORT));

        let form = form.with_full_name("Alice");
        assert_eq!(form.errors.get(FormField::FullName), None);
        assert_eq!(form.errors.get(FormField::Size), Some(SIZE_INCORRECT));
    }

    #[test]
    fn every_change_bumps_revision() {
        let form = OrderForm::new();
        assert_eq!(form.revision, 0);
        let form = form.with_full_name("A").with_size("M").with_topping("1", true);
        assert_eq!(form.revision, 3);
        assert_eq!(form.reset().revision, 4);
    }

    #[test]
    fn toggle_pair_restores_toppings() {
        let before = OrderForm::new().with_topping("2", true);
        let after = before.clone().with_topping("4", true).with_topping("4", false);
        assert_eq!(before.toppings, after.toppings);
    }

    #[test]
    fn unchecking_an_unselected_topping_is_harmless() {
        let form = OrderForm::new().with_topping("1", false);
        assert!(form.toppings.is_empty());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn request_is_trimmed_and_in_catalog_order() {
        let form = OrderForm::new()
            .with_full_name("  Alice Smith ")
            .with_size("M")
            .with_topping("3", true)
            .with_topping("1", true);

        let request = form.to_request().unwrap();
        assert_eq!(request.full_name, "Alice Smith");
        assert_eq!(request.size, Size::M);
        assert_eq!(request.toppings, vec!["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn request_body_uses_wire_names() {
        let request = OrderRequest {
            full_name: "Alice Smith".into(),
            size: Size::L,
            toppings: vec!["5".into()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"fullName": "Alice Smith", "size": "L", "toppings": ["5"]})
        );
    }

    #[test]
    fn invalid_form_does_not_produce_a_request() {
        let errors = OrderForm::new().with_full_name("Al").with_size("M").to_request().unwrap_err();
        assert_eq!(errors.get(FormField::FullName), Some(FULL_NAME_TOO_SHORT));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn errors_display_lists_fields() {
        let errors = OrderForm::new().validate();
        assert_eq!(
            errors.to_string(),
            format!("fullName: {}; size: {}", FULL_NAME_TOO_SHORT, SIZE_INCORRECT)
        );
    }
}
