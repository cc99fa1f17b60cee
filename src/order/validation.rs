//! Order schema: the rule set every form value is checked against
//!
//! Each rule is a plain function returning the fixed customer-facing message
//! on failure, so the same rules serve per-field checks while typing and the
//! whole-form check at submit time.

use crate::order::catalog::{self, Size};
use crate::order::form::{FormErrors, FormField};

pub const FULL_NAME_TOO_SHORT: &str = "Full name must be at least 3 characters";
pub const FULL_NAME_TOO_LONG: &str = "Full name must be at most 20 characters";
pub const SIZE_INCORRECT: &str = "Size must be S or M or L";
pub const TOPPING_UNKNOWN: &str = "Toppings must be chosen from the menu";

pub const FULL_NAME_MIN_CHARS: usize = 3;
pub const FULL_NAME_MAX_CHARS: usize = 20;

/// Name must be 3-20 characters once surrounding whitespace is trimmed.
/// An empty name fails the lower bound.
pub fn validate_full_name(value: &str) -> Result<(), &'static str> {
    let len = value.trim().chars().count();
    if len < FULL_NAME_MIN_CHARS {
        Err(FULL_NAME_TOO_SHORT)
    } else if len > FULL_NAME_MAX_CHARS {
        Err(FULL_NAME_TOO_LONG)
    } else {
        Ok(())
    }
}

pub fn validate_size(value: &str) -> Result<Size, &'static str> {
    value.parse::<Size>().map_err(|_| SIZE_INCORRECT)
}

/// Every selected id must exist in the catalog. Any number of toppings,
/// including none, is fine.
pub fn validate_toppings<'a, I>(ids: I) -> Result<(), &'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    if ids.into_iter().all(catalog::is_known_topping) {
        Ok(())
    } else {
        Err(TOPPING_UNKNOWN)
    }
}

/// Check a whole set of values and collect every violated rule
pub fn validate_all<'a, I>(full_name: &str, size: &str, toppings: I) -> FormErrors
where
    I: IntoIterator<Item = &'a str>,
{
    let mut errors = FormErrors::default();
    errors.record(FormField::FullName, validate_full_name(full_name).err());
    errors.record(FormField::Size, validate_size(size).err());
    errors.record(FormField::Toppings, validate_toppings(toppings).err());
    errors
}
