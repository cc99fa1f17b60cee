//! Fixed reference data: pizza sizes and the topping catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pizza sizes offered by the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Size::S => "Small",
            Size::M => "Medium",
            Size::L => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not exactly one of `S`, `M`, `L`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSize(pub String);

impl fmt::Display for UnknownSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown size '{}'", self.0)
    }
}

impl std::error::Error for UnknownSize {}

impl FromStr for Size {
    type Err = UnknownSize;

    // Case-sensitive on purpose: the service only accepts upper-case codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Size::S),
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            other => Err(UnknownSize(other.to_string())),
        }
    }
}

/// Catalog identifier of a topping, as sent to the order service
pub type ToppingId = &'static str;

/// One selectable add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: ToppingId,
    pub text: &'static str,
}

/// The full topping catalog, in display order
pub const TOPPINGS: [Topping; 5] = [
    Topping { id: "1", text: "Pepperoni" },
    Topping { id: "2", text: "Green Peppers" },
    Topping { id: "3", text: "Pineapple" },
    Topping { id: "4", text: "Mushrooms" },
    Topping { id: "5", text: "Ham" },
];

/// Look up a topping by its catalog id
pub fn topping(id: &str) -> Option<&'static Topping> {
    TOPPINGS.iter().find(|t| t.id == id)
}

pub fn is_known_topping(id: &str) -> bool {
    topping(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_parses_only_exact_codes() {
        assert_eq!("S".parse::<Size>(), Ok(Size::S));
        assert_eq!("M".parse::<Size>(), Ok(Size::M));
        assert_eq!("L".parse::<Size>(), Ok(Size::L));

        for bad in ["", "s", "XL", " M", "Medium", "SM"] {
            assert!(bad.parse::<Size>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn size_serializes_as_its_code() {
        assert_eq!(serde_json::to_string(&Size::M).unwrap(), "\"M\"");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = TOPPINGS.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TOPPINGS.len());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(topping("3").map(|t| t.text), Some("Pineapple"));
        assert!(topping("Pineapple").is_none());
        assert!(!is_known_topping("6"));
    }
}
