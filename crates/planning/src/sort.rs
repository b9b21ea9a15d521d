//! Item ordering specification.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use pantryplan_core::ValueObject;

use crate::list::ListItem;

/// Sort key for a list's item sequence. Falls back to `Quantity` when no
/// field is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    ProductRef,
    #[default]
    Quantity,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Complete ordering specification: key + direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ValueObject for Sorting {}

impl Sorting {
    /// Compare two items under this specification.
    ///
    /// String keys compare case-insensitively (Unicode lowercase), quantity
    /// numerically via total ordering. Meant for a stable sort, so equal
    /// keys keep their current relative order.
    pub fn compare(&self, a: &ListItem, b: &ListItem) -> Ordering {
        let ordering = match self.field {
            SortField::ProductRef => caseless_cmp(&a.product_ref, &b.product_ref),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
            SortField::Quantity => a.quantity.total_cmp(&b.quantity),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Case-insensitive lexicographic comparison.
fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
