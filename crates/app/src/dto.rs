//! Application-boundary DTOs.
//!
//! Requests carry raw caller input (`status` as a plain string, validated in
//! the use case); responses are projections derived from domain state, never
//! stored.

use serde::{Deserialize, Serialize};

use pantryplan_core::{ItemId, ListId};
use pantryplan_planning::{ListItem, ShoppingList, SortDirection, SortField};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateShoppingListInput {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    pub list_id: ListId,
    pub product_ref: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub store_ref: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemInput {
    pub list_id: ListId,
    pub item_id: ItemId,
    #[serde(default)]
    pub product_ref: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub store_ref: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeItemQuantityInput {
    pub list_id: ListId,
    pub item_id: ItemId,
    pub delta: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemInput {
    pub list_id: ListId,
    pub item_id: ItemId,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortItemsInput {
    pub list_id: ListId,
    pub field: SortField,
    pub direction: SortDirection,
}

// -------------------------
// Response projections
// -------------------------

/// List-view shape: identity, name and a derived item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListSummary {
    pub id: ListId,
    pub name: String,
    pub item_count: usize,
}

/// Detail-view shape: the summary plus the ordered item sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListDetails {
    pub id: ListId,
    pub name: String,
    pub item_count: usize,
    pub items: Vec<ListItem>,
}

impl From<&ShoppingList> for ShoppingListSummary {
    fn from(list: &ShoppingList) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            item_count: list.item_count(),
        }
    }
}

impl From<&ShoppingList> for ShoppingListDetails {
    fn from(list: &ShoppingList) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            item_count: list.item_count(),
            items: list.items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantryplan_planning::ItemStatus;

    #[test]
    fn projections_derive_the_item_count() {
        let list = ShoppingList {
            id: ListId::new(),
            name: "Weekly Groceries".to_string(),
            items: vec![ListItem {
                id: ItemId::new(),
                product_ref: "Milk".to_string(),
                quantity: 2.0,
                status: ItemStatus::Planned,
                store_ref: None,
                note: None,
            }],
        };

        let summary = ShoppingListSummary::from(&list);
        assert_eq!(summary.item_count, 1);

        let details = ShoppingListDetails::from(&list);
        assert_eq!(details.item_count, 1);
        assert_eq!(details.items, list.items);
    }

    #[test]
    fn projections_serialize_camel_case() {
        let list = ShoppingList {
            id: ListId::new(),
            name: "Weekly Groceries".to_string(),
            items: vec![],
        };

        let json = serde_json::to_value(ShoppingListSummary::from(&list)).unwrap();
        assert_eq!(json["itemCount"], 0);
        assert_eq!(json["name"], "Weekly Groceries");
    }

    #[test]
    fn sort_input_deserializes_wire_field_names() {
        let json = format!(
            r#"{{"listId":"{}","field":"productRef","direction":"desc"}}"#,
            ListId::new()
        );
        let input: SortItemsInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.field, SortField::ProductRef);
        assert_eq!(input.direction, SortDirection::Desc);
    }
}
