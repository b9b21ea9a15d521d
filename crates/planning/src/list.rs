use core::str::FromStr;

use serde::{Deserialize, Serialize};

use pantryplan_core::{DomainError, Entity, ItemId, ListId, ValueObject};

/// Planned-purchase status of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Planned,
    Optional,
}

impl ItemStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Planned => "planned",
            ItemStatus::Optional => "optional",
        }
    }
}

impl FromStr for ItemStatus {
    type Err = DomainError;

    /// Validating constructor: unrecognized input is a typed validation
    /// failure, never silently coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ItemStatus::Planned),
            "optional" => Ok(ItemStatus::Optional),
            other => Err(DomainError::validation(format!("unknown item status: {other}"))),
        }
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueObject for ItemStatus {}

/// A single planned purchase entry within a list.
///
/// `store_ref` and `note` are free text; both are kept trimmed, and an
/// empty-after-trim value is stored as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: ItemId,
    pub product_ref: String,
    pub quantity: f64,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entity for ListItem {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// A named, ordered collection of planned items.
///
/// Item order is meaningful: it is the user-visible order and the order the
/// sort operation mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    pub items: Vec<ListItem>,
}

impl ShoppingList {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Entity for ShoppingList {
    type Id = ListId;

    fn id(&self) -> &ListId {
        &self.id
    }
}

/// An item as submitted for insertion; the store assigns the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListItem {
    pub product_ref: String,
    pub quantity: f64,
    /// Defaults to [`ItemStatus::Planned`] when unset.
    pub status: Option<ItemStatus>,
    pub store_ref: Option<String>,
    pub note: Option<String>,
}

/// Partial update for an existing item.
///
/// Absent fields are left untouched. A present `note`/`store_ref` that trims
/// down to nothing clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemPatch {
    pub product_ref: Option<String>,
    pub quantity: Option<f64>,
    pub status: Option<ItemStatus>,
    pub note: Option<String>,
    pub store_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(product_ref: &str) -> ListItem {
        ListItem {
            id: ItemId::new(),
            product_ref: product_ref.to_string(),
            quantity: 1.0,
            status: ItemStatus::Planned,
            store_ref: None,
            note: None,
        }
    }

    #[test]
    fn status_defaults_to_planned() {
        assert_eq!(ItemStatus::default(), ItemStatus::Planned);
    }

    #[test]
    fn status_parses_known_values_and_rejects_the_rest() {
        assert_eq!("planned".parse::<ItemStatus>().unwrap(), ItemStatus::Planned);
        assert_eq!("optional".parse::<ItemStatus>().unwrap(), ItemStatus::Optional);

        let err = "urgent".parse::<ItemStatus>().unwrap_err();
        assert_eq!(err.code(), pantryplan_core::ErrorCode::ValidationError);
    }

    #[test]
    fn item_count_tracks_the_item_sequence() {
        let mut list = ShoppingList {
            id: ListId::new(),
            name: "Weekly Groceries".to_string(),
            items: vec![],
        };
        assert_eq!(list.item_count(), 0);

        list.items.push(test_item("Milk"));
        list.items.push(test_item("Eggs"));
        assert_eq!(list.item_count(), 2);
    }

    #[test]
    fn items_serialize_camel_case_and_omit_absent_optionals() {
        let item = test_item("Milk");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["productRef"], "Milk");
        assert_eq!(json["status"], "planned");
        assert!(json.get("storeRef").is_none());
        assert!(json.get("note").is_none());
    }
}
