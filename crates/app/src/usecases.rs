//! Single-operation orchestrators over the repository port.
//!
//! Each use case trims free text, performs fail-fast validation that needs
//! no store access, then delegates. Repository errors pass through verbatim;
//! nothing is caught, wrapped or rewritten here.

use core::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use pantryplan_core::{DomainError, DomainResult, ListId};
use pantryplan_infra::ShoppingListRepository;
use pantryplan_planning::{ItemStatus, ListItemPatch, NewListItem, ShoppingList, Sorting};

use crate::dto::{
    AddItemInput, ChangeItemQuantityInput, CreateShoppingListInput, RemoveItemInput,
    SortItemsInput, UpdateItemInput,
};

fn parse_status(status: Option<&str>) -> DomainResult<Option<ItemStatus>> {
    status.map(ItemStatus::from_str).transpose()
}

/// Create a named, empty shopping list.
pub struct CreateShoppingList {
    repository: Arc<dyn ShoppingListRepository>,
}

impl CreateShoppingList {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: CreateShoppingListInput) -> DomainResult<ShoppingList> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidListName);
        }
        debug!(name, "creating shopping list");
        self.repository.create(name).await
    }
}

/// Fetch every stored list.
pub struct GetShoppingLists {
    repository: Arc<dyn ShoppingListRepository>,
}

impl GetShoppingLists {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> DomainResult<Vec<ShoppingList>> {
        self.repository.list().await
    }
}

/// Fetch one list by identity.
pub struct GetShoppingList {
    repository: Arc<dyn ShoppingListRepository>,
}

impl GetShoppingList {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: ListId) -> DomainResult<ShoppingList> {
        self.repository.get_by_id(id).await
    }
}

/// Append an item to a list.
pub struct AddItemToList {
    repository: Arc<dyn ShoppingListRepository>,
}

impl AddItemToList {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: AddItemInput) -> DomainResult<ShoppingList> {
        let product_ref = input.product_ref.trim();
        if product_ref.is_empty() {
            return Err(DomainError::InvalidItemName);
        }
        let status = parse_status(input.status.as_deref())?;

        self.repository
            .add_item(
                input.list_id,
                NewListItem {
                    product_ref: product_ref.to_string(),
                    quantity: input.quantity.unwrap_or(1.0),
                    status,
                    store_ref: input.store_ref.map(|s| s.trim().to_string()),
                    note: input.note.map(|s| s.trim().to_string()),
                },
            )
            .await
    }
}

/// Apply a partial update to an item.
pub struct UpdateItemInList {
    repository: Arc<dyn ShoppingListRepository>,
}

impl UpdateItemInList {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: UpdateItemInput) -> DomainResult<ShoppingList> {
        if let Some(product_ref) = &input.product_ref {
            if product_ref.trim().is_empty() {
                return Err(DomainError::InvalidItemName);
            }
        }

        let patch = ListItemPatch {
            product_ref: input.product_ref.map(|s| s.trim().to_string()),
            quantity: input.quantity,
            status: parse_status(input.status.as_deref())?,
            note: input.note.map(|s| s.trim().to_string()),
            store_ref: input.store_ref.map(|s| s.trim().to_string()),
        };
        self.repository
            .update_item(input.list_id, input.item_id, patch)
            .await
    }
}

/// Adjust an item's quantity by a signed delta.
pub struct ChangeItemQuantity {
    repository: Arc<dyn ShoppingListRepository>,
}

impl ChangeItemQuantity {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: ChangeItemQuantityInput) -> DomainResult<ShoppingList> {
        self.repository
            .change_item_quantity(input.list_id, input.item_id, input.delta)
            .await
    }
}

/// Remove an item from a list.
pub struct RemoveItemFromList {
    repository: Arc<dyn ShoppingListRepository>,
}

impl RemoveItemFromList {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: RemoveItemInput) -> DomainResult<ShoppingList> {
        self.repository.remove_item(input.list_id, input.item_id).await
    }
}

/// Reorder a list's items by a chosen sort key.
pub struct SortListItems {
    repository: Arc<dyn ShoppingListRepository>,
}

impl SortListItems {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: SortItemsInput) -> DomainResult<ShoppingList> {
        self.repository
            .sort_items(
                input.list_id,
                Sorting { field: input.field, direction: input.direction },
            )
            .await
    }
}

/// Copy an entire list under fresh identities.
pub struct DuplicateShoppingList {
    repository: Arc<dyn ShoppingListRepository>,
}

impl DuplicateShoppingList {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, list_id: ListId) -> DomainResult<ShoppingList> {
        self.repository.duplicate(list_id).await
    }
}

/// All planning use cases wired from one shared repository instance.
///
/// Construction is the configuration seam: pass whichever backend should
/// serve the module (no ambient environment lookup).
pub struct PlanningUseCases {
    pub create_shopping_list: CreateShoppingList,
    pub get_shopping_lists: GetShoppingLists,
    pub get_shopping_list: GetShoppingList,
    pub add_item_to_list: AddItemToList,
    pub update_item_in_list: UpdateItemInList,
    pub change_item_quantity: ChangeItemQuantity,
    pub remove_item_from_list: RemoveItemFromList,
    pub sort_list_items: SortListItems,
    pub duplicate_shopping_list: DuplicateShoppingList,
}

impl PlanningUseCases {
    pub fn new(repository: Arc<dyn ShoppingListRepository>) -> Self {
        Self {
            create_shopping_list: CreateShoppingList::new(repository.clone()),
            get_shopping_lists: GetShoppingLists::new(repository.clone()),
            get_shopping_list: GetShoppingList::new(repository.clone()),
            add_item_to_list: AddItemToList::new(repository.clone()),
            update_item_in_list: UpdateItemInList::new(repository.clone()),
            change_item_quantity: ChangeItemQuantity::new(repository.clone()),
            remove_item_from_list: RemoveItemFromList::new(repository.clone()),
            sort_list_items: SortListItems::new(repository.clone()),
            duplicate_shopping_list: DuplicateShoppingList::new(repository),
        }
    }
}
