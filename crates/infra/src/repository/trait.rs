use async_trait::async_trait;

use pantryplan_core::{DomainResult, ItemId, ListId};
use pantryplan_planning::{ListItemPatch, NewListItem, ShoppingList, Sorting};

/// Storage contract every shopping-list backend must satisfy.
///
/// Operations may suspend (a remote backend performs I/O; the in-memory
/// reference simulates it). Every returned list is an independent copy —
/// callers never observe a backend's live state, so later mutations cannot
/// corrupt values already handed out.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Every list currently stored, each independently copied.
    async fn list(&self) -> DomainResult<Vec<ShoppingList>>;

    /// Fetch one list by identity.
    async fn get_by_id(&self, id: ListId) -> DomainResult<ShoppingList>;

    /// Create an empty list under a fresh identity, prepended to the store.
    ///
    /// The trimmed name must be non-empty and unique ignoring case.
    async fn create(&self, name: &str) -> DomainResult<ShoppingList>;

    /// Append a new item (identity assigned by the store) to a list.
    async fn add_item(&self, list_id: ListId, item: NewListItem) -> DomainResult<ShoppingList>;

    /// Apply the present fields of `patch` to an existing item; absent
    /// fields are left untouched.
    async fn update_item(
        &self,
        list_id: ListId,
        item_id: ItemId,
        patch: ListItemPatch,
    ) -> DomainResult<ShoppingList>;

    /// Adjust an item's quantity by `delta`. Reaching zero or below removes
    /// the item instead of failing.
    async fn change_item_quantity(
        &self,
        list_id: ListId,
        item_id: ItemId,
        delta: f64,
    ) -> DomainResult<ShoppingList>;

    /// Remove an item from a list.
    async fn remove_item(&self, list_id: ListId, item_id: ItemId) -> DomainResult<ShoppingList>;

    /// Reorder a list's item sequence in place. The sort is stable with
    /// respect to equal keys.
    async fn sort_items(&self, list_id: ListId, sorting: Sorting) -> DomainResult<ShoppingList>;

    /// Copy a list and every item under fresh identities, prepended to the
    /// store. The copy's name (`"<original> Copy"`) is not checked for
    /// uniqueness.
    async fn duplicate(&self, list_id: ListId) -> DomainResult<ShoppingList>;
}
