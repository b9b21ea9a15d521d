use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use pantryplan_core::{DomainError, DomainResult, ItemId, ListId};
use pantryplan_planning::{
    ItemStatus, ListItem, ListItemPatch, NewListItem, ShoppingList, Sorting,
};

use super::r#trait::ShoppingListRepository;

/// Default simulated backend latency per operation.
const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// In-memory reference store for shopping lists.
///
/// Owns the canonical mutable collection behind an `RwLock`. Every call
/// suspends for the configured latency first, modeling a real backend, and
/// only then takes the lock — guards are never held across a suspension
/// point. Intended for tests/dev and as the behavioral reference for other
/// backends.
#[derive(Debug)]
pub struct InMemoryShoppingListRepository {
    lists: RwLock<Vec<ShoppingList>>,
    latency: Duration,
}

impl Default for InMemoryShoppingListRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryShoppingListRepository {
    /// Store seeded with the fixture data (one "Weekly Groceries" list).
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(seed_lists()),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Store holding no lists. Useful for isolated tests.
    pub fn empty() -> Self {
        Self {
            lists: RwLock::new(Vec::new()),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency (e.g. `Duration::ZERO` in tests).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    // A panicking writer cannot leave the collection structurally invalid
    // (no mutation here spans an unwind point), so a poisoned lock is
    // recoverable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<ShoppingList>> {
        self.lists.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ShoppingList>> {
        self.lists.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ShoppingListRepository for InMemoryShoppingListRepository {
    async fn list(&self) -> DomainResult<Vec<ShoppingList>> {
        self.simulate_latency().await;
        Ok(self.read().clone())
    }

    async fn get_by_id(&self, id: ListId) -> DomainResult<ShoppingList> {
        self.simulate_latency().await;
        self.read()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(DomainError::ListNotFound(id))
    }

    async fn create(&self, name: &str) -> DomainResult<ShoppingList> {
        self.simulate_latency().await;
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidListName);
        }

        let mut lists = self.write();
        let lowered = trimmed.to_lowercase();
        if lists.iter().any(|l| l.name.to_lowercase() == lowered) {
            return Err(DomainError::DuplicateList(trimmed.to_string()));
        }

        let list = ShoppingList {
            id: ListId::new(),
            name: trimmed.to_string(),
            items: Vec::new(),
        };
        debug!(list_id = %list.id, name = %list.name, "created shopping list");
        lists.insert(0, list.clone());
        Ok(list)
    }

    async fn add_item(&self, list_id: ListId, item: NewListItem) -> DomainResult<ShoppingList> {
        self.simulate_latency().await;
        let mut lists = self.write();
        let list = find_list_mut(&mut lists, list_id)?;

        let product_ref = item.product_ref.trim();
        if product_ref.is_empty() {
            return Err(DomainError::InvalidItemName);
        }

        let new_item = ListItem {
            id: ItemId::new(),
            product_ref: product_ref.to_string(),
            quantity: item.quantity,
            status: item.status.unwrap_or_default(),
            store_ref: normalize_optional(item.store_ref),
            note: normalize_optional(item.note),
        };
        debug!(%list_id, item_id = %new_item.id, product_ref = %new_item.product_ref, "added item");
        list.items.push(new_item);
        Ok(list.clone())
    }

    async fn update_item(
        &self,
        list_id: ListId,
        item_id: ItemId,
        patch: ListItemPatch,
    ) -> DomainResult<ShoppingList> {
        self.simulate_latency().await;
        let mut lists = self.write();
        let list = find_list_mut(&mut lists, list_id)?;
        let item = list
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(DomainError::ItemNotFound(item_id))?;

        if let Some(product_ref) = patch.product_ref {
            let trimmed = product_ref.trim();
            if trimmed.is_empty() {
                return Err(DomainError::InvalidItemName);
            }
            item.product_ref = trimmed.to_string();
        }
        if let Some(quantity) = patch.quantity {
            // Applied unvalidated; `validate_quantity` is a standalone guard.
            item.quantity = quantity;
        }
        if let Some(status) = patch.status {
            item.status = status;
        }
        if let Some(note) = patch.note {
            item.note = normalize_optional(Some(note));
        }
        if let Some(store_ref) = patch.store_ref {
            item.store_ref = normalize_optional(Some(store_ref));
        }

        debug!(%list_id, %item_id, "updated item");
        Ok(list.clone())
    }

    async fn change_item_quantity(
        &self,
        list_id: ListId,
        item_id: ItemId,
        delta: f64,
    ) -> DomainResult<ShoppingList> {
        self.simulate_latency().await;
        let mut lists = self.write();
        let list = find_list_mut(&mut lists, list_id)?;
        let index = list
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(DomainError::ItemNotFound(item_id))?;

        let next = list.items[index].quantity + delta;
        if next <= 0.0 {
            debug!(%list_id, %item_id, next, "quantity reached the deletion threshold, removing item");
            list.items.remove(index);
        } else {
            list.items[index].quantity = next;
        }
        Ok(list.clone())
    }

    async fn remove_item(&self, list_id: ListId, item_id: ItemId) -> DomainResult<ShoppingList> {
        self.simulate_latency().await;
        let mut lists = self.write();
        let list = find_list_mut(&mut lists, list_id)?;
        let index = list
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(DomainError::ItemNotFound(item_id))?;

        list.items.remove(index);
        debug!(%list_id, %item_id, "removed item");
        Ok(list.clone())
    }

    async fn sort_items(&self, list_id: ListId, sorting: Sorting) -> DomainResult<ShoppingList> {
        self.simulate_latency().await;
        let mut lists = self.write();
        let list = find_list_mut(&mut lists, list_id)?;
        // `sort_by` is stable: equal keys keep their current relative order.
        list.items.sort_by(|a, b| sorting.compare(a, b));
        Ok(list.clone())
    }

    async fn duplicate(&self, list_id: ListId) -> DomainResult<ShoppingList> {
        self.simulate_latency().await;
        let mut lists = self.write();
        let original = lists
            .iter()
            .find(|l| l.id == list_id)
            .ok_or(DomainError::ListNotFound(list_id))?;

        let copy = ShoppingList {
            id: ListId::new(),
            // Uniqueness is deliberately not re-checked for the copy name.
            name: format!("{} Copy", original.name),
            items: original
                .items
                .iter()
                .map(|i| ListItem { id: ItemId::new(), ..i.clone() })
                .collect(),
        };
        debug!(original = %list_id, copy = %copy.id, "duplicated shopping list");
        lists.insert(0, copy.clone());
        Ok(copy)
    }
}

fn find_list_mut(lists: &mut [ShoppingList], list_id: ListId) -> DomainResult<&mut ShoppingList> {
    lists
        .iter_mut()
        .find(|l| l.id == list_id)
        .ok_or(DomainError::ListNotFound(list_id))
}

/// Trim an optional text field; empty after trim is stored as absent.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Fixture data the reference store starts with.
fn seed_lists() -> Vec<ShoppingList> {
    vec![ShoppingList {
        id: ListId::new(),
        name: "Weekly Groceries".to_string(),
        items: vec![
            ListItem {
                id: ItemId::new(),
                product_ref: "Milk".to_string(),
                quantity: 2.0,
                status: ItemStatus::Planned,
                store_ref: Some("Central Market".to_string()),
                note: None,
            },
            ListItem {
                id: ItemId::new(),
                product_ref: "Eggs".to_string(),
                quantity: 12.0,
                status: ItemStatus::Optional,
                store_ref: None,
                note: None,
            },
        ],
    }]
}
