use async_trait::async_trait;

use shoplist_core::models::item::Item;

use crate::error::StorageError;

/// Whole-list persistence capability.
///
/// Handlers only see this trait, so the file-backed store can be swapped for
/// [`MemoryStore`](crate::MemoryStore) in tests.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Load every item in insertion order.
    ///
    /// Never fails: an unreadable or missing backing document reads as an
    /// empty list.
    async fn read_all(&self) -> Vec<Item>;

    /// Replace the stored list with `items`.
    async fn write_all(&self, items: &[Item]) -> Result<(), StorageError>;
}

/// Remove the item with `id`, keeping the order of the rest.
///
/// Returns `false` when no item matched.
pub fn remove_by_id(items: &mut Vec<Item>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, text: &str) -> Item {
        Item {
            id: id.to_string(),
            text: text.to_string(),
            created_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn removes_only_the_matching_item() {
        let mut items = vec![item("1", "milk"), item("2", "eggs"), item("3", "bread")];
        assert!(remove_by_id(&mut items, "2"));

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn unknown_id_leaves_list_alone() {
        let mut items = vec![item("1", "milk"), item("2", "eggs")];
        assert!(!remove_by_id(&mut items, "9"));
        assert_eq!(items.len(), 2);
    }
}
