use shoplist_core::models::item::Item;

use crate::api::ListApi;

pub const FETCH_FAILED: &str = "Could not load the shopping list";
pub const ADD_FAILED: &str = "The item could not be added";
pub const DELETE_FAILED: &str = "The item could not be removed";

/// Client-side view of the list, kept in step with server responses.
///
/// Local state only changes after the server confirms a mutation.
#[derive(Debug, Clone)]
pub struct ListView {
    pub items: Vec<Item>,
    pub input: String,
    pub error: Option<String>,
    pub loading: bool,
    pub adding: bool,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            input: String::new(),
            error: None,
            loading: true,
            adding: false,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        !self.adding && !self.input.trim().is_empty()
    }

    /// Replace the local list with the server's.
    pub fn load(&mut self, api: &impl ListApi) {
        self.error = None;
        match api.list_items() {
            Ok(items) => self.items = items,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load list");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Submit the current input as a new item. Blank input is ignored.
    pub fn submit(&mut self, api: &impl ListApi) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.adding = true;
        self.error = None;
        match api.add_item(&text) {
            Ok(item) => {
                self.items.push(item);
                self.input.clear();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to add item");
                self.error = Some(ADD_FAILED.to_string());
            }
        }
        self.adding = false;
    }

    pub fn remove(&mut self, api: &impl ListApi, id: &str) {
        self.error = None;
        match api.delete_item(id) {
            Ok(()) => self.items.retain(|item| item.id != id),
            Err(e) => {
                tracing::warn!(error = %e, id, "failed to remove item");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }
}
