//! In-memory media library
//!
//! Ordered items with string fields, standing in for the live application in
//! unit and integration tests.

use std::collections::BTreeMap;

use super::{ItemId, LibraryError, MediaLibrary};

/// In-memory stand-in for the external application.
///
/// Items are "selected" in insertion order and keep their fields in a plain
/// map; reads of absent fields fail the same way a live read of a bad field
/// does.
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    items: Vec<BTreeMap<String, String>>,
    running: bool,
}

impl MemoryLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            running: true,
        }
    }

    /// Append one selected item built from (field, value) pairs
    pub fn push_item(&mut self, fields: &[(&str, &str)]) {
        self.items.push(
            fields
                .iter()
                .map(|(field, value)| ((*field).to_string(), (*value).to_string()))
                .collect(),
        );
    }

    /// Read a field back for assertions (0-based item index)
    #[must_use]
    pub fn field(&self, index: usize, field: &str) -> Option<&str> {
        self.items.get(index)?.get(field).map(String::as_str)
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    fn item(&self, item: ItemId) -> Result<&BTreeMap<String, String>, LibraryError> {
        self.items
            .get(item.0.wrapping_sub(1))
            .ok_or(LibraryError::UnknownItem { item })
    }
}

impl MediaLibrary for MemoryLibrary {
    fn is_running(&self) -> bool {
        self.running
    }

    fn selected_items(&self) -> Result<Vec<ItemId>, LibraryError> {
        Ok((1..=self.items.len()).map(ItemId).collect())
    }

    fn get_field(&self, item: ItemId, field: &str) -> Result<String, LibraryError> {
        self.item(item)?
            .get(field)
            .cloned()
            .ok_or_else(|| LibraryError::MissingField {
                item,
                field: field.to_string(),
            })
    }

    fn set_field(&mut self, item: ItemId, field: &str, value: &str) -> Result<(), LibraryError> {
        self.item(item)?;
        self.items[item.0 - 1].insert(field.to_string(), value.to_string());
        Ok(())
    }
}
