use super::KvStore;
use crate::error::{GarbError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, simulating quota exhaustion.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KvStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(GarbError::Store("storage quota exceeded".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::{Category, ItemDraft, WardrobeItem};

    /// Build a wardrobe item without going through the clock-derived id path,
    /// so tests control ids and ordering.
    pub fn item(id: i64, name: &str, category: Category) -> WardrobeItem {
        WardrobeItem::from_draft(
            ItemDraft {
                name: Some(name.to_string()),
                category: Some(category),
                ..ItemDraft::default()
            },
            id,
        )
        .unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed the store with `count` items per given category, named
        /// "<Category> 1", "<Category> 2", ...
        pub fn with_items(mut self, count: usize, categories: &[Category]) -> Self {
            let mut catalog = Catalog::load(&self.store);
            for &category in categories {
                for i in 0..count {
                    let draft = ItemDraft {
                        name: Some(format!("{} {}", category.display_name(), i + 1)),
                        category: Some(category),
                        ..ItemDraft::default()
                    };
                    catalog.add_item(&mut self.store, draft).unwrap();
                }
            }
            self
        }
    }
}
