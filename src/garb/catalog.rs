//! The catalog: an in-memory pair of collections (wardrobe items, saved
//! outfits) mirrored to the key-value store on every mutation and hydrated
//! from it at startup.
//!
//! Persistence is fail-safe in both directions. A read or decode failure on
//! either key hydrates *both* collections as empty rather than surfacing a
//! parse error; a write failure is warn-logged and swallowed, leaving the
//! in-memory state authoritative for the rest of the session.

use chrono::Utc;
use tracing::warn;

use crate::error::Result;
use crate::model::{ItemDraft, Outfit, WardrobeItem};
use crate::store::{KvStore, SAVED_OUTFITS_KEY, WARDROBE_KEY};

#[derive(Debug, Default)]
pub struct Catalog {
    pub wardrobe: Vec<WardrobeItem>,
    pub saved_outfits: Vec<Outfit>,
}

impl Catalog {
    /// Hydrate both collections from the store. Never fails: malformed or
    /// unreadable stored text degrades to an empty catalog.
    pub fn load<S: KvStore>(store: &S) -> Self {
        match Self::try_load(store) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "could not hydrate catalog, starting fresh");
                Self::default()
            }
        }
    }

    fn try_load<S: KvStore>(store: &S) -> Result<Self> {
        let wardrobe = match store.read(WARDROBE_KEY)? {
            Some(text) => serde_json::from_str(&text)?,
            None => Vec::new(),
        };
        let saved_outfits = match store.read(SAVED_OUTFITS_KEY)? {
            Some(text) => serde_json::from_str(&text)?,
            None => Vec::new(),
        };
        Ok(Self {
            wardrobe,
            saved_outfits,
        })
    }

    /// Validate the draft, append the new item and persist. Returns the item
    /// together with whether it was the first-ever upload.
    pub fn add_item<S: KvStore>(
        &mut self,
        store: &mut S,
        draft: ItemDraft,
    ) -> Result<(WardrobeItem, bool)> {
        let item = WardrobeItem::from_draft(draft, self.next_item_id())?;
        let first_upload = self.wardrobe.is_empty();
        self.wardrobe.push(item.clone());
        self.persist(store);
        Ok((item, first_upload))
    }

    /// Ids are millisecond-clock-derived; bumping past the current maximum
    /// keeps them unique even when two adds land in the same millisecond.
    fn next_item_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max_id = self.wardrobe.iter().map(|item| item.id).max().unwrap_or(0);
        now.max(max_id + 1)
    }

    /// Mark the outfit saved, stamp the day and append it. A no-op when the
    /// outfit is already saved, so the saved collection holds it exactly
    /// once. Returns whether anything changed.
    pub fn save_outfit<S: KvStore>(&mut self, store: &mut S, outfit: &mut Outfit) -> bool {
        if outfit.saved || self.saved_outfits.iter().any(|o| o.id == outfit.id) {
            return false;
        }
        outfit.saved = true;
        outfit.created_at = Some(Utc::now().date_naive());
        self.saved_outfits.push(outfit.clone());
        self.persist(store);
        true
    }

    /// Remove a saved outfit by id. Idempotent: an unknown id is not an
    /// error. Returns whether an outfit was removed.
    pub fn remove_outfit<S: KvStore>(&mut self, store: &mut S, id: i64) -> bool {
        let before = self.saved_outfits.len();
        self.saved_outfits.retain(|o| o.id != id);
        let removed = self.saved_outfits.len() < before;
        self.persist(store);
        removed
    }

    /// Serialize both collections under their fixed keys. Write failures are
    /// logged and swallowed; the in-memory state remains valid for the
    /// session either way.
    pub fn persist<S: KvStore>(&self, store: &mut S) {
        if let Err(e) = self.try_persist(store) {
            warn!(error = %e, "could not persist catalog");
        }
    }

    fn try_persist<S: KvStore>(&self, store: &mut S) -> Result<()> {
        store.write(WARDROBE_KEY, &serde_json::to_string_pretty(&self.wardrobe)?)?;
        store.write(
            SAVED_OUTFITS_KEY,
            &serde_json::to_string_pretty(&self.saved_outfits)?,
        )?;
        Ok(())
    }
}
