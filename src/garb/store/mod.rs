//! # Storage Layer
//!
//! The catalog persists through a small key-value abstraction: named text
//! values under fixed keys. The [`KvStore`] trait keeps the catalog logic
//! decoupled from where those values actually live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   under the data directory.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with an
//!   injectable write failure for exercising the swallow-on-write policy.
//!
//! ## Storage layout
//!
//! ```text
//! <data dir>/
//! ├── catalog.wardrobe.json       # ordered wardrobe items (JSON array)
//! └── catalog.savedOutfits.json   # ordered saved outfits (JSON array)
//! ```
//!
//! Both values carry the legacy unversioned shape; a missing key reads as
//! `None` and hydrates to an empty collection.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key for the serialized wardrobe collection.
pub const WARDROBE_KEY: &str = "catalog.wardrobe";

/// Key for the serialized saved-outfits collection.
pub const SAVED_OUTFITS_KEY: &str = "catalog.savedOutfits";

/// Abstract interface for durable named text values.
pub trait KvStore {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
