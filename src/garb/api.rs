//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for all garb
//! operations regardless of the UI in front of it. It dispatches to the
//! appropriate command, supplies ambient inputs (the random source), and
//! returns structured `CmdResult` values. No business logic, no I/O
//! formatting, no printing.
//!
//! `GarbApi<S: KvStore>` is generic over the storage backend: `FileStore` in
//! production, `InMemoryStore` in tests.

use rand::Rng;

use crate::commands;
use crate::error::Result;
use crate::model::{ItemDraft, Outfit, Weather};
use crate::store::KvStore;

pub struct GarbApi<S: KvStore> {
    store: S,
}

impl<S: KvStore> GarbApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_items(&self, filter: commands::list::ItemFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    /// Compose outfit suggestions with the ambient random source.
    pub fn suggest(&self, day_plans: &str, weather: Weather) -> Result<commands::CmdResult> {
        self.suggest_with_rng(day_plans, weather, &mut rand::thread_rng())
    }

    /// Same as [`suggest`](Self::suggest) but with an injected random source,
    /// for deterministic ratings.
    pub fn suggest_with_rng<R: Rng>(
        &self,
        day_plans: &str,
        weather: Weather,
        rng: &mut R,
    ) -> Result<commands::CmdResult> {
        commands::generate::run(&self.store, day_plans, weather, rng)
    }

    pub fn save_outfit(&mut self, outfit: &mut Outfit) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, outfit)
    }

    pub fn remove_outfit(&mut self, id: i64, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id, skip_confirm)
    }

    pub fn saved_outfits(&self) -> Result<commands::CmdResult> {
        commands::saved::run(&self.store)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }
}

pub use commands::list::ItemFilter;
pub use commands::stats::WardrobeStats;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
