use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::KvStore;

/// Dashboard numbers: collection sizes plus the wardrobe-building progress
/// tiers from the original app.
#[derive(Debug, Clone, PartialEq)]
pub struct WardrobeStats {
    pub item_count: usize,
    pub outfit_count: usize,
    /// 0-100, filled in three tiers: half by the first 5 items, 30 more by
    /// the next 5, full at 10.
    pub progress: u8,
    pub progress_text: String,
}

impl WardrobeStats {
    fn for_counts(item_count: usize, outfit_count: usize) -> Self {
        let (progress, progress_text) = match item_count {
            0 => (0, "Get started by adding your first item!".to_string()),
            n if n < 5 => (
                (n * 50 / 5) as u8,
                format!("{} items added! Keep going for better recommendations.", n),
            ),
            n if n < 10 => (
                (50 + (n - 5) * 30 / 5) as u8,
                format!("Great progress! {} items in your closet.", n),
            ),
            n => (
                100,
                format!("Amazing! You have {} items. Perfect for outfit magic!", n),
            ),
        };
        Self {
            item_count,
            outfit_count,
            progress,
            progress_text,
        }
    }
}

pub fn run<S: KvStore>(store: &S) -> Result<CmdResult> {
    let catalog = Catalog::load(store);
    let stats = WardrobeStats::for_counts(catalog.wardrobe.len(), catalog.saved_outfits.len());
    Ok(CmdResult::default().with_stats(stats))
}
