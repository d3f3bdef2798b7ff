use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Category;
use crate::store::KvStore;

const EMPTY_WARDROBE_MSG: &str =
    "Your digital closet awaits! Add some clothes to get started and unlock outfit suggestions.";

#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub category: Option<Category>,
    /// Case-insensitive substring match against item names.
    pub search: Option<String>,
}

pub fn run<S: KvStore>(store: &S, filter: ItemFilter) -> Result<CmdResult> {
    let catalog = Catalog::load(store);

    if catalog.wardrobe.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(EMPTY_WARDROBE_MSG));
        return Ok(result);
    }

    let search = filter.search.map(|s| s.to_lowercase());
    let items = catalog
        .wardrobe
        .into_iter()
        .filter(|item| match filter.category {
            Some(category) => item.category == category,
            None => true,
        })
        .filter(|item| match &search {
            Some(term) => item.name.to_lowercase().contains(term),
            None => true,
        })
        .collect();

    Ok(CmdResult::default().with_items(items))
}
