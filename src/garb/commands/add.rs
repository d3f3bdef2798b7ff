use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemDraft;
use crate::store::KvStore;

const ITEM_ADDED_MSG: &str = "Perfect! Your item has been added to your wardrobe.";
const FIRST_UPLOAD_MSG: &str =
    "Congratulations on your first upload! Keep adding items for even better recommendations.";

pub fn run<S: KvStore>(store: &mut S, draft: ItemDraft) -> Result<CmdResult> {
    let mut catalog = Catalog::load(store);
    let (item, first_upload) = catalog.add_item(store, draft)?;

    let mut result = CmdResult::default();
    if first_upload {
        result.add_message(CmdMessage::success(FIRST_UPLOAD_MSG));
    } else {
        result.add_message(CmdMessage::success(ITEM_ADDED_MSG));
    }
    result.add_message(CmdMessage::info(format!(
        "{} ({}) added as #{}",
        item.name, item.category_name, item.id
    )));

    Ok(result.with_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Category;
    use crate::store::memory::InMemoryStore;

    fn draft() -> ItemDraft {
        ItemDraft {
            category: Some(Category::Tops),
            ..ItemDraft::default()
        }
    }

    #[test]
    fn first_add_congratulates_later_adds_do_not() {
        let mut store = InMemoryStore::new();

        let result = run(&mut store, draft()).unwrap();
        assert!(result.messages[0].content.contains("first upload"));
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let result = run(&mut store, draft()).unwrap();
        assert!(!result.messages[0].content.contains("first upload"));
    }

    #[test]
    fn returns_the_new_item() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, draft()).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].category, Category::Tops);
    }

    #[test]
    fn missing_category_is_a_validation_error() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, ItemDraft::default()).is_err());
    }
}
