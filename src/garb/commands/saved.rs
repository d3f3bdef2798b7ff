use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::KvStore;

const NO_SAVED_MSG: &str = "No saved outfits yet! Generate some outfits and save your favorites.";

pub fn run<S: KvStore>(store: &S) -> Result<CmdResult> {
    let catalog = Catalog::load(store);

    if catalog.saved_outfits.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(NO_SAVED_MSG));
        return Ok(result);
    }

    Ok(CmdResult::default().with_outfits(catalog.saved_outfits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Occasion, Outfit};
    use crate::store::memory::fixtures;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_collection_shows_empty_state() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.outfits.is_empty());
        assert!(result.messages[0].content.contains("No saved outfits"));
    }

    #[test]
    fn lists_saved_outfits_in_save_order() {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::load(&store);
        for id in [10, 20] {
            let mut outfit = Outfit {
                id,
                name: format!("Look {}", id),
                items: vec![
                    fixtures::item(1, "Shirt", Category::Tops),
                    fixtures::item(2, "Jeans", Category::Bottoms),
                ],
                occasion: Occasion::Everyday,
                description: "Effortlessly chic and totally you!".to_string(),
                rating: 4,
                liked: false,
                saved: false,
                created_at: None,
            };
            catalog.save_outfit(&mut store, &mut outfit);
        }

        let result = run(&store).unwrap();
        assert_eq!(result.outfits.len(), 2);
        assert_eq!(result.outfits[0].id, 10);
        assert_eq!(result.outfits[1].id, 20);
    }
}
