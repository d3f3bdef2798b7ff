use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GarbError, Result};
use crate::store::KvStore;
use std::io::{self, Write};

pub fn run<S: KvStore>(store: &mut S, id: i64, skip_confirm: bool) -> Result<CmdResult> {
    let mut catalog = Catalog::load(store);
    let mut result = CmdResult::default();

    let Some(outfit) = catalog.saved_outfits.iter().find(|o| o.id == id) else {
        result.add_message(CmdMessage::info(format!("No saved outfit with id {}.", id)));
        return Ok(result);
    };
    let name = outfit.name.clone();

    if !skip_confirm {
        print!(
            "Remove \"{}\" from your saved collection? [y/N] ",
            name
        );
        io::stdout().flush().map_err(GarbError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(GarbError::Io)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    catalog.remove_outfit(store, id);
    result.add_message(CmdMessage::success(format!("Removed: {}", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Occasion, Outfit};
    use crate::store::memory::fixtures;
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let mut catalog = Catalog::load(&store);
        let mut outfit = Outfit {
            id: 7,
            name: "Weekend Vibes".to_string(),
            items: vec![
                fixtures::item(1, "Shirt", Category::Tops),
                fixtures::item(2, "Jeans", Category::Bottoms),
            ],
            occasion: Occasion::Casual,
            description: "Effortlessly chic and totally you!".to_string(),
            rating: 5,
            liked: false,
            saved: false,
            created_at: None,
        };
        catalog.save_outfit(&mut store, &mut outfit);
        store
    }

    #[test]
    fn removes_by_id() {
        let mut store = seeded_store();
        let result = run(&mut store, 7, true).unwrap();
        assert!(result.messages[0].content.starts_with("Removed"));
        assert!(Catalog::load(&store).saved_outfits.is_empty());
    }

    #[test]
    fn unknown_id_is_not_an_error() {
        let mut store = seeded_store();
        let result = run(&mut store, 999, true).unwrap();
        assert!(result.messages[0].content.contains("No saved outfit"));
        assert_eq!(Catalog::load(&store).saved_outfits.len(), 1);
    }
}
