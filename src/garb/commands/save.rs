use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Outfit;
use crate::store::KvStore;

pub fn run<S: KvStore>(store: &mut S, outfit: &mut Outfit) -> Result<CmdResult> {
    let mut catalog = Catalog::load(store);
    let mut result = CmdResult::default();

    if catalog.save_outfit(store, outfit) {
        result.add_message(CmdMessage::success(format!("Outfit saved: {}", outfit.name)));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Outfit already saved: {}",
            outfit.name
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Occasion};
    use crate::store::memory::fixtures;
    use crate::store::memory::InMemoryStore;

    fn outfit() -> Outfit {
        Outfit {
            id: 42,
            name: "Casual Cool".to_string(),
            items: vec![
                fixtures::item(1, "Shirt", Category::Tops),
                fixtures::item(2, "Jeans", Category::Bottoms),
            ],
            occasion: Occasion::Casual,
            description: "Effortlessly chic and totally you!".to_string(),
            rating: 4,
            liked: false,
            saved: false,
            created_at: None,
        }
    }

    #[test]
    fn saves_once_then_reports_already_saved() {
        let mut store = InMemoryStore::new();
        let mut o = outfit();

        let result = run(&mut store, &mut o).unwrap();
        assert!(result.messages[0].content.starts_with("Outfit saved"));
        assert!(o.saved);

        let result = run(&mut store, &mut o).unwrap();
        assert!(result.messages[0].content.starts_with("Outfit already saved"));

        let catalog = Catalog::load(&store);
        assert_eq!(catalog.saved_outfits.len(), 1);
    }
}
