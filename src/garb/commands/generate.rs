use rand::Rng;

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::composer::{self, MIN_WARDROBE_ITEMS};
use crate::error::{GarbError, Result};
use crate::model::Weather;
use crate::store::KvStore;

const NEED_MORE_ITEMS_MSG: &str =
    "Upload a few clothing items first, then watch the composer create outfit combinations for you!";
const GENERATED_MSG: &str = "Look at these outfit combinations!";

pub fn run<S: KvStore, R: Rng>(
    store: &S,
    day_plans: &str,
    weather: Weather,
    rng: &mut R,
) -> Result<CmdResult> {
    if day_plans.trim().is_empty() {
        return Err(GarbError::Validation(
            "Please tell us about your plans for the day!".to_string(),
        ));
    }

    let catalog = Catalog::load(store);
    if catalog.wardrobe.len() < MIN_WARDROBE_ITEMS {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(NEED_MORE_ITEMS_MSG));
        return Ok(result);
    }

    let outfits = composer::generate(&catalog.wardrobe, day_plans, weather, rng);

    let mut result = CmdResult::default().with_outfits(outfits);
    result.add_message(CmdMessage::success(GENERATED_MSG));
    Ok(result)
}
