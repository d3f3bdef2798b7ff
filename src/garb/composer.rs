//! The outfit composer: a pure function of (wardrobe snapshot, day-plans
//! text, weather) to an ordered batch of candidate outfits. Only the star
//! rating draws on the injected random source; everything else is
//! deterministic given the wardrobe's insertion order.

use chrono::Utc;
use rand::Rng;
use std::collections::{HashMap, HashSet};

use crate::model::{Category, Occasion, Outfit, Weather, WardrobeItem};

const GENERIC_NAMES: [&str; 6] = [
    "Perfect Day Look",
    "Effortless Style",
    "Confidence Boost",
    "Statement Maker",
    "Comfort Chic",
    "Modern Classic",
];

const PROFESSIONAL_NAMES: [&str; 3] = [
    "Professional Power",
    "Executive Excellence",
    "Business Boss",
];

const EVENING_NAMES: [&str; 3] = ["Evening Elegance", "Date Night Magic", "Dinner Delight"];

const CASUAL_NAMES: [&str; 3] = ["Casual Cool", "Weekend Vibes", "Effortless Chic"];

const DESCRIPTIONS: [&str; 4] = [
    "A perfect combination that works beautifully for your day!",
    "Stylish and comfortable - you'll look amazing!",
    "This outfit captures your unique style perfectly!",
    "Effortlessly chic and totally you!",
];

/// Minimum wardrobe size below which generation is a caller-side empty state.
pub const MIN_WARDROBE_ITEMS: usize = 3;

/// Assemble a batch of outfit suggestions from the wardrobe.
///
/// Preconditions (enforced by the caller): `day_plans` is non-blank and the
/// wardrobe holds at least [`MIN_WARDROBE_ITEMS`] items.
///
/// Batch size is `clamp(total / 3, 2, 4)`. Each outfit draws one item per
/// category bucket by `i mod bucket_len`, in fixed priority order: tops,
/// bottoms, shoes, then outerwear and accessories while the outfit holds
/// fewer than 4 items. Round-robin indexing gives variety across the batch
/// without repeatedly drawing the same item. Outfits that end up with fewer
/// than 2 items are dropped from the batch rather than rebuilt.
pub fn generate<R: Rng>(
    wardrobe: &[WardrobeItem],
    day_plans: &str,
    weather: Weather,
    rng: &mut R,
) -> Vec<Outfit> {
    debug_assert!(!day_plans.trim().is_empty());

    let plans = day_plans.to_lowercase();

    let mut buckets: HashMap<Category, Vec<&WardrobeItem>> = HashMap::new();
    for item in wardrobe {
        buckets.entry(item.category).or_default().push(item);
    }

    let batch_id = Utc::now().timestamp_millis();
    let batch_size = (wardrobe.len() / 3).clamp(2, 4);
    let mut outfits = Vec::with_capacity(batch_size);

    for i in 0..batch_size {
        let mut items: Vec<WardrobeItem> = Vec::new();
        // Item ids are catalog-unique, so this guard can only ever trip
        // within a single outfit. Kept as the source behavior.
        let mut used: HashSet<i64> = HashSet::new();

        for category in [Category::Tops, Category::Bottoms, Category::Shoes] {
            if let Some(bucket) = buckets.get(&category) {
                let pick = bucket[i % bucket.len()];
                if used.insert(pick.id) {
                    items.push(pick.clone());
                }
            }
        }

        for category in [Category::Outerwear, Category::Accessories] {
            if items.len() >= 4 {
                break;
            }
            if let Some(bucket) = buckets.get(&category) {
                let pick = bucket[i % bucket.len()];
                if used.insert(pick.id) {
                    items.push(pick.clone());
                }
            }
        }

        if items.len() < 2 {
            continue;
        }

        outfits.push(Outfit {
            id: batch_id + i as i64,
            name: outfit_name(&plans, i).to_string(),
            items,
            occasion: occasion_for(&plans),
            description: description_for(&plans, weather, i).to_string(),
            rating: rng.gen_range(4..=5),
            liked: false,
            saved: false,
            created_at: None,
        });
    }

    outfits
}

/// Classify lowercased day-plans text against the ordered keyword groups.
/// First matching group wins.
pub fn occasion_for(plans: &str) -> Occasion {
    if plans.contains("meeting") || plans.contains("work") {
        Occasion::Professional
    } else if plans.contains("date") || plans.contains("dinner") {
        Occasion::EveningOut
    } else if plans.contains("casual") || plans.contains("friend") {
        Occasion::Casual
    } else {
        Occasion::Everyday
    }
}

fn outfit_name(plans: &str, index: usize) -> &'static str {
    let table: &[&'static str] = match occasion_for(plans) {
        Occasion::Professional => &PROFESSIONAL_NAMES,
        Occasion::EveningOut => &EVENING_NAMES,
        Occasion::Casual => &CASUAL_NAMES,
        Occasion::Everyday => &GENERIC_NAMES,
    };
    table[index % table.len()]
}

fn description_for(_plans: &str, _weather: Weather, index: usize) -> &'static str {
    DESCRIPTIONS[index % DESCRIPTIONS.len()]
}
