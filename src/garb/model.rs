use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GarbError, Result};

/// The closed set of wardrobe categories. Serialized as the lowercase id
/// used by the legacy stored shape ("tops", "bottoms", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Shoes,
    Outerwear,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
        Category::Outerwear,
        Category::Accessories,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
            Category::Outerwear => "outerwear",
            Category::Accessories => "accessories",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Shoes => "Shoes",
            Category::Outerwear => "Outerwear",
            Category::Accessories => "Accessories",
        }
    }

    pub fn examples(&self) -> &'static str {
        match self {
            Category::Tops => "Shirts, Blouses, T-shirts",
            Category::Bottoms => "Jeans, Pants, Skirts",
            Category::Shoes => "Sneakers, Heels, Boots",
            Category::Outerwear => "Jackets, Coats, Blazers",
            Category::Accessories => "Bags, Jewelry, Scarves",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = GarbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tops" => Ok(Category::Tops),
            "bottoms" => Ok(Category::Bottoms),
            "shoes" => Ok(Category::Shoes),
            "outerwear" => Ok(Category::Outerwear),
            "accessories" => Ok(Category::Accessories),
            other => Err(GarbError::Validation(format!(
                "Unknown category '{}'. Choose one of: tops, bottoms, shoes, outerwear, accessories.",
                other
            ))),
        }
    }
}

/// Weather selector for outfit generation. Accepted for the composer
/// contract; no selection table consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weather {
    Hot,
    #[default]
    Mild,
    Cold,
    Rainy,
}

impl FromStr for Weather {
    type Err = GarbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(Weather::Hot),
            "mild" => Ok(Weather::Mild),
            "cold" => Ok(Weather::Cold),
            "rainy" => Ok(Weather::Rainy),
            other => Err(GarbError::Validation(format!(
                "Unknown weather '{}'. Choose one of: hot, mild, cold, rainy.",
                other
            ))),
        }
    }
}

/// Occasion label derived from the day-plans keywords. Serializes as the
/// display strings the legacy shape stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occasion {
    Professional,
    #[serde(rename = "Evening Out")]
    EveningOut,
    Casual,
    Everyday,
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Occasion::Professional => "Professional",
            Occasion::EveningOut => "Evening Out",
            Occasion::Casual => "Casual",
            Occasion::Everyday => "Everyday",
        };
        f.write_str(s)
    }
}

/// Unvalidated user-entered fields for a new wardrobe item.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub color: Option<String>,
    pub style: Option<String>,
    /// Encoded image data URL, if the user attached a photo.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    pub id: i64,
    pub name: String,
    pub category: Category,
    /// Display name of the category, snapshotted at creation time.
    pub category_name: String,
    pub color: String,
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date_added: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WardrobeItem {
    /// Build an item from a draft. The category is mandatory; name, color and
    /// style fall back to their documented defaults.
    pub fn from_draft(draft: ItemDraft, id: i64) -> Result<Self> {
        let category = draft.category.ok_or_else(|| {
            GarbError::Validation("Please select a category for your item.".to_string())
        })?;

        // Tags reflect what the user actually entered: empty color/style are
        // dropped here even though the item fields below get defaults.
        let tags: Vec<String> = [
            Some(category.display_name().to_string()),
            draft.color.clone().filter(|s| !s.is_empty()),
            draft.style.clone().filter(|s| !s.is_empty()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let name = match draft.name.filter(|s| !s.is_empty()) {
            Some(name) => name,
            None => format!("{} Item", category.display_name()),
        };

        Ok(Self {
            id,
            name,
            category,
            category_name: category.display_name().to_string(),
            color: draft
                .color
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "Mixed".to_string()),
            style: draft
                .style
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "casual".to_string()),
            image: draft.image,
            date_added: Utc::now(),
            tags,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: i64,
    pub name: String,
    pub items: Vec<WardrobeItem>,
    pub occasion: Occasion,
    pub description: String,
    pub rating: u8,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub saved: bool,
    /// Day the outfit was saved. Absent until then, as in the legacy shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(category: Option<Category>) -> ItemDraft {
        ItemDraft {
            category,
            ..ItemDraft::default()
        }
    }

    #[test]
    fn rejects_draft_without_category() {
        let err = WardrobeItem::from_draft(draft(None), 1).unwrap_err();
        assert!(matches!(err, GarbError::Validation(_)));
    }

    #[test]
    fn applies_defaults() {
        let item = WardrobeItem::from_draft(draft(Some(Category::Tops)), 1).unwrap();
        assert_eq!(item.name, "Tops Item");
        assert_eq!(item.color, "Mixed");
        assert_eq!(item.style, "casual");
        assert_eq!(item.category_name, "Tops");
    }

    #[test]
    fn tags_drop_empty_fields() {
        let item = WardrobeItem::from_draft(
            ItemDraft {
                name: Some("Blue Shirt".into()),
                category: Some(Category::Tops),
                color: Some("Blue".into()),
                style: None,
                image: None,
            },
            1,
        )
        .unwrap();
        assert_eq!(item.tags, vec!["Tops", "Blue"]);
        // The style field itself still gets its default.
        assert_eq!(item.style, "casual");
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Shoes".parse::<Category>().unwrap(), Category::Shoes);
        assert!("hats".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_its_lowercase_id() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.id()));
        }
    }

    #[test]
    fn occasion_serializes_display_strings() {
        let json = serde_json::to_string(&Occasion::EveningOut).unwrap();
        assert_eq!(json, "\"Evening Out\"");
    }
}
