//! Ingredient Catalog
//!
//! The fixed set of tiles the board starts with.

use crate::models::Item;

const FOOD_ITEMS: &[(&str, &str, &str)] = &[
    ("carrot", "にんじん", "🥕"),
    ("apple", "りんご", "🍎"),
    ("fish", "魚", "🐟"),
    ("egg", "卵", "🥚"),
    ("cheese", "チーズ", "🧀"),
    ("bread", "パン", "🍞"),
    ("pepper", "唐辛子", "🌶️"),
    ("lemon", "レモン", "🍋"),
    ("coffee", "コーヒー", "☕"),
    ("icecream", "アイスクリーム", "🍨"),
    ("meat", "肉", "🍖"),
    ("mushroom", "きのこ", "🍄"),
    ("tomato", "トマト", "🍅"),
    ("potato", "じゃがいも", "🥔"),
    ("corn", "とうもろこし", "🌽"),
    ("avocado", "アボカド", "🥑"),
    ("chocolate", "チョコレート", "🍫"),
    ("honey", "はちみつ", "🍯"),
    ("strawberry", "いちご", "🍓"),
    ("grapes", "ぶどう", "🍇"),
];

/// All catalog items in display order
pub fn food_items() -> Vec<Item> {
    FOOD_ITEMS
        .iter()
        .map(|(id, name, icon)| Item::new(id, name, icon))
        .collect()
}
