//! Hotel tier choices offered as an inline menu

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Callback data prefix shared by every hotel tier button
pub const HOTEL_CALLBACK_PREFIX: &str = "hotel";

/// Label stored when a callback code is not in the table
pub const UNSPECIFIED_LABEL: &str = "Не указано";

/// (callback code, stored label) in menu order
pub const HOTEL_TIERS: &[(&str, &str)] = &[
    ("hotel:3", "3★"),
    ("hotel:4", "4★"),
    ("hotel:5", "5★"),
    ("hotel:3_4", "3★ или 4★"),
    ("hotel:4_5", "4★ или 5★"),
    ("hotel:adults_16", "Только для взрослых (16+)"),
    ("hotel:adults_18", "Только для взрослых (18+)"),
    ("hotel:any", "Любой уровень"),
    ("hotel:nomatter", "Не имеет значения"),
];

/// Resolve a callback code to the label stored in the request
pub fn resolve_hotel_choice(code: &str) -> &'static str {
    HOTEL_TIERS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
        .unwrap_or(UNSPECIFIED_LABEL)
}

/// Whether callback data belongs to the hotel menu
pub fn is_hotel_callback(data: &str) -> bool {
    data.split(':').next() == Some(HOTEL_CALLBACK_PREFIX)
}

/// Inline keyboard for the hotel level question
pub fn hotel_menu() -> InlineKeyboardMarkup {
    let buttons: Vec<InlineKeyboardButton> = HOTEL_TIERS
        .iter()
        .map(|(code, label)| InlineKeyboardButton::callback(*label, *code))
        .collect();

    // Star ratings share one row, everything else gets its own row
    let (stars, others) = buttons.split_at(3);
    let mut rows = vec![stars.to_vec()];
    rows.extend(others.chunks(2).map(|chunk| chunk.to_vec()));

    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_codes() {
        assert_eq!(resolve_hotel_choice("hotel:4"), "4★");
        assert_eq!(resolve_hotel_choice("hotel:adults_18"), "Только для взрослых (18+)");
        assert_eq!(resolve_hotel_choice("hotel:any"), "Любой уровень");
    }

    #[test]
    fn test_resolve_unknown_code() {
        assert_eq!(resolve_hotel_choice("hotel:7"), UNSPECIFIED_LABEL);
        assert_eq!(resolve_hotel_choice(""), UNSPECIFIED_LABEL);
    }

    #[test]
    fn test_is_hotel_callback() {
        assert!(is_hotel_callback("hotel:4"));
        assert!(!is_hotel_callback("lang:en"));
        assert!(!is_hotel_callback("hotels"));
    }

    #[test]
    fn test_menu_contains_every_tier() {
        let menu = hotel_menu();
        let count: usize = menu.inline_keyboard.iter().map(|row| row.len()).sum();
        assert_eq!(count, HOTEL_TIERS.len());
        assert_eq!(menu.inline_keyboard[0].len(), 3);
    }
}
