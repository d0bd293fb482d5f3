/// Letters that prefix the numeric part of entity IDs on a Wikibase instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    item_letter: char,
    property_letter: char,
}

impl Config {
    /// Constructs a new `Config` object from item and property letters.
    pub const fn new(item_letter: char, property_letter: char) -> Config {
        Config {
            item_letter,
            property_letter,
        }
    }

    /// Returns the letter used for items.
    pub const fn item_letter(&self) -> char {
        self.item_letter
    }

    /// Returns the letter used for properties.
    pub const fn property_letter(&self) -> char {
        self.property_letter
    }

    /// Prefixes a bare number with `letter`; anything else is returned trimmed but unchanged.
    pub(crate) fn prefixed(letter: char, raw: &str) -> String {
        let raw = raw.trim();
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            format!("{letter}{raw}")
        } else {
            raw.to_string()
        }
    }
}

pub const WIKIDATA_CONFIG: Config = Config {
    item_letter: 'Q',
    property_letter: 'P',
};
