//! Quantity/Unit Parser
//!
//! Splits a free-text item description ("2 liters milk") into quantity,
//! unit and item name before an edit request is sent. The server stores
//! the three fields separately and folds them back into the display name.
//!
//! Matching runs as an ordered rule set rather than one regular
//! expression, so each edge case stays independently testable:
//!
//! 1. an optional quantity token at the start of the trimmed input
//!    (number with optional decimal, or a fixed word vocabulary;
//!    longest match wins, token must end at a word boundary, except
//!    that a unit may sit directly on a number, "2kg");
//! 2. an optional unit token, only ever looked for after a quantity;
//! 3. the remainder is the item name;
//! 4. overrides: a quantity word or bare number with nothing after it is
//!    not a quantity at all, the whole input is the item name.

/// Transient result of parsing an edit-form input. Sent once per save
/// action, never persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItemEdit {
    pub quantity: String,
    pub unit: String,
    pub item_name: String,
}

/// Spoken quantity vocabulary. Matched case-insensitively.
const QUANTITY_WORDS: &[&str] = &[
    "one",
    "two",
    "a dozen",
    "half a",
    "half",
    "a couple of",
    "a few",
];

/// Unit vocabulary, singular and plural forms spelled out.
const UNITS: &[&str] = &[
    "kg", "kilogram", "kilograms",
    "g", "gram", "grams",
    "lb", "pound", "pounds",
    "oz", "ounce", "ounces",
    "l", "liter", "liters",
    "ml", "milliliter", "milliliters",
    "pc", "piece", "pieces",
    "dozen",
    "cup", "cups",
    "tsp", "teaspoon", "teaspoons",
    "tbsp", "tablespoon", "tablespoons",
    "pack", "packs",
    "bottle", "bottles",
    "can", "cans",
];

/// True when the token ending at byte `len` sits on a word boundary.
fn at_boundary(text: &str, len: usize) -> bool {
    match text.get(len..) {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Longest vocabulary entry matching at the start of `text`, as a byte
/// length into `text`. Case-insensitive, word-bounded.
fn match_vocab(text: &str, vocab: &[&str]) -> Option<usize> {
    vocab
        .iter()
        .filter(|word| {
            text.get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word))
                && at_boundary(text, word.len())
        })
        .map(|word| word.len())
        .max()
}

/// Byte length of a leading numeric token (`2`, `1.5`), if any.
fn match_number(text: &str) -> Option<usize> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut len = digits;
    let rest = &text[digits..];
    if rest.starts_with('.') {
        let frac = rest[1..].bytes().take_while(u8::is_ascii_digit).count();
        if frac == 0 {
            return None;
        }
        len += 1 + frac;
    }
    Some(len)
}

/// Parse a raw edit-form input into quantity, unit and item name.
///
/// Every field is always populated: quantity falls back to "1" and unit
/// to "" whenever they cannot be confidently separated from the name.
pub fn parse(text: &str) -> ParsedItemEdit {
    let trimmed = text.trim();

    let quantity_len = match match_number(trimmed) {
        Some(len) if at_boundary(trimmed, len) => Some(len),
        Some(len) => {
            // Spoken shorthand glues the unit straight onto the number
            // ("2kg flour", "500ml"); any other suffix makes the token
            // a name, not a quantity.
            return match match_vocab(&trimmed[len..], UNITS) {
                Some(unit_len) => ParsedItemEdit {
                    quantity: trimmed[..len].to_string(),
                    unit: trimmed[len..len + unit_len].to_string(),
                    item_name: trimmed[len + unit_len..].trim_start().to_string(),
                },
                None => ParsedItemEdit {
                    quantity: "1".to_string(),
                    unit: String::new(),
                    item_name: trimmed.to_string(),
                },
            };
        }
        None => match_vocab(trimmed, QUANTITY_WORDS),
    };

    let Some(quantity_len) = quantity_len else {
        // No quantity recognized; units are never matched on their own.
        return ParsedItemEdit {
            quantity: "1".to_string(),
            unit: String::new(),
            item_name: trimmed.to_string(),
        };
    };

    let quantity = &trimmed[..quantity_len];
    let after_quantity = trimmed[quantity_len..].trim_start();

    let (unit, item_name) = match match_vocab(after_quantity, UNITS) {
        Some(unit_len) => (
            &after_quantity[..unit_len],
            after_quantity[unit_len..].trim_start(),
        ),
        None => ("", after_quantity),
    };

    // A quantity word ("a few") or a bare number ("1.5") with no unit and
    // nothing after it is the item itself, not a quantity.
    if unit.is_empty() && item_name.is_empty() {
        return ParsedItemEdit {
            quantity: "1".to_string(),
            unit: String::new(),
            item_name: trimmed.to_string(),
        };
    }

    ParsedItemEdit {
        quantity: quantity.to_string(),
        unit: unit.to_string(),
        item_name: item_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(quantity: &str, unit: &str, item_name: &str) -> ParsedItemEdit {
        ParsedItemEdit {
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            item_name: item_name.to_string(),
        }
    }

    #[test]
    fn number_unit_name() {
        assert_eq!(parse("2 liters milk"), parsed("2", "liters", "milk"));
    }

    #[test]
    fn plain_name() {
        assert_eq!(parse("milk"), parsed("1", "", "milk"));
    }

    #[test]
    fn quantity_word_with_name() {
        assert_eq!(parse("a dozen eggs"), parsed("a dozen", "", "eggs"));
    }

    #[test]
    fn quantity_word_alone_is_the_item() {
        assert_eq!(parse("a few"), parsed("1", "", "a few"));
    }

    #[test]
    fn bare_number_is_the_item() {
        assert_eq!(parse("1.5"), parsed("1", "", "1.5"));
        assert_eq!(parse("3"), parsed("1", "", "3"));
    }

    #[test]
    fn decimal_quantity_with_unit() {
        assert_eq!(parse("1.5 kg flour"), parsed("1.5", "kg", "flour"));
    }

    #[test]
    fn longest_quantity_phrase_wins() {
        assert_eq!(parse("half a cup sugar"), parsed("half a", "cup", "sugar"));
        assert_eq!(parse("half lemon"), parsed("half", "", "lemon"));
        assert_eq!(parse("a couple of onions"), parsed("a couple of", "", "onions"));
    }

    #[test]
    fn plural_and_abbreviated_units() {
        assert_eq!(parse("2 bottles water"), parsed("2", "bottles", "water"));
        assert_eq!(parse("500 ml cream"), parsed("500", "ml", "cream"));
        assert_eq!(parse("3 cans tomatoes"), parsed("3", "cans", "tomatoes"));
    }

    #[test]
    fn dozen_is_a_unit_after_a_number() {
        assert_eq!(parse("2 dozen eggs"), parsed("2", "dozen", "eggs"));
    }

    #[test]
    fn unit_word_boundary_respected() {
        // "grams" must not match as "g" + "rams".
        assert_eq!(parse("2 grams sugar"), parsed("2", "grams", "sugar"));
        // "grapefruit" is not a unit at all.
        assert_eq!(parse("2 grapefruit"), parsed("2", "", "grapefruit"));
    }

    #[test]
    fn unit_glued_to_number() {
        assert_eq!(parse("2kg flour"), parsed("2", "kg", "flour"));
        assert_eq!(parse("500ml cream"), parsed("500", "ml", "cream"));
        assert_eq!(parse("1.5l milk"), parsed("1.5", "l", "milk"));
        assert_eq!(parse("2kg"), parsed("2", "kg", ""));
    }

    #[test]
    fn number_glued_to_non_unit_is_the_name() {
        assert_eq!(parse("2x milk"), parsed("1", "", "2x milk"));
        assert_eq!(parse("7up"), parsed("1", "", "7up"));
    }

    #[test]
    fn unit_without_quantity_stays_in_the_name() {
        assert_eq!(parse("kg milk"), parsed("1", "", "kg milk"));
    }

    #[test]
    fn quantity_and_unit_without_name() {
        assert_eq!(parse("2 kg"), parsed("2", "kg", ""));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(parse("A Dozen Eggs"), parsed("A Dozen", "", "Eggs"));
        assert_eq!(parse("2 Liters Milk"), parsed("2", "Liters", "Milk"));
    }

    #[test]
    fn multibyte_names_pass_through() {
        assert_eq!(parse("crème fraîche"), parsed("1", "", "crème fraîche"));
        assert_eq!(parse("2 jalapeños"), parsed("2", "", "jalapeños"));
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(parse("  2 liters milk  "), parsed("2", "liters", "milk"));
        assert_eq!(parse(""), parsed("1", "", ""));
    }
}
