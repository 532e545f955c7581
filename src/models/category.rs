use serde::Serialize;

/// Ordered keyword rules. Earlier groups win when a line matches more than
/// one, so the order here is the tie-break policy, not cosmetic.
const KEYWORD_RULES: &[(Category, &[&str])] = &[
    (Category::Grocery, &["grocery", "milk", "vegetable", "supermarket"]),
    (Category::Bills, &["electricity", "water", "gas", "recharge", "bill"]),
    (Category::Food, &["swiggy", "zomato", "restaurant", "food"]),
    (Category::Entertainment, &["movie", "netflix", "spotify", "entertainment"]),
    (Category::Shopping, &["amazon", "flipkart", "shopping"]),
    (Category::Travel, &["uber", "ola", "cab"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Grocery,
    Bills,
    Food,
    Entertainment,
    Shopping,
    Travel,
    Others,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Grocery => "Grocery",
            Category::Bills => "Bills",
            Category::Food => "Food",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::Others => "Others",
        }
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::Grocery,
            Category::Bills,
            Category::Food,
            Category::Entertainment,
            Category::Shopping,
            Category::Travel,
            Category::Others,
        ]
    }

    /// Assign a category to a transaction line by case-insensitive substring
    /// matching. The first rule group with any keyword present wins; a line
    /// matching no group is `Others`, never an error.
    pub fn categorize(text: &str) -> Category {
        let text_lower = text.to_lowercase();

        for (category, keywords) in KEYWORD_RULES {
            if keywords.iter().any(|k| text_lower.contains(k)) {
                return *category;
            }
        }

        Category::Others
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_rule_group() {
        assert_eq!(Category::categorize("SUPERMARKET purchase 10.00"), Category::Grocery);
        assert_eq!(Category::categorize("electricity recharge 10.00"), Category::Bills);
        assert_eq!(Category::categorize("ZOMATO order 10.00"), Category::Food);
        assert_eq!(Category::categorize("NETFLIX monthly 10.00"), Category::Entertainment);
        assert_eq!(Category::categorize("FLIPKART order 10.00"), Category::Shopping);
        assert_eq!(Category::categorize("OLA ride 10.00"), Category::Travel);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(Category::categorize("MiLk AnD bReAd"), Category::Grocery);
        assert_eq!(Category::categorize("UBER"), Category::Travel);
    }

    #[test]
    fn first_rule_group_wins_on_multiple_matches() {
        // "milk" (Grocery) and "bill" (Bills) both present.
        assert_eq!(Category::categorize("milk bill 45.00"), Category::Grocery);
        assert_eq!(Category::categorize("Grocery bill 1,234.56"), Category::Grocery);
        // "water" (Bills) comes before "restaurant" (Food).
        assert_eq!(Category::categorize("water at restaurant"), Category::Bills);
    }

    #[test]
    fn unmatched_text_falls_back_to_others() {
        assert_eq!(Category::categorize("UPI transfer to friend 300.00"), Category::Others);
        assert_eq!(Category::categorize(""), Category::Others);
    }

    #[test]
    fn keyword_inside_a_longer_word_still_matches() {
        // Substring matching by contract, not word-boundary matching.
        assert_eq!(Category::categorize("gasoline station"), Category::Bills);
    }
}
