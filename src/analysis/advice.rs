use crate::models::report::CategoryTotal;

/// Returned whenever the summary is empty; the waste count is ignored and
/// no partial advice is ever emitted.
pub const NO_DATA_ADVICE: &str = "No sufficient transaction data found for insights.";

/// Compose the fixed-template advice text from the ranked summary and the
/// wasteful-transaction count. Pure function of its two inputs; everything
/// beyond the top category and the count is static guidance.
pub fn compose(summary: &[CategoryTotal], waste_count: usize) -> String {
    let Some(top) = summary.first() else {
        return NO_DATA_ADVICE.to_string();
    };

    format!(
        "\u{1f50d} AI Financial Insight\n\
         \n\
         \u{2022} Highest spending category: **{}**\n\
         \u{2022} Wasteful transactions: **{}**\n\
         \u{2022} Reduce impulse & entertainment spending\n\
         \u{2022} Save at least **20% monthly income**\n\
         \n\
         (LLM-style financial reasoning)",
        top.category.as_str(),
        waste_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    fn total(category: Category, total: &str) -> CategoryTotal {
        CategoryTotal {
            category,
            total: total.parse().unwrap(),
        }
    }

    #[test]
    fn empty_summary_short_circuits_to_no_data() {
        assert_eq!(compose(&[], 0), NO_DATA_ADVICE);
        // Waste count is ignored entirely on the empty path.
        assert_eq!(compose(&[], 7), NO_DATA_ADVICE);
    }

    #[test]
    fn names_the_top_category_and_waste_count() {
        let summary = vec![
            total(Category::Grocery, "245.50"),
            total(Category::Travel, "120.00"),
        ];

        let advice = compose(&summary, 3);
        assert!(advice.contains("Highest spending category: **Grocery**"));
        assert!(advice.contains("Wasteful transactions: **3**"));
    }

    #[test]
    fn static_guidance_is_always_present() {
        let advice = compose(&[total(Category::Others, "1.00")], 0);
        assert!(advice.contains("Reduce impulse & entertainment spending"));
        assert!(advice.contains("Save at least **20% monthly income**"));
    }
}
