use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use rust_decimal::Decimal;
use serde::Serialize;

use super::category::Category;

/// One recognized statement line with its parsed amount and category.
/// The original line text is kept verbatim for display and audit.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub text: String,
    pub amount: Decimal,
    pub category: Category,
}

impl Transaction {
    pub fn to_list_item(&self) -> ListItem {
        ListItem::new(Line::from(vec![
            Span::styled(
                format!("{:>12.2} ", self.amount),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("{:<14} ", self.category.as_str()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.text.clone()),
        ]))
    }
}
