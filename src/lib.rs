pub mod analysis;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used items
pub use analysis::analyze;
pub use models::category::Category;
pub use models::report::{Analysis, CategoryTotal, Report, NO_TRANSACTIONS_DETECTED};
pub use models::transaction::Transaction;
pub use ui::app::App;
