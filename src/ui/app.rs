use anyhow::Result;
use ratatui::widgets::ListState;

use crate::analysis;
use crate::models::report::Analysis;
use crate::models::transaction::Transaction;

/// The four outputs of a run, one view per output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Transactions,
    Summary,
    Wasteful,
    Advice,
}

impl View {
    pub fn next(self) -> View {
        match self {
            View::Transactions => View::Summary,
            View::Summary => View::Wasteful,
            View::Wasteful => View::Advice,
            View::Advice => View::Transactions,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Transactions => "Transactions",
            View::Summary => "Category Summary",
            View::Wasteful => "Wasteful Spending",
            View::Advice => "AI Advice",
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub analysis: Analysis,
    pub current_view: View,
    pub list_state: ListState,
    pub show_detail: bool,
}

impl App {
    pub fn new(statement_path: &str) -> Result<Self> {
        let lines = crate::utils::text::read_statement_lines(statement_path)?;
        Ok(App::from_analysis(analysis::analyze(&lines)))
    }

    pub fn from_analysis(analysis: Analysis) -> Self {
        let mut list_state = ListState::default();
        if analysis.as_report().is_some_and(|r| !r.transactions.is_empty()) {
            list_state.select(Some(0));
        }

        App {
            analysis,
            current_view: View::Transactions,
            list_state,
            show_detail: false,
        }
    }

    /// Length of the list the current view navigates over.
    fn active_len(&self) -> usize {
        let Some(report) = self.analysis.as_report() else {
            return 0;
        };
        match self.current_view {
            View::Transactions => report.transactions.len(),
            View::Summary => report.summary.len(),
            View::Wasteful => report.wasteful.len(),
            View::Advice => 0,
        }
    }

    pub fn next(&mut self) {
        let len = self.active_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.active_len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn switch_view(&mut self, view: View) {
        if view != self.current_view {
            self.current_view = view;
            self.show_detail = false;
            self.list_state
                .select(if self.active_len() > 0 { Some(0) } else { None });
        }
    }

    pub fn cycle_view(&mut self) {
        self.switch_view(self.current_view.next());
    }

    /// Transaction under the cursor, resolving wasteful-view indices back to
    /// the underlying transaction list.
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        let report = self.analysis.as_report()?;
        let selected = self.list_state.selected()?;
        match self.current_view {
            View::Transactions => report.transactions.get(selected),
            View::Wasteful => {
                let idx = *report.wasteful.get(selected)?;
                report.transactions.get(idx)
            }
            View::Summary | View::Advice => None,
        }
    }

    pub fn toggle_detail(&mut self) {
        if self.selected_transaction().is_some() {
            self.show_detail = !self.show_detail;
        }
    }
}
