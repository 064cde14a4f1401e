//! The fixed company catalog and the current selection.

use serde::Serialize;

/// A company the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Company {
    /// Display name, also used as the news search query.
    pub name: &'static str,
    /// Euronext Paris ticker symbol.
    pub ticker: &'static str,
}

/// Top 10 CAC 40 constituents, in sidebar order.
pub static CAC40: [Company; 10] = [
    Company { name: "LVMH", ticker: "MC.PA" },
    Company { name: "Orange", ticker: "OR.PA" },
    Company { name: "TotalEnergies", ticker: "TTE.PA" },
    Company { name: "Sanofi", ticker: "SAN.PA" },
    Company { name: "Airbus", ticker: "AIR.PA" },
    Company { name: "AXA", ticker: "CS.PA" },
    Company { name: "BNP Paribas", ticker: "BNP.PA" },
    Company { name: "Société Générale", ticker: "GLE.PA" },
    Company { name: "Credit Agricole", ticker: "ACA.PA" },
    Company { name: "Danone", ticker: "BN.PA" },
];

impl Company {
    /// Query string sent to the news feed.
    pub fn news_query(&self) -> &'static str {
        self.name
    }
}

/// Selection state for the sidebar.
#[derive(Debug, Default)]
pub struct CompanyState {
    /// Index into [`CAC40`].
    pub selected_index: usize,
}

impl CompanyState {
    /// The currently selected company.
    pub fn selected(&self) -> &'static Company {
        &CAC40[self.selected_index.min(CAC40.len() - 1)]
    }

    /// All selectable companies.
    pub fn companies(&self) -> &'static [Company] {
        &CAC40
    }

    /// Select by index, ignoring out-of-range values. Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= CAC40.len() || index == self.selected_index {
            return false;
        }
        self.selected_index = index;
        true
    }

    /// Move the selection by `delta`, clamped to the catalog. Returns whether it changed.
    pub fn move_by(&mut self, delta: i32) -> bool {
        let max_index = CAC40.len() as i32 - 1;
        let target = (self.selected_index as i32 + delta).clamp(0, max_index) as usize;
        self.select(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_unique_tickers() {
        let mut tickers: Vec<_> = CAC40.iter().map(|c| c.ticker).collect();
        tickers.sort();
        tickers.dedup();
        assert_eq!(tickers.len(), 10);
    }

    #[test]
    fn test_default_selection_is_first() {
        let state = CompanyState::default();
        assert_eq!(state.selected().ticker, "MC.PA");
    }

    #[test]
    fn test_move_is_clamped() {
        let mut state = CompanyState::default();
        assert!(!state.move_by(-1));
        assert!(state.move_by(3));
        assert_eq!(state.selected().name, "Sanofi");
        assert!(state.move_by(100));
        assert_eq!(state.selected().name, "Danone");
        assert!(!state.move_by(1));
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut state = CompanyState::default();
        assert!(!state.select(10));
        assert!(!state.select(0));
        assert!(state.select(9));
        assert_eq!(state.selected().ticker, "BN.PA");
    }
}
