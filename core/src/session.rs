//! Explorer session: user intents in, displayed window out.
//!
//! # Design
//! Owns the decoded record list plus the three user inputs (search text,
//! region selection, sort order) and the pagination window. The derived
//! filtered/sorted list is recomputed eagerly whenever an input actually
//! changes — there is no hidden dependency on render timing — and every such
//! change restarts pagination at the first page. Setting an input to its
//! current value is a no-op so the window survives redundant events.

use crate::pipeline::{distinct_regions, filter_and_sort, SortOrder};
use crate::types::Country;
use crate::window::{PageWindow, ITEMS_PER_LOAD};

/// List-view state for one fetched country dataset.
#[derive(Debug)]
pub struct ExplorerSession {
    countries: Vec<Country>,
    search: String,
    region: String,
    order: SortOrder,
    window: PageWindow,
    filtered: Vec<Country>,
}

impl ExplorerSession {
    /// Session over `countries` with the default page size, no filters, and
    /// ascending population order.
    pub fn new(countries: Vec<Country>) -> Self {
        Self::with_page_size(countries, ITEMS_PER_LOAD)
    }

    pub fn with_page_size(countries: Vec<Country>, page_size: usize) -> Self {
        let filtered = filter_and_sort(&countries, "", "", SortOrder::Asc);
        Self {
            countries,
            search: String::new(),
            region: String::new(),
            order: SortOrder::Asc,
            window: PageWindow::new(page_size),
            filtered,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    pub fn set_search(&mut self, search: &str) {
        if self.search == search {
            return;
        }
        self.search = search.to_string();
        self.recompute();
    }

    /// Select a region, or clear the filter with an empty string.
    pub fn set_region(&mut self, region: &str) {
        if self.region == region {
            return;
        }
        self.region = region.to_string();
        self.recompute();
    }

    pub fn toggle_sort(&mut self) {
        self.order = self.order.toggled();
        self.recompute();
    }

    /// The load-more intent from the view layer's visibility trigger.
    /// Returns whether more items became visible.
    pub fn load_more(&mut self) -> bool {
        self.window.advance(self.filtered.len())
    }

    /// The currently materialized prefix of the filtered/sorted list.
    pub fn visible(&self) -> &[Country] {
        self.window.slice(&self.filtered)
    }

    /// Length of the full filtered/sorted list, visible or not.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.window.is_exhausted(self.filtered.len())
    }

    /// Options for the region selector, from the unfiltered dataset.
    pub fn regions(&self) -> Vec<String> {
        distinct_regions(&self.countries)
    }

    /// Look up a country by identifier for the detail view.
    pub fn find(&self, cca3: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.cca3 == cca3)
    }

    fn recompute(&mut self) {
        self.filtered = filter_and_sort(&self.countries, &self.search, &self.region, self.order);
        self.window.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CountryName, Flags};

    fn country(cca3: &str, name: &str, population: u64, region: &str) -> Country {
        Country {
            cca3: cca3.to_string(),
            name: CountryName {
                common: name.to_string(),
                official: name.to_string(),
            },
            capital: Some(vec![format!("{name} City")]),
            population,
            region: region.to_string(),
            subregion: None,
            flags: Flags {
                png: format!("{}.png", cca3.to_lowercase()),
            },
            currencies: None,
            languages: None,
            timezones: None,
        }
    }

    fn numbered(count: usize) -> Vec<Country> {
        (0..count)
            .map(|i| country(&format!("C{i:02}"), &format!("Nation {i:02}"), i as u64, "Europe"))
            .collect()
    }

    #[test]
    fn starts_with_first_page_sorted_ascending() {
        let session = ExplorerSession::with_page_size(numbered(45), 20);
        assert_eq!(session.visible().len(), 20);
        assert_eq!(session.filtered_len(), 45);
        assert_eq!(session.visible()[0].population, 0);
        assert_eq!(session.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn load_more_walks_to_exhaustion() {
        let mut session = ExplorerSession::with_page_size(numbered(45), 20);
        assert!(session.load_more());
        assert_eq!(session.visible().len(), 40);
        assert!(session.load_more());
        assert_eq!(session.visible().len(), 45);
        assert!(session.is_exhausted());
        assert!(!session.load_more());
        assert_eq!(session.visible().len(), 45);
    }

    #[test]
    fn search_change_resets_pagination() {
        let mut session = ExplorerSession::with_page_size(numbered(45), 20);
        session.load_more();
        assert_eq!(session.visible().len(), 40);

        session.set_search("nation 0");
        assert_eq!(session.filtered_len(), 10);
        assert_eq!(session.visible().len(), 10);

        session.set_search("");
        assert_eq!(session.visible().len(), 20);
    }

    #[test]
    fn redundant_input_does_not_reset_pagination() {
        let mut session = ExplorerSession::with_page_size(numbered(45), 20);
        session.load_more();
        session.set_search("");
        session.set_region("");
        assert_eq!(session.visible().len(), 40);
    }

    #[test]
    fn toggle_sort_reverses_and_resets() {
        let mut session = ExplorerSession::with_page_size(numbered(45), 20);
        session.load_more();
        session.toggle_sort();
        assert_eq!(session.sort_order(), SortOrder::Desc);
        assert_eq!(session.visible().len(), 20);
        assert_eq!(session.visible()[0].population, 44);
    }

    #[test]
    fn region_filter_drives_visible_list() {
        let countries = vec![
            country("FRA", "France", 67_000_000, "Europe"),
            country("JPN", "Japan", 125_000_000, "Asia"),
            country("DEU", "Germany", 83_000_000, "Europe"),
        ];
        let mut session = ExplorerSession::with_page_size(countries, 20);
        session.set_region("Europe");
        assert_eq!(session.filtered_len(), 2);
        assert!(session.visible().iter().all(|c| c.region == "Europe"));

        // Selector options come from the full dataset, not the filtered one.
        assert_eq!(session.regions(), vec!["Europe", "Asia"]);
    }

    #[test]
    fn find_locates_countries_hidden_by_filters() {
        let countries = vec![
            country("FRA", "France", 67_000_000, "Europe"),
            country("JPN", "Japan", 125_000_000, "Asia"),
        ];
        let mut session = ExplorerSession::new(countries);
        session.set_region("Asia");
        assert_eq!(session.find("FRA").map(|c| c.name.common.as_str()), Some("France"));
        assert!(session.find("XYZ").is_none());
    }

    #[test]
    fn empty_dataset_is_inert() {
        let mut session = ExplorerSession::new(Vec::new());
        assert!(session.visible().is_empty());
        assert!(session.is_exhausted());
        assert!(!session.load_more());
        assert!(session.regions().is_empty());
    }
}
