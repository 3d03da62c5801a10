//! Pure filter/sort pipeline over the in-memory country list.
//!
//! # Design
//! `filter_and_sort` is a pure function of its declared inputs; callers
//! re-invoke it whenever records, search, region, or sort order change.
//! It never mutates the input slice — the sort runs on a copy, and the
//! standard stable sort preserves the relative order of countries with equal
//! populations.

use serde::{Deserialize, Serialize};

use crate::types::Country;

/// Direction of the population sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction, for the sort toggle control.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Compute the displayed ordering from raw records and user criteria.
///
/// A record is kept when the search text is empty or matches the common name
/// or first capital case-insensitively, and when the region selection is
/// empty or equals the record's region exactly. The survivors are sorted by
/// population in the requested direction.
pub fn filter_and_sort(
    records: &[Country],
    search: &str,
    region: &str,
    order: SortOrder,
) -> Vec<Country> {
    let query = search.to_lowercase();
    let mut filtered: Vec<Country> = records
        .iter()
        .filter(|country| matches_search(country, &query) && matches_region(country, region))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| match order {
        SortOrder::Asc => a.population.cmp(&b.population),
        SortOrder::Desc => b.population.cmp(&a.population),
    });
    filtered
}

/// Unique non-empty regions in first-seen order, for the region selector.
pub fn distinct_regions(records: &[Country]) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for country in records {
        if !country.region.is_empty() && !regions.contains(&country.region) {
            regions.push(country.region.clone());
        }
    }
    regions
}

fn matches_search(country: &Country, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if country.name.common.to_lowercase().contains(query) {
        return true;
    }
    country
        .primary_capital()
        .is_some_and(|capital| capital.to_lowercase().contains(query))
}

fn matches_region(country: &Country, region: &str) -> bool {
    region.is_empty() || country.region == region
}
