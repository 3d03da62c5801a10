//! Domain DTOs for the country dataset.
//!
//! # Design
//! These types mirror the upstream REST Countries schema but are defined
//! independently of the proxy crate; integration tests catch schema drift.
//! Records are decoded once per successful fetch and never modified after.
//! Descriptive fields (`subregion`, `timezones`, `languages`, `currencies`,
//! `flags`) are carried through unchanged for display only — the pipeline
//! never reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single country record returned by the API.
///
/// `cca3` is the stable three-letter identifier. `population` is the sort
/// key, `region` the categorical filter key, and `name.common` plus the
/// first `capital` entry are the search keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub cca3: String,
    pub name: CountryName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    pub population: u64,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    pub flags: Flags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<BTreeMap<String, Currency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
}

/// Common and official names of a country. `common` is what the list and
/// search use; `official` appears only in the detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// Flag image reference. Only the PNG variant is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flags {
    pub png: String,
}

/// One currency entry from the upstream `currencies` map. Some currencies
/// have no symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Country {
    /// First capital entry, if the country has any.
    pub fn primary_capital(&self) -> Option<&str> {
        self.capital
            .as_deref()
            .and_then(|capitals| capitals.first())
            .map(String::as_str)
    }

    /// Capital for display; countries without one render as "N/A".
    pub fn capital_display(&self) -> &str {
        self.primary_capital().unwrap_or("N/A")
    }
}
