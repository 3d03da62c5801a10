//! Session-scoped fetch cache for the country list.
//!
//! # Design
//! The cache is an explicit object constructed once per session and injected
//! into callers, not an ambient global, so tests can run against isolated
//! instances. Entries are keyed by request URL; at most one entry per URL and
//! entries are never invalidated or expired for the life of the cache. Failed
//! fetches cache nothing, so the next call for the same URL retries.
//!
//! Mutation happens only on the calling thread, on successful completion of
//! a fetch. Two racing first-time fetches of the same URL would each hit the
//! network and overwrite the same slot with identical data, which is harmless
//! for an idempotent read.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::client::CountryClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Country;

/// Memoizes decoded country lists by request URL for the life of the value.
#[derive(Debug, Default)]
pub struct FetchCache {
    entries: HashMap<String, Vec<Country>>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a successful fetch for `url` has already been stored.
    pub fn is_cached(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Fetch the country list through `transport`, or serve it from the
    /// cache without invoking `transport` at all.
    ///
    /// On a miss the transport executes the built request; the decoded list
    /// is stored only if both the round-trip and the decode succeed. Errors
    /// are returned to the caller, who shows the collapsed
    /// [`user_message`](ApiError::user_message) rather than the diagnostic
    /// detail.
    pub fn fetch<F>(&mut self, client: &CountryClient, transport: F) -> Result<&[Country], ApiError>
    where
        F: FnOnce(&HttpRequest) -> Result<HttpResponse, ApiError>,
    {
        let request = client.build_list_countries();
        match self.entries.entry(request.url.clone()) {
            Entry::Occupied(entry) => {
                debug!(url = %request.url, "serving country list from cache");
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                debug!(url = %request.url, "cache miss, fetching country list");
                let countries = transport(&request)
                    .and_then(|response| client.parse_list_countries(response))
                    .map_err(|err| {
                        warn!(url = %request.url, error = %err, "country fetch failed");
                        err
                    })?;
                debug!(url = %request.url, count = countries.len(), "country list cached");
                Ok(entry.insert(countries).as_slice())
            }
        }
    }
}
