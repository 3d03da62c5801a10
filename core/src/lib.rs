//! Client-side data pipeline for the country explorer.
//!
//! # Overview
//! Drives the list view: fetch the country dataset once per session through a
//! URL-keyed cache, filter and sort it by the user's criteria, and window the
//! result for infinite scroll. Rendering, visibility detection, and the
//! passthrough endpoint live elsewhere; this crate is the state and the pure
//! transformations between them.
//!
//! # Design
//! - `CountryClient` builds [`HttpRequest`] values and parses
//!   [`HttpResponse`] values without touching the network (host-does-IO
//!   pattern); the caller executes the round-trip, so everything here is
//!   deterministic and testable.
//! - [`FetchCache`] is an explicit session-scoped object, not an ambient
//!   global. Successful fetches are memoized by URL forever; failures are
//!   never cached and collapse to one user-facing message.
//! - [`filter_and_sort`] is pure and stable; [`PageWindow`] is the pure
//!   state transition behind the view layer's load-more trigger.
//! - [`ExplorerSession`] ties records, inputs, and window together and
//!   recomputes the derived list eagerly on every input change.

pub mod cache;
pub mod client;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod prefs;
pub mod session;
pub mod types;
pub mod window;

pub use cache::FetchCache;
pub use client::CountryClient;
pub use error::{ApiError, DATA_SOURCE_UNAVAILABLE};
pub use http::{HttpRequest, HttpResponse};
pub use pipeline::{distinct_regions, filter_and_sort, SortOrder};
pub use prefs::Preferences;
pub use session::ExplorerSession;
pub use types::{Country, CountryName, Currency, Flags};
pub use window::{PageWindow, ITEMS_PER_LOAD};
