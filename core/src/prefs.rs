//! Persisted user preferences.
//!
//! A single boolean — the dark-mode flag — stored as a small JSON file and
//! read back at startup. A missing or unreadable file falls back to the
//! default rather than erroring, matching a first visit with nothing stored.
//! No schema versioning; the payload is one scalar.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// User preferences surviving across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preferences {
    /// Read preferences from `path`, defaulting when the file is missing or
    /// does not parse.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring unreadable preferences file");
            Self::default()
        })
    }

    /// Write preferences to `path`, replacing any previous content.
    pub fn store(&self, path: &Path) -> io::Result<()> {
        fs::write(path, serde_json::to_vec_pretty(self)?)
    }

    /// The dark-mode toggle.
    pub fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }
}
