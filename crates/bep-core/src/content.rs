//! Descriptive text shown alongside the waveforms
//!
//! The bundle is parsed once at startup from a JSON document and injected
//! into the screens that need it; nothing here is mutated afterwards.
//! Missing fields parse as empty strings so a partial document still
//! renders, just with blanks.

use serde::{Deserialize, Serialize};

use crate::error::{BepError, BepResult};

/// Per-signal descriptive record, keyed by short code in `name`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brief_intro: String,
    #[serde(default)]
    pub detail_1: String,
    #[serde(default)]
    pub detail_2: String,
    #[serde(default)]
    pub detail_3: String,
}

/// Read-only text content for the whole playground
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    items: Vec<SignalInfo>,
}

impl ContentBundle {
    /// Parse a bundle from its JSON document
    pub fn from_json(raw: &str) -> BepResult<Self> {
        serde_json::from_str(raw).map_err(|e| BepError::ContentFormat {
            reason: e.to_string(),
        })
    }

    /// Look up the record for a signal code ("ECG", "EEG", ...)
    pub fn info(&self, code: &str) -> Option<&SignalInfo> {
        self.items.iter().find(|item| item.name == code)
    }

    /// Number of per-signal records in the bundle
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
