use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::shared::alert::DEFAULT_ALERT_TIMEOUT_MS;

/// What releases a loading state entered by a submit that did not navigate away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestorePolicy {
    /// Controls stay disabled until a script calls `hideLoading`.
    #[default]
    Manual,
    /// Controls are restored when the page comes back from the back/forward cache.
    OnPageShow,
}

/// Page behavior settings; every key is optional in the JSON block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub alert_timeout_ms: u32,
    pub default_confirm_message: String,
    pub loading_label: String,
    pub loading_restore: RestorePolicy,
    /// `log` level name: error, warn, info, debug or trace.
    pub log_level: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            alert_timeout_ms: DEFAULT_ALERT_TIMEOUT_MS,
            default_confirm_message: "Are you sure?".to_string(),
            loading_label: "Loading...".to_string(),
            loading_restore: RestorePolicy::Manual,
            log_level: "debug".to_string(),
        }
    }
}

impl BehaviorConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).context("invalid page behavior config")
    }

    /// Resolve the prompt of a `data-confirm` element; empty attributes fall back to the default.
    pub fn confirm_message<'a>(&'a self, attr: Option<&'a str>) -> &'a str {
        match attr.map(str::trim) {
            Some(message) if !message.is_empty() => message,
            _ => &self.default_confirm_message,
        }
    }
}
