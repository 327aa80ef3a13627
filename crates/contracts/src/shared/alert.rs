use serde::{Deserialize, Serialize};

/// How long a banner stays on screen when nobody dismisses it.
pub const DEFAULT_ALERT_TIMEOUT_MS: u32 = 3000;

/// Inline style pinning the banner to the top-right corner.
pub const ALERT_BANNER_STYLE: &str = "top: 20px; right: 20px; z-index: 9999; min-width: 300px;";

/// Kind of a transient alert banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    /// Suffix of the `alert-*` style class
    pub fn code(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }

    pub fn all() -> Vec<AlertKind> {
        vec![
            AlertKind::Success,
            AlertKind::Danger,
            AlertKind::Warning,
            AlertKind::Info,
        ]
    }

    /// Parse a kind passed in from a script; `error` is accepted for `danger`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "success" => Some(AlertKind::Success),
            "danger" | "error" => Some(AlertKind::Danger),
            "warning" => Some(AlertKind::Warning),
            "info" => Some(AlertKind::Info),
            _ => None,
        }
    }

    /// Full class list of a banner of this kind
    pub fn banner_class(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show position-fixed",
            self.code()
        )
    }
}
