//! DOM attribute contract consumed by the page behaviors.
//!
//! Templates render these hooks; the frontend only ever queries through the
//! constants below so the contract lives in one place.

/// Elements that get a toolkit tooltip.
pub const TOOLTIP_TRIGGER: &str = "[data-bs-toggle=\"tooltip\"]";

/// Forms validated on the client before submit.
pub const VALIDATED_FORM: &str = "form[data-validate=\"true\"]";

/// Every field the validator inspects: required ones and datetime inputs.
/// A single query keeps document order and never yields a field twice.
pub const VALIDATED_FIELD: &str = "[required], input[type=\"datetime-local\"]";

pub const DATETIME_INPUT_TYPE: &str = "datetime-local";

/// Status dropdown that submits its form on change.
pub const STATUS_SELECT: &str = "select[name=\"new_status\"]";

/// Actionable elements guarded by a confirmation prompt.
pub const CONFIRM_TRIGGER: &str = "[data-confirm]";
pub const CONFIRM_ATTR: &str = "data-confirm";

pub const NAV_LINK: &str = ".navbar-nav .nav-link";
pub const NAV_COLLAPSE: &str = ".navbar-collapse";
/// Class the toolkit puts on an expanded collapse panel.
pub const SHOWN_CLASS: &str = "show";

pub const ALL_FORMS: &str = "form";

/// Controls that the loading state disables.
pub const LOADING_CONTROLS: &str = "button, input[type=\"submit\"]";

pub const INVALID_CLASS: &str = "is-invalid";
pub const FEEDBACK_CLASS: &str = "invalid-feedback";
/// Marks feedback nodes created on the client, as opposed to server-rendered ones.
pub const CLIENT_FEEDBACK_ATTR: &str = "data-client-feedback";

pub const DISMISSIBLE_ALERT: &str = ".alert-dismissible";

/// Id of the optional `<script type="application/json">` block with behavior settings.
pub const CONFIG_SCRIPT_ID: &str = "page-behaviors-config";
