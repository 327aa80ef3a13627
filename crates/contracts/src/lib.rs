//! Shared types and target-independent rules for the memo page behaviors.
//!
//! Nothing in here touches the DOM, so everything is unit-tested on the host.

pub mod shared;

pub use shared::alert::AlertKind;
pub use shared::behavior_config::{BehaviorConfig, RestorePolicy};
pub use shared::field_rules::{evaluate_field, FieldError, FieldKind, FieldRules};
