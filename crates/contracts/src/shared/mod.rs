pub mod alert;
pub mod behavior_config;
pub mod datetime;
pub mod field_rules;
pub mod loading;
pub mod selectors;
