use memo_contracts::shared::selectors::CONFIG_SCRIPT_ID;
use memo_contracts::BehaviorConfig;

use super::dom;

/// Parse the settings block rendered into the page; no block means defaults.
pub fn read_config() -> Result<BehaviorConfig, String> {
    let json = dom::document()?
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content());

    match json {
        Some(json) => BehaviorConfig::from_json(&json).map_err(|err| format!("{:#}", err)),
        None => Ok(BehaviorConfig::default()),
    }
}

/// Like [`read_config`], but logs the problem and falls back to defaults.
pub fn load_config() -> BehaviorConfig {
    read_config().unwrap_or_else(|err| {
        log::warn!("Using default page behavior config: {}", err);
        BehaviorConfig::default()
    })
}

pub fn log_level(config: &BehaviorConfig) -> log::Level {
    config.log_level.parse().unwrap_or(log::Level::Debug)
}
