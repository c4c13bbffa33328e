//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current register configuration.
///
/// ## When Used
/// - Session start (to configure UI)
/// - Receipt printing (store name)
/// - Currency formatting
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState {
            store_name: "Night Market".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(get_config(&config), config);
    }
}
