// Core configuration types
mod core;
mod loader;

pub use self::core::{
    default_maximum_line_length, default_pager, RenderConfig, RenderOverrides, VersepagerConfig,
    MIN_LINE_LENGTH, WRAP_RESERVED_COLUMNS,
};
pub use loader::{
    config_candidates, directory_ancestors, load_config, load_config_from, parse_config,
    user_config_path, CONFIG_FILE_NAME,
};

/// Environment variable holding the pager command, checked before `PAGER`
pub const PAGER_ENV: &str = "VERSEPAGER_PAGER";

/// Pager command from the environment, if one is set and non-empty.
pub fn pager_from_env() -> Option<String> {
    pager_from_vars(std::env::var(PAGER_ENV).ok(), std::env::var("PAGER").ok())
}

pub(crate) fn pager_from_vars(own: Option<String>, generic: Option<String>) -> Option<String> {
    own.into_iter()
        .chain(generic)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_pager_variable_wins() {
        let pager = pager_from_vars(Some("most".into()), Some("more".into()));
        assert_eq!(pager.as_deref(), Some("most"));
    }

    #[test]
    fn test_blank_values_fall_through() {
        let pager = pager_from_vars(Some("  ".into()), Some("more".into()));
        assert_eq!(pager.as_deref(), Some("more"));
        assert_eq!(pager_from_vars(None, Some(String::new())), None);
    }
}
