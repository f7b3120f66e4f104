use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Client configuration baked into the binary.
const CONFIG_TOML: &str = include_str!("../config.toml");

/// Parse the embedded `config.toml` once and return it.
///
/// A compile-time `LAB_PORTAL_API_URL` overrides `[api] base_url`. If the
/// embedded file is unparseable every setting falls back to its default.
pub fn load() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse(CONFIG_TOML);
        let config = match option_env!("LAB_PORTAL_API_URL") {
            Some(url) if !url.is_empty() => config.with_base_url(url),
            _ => config,
        };
        tracing::debug!(base_url = %config.api.base_url, "loaded client config");
        config
    })
}

fn parse(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse config.toml: {e}; using defaults");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config: AppConfig = toml::from_str(CONFIG_TOML).unwrap();
        assert!(config.api.base_url.starts_with("http"));
        assert_eq!(config.booking.start_time, "07:00");
        assert_eq!(config.booking.end_time, "11:00");
    }

    #[test]
    fn unparseable_config_falls_back_to_defaults() {
        assert_eq!(parse("[api\nbase_url = "), AppConfig::default());
    }
}
