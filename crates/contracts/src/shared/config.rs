use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Brand shown in the top header and on the sign-in page
    pub title: String,
    /// ISO currency code used for money tiles
    pub currency: String,
    /// Delay between the last keystroke and the filter run
    pub search_debounce_ms: u32,
    /// Tags/requirements shown on a card before "+N more"
    pub card_preview_limit: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InventoryConfig {
    /// Stock gauge capacity as a multiple of the reorder point
    pub gauge_capacity_factor: f64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[ui]
title = "ProcureHub"
currency = "USD"
search_debounce_ms = 300
card_preview_limit = 3

[inventory]
gauge_capacity_factor = 2.0
"#;

/// Load configuration
///
/// Search order:
/// 1. The override document, when one is supplied
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(contents) = override_toml.filter(|s| !s.trim().is_empty()) {
        log::info!("Loading config from override document");
        let config: AppConfig = toml::from_str(contents)?;
        return Ok(config);
    }

    log::info!("Using default embedded configuration");
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                title: "ProcureHub".to_string(),
                currency: "USD".to_string(),
                search_debounce_ms: 300,
                card_preview_limit: 3,
            },
            inventory: InventoryConfig {
                gauge_capacity_factor: 2.0,
            },
        }
    }
}

impl AppConfig {
    /// The embedded default document, or the built-in values if it fails to parse.
    pub fn embedded() -> Self {
        load_config(None).unwrap_or_else(|e| {
            log::warn!("Embedded configuration rejected: {}", e);
            Self::default()
        })
    }
}

impl UiConfig {
    /// Currency symbol for money formatting; falls back to the code itself.
    pub fn currency_symbol(&self) -> &str {
        match self.currency.as_str() {
            "USD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(AppConfig::embedded(), config);
        assert_eq!(config.ui.currency_symbol(), "$");
    }

    #[test]
    fn test_override_document() {
        let config = load_config(Some(
            r#"
[ui]
title = "Plant 2"
currency = "EUR"
search_debounce_ms = 0
card_preview_limit = 5

[inventory]
gauge_capacity_factor = 3.0
"#,
        ))
        .unwrap();
        assert_eq!(config.ui.title, "Plant 2");
        assert_eq!(config.ui.currency_symbol(), "€");
        assert_eq!(config.inventory.gauge_capacity_factor, 3.0);
    }

    #[test]
    fn test_incomplete_override_is_an_error() {
        assert!(load_config(Some("[ui]\ntitle = \"x\"\n")).is_err());
    }
}
