// src/config.rs
use serde::{Deserialize, Serialize};

const EMBEDDED_CONFIG: &str = include_str!("../static/site_config.json");

/// Tunables for the page's scroll, reveal and notification behavior.
/// Every field falls back to its compiled-in default when missing from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navbar: NavbarConfig,
    pub parallax: ParallaxConfig,
    pub reveal: RevealConfig,
    pub toast: ToastConfig,
    pub modal: ModalConfig,
    pub dev_tools: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub scroll_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub hero_speed: f64,
    pub card_base_speed: f64,
    pub card_speed_step: f64,
    /// Parallax stops once the scroll passes this many viewport heights.
    pub viewport_limit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub stagger_secs: f64,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub enter_delay_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub enter_delay_ms: u32,
    pub exit_ms: u32,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse site config: {}", e))
    }

    /// Loads the config bundled with the page, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                Self::default()
            }
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar: NavbarConfig::default(),
            parallax: ParallaxConfig::default(),
            reveal: RevealConfig::default(),
            toast: ToastConfig::default(),
            modal: ModalConfig::default(),
            dev_tools: cfg!(debug_assertions),
        }
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
        }
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            hero_speed: 0.3,
            card_base_speed: 0.05,
            card_speed_step: 0.02,
            viewport_limit: 1.5,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: String::from(
                ".service-card, .portfolio-item, .contact-item, .stat-item, .about-text",
            ),
            threshold: 0.15,
            root_margin: String::from("0px 0px -60px 0px"),
            stagger_secs: 0.1,
            duration_secs: 0.8,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            visible_ms: 5000,
            exit_ms: 300,
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            exit_ms: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.navbar.scroll_threshold, 100.0);
        assert_eq!(config.toast.visible_ms, 5000);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "toast": { "visible_ms": 3000 } }"#).unwrap();
        assert_eq!(config.toast.visible_ms, 3000);
        assert_eq!(config.toast.exit_ms, 300);
        assert_eq!(config.reveal.root_margin, "0px 0px -60px 0px");
        assert_eq!(config.parallax.hero_speed, 0.3);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }
}
