//! Status bar configuration.
//!
//! A screen declares the status bar appearance it wants and applies it
//! against a host when it becomes focused. Inactive configurations are
//! skipped so a background screen never clobbers the foreground one.

use tracing::trace;

use crate::theme::Color;

/// Status bar text and icon appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    /// Light text over a dark background.
    #[default]
    LightContent,
    /// Dark text over a light background.
    DarkContent,
    /// Whatever the platform default is.
    Default,
}

/// A desired status bar appearance.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBarConfig {
    /// Background color behind the status bar.
    pub color: Color,
    /// Text and icon style.
    #[serde(default)]
    pub style: StatusBarStyle,
    /// Whether content draws underneath the status bar.
    #[serde(default)]
    pub translucent: bool,
    /// Whether this configuration should currently apply.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl StatusBarConfig {
    /// Creates an active, opaque, light-content configuration over `color`.
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
            style: StatusBarStyle::default(),
            translucent: false,
            active: true,
        }
    }

    /// Sets the text and icon style.
    pub fn with_style(mut self, style: StatusBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets whether content draws underneath the status bar.
    pub fn with_translucent(mut self, translucent: bool) -> Self {
        self.translucent = translucent;
        self
    }

    /// Sets whether this configuration should currently apply.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Applies status bar settings to the platform.
#[cfg_attr(test, mockall::automock)]
pub trait StatusBarHost {
    /// Sets the background color behind the status bar.
    fn set_background_color(&self, color: &str);
    /// Sets whether content draws underneath the status bar.
    fn set_translucent(&self, translucent: bool);
    /// Sets the text and icon style.
    fn set_bar_style(&self, style: StatusBarStyle);
}

/// Applies `config` to `host` if the configuration is active.
pub fn apply_status_bar(host: &dyn StatusBarHost, config: &StatusBarConfig) {
    if !config.active {
        trace!(color = %config.color, "skipping inactive status bar config");
        return;
    }
    host.set_background_color(&config.color);
    host.set_translucent(config.translucent);
    host.set_bar_style(config.style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::colors;
    use mockall::predicate::eq;

    #[test]
    fn test_defaults() {
        let config = StatusBarConfig::new(colors::PRIMARY);
        assert_eq!(config.style, StatusBarStyle::LightContent);
        assert!(!config.translucent);
        assert!(config.active);
    }

    #[test]
    fn test_apply_forwards_all_settings() {
        let config = StatusBarConfig::new(colors::WHITE)
            .with_style(StatusBarStyle::DarkContent)
            .with_translucent(true);
        let mut host = MockStatusBarHost::new();
        host.expect_set_background_color()
            .with(eq(colors::WHITE))
            .times(1)
            .return_const(());
        host.expect_set_translucent()
            .with(eq(true))
            .times(1)
            .return_const(());
        host.expect_set_bar_style()
            .with(eq(StatusBarStyle::DarkContent))
            .times(1)
            .return_const(());
        apply_status_bar(&host, &config);
    }

    #[test]
    fn test_inactive_config_is_skipped() {
        let config = StatusBarConfig::new(colors::PRIMARY).with_active(false);
        let mut host = MockStatusBarHost::new();
        host.expect_set_background_color().times(0);
        host.expect_set_translucent().times(0);
        host.expect_set_bar_style().times(0);
        apply_status_bar(&host, &config);
    }

    #[test]
    fn test_serde_kebab_case_style() {
        let json = serde_json::to_string(&StatusBarStyle::LightContent).unwrap();
        assert_eq!(json, "\"light-content\"");
        let style: StatusBarStyle = serde_json::from_str("\"dark-content\"").unwrap();
        assert_eq!(style, StatusBarStyle::DarkContent);
    }
}
