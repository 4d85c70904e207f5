//! Animated bottom tab bar.
//!
//! Each tab owns an [`ActiveTransition`] whose progress drives icon
//! tint, label color, and scale. Activation is driven by the current
//! route; pressing a tab notifies the optional callback and then asks
//! the navigator to move.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use ui_core::active_transition::{ActiveTransition, DEFAULT_ACTIVE_DURATION_MS};
use ui_core::theme::{colors, font_family, font_size, mix_colors, Color};

use crate::style::{Dimension, ImageStyleProps, StyleProps, TextStyleProps};

/// Scale an active tab grows to when scaling is enabled without an
/// explicit factor.
pub const DEFAULT_ACTIVE_TAB_SCALE: f32 = 1.3;

/// Scale applied to an active tab.
///
/// `true` enables the default grow factor, `false` disables scaling,
/// and a number is used as the factor directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActiveScale {
    Enabled(bool),
    Factor(f32),
}

impl ActiveScale {
    /// Resolves the configured scale to a concrete factor. Absent
    /// configuration means no scaling.
    pub fn resolve(scale: Option<ActiveScale>) -> f32 {
        match scale {
            Some(ActiveScale::Enabled(true)) => DEFAULT_ACTIVE_TAB_SCALE,
            Some(ActiveScale::Enabled(false)) | None => 1.0,
            Some(ActiveScale::Factor(factor)) => factor,
        }
    }
}

/// One tab in the bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    /// Route this tab navigates to. Also keys the default test id.
    pub route: String,
    /// Label shown under the icon.
    pub label: String,
    /// Icon asset name.
    pub icon: String,
    /// Icon swapped in while the tab is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_icon: Option<String>,
    /// Disables presses on this tab.
    #[serde(default)]
    pub disabled: bool,
    /// Overrides the label visibility for this tab while active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_show_label: Option<bool>,
    /// Overrides the label visibility for this tab while inactive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_show_label: Option<bool>,
    /// Identifier for UI tests. Defaults to `tab-{route}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl TabItem {
    /// Creates a tab with the given route, label, and icon.
    pub fn new(
        route: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            label: label.into(),
            icon: icon.into(),
            active_icon: None,
            disabled: false,
            active_show_label: None,
            inactive_show_label: None,
            test_id: None,
        }
    }

    /// The test id, derived from the route when not set explicitly.
    pub fn effective_test_id(&self) -> String {
        self.test_id
            .clone()
            .unwrap_or_else(|| format!("tab-{}", self.route))
    }

    /// The icon shown for the given state. The active icon is a hard
    /// switch, not an interpolation.
    pub fn icon_for(&self, active: bool) -> &str {
        if active {
            self.active_icon.as_deref().unwrap_or(&self.icon)
        } else {
            &self.icon
        }
    }
}

/// Tab bar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomTabsProps {
    /// Tabs in display order.
    pub tabs: Vec<TabItem>,
    /// Tint for the active tab. Defaults to the palette primary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_color: Option<Color>,
    /// Tint for inactive tabs. Defaults to black.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_color: Option<Color>,
    /// Scale behavior for the active tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_scale: Option<ActiveScale>,
    /// Default label visibility for tabs without a per-state override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_label: Option<bool>,
    /// Bar-wide label visibility while a tab is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_show_label: Option<bool>,
    /// Bar-wide label visibility while a tab is inactive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_show_label: Option<bool>,
    /// Touch feedback opacity while a tab is pressed.
    #[serde(default = "default_active_opacity")]
    pub active_opacity: f32,
    /// Transition duration in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    /// Bar container style overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_style: Option<StyleProps>,
}

fn default_duration_ms() -> u32 {
    DEFAULT_ACTIVE_DURATION_MS
}

fn default_active_opacity() -> f32 {
    0.8
}

impl BottomTabsProps {
    /// Creates props for the given tabs with default appearance.
    pub fn new(tabs: Vec<TabItem>) -> Self {
        Self {
            tabs,
            active_color: None,
            inactive_color: None,
            active_scale: None,
            show_label: None,
            active_show_label: None,
            inactive_show_label: None,
            active_opacity: default_active_opacity(),
            duration_ms: default_duration_ms(),
            container_style: None,
        }
    }

    /// The active tint with its default applied.
    pub fn resolved_active_color(&self) -> &str {
        self.active_color.as_deref().unwrap_or(colors::PRIMARY)
    }

    /// The inactive tint with its default applied.
    pub fn resolved_inactive_color(&self) -> &str {
        self.inactive_color.as_deref().unwrap_or(colors::BLACK)
    }

    /// The concrete scale factor an active tab grows to.
    pub fn target_scale(&self) -> f32 {
        ActiveScale::resolve(self.active_scale)
    }

    /// Whether `tab`'s label is shown in the given state.
    ///
    /// The per-tab override wins, then the bar-wide per-state setting,
    /// then the bar-wide default, then the visible fallback.
    pub fn label_visible(&self, tab: &TabItem, active: bool) -> bool {
        let (tab_override, bar_override) = if active {
            (tab.active_show_label, self.active_show_label)
        } else {
            (tab.inactive_show_label, self.inactive_show_label)
        };
        tab_override
            .or(bar_override)
            .or(self.show_label)
            .unwrap_or(true)
    }
}

/// Navigates between routes.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Moves to `route`.
    fn navigate(&self, route: &str);
}

/// Everything needed to render one tab at its current progress.
#[derive(Debug, Clone, PartialEq)]
pub struct TabVisual {
    /// Icon asset for the current state.
    pub icon: String,
    /// Icon tint interpolated between the inactive and active colors.
    pub icon_tint: Color,
    /// Label color interpolated between the inactive and active colors.
    pub label_color: Color,
    /// Current scale factor.
    pub scale: f32,
    /// Whether the label is shown.
    pub show_label: bool,
    /// Test id for this tab.
    pub test_id: String,
}

/// Live state for a tab bar instance.
pub struct BottomTabsState {
    transitions: Vec<ActiveTransition>,
    routes: Vec<String>,
}

impl BottomTabsState {
    /// Creates state for `props` with `current_route` already active.
    ///
    /// The active tab starts settled at full progress, so first render
    /// does not animate.
    pub fn new(props: &BottomTabsProps, current_route: &str) -> Self {
        let transitions = props
            .tabs
            .iter()
            .map(|tab| ActiveTransition::with_state(props.duration_ms, tab.route == current_route))
            .collect();
        let routes = props.tabs.iter().map(|tab| tab.route.clone()).collect();
        Self {
            transitions,
            routes,
        }
    }

    /// Updates the active route, starting transitions on every tab
    /// whose state changed.
    pub fn set_current_route(&self, route: &str) {
        debug!(route, "bottom tabs route changed");
        for (transition, tab_route) in self.transitions.iter().zip(&self.routes) {
            transition.set_active(tab_route == route);
        }
    }

    /// Handles a press on the tab at `index`.
    ///
    /// Disabled tabs ignore the press. Otherwise the callback runs
    /// first, then the navigator moves, then the transitions retarget.
    /// Returns whether navigation happened.
    pub fn press_tab(
        &self,
        props: &BottomTabsProps,
        index: usize,
        navigator: &dyn Navigator,
        mut on_tab_press: Option<&mut dyn FnMut(&str)>,
    ) -> bool {
        let Some(tab) = props.tabs.get(index) else {
            trace!(index, "tab press out of range");
            return false;
        };
        if tab.disabled {
            trace!(route = %tab.route, "press on disabled tab ignored");
            return false;
        }
        if let Some(callback) = on_tab_press.as_deref_mut() {
            callback(&tab.route);
        }
        navigator.navigate(&tab.route);
        self.set_current_route(&tab.route);
        true
    }

    /// Whether the tab at `index` is currently the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.transitions
            .get(index)
            .is_some_and(ActiveTransition::is_active)
    }

    /// Transition progress for the tab at `index`.
    pub fn progress(&self, index: usize) -> f32 {
        self.transitions
            .get(index)
            .map_or(0.0, ActiveTransition::progress)
    }

    /// Computes the render description for the tab at `index`.
    pub fn visual(&self, props: &BottomTabsProps, index: usize) -> Option<TabVisual> {
        let tab = props.tabs.get(index)?;
        let transition = self.transitions.get(index)?;
        let progress = transition.progress();
        let active = transition.is_active();
        let inactive_color = props.resolved_inactive_color();
        let active_color = props.resolved_active_color();
        let tint = mix_colors(inactive_color, active_color, progress);
        let target = props.target_scale();
        Some(TabVisual {
            icon: tab.icon_for(active).to_string(),
            icon_tint: tint.clone(),
            label_color: tint,
            scale: 1.0 + (target - 1.0) * progress,
            show_label: props.label_visible(tab, active),
            test_id: tab.effective_test_id(),
        })
    }

    /// Advances all tab transitions. Returns `true` while any are in
    /// flight.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let mut animating = false;
        for transition in &self.transitions {
            animating |= transition.tick(dt_ms);
        }
        animating
    }

    /// Cancels all in-flight transitions.
    pub fn stop(&self) {
        for transition in &self.transitions {
            transition.stop();
        }
    }
}

/// Default styles for the bar and its items.
pub fn default_styles() -> BottomTabsStyles {
    BottomTabsStyles {
        container: StyleProps {
            background_color: Some(colors::WHITE.to_string()),
            ..Default::default()
        },
        item: StyleProps {
            padding: Some(crate::style::Spacing::Points(8.0)),
            ..Default::default()
        },
        icon: ImageStyleProps {
            width: Some(Dimension::Points(20.0)),
            height: Some(Dimension::Points(20.0)),
            ..Default::default()
        },
        label: TextStyleProps {
            font_size: Some(font_size::F11),
            font_family: Some(font_family::INTER_REGULAR.to_string()),
            margin_top: Some(5.0),
            ..Default::default()
        },
    }
}

/// Resolved styles for each part of the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BottomTabsStyles {
    pub container: StyleProps,
    pub item: StyleProps,
    pub icon: ImageStyleProps,
    pub label: TextStyleProps,
}

impl BottomTabsStyles {
    /// The container style with caller overrides merged on top.
    pub fn container_for(&self, props: &BottomTabsProps) -> StyleProps {
        match &props.container_style {
            Some(overrides) => self.container.merge(overrides),
            None => self.container.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn three_tabs() -> BottomTabsProps {
        BottomTabsProps::new(vec![
            TabItem::new("home", "Home", "icon-home"),
            TabItem::new("search", "Search", "icon-search"),
            TabItem::new("profile", "Profile", "icon-profile"),
        ])
    }

    fn settle(state: &BottomTabsState) {
        while state.tick(16.0) {}
    }

    #[test]
    fn test_initial_route_starts_settled() {
        let props = three_tabs();
        let state = BottomTabsState::new(&props, "search");
        assert!(!state.is_active(0));
        assert!(state.is_active(1));
        assert_eq!(state.progress(1), 1.0);
        assert_eq!(state.progress(0), 0.0);
    }

    #[test]
    fn test_route_change_animates_both_tabs() {
        let props = three_tabs();
        let state = BottomTabsState::new(&props, "home");
        state.set_current_route("profile");
        assert!(state.tick(100.0));
        assert!(state.progress(0) < 1.0);
        assert!(state.progress(2) > 0.0);
        settle(&state);
        assert_eq!(state.progress(0), 0.0);
        assert_eq!(state.progress(2), 1.0);
    }

    #[test]
    fn test_press_navigates_after_callback() {
        let props = three_tabs();
        let state = BottomTabsState::new(&props, "home");
        let order = RefCell::new(Vec::new());

        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate()
            .withf(|route: &str| route == "search")
            .times(1)
            .return_const(());

        let mut callback = |route: &str| order.borrow_mut().push(route.to_string());
        assert!(state.press_tab(&props, 1, &navigator, Some(&mut callback)));
        assert_eq!(order.borrow().as_slice(), &["search".to_string()]);
        assert!(state.is_active(1));
    }

    #[test]
    fn test_disabled_tab_ignores_press() {
        let mut props = three_tabs();
        props.tabs[1].disabled = true;
        let state = BottomTabsState::new(&props, "home");

        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().times(0);
        assert!(!state.press_tab(&props, 1, &navigator, None));
        assert!(state.is_active(0));
    }

    #[test]
    fn test_out_of_range_press_is_rejected() {
        let props = three_tabs();
        let state = BottomTabsState::new(&props, "home");
        let mut navigator = MockNavigator::new();
        navigator.expect_navigate().times(0);
        assert!(!state.press_tab(&props, 9, &navigator, None));
    }

    #[test]
    fn test_active_scale_resolution() {
        assert_eq!(ActiveScale::resolve(None), 1.0);
        assert_eq!(ActiveScale::resolve(Some(ActiveScale::Enabled(false))), 1.0);
        assert_eq!(
            ActiveScale::resolve(Some(ActiveScale::Enabled(true))),
            DEFAULT_ACTIVE_TAB_SCALE
        );
        assert_eq!(ActiveScale::resolve(Some(ActiveScale::Factor(1.15))), 1.15);
    }

    #[test]
    fn test_active_scale_deserializes_untagged() {
        let enabled: ActiveScale = serde_json::from_str("true").unwrap();
        assert_eq!(enabled, ActiveScale::Enabled(true));
        let factor: ActiveScale = serde_json::from_str("1.5").unwrap();
        assert_eq!(factor, ActiveScale::Factor(1.5));
    }

    #[test]
    fn test_visual_interpolates_tint_and_scale() {
        let mut props = three_tabs();
        props.active_scale = Some(ActiveScale::Enabled(true));
        props.active_color = Some(colors::WHITE.to_string());
        props.inactive_color = Some(colors::BLACK.to_string());
        let state = BottomTabsState::new(&props, "home");

        let active = state.visual(&props, 0).unwrap();
        assert_eq!(active.icon_tint, colors::WHITE);
        assert_eq!(active.scale, DEFAULT_ACTIVE_TAB_SCALE);

        let inactive = state.visual(&props, 1).unwrap();
        assert_eq!(inactive.icon_tint, colors::BLACK);
        assert_eq!(inactive.scale, 1.0);

        state.set_current_route("search");
        state.tick(100.0);
        let midway = state.visual(&props, 1).unwrap();
        assert_ne!(midway.icon_tint, colors::BLACK);
        assert_ne!(midway.icon_tint, colors::WHITE);
        assert!(midway.scale > 1.0 && midway.scale < DEFAULT_ACTIVE_TAB_SCALE);
    }

    #[test]
    fn test_active_icon_is_a_hard_switch() {
        let mut props = three_tabs();
        props.tabs[0].active_icon = Some("icon-home-filled".to_string());
        let state = BottomTabsState::new(&props, "home");

        assert_eq!(state.visual(&props, 0).unwrap().icon, "icon-home-filled");
        state.set_current_route("search");
        // Mid-transition the inactive icon already shows.
        state.tick(50.0);
        assert_eq!(state.visual(&props, 0).unwrap().icon, "icon-home");
        assert_eq!(state.visual(&props, 1).unwrap().icon, "icon-search");
    }

    #[test]
    fn test_label_visibility_precedence() {
        let mut props = three_tabs();
        props.show_label = Some(false);
        props.tabs[0].active_show_label = Some(true);
        let home = props.tabs[0].clone();
        let search = props.tabs[1].clone();

        // Per-state override beats the bar-wide setting.
        assert!(props.label_visible(&home, true));
        // No override falls through to the bar-wide setting.
        assert!(!props.label_visible(&home, false));
        assert!(!props.label_visible(&search, true));

        // No settings at all means visible.
        props.show_label = None;
        assert!(props.label_visible(&search, false));
    }

    #[test]
    fn test_active_hide_override_beats_global_show() {
        let mut props = three_tabs();
        props.show_label = Some(true);
        props.active_show_label = Some(false);
        let home = props.tabs[0].clone();

        // The active tab hides its label despite the global setting.
        assert!(!props.label_visible(&home, true));
        // Inactive tabs still follow the global setting.
        assert!(props.label_visible(&home, false));
    }

    #[test]
    fn test_per_tab_visibility_beats_bar_level() {
        let mut props = three_tabs();
        props.active_show_label = Some(false);
        props.tabs[0].active_show_label = Some(true);
        let home = props.tabs[0].clone();
        let search = props.tabs[1].clone();

        assert!(props.label_visible(&home, true));
        assert!(!props.label_visible(&search, true));
    }

    #[test]
    fn test_bar_props_deserialize_with_defaults() {
        let props: BottomTabsProps = serde_json::from_str(
            r#"{"tabs":[{"route":"home","label":"Home","icon":"icon-home"}],"activeShowLabel":false}"#,
        )
        .unwrap();
        assert_eq!(props.active_show_label, Some(false));
        assert_eq!(props.inactive_show_label, None);
        assert_eq!(props.active_opacity, 0.8);
        let home = props.tabs[0].clone();
        assert!(!props.label_visible(&home, true));
        assert!(props.label_visible(&home, false));
    }

    #[test]
    fn test_container_style_override_merges_over_defaults() {
        let mut props = three_tabs();
        props.container_style = Some(StyleProps {
            background_color: Some("#111111".to_string()),
            ..Default::default()
        });
        let styles = default_styles();
        let container = styles.container_for(&props);
        assert_eq!(container.background_color.as_deref(), Some("#111111"));

        // Without an override the white default shows.
        let plain = three_tabs();
        let container = styles.container_for(&plain);
        assert_eq!(container.background_color.as_deref(), Some(colors::WHITE));
        assert_eq!(styles.label.font_size, Some(font_size::F11));
        assert_eq!(styles.icon.width, Some(Dimension::Points(20.0)));
    }

    #[test]
    fn test_default_test_id_derives_from_route() {
        let tab = TabItem::new("home", "Home", "icon-home");
        assert_eq!(tab.effective_test_id(), "tab-home");
        let mut custom = tab.clone();
        custom.test_id = Some("main-tab".to_string());
        assert_eq!(custom.effective_test_id(), "main-tab");
    }

    #[test]
    fn test_default_colors() {
        let props = three_tabs();
        assert_eq!(props.resolved_active_color(), colors::PRIMARY);
        assert_eq!(props.resolved_inactive_color(), colors::BLACK);
    }
}
