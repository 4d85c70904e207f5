//! Debounced, spring-animated button.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use ui_core::clock::Clock;
use ui_core::gate::PressGate;
use ui_core::press_scale::PressScale;
use ui_core::theme::{colors, font_size, Color};

use crate::style::{Dimension, ImageStyleProps, StyleProps, TextStyleProps};

fn default_debounce_ms() -> u64 {
    1000
}

fn default_active_opacity() -> f32 {
    0.8
}

/// Button configuration.
///
/// All fields are optional overrides over the built-in appearance. The
/// press handler itself lives on [`ButtonState`], not here, so props
/// stay plain data and serialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    /// Label text. Omitted entirely for icon-only buttons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Icon asset name, drawn before the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Disables presses and switches to the disabled appearance.
    #[serde(default)]
    pub disabled: bool,
    /// Shows the loader and suppresses presses while work is in flight.
    #[serde(default)]
    pub fetching: bool,
    /// Container style overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_style: Option<StyleProps>,
    /// Label style overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyleProps>,
    /// Icon style overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<ImageStyleProps>,
    /// Loader color. Falls back to `primary_color`, then the palette primary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader_color: Option<Color>,
    /// Background color when enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<Color>,
    /// Background color when disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_color: Option<Color>,
    /// Suppression window between accepted presses, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Touch feedback opacity while pressed.
    #[serde(default = "default_active_opacity")]
    pub active_opacity: f32,
    /// Shrink-on-press animation. `None` disables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate_scale: Option<f32>,
    /// Identifier for UI tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: None,
            icon: None,
            disabled: false,
            fetching: false,
            additional_style: None,
            text_style: None,
            icon_style: None,
            loader_color: None,
            primary_color: None,
            disabled_color: None,
            debounce_ms: default_debounce_ms(),
            active_opacity: default_active_opacity(),
            animate_scale: None,
            test_id: None,
        }
    }
}

impl ButtonProps {
    /// Creates props with the given label text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the fetching flag.
    pub fn fetching(mut self, fetching: bool) -> Self {
        self.fetching = fetching;
        self
    }

    /// Sets the suppression window between accepted presses.
    pub fn debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Enables the shrink-on-press animation with the given held scale.
    pub fn animate_scale(mut self, scale: f32) -> Self {
        self.animate_scale = Some(scale);
        self
    }

    /// Whether presses are currently accepted.
    pub fn is_pressable(&self) -> bool {
        !self.disabled && !self.fetching
    }

    /// Loader color with the documented fallback chain.
    pub fn resolved_loader_color(&self) -> &str {
        self.loader_color
            .as_deref()
            .or(self.primary_color.as_deref())
            .unwrap_or(colors::PRIMARY)
    }

    /// Container, label, and icon styles for the current state, with
    /// caller overrides merged on top.
    pub fn computed_styles(&self) -> ButtonStyles {
        let background = if self.disabled {
            self.disabled_color
                .clone()
                .unwrap_or_else(|| colors::GRAY_BG.to_string())
        } else {
            self.primary_color
                .clone()
                .unwrap_or_else(|| colors::PRIMARY.to_string())
        };
        let container = StyleProps {
            width: Some(Dimension::Points(176.0)),
            height: Some(Dimension::Points(53.0)),
            border_radius: Some(8.0),
            background_color: Some(background),
            ..Default::default()
        };
        let text = TextStyleProps {
            color: Some(colors::WHITE.to_string()),
            font_size: Some(font_size::F16),
            font_weight: Some("600".to_string()),
            ..Default::default()
        };
        let icon = ImageStyleProps {
            width: Some(Dimension::Points(24.0)),
            height: Some(Dimension::Points(26.0)),
            ..Default::default()
        };
        ButtonStyles {
            container: match &self.additional_style {
                Some(overrides) => container.merge(overrides),
                None => container,
            },
            text: match &self.text_style {
                Some(overrides) => text.merge(overrides),
                None => text,
            },
            icon: match &self.icon_style {
                Some(overrides) => icon.merge(overrides),
                None => icon,
            },
        }
    }
}

/// Resolved styles for each part of the button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyles {
    pub container: StyleProps,
    pub text: TextStyleProps,
    pub icon: ImageStyleProps,
}

/// Live interaction state for one button instance.
///
/// Owns the press gate and, when enabled in the props, the press-scale
/// animation. Props can change between presses; only `debounce_ms` and
/// `animate_scale` are latched at construction.
pub struct ButtonState {
    gate: PressGate,
    scale: Option<PressScale>,
}

impl ButtonState {
    /// Creates interaction state for `props` on the given clock.
    pub fn new(props: &ButtonProps, clock: Rc<dyn Clock>) -> Self {
        Self {
            gate: PressGate::new(props.debounce_ms, clock),
            scale: props.animate_scale.map(PressScale::with_pressed_scale),
        }
    }

    /// Binds the handler invoked when a press is accepted.
    pub fn set_on_press(&self, on_press: impl FnMut() + 'static) {
        self.gate.set_action(on_press);
    }

    /// Routes a press through the disabled and fetching checks, then
    /// the debounce gate. Returns whether the handler ran.
    pub fn press(&self, props: &ButtonProps) -> bool {
        if !props.is_pressable() {
            trace!(
                disabled = props.disabled,
                fetching = props.fetching,
                "press ignored"
            );
            return false;
        }
        self.gate.trigger()
    }

    /// Starts the shrink animation, if enabled.
    pub fn press_in(&self) {
        if let Some(scale) = &self.scale {
            scale.on_press_start();
        }
    }

    /// Starts the release animation, if enabled.
    pub fn press_out(&self) {
        if let Some(scale) = &self.scale {
            scale.on_press_end();
        }
    }

    /// The press-scale animation, when enabled.
    pub fn scale(&self) -> Option<&PressScale> {
        self.scale.as_ref()
    }

    /// Advances animations. Returns `true` while any are in flight.
    pub fn tick(&self, dt_ms: f32) -> bool {
        self.scale.as_ref().is_some_and(|s| s.tick(dt_ms))
    }

    /// Cancels in-flight animations.
    pub fn stop(&self) {
        if let Some(scale) = &self.scale {
            scale.stop();
        }
    }
}
