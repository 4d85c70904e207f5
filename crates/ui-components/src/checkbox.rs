//! Toggleable checkbox.

use serde::{Deserialize, Serialize};
use tracing::trace;

use ui_core::theme::{colors, font_size, Color};

use crate::style::{Dimension, ImageStyleProps, StyleProps, TextStyleProps};

/// Checkbox configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckBoxProps {
    /// Whether the box is checked.
    #[serde(default)]
    pub checked: bool,
    /// Label shown beside the box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Disables toggling and switches to the disabled appearance.
    #[serde(default)]
    pub disabled: bool,
    /// Box fill and border while checked. Defaults to the palette primary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_color: Option<Color>,
    /// Box border while unchecked. Defaults to gray.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_color: Option<Color>,
    /// Tint for the check mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_color: Option<Color>,
}

impl CheckBoxProps {
    /// Creates props with the given checked state.
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            ..Default::default()
        }
    }

    /// Sets the label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The checked state a press would produce, or `None` if the press
    /// is suppressed by the disabled flag.
    pub fn toggled(&self) -> Option<bool> {
        if self.disabled {
            trace!(checked = self.checked, "toggle on disabled checkbox ignored");
            return None;
        }
        Some(!self.checked)
    }

    /// The active color with its default applied.
    pub fn resolved_active_color(&self) -> &str {
        self.active_color.as_deref().unwrap_or(colors::PRIMARY)
    }

    /// The inactive color with its default applied.
    pub fn resolved_inactive_color(&self) -> &str {
        self.inactive_color.as_deref().unwrap_or(colors::GRAY)
    }

    /// Box, check mark, and label styles for the current state.
    pub fn computed_styles(&self) -> CheckBoxStyles {
        let (background, border) = if self.disabled {
            (colors::GRAY_BG.to_string(), colors::GRAY.to_string())
        } else if self.checked {
            let active = self.resolved_active_color().to_string();
            (active.clone(), active)
        } else {
            (
                colors::WHITE.to_string(),
                self.resolved_inactive_color().to_string(),
            )
        };
        CheckBoxStyles {
            box_style: StyleProps {
                width: Some(Dimension::Points(24.0)),
                height: Some(Dimension::Points(24.0)),
                border_width: Some(1.0),
                border_radius: Some(5.0),
                background_color: Some(background),
                border_color: Some(border),
                ..Default::default()
            },
            check: ImageStyleProps {
                width: Some(Dimension::Points(16.0)),
                height: Some(Dimension::Points(16.0)),
                tint_color: self.check_color.clone(),
            },
            label: TextStyleProps {
                color: Some(if self.disabled {
                    colors::GRAY.to_string()
                } else {
                    colors::BLACK.to_string()
                }),
                font_size: Some(font_size::F16),
                margin_left: Some(10.0),
                ..Default::default()
            },
        }
    }
}

/// Resolved styles for each part of the checkbox.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckBoxStyles {
    pub box_style: StyleProps,
    pub check: ImageStyleProps,
    pub label: TextStyleProps,
}
