//! Serializable style fragments.
//!
//! Components compute a base style from their props and state, then
//! merge caller-supplied overrides on top. Merging is field-wise: an
//! override field that is `None` leaves the base value in place.

use serde::{Deserialize, Serialize};

use ui_core::theme::Color;

// ============================================================================
// Primitive style values
// ============================================================================

/// A spacing value, either uniform points or a named scale step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Spacing in points.
    Points(f32),
    /// A named step on the spacing scale, such as `"sm"` or `"lg"`.
    Named(String),
}

/// A layout dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Absolute size in points.
    Points(f32),
    /// Relative size such as `"90%"` or `"auto"`.
    Relative(String),
}

impl Dimension {
    /// A percentage dimension such as `90%`.
    pub fn percent(value: f32) -> Self {
        Dimension::Relative(format!("{value}%"))
    }
}

impl From<f32> for Dimension {
    fn from(points: f32) -> Self {
        Dimension::Points(points)
    }
}

/// Modal presentation animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalAnimation {
    None,
    Slide,
    #[default]
    Fade,
}

// ============================================================================
// Style fragments
// ============================================================================

/// Container style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl StyleProps {
    /// Overlays `overrides` on top of `self`, field by field.
    pub fn merge(&self, overrides: &StyleProps) -> StyleProps {
        StyleProps {
            margin: overrides.margin.clone().or_else(|| self.margin.clone()),
            padding: overrides.padding.clone().or_else(|| self.padding.clone()),
            width: overrides.width.clone().or_else(|| self.width.clone()),
            height: overrides.height.clone().or_else(|| self.height.clone()),
            max_width: overrides
                .max_width
                .clone()
                .or_else(|| self.max_width.clone()),
            background_color: overrides
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            border_radius: overrides.border_radius.or(self.border_radius),
            border_width: overrides.border_width.or(self.border_width),
            border_color: overrides
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            opacity: overrides.opacity.or(self.opacity),
        }
    }
}

/// Text style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,
}

impl TextStyleProps {
    /// Overlays `overrides` on top of `self`, field by field.
    pub fn merge(&self, overrides: &TextStyleProps) -> TextStyleProps {
        TextStyleProps {
            color: overrides.color.clone().or_else(|| self.color.clone()),
            font_size: overrides.font_size.or(self.font_size),
            font_family: overrides
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            font_weight: overrides
                .font_weight
                .clone()
                .or_else(|| self.font_weight.clone()),
            margin_top: overrides.margin_top.or(self.margin_top),
            margin_left: overrides.margin_left.or(self.margin_left),
        }
    }
}

/// Image style overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyleProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<Color>,
}

impl ImageStyleProps {
    /// Overlays `overrides` on top of `self`, field by field.
    pub fn merge(&self, overrides: &ImageStyleProps) -> ImageStyleProps {
        ImageStyleProps {
            width: overrides.width.clone().or_else(|| self.width.clone()),
            height: overrides.height.clone().or_else(|| self.height.clone()),
            tint_color: overrides
                .tint_color
                .clone()
                .or_else(|| self.tint_color.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_core::theme::colors;

    #[test]
    fn test_merge_prefers_override_fields() {
        let base = StyleProps {
            background_color: Some(colors::PRIMARY.to_string()),
            border_radius: Some(8.0),
            width: Some(Dimension::Points(176.0)),
            ..Default::default()
        };
        let overrides = StyleProps {
            background_color: Some(colors::GRAY_BG.to_string()),
            ..Default::default()
        };
        let merged = base.merge(&overrides);
        assert_eq!(merged.background_color.as_deref(), Some(colors::GRAY_BG));
        assert_eq!(merged.border_radius, Some(8.0));
        assert_eq!(merged.width, Some(Dimension::Points(176.0)));
    }

    #[test]
    fn test_empty_override_keeps_base() {
        let base = TextStyleProps {
            color: Some(colors::WHITE.to_string()),
            font_size: Some(16.0),
            ..Default::default()
        };
        assert_eq!(base.merge(&TextStyleProps::default()), base);
    }

    #[test]
    fn test_dimension_serializes_untagged() {
        let json = serde_json::to_string(&Dimension::Points(53.0)).unwrap();
        assert_eq!(json, "53.0");
        let json = serde_json::to_string(&Dimension::percent(90.0)).unwrap();
        assert_eq!(json, "\"90%\"");
        let parsed: Dimension = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, Dimension::Relative("auto".to_string()));
    }

    #[test]
    fn test_none_fields_skipped_in_json() {
        let style = StyleProps {
            opacity: Some(0.8),
            ..Default::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, "{\"opacity\":0.8}");
    }
}
