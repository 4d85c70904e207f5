//! Theme constants and color utilities.
//!
//! Colors are hex strings so they serialize directly into style
//! payloads. Parsing failures degrade to the nearest sensible value
//! rather than propagating to callers mid-frame.

use tracing::warn;

/// A color encoded as a `#RRGGBB` hex string.
pub type Color = String;

/// Error raised when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The string was not a valid `#RRGGBB` hex color.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

// ============================================================================
// Palette
// ============================================================================

/// The shared color palette.
pub mod colors {
    /// Primary accent color.
    pub const PRIMARY: &str = "#007AFF";
    /// Plain white.
    pub const WHITE: &str = "#FFFFFF";
    /// Background gray used for disabled surfaces.
    pub const GRAY_BG: &str = "#E5E5E5";
    /// Mid gray used for secondary text and inactive strokes.
    pub const GRAY: &str = "#666666";
    /// Plain black.
    pub const BLACK: &str = "#000000";

    /// Looks up a palette color by name.
    pub fn get(name: &str) -> Option<&'static str> {
        match name {
            "primary" => Some(PRIMARY),
            "white" => Some(WHITE),
            "gray_bg" => Some(GRAY_BG),
            "gray" => Some(GRAY),
            "black" => Some(BLACK),
            _ => None,
        }
    }
}

/// Font family names shipped with the component set.
pub mod font_family {
    /// Inter with semi-bold weight.
    pub const INTER_SEMI_BOLD: &str = "Inter-SemiBold";
    /// Inter with regular weight.
    pub const INTER_REGULAR: &str = "Inter-Regular";
    /// Inter with bold weight.
    pub const INTER_BOLD: &str = "Inter-Bold";
}

/// The font size scale, in points.
pub mod font_size {
    pub const F11: f32 = 11.0;
    pub const F12: f32 = 12.0;
    pub const F14: f32 = 14.0;
    pub const F16: f32 = 16.0;
    pub const F18: f32 = 18.0;
    pub const F20: f32 = 20.0;
    pub const F24: f32 = 24.0;
}

// ============================================================================
// Color parsing and mixing
// ============================================================================

/// Parses a `#RRGGBB` hex string into its channel components.
pub fn parse_hex_color(color: &str) -> Result<(u8, u8, u8), ColorError> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| ColorError::InvalidHex(color.to_string()))?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(color.to_string()));
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorError::InvalidHex(color.into()))?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorError::InvalidHex(color.into()))?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorError::InvalidHex(color.into()))?;
    Ok((r, g, b))
}

/// Formats channel components as a `#RRGGBB` hex string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> Color {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Mixes two hex colors by factor `t` in `[0, 1]`.
///
/// `t` is clamped to the unit range. If either endpoint fails to parse
/// the mix degrades to the nearer endpoint and the failure is logged.
pub fn mix_colors(from: &str, to: &str, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (parse_hex_color(from), parse_hex_color(to)) {
        (Ok((r1, g1, b1)), Ok((r2, g2, b2))) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            rgb_to_hex(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            warn!(from, to, "unparseable color in mix, using nearer endpoint");
            if t < 0.5 {
                from.to_string()
            } else {
                to.to_string()
            }
        }
    }
}

// ============================================================================
// Shadow
// ============================================================================

/// A drop shadow description.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowStyle {
    /// Shadow color, which may carry an alpha component.
    pub shadow_color: String,
    /// Horizontal shadow offset in points.
    pub shadow_offset_width: f32,
    /// Vertical shadow offset in points.
    pub shadow_offset_height: f32,
    /// Shadow opacity in `[0, 1]`.
    pub shadow_opacity: f32,
    /// Elevation used on platforms without native shadow support.
    pub elevation: f32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            shadow_color: "rgba(0, 0, 0, 0.5)".to_string(),
            shadow_offset_width: 0.0,
            shadow_offset_height: 0.0,
            shadow_opacity: 0.3,
            elevation: 5.0,
        }
    }
}
