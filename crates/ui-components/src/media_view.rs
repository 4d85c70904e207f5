//! Full-screen media viewer.
//!
//! Shows an image or video over a dark backdrop with a close button.
//! Backdrop presses only dismiss when explicitly opted in, and video
//! playback pauses whenever the viewer is hidden.

use serde::{Deserialize, Serialize};

use ui_core::theme::colors;

use crate::style::{Dimension, ImageStyleProps, ModalAnimation, StyleProps};

/// Kind of media being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// Pinch-zoom behavior for images.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomConfig {
    /// Maximum zoom factor.
    pub max_zoom: f32,
    /// Minimum zoom factor.
    pub min_zoom: f32,
    /// Zoom change per double-tap step.
    pub zoom_step: f32,
    /// Zoom factor when the viewer opens.
    pub initial_zoom: f32,
    /// Keeps the zoomed image within the viewport edges.
    pub bind_to_borders: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_zoom: 30.0,
            min_zoom: 0.5,
            zoom_step: 0.5,
            initial_zoom: 1.0,
            bind_to_borders: true,
        }
    }
}

/// Media viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaViewProps {
    /// Whether the viewer is shown.
    #[serde(default)]
    pub visible: bool,
    /// URI or asset name of the media.
    pub source: String,
    /// Whether the source is an image or a video.
    pub media_type: MediaType,
    /// Close button icon asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_icon: Option<String>,
    /// Enables pinch zoom for images.
    #[serde(default)]
    pub zoomable_image: bool,
    /// Whether pressing the backdrop dismisses the viewer.
    #[serde(default)]
    pub exit_on_backdrop_click: bool,
    /// Modal presentation animation.
    #[serde(default)]
    pub animation: ModalAnimation,
}

impl MediaViewProps {
    /// Creates a visible viewer for the given source.
    pub fn new(source: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            visible: true,
            source: source.into(),
            media_type,
            close_icon: None,
            zoomable_image: false,
            exit_on_backdrop_click: false,
            animation: ModalAnimation::default(),
        }
    }

    /// Whether a backdrop press should dismiss the viewer.
    pub fn backdrop_press_closes(&self) -> bool {
        self.exit_on_backdrop_click
    }

    /// Whether video playback should be paused right now.
    pub fn video_paused(&self) -> bool {
        !self.visible
    }

    /// The zoom behavior, or `None` when zoom is not enabled for this
    /// media.
    pub fn zoom(&self) -> Option<ZoomConfig> {
        (self.media_type == MediaType::Image && self.zoomable_image).then(ZoomConfig::default)
    }

    /// Static styles for the viewer chrome. The image fills the screen
    /// width at 80% of the screen height.
    pub fn styles(&self, screen_width: f32, screen_height: f32) -> MediaViewStyles {
        MediaViewStyles {
            container: StyleProps {
                background_color: Some("rgba(0,0,0,0.85)".to_string()),
                ..Default::default()
            },
            close_button: StyleProps {
                width: Some(Dimension::Points(40.0)),
                height: Some(Dimension::Points(40.0)),
                border_radius: Some(20.0),
                background_color: Some(colors::PRIMARY.to_string()),
                ..Default::default()
            },
            close_icon: ImageStyleProps {
                width: Some(Dimension::Points(20.0)),
                height: Some(Dimension::Points(20.0)),
                tint_color: Some(colors::WHITE.to_string()),
            },
            media: ImageStyleProps {
                width: Some(Dimension::Points(screen_width)),
                height: Some(Dimension::Points(screen_height * 0.8)),
                tint_color: None,
            },
        }
    }
}

/// Resolved styles for the viewer chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaViewStyles {
    pub container: StyleProps,
    pub close_button: StyleProps,
    pub close_icon: ImageStyleProps,
    pub media: ImageStyleProps,
}
