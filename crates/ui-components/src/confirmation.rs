//! Confirmation dialog.
//!
//! A modal with a title, message, and cancel/confirm button pair. While
//! the confirm action is loading, every dismissal path is locked so the
//! dialog cannot be closed out from under the in-flight work.

use serde::{Deserialize, Serialize};

use ui_core::theme::{colors, font_family, font_size, Color};

use crate::button::ButtonProps;
use crate::style::{Dimension, ImageStyleProps, ModalAnimation, StyleProps, TextStyleProps};

fn default_cancel_text() -> String {
    "Cancel".to_string()
}

fn default_confirm_text() -> String {
    "Confirm".to_string()
}

fn default_show_close_button() -> bool {
    true
}

/// Confirmation dialog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationProps {
    /// Whether the dialog is shown.
    #[serde(default)]
    pub visible: bool,
    /// Heading text.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Cancel button label. Defaults to `"Cancel"`.
    #[serde(default = "default_cancel_text")]
    pub cancel_text: String,
    /// Confirm button label. Defaults to `"Confirm"`.
    #[serde(default = "default_confirm_text")]
    pub confirm_text: String,
    /// Whether the corner close button is shown.
    #[serde(default = "default_show_close_button")]
    pub show_close_button: bool,
    /// Marks the confirm action as in flight, locking dismissal.
    #[serde(default)]
    pub loading: bool,
    /// Modal presentation animation.
    #[serde(default)]
    pub animation: ModalAnimation,
}

impl ConfirmationProps {
    /// Creates a visible dialog with the given title and message.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            visible: true,
            title: title.into(),
            message: message.into(),
            cancel_text: default_cancel_text(),
            confirm_text: default_confirm_text(),
            show_close_button: default_show_close_button(),
            loading: false,
            animation: ModalAnimation::default(),
        }
    }

    /// Sets the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Whether the backdrop, close button, and cancel button may
    /// dismiss the dialog right now.
    pub fn can_dismiss(&self) -> bool {
        !self.loading
    }

    /// Props for the cancel button: outlined, primary text.
    pub fn cancel_button(&self) -> ButtonProps {
        let mut button = ButtonProps::with_text(&self.cancel_text);
        button.disabled = self.loading;
        button.additional_style = Some(StyleProps {
            width: Some(Dimension::Points(110.0)),
            height: Some(Dimension::Points(40.0)),
            background_color: Some(colors::WHITE.to_string()),
            border_width: Some(1.0),
            border_color: Some(colors::PRIMARY.to_string()),
            ..Default::default()
        });
        button.text_style = Some(TextStyleProps {
            color: Some(colors::PRIMARY.to_string()),
            font_size: Some(font_size::F14),
            font_family: Some(font_family::INTER_SEMI_BOLD.to_string()),
            ..Default::default()
        });
        button
    }

    /// Props for the confirm button: filled, shows the loader while
    /// the action is in flight.
    pub fn confirm_button(&self) -> ButtonProps {
        let mut button = ButtonProps::with_text(&self.confirm_text);
        button.fetching = self.loading;
        button.additional_style = Some(StyleProps {
            width: Some(Dimension::Points(110.0)),
            height: Some(Dimension::Points(40.0)),
            ..Default::default()
        });
        button.text_style = Some(TextStyleProps {
            color: Some(colors::WHITE.to_string()),
            font_size: Some(font_size::F14),
            font_family: Some(font_family::INTER_SEMI_BOLD.to_string()),
            ..Default::default()
        });
        button
    }

    /// Static styles for the dialog chrome.
    pub fn styles(&self) -> ConfirmationStyles {
        ConfirmationStyles {
            overlay: StyleProps {
                background_color: Some("rgba(0,0,0,0.5)".to_string()),
                ..Default::default()
            },
            container: StyleProps {
                background_color: Some(colors::WHITE.to_string()),
                border_radius: Some(20.0),
                width: Some(Dimension::percent(90.0)),
                max_width: Some(Dimension::Points(340.0)),
                ..Default::default()
            },
            close_button: StyleProps {
                width: Some(Dimension::Points(30.0)),
                height: Some(Dimension::Points(30.0)),
                ..Default::default()
            },
            close_icon: ImageStyleProps {
                width: Some(Dimension::Points(16.0)),
                height: Some(Dimension::Points(16.0)),
                tint_color: Some(colors::GRAY.to_string()),
            },
            title: TextStyleProps {
                color: Some(colors::PRIMARY.to_string()),
                font_size: Some(font_size::F20),
                font_family: Some(font_family::INTER_BOLD.to_string()),
                ..Default::default()
            },
            message: TextStyleProps {
                color: Some(colors::BLACK.to_string()),
                font_size: Some(font_size::F14),
                font_family: Some(font_family::INTER_REGULAR.to_string()),
                ..Default::default()
            },
        }
    }
}

/// Resolved styles for the dialog chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationStyles {
    pub overlay: StyleProps,
    pub container: StyleProps,
    pub close_button: StyleProps,
    pub close_icon: ImageStyleProps,
    pub title: TextStyleProps,
    pub message: TextStyleProps,
}
