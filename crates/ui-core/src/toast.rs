//! Toast display with a safe fallback message.

use tracing::debug;

/// Message shown when a toast is requested with blank text.
pub const FALLBACK_TOAST_MESSAGE: &str = "Something went wrong";

/// How long a toast stays on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastDuration {
    Short,
    #[default]
    Long,
}

/// Where a toast is anchored on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastGravity {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Presents toast messages to the user.
#[cfg_attr(test, mockall::automock)]
pub trait ToastSink {
    /// Shows `message` for `duration`, anchored at `gravity`.
    fn show(&self, message: &str, duration: ToastDuration, gravity: ToastGravity);
}

/// Substitutes the fallback for blank or whitespace-only messages.
pub fn resolve_toast_message(message: &str) -> &str {
    if message.trim().is_empty() {
        FALLBACK_TOAST_MESSAGE
    } else {
        message
    }
}

/// Shows `message` with the default duration and gravity.
pub fn display_toast(sink: &dyn ToastSink, message: &str) {
    display_toast_with(
        sink,
        message,
        ToastDuration::default(),
        ToastGravity::default(),
    );
}

/// Shows `message` with explicit duration and gravity.
pub fn display_toast_with(
    sink: &dyn ToastSink,
    message: &str,
    duration: ToastDuration,
    gravity: ToastGravity,
) {
    let resolved = resolve_toast_message(message);
    debug!(message = resolved, ?duration, ?gravity, "displaying toast");
    sink.show(resolved, duration, gravity);
}
