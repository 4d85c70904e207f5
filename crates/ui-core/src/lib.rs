//! Interaction and theming primitives shared by the component set.
//!
//! Everything here is single-threaded and frame-driven: controllers are
//! advanced by calling `tick` with the elapsed frame time, and time
//! itself comes from a [`clock::Clock`] so tests can run on a manual
//! timeline.

pub mod active_transition;
pub mod animation;
pub mod clock;
pub mod gate;
pub mod press_scale;
pub mod status_bar;
pub mod theme;
pub mod toast;

pub use active_transition::{ActiveTransition, DEFAULT_ACTIVE_DURATION_MS};
pub use animation::{AnimatedValue, EasingFn, Lerp, SpringConfig, SubscriptionId};
pub use clock::{Clock, ManualClock, SystemClock};
pub use gate::{PressGate, DEFAULT_DEBOUNCE_MS};
pub use press_scale::{PressScale, DEFAULT_PRESSED_SCALE, REST_SCALE};
pub use status_bar::{apply_status_bar, StatusBarConfig, StatusBarHost, StatusBarStyle};
pub use theme::{mix_colors, parse_hex_color, rgb_to_hex, Color, ColorError, ShadowStyle};
pub use toast::{
    display_toast, display_toast_with, resolve_toast_message, ToastDuration, ToastGravity,
    ToastSink, FALLBACK_TOAST_MESSAGE,
};
