//! Umbrella crate re-exporting the component set and its interaction
//! primitives under one namespace.

pub use ui_components::{
    ActiveScale, BottomTabsProps, BottomTabsState, ButtonProps, ButtonState, CheckBoxProps,
    ConfirmationProps, MediaType, MediaViewProps, ModalAnimation, Navigator, TabItem, TabVisual,
    ZoomConfig,
};
pub use ui_core::{
    apply_status_bar, display_toast, mix_colors, ActiveTransition, AnimatedValue, Clock,
    ManualClock, PressGate, PressScale, SpringConfig, StatusBarConfig, StatusBarHost,
    StatusBarStyle, SystemClock, ToastDuration, ToastGravity, ToastSink, FALLBACK_TOAST_MESSAGE,
};

pub use ui_components;
pub use ui_core;
