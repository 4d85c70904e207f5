//! Presentational component models.
//!
//! Each module pairs a serializable props struct with the state and
//! style computations its interactions need. Animation and timing come
//! from `ui-core`; rendering is left to the host.

pub mod bottom_tabs;
pub mod button;
pub mod checkbox;
pub mod confirmation;
pub mod media_view;
pub mod style;

pub use bottom_tabs::{
    ActiveScale, BottomTabsProps, BottomTabsState, Navigator, TabItem, TabVisual,
    DEFAULT_ACTIVE_TAB_SCALE,
};
pub use button::{ButtonProps, ButtonState, ButtonStyles};
pub use checkbox::{CheckBoxProps, CheckBoxStyles};
pub use confirmation::{ConfirmationProps, ConfirmationStyles};
pub use media_view::{MediaType, MediaViewProps, MediaViewStyles, ZoomConfig};
pub use style::{
    Dimension, ImageStyleProps, ModalAnimation, Spacing, StyleProps, TextStyleProps,
};
