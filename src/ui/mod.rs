// SPDX-License-Identifier: MPL-2.0
//! Rendering layer for toasts on top of an iced window.
//!
//! # Components
//!
//! - [`overlay`] - `OverlayHost`, the `ContainerHost` that owns the label and its fades
//! - [`toast`] - Toast widget drawn from the host's current state
//! - [`style`] - Validated appearance built from the `[style]` config section
//! - [`layout`] - Orientation, edge offsets and text width limits

pub mod layout;
pub mod overlay;
pub mod style;
pub mod toast;

pub use layout::{max_text_width, Orientation, Position};
pub use overlay::{OverlayHost, OverlaySurface};
pub use style::ToastStyle;
pub use toast::Toast;
