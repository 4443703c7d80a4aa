// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Default toast duration and fade animation length
//! - **Style**: Colors, font, corner radius and insets of the toast label
//! - **Position**: Edge offsets for portrait and landscape containers
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default display duration in seconds (the short preset).
pub const DEFAULT_DURATION_SECS: f64 = 2.0;

/// Minimum configurable display duration in seconds.
pub const MIN_DURATION_SECS: f64 = 0.1;

/// Maximum configurable display duration in seconds.
pub const MAX_DURATION_SECS: f64 = 60.0;

/// Default fade in/out animation length in milliseconds.
pub const DEFAULT_FADE_MS: u64 = 200;

/// Maximum fade animation length in milliseconds.
pub const MAX_FADE_MS: u64 = 2000;

// ==========================================================================
// Style Defaults
// ==========================================================================

/// Default background color (black, 70% opacity).
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000b3";

/// Default text color.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Default font size in logical pixels.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Default background corner radius.
pub const DEFAULT_CORNER_RADIUS: f32 = 5.0;

/// Default text insets (top, left, bottom, right).
pub const DEFAULT_TEXT_INSETS: [f32; 4] = [6.0, 10.0, 6.0, 10.0];

/// Horizontal margin kept free on each side of the container.
pub const HORIZONTAL_MARGIN: f32 = 20.0;

// ==========================================================================
// Position Defaults
// ==========================================================================

/// Default offset from the bottom edge in portrait containers.
pub const DEFAULT_OFFSET_PORTRAIT: f32 = 30.0;

/// Default offset from the bottom edge in landscape containers.
pub const DEFAULT_OFFSET_LANDSCAPE: f32 = 20.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DURATION_SECS > 0.0);
    assert!(DEFAULT_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS <= MAX_DURATION_SECS);

    assert!(DEFAULT_FADE_MS <= MAX_FADE_MS);

    assert!(DEFAULT_FONT_SIZE > 0.0);
    assert!(DEFAULT_CORNER_RADIUS >= 0.0);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::SHORT;

    #[test]
    fn default_duration_matches_short_preset() {
        assert_eq!(
            std::time::Duration::from_secs_f64(DEFAULT_DURATION_SECS),
            SHORT
        );
    }

    #[test]
    fn landscape_offset_is_smaller_than_portrait() {
        assert!(DEFAULT_OFFSET_LANDSCAPE < DEFAULT_OFFSET_PORTRAIT);
    }

    #[test]
    fn diagnostics_defaults_are_valid() {
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
