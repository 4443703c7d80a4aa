// SPDX-License-Identifier: MPL-2.0
//! Resolved toast appearance.
//!
//! [`StyleConfig`] stores user-editable strings and optional values;
//! [`ToastStyle`] is the validated form the overlay renders with.

use super::layout::Position;
use crate::config::{
    StyleConfig, DEFAULT_BACKGROUND_COLOR, DEFAULT_CORNER_RADIUS, DEFAULT_FONT_SIZE,
    DEFAULT_TEXT_COLOR, DEFAULT_TEXT_INSETS,
};
use crate::error::{Error, Result};
use iced::{font, Color, Font, Padding};

/// Appearance of the toast label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub background: Color,
    pub text_color: Color,
    pub font_size: f32,
    pub bold: bool,
    pub corner_radius: f32,
    pub insets: Padding,
    pub position: Position,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(0, 0, 0, 0.7),
            text_color: Color::WHITE,
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
            corner_radius: DEFAULT_CORNER_RADIUS,
            insets: insets_from_array(DEFAULT_TEXT_INSETS),
            position: Position::default(),
        }
    }
}

impl ToastStyle {
    /// Validates `config` into a style.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a color is not `#rrggbb` or `#rrggbbaa`,
    /// or if a size is negative or not finite.
    pub fn from_config(config: &StyleConfig) -> Result<Self> {
        let background = parse_color(
            config
                .background_color
                .as_deref()
                .unwrap_or(DEFAULT_BACKGROUND_COLOR),
        )?;
        let text_color = parse_color(config.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR))?;
        let font_size = non_negative("font_size", config.font_size.unwrap_or(DEFAULT_FONT_SIZE))?;
        let corner_radius = non_negative(
            "corner_radius",
            config.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS),
        )?;
        let insets = config.text_insets.unwrap_or(DEFAULT_TEXT_INSETS);
        for inset in insets {
            non_negative("text_insets", inset)?;
        }

        Ok(Self {
            background,
            text_color,
            font_size,
            bold: config.bold.unwrap_or(false),
            corner_radius,
            insets: insets_from_array(insets),
            position: config.position.map(Position::from).unwrap_or_default(),
        })
    }

    /// Font used for the toast text.
    #[must_use]
    pub fn font(&self) -> Font {
        if self.bold {
            Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            }
        } else {
            Font::DEFAULT
        }
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(value: &str) -> Result<Color> {
    let hex = value
        .strip_prefix('#')
        .filter(|hex| matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| Error::Config(format!("invalid color '{value}'")))?;

    let bits = u32::from_str_radix(hex, 16)
        .map_err(|err| Error::Config(format!("invalid color '{value}': {err}")))?;
    let rgba = if hex.len() == 6 { (bits << 8) | 0xff } else { bits };
    let [r, g, b, a] = rgba.to_be_bytes();

    Ok(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

fn non_negative(name: &str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::Config(format!("{name} must be a non-negative number")))
    }
}

/// Config order is `[top, left, bottom, right]`.
fn insets_from_array([top, left, bottom, right]: [f32; 4]) -> Padding {
    Padding {
        top,
        right,
        bottom,
        left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Edge, PositionConfig};

    #[test]
    fn default_config_matches_default_style() {
        let style = ToastStyle::from_config(&StyleConfig::default()).expect("valid defaults");
        let default = ToastStyle::default();

        assert_eq!(style.text_color, default.text_color);
        assert_eq!(style.insets, default.insets);
        assert_eq!(style.position, default.position);
        assert!((style.background.a - 0.7).abs() < 0.01);
    }

    #[test]
    fn parse_color_accepts_rgb_and_rgba() {
        let red = parse_color("#ff0000").expect("valid color");
        assert_eq!(red, Color::from_rgb8(255, 0, 0));

        let translucent = parse_color("#00000080").expect("valid color");
        assert!((translucent.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_color_rejects_malformed_values() {
        for value in ["ff0000", "#ff00", "#gg0000", "#ff0000ff00", ""] {
            assert!(
                matches!(parse_color(value), Err(Error::Config(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn from_config_rejects_negative_sizes() {
        let config = StyleConfig {
            font_size: Some(-1.0),
            ..StyleConfig::default()
        };
        assert!(ToastStyle::from_config(&config).is_err());

        let config = StyleConfig {
            text_insets: Some([0.0, f32::NAN, 0.0, 0.0]),
            ..StyleConfig::default()
        };
        assert!(ToastStyle::from_config(&config).is_err());
    }

    #[test]
    fn insets_map_to_padding_sides() {
        let config = StyleConfig {
            text_insets: Some([1.0, 2.0, 3.0, 4.0]),
            ..StyleConfig::default()
        };
        let style = ToastStyle::from_config(&config).expect("valid style");
        assert_eq!(style.insets.top, 1.0);
        assert_eq!(style.insets.left, 2.0);
        assert_eq!(style.insets.bottom, 3.0);
        assert_eq!(style.insets.right, 4.0);
    }

    #[test]
    fn bold_selects_bold_font() {
        let config = StyleConfig {
            bold: Some(true),
            position: Some(PositionConfig {
                edge: Edge::Top,
                ..PositionConfig::default()
            }),
            ..StyleConfig::default()
        };
        let style = ToastStyle::from_config(&config).expect("valid style");
        assert_eq!(style.font().weight, font::Weight::Bold);
        assert_eq!(style.position.edge(), Edge::Top);
        assert_eq!(ToastStyle::default().font(), Font::DEFAULT);
    }
}
