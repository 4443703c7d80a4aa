// SPDX-License-Identifier: MPL-2.0
//! Toast placement inside its container.

use crate::config::{Edge, PositionConfig, HORIZONTAL_MARGIN};
use iced::{Padding, Size};

/// Container orientation, derived from its current size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Square containers count as portrait.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        if size.height >= size.width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// Edge the toast is anchored to, with an offset per orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Top { portrait: f32, landscape: f32 },
    Bottom { portrait: f32, landscape: f32 },
}

impl Position {
    /// Returns the distance from the anchoring edge.
    #[must_use]
    pub fn offset_for(self, orientation: Orientation) -> f32 {
        let (portrait, landscape) = match self {
            Self::Top {
                portrait,
                landscape,
            }
            | Self::Bottom {
                portrait,
                landscape,
            } => (portrait, landscape),
        };
        match orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => landscape,
        }
    }

    #[must_use]
    pub fn edge(self) -> Edge {
        match self {
            Self::Top { .. } => Edge::Top,
            Self::Bottom { .. } => Edge::Bottom,
        }
    }

    /// Returns the padding that pushes a toast away from its edge.
    #[must_use]
    pub fn padding_for(self, orientation: Orientation) -> Padding {
        let offset = self.offset_for(orientation).max(0.0);
        match self {
            Self::Top { .. } => Padding::ZERO.top(offset),
            Self::Bottom { .. } => Padding::ZERO.bottom(offset),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        PositionConfig::default().into()
    }
}

impl From<PositionConfig> for Position {
    fn from(config: PositionConfig) -> Self {
        let PositionConfig {
            edge,
            portrait_offset: portrait,
            landscape_offset: landscape,
        } = config;
        match edge {
            Edge::Top => Self::Top {
                portrait,
                landscape,
            },
            Edge::Bottom => Self::Bottom {
                portrait,
                landscape,
            },
        }
    }
}

/// Widest the toast text may be inside a container of `container_width`.
///
/// Keeps [`HORIZONTAL_MARGIN`] free on both sides, minus the horizontal
/// insets. Never negative.
#[must_use]
pub fn max_text_width(container_width: f32, insets: Padding) -> f32 {
    (container_width - 2.0 * HORIZONTAL_MARGIN - insets.left - insets.right).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_and_tall_containers_are_portrait() {
        assert_eq!(
            Orientation::from_size(Size::new(400.0, 400.0)),
            Orientation::Portrait
        );
        assert_eq!(
            Orientation::from_size(Size::new(320.0, 640.0)),
            Orientation::Portrait
        );
        assert_eq!(
            Orientation::from_size(Size::new(800.0, 600.0)),
            Orientation::Landscape
        );
    }

    #[test]
    fn offset_follows_orientation() {
        let position = Position::Bottom {
            portrait: 30.0,
            landscape: 20.0,
        };
        assert_eq!(position.offset_for(Orientation::Portrait), 30.0);
        assert_eq!(position.offset_for(Orientation::Landscape), 20.0);
    }

    #[test]
    fn padding_is_applied_on_the_anchoring_edge() {
        let top = Position::Top {
            portrait: 64.0,
            landscape: 44.0,
        };
        let padding = top.padding_for(Orientation::Landscape);
        assert_eq!(padding.top, 44.0);
        assert_eq!(padding.bottom, 0.0);

        let bottom = Position::default();
        let padding = bottom.padding_for(Orientation::Portrait);
        assert_eq!(padding.bottom, 30.0);
        assert_eq!(padding.top, 0.0);
    }

    #[test]
    fn position_from_config_keeps_edge() {
        let config = PositionConfig {
            edge: Edge::Top,
            portrait_offset: 10.0,
            landscape_offset: 5.0,
        };
        let position = Position::from(config);
        assert_eq!(position.edge(), Edge::Top);
        assert_eq!(position.offset_for(Orientation::Landscape), 5.0);
        assert_eq!(Position::default().edge(), Edge::Bottom);
    }

    #[test]
    fn max_text_width_subtracts_margins_and_insets() {
        let insets = Padding {
            top: 6.0,
            right: 10.0,
            bottom: 6.0,
            left: 10.0,
        };
        assert_eq!(max_text_width(400.0, insets), 340.0);
    }

    #[test]
    fn max_text_width_is_never_negative() {
        let insets = Padding::new(10.0);
        assert_eq!(max_text_width(30.0, insets), 0.0);
    }
}
