// SPDX-License-Identifier: MPL-2.0
//! Toast widget.
//!
//! Draws the label currently attached to an [`OverlayHost`]: centered
//! horizontally, anchored to the configured edge, faded by the host's
//! current opacity.

use super::layout::{max_text_width, Orientation};
use super::overlay::OverlayHost;
use super::style::ToastStyle;
use crate::config::Edge;
use iced::widget::{container, text, Container, Text};
use iced::{alignment, Border, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a toast label with the given text and opacity.
    pub fn view<'a, Message: 'a>(
        content: &'a str,
        opacity: f32,
        max_width: f32,
        style: &ToastStyle,
    ) -> Element<'a, Message> {
        let text_color = faded(style.text_color, opacity);
        let background = faded(style.background, opacity);
        let corner_radius = style.corner_radius;

        let label = Text::new(content)
            .size(style.font_size)
            .font(style.font())
            .color(text_color)
            .align_x(alignment::Horizontal::Center);

        Container::new(label)
            .padding(style.insets)
            .max_width(max_width + style.insets.left + style.insets.right)
            .style(move |_theme: &Theme| toast_container_style(background, corner_radius))
            .into()
    }

    /// Renders the overlay layer: the attached toast, or an empty element.
    pub fn view_overlay<'a, Message: 'a>(
        host: &'a OverlayHost,
        style: &ToastStyle,
    ) -> Element<'a, Message> {
        let Some(content) = host.text() else {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let size = host.size();
        let orientation = Orientation::from_size(size);
        let max_width = max_text_width(size.width, style.insets);
        let vertical = match style.position.edge() {
            Edge::Top => alignment::Vertical::Top,
            Edge::Bottom => alignment::Vertical::Bottom,
        };

        Container::new(Self::view(content, host.opacity(), max_width, style))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(vertical)
            .padding(style.position.padding_for(orientation))
            .into()
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(background: Color, corner_radius: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: Border {
            radius: corner_radius.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
