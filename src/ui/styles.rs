// SPDX-License-Identifier: MPL-2.0
//! Container styles for the splash overlay, scrim, and banners.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, SURFACE_900, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent black scrim dimming the content surface.
///
/// `alpha` of 0 leaves the content untouched.
pub fn scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        ..Default::default()
    }
}

/// Full-bleed dark backdrop behind the progress overlay.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_900)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Rounded translucent panel holding the label and progress bar.
#[must_use]
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PANEL,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::PANEL.into(),
        },
        ..Default::default()
    }
}

/// Dark surface standing in for the embedded web page.
#[must_use]
pub fn content_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_900)),
        ..Default::default()
    }
}
