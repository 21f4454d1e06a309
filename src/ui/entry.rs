// SPDX-License-Identifier: MPL-2.0
//! State router: selects the overlay for the loader's current state and
//! stacks it over the (dimmed) content surface.
//!
//! The variants of [`LoadState`] are disjoint, so exactly one of
//! {progress overlay, failure banner, offline banner, nothing} is ever
//! visible.

use crate::i18n::fluent::I18n;
use crate::loader::LoadState;
use crate::ui::components::{failure_banner, offline_banner};
use crate::ui::design_tokens::opacity;
use crate::ui::splash;
use crate::ui::{content, styles};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Overlay selected for a loader state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay<'a> {
    /// Progress overlay with the clamped fraction.
    Progress(f64),
    /// Failure banner carrying the loader's message.
    Failure(&'a str),
    /// Offline banner.
    Offline,
    /// No overlay at all.
    None,
}

/// Maps the loader state to the single overlay to display.
#[must_use]
pub fn overlay_for(state: &LoadState) -> Overlay<'_> {
    match state {
        LoadState::Progressing(_) => Overlay::Progress(
            state
                .clamped_fraction()
                .unwrap_or_default(),
        ),
        LoadState::Failed(message) => Overlay::Failure(message),
        LoadState::NoConnection => Overlay::Offline,
        LoadState::Idle | LoadState::Finished => Overlay::None,
    }
}

/// Opacity of the content surface: fully visible once finished, dimmed to
/// one half otherwise.
#[must_use]
pub fn content_opacity(state: &LoadState) -> f32 {
    if *state == LoadState::Finished {
        opacity::OPAQUE
    } else {
        opacity::CONTENT_DIM
    }
}

/// Renders the content surface beneath the state-selected overlay.
pub fn view<'a, Message: 'static>(
    state: &'a LoadState,
    splash: &'a splash::State,
    i18n: &'a I18n,
    start_url: &'a str,
) -> Element<'a, Message> {
    let scrim_alpha = opacity::OPAQUE - content_opacity(state);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content::view(i18n, start_url))
        .push(
            Container::new(Column::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::scrim(scrim_alpha)),
        );

    layers = match overlay_for(state) {
        Overlay::Progress(fraction) => layers.push(splash::view(splash, i18n, fraction)),
        Overlay::Failure(message) => layers.push(failure_banner::view(i18n, message)),
        Overlay::Offline => layers.push(offline_banner::view(i18n)),
        Overlay::None => layers,
    };

    layers.into()
}
