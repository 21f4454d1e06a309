// SPDX-License-Identifier: MPL-2.0
//! Full-bleed loading overlay: dark backdrop, pulsing logo mark, percentage
//! label, and the animated progress bar inside a translucent panel.

pub mod logo;

use crate::i18n::fluent::I18n;
use crate::loader;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::progress_bar;
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Full pulse cycle of the logo mark (shrink and grow), in seconds.
const PULSE_CYCLE_SECS: f32 = 2.2;

/// Logo scale at the low point of the pulse.
const PULSE_MIN_SCALE: f32 = 0.82;

/// Logo scale at the high point of the pulse.
const PULSE_MAX_SCALE: f32 = 1.02;

/// Overlay animation state: the logo pulse clock and the progress bar.
#[derive(Debug)]
pub struct State {
    pulse: f32,
    pub bar: progress_bar::State,
}

impl State {
    #[must_use]
    pub fn new(particle_count: usize) -> Self {
        Self {
            pulse: 0.0,
            bar: progress_bar::State::new(particle_count),
        }
    }

    /// Feeds a freshly reported progress fraction to the bar.
    pub fn set_progress(&mut self, fraction: f64) {
        self.bar.set_target(loader::clamp_fraction(fraction) as f32);
    }

    /// Advances the pulse clock and the bar animations by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.pulse = (self.pulse + dt / PULSE_CYCLE_SECS).fract();
        self.bar.advance(dt);
    }

    /// Current logo scale, easing back and forth between the pulse bounds.
    #[must_use]
    pub fn logo_scale(&self) -> f32 {
        let eased =
            progress_bar::geometry::ease_in_out(progress_bar::geometry::triangle(self.pulse));
        PULSE_MIN_SCALE + (PULSE_MAX_SCALE - PULSE_MIN_SCALE) * eased
    }
}

/// Renders the loading overlay for the given authoritative fraction.
pub fn view<'a, Message: 'static>(
    state: &'a State,
    i18n: &I18n,
    fraction: f64,
) -> Element<'a, Message> {
    let percent = loader::percent_label(fraction);
    let label = Text::new(i18n.tr_args("loading-label", &[("percent", percent.into())]))
        .size(typography::LABEL_LG)
        .color(palette::WHITE);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(label)
            .push(state.bar.view()),
    )
    .padding(spacing::SM)
    .max_width(sizing::PANEL_MAX_WIDTH)
    .style(styles::panel);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(logo::LogoMark::new(state.logo_scale()).into_element())
        .push(panel);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::backdrop)
        .into()
}
