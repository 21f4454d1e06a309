// SPDX-License-Identifier: MPL-2.0
//! Placeholder for the embedded web page.
//!
//! The real content surface is owned by the hosting application (an embedded
//! web view); this stand-in renders the start URL on a dark surface so the
//! chrome can be run and inspected on its own.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Renders the content placeholder for the configured start URL.
pub fn view<'a, Message: 'a>(i18n: &I18n, start_url: &str) -> Element<'a, Message> {
    let hint = Text::new(i18n.tr_args("content-placeholder", &[("url", start_url.into())]))
        .size(typography::CAPTION)
        .color(palette::GRAY_200);

    Container::new(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::content_surface)
        .into()
}
