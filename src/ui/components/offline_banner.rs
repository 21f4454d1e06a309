// SPDX-License-Identifier: MPL-2.0
//! Offline indicator: a fixed message, independent of any input.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Renders the offline banner, centered over the content surface.
pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("offline-message"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
