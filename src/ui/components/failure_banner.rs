// SPDX-License-Identifier: MPL-2.0
//! Failure indicator: the loader's message behind a localized prefix.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Localized banner text; the loader message is embedded verbatim, with no
/// truncation or formatting.
#[must_use]
pub fn label(i18n: &I18n, message: &str) -> String {
    i18n.tr_args("load-error", &[("message", message.into())])
}

/// Renders the failure banner, centered over the content surface.
pub fn view<'a, Message: 'a>(i18n: &I18n, message: &str) -> Element<'a, Message> {
    Container::new(
        Text::new(label(i18n, message))
            .size(typography::BODY)
            .color(palette::ERROR_500),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn message_is_embedded_verbatim() {
        let i18n = I18n::new(Some("ru".to_string()), &Config::default());
        assert_eq!(label(&i18n, "timeout"), "Ошибка: timeout");

        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(label(&i18n, "timeout"), "Error: timeout");
    }

    #[test]
    fn message_is_not_reformatted() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let odd = "  SSL  handshake\tfailed (code -42) ";
        assert_eq!(label(&i18n, odd), format!("Error: {odd}"));
    }
}
