// SPDX-License-Identifier: MPL-2.0
//! Page footer.

use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{alignment::Horizontal, alignment::Vertical, Element, Length};

pub const COPYRIGHT: &str = "© 2025 Eyes0n. All rights reserved.";

pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(Text::new(COPYRIGHT).size(typography::BODY_SM))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FOOTER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::footer)
        .into()
}
