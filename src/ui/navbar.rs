// SPDX-License-Identifier: MPL-2.0
//! Navigation bar across the top of the browser screen: app title, manual
//! refresh, and the settings entry point.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, space, Container, Row, Text};
use iced::{Element, Length};

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Refresh,
    OpenSettings,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// A fetch is outstanding; the refresh button is greyed out while one is.
    pub loading: bool,
}

/// Renders the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let refresh_label = Text::new(ctx.i18n.tr("navbar-refresh-button"));
    let refresh_button = if ctx.loading {
        button(refresh_label).style(styles::button::disabled())
    } else {
        button(refresh_label)
            .on_press(Message::Refresh)
            .style(styles::button::secondary)
    };

    let settings_button = button(Text::new(ctx.i18n.tr("navbar-settings-button")))
        .on_press(Message::OpenSettings)
        .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(space::horizontal())
        .push(refresh_button)
        .push(settings_button);

    Container::new(row).width(Length::Fill).into()
}
