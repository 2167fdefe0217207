// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen plus any persistence warnings collected along
//! the way.

use super::{App, Message, Screen};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{navbar, settings};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match app.screen {
        Screen::Browser => view_browser(app),
        Screen::Settings => {
            settings::view(&app.settings, settings::ViewContext { i18n: &app.i18n })
                .map(Message::Settings)
        }
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_browser(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        loading: app.browser.is_loading(),
    })
    .map(Message::Navbar);

    let mut column = Column::new().push(navbar_view);

    for key in &app.warnings {
        column = column.push(
            Text::new(app.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(palette::WARNING_500),
        );
    }

    column
        .push(app.browser.view(&app.i18n).map(Message::Browser))
        .width(Length::Fill)
        .height(Length::Fill)
        .spacing(spacing::XXS)
        .into()
}
