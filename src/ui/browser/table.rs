// SPDX-License-Identifier: MPL-2.0
//! The record table: header row plus one row per visible record.

use super::controls::category_tint;
use super::Message;
use crate::catalog::{posters::PosterCache, Record};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{Element, Length};

/// Renders the table for the current page window.
pub(super) fn view<'a>(
    window: &[&'a Record],
    posters: &'a PosterCache,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut table = Column::new().push(header(i18n));

    for (index, record) in window.iter().copied().enumerate() {
        table = table.push(row(record, posters, i18n, index));
    }

    table.width(Length::Fill).into()
}

fn header(i18n: &I18n) -> Element<'_, Message> {
    let cells = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .push(
            Text::new(i18n.tr("table-header-poster"))
                .width(Length::Fixed(sizing::POSTER_COLUMN_WIDTH)),
        )
        .push(Text::new(i18n.tr("table-header-title")).width(Length::Fill))
        .push(
            Text::new(i18n.tr("table-header-year"))
                .width(Length::Fixed(sizing::YEAR_COLUMN_WIDTH)),
        )
        .push(
            Text::new(i18n.tr("table-header-type"))
                .width(Length::Fixed(sizing::TYPE_COLUMN_WIDTH)),
        );

    Container::new(cells)
        .width(Length::Fill)
        .style(styles::container::table_header)
        .into()
}

fn row<'a>(
    record: &'a Record,
    posters: &'a PosterCache,
    i18n: &'a I18n,
    index: usize,
) -> Element<'a, Message> {
    let poster_cell: Element<'a, Message> = match posters.peek(&record.poster) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::POSTER_THUMB_WIDTH))
            .height(Length::Fixed(sizing::POSTER_THUMB_HEIGHT))
            .into(),
        None => Container::new(
            Text::new(i18n.tr("poster-placeholder")).size(typography::BODY_SM),
        )
        .width(Length::Fixed(sizing::POSTER_THUMB_WIDTH))
        .height(Length::Fixed(sizing::POSTER_THUMB_HEIGHT))
        .into(),
    };

    // The tag doubles as a shortcut to filter by this record's category.
    let category_button = button(Text::new(record.category.as_str()).size(typography::BODY_SM))
        .on_press(Message::CategorySelected(record.category.clone()))
        .style(styles::button::tinted(
            category_tint(&record.category),
            false,
        ));

    let cells = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(poster_cell).width(Length::Fixed(sizing::POSTER_COLUMN_WIDTH)),
        )
        .push(Text::new(record.title.as_str()).width(Length::Fill))
        .push(
            Text::new(record.year.as_str()).width(Length::Fixed(sizing::YEAR_COLUMN_WIDTH)),
        )
        .push(
            Container::new(category_button).width(Length::Fixed(sizing::TYPE_COLUMN_WIDTH)),
        );

    Container::new(cells)
        .width(Length::Fill)
        .style(styles::container::table_row(index % 2 == 0))
        .into()
}
