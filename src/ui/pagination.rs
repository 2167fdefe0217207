// SPDX-License-Identifier: MPL-2.0
//! Compact pagination strip widget.
//!
//! Renders previous/next buttons around the marker sequence produced by
//! [`crate::catalog::page_markers`]. The strip is bounded-width: far pages
//! collapse into ellipsis labels.

use crate::catalog::{page_markers, PageMarker};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

/// Messages emitted by the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    Select(u32),
}

/// Contextual data needed to render the strip.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: u32,
    pub total_pages: u32,
    pub disable_previous: bool,
    pub disable_next: bool,
}

/// Renders the pagination strip.
///
/// Callers suppress the whole control when there are no results; this
/// expects `total_pages >= 1`.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut strip = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);

    let previous_label = Text::new(ctx.i18n.tr("pagination-previous"));
    let previous = if ctx.disable_previous {
        button(previous_label).style(styles::button::disabled())
    } else {
        button(previous_label)
            .on_press(Message::Previous)
            .style(styles::button::secondary)
    };
    strip = strip.push(previous);

    for marker in page_markers(ctx.page, ctx.total_pages) {
        strip = strip.push(marker_element(ctx.i18n, marker, ctx.page));
    }

    let next_label = Text::new(ctx.i18n.tr("pagination-next"));
    let next = if ctx.disable_next {
        button(next_label).style(styles::button::disabled())
    } else {
        button(next_label)
            .on_press(Message::Next)
            .style(styles::button::secondary)
    };
    strip = strip.push(next);

    strip.into()
}

fn marker_element(i18n: &I18n, marker: PageMarker, current: u32) -> Element<'_, Message> {
    match marker {
        PageMarker::Gap => Container::new(Text::new(i18n.tr("pagination-gap")))
            .padding(spacing::XXS)
            .into(),
        PageMarker::Page(number) => {
            let page_button = button(Text::new(number.to_string()))
                .width(Length::Fixed(sizing::PAGE_BUTTON_MIN_WIDTH));
            if number == current {
                page_button.style(styles::button::selected).into()
            } else {
                page_button
                    .on_press(Message::Select(number))
                    .style(styles::button::secondary)
                    .into()
            }
        }
    }
}
