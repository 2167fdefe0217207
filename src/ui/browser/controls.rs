// SPDX-License-Identifier: MPL-2.0
//! Search box and category filter button group.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, text_input, Row, Text};
use iced::{Color, Element, Length};

/// The four fixed filter buttons: "no filter" plus the three well-known
/// category tags. Records may carry other tags; those are reachable through
/// the per-row category buttons in the table.
const CATEGORY_BUTTONS: [(&str, &str); 4] = [
    ("category-any", ""),
    ("category-movie", "movie"),
    ("category-series", "series"),
    ("category-episode", "episode"),
];

/// Tint color for a category tag. Mirrors the semantic palette so the
/// filter group and the per-row tags match.
pub(super) fn category_tint(category: &str) -> Color {
    match category {
        "movie" => palette::ERROR_500,
        "series" => palette::WARNING_500,
        "episode" => palette::SUCCESS_500,
        _ => palette::PRIMARY_500,
    }
}

pub(super) fn search_input<'a>(i18n: &'a I18n, value: &'a str) -> Element<'a, Message> {
    text_input(&i18n.tr("search-placeholder"), value)
        .on_input(Message::SearchChanged)
        .width(Length::Fixed(sizing::SEARCH_INPUT_WIDTH))
        .into()
}

pub(super) fn category_group<'a>(i18n: &'a I18n, active: &str) -> Element<'a, Message> {
    let mut group = Row::new().spacing(spacing::XXS);

    for (label_key, category) in CATEGORY_BUTTONS {
        let is_active = active == category;
        let tint = category_tint(category);
        group = group.push(
            button(Text::new(i18n.tr(label_key)))
                .on_press(Message::CategorySelected(category.to_string()))
                .style(styles::button::tinted(tint, is_active)),
        );
    }

    group.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_distinct_tints() {
        let tints = [
            category_tint("movie"),
            category_tint("series"),
            category_tint("episode"),
            category_tint(""),
        ];
        for (i, a) in tints.iter().enumerate() {
            for b in tints.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_categories_share_the_default_tint() {
        assert_eq!(category_tint("documentary"), category_tint(""));
    }
}
