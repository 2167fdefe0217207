// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used by the settings screen.
///
/// The color is derived from the active Iced `Theme` background with a
/// slight opacity, so panels stay readable in both light and dark modes
/// without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::HOVER,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Inline, non-fatal alert strip for fetch errors.
pub fn alert(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SUBTLE,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}

/// Header row of the record table.
pub fn table_header(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.strong.color)),
        text_color: Some(extended.background.strong.text),
        ..container::Style::default()
    }
}

/// Body row of the record table; even rows get a subtle tint so long pages
/// stay scannable.
pub fn table_row(even: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let background = if even {
            Some(Background::Color(extended.background.weak.color))
        } else {
            None
        };
        container::Style {
            background,
            ..container::Style::default()
        }
    }
}
