// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display-language selection and the record source URL.
//!
//! Both preferences persist to `settings.toml`; the parent application
//! applies the events and owns the persistence.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Messages handled by the settings component.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    SourceUrlChanged(String),
    SourceUrlSubmitted,
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SelectLanguage(LanguageIdentifier),
    ApplySourceUrl(String),
    Back,
}

/// Settings screen state. Only the source URL needs a draft value; the
/// language applies immediately on click.
#[derive(Debug, Clone, Default)]
pub struct State {
    source_url_draft: String,
}

impl State {
    pub fn new(source_url: String) -> Self {
        Self {
            source_url_draft: source_url,
        }
    }

    /// Resets the draft to the currently effective source URL, e.g. when
    /// the screen is (re)opened.
    pub fn set_source_url(&mut self, source_url: String) {
        self.source_url_draft = source_url;
    }

    pub fn source_url_draft(&self) -> &str {
        &self.source_url_draft
    }
}

/// Processes a settings message and returns the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::SelectLanguage(locale),
        Message::SourceUrlChanged(draft) => {
            state.source_url_draft = draft;
            Event::None
        }
        Message::SourceUrlSubmitted => {
            let url = state.source_url_draft.trim().to_string();
            if url.is_empty() {
                Event::None
            } else {
                Event::ApplySourceUrl(url)
            }
        }
        Message::Back => Event::Back,
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the settings screen.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut language_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("select-language-label")));

    for locale in &ctx.i18n.available_locales {
        let name_key = format!("language-name-{}", locale);
        let translated = ctx.i18n.tr(&name_key);
        let label = if translated.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{} ({})", translated, locale)
        };

        let mut language_button = button(Text::new(label))
            .on_press(Message::LanguageSelected(locale.clone()));
        if ctx.i18n.current_locale() == locale {
            language_button = language_button.style(styles::button::selected);
        } else {
            language_button = language_button.style(styles::button::secondary);
        }
        language_column = language_column.push(language_button);
    }

    let source_input = text_input(
        &ctx.i18n.tr("settings-source-label"),
        &state.source_url_draft,
    )
    .on_input(Message::SourceUrlChanged)
    .on_submit(Message::SourceUrlSubmitted)
    .width(Length::Fixed(sizing::SOURCE_INPUT_WIDTH));

    let source_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-source-label")))
        .push(source_input)
        .push(
            button(Text::new(ctx.i18n.tr("settings-source-apply-button")))
                .on_press(Message::SourceUrlSubmitted)
                .style(styles::button::primary),
        );

    let back_button = button(Text::new(ctx.i18n.tr("settings-back-button")))
        .on_press(Message::Back)
        .style(styles::button::secondary);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(title)
        .push(language_column)
        .push(source_column)
        .push(back_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}
