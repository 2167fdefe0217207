// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The browser component reports side effects (refetch, session sync)
//! instead of performing them; this module turns those effects into tasks
//! and persistence calls.

use super::{session, App, Message, Screen};
use crate::catalog::{fetch, posters};
use crate::config;
use crate::ui::{browser, navbar, settings};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Browser(browser_message) => handle_browser_message(app, browser_message),
        Message::Navbar(navbar_message) => handle_navbar_message(app, navbar_message),
        Message::Settings(settings_message) => handle_settings_message(app, settings_message),
        Message::SwitchScreen(target) => {
            app.screen = target;
            Task::none()
        }
    }
}

fn handle_browser_message(app: &mut App, message: browser::Message) -> Task<Message> {
    let effect = app.browser.update(message);

    let effect_task = match effect {
        browser::Effect::None => Task::none(),
        browser::Effect::Refetch => {
            sync_session(app);
            spawn_fetch(&mut app.browser, app.source_url.clone())
        }
        browser::Effect::SyncSession => {
            sync_session(app);
            Task::none()
        }
    };

    // New records or a page move may expose posters without thumbnails yet.
    let poster_task = spawn_poster_fetches(&mut app.browser);
    Task::batch([effect_task, poster_task])
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::Refresh => spawn_fetch(&mut app.browser, app.source_url.clone()),
        navbar::Message::OpenSettings => {
            app.settings.set_source_url(app.source_url.clone());
            app.screen = Screen::Settings;
            Task::none()
        }
    }
}

fn handle_settings_message(app: &mut App, message: settings::Message) -> Task<Message> {
    match settings::update(&mut app.settings, message) {
        settings::Event::None => Task::none(),
        settings::Event::SelectLanguage(locale) => {
            app.i18n.set_locale(locale.clone());
            let mut config = config::load().unwrap_or_default();
            config.language = Some(locale.to_string());
            persist_config(app, &config);
            Task::none()
        }
        settings::Event::ApplySourceUrl(url) => {
            app.source_url = url.clone();
            let mut config = config::load().unwrap_or_default();
            config.source_url = Some(url);
            persist_config(app, &config);

            app.screen = Screen::Browser;
            spawn_fetch(&mut app.browser, app.source_url.clone())
        }
        settings::Event::Back => {
            app.screen = Screen::Browser;
            Task::none()
        }
    }
}

/// Starts a record-set fetch and tags its completion with the generation
/// the browser handed out, so late arrivals from superseded fetches are
/// recognizable.
pub(super) fn spawn_fetch(browser: &mut browser::State, url: String) -> Task<Message> {
    let generation = browser.begin_fetch();
    Task::perform(
        async move { fetch::fetch_records(&url).await },
        move |result| Message::Browser(browser::Message::RecordsLoaded { generation, result }),
    )
}

/// Spawns a download task for every poster on the current page that is not
/// cached or already in flight.
pub(super) fn spawn_poster_fetches(browser: &mut browser::State) -> Task<Message> {
    let tasks: Vec<Task<Message>> = browser
        .pending_posters()
        .into_iter()
        .map(|uri| {
            Task::perform(posters::fetch_poster(uri), |(uri, result)| {
                Message::Browser(browser::Message::PosterLoaded { uri, result })
            })
        })
        .collect();
    Task::batch(tasks)
}

/// Mirrors the browser's page/category into the session store.
fn sync_session(app: &mut App) {
    let query = app.browser.query();
    app.session = session::SessionState {
        page: Some(query.page().to_string()),
        category: Some(query.category().to_string()),
    };
    if let Some(key) = app.session.save() {
        app.push_warning(key);
    }
}

fn persist_config(app: &mut App, config: &config::Config) {
    if config::save(config).is_err() {
        app.push_warning("warning-config-save".to_string());
    }
}
