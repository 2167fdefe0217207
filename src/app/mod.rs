// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the browser and
//! settings views.
//!
//! The `App` struct wires together localization, preferences, the session
//! parameter store, and the browser component, and translates messages
//! into side effects like config persistence or record fetching. Policy
//! decisions (startup precedence of CLI flags over stored state, which
//! events trigger a refetch) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod screen;
pub mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::{browser, settings};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    browser: browser::State,
    settings: settings::State,
    /// Last synced view parameters, mirrored to disk on every change.
    session: session::SessionState,
    /// Effective record source for this run (CLI flag, config, or default).
    source_url: String,
    /// i18n keys for persistence problems, shown under the navbar.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("source_url", &self.source_url)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Browser,
            browser: browser::State::new(),
            settings: settings::State::default(),
            session: session::SessionState::default(),
            source_url: config::DEFAULT_SOURCE_URL.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the first record fetch.
    ///
    /// Startup precedence: CLI flags beat the config file, and a `--params`
    /// string beats the stored session.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, None),
            Err(_) => (
                config::Config::default(),
                Some("warning-config-load".to_string()),
            ),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (stored_session, session_warning) = session::SessionState::load();
        let view_params = match flags.params.as_deref() {
            Some(params) => session::parse_query(params),
            None => stored_session,
        };

        let source_url = flags
            .source_url
            .unwrap_or_else(|| config.effective_source_url());

        let mut app = App {
            i18n,
            settings: settings::State::new(source_url.clone()),
            session: view_params.clone(),
            source_url,
            ..Self::default()
        };

        for warning in [config_warning, session_warning].into_iter().flatten() {
            app.push_warning(warning);
        }

        app.browser
            .restore_view(view_params.page_number(), view_params.category_filter());

        let task = update::spawn_fetch(&mut app.browser, app.source_url.clone());
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Records a persistence warning once; repeats are dropped.
    fn push_warning(&mut self, key: String) {
        if !self.warnings.contains(&key) {
            self.warnings.push(key);
        }
    }
}
