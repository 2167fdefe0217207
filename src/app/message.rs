// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::{browser, navbar, settings};

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Browser(browser::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    SwitchScreen(Screen),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional record source URL override; takes precedence over the
    /// configured one.
    pub source_url: Option<String>,
    /// Optional shared view parameters, e.g. `page=2&category=movie`.
    /// Takes precedence over the stored session.
    pub params: Option<String>,
}
