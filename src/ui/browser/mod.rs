// SPDX-License-Identifier: MPL-2.0
//! Catalog browser component.
//!
//! Owns the authoritative query triple (search text, category, page) and
//! the fetch lifecycle, derives a fresh page view after every change, and
//! renders the controls, summary, and record table. The parent application
//! carries out the side effects this component reports: refetching the
//! record set and mirroring page/category into the session store.

mod controls;
mod table;

use crate::catalog::{engine, posters::PosterCache, Query, Record, PAGE_SIZE};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{pagination, styles};
use fluent_bundle::FluentArgs;
use iced::alignment::Vertical;
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

/// Messages handled by the browser component.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    CategorySelected(String),
    PageSelected(u32),
    PreviousPage,
    NextPage,
    /// Completion of a record-set fetch, tagged with the generation that
    /// spawned it.
    RecordsLoaded {
        generation: u64,
        result: Result<Vec<Record>, Error>,
    },
    /// Completion of a poster thumbnail download.
    PosterLoaded {
        uri: String,
        result: Result<Vec<u8>, Error>,
    },
}

/// Side effects the parent application must carry out after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The category changed: fetch the record set again and mirror the new
    /// view into the session store.
    Refetch,
    /// Page or search changed: mirror the new view into the session store.
    SyncSession,
}

/// Browser state: record set, query triple, and fetch lifecycle.
pub struct State {
    records: Vec<Record>,
    query: Query,
    loading: bool,
    error: Option<Error>,
    /// Monotonic tag for fetches. A completion carrying an older tag lost
    /// the race against a newer trigger and is discarded.
    fetch_generation: u64,
    posters: PosterCache,
}

impl State {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            query: Query::default(),
            loading: false,
            error: None,
            fetch_generation: 0,
            posters: PosterCache::new(),
        }
    }

    /// Restores a previously shared or persisted view. Category is applied
    /// first because changing it resets the page.
    pub fn restore_view(&mut self, page: u32, category: String) {
        self.query.set_category(category);
        self.query.set_page(page);
    }

    /// Starts a new fetch cycle: bumps the generation, clears the previous
    /// record set and error, and enters the loading state. Returns the
    /// generation the spawned task must tag its completion with.
    ///
    /// The old records are cleared rather than left stale so the view never
    /// shows filter results inconsistent with the in-flight request.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.loading = true;
        self.records.clear();
        self.error = None;
        self.fetch_generation
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Derives the current page view from the record set and query.
    pub fn page_view(&self) -> engine::PageView<'_> {
        engine::paginate(
            &self.records,
            self.query.search(),
            self.query.category(),
            self.query.page(),
            PAGE_SIZE,
        )
    }

    pub fn disable_previous(&self) -> bool {
        self.query.disable_previous()
    }

    pub fn disable_next(&self) -> bool {
        self.query
            .disable_next(self.page_view().total_results, PAGE_SIZE)
    }

    /// Poster URIs on the current page that still need a download task.
    /// Each URI is handed out exactly once per session.
    pub fn pending_posters(&mut self) -> Vec<String> {
        let uris: Vec<String> = self
            .page_view()
            .window
            .iter()
            .map(|record| record.poster.clone())
            .collect();

        uris.into_iter()
            .filter(|uri| uri.starts_with("http"))
            .filter(|uri| self.posters.mark_requested(uri))
            .collect()
    }

    /// Processes a browser message and returns the side effect the parent
    /// must carry out.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::SearchChanged(search) => {
                self.query.set_search(search);
                Effect::SyncSession
            }
            Message::CategorySelected(category) => {
                self.query.set_category(category);
                Effect::Refetch
            }
            Message::PageSelected(page) => {
                self.query.set_page(page);
                Effect::SyncSession
            }
            Message::PreviousPage => {
                if self.disable_previous() {
                    Effect::None
                } else {
                    self.query.set_page(self.query.page() - 1);
                    Effect::SyncSession
                }
            }
            Message::NextPage => {
                if self.disable_next() {
                    Effect::None
                } else {
                    self.query.set_page(self.query.page() + 1);
                    Effect::SyncSession
                }
            }
            Message::RecordsLoaded { generation, result } => {
                if generation != self.fetch_generation {
                    // A newer trigger superseded this fetch.
                    return Effect::None;
                }
                self.loading = false;
                match result {
                    Ok(records) => {
                        self.records = records;
                        self.error = None;
                    }
                    Err(error) => {
                        self.records.clear();
                        self.error = Some(error);
                    }
                }
                Effect::None
            }
            Message::PosterLoaded { uri, result } => {
                if let Ok(bytes) = result {
                    self.posters.insert(uri, bytes);
                }
                Effect::None
            }
        }
    }

    /// Renders the browser screen.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let page_view = self.page_view();

        let mut controls = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center);

        if page_view.total_pages > 0 {
            let strip = pagination::view(pagination::ViewContext {
                i18n,
                page: self.query.page(),
                total_pages: page_view.total_pages,
                disable_previous: self.disable_previous(),
                disable_next: self.disable_next(),
            })
            .map(|message| match message {
                pagination::Message::Previous => Message::PreviousPage,
                pagination::Message::Next => Message::NextPage,
                pagination::Message::Select(page) => Message::PageSelected(page),
            });
            controls = controls.push(strip);
        }

        controls = controls
            .push(controls::search_input(i18n, self.query.search()))
            .push(controls::category_group(i18n, self.query.category()));

        let summary =
            Text::new(results_summary(&page_view, i18n)).size(typography::BODY);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(controls)
            .push(summary);

        if let Some(error) = &self.error {
            if !self.loading {
                content = content.push(
                    Container::new(Text::new(i18n.tr(error.i18n_key())))
                        .padding(spacing::XS)
                        .width(Length::Fill)
                        .style(styles::container::alert),
                );
            }
        }

        if self.loading {
            content = content.push(Text::new(i18n.tr("loading")).size(typography::BODY));
        } else {
            let table = table::view(&page_view.window, &self.posters, i18n);
            content = content.push(scrollable(table).height(Length::Fill));
        }

        content.width(Length::Fill).height(Length::Fill).into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the localized "Showing X to Y of Z results" line, or the
/// no-results message for an empty filtered set.
pub fn results_summary(view: &engine::PageView<'_>, i18n: &I18n) -> String {
    if view.total_results == 0 {
        return i18n.tr("no-results");
    }

    let mut args = FluentArgs::new();
    args.set("start", view.start_result as u64);
    args.set("end", view.end_result as u64);
    args.set("total", view.total_results as u64);
    i18n.tr_args("results-summary", &args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, category: &str) -> Record {
        Record {
            title: title.to_string(),
            year: "2000".to_string(),
            category: category.to_string(),
            poster: "N/A".to_string(),
        }
    }

    fn loaded_state(records: Vec<Record>) -> State {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.update(Message::RecordsLoaded {
            generation,
            result: Ok(records),
        });
        state
    }

    #[test]
    fn begin_fetch_clears_records_and_error() {
        let mut state = loaded_state(vec![record("The Matrix", "movie")]);
        state.update(Message::RecordsLoaded {
            generation: state.fetch_generation,
            result: Err(Error::Network("down".to_string())),
        });
        assert!(state.last_error().is_some());

        state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.last_error().is_none());
        assert_eq!(state.page_view().total_results, 0);
    }

    #[test]
    fn stale_fetch_result_is_discarded() {
        let mut state = State::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The first fetch resolves after the second one was triggered.
        let effect = state.update(Message::RecordsLoaded {
            generation: first,
            result: Ok(vec![record("Stale", "movie")]),
        });
        assert_eq!(effect, Effect::None);
        assert!(state.is_loading());
        assert_eq!(state.page_view().total_results, 0);

        state.update(Message::RecordsLoaded {
            generation: second,
            result: Ok(vec![record("Fresh", "movie")]),
        });
        assert!(!state.is_loading());
        assert_eq!(state.page_view().window[0].title, "Fresh");
    }

    #[test]
    fn failed_fetch_stores_error_and_clears_records() {
        let mut state = loaded_state(vec![record("The Matrix", "movie")]);
        let generation = state.begin_fetch();
        state.update(Message::RecordsLoaded {
            generation,
            result: Err(Error::Parse("bad body".to_string())),
        });
        assert!(matches!(state.last_error(), Some(Error::Parse(_))));
        assert_eq!(state.page_view().total_results, 0);
        assert!(!state.is_loading());
    }

    #[test]
    fn search_change_resets_page_and_requests_sync() {
        let mut state = loaded_state(
            (0..30).map(|i| record(&format!("Film {i}"), "movie")).collect(),
        );
        state.update(Message::PageSelected(3));
        assert_eq!(state.query().page(), 3);

        let effect = state.update(Message::SearchChanged("film 1".to_string()));
        assert_eq!(effect, Effect::SyncSession);
        assert_eq!(state.query().page(), 1);
    }

    #[test]
    fn category_change_resets_page_and_requests_refetch() {
        let mut state = loaded_state(
            (0..30).map(|i| record(&format!("Film {i}"), "movie")).collect(),
        );
        state.update(Message::PageSelected(2));

        let effect = state.update(Message::CategorySelected("series".to_string()));
        assert_eq!(effect, Effect::Refetch);
        assert_eq!(state.query().page(), 1);
        assert_eq!(state.query().category(), "series");
    }

    #[test]
    fn page_navigation_respects_disable_flags() {
        let mut state = loaded_state(
            (0..23).map(|i| record(&format!("Film {i}"), "movie")).collect(),
        );

        assert_eq!(state.update(Message::PreviousPage), Effect::None);
        assert_eq!(state.query().page(), 1);

        assert_eq!(state.update(Message::NextPage), Effect::SyncSession);
        assert_eq!(state.query().page(), 2);

        state.update(Message::PageSelected(3));
        assert_eq!(state.update(Message::NextPage), Effect::None);
        assert_eq!(state.query().page(), 3);
    }

    #[test]
    fn pending_posters_skips_placeholders_and_duplicates() {
        let mut records: Vec<Record> = (0..3)
            .map(|i| Record {
                title: format!("Film {i}"),
                year: "2000".to_string(),
                category: "movie".to_string(),
                poster: format!("http://example.org/{i}.jpg"),
            })
            .collect();
        records.push(record("No Poster", "movie"));

        let mut state = loaded_state(records);
        let pending = state.pending_posters();
        assert_eq!(pending.len(), 3);

        // A redraw must not schedule the same downloads again.
        assert!(state.pending_posters().is_empty());
    }

    #[test]
    fn restore_view_applies_category_before_page() {
        let mut state = State::new();
        state.restore_view(4, "series".to_string());
        assert_eq!(state.query().page(), 4);
        assert_eq!(state.query().category(), "series");
    }
}
