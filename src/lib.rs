// SPDX-License-Identifier: MPL-2.0
//! `iced_catalog` is a desktop media-catalog browser built with the Iced
//! GUI framework.
//!
//! It loads a record set from a configurable HTTP source, filters it by
//! title search and category, and pages through the results with a compact
//! page-number strip. Display language (via Fluent), the record source,
//! and the last page/category view all persist between sessions.

#![doc(html_root_url = "https://docs.rs/iced_catalog/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
