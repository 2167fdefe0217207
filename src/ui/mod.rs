// SPDX-License-Identifier: MPL-2.0
//! UI components for the catalog browser.

pub mod browser;
pub mod design_tokens;
pub mod navbar;
pub mod pagination;
pub mod settings;
pub mod styles;
