// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent resources embedded at build time.

pub mod fluent;
