// SPDX-License-Identifier: MPL-2.0
//! Catalog domain: the record model, pure filtering/pagination, the compact
//! page-range generator, and asynchronous retrieval.

pub mod engine;
pub mod fetch;
pub mod pagination;
pub mod posters;
pub mod query;
pub mod record;

pub use engine::{paginate, PageView, PAGE_SIZE};
pub use pagination::{page_markers, PageMarker};
pub use query::Query;
pub use record::Record;
