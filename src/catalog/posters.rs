// SPDX-License-Identifier: MPL-2.0
//! Poster thumbnail retrieval and caching.
//!
//! Posters are fetched lazily for the records visible on the current page
//! and kept in a bounded LRU cache keyed by their source URI. The cache is
//! independent of the record-set fetch lifecycle: a thumbnail stays valid
//! across refetches because the key is the URI alone.

use crate::error::{Error, Result};
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Pages hold ten records, so this covers a dozen pages of browsing before
/// eviction starts.
const CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(128) {
    Some(capacity) => capacity,
    None => panic!("cache capacity must be non-zero"),
};

/// Bounded cache of poster image handles.
///
/// A URI is marked as requested when its download task is spawned, so a
/// redraw does not schedule the same download twice. Failed downloads keep
/// the mark and fall back to a placeholder for the rest of the session; no
/// retry logic exists.
#[derive(Debug)]
pub struct PosterCache {
    handles: LruCache<String, image::Handle>,
    requested: HashSet<String>,
}

impl PosterCache {
    pub fn new() -> Self {
        Self {
            handles: LruCache::new(CACHE_CAPACITY),
            requested: HashSet::new(),
        }
    }

    /// Looks up a cached handle without touching recency order, so the view
    /// can read through a shared reference.
    pub fn peek(&self, uri: &str) -> Option<&image::Handle> {
        self.handles.peek(uri)
    }

    /// Stores the decoded bytes of a downloaded poster.
    pub fn insert(&mut self, uri: String, bytes: Vec<u8>) {
        self.handles.put(uri, image::Handle::from_bytes(bytes));
    }

    /// Marks a URI as having an in-flight or completed download. Returns
    /// `true` the first time, `false` for every later call.
    pub fn mark_requested(&mut self, uri: &str) -> bool {
        self.requested.insert(uri.to_string())
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Default for PosterCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Downloads one poster image and hands back the raw bytes together with
/// the URI they belong to.
pub async fn fetch_poster(uri: String) -> (String, Result<Vec<u8>>) {
    let result = download(&uri).await;
    (uri, result)
}

async fn download(uri: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(uri)
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;
    Ok(bytes.to_vec())
}
