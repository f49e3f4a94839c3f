//! Pagination types and traits
//!
//! Defines the page, the continuation that fetches it, and the pull
//! contract shared by every lazy entity sequence in the crate.

use crate::error::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Boxed future produced by a [`PageQuery`]
pub type PageFuture<T> = BoxFuture<'static, Result<Page<T>>>;

/// A re-invocable page fetch bound to one request (URL, query, authorization)
///
/// Calling [`PageQuery::fetch`] twice issues the same request twice, which is
/// what lets a failed page be retried without skipping ahead.
pub struct PageQuery<T> {
    fetch: Arc<dyn Fn() -> PageFuture<T> + Send + Sync>,
}

impl<T> PageQuery<T> {
    /// Wrap an async page-fetch function
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Page<T>>> + Send + 'static,
    {
        Self {
            fetch: Arc::new(move || -> PageFuture<T> { Box::pin(fetch()) }),
        }
    }

    /// Start fetching the page
    pub fn fetch(&self) -> PageFuture<T> {
        (self.fetch)()
    }
}

impl<T> Clone for PageQuery<T> {
    fn clone(&self) -> Self {
        Self {
            fetch: Arc::clone(&self.fetch),
        }
    }
}

impl<T> fmt::Debug for PageQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageQuery").finish_non_exhaustive()
    }
}

/// One fetched page of entities
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Entities in server order
    pub entities: Vec<T>,
    /// Fetch for the following page; `None` on the last page
    pub next: Option<PageQuery<T>>,
}

impl<T> Page<T> {
    /// The final page of a collection
    pub fn last(entities: Vec<T>) -> Self {
        Self {
            entities,
            next: None,
        }
    }

    /// A page followed by another one
    pub fn with_next(entities: Vec<T>, next: PageQuery<T>) -> Self {
        Self {
            entities,
            next: Some(next),
        }
    }

    /// Check if another page follows this one
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Lazy, forward-only, single-pass sequence pulled one element at a time
///
/// `Ok(None)` means the sequence is exhausted. Errors from the underlying
/// fetch are returned as-is.
#[async_trait]
pub trait EntityIterator: Send {
    /// Element type
    type Item: Send;

    /// Pull the next element
    async fn next(&mut self) -> Result<Option<Self::Item>>;

    /// Adapt into a [`futures::Stream`]. The stream ends after the first error.
    fn into_stream(self) -> BoxStream<'static, Result<Self::Item>>
    where
        Self: Sized + 'static,
    {
        stream::unfold(Some(self), |state| async move {
            let mut iterator = state?;
            match iterator.next().await {
                Ok(Some(item)) => Some((Ok(item), Some(iterator))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
        .boxed()
    }
}
