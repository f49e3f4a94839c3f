//! Page and entity iterators
//!
//! [`EntityPageIterator`] walks the chain of page continuations;
//! [`EntityListIterator`] flattens it into single entities.

use super::types::{EntityIterator, Page, PageQuery};
use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, trace};

// ============================================================================
// Page Iterator
// ============================================================================

/// Lazily fetches successive pages, one request per pull
#[derive(Debug)]
pub struct EntityPageIterator<T> {
    /// Continuation for the next page. `None` once the last page was delivered.
    next_query: Option<PageQuery<T>>,
    pages_fetched: usize,
}

impl<T> EntityPageIterator<T> {
    /// Create an iterator starting at the given first-page fetch
    pub fn new(first_page: PageQuery<T>) -> Self {
        Self {
            next_query: Some(first_page),
            pages_fetched: 0,
        }
    }

    /// Check if every page has been delivered
    pub fn is_exhausted(&self) -> bool {
        self.next_query.is_none()
    }

    /// Number of pages fetched successfully so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

#[async_trait]
impl<T: Send + 'static> EntityIterator for EntityPageIterator<T> {
    type Item = Page<T>;

    async fn next(&mut self) -> Result<Option<Page<T>>> {
        let Some(query) = &self.next_query else {
            trace!("Page iterator exhausted");
            return Ok(None);
        };

        // On failure the continuation stays in place so the same page is retried
        let fetch = query.fetch();
        let page = fetch.await?;

        self.pages_fetched += 1;
        self.next_query.clone_from(&page.next);

        debug!(
            page = self.pages_fetched,
            entities = page.entities.len(),
            has_next = page.has_next(),
            "Fetched page"
        );

        Ok(Some(page))
    }
}

// ============================================================================
// Entity Iterator
// ============================================================================

/// Flat lazy sequence of entities across all pages of a collection
#[derive(Debug)]
pub struct EntityListIterator<T> {
    pages: EntityPageIterator<T>,
    current: std::vec::IntoIter<T>,
}

impl<T> EntityListIterator<T> {
    /// Create an iterator starting at the given first-page fetch
    pub fn new(first_page: PageQuery<T>) -> Self {
        Self::from_pages(EntityPageIterator::new(first_page))
    }

    /// Flatten an existing page iterator
    pub fn from_pages(pages: EntityPageIterator<T>) -> Self {
        Self {
            pages,
            current: Vec::new().into_iter(),
        }
    }

    /// Entities left in the current page
    pub fn remaining_in_page(&self) -> usize {
        self.current.len()
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages.pages_fetched()
    }
}

#[async_trait]
impl<T: Send + 'static> EntityIterator for EntityListIterator<T> {
    type Item = T;

    async fn next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(entity) = self.current.next() {
                return Ok(Some(entity));
            }

            // Empty pages do not end the sequence; keep pulling until the chain runs out
            match self.pages.next().await? {
                Some(page) => self.current = page.entities.into_iter(),
                None => return Ok(None),
            }
        }
    }
}
