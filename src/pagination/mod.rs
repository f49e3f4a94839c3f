//! Pagination module
//!
//! Lazy iteration over paged collection endpoints.
//!
//! # Overview
//!
//! A resource operation builds a [`PageQuery`] for the first page of a
//! listing. Every fetched [`Page`] carries the query for its successor, so
//! [`EntityPageIterator`] only has to hold the next continuation. The
//! [`EntityListIterator`] on top of it hides page boundaries entirely.
//!
//! Pages are fetched on demand, one request per exhausted page, with no
//! prefetching and no retries.

mod iterators;
mod types;
mod utils;

pub use iterators::{EntityListIterator, EntityPageIterator};
pub use types::{EntityIterator, Page, PageFuture, PageQuery};
pub use utils::{take, to_array};
