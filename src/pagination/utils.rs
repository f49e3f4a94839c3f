//! Generic consumers for any [`EntityIterator`]

use super::types::EntityIterator;
use crate::error::Result;

/// Pull at most `n` elements, stopping early if the iterator runs out
///
/// Never pulls element `n + 1`, so no page beyond the one holding the last
/// requested element is fetched.
pub async fn take<I>(iterator: &mut I, n: usize) -> Result<Vec<I::Item>>
where
    I: EntityIterator + ?Sized,
{
    let mut items = Vec::new();
    while items.len() < n {
        match iterator.next().await? {
            Some(item) => items.push(item),
            None => break,
        }
    }
    Ok(items)
}

/// Pull every remaining element
pub async fn to_array<I>(iterator: &mut I) -> Result<Vec<I::Item>>
where
    I: EntityIterator + ?Sized,
{
    let mut items = Vec::new();
    while let Some(item) = iterator.next().await? {
        items.push(item);
    }
    Ok(items)
}
