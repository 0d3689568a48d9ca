use futures::{stream, Stream, StreamExt};
use std::future::Future;

use crate::error::RuntimeError;

/// One page of results and the cursor for the page after it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page<T> {
    /// Items returned by this request
    pub items: Vec<T>,
    /// Cursor for the next request, absent on the last page
    pub next_token: Option<String>,
}

/// Result of walking every page of a collection.
///
/// `Partial` keeps whatever was gathered before the failing request,
/// so the caller decides whether the data is good enough to act on.
#[derive(Debug)]
pub enum Listing<T> {
    /// All pages were fetched
    Complete(Vec<T>),
    /// A page request failed after `items` were collected
    Partial {
        /// Items from the pages fetched before the failure
        items: Vec<T>,
        /// Error returned by the failing page request
        cause: RuntimeError,
    },
}

impl<T> Listing<T> {
    /// Items collected, complete or not.
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Complete(items) => items,
            Listing::Partial { items, .. } => items,
        }
    }

    /// Consume the listing and return its items.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Complete(items) => items,
            Listing::Partial { items, .. } => items,
        }
    }

    /// Whether every page was fetched.
    pub fn is_complete(&self) -> bool {
        matches!(self, Listing::Complete(_))
    }
}

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Lazily walk a cursor-paginated collection.
///
/// `fetch` receives `None` for the first page and the previous page's
/// token afterwards. The stream ends after a page without a token, or
/// right after yielding an error. Calling `pages` again restarts from
/// the first page.
pub fn pages<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<Vec<T>, RuntimeError>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, RuntimeError>>,
{
    stream::unfold((fetch, Cursor::Start), |(mut fetch, cursor)| async move {
        let token = match cursor {
            Cursor::Start => None,
            Cursor::Next(token) => Some(token),
            Cursor::Done => return None,
        };

        match fetch(token).await {
            Ok(page) => {
                let next = match page.next_token {
                    Some(token) if !token.is_empty() => Cursor::Next(token),
                    _ => Cursor::Done,
                };
                Some((Ok(page.items), (fetch, next)))
            }
            Err(err) => Some((Err(err), (fetch, Cursor::Done))),
        }
    })
}

/// Drain a page stream into a `Listing`, stopping at the first error.
pub async fn collect<T, S>(pages: S) -> Listing<T>
where
    S: Stream<Item = Result<Vec<T>, RuntimeError>>,
{
    futures::pin_mut!(pages);

    let mut items = Vec::new();
    while let Some(page) = pages.next().await {
        match page {
            Ok(mut page) => items.append(&mut page),
            Err(cause) => return Listing::Partial { items, cause },
        }
    }

    Listing::Complete(items)
}
