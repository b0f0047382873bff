/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::error::Error;

/// Parameters for a single page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Cursor returned by the previous page, echoed back verbatim.
    pub token: Option<String>,
    /// Page size hint. Operations whose service API has no page size
    /// parameter ignore this.
    pub page_size: Option<i32>,
}

/// One page of results from a list/describe operation.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items in service order.
    pub items: Vec<T>,
    /// Cursor for the next page, `None` when this is the last page.
    pub next_token: Option<String>,
}

/// Pagination settings shared by all list/describe operations.
#[derive(Debug, Clone, Default)]
pub struct PaginationInput {
    pub(crate) page_size: Option<i32>,
    pub(crate) max_items: Option<usize>,
    pub(crate) starting_token: Option<String>,
}

type PageFuture<T> = Pin<Box<dyn Future<Output = Result<Page<T>, Error>> + Send>>;
type FetchFn<T> = Box<dyn FnMut(PageRequest) -> PageFuture<T> + Send>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Next page request to issue, with the cursor to echo.
    Request { token: Option<String> },
    Done,
}

/// Pull-based stream over a paginated operation.
///
/// Pages are requested lazily and strictly in sequence: every item of the
/// current page is emitted before the next page request is issued. The
/// first error ends iteration.
pub struct ItemStream<T> {
    fetch: FetchFn<T>,
    state: State,
    page: VecDeque<T>,
    /// Number of items still allowed to be emitted, when capped.
    remaining: Option<usize>,
    page_size: Option<i32>,
}

impl<T> fmt::Debug for ItemStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStream")
            .field("state", &self.state)
            .field("buffered", &self.page.len())
            .field("remaining", &self.remaining)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl<T> ItemStream<T> {
    pub(crate) fn new<F>(input: PaginationInput, fetch: F) -> Self
    where
        F: FnMut(PageRequest) -> PageFuture<T> + Send + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            state: State::Request {
                token: input.starting_token,
            },
            page: VecDeque::new(),
            remaining: input.max_items,
            page_size: input.page_size,
        }
    }

    /// A stream that yields the given error once. Used when input validation
    /// fails before the first page request can be built.
    pub(crate) fn failed(err: Error) -> Self {
        let mut err = Some(err);
        Self::new(PaginationInput::default(), move |_req| {
            let err = err.take().unwrap_or_else(|| {
                Error::new(crate::error::ErrorKind::RuntimeError, "error already taken")
            });
            Box::pin(async move { Err(err) })
        })
    }

    /// The page size hint for the next request, clamped so that a capped
    /// stream never asks the service for more items than it will emit.
    fn page_size_hint(&self) -> Option<i32> {
        let remaining = self
            .remaining
            .map(|r| i32::try_from(r).unwrap_or(i32::MAX));
        match (self.page_size, remaining) {
            (Some(size), Some(rem)) => Some(size.min(rem)),
            (Some(size), None) => Some(size),
            (None, rem) => rem,
        }
    }

    /// Advance to the next item, fetching pages as needed.
    ///
    /// Returns `None` once the last page is drained, the emit limit is
    /// reached, or after an error has been yielded.
    pub async fn next(&mut self) -> Option<Result<T, Error>> {
        loop {
            if self.remaining == Some(0) {
                self.state = State::Done;
                self.page.clear();
                return None;
            }

            if let Some(item) = self.page.pop_front() {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some(Ok(item));
            }

            let token = match &self.state {
                State::Done => return None,
                State::Request { token } => token.clone(),
            };

            let request = PageRequest {
                token: token.clone(),
                page_size: self.page_size_hint(),
            };

            match (self.fetch)(request).await {
                Ok(page) => {
                    // A service echoing the cursor that requested the page
                    // would otherwise loop forever.
                    self.state = match page.next_token {
                        Some(ref next) if token.as_deref() == Some(next.as_str()) => State::Done,
                        Some(next) => State::Request { token: Some(next) },
                        None => State::Done,
                    };
                    self.page = page.items.into();
                    if self.page.is_empty() && self.state == State::Done {
                        return None;
                    }
                    // an empty page with a live cursor keeps iterating
                }
                Err(err) => {
                    self.state = State::Done;
                    return Some(Err(err));
                }
            }
        }
    }

    /// Drain the stream into a `Vec`, stopping at the first error.
    pub async fn collect(mut self) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await {
            items.push(item?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::{ItemStream, Page, PageRequest, PaginationInput};
    use crate::error::{Error, ErrorKind};

    /// Build a stream over a scripted sequence of pages, capturing every
    /// page request issued.
    fn scripted(
        input: PaginationInput,
        pages: Vec<Page<u32>>,
    ) -> (ItemStream<u32>, Arc<Mutex<Vec<PageRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();
        let script = Arc::new(Mutex::new(VecDeque::from(pages)));
        let stream = ItemStream::new(input, move |req| {
            log.lock().unwrap().push(req);
            let script = script.clone();
            Box::pin(async move {
                script
                    .lock()
                    .unwrap()
                    .pop_front()
                    .ok_or_else(|| Error::new(ErrorKind::RuntimeError, "script exhausted"))
            })
        });
        (stream, requests)
    }

    fn page(items: &[u32], next_token: Option<&str>) -> Page<u32> {
        Page {
            items: items.to_vec(),
            next_token: next_token.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn test_emits_all_pages_in_order() {
        let pages = vec![
            page(&[1, 2], Some("t1")),
            page(&[3], Some("t2")),
            page(&[4, 5], None),
        ];
        let (stream, requests) = scripted(PaginationInput::default(), pages);

        let items = stream.collect().await.unwrap();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);

        let tokens: Vec<Option<String>> = requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.token.clone())
            .collect();
        assert_eq!(
            tokens,
            vec![None, Some("t1".to_owned()), Some("t2".to_owned())]
        );
    }

    #[tokio::test]
    async fn test_emit_limit_truncates_mid_page() {
        let pages = vec![page(&[1, 2, 3], Some("t1")), page(&[4, 5, 6], Some("t2"))];
        let input = PaginationInput {
            max_items: Some(4),
            ..Default::default()
        };
        let (stream, requests) = scripted(input, pages);

        let items = stream.collect().await.unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);
        // limit reached mid second page; no third request goes out
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_page_size_clamped_to_remaining() {
        let pages = vec![page(&[1, 2, 3], Some("t1")), page(&[4], None)];
        let input = PaginationInput {
            page_size: Some(10),
            max_items: Some(4),
            ..Default::default()
        };
        let (stream, requests) = scripted(input, pages);

        let items = stream.collect().await.unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);

        let hints: Vec<Option<i32>> = requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.page_size)
            .collect();
        // 4 allowed up front, 1 left after the first page of 3
        assert_eq!(hints, vec![Some(4), Some(1)]);
    }

    #[tokio::test]
    async fn test_max_items_zero_issues_no_request() {
        let (mut stream, requests) = scripted(
            PaginationInput {
                max_items: Some(0),
                ..Default::default()
            },
            vec![page(&[1], None)],
        );

        assert!(stream.next().await.is_none());
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_echoed_token_terminates() {
        // second page echoes the cursor that requested it
        let pages = vec![page(&[1], Some("t1")), page(&[2], Some("t1"))];
        let (stream, requests) = scripted(PaginationInput::default(), pages);

        let items = stream.collect().await.unwrap();
        assert_eq!(items, vec![1, 2]);
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_page_with_live_token_continues() {
        let pages = vec![page(&[], Some("t1")), page(&[7], None)];
        let (stream, _) = scripted(PaginationInput::default(), pages);

        let items = stream.collect().await.unwrap();
        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn test_starting_token_seeds_first_request() {
        let input = PaginationInput {
            starting_token: Some("resume".to_owned()),
            ..Default::default()
        };
        let (stream, requests) = scripted(input, vec![page(&[1], None)]);

        stream.collect().await.unwrap();
        assert_eq!(
            requests.lock().unwrap()[0].token,
            Some("resume".to_owned())
        );
    }

    #[tokio::test]
    async fn test_error_yielded_once_then_done() {
        let (mut stream, _) = scripted(PaginationInput::default(), vec![]);

        let first = stream.next().await.expect("error yielded");
        assert!(matches!(
            first.unwrap_err().kind(),
            ErrorKind::RuntimeError
        ));
        assert!(stream.next().await.is_none());
    }
}
