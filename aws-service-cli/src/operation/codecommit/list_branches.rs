/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tracing::Instrument;

use crate::client::Handle;
use crate::error;
use crate::paginate::{ItemStream, Page, PaginationInput};

/// Input for the `ListBranches` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ListBranchesInput {
    /// The name of the repository whose branches to list.
    pub repository_name: Option<String>,
    pub(crate) pagination: PaginationInput,
}

impl ListBranchesInput {
    /// Create a builder.
    pub fn builder() -> ListBranchesInputBuilder {
        ListBranchesInputBuilder::default()
    }
}

/// Builder for [`ListBranchesInput`].
#[derive(Debug, Clone, Default)]
pub struct ListBranchesInputBuilder {
    repository_name: Option<String>,
    pagination: PaginationInput,
}

impl ListBranchesInputBuilder {
    /// The name of the repository whose branches to list.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// Cap the total number of branch names emitted.
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.pagination.max_items = Some(max_items);
        self
    }

    /// Resume iteration from a previously returned cursor.
    pub fn starting_token(mut self, token: impl Into<String>) -> Self {
        self.pagination.starting_token = Some(token.into());
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> ListBranchesInput {
        ListBranchesInput {
            repository_name: self.repository_name,
            pagination: self.pagination,
        }
    }
}

/// Operation struct for `ListBranches`
#[derive(Clone, Default, Debug)]
pub(crate) struct ListBranches;

impl ListBranches {
    /// Build an item stream over every branch name.
    ///
    /// `ListBranches` has no page size parameter; the page size hint is
    /// ignored and only the emit limit applies.
    pub(crate) fn orchestrate(
        handle: Arc<Handle>,
        input: ListBranchesInput,
    ) -> ItemStream<String> {
        let repository_name = match input.repository_name {
            Some(name) => name,
            None => {
                return ItemStream::failed(error::invalid_input(
                    "repository_name is required",
                ))
            }
        };
        let client = handle.config.codecommit().clone();

        ItemStream::new(input.pagination, move |req| {
            let client = client.clone();
            let repository_name = repository_name.clone();
            Box::pin(async move {
                let resp = client
                    .list_branches()
                    .repository_name(repository_name)
                    .set_next_token(req.token)
                    .send()
                    .instrument(tracing::debug_span!("send-list-branches"))
                    .await?;

                Ok(Page {
                    items: resp.branches.unwrap_or_default(),
                    next_token: resp.next_token,
                })
            })
        })
    }
}

/// Fluent builders for `ListBranches`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `ListBranches` item stream.
    #[derive(Debug)]
    pub struct ListBranchesFluentBuilder {
        handle: Arc<Handle>,
        inner: ListBranchesInputBuilder,
    }

    impl ListBranchesFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: ListBranchesInputBuilder::default(),
            }
        }

        /// The name of the repository whose branches to list.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// Cap the total number of branch names emitted.
        pub fn max_items(mut self, max_items: usize) -> Self {
            self.inner = self.inner.max_items(max_items);
            self
        }

        /// Resume iteration from a previously returned cursor.
        pub fn starting_token(mut self, token: impl Into<String>) -> Self {
            self.inner = self.inner.starting_token(token);
            self
        }

        /// Build the item stream. No request is sent until the stream is polled.
        pub fn into_stream(self) -> ItemStream<String> {
            ListBranches::orchestrate(self.handle, self.inner.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::test_util::{client_with_codecommit, stub_codecommit_client};

    #[tokio::test]
    async fn test_missing_repository_name_fails_on_first_poll() {
        let client = client_with_codecommit(stub_codecommit_client());

        let mut stream = client.list_branches().into_stream();
        let err = stream.next().await.expect("one item").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);
        assert!(stream.next().await.is_none());
    }
}
