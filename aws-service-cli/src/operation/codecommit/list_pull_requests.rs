/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_codecommit::types::PullRequestStatusEnum;
use tracing::Instrument;

use crate::client::Handle;
use crate::error;
use crate::paginate::{ItemStream, Page, PaginationInput};

/// Input for the `ListPullRequests` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ListPullRequestsInput {
    /// The name of the repository whose pull requests to list.
    pub repository_name: Option<String>,
    /// Filter to pull requests created by this user ARN.
    pub author_arn: Option<String>,
    /// Filter by pull request status.
    pub pull_request_status: Option<PullRequestStatusEnum>,
    pub(crate) pagination: PaginationInput,
}

impl ListPullRequestsInput {
    /// Create a builder.
    pub fn builder() -> ListPullRequestsInputBuilder {
        ListPullRequestsInputBuilder::default()
    }
}

/// Builder for [`ListPullRequestsInput`].
#[derive(Debug, Clone, Default)]
pub struct ListPullRequestsInputBuilder {
    repository_name: Option<String>,
    author_arn: Option<String>,
    pull_request_status: Option<PullRequestStatusEnum>,
    pagination: PaginationInput,
}

impl ListPullRequestsInputBuilder {
    /// The name of the repository whose pull requests to list.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// Filter to pull requests created by this user ARN.
    pub fn set_author_arn(mut self, arn: Option<String>) -> Self {
        self.author_arn = arn;
        self
    }

    /// Filter by pull request status.
    pub fn set_pull_request_status(mut self, status: Option<PullRequestStatusEnum>) -> Self {
        self.pull_request_status = status;
        self
    }

    /// The number of pull request IDs to request per page.
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.pagination.page_size = Some(page_size);
        self
    }

    /// Cap the total number of pull request IDs emitted.
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
    pub fn build(self) -> ListPullRequestsInput {
        ListPullRequestsInput {
            repository_name: self.repository_name,
            author_arn: self.author_arn,
            pull_request_status: self.pull_request_status,
            pagination: self.pagination,
        }
    }
}

/// Operation struct for `ListPullRequests`
#[derive(Clone, Default, Debug)]
pub(crate) struct ListPullRequests;

impl ListPullRequests {
    /// Build an item stream over pull request IDs. The page size hint maps
    /// onto the service's `maxResults` parameter.
    pub(crate) fn orchestrate(
        handle: Arc<Handle>,
        input: ListPullRequestsInput,
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
        let author_arn = input.author_arn;
        let status = input.pull_request_status;

        ItemStream::new(input.pagination, move |req| {
            let client = client.clone();
            let repository_name = repository_name.clone();
            let author_arn = author_arn.clone();
            let status = status.clone();
            Box::pin(async move {
                let resp = client
                    .list_pull_requests()
                    .repository_name(repository_name)
                    .set_author_arn(author_arn)
                    .set_pull_request_status(status)
                    .set_next_token(req.token)
                    .set_max_results(req.page_size)
                    .send()
                    .instrument(tracing::debug_span!("send-list-pull-requests"))
                    .await?;

                Ok(Page {
                    items: resp.pull_request_ids,
                    next_token: resp.next_token,
                })
            })
        })
    }
}

/// Fluent builders for `ListPullRequests`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `ListPullRequests` item stream.
    #[derive(Debug)]
    pub struct ListPullRequestsFluentBuilder {
        handle: Arc<Handle>,
        inner: ListPullRequestsInputBuilder,
    }

    impl ListPullRequestsFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: ListPullRequestsInputBuilder::default(),
            }
        }

        /// The name of the repository whose pull requests to list.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// Filter to pull requests created by this user ARN.
        pub fn author_arn(mut self, arn: impl Into<String>) -> Self {
            self.inner = self.inner.set_author_arn(Some(arn.into()));
            self
        }

        /// Filter by pull request status.
        pub fn pull_request_status(mut self, status: PullRequestStatusEnum) -> Self {
            self.inner = self.inner.set_pull_request_status(Some(status));
            self
        }

        /// The number of pull request IDs to request per page.
        pub fn page_size(mut self, page_size: i32) -> Self {
            self.inner = self.inner.page_size(page_size);
            self
        }

        /// Cap the total number of pull request IDs emitted.
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
        pub fn into_stream(mut self) -> ItemStream<String> {
            if self.inner.pagination.page_size.is_none() {
                self.inner.pagination.page_size = self.handle.default_page_size();
            }
            ListPullRequests::orchestrate(self.handle, self.inner.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_codecommit::operation::list_pull_requests::ListPullRequestsOutput;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    use crate::test_util::client_with_codecommit;

    #[tokio::test]
    async fn test_page_size_clamped_to_emit_limit() {
        let page1 = mock!(aws_sdk_codecommit::Client::list_pull_requests)
            .match_requests(|r| r.max_results == Some(3))
            .then_output(|| {
                ListPullRequestsOutput::builder()
                    .pull_request_ids("11")
                    .pull_request_ids("12")
                    .next_token("t1")
                    .build()
                    .unwrap()
            });
        let page2 = mock!(aws_sdk_codecommit::Client::list_pull_requests)
            .match_requests(|r| r.max_results == Some(1) && r.next_token.as_deref() == Some("t1"))
            .then_output(|| {
                ListPullRequestsOutput::builder()
                    .pull_request_ids("13")
                    .next_token("t2")
                    .build()
                    .unwrap()
            });
        let client = client_with_codecommit(mock_client!(
            aws_sdk_codecommit,
            RuleMode::Sequential,
            &[&page1, &page2]
        ));

        let ids = client
            .list_pull_requests()
            .repository_name("demo")
            .page_size(10)
            .max_items(3)
            .into_stream()
            .collect()
            .await
            .unwrap();

        assert_eq!(ids, vec!["11", "12", "13"]);
    }
}
