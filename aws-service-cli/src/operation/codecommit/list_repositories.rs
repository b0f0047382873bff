/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_codecommit::types::{OrderEnum, SortByEnum};
use tracing::Instrument;

use crate::client::Handle;
use crate::paginate::{ItemStream, Page, PaginationInput};
use crate::types::RepositoryNameId;

/// Input for the `ListRepositories` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct ListRepositoriesInput {
    /// The criterion to sort results by.
    pub sort_by: Option<SortByEnum>,
    /// The order to sort results in.
    pub order: Option<OrderEnum>,
    pub(crate) pagination: PaginationInput,
}

impl ListRepositoriesInput {
    /// Create a builder.
    pub fn builder() -> ListRepositoriesInputBuilder {
        ListRepositoriesInputBuilder::default()
    }
}

/// Builder for [`ListRepositoriesInput`].
#[derive(Debug, Clone, Default)]
pub struct ListRepositoriesInputBuilder {
    sort_by: Option<SortByEnum>,
    order: Option<OrderEnum>,
    pagination: PaginationInput,
}

impl ListRepositoriesInputBuilder {
    /// The criterion to sort results by.
    pub fn set_sort_by(mut self, sort_by: Option<SortByEnum>) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// The order to sort results in.
    pub fn set_order(mut self, order: Option<OrderEnum>) -> Self {
        self.order = order;
        self
    }

    /// Cap the total number of repositories emitted.
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
    pub fn build(self) -> ListRepositoriesInput {
        ListRepositoriesInput {
            sort_by: self.sort_by,
            order: self.order,
            pagination: self.pagination,
        }
    }
}

/// Operation struct for `ListRepositories`
#[derive(Clone, Default, Debug)]
pub(crate) struct ListRepositories;

impl ListRepositories {
    /// Build an item stream over every repository page.
    ///
    /// `ListRepositories` has no page size parameter; the page size hint is
    /// ignored and only the emit limit applies.
    pub(crate) fn orchestrate(
        handle: Arc<Handle>,
        input: ListRepositoriesInput,
    ) -> ItemStream<RepositoryNameId> {
        let client = handle.config.codecommit().clone();
        let sort_by = input.sort_by;
        let order = input.order;

        ItemStream::new(input.pagination, move |req| {
            let client = client.clone();
            let sort_by = sort_by.clone();
            let order = order.clone();
            Box::pin(async move {
                let resp = client
                    .list_repositories()
                    .set_next_token(req.token)
                    .set_sort_by(sort_by)
                    .set_order(order)
                    .send()
                    .instrument(tracing::debug_span!("send-list-repositories"))
                    .await?;

                Ok(Page {
                    items: resp
                        .repositories
                        .unwrap_or_default()
                        .into_iter()
                        .map(RepositoryNameId::from)
                        .collect(),
                    next_token: resp.next_token,
                })
            })
        })
    }
}

/// Fluent builders for `ListRepositories`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `ListRepositories` item stream.
    #[derive(Debug)]
    pub struct ListRepositoriesFluentBuilder {
        handle: Arc<Handle>,
        inner: ListRepositoriesInputBuilder,
    }

    impl ListRepositoriesFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: ListRepositoriesInputBuilder::default(),
            }
        }

        /// The criterion to sort results by.
        pub fn sort_by(mut self, sort_by: SortByEnum) -> Self {
            self.inner = self.inner.set_sort_by(Some(sort_by));
            self
        }

        /// The order to sort results in.
        pub fn order(mut self, order: OrderEnum) -> Self {
            self.inner = self.inner.set_order(Some(order));
            self
        }

        /// Cap the total number of repositories emitted.
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
        pub fn into_stream(self) -> ItemStream<RepositoryNameId> {
            ListRepositories::orchestrate(self.handle, self.inner.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_codecommit::operation::list_repositories::ListRepositoriesOutput;
    use aws_sdk_codecommit::types::RepositoryNameIdPair;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    use crate::test_util::client_with_codecommit;

    fn pair(name: &str) -> RepositoryNameIdPair {
        RepositoryNameIdPair::builder().repository_name(name).build()
    }

    #[tokio::test]
    async fn test_follows_next_token_across_pages() {
        let page1 = mock!(aws_sdk_codecommit::Client::list_repositories)
            .match_requests(|r| r.next_token.is_none())
            .then_output(|| {
                ListRepositoriesOutput::builder()
                    .repositories(pair("alpha"))
                    .repositories(pair("beta"))
                    .next_token("t1")
                    .build()
            });
        let page2 = mock!(aws_sdk_codecommit::Client::list_repositories)
            .match_requests(|r| r.next_token.as_deref() == Some("t1"))
            .then_output(|| {
                ListRepositoriesOutput::builder()
                    .repositories(pair("gamma"))
                    .build()
            });
        let client = client_with_codecommit(mock_client!(
            aws_sdk_codecommit,
            RuleMode::Sequential,
            &[&page1, &page2]
        ));

        let names: Vec<_> = client
            .list_repositories()
            .into_stream()
            .collect()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.repository_name.unwrap())
            .collect();

        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_max_items_stops_early() {
        let page1 = mock!(aws_sdk_codecommit::Client::list_repositories).then_output(|| {
            ListRepositoriesOutput::builder()
                .repositories(pair("alpha"))
                .repositories(pair("beta"))
                .next_token("t1")
                .build()
        });
        let client = client_with_codecommit(mock_client!(
            aws_sdk_codecommit,
            RuleMode::Sequential,
            &[&page1]
        ));

        let repos = client
            .list_repositories()
            .max_items(1)
            .into_stream()
            .collect()
            .await
            .unwrap();

        // the single mocked page satisfies the limit; no second request goes out
        assert_eq!(repos.len(), 1);
    }
}
