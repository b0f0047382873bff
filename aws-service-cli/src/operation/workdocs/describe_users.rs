/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_workdocs::types::{OrderType, UserFilterType, UserSortType};
use tracing::Instrument;

use crate::client::Handle;
use crate::paginate::{ItemStream, Page, PaginationInput};
use crate::types::UserSummary;

/// Input for the `DescribeUsers` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DescribeUsersInput {
    /// The ID of the organization.
    pub organization_id: Option<String>,
    /// Comma-separated list of user IDs to describe.
    pub user_ids: Option<String>,
    /// A query to filter users by name.
    pub query: Option<String>,
    /// Filter by user state, e.g. active users only.
    pub include: Option<UserFilterType>,
    /// The order to sort results in.
    pub order: Option<OrderType>,
    /// The criterion to sort results by.
    pub sort: Option<UserSortType>,
    /// Comma-separated list of additional payload fields, e.g. storage metadata.
    pub fields: Option<String>,
    /// Amazon WorkDocs authentication token, when not using IAM credentials.
    pub authentication_token: Option<String>,
    pub(crate) pagination: PaginationInput,
}

impl DescribeUsersInput {
    /// Create a builder.
    pub fn builder() -> DescribeUsersInputBuilder {
        DescribeUsersInputBuilder::default()
    }
}

/// Builder for [`DescribeUsersInput`].
#[derive(Debug, Clone, Default)]
pub struct DescribeUsersInputBuilder {
    organization_id: Option<String>,
    user_ids: Option<String>,
    query: Option<String>,
    include: Option<UserFilterType>,
    order: Option<OrderType>,
    sort: Option<UserSortType>,
    fields: Option<String>,
    authentication_token: Option<String>,
    pagination: PaginationInput,
}

impl DescribeUsersInputBuilder {
    /// The ID of the organization.
    pub fn set_organization_id(mut self, id: Option<String>) -> Self {
        self.organization_id = id;
        self
    }

    /// Comma-separated list of user IDs to describe.
    pub fn set_user_ids(mut self, ids: Option<String>) -> Self {
        self.user_ids = ids;
        self
    }

    /// A query to filter users by name.
    pub fn set_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    /// Filter by user state.
    pub fn set_include(mut self, include: Option<UserFilterType>) -> Self {
        self.include = include;
        self
    }

    /// The order to sort results in.
    pub fn set_order(mut self, order: Option<OrderType>) -> Self {
        self.order = order;
        self
    }

    /// The criterion to sort results by.
    pub fn set_sort(mut self, sort: Option<UserSortType>) -> Self {
        self.sort = sort;
        self
    }

    /// Comma-separated list of additional payload fields.
    pub fn set_fields(mut self, fields: Option<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Amazon WorkDocs authentication token.
    pub fn set_authentication_token(mut self, token: Option<String>) -> Self {
        self.authentication_token = token;
        self
    }

    /// The number of entries to request per page.
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.pagination.page_size = Some(page_size);
        self
    }

    /// Cap the total number of entries emitted.
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.pagination.max_items = Some(max_items);
        self
    }

    /// Resume iteration from a previously returned marker.
    pub fn starting_token(mut self, token: impl Into<String>) -> Self {
        self.pagination.starting_token = Some(token.into());
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> DescribeUsersInput {
        DescribeUsersInput {
            organization_id: self.organization_id,
            user_ids: self.user_ids,
            query: self.query,
            include: self.include,
            order: self.order,
            sort: self.sort,
            fields: self.fields,
            authentication_token: self.authentication_token,
            pagination: self.pagination,
        }
    }
}

/// Operation struct for `DescribeUsers`
#[derive(Clone, Default, Debug)]
pub(crate) struct DescribeUsers;

impl DescribeUsers {
    /// Build an item stream over users. All filter parameters are optional,
    /// so there is nothing to validate up front.
    pub(crate) fn orchestrate(
        handle: Arc<Handle>,
        input: DescribeUsersInput,
    ) -> ItemStream<UserSummary> {
        let client = handle.config.workdocs().clone();
        let organization_id = input.organization_id;
        let user_ids = input.user_ids;
        let query = input.query;
        let include = input.include;
        let order = input.order;
        let sort = input.sort;
        let fields = input.fields;
        let authentication_token = input.authentication_token;

        ItemStream::new(input.pagination, move |req| {
            let client = client.clone();
            let organization_id = organization_id.clone();
            let user_ids = user_ids.clone();
            let query = query.clone();
            let include = include.clone();
            let order = order.clone();
            let sort = sort.clone();
            let fields = fields.clone();
            let authentication_token = authentication_token.clone();
            Box::pin(async move {
                let resp = client
                    .describe_users()
                    .set_organization_id(organization_id)
                    .set_user_ids(user_ids)
                    .set_query(query)
                    .set_include(include)
                    .set_order(order)
                    .set_sort(sort)
                    .set_fields(fields)
                    .set_authentication_token(authentication_token)
                    .set_marker(req.token)
                    .set_limit(req.page_size)
                    .send()
                    .instrument(tracing::debug_span!("send-describe-users"))
                    .await?;

                Ok(Page {
                    items: resp
                        .users
                        .unwrap_or_default()
                        .into_iter()
                        .map(UserSummary::from)
                        .collect(),
                    next_token: resp.marker,
                })
            })
        })
    }
}

/// Fluent builders for `DescribeUsers`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `DescribeUsers` item stream.
    #[derive(Debug)]
    pub struct DescribeUsersFluentBuilder {
        handle: Arc<Handle>,
        inner: DescribeUsersInputBuilder,
    }

    impl DescribeUsersFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: DescribeUsersInputBuilder::default(),
            }
        }

        /// The ID of the organization.
        pub fn organization_id(mut self, id: impl Into<String>) -> Self {
            self.inner = self.inner.set_organization_id(Some(id.into()));
            self
        }

        /// Comma-separated list of user IDs to describe.
        pub fn user_ids(mut self, ids: impl Into<String>) -> Self {
            self.inner = self.inner.set_user_ids(Some(ids.into()));
            self
        }

        /// A query to filter users by name.
        pub fn query(mut self, query: impl Into<String>) -> Self {
            self.inner = self.inner.set_query(Some(query.into()));
            self
        }

        /// Filter by user state.
        pub fn include(mut self, include: UserFilterType) -> Self {
            self.inner = self.inner.set_include(Some(include));
            self
        }

        /// The order to sort results in.
        pub fn order(mut self, order: OrderType) -> Self {
            self.inner = self.inner.set_order(Some(order));
            self
        }

        /// The criterion to sort results by.
        pub fn sort(mut self, sort: UserSortType) -> Self {
            self.inner = self.inner.set_sort(Some(sort));
            self
        }

        /// Comma-separated list of additional payload fields.
        pub fn fields(mut self, fields: impl Into<String>) -> Self {
            self.inner = self.inner.set_fields(Some(fields.into()));
            self
        }

        /// Amazon WorkDocs authentication token.
        pub fn authentication_token(mut self, token: impl Into<String>) -> Self {
            self.inner = self.inner.set_authentication_token(Some(token.into()));
            self
        }

        /// The number of entries to request per page.
        pub fn page_size(mut self, page_size: i32) -> Self {
            self.inner = self.inner.page_size(page_size);
            self
        }

        /// Cap the total number of entries emitted.
        pub fn max_items(mut self, max_items: usize) -> Self {
            self.inner = self.inner.max_items(max_items);
            self
        }

        /// Resume iteration from a previously returned marker.
        pub fn starting_token(mut self, token: impl Into<String>) -> Self {
            self.inner = self.inner.starting_token(token);
            self
        }

        /// Build the item stream. No request is sent until the stream is polled.
        pub fn into_stream(mut self) -> ItemStream<UserSummary> {
            if self.inner.pagination.page_size.is_none() {
                self.inner.pagination.page_size = self.handle.default_page_size();
            }
            DescribeUsers::orchestrate(self.handle, self.inner.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_workdocs::operation::describe_users::DescribeUsersOutput;
    use aws_sdk_workdocs::types::User;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    use crate::test_util::client_with_workdocs;

    #[tokio::test]
    async fn test_describe_users_follows_marker() {
        let page1 = mock!(aws_sdk_workdocs::Client::describe_users)
            .match_requests(|r| {
                r.organization_id.as_deref() == Some("d-123") && r.marker.is_none()
            })
            .then_output(|| {
                DescribeUsersOutput::builder()
                    .users(User::builder().id("u-1").username("alice").build())
                    .users(User::builder().id("u-2").username("bob").build())
                    .marker("m1")
                    .build()
            });
        let page2 = mock!(aws_sdk_workdocs::Client::describe_users)
            .match_requests(|r| r.marker.as_deref() == Some("m1"))
            .then_output(|| {
                DescribeUsersOutput::builder()
                    .users(User::builder().id("u-3").username("carol").build())
                    .build()
            });
        let client = client_with_workdocs(mock_client!(
            aws_sdk_workdocs,
            RuleMode::Sequential,
            &[&page1, &page2]
        ));

        let users = client
            .describe_users()
            .organization_id("d-123")
            .into_stream()
            .collect()
            .await
            .unwrap();

        let names: Vec<&str> = users
            .iter()
            .filter_map(|u| u.username.as_deref())
            .collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn test_describe_users_starting_token_seeds_first_request() {
        let rule = mock!(aws_sdk_workdocs::Client::describe_users)
            .match_requests(|r| r.marker.as_deref() == Some("resume-here"))
            .then_output(|| {
                DescribeUsersOutput::builder()
                    .users(User::builder().id("u-9").build())
                    .build()
            });
        let client = client_with_workdocs(mock_client!(aws_sdk_workdocs, &[&rule]));

        let users = client
            .describe_users()
            .starting_token("resume-here")
            .into_stream()
            .collect()
            .await
            .unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id.as_deref(), Some("u-9"));
    }
}
