/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_workdocs::types::{FolderContentType, OrderType, ResourceSortType};
use tracing::Instrument;

use crate::client::Handle;
use crate::error;
use crate::paginate::{ItemStream, Page, PaginationInput};
use crate::types::{DocumentSummary, FolderContentItem, FolderSummary};

/// Input for the `DescribeFolderContents` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DescribeFolderContentsInput {
    /// The ID of the folder to list.
    pub folder_id: Option<String>,
    /// The criterion to sort results by.
    pub sort: Option<ResourceSortType>,
    /// The order to sort results in.
    pub order: Option<OrderType>,
    /// Restrict results to folders, documents, or both.
    pub content_type: Option<FolderContentType>,
    /// Additional payloads to include, e.g. `INITIALIZED` versions.
    pub include: Option<String>,
    /// Amazon WorkDocs authentication token, when not using IAM credentials.
    pub authentication_token: Option<String>,
    pub(crate) pagination: PaginationInput,
}

impl DescribeFolderContentsInput {
    /// Create a builder.
    pub fn builder() -> DescribeFolderContentsInputBuilder {
        DescribeFolderContentsInputBuilder::default()
    }
}

/// Builder for [`DescribeFolderContentsInput`].
#[derive(Debug, Clone, Default)]
pub struct DescribeFolderContentsInputBuilder {
    folder_id: Option<String>,
    sort: Option<ResourceSortType>,
    order: Option<OrderType>,
    content_type: Option<FolderContentType>,
    include: Option<String>,
    authentication_token: Option<String>,
    pagination: PaginationInput,
}

impl DescribeFolderContentsInputBuilder {
    /// The ID of the folder to list.
    pub fn folder_id(mut self, id: impl Into<String>) -> Self {
        self.folder_id = Some(id.into());
        self
    }

    /// The criterion to sort results by.
    pub fn set_sort(mut self, sort: Option<ResourceSortType>) -> Self {
        self.sort = sort;
        self
    }

    /// The order to sort results in.
    pub fn set_order(mut self, order: Option<OrderType>) -> Self {
        self.order = order;
        self
    }

    /// Restrict results to folders, documents, or both.
    pub fn set_content_type(mut self, content_type: Option<FolderContentType>) -> Self {
        self.content_type = content_type;
        self
    }

    /// Additional payloads to include.
    pub fn set_include(mut self, include: Option<String>) -> Self {
        self.include = include;
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
    pub fn build(self) -> DescribeFolderContentsInput {
        DescribeFolderContentsInput {
            folder_id: self.folder_id,
            sort: self.sort,
            order: self.order,
            content_type: self.content_type,
            include: self.include,
            authentication_token: self.authentication_token,
            pagination: self.pagination,
        }
    }
}

/// Operation struct for `DescribeFolderContents`
#[derive(Clone, Default, Debug)]
pub(crate) struct DescribeFolderContents;

impl DescribeFolderContents {
    /// Build an item stream over folder entries. The page size hint maps
    /// onto the service's `limit` parameter, the cursor onto `marker`.
    ///
    /// Within one page the service reports folders and documents in two
    /// separate arrays; they are emitted folders first, as returned.
    pub(crate) fn orchestrate(
        handle: Arc<Handle>,
        input: DescribeFolderContentsInput,
    ) -> ItemStream<FolderContentItem> {
        let folder_id = match input.folder_id {
            Some(id) => id,
            None => return ItemStream::failed(error::invalid_input("folder_id is required")),
        };
        let client = handle.config.workdocs().clone();
        let sort = input.sort;
        let order = input.order;
        let content_type = input.content_type;
        let include = input.include;
        let authentication_token = input.authentication_token;

        ItemStream::new(input.pagination, move |req| {
            let client = client.clone();
            let folder_id = folder_id.clone();
            let sort = sort.clone();
            let order = order.clone();
            let content_type = content_type.clone();
            let include = include.clone();
            let authentication_token = authentication_token.clone();
            Box::pin(async move {
                let resp = client
                    .describe_folder_contents()
                    .folder_id(folder_id)
                    .set_sort(sort)
                    .set_order(order)
                    .set_type(content_type)
                    .set_include(include)
                    .set_authentication_token(authentication_token)
                    .set_marker(req.token)
                    .set_limit(req.page_size)
                    .send()
                    .instrument(tracing::debug_span!("send-describe-folder-contents"))
                    .await?;

                let folders = resp
                    .folders
                    .unwrap_or_default()
                    .into_iter()
                    .map(|f| FolderContentItem::Folder(FolderSummary::from(f)));
                let documents = resp
                    .documents
                    .unwrap_or_default()
                    .into_iter()
                    .map(|d| FolderContentItem::Document(DocumentSummary::from(d)));

                Ok(Page {
                    items: folders.chain(documents).collect(),
                    next_token: resp.marker,
                })
            })
        })
    }
}

/// Fluent builders for `DescribeFolderContents`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `DescribeFolderContents` item stream.
    #[derive(Debug)]
    pub struct DescribeFolderContentsFluentBuilder {
        handle: Arc<Handle>,
        inner: DescribeFolderContentsInputBuilder,
    }

    impl DescribeFolderContentsFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: DescribeFolderContentsInputBuilder::default(),
            }
        }

        /// The ID of the folder to list.
        pub fn folder_id(mut self, id: impl Into<String>) -> Self {
            self.inner = self.inner.folder_id(id);
            self
        }

        /// The criterion to sort results by.
        pub fn sort(mut self, sort: ResourceSortType) -> Self {
            self.inner = self.inner.set_sort(Some(sort));
            self
        }

        /// The order to sort results in.
        pub fn order(mut self, order: OrderType) -> Self {
            self.inner = self.inner.set_order(Some(order));
            self
        }

        /// Restrict results to folders, documents, or both.
        pub fn content_type(mut self, content_type: FolderContentType) -> Self {
            self.inner = self.inner.set_content_type(Some(content_type));
            self
        }

        /// Additional payloads to include.
        pub fn include(mut self, include: impl Into<String>) -> Self {
            self.inner = self.inner.set_include(Some(include.into()));
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
        pub fn into_stream(mut self) -> ItemStream<FolderContentItem> {
            if self.inner.pagination.page_size.is_none() {
                self.inner.pagination.page_size = self.handle.default_page_size();
            }
            DescribeFolderContents::orchestrate(self.handle, self.inner.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_workdocs::operation::describe_folder_contents::DescribeFolderContentsOutput;
    use aws_sdk_workdocs::types::{DocumentMetadata, FolderMetadata};
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    use crate::test_util::client_with_workdocs;
    use crate::types::FolderContentItem;

    #[tokio::test]
    async fn test_folders_emitted_before_documents() {
        let page1 = mock!(aws_sdk_workdocs::Client::describe_folder_contents)
            .match_requests(|r| r.marker.is_none())
            .then_output(|| {
                DescribeFolderContentsOutput::builder()
                    .folders(FolderMetadata::builder().id("sub-1").build())
                    .documents(DocumentMetadata::builder().id("doc-1").build())
                    .marker("m1")
                    .build()
            });
        let page2 = mock!(aws_sdk_workdocs::Client::describe_folder_contents)
            .match_requests(|r| r.marker.as_deref() == Some("m1"))
            .then_output(|| {
                DescribeFolderContentsOutput::builder()
                    .documents(DocumentMetadata::builder().id("doc-2").build())
                    .build()
            });
        let client = client_with_workdocs(mock_client!(
            aws_sdk_workdocs,
            RuleMode::Sequential,
            &[&page1, &page2]
        ));

        let items = client
            .describe_folder_contents()
            .folder_id("root")
            .into_stream()
            .collect()
            .await
            .unwrap();

        let ids: Vec<String> = items
            .iter()
            .map(|item| match item {
                FolderContentItem::Folder(f) => f.id.clone().unwrap(),
                FolderContentItem::Document(d) => d.id.clone().unwrap(),
            })
            .collect();
        assert_eq!(ids, vec!["sub-1", "doc-1", "doc-2"]);
        assert!(matches!(items[0], FolderContentItem::Folder(_)));
    }
}
