/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tracing::Instrument;

use crate::client::Handle;
use crate::error;
use crate::paginate::{ItemStream, Page, PaginationInput};
use crate::types::DocumentVersionSummary;

/// Input for the `DescribeDocumentVersions` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DescribeDocumentVersionsInput {
    /// The ID of the document.
    pub document_id: Option<String>,
    /// Additional version states to include, e.g. `INITIALIZED`.
    pub include: Option<String>,
    /// Additional payload fields to include, e.g. `SOURCE` download URLs.
    pub fields: Option<String>,
    /// Amazon WorkDocs authentication token, when not using IAM credentials.
    pub authentication_token: Option<String>,
    pub(crate) pagination: PaginationInput,
}

impl DescribeDocumentVersionsInput {
    /// Create a builder.
    pub fn builder() -> DescribeDocumentVersionsInputBuilder {
        DescribeDocumentVersionsInputBuilder::default()
    }
}

/// Builder for [`DescribeDocumentVersionsInput`].
#[derive(Debug, Clone, Default)]
pub struct DescribeDocumentVersionsInputBuilder {
    document_id: Option<String>,
    include: Option<String>,
    fields: Option<String>,
    authentication_token: Option<String>,
    pagination: PaginationInput,
}

impl DescribeDocumentVersionsInputBuilder {
    /// The ID of the document.
    pub fn document_id(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    /// Additional version states to include.
    pub fn set_include(mut self, include: Option<String>) -> Self {
        self.include = include;
        self
    }

    /// Additional payload fields to include.
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
    pub fn build(self) -> DescribeDocumentVersionsInput {
        DescribeDocumentVersionsInput {
            document_id: self.document_id,
            include: self.include,
            fields: self.fields,
            authentication_token: self.authentication_token,
            pagination: self.pagination,
        }
    }
}

/// Operation struct for `DescribeDocumentVersions`
#[derive(Clone, Default, Debug)]
pub(crate) struct DescribeDocumentVersions;

impl DescribeDocumentVersions {
    pub(crate) fn orchestrate(
        handle: Arc<Handle>,
        input: DescribeDocumentVersionsInput,
    ) -> ItemStream<DocumentVersionSummary> {
        let document_id = match input.document_id {
            Some(id) => id,
            None => return ItemStream::failed(error::invalid_input("document_id is required")),
        };
        let client = handle.config.workdocs().clone();
        let include = input.include;
        let fields = input.fields;
        let authentication_token = input.authentication_token;

        ItemStream::new(input.pagination, move |req| {
            let client = client.clone();
            let document_id = document_id.clone();
            let include = include.clone();
            let fields = fields.clone();
            let authentication_token = authentication_token.clone();
            Box::pin(async move {
                let resp = client
                    .describe_document_versions()
                    .document_id(document_id)
                    .set_include(include)
                    .set_fields(fields)
                    .set_authentication_token(authentication_token)
                    .set_marker(req.token)
                    .set_limit(req.page_size)
                    .send()
                    .instrument(tracing::debug_span!("send-describe-document-versions"))
                    .await?;

                Ok(Page {
                    items: resp
                        .document_versions
                        .unwrap_or_default()
                        .into_iter()
                        .map(DocumentVersionSummary::from)
                        .collect(),
                    next_token: resp.marker,
                })
            })
        })
    }
}

/// Fluent builders for `DescribeDocumentVersions`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `DescribeDocumentVersions` item stream.
    #[derive(Debug)]
    pub struct DescribeDocumentVersionsFluentBuilder {
        handle: Arc<Handle>,
        inner: DescribeDocumentVersionsInputBuilder,
    }

    impl DescribeDocumentVersionsFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: DescribeDocumentVersionsInputBuilder::default(),
            }
        }

        /// The ID of the document.
        pub fn document_id(mut self, id: impl Into<String>) -> Self {
            self.inner = self.inner.document_id(id);
            self
        }

        /// Additional version states to include.
        pub fn include(mut self, include: impl Into<String>) -> Self {
            self.inner = self.inner.set_include(Some(include.into()));
            self
        }

        /// Additional payload fields to include.
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
        pub fn into_stream(mut self) -> ItemStream<DocumentVersionSummary> {
            if self.inner.pagination.page_size.is_none() {
                self.inner.pagination.page_size = self.handle.default_page_size();
            }
            DescribeDocumentVersions::orchestrate(self.handle, self.inner.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_workdocs::operation::describe_document_versions::DescribeDocumentVersionsOutput;
    use aws_sdk_workdocs::types::DocumentVersionMetadata;
    use aws_smithy_mocks::{mock, mock_client};

    use crate::error::ErrorKind;
    use crate::test_util::client_with_workdocs;

    #[tokio::test]
    async fn test_limit_reflects_max_items_remaining() {
        let rule = mock!(aws_sdk_workdocs::Client::describe_document_versions)
            .match_requests(|r| {
                r.document_id.as_deref() == Some("doc-1") && r.limit == Some(2)
            })
            .then_output(|| {
                DescribeDocumentVersionsOutput::builder()
                    .document_versions(DocumentVersionMetadata::builder().id("v1").build())
                    .document_versions(DocumentVersionMetadata::builder().id("v2").build())
                    .marker("more")
                    .build()
            });
        let client = client_with_workdocs(mock_client!(aws_sdk_workdocs, &[&rule]));

        let versions = client
            .describe_document_versions()
            .document_id("doc-1")
            .page_size(50)
            .max_items(2)
            .into_stream()
            .collect()
            .await
            .unwrap();

        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1].id.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_missing_document_id_fails_without_request() {
        let client = client_with_workdocs(crate::test_util::stub_workdocs_client());

        let mut stream = client.describe_document_versions().into_stream();
        let err = stream.next().await.unwrap().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);
        assert!(stream.next().await.is_none());
    }
}
