/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::types::DocumentSummary;

/// Input for the `GetDocument` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct GetDocumentInput {
    /// The ID of the document.
    pub document_id: Option<String>,
    /// Set to include custom metadata in the response.
    pub include_custom_metadata: Option<bool>,
    /// Amazon WorkDocs authentication token, when not using IAM credentials.
    pub authentication_token: Option<String>,
}

impl GetDocumentInput {
    /// Create a builder.
    pub fn builder() -> GetDocumentInputBuilder {
        GetDocumentInputBuilder::default()
    }
}

/// Builder for [`GetDocumentInput`].
#[derive(Debug, Clone, Default)]
pub struct GetDocumentInputBuilder {
    document_id: Option<String>,
    include_custom_metadata: Option<bool>,
    authentication_token: Option<String>,
}

impl GetDocumentInputBuilder {
    /// The ID of the document.
    pub fn document_id(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    /// Set to include custom metadata in the response.
    pub fn include_custom_metadata(mut self, include: bool) -> Self {
        self.include_custom_metadata = Some(include);
        self
    }

    /// Amazon WorkDocs authentication token.
    pub fn set_authentication_token(mut self, token: Option<String>) -> Self {
        self.authentication_token = token;
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> GetDocumentInput {
        GetDocumentInput {
            document_id: self.document_id,
            include_custom_metadata: self.include_custom_metadata,
            authentication_token: self.authentication_token,
        }
    }
}

/// Output of the `GetDocument` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDocumentOutput {
    /// The document's metadata.
    pub metadata: DocumentSummary,
    /// Custom metadata on the document, when requested.
    pub custom_metadata: Option<HashMap<String, String>>,
}

/// Operation struct for `GetDocument`
#[derive(Clone, Default, Debug)]
pub(crate) struct GetDocument;

impl GetDocument {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: GetDocumentInput,
    ) -> Result<GetDocumentOutput, Error> {
        let document_id = input
            .document_id
            .ok_or_else(|| error::invalid_input("document_id is required"))?;

        let resp = handle
            .config
            .workdocs()
            .get_document()
            .document_id(document_id)
            .set_include_custom_metadata(input.include_custom_metadata)
            .set_authentication_token(input.authentication_token)
            .send()
            .instrument(tracing::debug_span!("send-get-document"))
            .await?;

        let metadata = resp
            .metadata
            .map(DocumentSummary::from)
            .ok_or_else(|| error::missing_field("metadata"))?;

        Ok(GetDocumentOutput {
            metadata,
            custom_metadata: resp.custom_metadata,
        })
    }
}

/// Fluent builders for `GetDocument`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `GetDocument` request.
    #[derive(Debug)]
    pub struct GetDocumentFluentBuilder {
        handle: Arc<Handle>,
        inner: GetDocumentInputBuilder,
    }

    impl GetDocumentFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: GetDocumentInputBuilder::default(),
            }
        }

        /// The ID of the document.
        pub fn document_id(mut self, id: impl Into<String>) -> Self {
            self.inner = self.inner.document_id(id);
            self
        }

        /// Set to include custom metadata in the response.
        pub fn include_custom_metadata(mut self, include: bool) -> Self {
            self.inner = self.inner.include_custom_metadata(include);
            self
        }

        /// Amazon WorkDocs authentication token.
        pub fn authentication_token(mut self, token: impl Into<String>) -> Self {
            self.inner = self.inner.set_authentication_token(Some(token.into()));
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<GetDocumentOutput, Error> {
            GetDocument::orchestrate(self.handle, self.inner.build()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_workdocs::operation::get_document::GetDocumentOutput;
    use aws_sdk_workdocs::types::{DocumentMetadata, DocumentVersionMetadata};
    use aws_smithy_mocks::{mock, mock_client};

    use crate::test_util::client_with_workdocs;

    #[tokio::test]
    async fn test_get_document_with_custom_metadata() {
        let rule = mock!(aws_sdk_workdocs::Client::get_document)
            .match_requests(|r| {
                r.document_id.as_deref() == Some("doc-1")
                    && r.include_custom_metadata == Some(true)
            })
            .then_output(|| {
                GetDocumentOutput::builder()
                    .metadata(
                        DocumentMetadata::builder()
                            .id("doc-1")
                            .latest_version_metadata(
                                DocumentVersionMetadata::builder()
                                    .id("v2")
                                    .name("report.pdf")
                                    .build(),
                            )
                            .build(),
                    )
                    .custom_metadata("classification", "internal")
                    .build()
            });
        let client = client_with_workdocs(mock_client!(aws_sdk_workdocs, &[&rule]));

        let output = client
            .get_document()
            .document_id("doc-1")
            .include_custom_metadata(true)
            .send()
            .await
            .unwrap();

        assert_eq!(output.metadata.id.as_deref(), Some("doc-1"));
        let latest = output.metadata.latest_version.unwrap();
        assert_eq!(latest.name.as_deref(), Some("report.pdf"));
        assert_eq!(
            output
                .custom_metadata
                .unwrap()
                .get("classification")
                .map(String::as_str),
            Some("internal")
        );
    }
}
