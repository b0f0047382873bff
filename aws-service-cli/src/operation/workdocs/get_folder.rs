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
use crate::types::FolderSummary;

/// Input for the `GetFolder` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct GetFolderInput {
    /// The ID of the folder.
    pub folder_id: Option<String>,
    /// Set to include custom metadata in the response.
    pub include_custom_metadata: Option<bool>,
    /// Amazon WorkDocs authentication token, when not using IAM credentials.
    pub authentication_token: Option<String>,
}

impl GetFolderInput {
    /// Create a builder.
    pub fn builder() -> GetFolderInputBuilder {
        GetFolderInputBuilder::default()
    }
}

/// Builder for [`GetFolderInput`].
#[derive(Debug, Clone, Default)]
pub struct GetFolderInputBuilder {
    folder_id: Option<String>,
    include_custom_metadata: Option<bool>,
    authentication_token: Option<String>,
}

impl GetFolderInputBuilder {
    /// The ID of the folder.
    pub fn folder_id(mut self, id: impl Into<String>) -> Self {
        self.folder_id = Some(id.into());
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
    pub fn build(self) -> GetFolderInput {
        GetFolderInput {
            folder_id: self.folder_id,
            include_custom_metadata: self.include_custom_metadata,
            authentication_token: self.authentication_token,
        }
    }
}

/// Output of the `GetFolder` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFolderOutput {
    /// The folder's metadata.
    pub metadata: FolderSummary,
    /// Custom metadata on the folder, when requested.
    pub custom_metadata: Option<HashMap<String, String>>,
}

/// Operation struct for `GetFolder`
#[derive(Clone, Default, Debug)]
pub(crate) struct GetFolder;

impl GetFolder {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: GetFolderInput,
    ) -> Result<GetFolderOutput, Error> {
        let folder_id = input
            .folder_id
            .ok_or_else(|| error::invalid_input("folder_id is required"))?;

        let resp = handle
            .config
            .workdocs()
            .get_folder()
            .folder_id(folder_id)
            .set_include_custom_metadata(input.include_custom_metadata)
            .set_authentication_token(input.authentication_token)
            .send()
            .instrument(tracing::debug_span!("send-get-folder"))
            .await?;

        let metadata = resp
            .metadata
            .map(FolderSummary::from)
            .ok_or_else(|| error::missing_field("metadata"))?;

        Ok(GetFolderOutput {
            metadata,
            custom_metadata: resp.custom_metadata,
        })
    }
}

/// Fluent builders for `GetFolder`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `GetFolder` request.
    #[derive(Debug)]
    pub struct GetFolderFluentBuilder {
        handle: Arc<Handle>,
        inner: GetFolderInputBuilder,
    }

    impl GetFolderFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: GetFolderInputBuilder::default(),
            }
        }

        /// The ID of the folder.
        pub fn folder_id(mut self, id: impl Into<String>) -> Self {
            self.inner = self.inner.folder_id(id);
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
        pub async fn send(self) -> Result<GetFolderOutput, Error> {
            GetFolder::orchestrate(self.handle, self.inner.build()).await
        }
    }
}
