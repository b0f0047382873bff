/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::types::FolderSummary;

/// Input for the `CreateFolder` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct CreateFolderInput {
    /// The name of the new folder.
    pub name: Option<String>,
    /// The ID of the parent folder.
    pub parent_folder_id: Option<String>,
    /// Amazon WorkDocs authentication token, when not using IAM credentials.
    pub authentication_token: Option<String>,
}

impl CreateFolderInput {
    /// Create a builder.
    pub fn builder() -> CreateFolderInputBuilder {
        CreateFolderInputBuilder::default()
    }
}

/// Builder for [`CreateFolderInput`].
#[derive(Debug, Clone, Default)]
pub struct CreateFolderInputBuilder {
    name: Option<String>,
    parent_folder_id: Option<String>,
    authentication_token: Option<String>,
}

impl CreateFolderInputBuilder {
    /// The name of the new folder.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The ID of the parent folder.
    pub fn parent_folder_id(mut self, id: impl Into<String>) -> Self {
        self.parent_folder_id = Some(id.into());
        self
    }

    /// Amazon WorkDocs authentication token.
    pub fn set_authentication_token(mut self, token: Option<String>) -> Self {
        self.authentication_token = token;
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> CreateFolderInput {
        CreateFolderInput {
            name: self.name,
            parent_folder_id: self.parent_folder_id,
            authentication_token: self.authentication_token,
        }
    }
}

/// Output of the `CreateFolder` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderOutput {
    /// The new folder's metadata.
    pub metadata: FolderSummary,
}

/// Operation struct for `CreateFolder`
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateFolder;

impl CreateFolder {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: CreateFolderInput,
    ) -> Result<CreateFolderOutput, Error> {
        let parent_folder_id = input
            .parent_folder_id
            .ok_or_else(|| error::invalid_input("parent_folder_id is required"))?;

        let resp = handle
            .config
            .workdocs()
            .create_folder()
            .set_name(input.name)
            .parent_folder_id(parent_folder_id)
            .set_authentication_token(input.authentication_token)
            .send()
            .instrument(tracing::debug_span!("send-create-folder"))
            .await?;

        let metadata = resp
            .metadata
            .map(FolderSummary::from)
            .ok_or_else(|| error::missing_field("metadata"))?;

        Ok(CreateFolderOutput { metadata })
    }
}

/// Fluent builders for `CreateFolder`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `CreateFolder` request.
    #[derive(Debug)]
    pub struct CreateFolderFluentBuilder {
        handle: Arc<Handle>,
        inner: CreateFolderInputBuilder,
    }

    impl CreateFolderFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: CreateFolderInputBuilder::default(),
            }
        }

        /// The name of the new folder.
        pub fn name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.name(name);
            self
        }

        /// The ID of the parent folder.
        pub fn parent_folder_id(mut self, id: impl Into<String>) -> Self {
            self.inner = self.inner.parent_folder_id(id);
            self
        }

        /// Amazon WorkDocs authentication token.
        pub fn authentication_token(mut self, token: impl Into<String>) -> Self {
            self.inner = self.inner.set_authentication_token(Some(token.into()));
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<CreateFolderOutput, Error> {
            CreateFolder::orchestrate(self.handle, self.inner.build()).await
        }
    }
}
