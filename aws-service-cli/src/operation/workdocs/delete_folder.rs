/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};

/// Input for the `DeleteFolder` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DeleteFolderInput {
    /// The ID of the folder to delete.
    pub folder_id: Option<String>,
    /// Amazon WorkDocs authentication token, when not using IAM credentials.
    pub authentication_token: Option<String>,
}

impl DeleteFolderInput {
    /// Create a builder.
    pub fn builder() -> DeleteFolderInputBuilder {
        DeleteFolderInputBuilder::default()
    }
}

/// Builder for [`DeleteFolderInput`].
#[derive(Debug, Clone, Default)]
pub struct DeleteFolderInputBuilder {
    folder_id: Option<String>,
    authentication_token: Option<String>,
}

impl DeleteFolderInputBuilder {
    /// The ID of the folder to delete.
    pub fn folder_id(mut self, id: impl Into<String>) -> Self {
        self.folder_id = Some(id.into());
        self
    }

    /// Amazon WorkDocs authentication token.
    pub fn set_authentication_token(mut self, token: Option<String>) -> Self {
        self.authentication_token = token;
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> DeleteFolderInput {
        DeleteFolderInput {
            folder_id: self.folder_id,
            authentication_token: self.authentication_token,
        }
    }
}

/// Output of the `DeleteFolder` operation. The service returns no payload.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFolderOutput {}

/// Operation struct for `DeleteFolder`
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteFolder;

impl DeleteFolder {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: DeleteFolderInput,
    ) -> Result<DeleteFolderOutput, Error> {
        let folder_id = input
            .folder_id
            .ok_or_else(|| error::invalid_input("folder_id is required"))?;

        handle
            .config
            .workdocs()
            .delete_folder()
            .folder_id(folder_id)
            .set_authentication_token(input.authentication_token)
            .send()
            .instrument(tracing::debug_span!("send-delete-folder"))
            .await?;

        Ok(DeleteFolderOutput::default())
    }
}

/// Fluent builders for `DeleteFolder`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `DeleteFolder` request.
    #[derive(Debug)]
    pub struct DeleteFolderFluentBuilder {
        handle: Arc<Handle>,
        inner: DeleteFolderInputBuilder,
    }

    impl DeleteFolderFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: DeleteFolderInputBuilder::default(),
            }
        }

        /// The ID of the folder to delete.
        pub fn folder_id(mut self, id: impl Into<String>) -> Self {
            self.inner = self.inner.folder_id(id);
            self
        }

        /// Amazon WorkDocs authentication token.
        pub fn authentication_token(mut self, token: impl Into<String>) -> Self {
            self.inner = self.inner.set_authentication_token(Some(token.into()));
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<DeleteFolderOutput, Error> {
            DeleteFolder::orchestrate(self.handle, self.inner.build()).await
        }
    }
}
