/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};

/// Input for the `DeleteRepository` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DeleteRepositoryInput {
    /// The name of the repository to delete.
    pub repository_name: Option<String>,
}

impl DeleteRepositoryInput {
    /// Create a builder.
    pub fn builder() -> DeleteRepositoryInputBuilder {
        DeleteRepositoryInputBuilder::default()
    }
}

/// Builder for [`DeleteRepositoryInput`].
#[derive(Debug, Clone, Default)]
pub struct DeleteRepositoryInputBuilder {
    repository_name: Option<String>,
}

impl DeleteRepositoryInputBuilder {
    /// The name of the repository to delete.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> DeleteRepositoryInput {
        DeleteRepositoryInput {
            repository_name: self.repository_name,
        }
    }
}

/// Output of the `DeleteRepository` operation.
///
/// `repository_id` is `None` when the named repository did not exist;
/// deleting a missing repository is not an error.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRepositoryOutput {
    /// The ID of the repository that was deleted.
    pub repository_id: Option<String>,
}

/// Operation struct for `DeleteRepository`
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteRepository;

impl DeleteRepository {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: DeleteRepositoryInput,
    ) -> Result<DeleteRepositoryOutput, Error> {
        let repository_name = input
            .repository_name
            .ok_or_else(|| error::invalid_input("repository_name is required"))?;

        let resp = handle
            .config
            .codecommit()
            .delete_repository()
            .repository_name(repository_name)
            .send()
            .instrument(tracing::debug_span!("send-delete-repository"))
            .await?;

        Ok(DeleteRepositoryOutput {
            repository_id: resp.repository_id,
        })
    }
}

/// Fluent builders for `DeleteRepository`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `DeleteRepository` request.
    #[derive(Debug)]
    pub struct DeleteRepositoryFluentBuilder {
        handle: Arc<Handle>,
        inner: DeleteRepositoryInputBuilder,
    }

    impl DeleteRepositoryFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: DeleteRepositoryInputBuilder::default(),
            }
        }

        /// The name of the repository to delete.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<DeleteRepositoryOutput, Error> {
            DeleteRepository::orchestrate(self.handle, self.inner.build()).await
        }
    }
}
