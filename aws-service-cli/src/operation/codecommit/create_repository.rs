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
use crate::types::RepositorySummary;

/// Input for the `CreateRepository` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct CreateRepositoryInput {
    /// The name of the new repository. Must be unique in the account.
    pub repository_name: Option<String>,
    /// A comment or description about the new repository.
    pub repository_description: Option<String>,
    /// Tag key/value pairs to attach to the repository.
    pub tags: Option<HashMap<String, String>>,
}

impl CreateRepositoryInput {
    /// Create a builder.
    pub fn builder() -> CreateRepositoryInputBuilder {
        CreateRepositoryInputBuilder::default()
    }
}

/// Builder for [`CreateRepositoryInput`].
#[derive(Debug, Clone, Default)]
pub struct CreateRepositoryInputBuilder {
    repository_name: Option<String>,
    repository_description: Option<String>,
    tags: Option<HashMap<String, String>>,
}

impl CreateRepositoryInputBuilder {
    /// The name of the new repository.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// A comment or description about the new repository.
    pub fn repository_description(mut self, description: impl Into<String>) -> Self {
        self.repository_description = Some(description.into());
        self
    }

    /// Tag key/value pairs to attach to the repository.
    pub fn set_tags(mut self, tags: Option<HashMap<String, String>>) -> Self {
        self.tags = tags;
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> CreateRepositoryInput {
        CreateRepositoryInput {
            repository_name: self.repository_name,
            repository_description: self.repository_description,
            tags: self.tags,
        }
    }
}

/// Output of the `CreateRepository` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryOutput {
    /// Information about the newly created repository.
    pub repository: RepositorySummary,
}

/// Operation struct for `CreateRepository`
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateRepository;

impl CreateRepository {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: CreateRepositoryInput,
    ) -> Result<CreateRepositoryOutput, Error> {
        let repository_name = input
            .repository_name
            .ok_or_else(|| error::invalid_input("repository_name is required"))?;

        let resp = handle
            .config
            .codecommit()
            .create_repository()
            .repository_name(repository_name)
            .set_repository_description(input.repository_description)
            .set_tags(input.tags)
            .send()
            .instrument(tracing::debug_span!("send-create-repository"))
            .await?;

        let repository = resp
            .repository_metadata
            .map(RepositorySummary::from)
            .ok_or_else(|| error::missing_field("repositoryMetadata"))?;

        Ok(CreateRepositoryOutput { repository })
    }
}

/// Fluent builders for `CreateRepository`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `CreateRepository` request.
    #[derive(Debug)]
    pub struct CreateRepositoryFluentBuilder {
        handle: Arc<Handle>,
        inner: CreateRepositoryInputBuilder,
    }

    impl CreateRepositoryFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: CreateRepositoryInputBuilder::default(),
            }
        }

        /// The name of the new repository.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// A comment or description about the new repository.
        pub fn repository_description(mut self, description: impl Into<String>) -> Self {
            self.inner = self.inner.repository_description(description);
            self
        }

        /// Tag key/value pairs to attach to the repository.
        pub fn set_tags(mut self, tags: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_tags(tags);
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<CreateRepositoryOutput, Error> {
            CreateRepository::orchestrate(self.handle, self.inner.build()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_codecommit::operation::create_repository::CreateRepositoryOutput;
    use aws_sdk_codecommit::types::RepositoryMetadata;
    use aws_smithy_mocks::{mock, mock_client};

    use crate::test_util::client_with_codecommit;

    #[tokio::test]
    async fn test_create_repository_copies_fields() {
        let rule = mock!(aws_sdk_codecommit::Client::create_repository)
            .match_requests(|r| {
                r.repository_name.as_deref() == Some("fresh")
                    && r.repository_description.as_deref() == Some("a new repo")
                    && r.tags
                        .as_ref()
                        .is_some_and(|t| t.get("team").map(String::as_str) == Some("tools"))
            })
            .then_output(|| {
                CreateRepositoryOutput::builder()
                    .repository_metadata(
                        RepositoryMetadata::builder()
                            .repository_name("fresh")
                            .repository_id("0c74f1f2")
                            .build(),
                    )
                    .build()
            });
        let client = client_with_codecommit(mock_client!(aws_sdk_codecommit, &[&rule]));

        let output = client
            .create_repository()
            .repository_name("fresh")
            .repository_description("a new repo")
            .set_tags(Some(
                [("team".to_owned(), "tools".to_owned())].into_iter().collect(),
            ))
            .send()
            .await
            .unwrap();

        assert_eq!(output.repository.repository_id.as_deref(), Some("0c74f1f2"));
    }
}
