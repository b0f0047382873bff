/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::types::RepositorySummary;

/// Input for the `GetRepository` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct GetRepositoryInput {
    /// The name of the repository to get information about.
    pub repository_name: Option<String>,
}

impl GetRepositoryInput {
    /// Create a builder.
    pub fn builder() -> GetRepositoryInputBuilder {
        GetRepositoryInputBuilder::default()
    }
}

/// Builder for [`GetRepositoryInput`].
#[derive(Debug, Clone, Default)]
pub struct GetRepositoryInputBuilder {
    repository_name: Option<String>,
}

impl GetRepositoryInputBuilder {
    /// The name of the repository to get information about.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> GetRepositoryInput {
        GetRepositoryInput {
            repository_name: self.repository_name,
        }
    }
}

/// Output of the `GetRepository` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRepositoryOutput {
    /// Information about the repository.
    pub repository: RepositorySummary,
}

/// Operation struct for `GetRepository`
#[derive(Clone, Default, Debug)]
pub(crate) struct GetRepository;

impl GetRepository {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: GetRepositoryInput,
    ) -> Result<GetRepositoryOutput, Error> {
        let repository_name = input
            .repository_name
            .ok_or_else(|| error::invalid_input("repository_name is required"))?;

        let resp = handle
            .config
            .codecommit()
            .get_repository()
            .repository_name(repository_name)
            .send()
            .instrument(tracing::debug_span!("send-get-repository"))
            .await?;

        let repository = resp
            .repository_metadata
            .map(RepositorySummary::from)
            .ok_or_else(|| error::missing_field("repositoryMetadata"))?;

        Ok(GetRepositoryOutput { repository })
    }
}

/// Fluent builders for `GetRepository`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `GetRepository` request.
    #[derive(Debug)]
    pub struct GetRepositoryFluentBuilder {
        handle: Arc<Handle>,
        inner: GetRepositoryInputBuilder,
    }

    impl GetRepositoryFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: GetRepositoryInputBuilder::default(),
            }
        }

        /// The name of the repository to get information about.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<GetRepositoryOutput, Error> {
            GetRepository::orchestrate(self.handle, self.inner.build()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_codecommit::operation::get_repository::{
        GetRepositoryError, GetRepositoryOutput,
    };
    use aws_sdk_codecommit::types::error::RepositoryDoesNotExistException;
    use aws_sdk_codecommit::types::RepositoryMetadata;
    use aws_smithy_mocks::{mock, mock_client};
    use aws_smithy_types::error::ErrorMetadata;

    use crate::error::ErrorKind;
    use crate::test_util::client_with_codecommit;

    #[tokio::test]
    async fn test_get_repository_projects_metadata() {
        let rule = mock!(aws_sdk_codecommit::Client::get_repository)
            .match_requests(|r| r.repository_name.as_deref() == Some("demo"))
            .then_output(|| {
                GetRepositoryOutput::builder()
                    .repository_metadata(
                        RepositoryMetadata::builder()
                            .repository_name("demo")
                            .repository_id("8afe5d9d")
                            .default_branch("main")
                            .build(),
                    )
                    .build()
            });
        let client = client_with_codecommit(mock_client!(aws_sdk_codecommit, &[&rule]));

        let output = client
            .get_repository()
            .repository_name("demo")
            .send()
            .await
            .unwrap();

        assert_eq!(output.repository.repository_name.as_deref(), Some("demo"));
        assert_eq!(output.repository.default_branch.as_deref(), Some("main"));
    }

    #[tokio::test]
    async fn test_missing_repository_maps_to_not_found() {
        let rule = mock!(aws_sdk_codecommit::Client::get_repository).then_error(|| {
            GetRepositoryError::RepositoryDoesNotExistException(
                RepositoryDoesNotExistException::builder()
                    .message("demo does not exist")
                    .meta(
                        ErrorMetadata::builder()
                            .code("RepositoryDoesNotExistException")
                            .build(),
                    )
                    .build(),
            )
        });
        let client = client_with_codecommit(mock_client!(aws_sdk_codecommit, &[&rule]));

        let err = client
            .get_repository()
            .repository_name("demo")
            .send()
            .await
            .unwrap_err();

        assert_eq!(err.kind(), &ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_missing_name_is_input_invalid() {
        let client = client_with_codecommit(crate::test_util::stub_codecommit_client());

        let err = client.get_repository().send().await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);
    }
}
