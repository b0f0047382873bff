/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::types::CommitSummary;

/// Input for the `GetCommit` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct GetCommitInput {
    /// The name of the repository that contains the commit.
    pub repository_name: Option<String>,
    /// The full SHA ID of the commit.
    pub commit_id: Option<String>,
}

impl GetCommitInput {
    /// Create a builder.
    pub fn builder() -> GetCommitInputBuilder {
        GetCommitInputBuilder::default()
    }
}

/// Builder for [`GetCommitInput`].
#[derive(Debug, Clone, Default)]
pub struct GetCommitInputBuilder {
    repository_name: Option<String>,
    commit_id: Option<String>,
}

impl GetCommitInputBuilder {
    /// The name of the repository that contains the commit.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// The full SHA ID of the commit.
    pub fn commit_id(mut self, commit_id: impl Into<String>) -> Self {
        self.commit_id = Some(commit_id.into());
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> GetCommitInput {
        GetCommitInput {
            repository_name: self.repository_name,
            commit_id: self.commit_id,
        }
    }
}

/// Output of the `GetCommit` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCommitOutput {
    /// Information about the commit.
    pub commit: CommitSummary,
}

/// Operation struct for `GetCommit`
#[derive(Clone, Default, Debug)]
pub(crate) struct GetCommit;

impl GetCommit {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: GetCommitInput,
    ) -> Result<GetCommitOutput, Error> {
        let repository_name = input
            .repository_name
            .ok_or_else(|| error::invalid_input("repository_name is required"))?;
        let commit_id = input
            .commit_id
            .ok_or_else(|| error::invalid_input("commit_id is required"))?;

        let resp = handle
            .config
            .codecommit()
            .get_commit()
            .repository_name(repository_name)
            .commit_id(commit_id)
            .send()
            .instrument(tracing::debug_span!("send-get-commit"))
            .await?;

        let commit = resp
            .commit
            .map(CommitSummary::from)
            .ok_or_else(|| error::missing_field("commit"))?;

        Ok(GetCommitOutput { commit })
    }
}

/// Fluent builders for `GetCommit`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `GetCommit` request.
    #[derive(Debug)]
    pub struct GetCommitFluentBuilder {
        handle: Arc<Handle>,
        inner: GetCommitInputBuilder,
    }

    impl GetCommitFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: GetCommitInputBuilder::default(),
            }
        }

        /// The name of the repository that contains the commit.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// The full SHA ID of the commit.
        pub fn commit_id(mut self, commit_id: impl Into<String>) -> Self {
            self.inner = self.inner.commit_id(commit_id);
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<GetCommitOutput, Error> {
            GetCommit::orchestrate(self.handle, self.inner.build()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_codecommit::operation::get_commit::GetCommitOutput;
    use aws_sdk_codecommit::types::{Commit, UserInfo};
    use aws_smithy_mocks::{mock, mock_client};

    use crate::test_util::client_with_codecommit;

    #[tokio::test]
    async fn test_get_commit_projects_identities() {
        let rule = mock!(aws_sdk_codecommit::Client::get_commit).then_output(|| {
            GetCommitOutput::builder()
                .commit(
                    Commit::builder()
                        .commit_id("7449d609")
                        .tree_id("3fa1cee9")
                        .parents("a5f1ea32")
                        .message("fix flaky test")
                        .author(
                            UserInfo::builder()
                                .name("Mary Major")
                                .email("mary@example.com")
                                .build(),
                        )
                        .build(),
                )
                .build()
        });
        let client = client_with_codecommit(mock_client!(aws_sdk_codecommit, &[&rule]));

        let output = client
            .get_commit()
            .repository_name("demo")
            .commit_id("7449d609")
            .send()
            .await
            .unwrap();

        assert_eq!(output.commit.parents, vec!["a5f1ea32".to_owned()]);
        let author = output.commit.author.unwrap();
        assert_eq!(author.name.as_deref(), Some("Mary Major"));
    }
}
