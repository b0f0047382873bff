/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};
use crate::types::BranchSummary;

/// Input for the `DeleteBranch` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DeleteBranchInput {
    /// The name of the repository that contains the branch.
    pub repository_name: Option<String>,
    /// The name of the branch to delete.
    pub branch_name: Option<String>,
}

impl DeleteBranchInput {
    /// Create a builder.
    pub fn builder() -> DeleteBranchInputBuilder {
        DeleteBranchInputBuilder::default()
    }
}

/// Builder for [`DeleteBranchInput`].
#[derive(Debug, Clone, Default)]
pub struct DeleteBranchInputBuilder {
    repository_name: Option<String>,
    branch_name: Option<String>,
}

impl DeleteBranchInputBuilder {
    /// The name of the repository that contains the branch.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// The name of the branch to delete.
    pub fn branch_name(mut self, name: impl Into<String>) -> Self {
        self.branch_name = Some(name.into());
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> DeleteBranchInput {
        DeleteBranchInput {
            repository_name: self.repository_name,
            branch_name: self.branch_name,
        }
    }
}

/// Output of the `DeleteBranch` operation.
///
/// `deleted_branch` is `None` when the branch did not exist; deleting a
/// missing branch is not an error.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBranchOutput {
    /// Information about the branch that was deleted.
    pub deleted_branch: Option<BranchSummary>,
}

/// Operation struct for `DeleteBranch`
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteBranch;

impl DeleteBranch {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: DeleteBranchInput,
    ) -> Result<DeleteBranchOutput, Error> {
        let repository_name = input
            .repository_name
            .ok_or_else(|| error::invalid_input("repository_name is required"))?;
        let branch_name = input
            .branch_name
            .ok_or_else(|| error::invalid_input("branch_name is required"))?;

        let resp = handle
            .config
            .codecommit()
            .delete_branch()
            .repository_name(repository_name)
            .branch_name(branch_name)
            .send()
            .instrument(tracing::debug_span!("send-delete-branch"))
            .await?;

        Ok(DeleteBranchOutput {
            deleted_branch: resp.deleted_branch.map(BranchSummary::from),
        })
    }
}

/// Fluent builders for `DeleteBranch`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `DeleteBranch` request.
    #[derive(Debug)]
    pub struct DeleteBranchFluentBuilder {
        handle: Arc<Handle>,
        inner: DeleteBranchInputBuilder,
    }

    impl DeleteBranchFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: DeleteBranchInputBuilder::default(),
            }
        }

        /// The name of the repository that contains the branch.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// The name of the branch to delete.
        pub fn branch_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.branch_name(name);
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<DeleteBranchOutput, Error> {
            DeleteBranch::orchestrate(self.handle, self.inner.build()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_codecommit::operation::delete_branch::DeleteBranchOutput;
    use aws_smithy_mocks::{mock, mock_client};

    use crate::test_util::client_with_codecommit;

    #[tokio::test]
    async fn test_absent_deleted_branch_is_not_an_error() {
        let rule = mock!(aws_sdk_codecommit::Client::delete_branch)
            .then_output(|| DeleteBranchOutput::builder().build());
        let client = client_with_codecommit(mock_client!(aws_sdk_codecommit, &[&rule]));

        let output = client
            .delete_branch()
            .repository_name("demo")
            .branch_name("gone")
            .send()
            .await
            .unwrap();

        assert_eq!(output.deleted_branch, None);
    }
}
