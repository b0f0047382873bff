/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};

/// Input for the `CreateBranch` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct CreateBranchInput {
    /// The name of the repository in which to create the branch.
    pub repository_name: Option<String>,
    /// The name of the new branch.
    pub branch_name: Option<String>,
    /// The ID of the commit the new branch points at.
    pub commit_id: Option<String>,
}

impl CreateBranchInput {
    /// Create a builder.
    pub fn builder() -> CreateBranchInputBuilder {
        CreateBranchInputBuilder::default()
    }
}

/// Builder for [`CreateBranchInput`].
#[derive(Debug, Clone, Default)]
pub struct CreateBranchInputBuilder {
    repository_name: Option<String>,
    branch_name: Option<String>,
    commit_id: Option<String>,
}

impl CreateBranchInputBuilder {
    /// The name of the repository in which to create the branch.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// The name of the new branch.
    pub fn branch_name(mut self, name: impl Into<String>) -> Self {
        self.branch_name = Some(name.into());
        self
    }

    /// The ID of the commit the new branch points at.
    pub fn commit_id(mut self, commit_id: impl Into<String>) -> Self {
        self.commit_id = Some(commit_id.into());
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> CreateBranchInput {
        CreateBranchInput {
            repository_name: self.repository_name,
            branch_name: self.branch_name,
            commit_id: self.commit_id,
        }
    }
}

/// Output of the `CreateBranch` operation. The service returns no payload.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchOutput {}

/// Operation struct for `CreateBranch`
#[derive(Clone, Default, Debug)]
pub(crate) struct CreateBranch;

impl CreateBranch {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: CreateBranchInput,
    ) -> Result<CreateBranchOutput, Error> {
        let repository_name = input
            .repository_name
            .ok_or_else(|| error::invalid_input("repository_name is required"))?;
        let branch_name = input
            .branch_name
            .ok_or_else(|| error::invalid_input("branch_name is required"))?;
        let commit_id = input
            .commit_id
            .ok_or_else(|| error::invalid_input("commit_id is required"))?;

        handle
            .config
            .codecommit()
            .create_branch()
            .repository_name(repository_name)
            .branch_name(branch_name)
            .commit_id(commit_id)
            .send()
            .instrument(tracing::debug_span!("send-create-branch"))
            .await?;

        Ok(CreateBranchOutput::default())
    }
}

/// Fluent builders for `CreateBranch`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `CreateBranch` request.
    #[derive(Debug)]
    pub struct CreateBranchFluentBuilder {
        handle: Arc<Handle>,
        inner: CreateBranchInputBuilder,
    }

    impl CreateBranchFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: CreateBranchInputBuilder::default(),
            }
        }

        /// The name of the repository in which to create the branch.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// The name of the new branch.
        pub fn branch_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.branch_name(name);
            self
        }

        /// The ID of the commit the new branch points at.
        pub fn commit_id(mut self, commit_id: impl Into<String>) -> Self {
            self.inner = self.inner.commit_id(commit_id);
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<CreateBranchOutput, Error> {
            CreateBranch::orchestrate(self.handle, self.inner.build()).await
        }
    }
}
