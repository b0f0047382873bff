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

/// Input for the `GetBranch` operation.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct GetBranchInput {
    /// The name of the repository that contains the branch.
    pub repository_name: Option<String>,
    /// The name of the branch.
    pub branch_name: Option<String>,
}

impl GetBranchInput {
    /// Create a builder.
    pub fn builder() -> GetBranchInputBuilder {
        GetBranchInputBuilder::default()
    }
}

/// Builder for [`GetBranchInput`].
#[derive(Debug, Clone, Default)]
pub struct GetBranchInputBuilder {
    repository_name: Option<String>,
    branch_name: Option<String>,
}

impl GetBranchInputBuilder {
    /// The name of the repository that contains the branch.
    pub fn repository_name(mut self, name: impl Into<String>) -> Self {
        self.repository_name = Some(name.into());
        self
    }

    /// The name of the branch.
    pub fn branch_name(mut self, name: impl Into<String>) -> Self {
        self.branch_name = Some(name.into());
        self
    }

    /// Consume the builder and construct the input.
    pub fn build(self) -> GetBranchInput {
        GetBranchInput {
            repository_name: self.repository_name,
            branch_name: self.branch_name,
        }
    }
}

/// Output of the `GetBranch` operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBranchOutput {
    /// The branch name and the commit it points at.
    pub branch: BranchSummary,
}

/// Operation struct for `GetBranch`
#[derive(Clone, Default, Debug)]
pub(crate) struct GetBranch;

impl GetBranch {
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: GetBranchInput,
    ) -> Result<GetBranchOutput, Error> {
        let repository_name = input
            .repository_name
            .ok_or_else(|| error::invalid_input("repository_name is required"))?;
        let branch_name = input
            .branch_name
            .ok_or_else(|| error::invalid_input("branch_name is required"))?;

        let resp = handle
            .config
            .codecommit()
            .get_branch()
            .repository_name(repository_name)
            .branch_name(branch_name)
            .send()
            .instrument(tracing::debug_span!("send-get-branch"))
            .await?;

        let branch = resp
            .branch
            .map(BranchSummary::from)
            .ok_or_else(|| error::missing_field("branch"))?;

        Ok(GetBranchOutput { branch })
    }
}

/// Fluent builders for `GetBranch`.
pub mod builders {
    use super::*;

    /// Fluent builder constructing a `GetBranch` request.
    #[derive(Debug)]
    pub struct GetBranchFluentBuilder {
        handle: Arc<Handle>,
        inner: GetBranchInputBuilder,
    }

    impl GetBranchFluentBuilder {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: GetBranchInputBuilder::default(),
            }
        }

        /// The name of the repository that contains the branch.
        pub fn repository_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.repository_name(name);
            self
        }

        /// The name of the branch.
        pub fn branch_name(mut self, name: impl Into<String>) -> Self {
            self.inner = self.inner.branch_name(name);
            self
        }

        /// Send the request.
        pub async fn send(self) -> Result<GetBranchOutput, Error> {
            GetBranch::orchestrate(self.handle, self.inner.build()).await
        }
    }
}
