/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::config::PageSize;
use crate::Config;

/// Client for wrapped AWS CodeCommit and Amazon WorkDocs operations.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, SDK clients, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// Get the concrete page size hint to use when an operation doesn't set one.
    pub(crate) fn default_page_size(&self) -> Option<i32> {
        match self.config.page_size() {
            PageSize::Auto => None,
            PageSize::Target(explicit) => Some(*explicit),
        }
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Get information about a CodeCommit repository.
    ///
    /// Constructs a fluent builder for the
    /// [`GetRepository`](crate::operation::codecommit::get_repository::builders::GetRepositoryFluentBuilder)
    /// operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &aws_service_cli::Client) -> Result<(), aws_service_cli::error::Error> {
    /// let repo = client
    ///     .get_repository()
    ///     .repository_name("my-repo")
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_repository(
        &self,
    ) -> crate::operation::codecommit::get_repository::builders::GetRepositoryFluentBuilder {
        crate::operation::codecommit::get_repository::builders::GetRepositoryFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Create a new CodeCommit repository.
    pub fn create_repository(
        &self,
    ) -> crate::operation::codecommit::create_repository::builders::CreateRepositoryFluentBuilder
    {
        crate::operation::codecommit::create_repository::builders::CreateRepositoryFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Delete a CodeCommit repository.
    pub fn delete_repository(
        &self,
    ) -> crate::operation::codecommit::delete_repository::builders::DeleteRepositoryFluentBuilder
    {
        crate::operation::codecommit::delete_repository::builders::DeleteRepositoryFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List CodeCommit repositories in the account.
    ///
    /// The returned builder produces an item stream that follows the
    /// service's `NextToken` cursor automatically.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &aws_service_cli::Client) -> Result<(), aws_service_cli::error::Error> {
    /// let mut repos = client.list_repositories().into_stream();
    /// while let Some(repo) = repos.next().await {
    ///     println!("{:?}", repo?.repository_name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_repositories(
        &self,
    ) -> crate::operation::codecommit::list_repositories::builders::ListRepositoriesFluentBuilder
    {
        crate::operation::codecommit::list_repositories::builders::ListRepositoriesFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Get information about a branch.
    pub fn get_branch(
        &self,
    ) -> crate::operation::codecommit::get_branch::builders::GetBranchFluentBuilder {
        crate::operation::codecommit::get_branch::builders::GetBranchFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Create a branch pointing at an existing commit.
    pub fn create_branch(
        &self,
    ) -> crate::operation::codecommit::create_branch::builders::CreateBranchFluentBuilder {
        crate::operation::codecommit::create_branch::builders::CreateBranchFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Delete a branch, unless it is the repository's default branch.
    pub fn delete_branch(
        &self,
    ) -> crate::operation::codecommit::delete_branch::builders::DeleteBranchFluentBuilder {
        crate::operation::codecommit::delete_branch::builders::DeleteBranchFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List the branches of a repository.
    pub fn list_branches(
        &self,
    ) -> crate::operation::codecommit::list_branches::builders::ListBranchesFluentBuilder {
        crate::operation::codecommit::list_branches::builders::ListBranchesFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Get information about a commit.
    pub fn get_commit(
        &self,
    ) -> crate::operation::codecommit::get_commit::builders::GetCommitFluentBuilder {
        crate::operation::codecommit::get_commit::builders::GetCommitFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List pull request IDs for a repository.
    pub fn list_pull_requests(
        &self,
    ) -> crate::operation::codecommit::list_pull_requests::builders::ListPullRequestsFluentBuilder
    {
        crate::operation::codecommit::list_pull_requests::builders::ListPullRequestsFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Get details of a WorkDocs document.
    pub fn get_document(
        &self,
    ) -> crate::operation::workdocs::get_document::builders::GetDocumentFluentBuilder {
        crate::operation::workdocs::get_document::builders::GetDocumentFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Get metadata of a WorkDocs folder.
    pub fn get_folder(
        &self,
    ) -> crate::operation::workdocs::get_folder::builders::GetFolderFluentBuilder {
        crate::operation::workdocs::get_folder::builders::GetFolderFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Create a WorkDocs folder.
    pub fn create_folder(
        &self,
    ) -> crate::operation::workdocs::create_folder::builders::CreateFolderFluentBuilder {
        crate::operation::workdocs::create_folder::builders::CreateFolderFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Permanently delete a WorkDocs folder and its contents.
    pub fn delete_folder(
        &self,
    ) -> crate::operation::workdocs::delete_folder::builders::DeleteFolderFluentBuilder {
        crate::operation::workdocs::delete_folder::builders::DeleteFolderFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List the subfolders and documents of a WorkDocs folder.
    ///
    /// The returned builder produces an item stream that follows the
    /// service's `Marker` cursor automatically.
    pub fn describe_folder_contents(
        &self,
    ) -> crate::operation::workdocs::describe_folder_contents::builders::DescribeFolderContentsFluentBuilder
    {
        crate::operation::workdocs::describe_folder_contents::builders::DescribeFolderContentsFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List WorkDocs users, optionally filtered by organization or query.
    pub fn describe_users(
        &self,
    ) -> crate::operation::workdocs::describe_users::builders::DescribeUsersFluentBuilder {
        crate::operation::workdocs::describe_users::builders::DescribeUsersFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// List the versions of a WorkDocs document.
    pub fn describe_document_versions(
        &self,
    ) -> crate::operation::workdocs::describe_document_versions::builders::DescribeDocumentVersionsFluentBuilder
    {
        crate::operation::workdocs::describe_document_versions::builders::DescribeDocumentVersionsFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
