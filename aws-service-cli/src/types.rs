/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Plain output types projected from the SDK response model.
//!
//! Everything here serializes as camelCase JSON for the output pipeline.
//! Timestamps project to fractional epoch seconds.

use aws_smithy_types::DateTime;
use serde::Serialize;

fn epoch(ts: Option<DateTime>) -> Option<f64> {
    ts.map(|t| t.as_secs_f64())
}

/// Full details of a CodeCommit repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    /// The ID of the AWS account associated with the repository.
    pub account_id: Option<String>,
    /// The ID of the repository.
    pub repository_id: Option<String>,
    /// The repository's name.
    pub repository_name: Option<String>,
    /// A comment or description about the repository.
    pub repository_description: Option<String>,
    /// The repository's default branch name.
    pub default_branch: Option<String>,
    /// When the repository was last modified, in epoch seconds.
    pub last_modified_date: Option<f64>,
    /// When the repository was created, in epoch seconds.
    pub creation_date: Option<f64>,
    /// The URL to use for cloning the repository over HTTPS.
    pub clone_url_http: Option<String>,
    /// The URL to use for cloning the repository over SSH.
    pub clone_url_ssh: Option<String>,
    /// The Amazon Resource Name (ARN) of the repository.
    pub arn: Option<String>,
}

impl From<aws_sdk_codecommit::types::RepositoryMetadata> for RepositorySummary {
    fn from(value: aws_sdk_codecommit::types::RepositoryMetadata) -> Self {
        Self {
            account_id: value.account_id,
            repository_id: value.repository_id,
            repository_name: value.repository_name,
            repository_description: value.repository_description,
            default_branch: value.default_branch,
            last_modified_date: epoch(value.last_modified_date),
            creation_date: epoch(value.creation_date),
            clone_url_http: value.clone_url_http,
            clone_url_ssh: value.clone_url_ssh,
            arn: value.arn,
        }
    }
}

/// Repository name/ID pair as returned by `ListRepositories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNameId {
    /// The repository's name.
    pub repository_name: Option<String>,
    /// The ID of the repository.
    pub repository_id: Option<String>,
}

impl From<aws_sdk_codecommit::types::RepositoryNameIdPair> for RepositoryNameId {
    fn from(value: aws_sdk_codecommit::types::RepositoryNameIdPair) -> Self {
        Self {
            repository_name: value.repository_name,
            repository_id: value.repository_id,
        }
    }
}

/// A branch name and the commit it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummary {
    /// The branch's name.
    pub branch_name: Option<String>,
    /// The ID of the last commit made to the branch.
    pub commit_id: Option<String>,
}

impl From<aws_sdk_codecommit::types::BranchInfo> for BranchSummary {
    fn from(value: aws_sdk_codecommit::types::BranchInfo) -> Self {
        Self {
            branch_name: value.branch_name,
            commit_id: value.commit_id,
        }
    }
}

/// Who authored or committed a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitIdentity {
    /// Name of the author or committer.
    pub name: Option<String>,
    /// Email address of the author or committer.
    pub email: Option<String>,
    /// Date of the action, as the service reports it.
    pub date: Option<String>,
}

impl From<aws_sdk_codecommit::types::UserInfo> for CommitIdentity {
    fn from(value: aws_sdk_codecommit::types::UserInfo) -> Self {
        Self {
            name: value.name,
            email: value.email,
            date: value.date,
        }
    }
}

/// A single commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitSummary {
    /// The full SHA ID of the commit.
    pub commit_id: Option<String>,
    /// The tree ID for the commit.
    pub tree_id: Option<String>,
    /// Parent commit IDs; empty for a root commit.
    pub parents: Vec<String>,
    /// The commit message.
    pub message: Option<String>,
    /// The commit's author.
    pub author: Option<CommitIdentity>,
    /// Who committed the change.
    pub committer: Option<CommitIdentity>,
}

impl From<aws_sdk_codecommit::types::Commit> for CommitSummary {
    fn from(value: aws_sdk_codecommit::types::Commit) -> Self {
        Self {
            commit_id: value.commit_id,
            tree_id: value.tree_id,
            parents: value.parents.unwrap_or_default(),
            message: value.message,
            author: value.author.map(CommitIdentity::from),
            committer: value.committer.map(CommitIdentity::from),
        }
    }
}

/// A WorkDocs folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    /// The ID of the folder.
    pub id: Option<String>,
    /// The folder's name.
    pub name: Option<String>,
    /// The ID of the user who created the folder.
    pub creator_id: Option<String>,
    /// The ID of the parent folder.
    pub parent_folder_id: Option<String>,
    /// When the folder was created, in epoch seconds.
    pub created_timestamp: Option<f64>,
    /// When the folder was last modified, in epoch seconds.
    pub modified_timestamp: Option<f64>,
    /// The resource state of the folder (`ACTIVE`, `RECYCLED`, ...).
    pub resource_state: Option<String>,
    /// Size of the folder's content in bytes.
    pub size: Option<i64>,
    /// Size of the latest versions of the folder's content in bytes.
    pub latest_version_size: Option<i64>,
}

impl From<aws_sdk_workdocs::types::FolderMetadata> for FolderSummary {
    fn from(value: aws_sdk_workdocs::types::FolderMetadata) -> Self {
        Self {
            id: value.id,
            name: value.name,
            creator_id: value.creator_id,
            parent_folder_id: value.parent_folder_id,
            created_timestamp: epoch(value.created_timestamp),
            modified_timestamp: epoch(value.modified_timestamp),
            resource_state: value.resource_state.map(|s| s.as_str().to_owned()),
            size: value.size,
            latest_version_size: value.latest_version_size,
        }
    }
}

/// A single version of a WorkDocs document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVersionSummary {
    /// The ID of the version.
    pub id: Option<String>,
    /// The name of the version.
    pub name: Option<String>,
    /// The content type of the document.
    pub content_type: Option<String>,
    /// The size of the document version in bytes.
    pub size: Option<i64>,
    /// The status of the document version (`ACTIVE`, `INITIALIZED`, ...).
    pub status: Option<String>,
    /// When the version was created, in epoch seconds.
    pub created_timestamp: Option<f64>,
    /// When the version was last modified, in epoch seconds.
    pub modified_timestamp: Option<f64>,
    /// The ID of the user who created the version.
    pub creator_id: Option<String>,
}

impl From<aws_sdk_workdocs::types::DocumentVersionMetadata> for DocumentVersionSummary {
    fn from(value: aws_sdk_workdocs::types::DocumentVersionMetadata) -> Self {
        Self {
            id: value.id,
            name: value.name,
            content_type: value.content_type,
            size: value.size,
            status: value.status.map(|s| s.as_str().to_owned()),
            created_timestamp: epoch(value.created_timestamp),
            modified_timestamp: epoch(value.modified_timestamp),
            creator_id: value.creator_id,
        }
    }
}

/// A WorkDocs document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// The ID of the document.
    pub id: Option<String>,
    /// The ID of the user who created the document.
    pub creator_id: Option<String>,
    /// The ID of the parent folder.
    pub parent_folder_id: Option<String>,
    /// When the document was created, in epoch seconds.
    pub created_timestamp: Option<f64>,
    /// When the document was last modified, in epoch seconds.
    pub modified_timestamp: Option<f64>,
    /// The resource state of the document (`ACTIVE`, `RECYCLED`, ...).
    pub resource_state: Option<String>,
    /// The latest version of the document.
    pub latest_version: Option<DocumentVersionSummary>,
}

impl From<aws_sdk_workdocs::types::DocumentMetadata> for DocumentSummary {
    fn from(value: aws_sdk_workdocs::types::DocumentMetadata) -> Self {
        Self {
            id: value.id,
            creator_id: value.creator_id,
            parent_folder_id: value.parent_folder_id,
            created_timestamp: epoch(value.created_timestamp),
            modified_timestamp: epoch(value.modified_timestamp),
            resource_state: value.resource_state.map(|s| s.as_str().to_owned()),
            latest_version: value.latest_version_metadata.map(DocumentVersionSummary::from),
        }
    }
}

/// A WorkDocs user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// The ID of the user.
    pub id: Option<String>,
    /// The user's login name.
    pub username: Option<String>,
    /// The user's email address.
    pub email_address: Option<String>,
    /// The user's given name.
    pub given_name: Option<String>,
    /// The user's surname.
    pub surname: Option<String>,
    /// The ID of the organization the user belongs to.
    pub organization_id: Option<String>,
    /// The ID of the user's root folder.
    pub root_folder_id: Option<String>,
    /// The user's status (`ACTIVE`, `INACTIVE`, `PENDING`).
    pub status: Option<String>,
    /// The user's type (`USER`, `ADMIN`, ...).
    pub user_type: Option<String>,
    /// When the user was created, in epoch seconds.
    pub created_timestamp: Option<f64>,
}

impl From<aws_sdk_workdocs::types::User> for UserSummary {
    fn from(value: aws_sdk_workdocs::types::User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email_address: value.email_address,
            given_name: value.given_name,
            surname: value.surname,
            organization_id: value.organization_id,
            root_folder_id: value.root_folder_id,
            status: value.status.map(|s| s.as_str().to_owned()),
            user_type: value.r#type.map(|t| t.as_str().to_owned()),
            created_timestamp: epoch(value.created_timestamp),
        }
    }
}

/// One entry of a folder listing: either a subfolder or a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum FolderContentItem {
    /// A subfolder.
    Folder(FolderSummary),
    /// A document.
    Document(DocumentSummary),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_projection() {
        let metadata = aws_sdk_codecommit::types::RepositoryMetadata::builder()
            .repository_name("demo")
            .repository_id("12345")
            .clone_url_http("https://git-codecommit.us-east-1.amazonaws.com/v1/repos/demo")
            .creation_date(DateTime::from_secs(1_700_000_000))
            .build();

        let summary = RepositorySummary::from(metadata);
        assert_eq!(summary.repository_name.as_deref(), Some("demo"));
        assert_eq!(summary.creation_date, Some(1_700_000_000.0));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["repositoryName"], "demo");
        assert_eq!(json["repositoryId"], "12345");
    }

    #[test]
    fn test_folder_content_item_tagging() {
        let item = FolderContentItem::Document(DocumentSummary::from(
            aws_sdk_workdocs::types::DocumentMetadata::builder()
                .id("doc-1")
                .build(),
        ));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["kind"], "Document");
        assert_eq!(json["id"], "doc-1");
    }
}
