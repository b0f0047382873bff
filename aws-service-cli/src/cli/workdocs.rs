/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_workdocs::types::{
    FolderContentType, OrderType, ResourceSortType, UserFilterType, UserSortType,
};
use clap::Subcommand;

use super::{render, PaginationArgs};
use crate::client::Client;
use crate::error::Error;

/// Amazon WorkDocs operations.
///
/// All commands accept `--authentication-token` for use with WorkDocs
/// application credentials instead of IAM.
#[derive(Debug, Subcommand)]
pub enum WorkDocsCommand {
    /// Get details of a document
    GetDocument {
        /// The ID of the document
        #[arg(long)]
        document_id: String,

        /// Include custom metadata in the response
        #[arg(long)]
        include_custom_metadata: bool,

        /// WorkDocs authentication token
        #[arg(long)]
        authentication_token: Option<String>,
    },

    /// Get metadata of a folder
    GetFolder {
        /// The ID of the folder
        #[arg(long)]
        folder_id: String,

        /// Include custom metadata in the response
        #[arg(long)]
        include_custom_metadata: bool,

        /// WorkDocs authentication token
        #[arg(long)]
        authentication_token: Option<String>,
    },

    /// Create a folder under an existing parent folder
    CreateFolder {
        /// The ID of the parent folder
        #[arg(long)]
        parent_folder_id: String,

        /// The name of the new folder
        #[arg(long)]
        name: Option<String>,

        /// WorkDocs authentication token
        #[arg(long)]
        authentication_token: Option<String>,
    },

    /// Permanently delete a folder and its contents
    DeleteFolder {
        /// The ID of the folder to delete
        #[arg(long)]
        folder_id: String,

        /// WorkDocs authentication token
        #[arg(long)]
        authentication_token: Option<String>,
    },

    /// List the subfolders and documents of a folder
    DescribeFolderContents {
        /// The ID of the folder to list
        #[arg(long)]
        folder_id: String,

        /// Sort criterion: DATE or NAME
        #[arg(long)]
        sort: Option<String>,

        /// Sort order: ASCENDING or DESCENDING
        #[arg(long)]
        order: Option<String>,

        /// Restrict results: ALL, DOCUMENT, or FOLDER
        #[arg(long = "type")]
        content_type: Option<String>,

        /// Additional payloads to include, e.g. INITIALIZED
        #[arg(long)]
        include: Option<String>,

        /// WorkDocs authentication token
        #[arg(long)]
        authentication_token: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// List users, optionally filtered by organization or query
    DescribeUsers {
        /// The ID of the organization
        #[arg(long)]
        organization_id: Option<String>,

        /// Comma-separated list of user IDs to describe
        #[arg(long)]
        user_ids: Option<String>,

        /// Filter users by name
        #[arg(long)]
        query: Option<String>,

        /// Filter by state: ALL or ACTIVE_PENDING
        #[arg(long)]
        include: Option<String>,

        /// Sort order: ASCENDING or DESCENDING
        #[arg(long)]
        order: Option<String>,

        /// Sort criterion, e.g. USER_NAME or STORAGE_USED
        #[arg(long)]
        sort: Option<String>,

        /// Comma-separated list of additional payload fields
        #[arg(long)]
        fields: Option<String>,

        /// WorkDocs authentication token
        #[arg(long)]
        authentication_token: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// List the versions of a document
    DescribeDocumentVersions {
        /// The ID of the document
        #[arg(long)]
        document_id: String,

        /// Additional version states to include, e.g. INITIALIZED
        #[arg(long)]
        include: Option<String>,

        /// Additional payload fields to include, e.g. SOURCE
        #[arg(long)]
        fields: Option<String>,

        /// WorkDocs authentication token
        #[arg(long)]
        authentication_token: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

pub(crate) async fn run(client: &Client, cmd: WorkDocsCommand) -> Result<(), Error> {
    match cmd {
        WorkDocsCommand::GetDocument {
            document_id,
            include_custom_metadata,
            authentication_token,
        } => {
            let mut builder = client.get_document().document_id(document_id);
            if include_custom_metadata {
                builder = builder.include_custom_metadata(true);
            }
            if let Some(token) = authentication_token {
                builder = builder.authentication_token(token);
            }
            render::unary(&builder.send().await?)
        }
        WorkDocsCommand::GetFolder {
            folder_id,
            include_custom_metadata,
            authentication_token,
        } => {
            let mut builder = client.get_folder().folder_id(folder_id);
            if include_custom_metadata {
                builder = builder.include_custom_metadata(true);
            }
            if let Some(token) = authentication_token {
                builder = builder.authentication_token(token);
            }
            render::unary(&builder.send().await?)
        }
        WorkDocsCommand::CreateFolder {
            parent_folder_id,
            name,
            authentication_token,
        } => {
            let mut builder = client.create_folder().parent_folder_id(parent_folder_id);
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(token) = authentication_token {
                builder = builder.authentication_token(token);
            }
            render::unary(&builder.send().await?)
        }
        WorkDocsCommand::DeleteFolder {
            folder_id,
            authentication_token,
        } => {
            let mut builder = client.delete_folder().folder_id(folder_id);
            if let Some(token) = authentication_token {
                builder = builder.authentication_token(token);
            }
            render::unary(&builder.send().await?)
        }
        WorkDocsCommand::DescribeFolderContents {
            folder_id,
            sort,
            order,
            content_type,
            include,
            authentication_token,
            pagination,
        } => {
            let mut builder = client.describe_folder_contents().folder_id(folder_id);
            if let Some(sort) = sort {
                builder = builder.sort(ResourceSortType::from(sort.as_str()));
            }
            if let Some(order) = order {
                builder = builder.order(OrderType::from(order.as_str()));
            }
            if let Some(content_type) = content_type {
                builder = builder.content_type(FolderContentType::from(content_type.as_str()));
            }
            if let Some(include) = include {
                builder = builder.include(include);
            }
            if let Some(token) = authentication_token {
                builder = builder.authentication_token(token);
            }
            if let Some(page_size) = pagination.page_size {
                builder = builder.page_size(page_size);
            }
            if let Some(max_items) = pagination.max_items {
                builder = builder.max_items(max_items);
            }
            if let Some(token) = pagination.starting_token {
                builder = builder.starting_token(token);
            }
            render::stream(builder.into_stream()).await
        }
        WorkDocsCommand::DescribeUsers {
            organization_id,
            user_ids,
            query,
            include,
            order,
            sort,
            fields,
            authentication_token,
            pagination,
        } => {
            let mut builder = client.describe_users();
            if let Some(id) = organization_id {
                builder = builder.organization_id(id);
            }
            if let Some(ids) = user_ids {
                builder = builder.user_ids(ids);
            }
            if let Some(query) = query {
                builder = builder.query(query);
            }
            if let Some(include) = include {
                builder = builder.include(UserFilterType::from(include.as_str()));
            }
            if let Some(order) = order {
                builder = builder.order(OrderType::from(order.as_str()));
            }
            if let Some(sort) = sort {
                builder = builder.sort(UserSortType::from(sort.as_str()));
            }
            if let Some(fields) = fields {
                builder = builder.fields(fields);
            }
            if let Some(token) = authentication_token {
                builder = builder.authentication_token(token);
            }
            if let Some(page_size) = pagination.page_size {
                builder = builder.page_size(page_size);
            }
            if let Some(max_items) = pagination.max_items {
                builder = builder.max_items(max_items);
            }
            if let Some(token) = pagination.starting_token {
                builder = builder.starting_token(token);
            }
            render::stream(builder.into_stream()).await
        }
        WorkDocsCommand::DescribeDocumentVersions {
            document_id,
            include,
            fields,
            authentication_token,
            pagination,
        } => {
            let mut builder = client.describe_document_versions().document_id(document_id);
            if let Some(include) = include {
                builder = builder.include(include);
            }
            if let Some(fields) = fields {
                builder = builder.fields(fields);
            }
            if let Some(token) = authentication_token {
                builder = builder.authentication_token(token);
            }
            if let Some(page_size) = pagination.page_size {
                builder = builder.page_size(page_size);
            }
            if let Some(max_items) = pagination.max_items {
                builder = builder.max_items(max_items);
            }
            if let Some(token) = pagination.starting_token {
                builder = builder.starting_token(token);
            }
            render::stream(builder.into_stream()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{Cli, Command};

    #[test]
    fn test_describe_folder_contents_args() {
        let cli = Cli::parse_from([
            "aws-service-cli",
            "workdocs",
            "describe-folder-contents",
            "--folder-id",
            "root",
            "--type",
            "DOCUMENT",
            "--order",
            "DESCENDING",
            "--starting-token",
            "m1",
        ]);
        let Command::Workdocs(super::WorkDocsCommand::DescribeFolderContents {
            folder_id,
            content_type,
            order,
            pagination,
            ..
        }) = cli.command
        else {
            panic!("wrong command parsed");
        };
        assert_eq!(folder_id, "root");
        assert_eq!(content_type.as_deref(), Some("DOCUMENT"));
        assert_eq!(order.as_deref(), Some("DESCENDING"));
        assert_eq!(pagination.starting_token.as_deref(), Some("m1"));
    }
}
