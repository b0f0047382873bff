/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_sdk_codecommit::types::{OrderEnum, PullRequestStatusEnum, SortByEnum};
use clap::Subcommand;

use super::{render, CursorArgs, PaginationArgs};
use crate::client::Client;
use crate::error::Error;

/// AWS CodeCommit operations.
#[derive(Debug, Subcommand)]
pub enum CodeCommitCommand {
    /// Get information about a repository
    GetRepository {
        /// The name of the repository
        #[arg(long)]
        repository_name: String,
    },

    /// Create a new repository
    CreateRepository {
        /// The name of the new repository
        #[arg(long)]
        repository_name: String,

        /// A comment or description about the new repository
        #[arg(long)]
        repository_description: Option<String>,

        /// Tag to attach to the repository, repeatable
        #[arg(long = "tag", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        tags: Vec<(String, String)>,
    },

    /// Delete a repository and all of its contents
    DeleteRepository {
        /// The name of the repository to delete
        #[arg(long)]
        repository_name: String,
    },

    /// List repositories in the account
    ListRepositories {
        /// Sort criterion: repositoryName or lastModifiedDate
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort order: ascending or descending
        #[arg(long)]
        order: Option<String>,

        #[command(flatten)]
        cursor: CursorArgs,
    },

    /// Get information about a branch
    GetBranch {
        /// The name of the repository
        #[arg(long)]
        repository_name: String,

        /// The name of the branch
        #[arg(long)]
        branch_name: String,
    },

    /// Create a branch pointing at an existing commit
    CreateBranch {
        /// The name of the repository
        #[arg(long)]
        repository_name: String,

        /// The name of the new branch
        #[arg(long)]
        branch_name: String,

        /// The ID of the commit the branch points to
        #[arg(long)]
        commit_id: String,
    },

    /// Delete a branch, unless it is the repository's default branch
    DeleteBranch {
        /// The name of the repository
        #[arg(long)]
        repository_name: String,

        /// The name of the branch to delete
        #[arg(long)]
        branch_name: String,
    },

    /// List the branches of a repository
    ListBranches {
        /// The name of the repository
        #[arg(long)]
        repository_name: String,

        #[command(flatten)]
        cursor: CursorArgs,
    },

    /// Get information about a commit
    GetCommit {
        /// The name of the repository
        #[arg(long)]
        repository_name: String,

        /// The full commit ID
        #[arg(long)]
        commit_id: String,
    },

    /// List pull request IDs for a repository
    ListPullRequests {
        /// The name of the repository
        #[arg(long)]
        repository_name: String,

        /// Only pull requests created by this user ARN
        #[arg(long)]
        author_arn: Option<String>,

        /// Filter by status: OPEN or CLOSED
        #[arg(long)]
        pull_request_status: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}

pub(crate) async fn run(client: &Client, cmd: CodeCommitCommand) -> Result<(), Error> {
    match cmd {
        CodeCommitCommand::GetRepository { repository_name } => {
            let output = client
                .get_repository()
                .repository_name(repository_name)
                .send()
                .await?;
            render::unary(&output)
        }
        CodeCommitCommand::CreateRepository {
            repository_name,
            repository_description,
            tags,
        } => {
            let mut builder = client.create_repository().repository_name(repository_name);
            if let Some(description) = repository_description {
                builder = builder.repository_description(description);
            }
            if !tags.is_empty() {
                builder = builder.set_tags(Some(tags.into_iter().collect::<HashMap<_, _>>()));
            }
            render::unary(&builder.send().await?)
        }
        CodeCommitCommand::DeleteRepository { repository_name } => {
            let output = client
                .delete_repository()
                .repository_name(repository_name)
                .send()
                .await?;
            render::unary(&output)
        }
        CodeCommitCommand::ListRepositories {
            sort_by,
            order,
            cursor,
        } => {
            let mut builder = client.list_repositories();
            if let Some(sort_by) = sort_by {
                builder = builder.sort_by(SortByEnum::from(sort_by.as_str()));
            }
            if let Some(order) = order {
                builder = builder.order(OrderEnum::from(order.as_str()));
            }
            if let Some(max_items) = cursor.max_items {
                builder = builder.max_items(max_items);
            }
            if let Some(token) = cursor.starting_token {
                builder = builder.starting_token(token);
            }
            render::stream(builder.into_stream()).await
        }
        CodeCommitCommand::GetBranch {
            repository_name,
            branch_name,
        } => {
            let output = client
                .get_branch()
                .repository_name(repository_name)
                .branch_name(branch_name)
                .send()
                .await?;
            render::unary(&output)
        }
        CodeCommitCommand::CreateBranch {
            repository_name,
            branch_name,
            commit_id,
        } => {
            let output = client
                .create_branch()
                .repository_name(repository_name)
                .branch_name(branch_name)
                .commit_id(commit_id)
                .send()
                .await?;
            render::unary(&output)
        }
        CodeCommitCommand::DeleteBranch {
            repository_name,
            branch_name,
        } => {
            let output = client
                .delete_branch()
                .repository_name(repository_name)
                .branch_name(branch_name)
                .send()
                .await?;
            render::unary(&output)
        }
        CodeCommitCommand::ListBranches {
            repository_name,
            cursor,
        } => {
            let mut builder = client.list_branches().repository_name(repository_name);
            if let Some(max_items) = cursor.max_items {
                builder = builder.max_items(max_items);
            }
            if let Some(token) = cursor.starting_token {
                builder = builder.starting_token(token);
            }
            render::stream(builder.into_stream()).await
        }
        CodeCommitCommand::GetCommit {
            repository_name,
            commit_id,
        } => {
            let output = client
                .get_commit()
                .repository_name(repository_name)
                .commit_id(commit_id)
                .send()
                .await?;
            render::unary(&output)
        }
        CodeCommitCommand::ListPullRequests {
            repository_name,
            author_arn,
            pull_request_status,
            pagination,
        } => {
            let mut builder = client.list_pull_requests().repository_name(repository_name);
            if let Some(arn) = author_arn {
                builder = builder.author_arn(arn);
            }
            if let Some(status) = pull_request_status {
                builder =
                    builder.pull_request_status(PullRequestStatusEnum::from(status.as_str()));
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

    use super::parse_key_val;
    use crate::cli::{Cli, Command};

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("team=tools").unwrap(),
            ("team".to_owned(), "tools".to_owned())
        );
        assert_eq!(
            parse_key_val("empty=").unwrap(),
            ("empty".to_owned(), String::new())
        );
        assert!(parse_key_val("no-separator").is_err());
        assert!(parse_key_val("=value").is_err());
    }

    #[test]
    fn test_list_pull_requests_args() {
        let cli = Cli::parse_from([
            "aws-service-cli",
            "codecommit",
            "list-pull-requests",
            "--repository-name",
            "my-repo",
            "--pull-request-status",
            "OPEN",
            "--page-size",
            "25",
            "--max-items",
            "100",
        ]);
        let Command::Codecommit(super::CodeCommitCommand::ListPullRequests {
            repository_name,
            pull_request_status,
            pagination,
            ..
        }) = cli.command
        else {
            panic!("wrong command parsed");
        };
        assert_eq!(repository_name, "my-repo");
        assert_eq!(pull_request_status.as_deref(), Some("OPEN"));
        assert_eq!(pagination.page_size, Some(25));
        assert_eq!(pagination.max_items, Some(100));
    }
}
