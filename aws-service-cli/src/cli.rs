/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use clap::{Args, Parser, Subcommand};

use crate::client::Client;
use crate::error::Error;

/// AWS CodeCommit subcommands
pub mod codecommit;

/// Output rendering
pub mod render;

/// Amazon WorkDocs subcommands
pub mod workdocs;

/// Run AWS CodeCommit and Amazon WorkDocs operations from the command line.
///
/// Single-result operations print their output as pretty JSON on stdout.
/// List and describe operations print one JSON object per line, following
/// the service's pagination cursor until exhausted or until `--max-items`
/// entries have been printed.
#[derive(Debug, Parser)]
#[command(name = "aws-service-cli", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Top-level service groups.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// AWS CodeCommit operations
    #[command(subcommand)]
    Codecommit(codecommit::CodeCommitCommand),

    /// Amazon WorkDocs operations
    #[command(subcommand)]
    Workdocs(workdocs::WorkDocsCommand),
}

/// Pagination flags for operations with a page size parameter.
#[derive(Debug, Args)]
pub struct PaginationArgs {
    /// Number of items to request per service call
    #[arg(long)]
    page_size: Option<i32>,

    /// Stop after emitting this many items in total
    #[arg(long)]
    max_items: Option<usize>,

    /// Resume iteration from a cursor returned by a previous run
    #[arg(long)]
    starting_token: Option<String>,
}

/// Pagination flags for operations whose service API has no page size
/// parameter.
#[derive(Debug, Args)]
pub struct CursorArgs {
    /// Stop after emitting this many items in total
    #[arg(long)]
    max_items: Option<usize>,

    /// Resume iteration from a cursor returned by a previous run
    #[arg(long)]
    starting_token: Option<String>,
}

/// Load configuration from the environment and execute the parsed command.
pub async fn run(args: Cli) -> Result<(), Error> {
    let config = crate::from_env().load().await;
    let client = Client::new(config);

    match args.command {
        Command::Codecommit(cmd) => codecommit::run(&client, cmd).await,
        Command::Workdocs(cmd) => workdocs::run(&client, cmd).await,
    }
}
