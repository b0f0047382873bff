/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_service_cli::cli::{self, Cli};
use aws_service_cli::error::ErrorKind;
use aws_smithy_types::error::display::DisplayErrorContext;
use clap::Parser;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    if let Err(err) = cli::run(args).await {
        tracing::debug!("{}", DisplayErrorContext(&err));
        cli::render::print_error(&err);
        let code = match err.kind() {
            ErrorKind::NotFound => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
