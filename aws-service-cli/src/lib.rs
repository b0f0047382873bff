/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Command-line operations for AWS CodeCommit and Amazon WorkDocs.
//!
//! Each operation wraps a single call against the underlying service API,
//! copying bound input fields onto the request and projecting the response
//! onto plain serializable output types. List and describe operations
//! iterate the service's pagination cursor automatically, one page at a
//! time, with an optional cap on the number of items emitted.
//!
//! # Examples
//!
//! Load the default configuration:
//!
//! ```no_run
//! # async fn example() {
//! let config = aws_service_cli::from_env().load().await;
//! let client = aws_service_cli::Client::new(config);
//! # }
//! ```
//!
//! Fetch a repository:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_service_cli::error::Error> {
//! let config = aws_service_cli::from_env().load().await;
//! let client = aws_service_cli::Client::new(config);
//!
//! let repo = client
//!     .get_repository()
//!     .repository_name("my-repo")
//!     .send()
//!     .await?;
//!
//! println!("{:?}", repo.repository);
//! # Ok(())
//! # }
//! ```
//!
//! Iterate every branch of a repository:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_service_cli::error::Error> {
//! # let config = aws_service_cli::from_env().load().await;
//! # let client = aws_service_cli::Client::new(config);
//! let mut branches = client
//!     .list_branches()
//!     .repository_name("my-repo")
//!     .max_items(50)
//!     .into_stream();
//!
//! while let Some(branch) = branches.next().await {
//!     println!("{}", branch?);
//! }
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `aws-service-cli`
pub mod error;

/// Common projected output types
pub mod types;

/// Token/marker auto-iteration
pub mod paginate;

/// Service client
pub mod client;

/// Wrapped service operations
pub mod operation;

/// Client configuration
pub mod config;

/// Command-line surface
pub mod cli;

#[cfg(test)]
pub(crate) mod test_util;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
