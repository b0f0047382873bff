/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation to get information about a repository
pub mod get_repository;

/// Operation to create a repository
pub mod create_repository;

/// Operation to delete a repository
pub mod delete_repository;

/// Operation to list repositories
pub mod list_repositories;

/// Operation to get information about a branch
pub mod get_branch;

/// Operation to create a branch
pub mod create_branch;

/// Operation to delete a branch
pub mod delete_branch;

/// Operation to list branches of a repository
pub mod list_branches;

/// Operation to get information about a commit
pub mod get_commit;

/// Operation to list pull request IDs
pub mod list_pull_requests;
