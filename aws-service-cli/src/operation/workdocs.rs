/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation to get document details
pub mod get_document;

/// Operation to get folder metadata
pub mod get_folder;

/// Operation to create a folder
pub mod create_folder;

/// Operation to delete a folder
pub mod delete_folder;

/// Operation to list folder contents
pub mod describe_folder_contents;

/// Operation to list users
pub mod describe_users;

/// Operation to list document versions
pub mod describe_document_versions;
