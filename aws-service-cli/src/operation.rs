/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Wrapped AWS CodeCommit operations
pub mod codecommit;

/// Wrapped Amazon WorkDocs operations
pub mod workdocs;
