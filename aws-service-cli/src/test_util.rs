/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Helpers for wiring mock SDK clients into a crate [`Client`](crate::Client).

/// A CodeCommit client that panics if a request is ever sent.
pub(crate) fn stub_codecommit_client() -> aws_sdk_codecommit::Client {
    aws_sdk_codecommit::Client::from_conf(
        aws_sdk_codecommit::Config::builder()
            .behavior_version(aws_sdk_codecommit::config::BehaviorVersion::latest())
            .build(),
    )
}

/// A WorkDocs client that panics if a request is ever sent.
pub(crate) fn stub_workdocs_client() -> aws_sdk_workdocs::Client {
    aws_sdk_workdocs::Client::from_conf(
        aws_sdk_workdocs::Config::builder()
            .behavior_version(aws_sdk_workdocs::config::BehaviorVersion::latest())
            .build(),
    )
}

/// Crate client backed by the given CodeCommit client and a stub WorkDocs client.
pub(crate) fn client_with_codecommit(codecommit: aws_sdk_codecommit::Client) -> crate::Client {
    crate::Client::new(
        crate::Config::builder()
            .codecommit_client(codecommit)
            .workdocs_client(stub_workdocs_client())
            .build(),
    )
}

/// Crate client backed by the given WorkDocs client and a stub CodeCommit client.
pub(crate) fn client_with_workdocs(workdocs: aws_sdk_workdocs::Client) -> crate::Client {
    crate::Client::new(
        crate::Config::builder()
            .codecommit_client(stub_codecommit_client())
            .workdocs_client(workdocs)
            .build(),
    )
}
