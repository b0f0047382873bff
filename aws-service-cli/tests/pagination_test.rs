/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Pagination behavior through the public client surface.

use aws_sdk_codecommit::operation::list_branches::ListBranchesOutput;
use aws_sdk_codecommit::operation::list_pull_requests::ListPullRequestsOutput;
use aws_sdk_workdocs::operation::describe_users::DescribeUsersOutput;
use aws_sdk_workdocs::types::User;
use aws_service_cli::config::PageSize;
use aws_service_cli::{Client, Config};
use aws_smithy_mocks::{mock, mock_client, RuleMode};

fn stub_codecommit_client() -> aws_sdk_codecommit::Client {
    aws_sdk_codecommit::Client::from_conf(
        aws_sdk_codecommit::Config::builder()
            .behavior_version(aws_sdk_codecommit::config::BehaviorVersion::latest())
            .build(),
    )
}

fn stub_workdocs_client() -> aws_sdk_workdocs::Client {
    aws_sdk_workdocs::Client::from_conf(
        aws_sdk_workdocs::Config::builder()
            .behavior_version(aws_sdk_workdocs::config::BehaviorVersion::latest())
            .build(),
    )
}

#[tokio::test]
async fn list_branches_follows_cursor_to_exhaustion() {
    let page1 = mock!(aws_sdk_codecommit::Client::list_branches)
        .match_requests(|r| {
            r.repository_name.as_deref() == Some("demo") && r.next_token.is_none()
        })
        .then_output(|| {
            ListBranchesOutput::builder()
                .branches("main")
                .branches("develop")
                .next_token("t1")
                .build()
        });
    let page2 = mock!(aws_sdk_codecommit::Client::list_branches)
        .match_requests(|r| r.next_token.as_deref() == Some("t1"))
        .then_output(|| ListBranchesOutput::builder().branches("release").build());
    let codecommit = mock_client!(aws_sdk_codecommit, RuleMode::Sequential, &[&page1, &page2]);

    let client = Client::new(
        Config::builder()
            .codecommit_client(codecommit)
            .workdocs_client(stub_workdocs_client())
            .build(),
    );

    let branches = client
        .list_branches()
        .repository_name("demo")
        .into_stream()
        .collect()
        .await
        .unwrap();

    assert_eq!(branches, vec!["main", "develop", "release"]);
}

#[tokio::test]
async fn configured_page_size_flows_into_requests() {
    let rule = mock!(aws_sdk_codecommit::Client::list_pull_requests)
        .match_requests(|r| r.max_results == Some(25))
        .then_output(|| {
            ListPullRequestsOutput::builder()
                .pull_request_ids("42")
                .build()
                .unwrap()
        });
    let codecommit = mock_client!(aws_sdk_codecommit, &[&rule]);

    let client = Client::new(
        Config::builder()
            .page_size(PageSize::Target(25))
            .codecommit_client(codecommit)
            .workdocs_client(stub_workdocs_client())
            .build(),
    );

    let ids = client
        .list_pull_requests()
        .repository_name("demo")
        .into_stream()
        .collect()
        .await
        .unwrap();

    assert_eq!(ids, vec!["42"]);
}

#[tokio::test]
async fn max_items_caps_emitted_users_across_pages() {
    let page1 = mock!(aws_sdk_workdocs::Client::describe_users)
        .match_requests(|r| r.marker.is_none())
        .then_output(|| {
            DescribeUsersOutput::builder()
                .users(User::builder().id("u-1").build())
                .users(User::builder().id("u-2").build())
                .marker("m1")
                .build()
        });
    let page2 = mock!(aws_sdk_workdocs::Client::describe_users)
        .match_requests(|r| r.marker.as_deref() == Some("m1"))
        .then_output(|| {
            DescribeUsersOutput::builder()
                .users(User::builder().id("u-3").build())
                .users(User::builder().id("u-4").build())
                .build()
        });
    let workdocs = mock_client!(aws_sdk_workdocs, RuleMode::Sequential, &[&page1, &page2]);

    let client = Client::new(
        Config::builder()
            .codecommit_client(stub_codecommit_client())
            .workdocs_client(workdocs)
            .build(),
    );

    let users = client
        .describe_users()
        .max_items(3)
        .into_stream()
        .collect()
        .await
        .unwrap();

    let ids: Vec<&str> = users.iter().filter_map(|u| u.id.as_deref()).collect();
    assert_eq!(ids, vec!["u-1", "u-2", "u-3"]);
}

#[tokio::test]
async fn zero_max_items_sends_no_request() {
    // both clients are stubs with no mock rules; any request would fail
    let client = Client::new(
        Config::builder()
            .codecommit_client(stub_codecommit_client())
            .workdocs_client(stub_workdocs_client())
            .build(),
    );

    let repos = client
        .list_repositories()
        .max_items(0)
        .into_stream()
        .collect()
        .await
        .unwrap();

    assert!(repos.is_empty());
}
