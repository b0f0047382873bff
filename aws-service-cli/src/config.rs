/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub(crate) mod loader;

/// Maximum page size accepted by the wrapped list/describe operations.
pub(crate) const MAX_PAGE_SIZE: i32 = 1000;

/// The page size to request from list/describe operations.
#[derive(Debug, Clone, Default)]
pub enum PageSize {
    /// Let the service apply its own default page size.
    #[default]
    Auto,

    /// Page size explicitly given.
    ///
    /// NOTE: This is a suggestion; operations whose service API has no page
    /// size parameter ignore it, and it is clamped to what the services accept.
    Target(i32),
}

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    page_size: PageSize,
    codecommit: aws_sdk_codecommit::Client,
    workdocs: aws_sdk_workdocs::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the default page size for paginated operations.
    pub fn page_size(&self) -> &PageSize {
        &self.page_size
    }

    /// The AWS CodeCommit client instance used to send requests.
    pub fn codecommit(&self) -> &aws_sdk_codecommit::Client {
        &self.codecommit
    }

    /// The Amazon WorkDocs client instance used to send requests.
    pub fn workdocs(&self) -> &aws_sdk_workdocs::Client {
        &self.workdocs
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    page_size: PageSize,
    codecommit: Option<aws_sdk_codecommit::Client>,
    workdocs: Option<aws_sdk_workdocs::Client>,
}

impl Builder {
    /// Default page size for paginated operations.
    ///
    /// An explicit target is clamped to `1..=1000`. Default is [PageSize::Auto].
    pub fn page_size(self, page_size: PageSize) -> Self {
        let page_size = match page_size {
            PageSize::Target(size) => PageSize::Target(size.clamp(1, MAX_PAGE_SIZE)),
            auto => auto,
        };

        self.set_page_size(page_size)
    }

    /// Default page size for paginated operations.
    ///
    /// NOTE: This does not validate the setting and is meant for internal use only.
    pub(crate) fn set_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set an explicit AWS CodeCommit client to use.
    pub fn codecommit_client(mut self, client: aws_sdk_codecommit::Client) -> Self {
        self.codecommit = Some(client);
        self
    }

    /// Set an explicit Amazon WorkDocs client to use.
    pub fn workdocs_client(mut self, client: aws_sdk_workdocs::Client) -> Self {
        self.workdocs = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Config {
        Config {
            page_size: self.page_size,
            codecommit: self.codecommit.expect("codecommit client set"),
            workdocs: self.workdocs.expect("workdocs client set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PageSize, MAX_PAGE_SIZE};

    #[test]
    fn test_page_size_clamped() {
        let builder = super::Builder::default().page_size(PageSize::Target(5000));
        assert!(matches!(
            builder.page_size,
            PageSize::Target(MAX_PAGE_SIZE)
        ));

        let builder = super::Builder::default().page_size(PageSize::Target(0));
        assert!(matches!(builder.page_size, PageSize::Target(1)));
    }
}
