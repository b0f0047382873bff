/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::{Builder, PageSize};
use crate::Config;

/// Load a [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Default page size for paginated operations.
    ///
    /// An explicit target is clamped to `1..=1000`. Default is [PageSize::Auto].
    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.builder = self.builder.page_size(page_size);
        self
    }

    /// Load the default configuration.
    ///
    /// Region, credentials, and retry settings come from the standard
    /// environment/profile chain. Both service clients share one resolved
    /// SDK configuration.
    pub async fn load(self) -> Config {
        let shared_config = aws_config::from_env().load().await;
        let codecommit = aws_sdk_codecommit::Client::new(&shared_config);
        let workdocs = aws_sdk_workdocs::Client::new(&shared_config);
        self.builder
            .codecommit_client(codecommit)
            .workdocs_client(workdocs)
            .build()
    }
}
