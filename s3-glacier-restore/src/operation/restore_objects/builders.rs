/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::types::Tier;

use super::{RestoreObjectsInputBuilder, RestoreObjectsOutput};
use crate::error::Error;
use crate::types::RestoreParams;

/// Fluent builder for requesting the restore of every object under the configured prefix
#[derive(Debug)]
pub struct RestoreObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: RestoreObjectsInputBuilder,
}

impl RestoreObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List the prefix and request a restore for each object.
    ///
    /// Per-object failures are collected in the output. Only a failed listing is returned as
    /// an error.
    pub async fn send(self) -> Result<RestoreObjectsOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::restore_objects::RestoreObjects::orchestrate(self.handle, input).await
    }

    /// Lifetime of the restored copies in days. Overrides the client default.
    pub fn days(mut self, input: i32) -> Self {
        self.inner = self.inner.days(input);
        self
    }

    /// Retrieval tier to use. Overrides the client default.
    pub fn tier(mut self, input: Tier) -> Self {
        self.inner = self.inner.tier(input);
        self
    }

    /// Replace every restore parameter override at once
    pub fn restore_params(mut self, input: RestoreParams) -> Self {
        self.inner = self.inner.restore_params(input);
        self
    }

    /// Overrides for the client's default restore parameters
    pub fn get_restore_params(&self) -> &RestoreParams {
        self.inner.get_restore_params()
    }
}

impl crate::operation::restore_objects::input::RestoreObjectsInputBuilder {
    /// Restore every object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<RestoreObjectsOutput, Error> {
        let mut fluent_builder = client.restore_objects();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
