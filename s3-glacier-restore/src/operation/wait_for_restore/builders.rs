/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;
use std::time::Duration;

use super::{WaitForRestoreInputBuilder, WaitForRestoreOutput};
use crate::error::Error;

/// Fluent builder for waiting until every object under the configured prefix is restored
#[derive(Debug)]
pub struct WaitForRestoreFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: WaitForRestoreInputBuilder,
}

impl WaitForRestoreFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Wait for every object under the prefix
    pub async fn send(self) -> Result<WaitForRestoreOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::wait_for_restore::WaitForRestore::orchestrate(self.handle, input).await
    }

    /// Time to sleep between two status checks of the same object
    pub fn interval(mut self, input: Duration) -> Self {
        self.inner = self.inner.interval(input);
        self
    }

    /// Time to sleep between two status checks of the same object
    pub fn set_interval(mut self, input: Option<Duration>) -> Self {
        self.inner = self.inner.set_interval(input);
        self
    }

    /// Time to sleep between two status checks of the same object
    pub fn get_interval(&self) -> Option<Duration> {
        self.inner.get_interval()
    }

    /// Give up on an object after this many status checks
    pub fn max_attempts(mut self, input: u32) -> Self {
        self.inner = self.inner.max_attempts(input);
        self
    }

    /// Give up on an object after this many status checks
    pub fn set_max_attempts(mut self, input: Option<u32>) -> Self {
        self.inner = self.inner.set_max_attempts(input);
        self
    }

    /// Give up on an object after this many status checks
    pub fn get_max_attempts(&self) -> Option<u32> {
        self.inner.get_max_attempts()
    }
}

impl crate::operation::wait_for_restore::input::WaitForRestoreInputBuilder {
    /// Wait for restores with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<WaitForRestoreOutput, Error> {
        let mut fluent_builder = client.wait_for_restore();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
