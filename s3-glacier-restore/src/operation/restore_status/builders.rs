/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{RestoreStatusInputBuilder, RestoreStatusOutput};
use crate::error::Error;

/// Fluent builder for checking the restore status of a single object
#[derive(Debug)]
pub struct RestoreStatusFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: RestoreStatusInputBuilder,
}

impl RestoreStatusFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch the restore status
    pub async fn send(self) -> Result<RestoreStatusOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::restore_status::RestoreStatusOperation::orchestrate(&self.handle, input)
            .await
    }

    /// Key of the object to check
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object to check
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the object to check
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}

impl crate::operation::restore_status::input::RestoreStatusInputBuilder {
    /// Fetch the restore status with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<RestoreStatusOutput, Error> {
        let mut fluent_builder = client.restore_status();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
