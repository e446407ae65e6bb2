/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::types::Tier;

use super::{RestoreObjectInputBuilder, RestoreObjectOutput};
use crate::error::Error;
use crate::types::RestoreParams;

/// Fluent builder for requesting the restore of a single object
#[derive(Debug)]
pub struct RestoreObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: RestoreObjectInputBuilder,
}

impl RestoreObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Send the restore request.
    ///
    /// Only invalid input is returned as an error. How S3 answered the request is reported by
    /// [`RestoreObjectOutput::outcome`].
    pub async fn send(self) -> Result<RestoreObjectOutput, Error> {
        let input = self.inner.build()?;
        Ok(crate::operation::restore_object::RestoreObject::orchestrate(self.handle, input).await)
    }

    /// Key of the archived object
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the archived object
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the archived object
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Lifetime of the restored copy in days. Overrides the client default.
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

impl crate::operation::restore_object::input::RestoreObjectInputBuilder {
    /// Request the restore with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<RestoreObjectOutput, Error> {
        let mut fluent_builder = client.restore_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
