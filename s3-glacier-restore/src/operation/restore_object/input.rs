/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::Tier;
use aws_smithy_types::error::operation::BuildError;

use crate::types::RestoreParams;

/// Input type for restoring a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct RestoreObjectInput {
    /// Key of the archived object
    pub key: String,

    /// Overrides for the client's default restore parameters
    pub restore_params: RestoreParams,
}

impl RestoreObjectInput {
    /// Creates a new builder-style object to manufacture [`RestoreObjectInput`](crate::operation::restore_object::RestoreObjectInput).
    pub fn builder() -> RestoreObjectInputBuilder {
        RestoreObjectInputBuilder::default()
    }

    /// Key of the archived object
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overrides for the client's default restore parameters
    pub fn restore_params(&self) -> &RestoreParams {
        &self.restore_params
    }
}

/// A builder for [`RestoreObjectInput`](crate::operation::restore_object::RestoreObjectInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct RestoreObjectInputBuilder {
    pub(crate) key: Option<String>,
    pub(crate) restore_params: RestoreParams,
}

impl RestoreObjectInputBuilder {
    /// Key of the archived object
    ///
    /// This member is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the archived object
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the archived object
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Lifetime of the restored copy in days
    pub fn days(mut self, input: i32) -> Self {
        self.restore_params = self.restore_params.days(input);
        self
    }

    /// Retrieval tier to use for the restore
    pub fn tier(mut self, input: Tier) -> Self {
        self.restore_params = self.restore_params.tier(input);
        self
    }

    /// Replace every restore parameter override at once
    pub fn restore_params(mut self, input: RestoreParams) -> Self {
        self.restore_params = input;
        self
    }

    /// Overrides for the client's default restore parameters
    pub fn get_restore_params(&self) -> &RestoreParams {
        &self.restore_params
    }

    /// Consumes the builder and constructs a [`RestoreObjectInput`](crate::operation::restore_object::RestoreObjectInput).
    pub fn build(self) -> Result<RestoreObjectInput, BuildError> {
        let key = match self.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(BuildError::missing_field("key", "key is required")),
        };

        Ok(RestoreObjectInput {
            key,
            restore_params: self.restore_params,
        })
    }
}
