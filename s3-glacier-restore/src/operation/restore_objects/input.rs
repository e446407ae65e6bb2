/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::Tier;
use aws_smithy_types::error::operation::BuildError;

use crate::types::RestoreParams;

/// Input type for restoring every object under the configured prefix
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct RestoreObjectsInput {
    /// Overrides for the client's default restore parameters, applied to every object
    pub restore_params: RestoreParams,
}

impl RestoreObjectsInput {
    /// Creates a new builder-style object to manufacture [`RestoreObjectsInput`](crate::operation::restore_objects::RestoreObjectsInput).
    pub fn builder() -> RestoreObjectsInputBuilder {
        RestoreObjectsInputBuilder::default()
    }

    /// Overrides for the client's default restore parameters, applied to every object
    pub fn restore_params(&self) -> &RestoreParams {
        &self.restore_params
    }
}

/// A builder for [`RestoreObjectsInput`](crate::operation::restore_objects::RestoreObjectsInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct RestoreObjectsInputBuilder {
    pub(crate) restore_params: RestoreParams,
}

impl RestoreObjectsInputBuilder {
    /// Lifetime of the restored copies in days
    pub fn days(mut self, input: i32) -> Self {
        self.restore_params = self.restore_params.days(input);
        self
    }

    /// Retrieval tier to use for every restore
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

    /// Consumes the builder and constructs a [`RestoreObjectsInput`](crate::operation::restore_objects::RestoreObjectsInput).
    pub fn build(self) -> Result<RestoreObjectsInput, BuildError> {
        Ok(RestoreObjectsInput {
            restore_params: self.restore_params,
        })
    }
}
