/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for checking the restore status of an object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct RestoreStatusInput {
    /// Key of the object to check
    pub key: String,
}

impl RestoreStatusInput {
    /// Creates a new builder-style object to manufacture [`RestoreStatusInput`](crate::operation::restore_status::RestoreStatusInput).
    pub fn builder() -> RestoreStatusInputBuilder {
        RestoreStatusInputBuilder::default()
    }

    /// Key of the object to check
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A builder for [`RestoreStatusInput`](crate::operation::restore_status::RestoreStatusInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct RestoreStatusInputBuilder {
    pub(crate) key: Option<String>,
}

impl RestoreStatusInputBuilder {
    /// Key of the object to check
    ///
    /// This member is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key of the object to check
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key of the object to check
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Consumes the builder and constructs a [`RestoreStatusInput`](crate::operation::restore_status::RestoreStatusInput).
    pub fn build(self) -> Result<RestoreStatusInput, BuildError> {
        match self.key {
            Some(key) if !key.is_empty() => Ok(RestoreStatusInput { key }),
            _ => Err(BuildError::missing_field("key", "key is required")),
        }
    }
}
