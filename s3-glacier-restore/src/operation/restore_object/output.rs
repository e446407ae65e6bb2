/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::RestoreOutcome;

/// Output type for restoring a single object
#[non_exhaustive]
#[derive(Debug)]
pub struct RestoreObjectOutput {
    /// Key of the object the restore was requested for
    pub key: String,

    /// How S3 answered the restore request
    pub outcome: RestoreOutcome,
}

impl RestoreObjectOutput {
    /// Key of the object the restore was requested for
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How S3 answered the restore request
    pub fn outcome(&self) -> &RestoreOutcome {
        &self.outcome
    }

    /// Consume the output and return the outcome
    pub fn into_outcome(self) -> RestoreOutcome {
        self.outcome
    }
}
