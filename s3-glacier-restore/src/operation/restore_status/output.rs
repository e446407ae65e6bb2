/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::RestoreStatus;

/// Output type for checking the restore status of an object
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RestoreStatusOutput {
    /// Key of the checked object
    pub key: String,

    /// Restore state parsed from the `x-amz-restore` header
    pub status: RestoreStatus,
}

impl RestoreStatusOutput {
    /// Key of the checked object
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Restore state parsed from the `x-amz-restore` header
    pub fn status(&self) -> &RestoreStatus {
        &self.status
    }

    /// Returns `false` only while a restore is ongoing, see [`RestoreStatus::is_restored`].
    pub fn is_restored(&self) -> bool {
        self.status.is_restored()
    }
}
