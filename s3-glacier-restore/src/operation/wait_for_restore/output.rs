/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for waiting until every object under the prefix is restored
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct WaitForRestoreOutput {
    /// Number of objects confirmed as restored
    pub objects_checked: u64,

    /// Total number of sleeps across all objects
    pub sleeps: u64,
}

impl WaitForRestoreOutput {
    /// Number of objects confirmed as restored
    pub fn objects_checked(&self) -> u64 {
        self.objects_checked
    }

    /// Total number of sleeps across all objects
    pub fn sleeps(&self) -> u64 {
        self.sleeps
    }
}
