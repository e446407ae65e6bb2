/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::Object;

use crate::types::FailedRestore;

/// Output type for restoring every object under the configured prefix
///
/// Every listed object lands in exactly one of the three collections, in listing order.
#[non_exhaustive]
#[derive(Debug)]
pub struct RestoreObjectsOutput {
    /// Objects whose restore request was accepted
    pub successful: Vec<Object>,

    /// Objects that already have a restore underway
    pub restore_in_progress: Vec<Object>,

    /// Objects whose restore request failed
    pub failed: Vec<FailedRestore>,
}

impl RestoreObjectsOutput {
    /// Creates a new builder-style object to manufacture [`RestoreObjectsOutput`](crate::operation::restore_objects::RestoreObjectsOutput).
    pub fn builder() -> RestoreObjectsOutputBuilder {
        RestoreObjectsOutputBuilder::default()
    }

    /// Objects whose restore request was accepted
    pub fn successful(&self) -> &[Object] {
        &self.successful
    }

    /// Objects that already have a restore underway
    pub fn restore_in_progress(&self) -> &[Object] {
        &self.restore_in_progress
    }

    /// Objects whose restore request failed
    pub fn failed(&self) -> &[FailedRestore] {
        &self.failed
    }

    /// Number of objects processed
    pub fn total(&self) -> usize {
        self.successful.len() + self.restore_in_progress.len() + self.failed.len()
    }
}

/// A builder for [`RestoreObjectsOutput`](crate::operation::restore_objects::RestoreObjectsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct RestoreObjectsOutputBuilder {
    pub(crate) successful: Vec<Object>,
    pub(crate) restore_in_progress: Vec<Object>,
    pub(crate) failed: Vec<FailedRestore>,
}

impl RestoreObjectsOutputBuilder {
    /// Append an object whose restore request was accepted
    pub fn successful(mut self, input: Object) -> Self {
        self.successful.push(input);
        self
    }

    /// Append an object that already has a restore underway
    pub fn restore_in_progress(mut self, input: Object) -> Self {
        self.restore_in_progress.push(input);
        self
    }

    /// Append a failed restore
    pub fn failed(mut self, input: FailedRestore) -> Self {
        self.failed.push(input);
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> RestoreObjectsOutput {
        RestoreObjectsOutput {
            successful: self.successful,
            restore_in_progress: self.restore_in_progress,
            failed: self.failed,
        }
    }
}
