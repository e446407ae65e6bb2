/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use aws_smithy_types::error::operation::BuildError;

use crate::types::PollSettings;

/// Input type for waiting until every object under the prefix is restored
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct WaitForRestoreInput {
    /// Time to sleep between two status checks of the same object
    pub interval: Option<Duration>,

    /// Maximum number of status checks per object
    pub max_attempts: Option<u32>,
}

impl WaitForRestoreInput {
    /// Creates a new builder-style object to manufacture [`WaitForRestoreInput`](crate::operation::wait_for_restore::WaitForRestoreInput).
    pub fn builder() -> WaitForRestoreInputBuilder {
        WaitForRestoreInputBuilder::default()
    }

    /// Time to sleep between two status checks of the same object
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Maximum number of status checks per object
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Poll settings with unset fields taken from `defaults`
    pub(crate) fn poll_settings(&self, defaults: &PollSettings) -> PollSettings {
        let poll = PollSettings::new(self.interval.unwrap_or(defaults.interval()));
        match self.max_attempts.or(defaults.max_attempts()) {
            Some(max_attempts) => poll.with_max_attempts(max_attempts),
            None => poll,
        }
    }
}

/// A builder for [`WaitForRestoreInput`](crate::operation::wait_for_restore::WaitForRestoreInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct WaitForRestoreInputBuilder {
    pub(crate) interval: Option<Duration>,
    pub(crate) max_attempts: Option<u32>,
}

impl WaitForRestoreInputBuilder {
    /// Time to sleep between two status checks of the same object.
    ///
    /// Overrides the client's [`PollSettings`].
    pub fn interval(mut self, input: Duration) -> Self {
        self.interval = Some(input);
        self
    }

    /// Time to sleep between two status checks of the same object.
    pub fn set_interval(mut self, input: Option<Duration>) -> Self {
        self.interval = input;
        self
    }

    /// Time to sleep between two status checks of the same object.
    pub fn get_interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Give up on an object after this many status checks.
    ///
    /// Overrides the client's [`PollSettings`].
    pub fn max_attempts(mut self, input: u32) -> Self {
        self.max_attempts = Some(input);
        self
    }

    /// Give up on an object after this many status checks.
    pub fn set_max_attempts(mut self, input: Option<u32>) -> Self {
        self.max_attempts = input;
        self
    }

    /// Give up on an object after this many status checks.
    pub fn get_max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// Consumes the builder and constructs a [`WaitForRestoreInput`](crate::operation::wait_for_restore::WaitForRestoreInput).
    pub fn build(self) -> Result<WaitForRestoreInput, BuildError> {
        if self.max_attempts == Some(0) {
            return Err(BuildError::invalid_field(
                "max_attempts",
                "max_attempts must be at least 1",
            ));
        }

        Ok(WaitForRestoreInput {
            interval: self.interval,
            max_attempts: self.max_attempts,
        })
    }
}
