/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for waiting on restores under the prefix
pub use input::{WaitForRestoreInput, WaitForRestoreInputBuilder};

mod output;
/// Response type for waiting on restores under the prefix
pub use output::WaitForRestoreOutput;

use std::sync::Arc;

use aws_smithy_async::rt::sleep::AsyncSleep;

use super::list_objects::ListObjectsStream;
use super::restore_status::fetch_restore_status;
use crate::client::Handle;
use crate::error::{self, Error};
use crate::logging::ProgressLogger;
use crate::types::PollSettings;

/// Operation struct for waiting until every object under the prefix is restored
#[derive(Clone, Default, Debug)]
pub(crate) struct WaitForRestore;

impl WaitForRestore {
    /// Execute a single `WaitForRestore` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: WaitForRestoreInput,
    ) -> Result<WaitForRestoreOutput, Error> {
        let poll = input.poll_settings(handle.config.poll_settings());
        let logger = handle.config.progress_logger();

        let mut objects = ListObjectsStream::new(handle.clone());
        let mut output = WaitForRestoreOutput::default();

        while let Some(object) = objects.next().await {
            let object = object?;
            let Some(key) = object.key() else {
                tracing::warn!("skipping listed object without a key");
                continue;
            };

            output.sleeps += wait_for_object(&handle, key, &poll).await?;
            output.objects_checked += 1;
        }

        logger.debug("done");
        Ok(output)
    }
}

/// Check `key` until it reports restored, sleeping between checks.
///
/// Returns the number of sleeps taken.
async fn wait_for_object(handle: &Handle, key: &str, poll: &PollSettings) -> Result<u64, Error> {
    let config = &handle.config;
    let mut attempts: u32 = 0;
    let mut sleeps = 0;

    loop {
        attempts += 1;
        if fetch_restore_status(handle, key).await?.is_restored() {
            return Ok(sleeps);
        }

        if poll.max_attempts().is_some_and(|max| attempts >= max) {
            return Err(error::poll_attempts_exhausted(key, attempts));
        }

        config
            .progress_logger()
            .info(&format!("Restore in progress: {key}"));
        config.sleep_impl().sleep(poll.interval()).await;
        sleeps += 1;
    }
}
