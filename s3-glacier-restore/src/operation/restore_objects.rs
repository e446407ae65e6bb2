/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for restoring every object under the prefix
pub use input::{RestoreObjectsInput, RestoreObjectsInputBuilder};

mod output;
/// Response type for restoring every object under the prefix
pub use output::{RestoreObjectsOutput, RestoreObjectsOutputBuilder};

use std::sync::Arc;

use tracing::Instrument;

use super::list_objects::ListObjectsStream;
use super::restore_object::restore_single_object;
use crate::client::Handle;
use crate::error::Error;
use crate::types::{FailedRestore, RestoreOutcome};

/// Operation struct for restoring every object under the configured prefix
#[derive(Clone, Default, Debug)]
pub(crate) struct RestoreObjects;

impl RestoreObjects {
    /// Execute a single `RestoreObjects` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: RestoreObjectsInput,
    ) -> Result<RestoreObjectsOutput, Error> {
        let span = tracing::debug_span!(
            "restore-objects",
            bucket = handle.config.bucket(),
            prefix = handle.config.prefix()
        );
        restore_all(handle, input).instrument(span).await
    }
}

async fn restore_all(
    handle: Arc<Handle>,
    input: RestoreObjectsInput,
) -> Result<RestoreObjectsOutput, Error> {
    let params = handle
        .config
        .default_restore_params()
        .merge(input.restore_params());

    let mut objects = ListObjectsStream::new(handle.clone());
    let mut output = RestoreObjectsOutput::builder();

    while let Some(object) = objects.next().await {
        let object = object?;
        let outcome = match object.key() {
            Some(key) => restore_single_object(&handle, key, &params).await,
            None => RestoreOutcome::failed("listed object has no key".into()),
        };

        output = match outcome {
            RestoreOutcome::Successful => output.successful(object),
            RestoreOutcome::RestoreInProgress(_) => output.restore_in_progress(object),
            RestoreOutcome::Error(error) => output.failed(FailedRestore { object, error }),
        };
    }

    let output = output.build();
    tracing::debug!(
        successful = output.successful().len(),
        restore_in_progress = output.restore_in_progress().len(),
        failed = output.failed().len(),
        "restore requests complete"
    );
    Ok(output)
}
