/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for checking the restore status of an object
pub use input::{RestoreStatusInput, RestoreStatusInputBuilder};

mod output;
/// Response type for checking the restore status of an object
pub use output::RestoreStatusOutput;

use tracing::Instrument;

use crate::client::Handle;
use crate::error::Error;
use crate::types::RestoreStatus;

/// Operation struct for checking the restore status of a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct RestoreStatusOperation;

impl RestoreStatusOperation {
    /// Execute a single `RestoreStatus` operation
    pub(crate) async fn orchestrate(
        handle: &Handle,
        input: RestoreStatusInput,
    ) -> Result<RestoreStatusOutput, Error> {
        let status = fetch_restore_status(handle, input.key()).await?;
        Ok(RestoreStatusOutput {
            key: input.key,
            status,
        })
    }
}

/// Issue a `HeadObject` for `key` and parse its `x-amz-restore` header.
pub(super) async fn fetch_restore_status(
    handle: &Handle,
    key: &str,
) -> Result<RestoreStatus, Error> {
    let config = &handle.config;
    let head = config
        .client()
        .head_object()
        .bucket(config.bucket())
        .key(key)
        .send()
        .instrument(tracing::debug_span!("send-head-object", key))
        .await?;

    let status = RestoreStatus::from_header(head.restore());
    tracing::trace!(key, ?status, "restore status");
    Ok(status)
}
