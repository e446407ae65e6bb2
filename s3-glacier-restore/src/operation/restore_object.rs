/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for restoring a single object
pub use input::{RestoreObjectInput, RestoreObjectInputBuilder};

mod output;
/// Response type for restoring a single object
pub use output::RestoreObjectOutput;

use std::sync::Arc;

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::restore_object::RestoreObjectError;
use aws_smithy_runtime_api::http::Response;
use tracing::Instrument;

use crate::client::Handle;
use crate::logging::ProgressLogger;
use crate::types::{RestoreCodeMapping, RestoreOutcome, RestoreParams};

/// Operation struct for restoring a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct RestoreObject;

impl RestoreObject {
    /// Execute a single `RestoreObject` operation
    pub(crate) async fn orchestrate(
        handle: Arc<Handle>,
        input: RestoreObjectInput,
    ) -> RestoreObjectOutput {
        let params = handle
            .config
            .default_restore_params()
            .merge(input.restore_params());
        let outcome = restore_single_object(&handle, input.key(), &params).await;
        RestoreObjectOutput {
            key: input.key,
            outcome,
        }
    }
}

/// Send the restore request for `key` and classify the response.
///
/// `params` must already be merged with the client defaults.
pub(super) async fn restore_single_object(
    handle: &Handle,
    key: &str,
    params: &RestoreParams,
) -> RestoreOutcome {
    let config = &handle.config;
    let logger = config.progress_logger();

    let request = match params.to_request() {
        Ok(request) => request,
        Err(err) => {
            logger.info(&format!("FAILED invalid restore request for {key}: {err}"));
            return RestoreOutcome::failed(err.into());
        }
    };

    let result = config
        .client()
        .restore_object()
        .bucket(config.bucket())
        .key(key)
        .restore_request(request)
        .send()
        .instrument(tracing::debug_span!("send-restore-object", key))
        .await;

    let err = match result {
        Ok(_) => {
            logger.info(&format!("SUCCESS restore requested: {key}"));
            return RestoreOutcome::Successful;
        }
        Err(err) => err,
    };

    let status = err.raw_response().map(|resp| resp.status().as_u16());
    let outcome = classify(err, config.code_mapping());
    match &outcome {
        RestoreOutcome::RestoreInProgress(_) => {
            logger.info(&format!("FAILED restore already in progress: {key}"));
        }
        RestoreOutcome::Error(err) => match status {
            Some(status) if status > 400 => logger.info(&format!(
                "FAILED restore of {key}: invalid response status {status}: {}",
                DisplayErrorContext(err)
            )),
            _ => logger.info(&format!(
                "FAILED restore of {key}: {}",
                DisplayErrorContext(err)
            )),
        },
        RestoreOutcome::Successful => {}
    }
    outcome
}

/// Map a failed `RestoreObject` call to an outcome.
///
/// Errors carrying a service code go through `mapping`. Anything else (an error status with
/// no parseable body, a timeout, a connection failure) is a plain failure.
fn classify(
    err: SdkError<RestoreObjectError, Response>,
    mapping: RestoreCodeMapping,
) -> RestoreOutcome {
    let in_progress = err
        .code()
        .map(|code| mapping.is_in_progress(code))
        .unwrap_or(false);

    if in_progress {
        RestoreOutcome::in_progress(err.into())
    } else {
        RestoreOutcome::failed(err.into())
    }
}
