/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::{Arc, Mutex};
use std::time::Duration;

use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::error::ErrorMetadata;
use aws_sdk_s3::operation::head_object::HeadObjectOutput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::operation::restore_object::RestoreObjectError;
use aws_sdk_s3::types::Object;
use aws_smithy_async::rt::sleep::{AsyncSleep, Sleep};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;

/// Value of `x-amz-restore` while a restore is still running
pub const ONGOING: &str = "ongoing-request=\"true\"";

/// Value of `x-amz-restore` once the restored copy is available
pub const COMPLETED: &str =
    "ongoing-request=\"false\", expiry-date=\"Fri, 21 Dec 2012 00:00:00 GMT\"";

/// An S3 client that is never expected to send a request
pub fn unconnected_client() -> aws_sdk_s3::Client {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::from_static("us-east-1"))
        .build();
    aws_sdk_s3::Client::from_conf(config)
}

/// Create a `ListObjectsV2` output page holding `keys`
pub fn list_page(next_token: Option<&str>, keys: &[&str]) -> ListObjectsV2Output {
    let contents = keys
        .iter()
        .map(|k| Object::builder().key(*k).size(16).build())
        .collect();

    ListObjectsV2Output::builder()
        .is_truncated(next_token.is_some())
        .set_next_continuation_token(next_token.map(str::to_owned))
        .set_contents(Some(contents))
        .build()
}

/// Create a `HeadObject` output with the given `x-amz-restore` value
pub fn head_output(restore: Option<&str>) -> HeadObjectOutput {
    HeadObjectOutput::builder()
        .set_restore(restore.map(str::to_owned))
        .build()
}

/// A modeled `RestoreObject` service error carrying `code`
pub fn restore_error(code: &str) -> RestoreObjectError {
    RestoreObjectError::generic(
        ErrorMetadata::builder()
            .code(code)
            .message(format!("mock {code}"))
            .build(),
    )
}

/// A raw HTTP response with the given status and an empty body
pub fn status_response(status: u16) -> HttpResponse {
    HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::empty())
}

/// Sleep implementation that returns immediately and records every requested duration
#[derive(Debug, Clone, Default)]
pub struct RecordingSleep {
    log: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleep {
    pub fn new() -> Self {
        Self::default()
    }

    /// All durations slept so far, in order
    pub fn sleeps(&self) -> Vec<Duration> {
        self.log.lock().unwrap().clone()
    }
}

impl AsyncSleep for RecordingSleep {
    fn sleep(&self, duration: Duration) -> Sleep {
        self.log.lock().unwrap().push(duration);
        Sleep::new(std::future::ready(()))
    }
}
