/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::{Arc, Mutex};

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::operation::restore_object::RestoreObjectOutput;
use aws_sdk_s3::types::Tier;
use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use s3_glacier_restore::error::ErrorKind;
use s3_glacier_restore::logging::ProgressLogger;
use s3_glacier_restore::types::{RestoreCodeMapping, RestoreParams};
use test_common::{list_page, restore_error, status_response};

/// How the mock store answers a restore request for an object
#[derive(Debug, Clone, Copy)]
enum RestoreResponse {
    Accepted,
    ErrorCode(&'static str),
    Status(u16),
}

#[derive(Debug, Clone)]
struct MockObject {
    key: &'static str,
    response: RestoreResponse,
}

impl MockObject {
    fn new(key: &'static str, response: RestoreResponse) -> Self {
        Self { key, response }
    }

    /// Get the mock rule for `restore_object` invoked on this object's key
    fn restore_rule(&self) -> Rule {
        let key = self.key;
        let rule = mock!(aws_sdk_s3::Client::restore_object).match_requests(move |r| {
            let days = r.restore_request().and_then(|req| req.days());
            r.bucket() == Some("test-bucket") && r.key() == Some(key) && days == Some(7)
        });

        match self.response {
            RestoreResponse::Accepted => {
                rule.then_output(|| RestoreObjectOutput::builder().build())
            }
            RestoreResponse::ErrorCode(code) => rule.then_error(move || restore_error(code)),
            RestoreResponse::Status(status) => {
                rule.then_http_response(move || status_response(status))
            }
        }
    }
}

/// Mock bucket listing its objects over several `ListObjectsV2` pages
#[derive(Debug)]
struct MockBucket {
    pages: Vec<Vec<MockObject>>,
}

impl MockBucket {
    /// Return the mock rules representing this bucket. This includes one
    /// `ListObjectsV2` rule per page as well as all of the `RestoreObject` calls.
    fn rules(&self) -> Vec<Rule> {
        let mut rules = Vec::new();
        let page_count = self.pages.len();

        for (idx, page) in self.pages.iter().enumerate() {
            let token = (idx > 0).then(|| format!("page{idx}"));
            let next_token = (idx + 1 < page_count).then(|| format!("page{}", idx + 1));
            let keys: Vec<&'static str> = page.iter().map(|o| o.key).collect();

            let list_output = move || -> ListObjectsV2Output {
                list_page(next_token.as_deref(), &keys)
            };
            let list_rule = mock!(aws_sdk_s3::Client::list_objects_v2)
                .match_requests(move |r| r.continuation_token() == token.as_deref())
                .then_output(list_output);
            rules.push(list_rule);

            rules.extend(page.iter().map(MockObject::restore_rule));
        }

        rules
    }
}

fn mixed_bucket() -> MockBucket {
    use RestoreResponse::*;
    MockBucket {
        pages: vec![
            vec![
                MockObject::new("archive/a", Accepted),
                MockObject::new("archive/b", ErrorCode("RestoreAlreadyInProgress")),
                MockObject::new("archive/c", Accepted),
            ],
            vec![
                MockObject::new("archive/d", ErrorCode("InvalidObjectState")),
                MockObject::new("archive/e", Status(403)),
                MockObject::new("archive/f", Accepted),
            ],
        ],
    }
}

#[derive(Debug, Clone, Default)]
struct RecordingLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl ProgressLogger for RecordingLogger {
    fn debug(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("DEBUG {msg}"));
    }

    fn info(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("INFO {msg}"));
    }
}

fn restore_client(
    bucket: &MockBucket,
    mapping: RestoreCodeMapping,
    logger: RecordingLogger,
) -> s3_glacier_restore::Client {
    let s3 = mock_client!(aws_sdk_s3, RuleMode::MatchAny, bucket.rules().as_slice());
    let config = s3_glacier_restore::Config::builder()
        .bucket("test-bucket")
        .prefix("archive/")
        .client(s3)
        .code_mapping(mapping)
        .progress_logger(logger)
        .build()
        .unwrap();
    s3_glacier_restore::Client::new(config)
}

fn keys(objects: &[aws_sdk_s3::types::Object]) -> Vec<&str> {
    objects.iter().filter_map(|o| o.key()).collect()
}

#[tokio::test]
async fn test_restore_objects_inverted_mapping() {
    let bucket = mixed_bucket();
    let logger = RecordingLogger::default();
    let client = restore_client(&bucket, RestoreCodeMapping::Inverted, logger.clone());

    let output = client
        .restore_objects()
        .restore_params(RestoreParams::new().days(7).tier(Tier::Bulk))
        .send()
        .await
        .unwrap();

    assert_eq!(6, output.total());
    assert_eq!(
        vec!["archive/a", "archive/c", "archive/f"],
        keys(output.successful())
    );
    assert_eq!(vec!["archive/d"], keys(output.restore_in_progress()));

    let failed: Vec<_> = output
        .failed()
        .iter()
        .map(|f| f.object().key().unwrap())
        .collect();
    assert_eq!(vec!["archive/b", "archive/e"], failed);
    for f in output.failed() {
        assert_eq!(&ErrorKind::RestoreFailed, f.error().kind());
    }

    // one progress line per object
    let lines = logger.lines.lock().unwrap().clone();
    assert_eq!(6, lines.len(), "{lines:?}");
    assert!(lines.iter().all(|l| l.starts_with("INFO ")));
}

#[tokio::test]
async fn test_restore_objects_direct_mapping() {
    let bucket = mixed_bucket();
    let client = restore_client(
        &bucket,
        RestoreCodeMapping::Direct,
        RecordingLogger::default(),
    );

    let output = client.restore_objects().days(7).send().await.unwrap();

    assert_eq!(
        vec!["archive/a", "archive/c", "archive/f"],
        keys(output.successful())
    );
    assert_eq!(vec!["archive/b"], keys(output.restore_in_progress()));
    assert_eq!(2, output.failed().len());
    assert_eq!(Some("archive/d"), output.failed()[0].object().key());
    assert_eq!(Some("archive/e"), output.failed()[1].object().key());
}

#[tokio::test]
async fn test_restore_objects_every_bucket_counted() {
    use RestoreResponse::*;
    let bucket = MockBucket {
        pages: vec![
            vec![
                MockObject::new("archive/1", Accepted),
                MockObject::new("archive/2", Accepted),
            ],
            vec![],
            vec![
                MockObject::new("archive/3", Accepted),
                MockObject::new("archive/4", ErrorCode("InvalidObjectState")),
                MockObject::new("archive/5", ErrorCode("InvalidObjectState")),
                MockObject::new("archive/6", Status(403)),
            ],
        ],
    };
    let client = restore_client(
        &bucket,
        RestoreCodeMapping::Inverted,
        RecordingLogger::default(),
    );

    let output = client.restore_objects().days(7).send().await.unwrap();

    assert_eq!(3, output.successful().len());
    assert_eq!(2, output.restore_in_progress().len());
    assert_eq!(1, output.failed().len());
    assert_eq!(6, output.total());
}
