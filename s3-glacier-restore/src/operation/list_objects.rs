/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::{
    error::SdkError,
    operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
    types::Object,
};
use aws_smithy_runtime_api::http::Response;
use tracing::Instrument;

use crate::client::Handle;
use crate::error::{self, Error};

/// Paginator for the `ListObjectsV2` operation scoped to the configured bucket and prefix.
#[derive(Debug)]
struct ListObjectsPaginator {
    handle: Arc<Handle>,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating {
        // next continuation token to use
        next_token: Option<String>,
    },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectsV2Output) -> State {
        let is_truncated =
            output.is_truncated().unwrap_or(false) && output.next_continuation_token().is_some();

        match self {
            State::Paginating { .. } if is_truncated => State::Paginating {
                next_token: output.next_continuation_token.to_owned(),
            },
            _ => State::Done,
        }
    }
}

impl ListObjectsPaginator {
    fn new(handle: Arc<Handle>) -> Self {
        Self {
            handle,
            state: Some(State::Paginating { next_token: None }),
        }
    }

    async fn next_page(
        &mut self,
    ) -> Option<Result<ListObjectsV2Output, SdkError<ListObjectsV2Error, Response>>> {
        let next_token = match self.state.as_ref()? {
            State::Done => return None,
            State::Paginating { next_token } => next_token.clone(),
        };

        let config = &self.handle.config;
        let prefix = Some(config.prefix())
            .filter(|prefix| !prefix.is_empty())
            .map(str::to_owned);

        let list_result = config
            .client()
            .list_objects_v2()
            .bucket(config.bucket())
            .set_prefix(prefix)
            .set_continuation_token(next_token)
            .send()
            .instrument(tracing::debug_span!("send-list-objects-v2"))
            .await;

        let prev_state = self.state.take()?;
        match list_result {
            Ok(output) => {
                self.state.replace(prev_state.next_state(&output));
                Some(Ok(output))
            }
            Err(err) => {
                // a failed page ends the listing
                self.state.replace(State::Done);
                Some(Err(err))
            }
        }
    }
}

/// Lazy sequence of every object under the configured prefix.
///
/// Pages are only requested once the previous one has been consumed. A new stream always
/// starts again from the first page.
#[derive(Debug)]
pub(crate) struct ListObjectsStream {
    paginator: ListObjectsPaginator,
    current_page: Option<std::vec::IntoIter<Object>>,
}

impl ListObjectsStream {
    pub(crate) fn new(handle: Arc<Handle>) -> Self {
        Self {
            paginator: ListObjectsPaginator::new(handle),
            current_page: None,
        }
    }

    pub(crate) async fn next(&mut self) -> Option<Result<Object, Error>> {
        loop {
            if let Some(object) = self.current_page.as_mut().and_then(Iterator::next) {
                return Some(Ok(object));
            }

            match self.paginator.next_page().await? {
                Ok(mut page) => {
                    tracing::trace!("recv'd page with {} objects", page.key_count().unwrap_or(0));
                    self.current_page = page.contents.take().map(Vec::into_iter);
                }
                Err(err) => return Some(Err(error::listing_failed(err))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
    use aws_sdk_s3::types::error::NoSuchBucket;
    use aws_smithy_mocks_experimental::{mock, mock_client};
    use test_common::list_page;

    use super::{ListObjectsStream, State};
    use crate::error::ErrorKind;

    fn test_client(s3: aws_sdk_s3::Client, prefix: &str) -> crate::Client {
        let config = crate::Config::builder()
            .bucket("test-bucket")
            .prefix(prefix)
            .client(s3)
            .build()
            .unwrap();
        crate::Client::new(config)
    }

    #[test]
    fn test_next_state() {
        let start = State::Paginating { next_token: None };

        let state2 = start.next_state(&list_page(Some("token1"), &["k1", "k2"]));
        assert_eq!(
            state2,
            State::Paginating {
                next_token: Some("token1".to_owned())
            }
        );

        let state3 = state2.next_state(&list_page(None, &["k3"]));
        assert_eq!(state3, State::Done);
    }

    #[test]
    fn test_truncated_without_token_is_done() {
        let output = aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output::builder()
            .is_truncated(true)
            .build();
        let state = State::Paginating { next_token: None }.next_state(&output);
        assert_eq!(state, State::Done);
    }

    #[tokio::test]
    async fn test_object_stream_follows_continuation_tokens() {
        let resp1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| {
                r.bucket() == Some("test-bucket")
                    && r.prefix() == Some("archive/")
                    && r.continuation_token().is_none()
            })
            .then_output(|| list_page(Some("token1"), &["archive/k1", "archive/k2"]));
        let resp2 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token1"))
            .then_output(|| list_page(Some("token2"), &["archive/k3"]));
        // pages may come back empty while the listing is still truncated
        let resp3 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token2"))
            .then_output(|| list_page(Some("token3"), &[]));
        let resp4 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token3"))
            .then_output(|| list_page(None, &["archive/k4", "archive/k5"]));
        let s3 = mock_client!(aws_sdk_s3, &[&resp1, &resp2, &resp3, &resp4]);

        let client = test_client(s3, "archive/");
        let mut stream = ListObjectsStream::new(client.handle.clone());

        let mut keys = Vec::new();
        while let Some(res) = stream.next().await {
            let obj = res.unwrap();
            keys.push(obj.key.unwrap());
        }

        assert_eq!(
            keys,
            vec![
                "archive/k1",
                "archive/k2",
                "archive/k3",
                "archive/k4",
                "archive/k5"
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_prefix_not_sent() {
        let resp = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.prefix().is_none())
            .then_output(|| list_page(None, &["k1"]));
        let s3 = mock_client!(aws_sdk_s3, &[&resp]);

        let client = test_client(s3, "");
        let mut stream = ListObjectsStream::new(client.handle.clone());

        assert_eq!(Some("k1"), stream.next().await.unwrap().unwrap().key());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_page_ends_stream() {
        let resp1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| list_page(Some("token1"), &["k1"]));
        let resp2 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_error(|| ListObjectsV2Error::NoSuchBucket(NoSuchBucket::builder().build()));
        let s3 = mock_client!(aws_sdk_s3, &[&resp1, &resp2]);

        let client = test_client(s3, "");
        let mut stream = ListObjectsStream::new(client.handle.clone());

        assert_eq!(Some("k1"), stream.next().await.unwrap().unwrap().key());
        let err = stream.next().await.unwrap().unwrap_err();
        assert_eq!(&ErrorKind::ObjectListingFailed, err.kind());
        assert!(stream.next().await.is_none());
    }
}
