/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::Tier;
use aws_smithy_async::rt::sleep::{AsyncSleep, SharedAsyncSleep, TokioSleep};
use aws_smithy_types::error::operation::BuildError;

use crate::logging::{NoopProgressLogger, ProgressLogger, SharedProgressLogger};
use crate::types::{PollSettings, RestoreCodeMapping, RestoreParams};
use crate::DEFAULT_RESTORE_DAYS;

/// Environment based configuration loading
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    prefix: String,
    default_restore_params: RestoreParams,
    code_mapping: RestoreCodeMapping,
    poll: PollSettings,
    sleep_impl: SharedAsyncSleep,
    progress_logger: SharedProgressLogger,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The bucket holding the archived objects
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key prefix that bulk operations are limited to. Empty means the whole bucket.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Restore parameters every per-call override is merged onto
    pub fn default_restore_params(&self) -> &RestoreParams {
        &self.default_restore_params
    }

    /// How `RestoreObject` error codes are classified
    pub fn code_mapping(&self) -> RestoreCodeMapping {
        self.code_mapping
    }

    /// Default settings used when waiting for restores to complete
    pub fn poll_settings(&self) -> &PollSettings {
        &self.poll
    }

    /// Sleep implementation used between status checks
    pub fn sleep_impl(&self) -> &SharedAsyncSleep {
        &self.sleep_impl
    }

    /// Where progress messages go
    pub fn progress_logger(&self) -> &SharedProgressLogger {
        &self.progress_logger
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    prefix: Option<String>,
    default_restore_params: Option<RestoreParams>,
    code_mapping: RestoreCodeMapping,
    poll: PollSettings,
    sleep_impl: Option<SharedAsyncSleep>,
    progress_logger: Option<SharedProgressLogger>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the bucket holding the archived objects.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the bucket holding the archived objects.
    pub fn set_bucket(mut self, bucket: Option<String>) -> Self {
        self.bucket = bucket;
        self
    }

    /// Limit bulk operations to keys that begin with the given prefix.
    ///
    /// Default is the empty prefix (every object in the bucket).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Limit bulk operations to keys that begin with the given prefix.
    pub fn set_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Restore parameters used when an operation does not override them.
    ///
    /// Default is a 3 day restore using the `Standard` tier.
    pub fn default_restore_params(mut self, params: RestoreParams) -> Self {
        self.default_restore_params = Some(params);
        self
    }

    /// How `RestoreObject` error codes are classified.
    ///
    /// Default is [`RestoreCodeMapping::Inverted`].
    pub fn code_mapping(mut self, mapping: RestoreCodeMapping) -> Self {
        self.code_mapping = mapping;
        self
    }

    /// Settings for waiting on restores to complete.
    ///
    /// Default is to check every 60 seconds with no limit on the number of checks.
    pub fn poll_settings(mut self, poll: PollSettings) -> Self {
        self.poll = poll;
        self
    }

    /// Set the sleep implementation used between status checks.
    ///
    /// Default is a tokio based sleep.
    pub fn sleep_impl(mut self, sleep_impl: impl AsyncSleep + 'static) -> Self {
        self.sleep_impl = Some(SharedAsyncSleep::new(sleep_impl));
        self
    }

    /// Route progress messages to the given logger.
    ///
    /// Default is [`TracingProgressLogger`](crate::logging::TracingProgressLogger).
    pub fn progress_logger(mut self, logger: impl ProgressLogger + 'static) -> Self {
        self.progress_logger = Some(SharedProgressLogger::new(logger));
        self
    }

    /// Disable progress messages entirely.
    pub fn quiet(mut self) -> Self {
        self.progress_logger = Some(SharedProgressLogger::new(NoopProgressLogger));
        self
    }

    /// Set an explicit S3 client to use.
    ///
    /// NOTE: A client is required.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Result<Config, BuildError> {
        let bucket = match self.bucket {
            Some(bucket) if !bucket.is_empty() => bucket,
            _ => return Err(BuildError::missing_field("bucket", "A bucket is required")),
        };

        let client = self
            .client
            .ok_or_else(|| BuildError::missing_field("client", "An S3 client is required"))?;

        let default_restore_params = self.default_restore_params.unwrap_or_else(|| {
            RestoreParams::new()
                .days(DEFAULT_RESTORE_DAYS)
                .tier(Tier::Standard)
        });

        Ok(Config {
            bucket,
            prefix: self.prefix.unwrap_or_default(),
            default_restore_params,
            code_mapping: self.code_mapping,
            poll: self.poll,
            sleep_impl: self
                .sleep_impl
                .unwrap_or_else(|| SharedAsyncSleep::new(TokioSleep::new())),
            progress_logger: self.progress_logger.unwrap_or_default(),
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::types::Tier;

    use super::Config;
    use crate::types::RestoreCodeMapping;

    #[test]
    fn test_no_bucket_error() {
        let client = test_common::unconnected_client();
        let err = Config::builder().client(client).build().unwrap_err();
        assert!(err.to_string().contains("A bucket is required"));
    }

    #[test]
    fn test_no_client_error() {
        let err = Config::builder().bucket("test-bucket").build().unwrap_err();
        assert!(err.to_string().contains("An S3 client is required"));
    }

    #[test]
    fn test_defaults() {
        let client = test_common::unconnected_client();
        let config = Config::builder()
            .bucket("test-bucket")
            .client(client)
            .build()
            .unwrap();

        assert_eq!("", config.prefix());
        assert_eq!(Some(3), config.default_restore_params().get_days());
        assert_eq!(
            Some(&Tier::Standard),
            config.default_restore_params().get_tier()
        );
        assert_eq!(RestoreCodeMapping::Inverted, config.code_mapping());
        assert_eq!(60, config.poll_settings().interval().as_secs());
        assert_eq!(None, config.poll_settings().max_attempts());
    }
}
