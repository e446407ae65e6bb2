/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::Credentials;
use aws_smithy_async::rt::sleep::AsyncSleep;
use aws_types::SdkConfig;

use crate::config::Builder;
use crate::error::{self, Error};
use crate::logging::ProgressLogger;
use crate::types::{PollSettings, RestoreCodeMapping, RestoreParams};
use crate::Config;

const STATIC_CREDENTIALS_PROVIDER: &str = "S3GlacierRestoreStatic";

/// Load restore [`Config`] from the environment.
///
/// Credentials, region and endpoint are resolved through the standard AWS configuration chain
/// unless explicit credentials are given.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    session_token: Option<String>,
}

impl ConfigLoader {
    /// Set the bucket holding the archived objects.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.builder = self.builder.bucket(bucket);
        self
    }

    /// Limit bulk operations to keys that begin with the given prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.builder = self.builder.prefix(prefix);
        self
    }

    /// Restore parameters used when an operation does not override them.
    pub fn default_restore_params(mut self, params: RestoreParams) -> Self {
        self.builder = self.builder.default_restore_params(params);
        self
    }

    /// How `RestoreObject` error codes are classified.
    pub fn code_mapping(mut self, mapping: RestoreCodeMapping) -> Self {
        self.builder = self.builder.code_mapping(mapping);
        self
    }

    /// Settings for waiting on restores to complete.
    pub fn poll_settings(mut self, poll: PollSettings) -> Self {
        self.builder = self.builder.poll_settings(poll);
        self
    }

    /// Set the sleep implementation used between status checks.
    pub fn sleep_impl(mut self, sleep_impl: impl AsyncSleep + 'static) -> Self {
        self.builder = self.builder.sleep_impl(sleep_impl);
        self
    }

    /// Route progress messages to the given logger.
    pub fn progress_logger(mut self, logger: impl ProgressLogger + 'static) -> Self {
        self.builder = self.builder.progress_logger(logger);
        self
    }

    /// Disable progress messages entirely.
    pub fn quiet(mut self) -> Self {
        self.builder = self.builder.quiet();
        self
    }

    /// Use this access key instead of the default credential chain.
    ///
    /// Must be combined with [`secret_access_key`](Self::secret_access_key).
    pub fn access_key_id(mut self, access_key_id: Option<String>) -> Self {
        self.access_key_id = access_key_id;
        self
    }

    /// Secret key paired with [`access_key_id`](Self::access_key_id).
    pub fn secret_access_key(mut self, secret_access_key: Option<String>) -> Self {
        self.secret_access_key = secret_access_key;
        self
    }

    /// Session token for temporary credentials.
    pub fn session_token(mut self, session_token: Option<String>) -> Self {
        self.session_token = session_token;
        self
    }

    fn static_credentials(&self) -> Result<Option<Credentials>, Error> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(key), Some(secret)) => Ok(Some(Credentials::new(
                key,
                secret,
                self.session_token.clone(),
                None,
                STATIC_CREDENTIALS_PROVIDER,
            ))),
            (None, None) if self.session_token.is_none() => Ok(None),
            _ => Err(error::invalid_input(
                "an access key id and a secret access key must be given together",
            )),
        }
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Result<Config, Error> {
        let mut loader = aws_config::from_env();
        if let Some(credentials) = self.static_credentials()? {
            loader = loader.credentials_provider(credentials);
        }

        let shared_config: SdkConfig = loader.load().await;
        let s3_client = aws_sdk_s3::Client::new(&shared_config);
        Ok(self.builder.client(s3_client).build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigLoader;
    use crate::error::ErrorKind;

    #[test]
    fn test_no_explicit_credentials() {
        let loader = ConfigLoader::default();
        assert!(loader.static_credentials().unwrap().is_none());
    }

    #[test]
    fn test_explicit_credentials() {
        let loader = ConfigLoader::default()
            .access_key_id(Some("AKIDEXAMPLE".to_owned()))
            .secret_access_key(Some("secret".to_owned()))
            .session_token(Some("token".to_owned()));

        let credentials = loader.static_credentials().unwrap().unwrap();
        assert_eq!("AKIDEXAMPLE", credentials.access_key_id());
        assert_eq!("secret", credentials.secret_access_key());
        assert_eq!(Some("token"), credentials.session_token());
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let err = ConfigLoader::default()
            .access_key_id(Some("AKIDEXAMPLE".to_owned()))
            .static_credentials()
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());

        let err = ConfigLoader::default()
            .session_token(Some("token".to_owned()))
            .static_credentials()
            .unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
