/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of restore errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// Listing the objects under the configured prefix failed
    ObjectListingFailed,

    /// Resource not found (e.g. bucket or key)
    NotFound,

    /// Any other error returned by the service
    ServiceError,

    /// The restore request for an object failed
    RestoreFailed,

    /// A restore of the object is already underway
    RestoreInProgress,

    /// An object was still being restored after the configured number of status checks
    PollAttemptsExhausted,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::ObjectListingFailed => write!(f, "failed to list objects"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::ServiceError => write!(f, "service error"),
            ErrorKind::RestoreFailed => write!(f, "object restore failed"),
            ErrorKind::RestoreInProgress => write!(f, "object restore already in progress"),
            ErrorKind::PollAttemptsExhausted => {
                write!(f, "object still restoring after maximum status checks")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::NotFound,
            _ => ErrorKind::ServiceError,
        };

        Error::new(kind, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn listing_failed<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ObjectListingFailed, err)
}

pub(crate) fn poll_attempts_exhausted(key: &str, attempts: u32) -> Error {
    Error::new(
        ErrorKind::PollAttemptsExhausted,
        format!("restore of `{key}` still ongoing after {attempts} status checks"),
    )
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use aws_sdk_s3::error::{ErrorMetadata, SdkError};
    use aws_sdk_s3::operation::head_object::HeadObjectError;

    #[test]
    fn test_not_found_code_maps_to_not_found_kind() {
        let err: SdkError<HeadObjectError, ()> = SdkError::service_error(
            HeadObjectError::generic(ErrorMetadata::builder().code("NotFound").build()),
            (),
        );
        let err = Error::from(err);
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn test_other_codes_map_to_service_error() {
        let err: SdkError<HeadObjectError, ()> = SdkError::service_error(
            HeadObjectError::generic(ErrorMetadata::builder().code("AccessDenied").build()),
            (),
        );
        let err = Error::from(err);
        assert_eq!(&ErrorKind::ServiceError, err.kind());
    }

    #[test]
    fn test_crate_constructors_set_kind() {
        let err = super::listing_failed("page failed");
        assert_eq!(&ErrorKind::ObjectListingFailed, err.kind());

        let err = super::invalid_input("bad input");
        assert_eq!(&ErrorKind::InputInvalid, err.kind());

        let err = super::poll_attempts_exhausted("k1", 3);
        assert_eq!(&ErrorKind::PollAttemptsExhausted, err.kind());
        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.contains("`k1`") && source.contains("3 status checks"));
    }
}
