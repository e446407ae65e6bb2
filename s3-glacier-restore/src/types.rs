/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::Duration;

use aws_sdk_s3::types::{GlacierJobParameters, RestoreRequest};
use aws_smithy_types::error::operation::BuildError;

use crate::error::{Error, ErrorKind};

pub use aws_sdk_s3::types::Tier;

/// Value of the `x-amz-restore` header while S3 is still restoring an object.
pub(crate) const ONGOING_RESTORE: &str = "ongoing-request=\"true\"";

/// Default interval between two status checks of the same object.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Parameters sent with a `RestoreObject` request.
///
/// Fields left unset fall back to the client defaults, see [`RestoreParams::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreParams {
    days: Option<i32>,
    tier: Option<Tier>,
}

impl RestoreParams {
    /// Create an empty set of restore parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifetime of the restored copy in days
    pub fn days(mut self, days: i32) -> Self {
        self.days = Some(days);
        self
    }

    /// Lifetime of the restored copy in days
    pub fn set_days(mut self, days: Option<i32>) -> Self {
        self.days = days;
        self
    }

    /// Retrieval tier to use for the restore
    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Retrieval tier to use for the restore
    pub fn set_tier(mut self, tier: Option<Tier>) -> Self {
        self.tier = tier;
        self
    }

    /// Lifetime of the restored copy in days
    pub fn get_days(&self) -> Option<i32> {
        self.days
    }

    /// Retrieval tier to use for the restore
    pub fn get_tier(&self) -> Option<&Tier> {
        self.tier.as_ref()
    }

    /// Merge `overrides` on top of `self`. Any field set in `overrides` wins.
    pub fn merge(&self, overrides: &RestoreParams) -> RestoreParams {
        RestoreParams {
            days: overrides.days.or(self.days),
            tier: overrides.tier.clone().or_else(|| self.tier.clone()),
        }
    }

    pub(crate) fn to_request(&self) -> Result<RestoreRequest, BuildError> {
        let job_parameters = self
            .tier
            .clone()
            .map(|tier| GlacierJobParameters::builder().tier(tier).build())
            .transpose()?;

        Ok(RestoreRequest::builder()
            .set_days(self.days)
            .set_glacier_job_parameters(job_parameters)
            .build())
    }
}

/// How service error codes returned by `RestoreObject` are mapped to outcomes.
///
/// Default is [`RestoreCodeMapping::Inverted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RestoreCodeMapping {
    /// `RestoreAlreadyInProgress` is reported as [`RestoreOutcome::Error`] and every other
    /// error code as [`RestoreOutcome::RestoreInProgress`].
    #[default]
    Inverted,

    /// `RestoreAlreadyInProgress` is reported as [`RestoreOutcome::RestoreInProgress`] and every
    /// other error code as [`RestoreOutcome::Error`].
    Direct,
}

impl RestoreCodeMapping {
    /// Whether an error with the given service code counts as "restore already in progress".
    pub(crate) fn is_in_progress(&self, code: &str) -> bool {
        let already_in_progress = code == "RestoreAlreadyInProgress";
        match self {
            RestoreCodeMapping::Inverted => !already_in_progress,
            RestoreCodeMapping::Direct => already_in_progress,
        }
    }
}

/// Result of requesting the restore of a single object.
#[derive(Debug)]
#[non_exhaustive]
pub enum RestoreOutcome {
    /// S3 accepted the restore request (or the object was already restored)
    Successful,

    /// A restore of this object is already underway
    RestoreInProgress(Error),

    /// The restore request failed
    Error(Error),
}

impl RestoreOutcome {
    /// Returns true if the restore request was accepted
    pub fn is_successful(&self) -> bool {
        matches!(self, RestoreOutcome::Successful)
    }

    /// The error behind a non-successful outcome
    pub fn error(&self) -> Option<&Error> {
        match self {
            RestoreOutcome::Successful => None,
            RestoreOutcome::RestoreInProgress(err) | RestoreOutcome::Error(err) => Some(err),
        }
    }

    /// Convert the outcome into a `Result`, treating anything other than
    /// [`RestoreOutcome::Successful`] as an error.
    ///
    /// The error kind is [`ErrorKind::RestoreInProgress`] or [`ErrorKind::RestoreFailed`].
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            RestoreOutcome::Successful => Ok(()),
            RestoreOutcome::RestoreInProgress(err) | RestoreOutcome::Error(err) => Err(err),
        }
    }

    pub(crate) fn in_progress(source: crate::error::BoxError) -> Self {
        RestoreOutcome::RestoreInProgress(Error::new(ErrorKind::RestoreInProgress, source))
    }

    pub(crate) fn failed(source: crate::error::BoxError) -> Self {
        RestoreOutcome::Error(Error::new(ErrorKind::RestoreFailed, source))
    }
}

/// Detailed information about an object whose restore request failed
#[non_exhaustive]
#[derive(Debug)]
pub struct FailedRestore {
    /// The listed object
    pub(crate) object: aws_sdk_s3::types::Object,

    /// The error returned for the restore request
    pub(crate) error: Error,
}

impl FailedRestore {
    /// The listed object
    pub fn object(&self) -> &aws_sdk_s3::types::Object {
        &self.object
    }

    /// The error returned for the restore request
    pub fn error(&self) -> &Error {
        &self.error
    }
}

/// Restore state of an object as reported by the `x-amz-restore` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreStatus {
    /// No restore header present. Either the object was never archived, a restore was never
    /// requested, or the restored copy already expired.
    NotRequested,

    /// S3 is still restoring the object
    Ongoing,

    /// A restored copy is available
    Restored {
        /// When the restored copy expires, as reported by S3
        expiry_date: Option<String>,
    },
}

impl RestoreStatus {
    /// Parse the value of an `x-amz-restore` header
    pub fn from_header(value: Option<&str>) -> Self {
        match value {
            None => RestoreStatus::NotRequested,
            Some(ONGOING_RESTORE) => RestoreStatus::Ongoing,
            Some(value) => RestoreStatus::Restored {
                expiry_date: parse_expiry_date(value),
            },
        }
    }

    /// Returns false only while a restore is ongoing.
    ///
    /// NOTE: an object for which no restore was ever requested also counts as restored.
    pub fn is_restored(&self) -> bool {
        !matches!(self, RestoreStatus::Ongoing)
    }
}

// ongoing-request="false", expiry-date="Fri, 21 Dec 2012 00:00:00 GMT"
fn parse_expiry_date(value: &str) -> Option<String> {
    let (_, rest) = value.split_once("expiry-date=\"")?;
    let (date, _) = rest.split_once('"')?;
    Some(date.to_owned())
}

/// How the completion poller waits between status checks.
#[derive(Debug, Clone)]
pub struct PollSettings {
    interval: Duration,
    max_attempts: Option<u32>,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
        }
    }
}

impl PollSettings {
    /// Create poll settings with the given interval and no attempt limit
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    /// Stop waiting on an object after this many status checks.
    ///
    /// At least one check is always made, so `0` is treated as `1`. Default is to wait forever.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Time to sleep between two status checks of the same object
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Maximum number of status checks per object, if bounded
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{PollSettings, RestoreCodeMapping, RestoreParams, RestoreStatus, Tier};

    #[test]
    fn test_merge_override_wins() {
        let defaults = RestoreParams::new().days(3).tier(Tier::Standard);
        let overrides = RestoreParams::new().tier(Tier::Bulk);

        let merged = defaults.merge(&overrides);
        assert_eq!(Some(3), merged.get_days());
        assert_eq!(Some(&Tier::Bulk), merged.get_tier());

        let merged = defaults.merge(&RestoreParams::new().days(10));
        assert_eq!(Some(10), merged.get_days());
        assert_eq!(Some(&Tier::Standard), merged.get_tier());
    }

    #[test]
    fn test_merge_empty_keeps_defaults() {
        let defaults = RestoreParams::new().days(5).tier(Tier::Expedited);
        assert_eq!(defaults, defaults.merge(&RestoreParams::new()));
    }

    #[test]
    fn test_to_request() {
        let request = RestoreParams::new()
            .days(2)
            .tier(Tier::Bulk)
            .to_request()
            .unwrap();
        assert_eq!(Some(2), request.days());
        assert_eq!(
            &Tier::Bulk,
            request.glacier_job_parameters().unwrap().tier()
        );

        let request = RestoreParams::new().to_request().unwrap();
        assert_eq!(None, request.days());
        assert!(request.glacier_job_parameters().is_none());
    }

    #[test]
    fn test_code_mapping() {
        let inverted = RestoreCodeMapping::Inverted;
        assert!(!inverted.is_in_progress("RestoreAlreadyInProgress"));
        assert!(inverted.is_in_progress("InvalidObjectState"));

        let direct = RestoreCodeMapping::Direct;
        assert!(direct.is_in_progress("RestoreAlreadyInProgress"));
        assert!(!direct.is_in_progress("InvalidObjectState"));
    }

    #[test]
    fn test_restore_status_from_header() {
        assert_eq!(RestoreStatus::NotRequested, RestoreStatus::from_header(None));
        assert_eq!(
            RestoreStatus::Ongoing,
            RestoreStatus::from_header(Some("ongoing-request=\"true\""))
        );
        assert_eq!(
            RestoreStatus::Restored {
                expiry_date: Some("Fri, 21 Dec 2012 00:00:00 GMT".to_owned())
            },
            RestoreStatus::from_header(Some(
                "ongoing-request=\"false\", expiry-date=\"Fri, 21 Dec 2012 00:00:00 GMT\""
            ))
        );
        assert_eq!(
            RestoreStatus::Restored { expiry_date: None },
            RestoreStatus::from_header(Some("something-else"))
        );
    }

    #[test]
    fn test_only_ongoing_is_not_restored() {
        assert!(!RestoreStatus::Ongoing.is_restored());
        assert!(RestoreStatus::NotRequested.is_restored());
        assert!(RestoreStatus::Restored { expiry_date: None }.is_restored());
    }

    #[test]
    fn test_max_attempts_at_least_one() {
        let poll = PollSettings::new(Duration::from_secs(1)).with_max_attempts(0);
        assert_eq!(Some(1), poll.max_attempts());

        let poll = PollSettings::default().with_max_attempts(5);
        assert_eq!(Some(5), poll.max_attempts());
    }
}
