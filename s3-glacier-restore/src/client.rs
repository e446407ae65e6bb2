/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::Config;

/// Glacier restore client for Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a restore config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Request the restore of a single archived object.
    ///
    /// Constructs a fluent builder for the
    /// [`RestoreObject`](crate::operation::restore_object::builders::RestoreObjectFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_sdk_s3::types::Tier;
    ///
    /// async fn restore(client: &s3_glacier_restore::Client) -> Result<(), s3_glacier_restore::error::Error> {
    ///     let output = client
    ///         .restore_object()
    ///         .key("archive/2019/data.parquet")
    ///         .days(5)
    ///         .tier(Tier::Expedited)
    ///         .send()
    ///         .await?;
    ///
    ///     // anything other than an accepted request becomes an error
    ///     output.into_outcome().into_result()
    /// }
    /// ```
    pub fn restore_object(
        &self,
    ) -> crate::operation::restore_object::builders::RestoreObjectFluentBuilder {
        crate::operation::restore_object::builders::RestoreObjectFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Request the restore of every object under the configured prefix.
    ///
    /// Objects are restored one after the other. A failed request never stops the remaining
    /// objects from being processed; the output sorts every listed object into one of three
    /// buckets.
    ///
    /// Constructs a fluent builder for the
    /// [`RestoreObjects`](crate::operation::restore_objects::builders::RestoreObjectsFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// async fn restore_all(client: &s3_glacier_restore::Client) -> Result<(), s3_glacier_restore::error::Error> {
    ///     let output = client.restore_objects().days(7).send().await?;
    ///     for failed in output.failed() {
    ///         println!("{:?} failed: {}", failed.object().key(), failed.error());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn restore_objects(
        &self,
    ) -> crate::operation::restore_objects::builders::RestoreObjectsFluentBuilder {
        crate::operation::restore_objects::builders::RestoreObjectsFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Fetch the restore status of a single object.
    ///
    /// Constructs a fluent builder for the
    /// [`RestoreStatus`](crate::operation::restore_status::builders::RestoreStatusFluentBuilder) operation.
    pub fn restore_status(
        &self,
    ) -> crate::operation::restore_status::builders::RestoreStatusFluentBuilder {
        crate::operation::restore_status::builders::RestoreStatusFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Returns `false` while S3 reports an ongoing restore of `key`, `true` otherwise.
    ///
    /// NOTE: an object that was never archived or never requested for restore also reports
    /// `true`. Use [`restore_status`](Self::restore_status) to tell these cases apart.
    pub async fn is_object_restored(&self, key: impl Into<String>) -> Result<bool, Error> {
        let output = self.restore_status().key(key).send().await?;
        Ok(output.is_restored())
    }

    /// Wait until every object under the configured prefix is restored.
    ///
    /// Objects are checked one at a time. The client sleeps between status checks of the same
    /// object and only moves on once that object is restored. Without a configured attempt
    /// limit this waits forever on an object whose restore never completes.
    ///
    /// Constructs a fluent builder for the
    /// [`WaitForRestore`](crate::operation::wait_for_restore::builders::WaitForRestoreFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::time::Duration;
    ///
    /// async fn wait(client: &s3_glacier_restore::Client) -> Result<(), s3_glacier_restore::error::Error> {
    ///     let output = client
    ///         .wait_for_restore()
    ///         .interval(Duration::from_secs(300))
    ///         .max_attempts(48)
    ///         .send()
    ///         .await?;
    ///     println!("{} objects ready", output.objects_checked());
    ///     Ok(())
    /// }
    /// ```
    pub fn wait_for_restore(
        &self,
    ) -> crate::operation::wait_for_restore::builders::WaitForRestoreFluentBuilder {
        crate::operation::wait_for_restore::builders::WaitForRestoreFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
