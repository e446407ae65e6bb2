/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Restore archived Amazon S3 objects from the Glacier storage classes.
//!
//! Objects stored in `GLACIER` or `DEEP_ARCHIVE` must be restored before they can be read.
//! This crate issues [`RestoreObject`] requests for a single key or for every key under a
//! prefix, and waits until S3 reports the restores as complete.
//!
//! [`RestoreObject`]: https://docs.aws.amazon.com/AmazonS3/latest/API/API_RestoreObject.html
//!
//! # Examples
//!
//! Restore everything under a prefix and report the outcome:
//!
//! ```no_run
//! # async fn example() -> Result<(), s3_glacier_restore::error::Error> {
//! use aws_sdk_s3::types::Tier;
//!
//! let config = s3_glacier_restore::from_env()
//!     .bucket("my-bucket")
//!     .prefix("archive/2019/")
//!     .load()
//!     .await?;
//! let client = s3_glacier_restore::Client::new(config);
//!
//! let output = client
//!     .restore_objects()
//!     .days(7)
//!     .tier(Tier::Bulk)
//!     .send()
//!     .await?;
//!
//! println!(
//!     "{} requested, {} already in progress, {} failed",
//!     output.successful().len(),
//!     output.restore_in_progress().len(),
//!     output.failed().len()
//! );
//!
//! // block until every object is readable again
//! client.wait_for_restore().send().await?;
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`restore_object`](crate::Client::restore_object) - restore a single object
//! * [`restore_objects`](crate::Client::restore_objects) - restore every object under the prefix
//! * [`is_object_restored`](crate::Client::is_object_restored) - check a single object
//! * [`wait_for_restore`](crate::Client::wait_for_restore) - poll until every object is restored

/// Default number of days a restored copy stays available.
pub const DEFAULT_RESTORE_DAYS: i32 = 3;

/// Error types emitted by `s3-glacier-restore`
pub mod error;

/// Common types used by `s3-glacier-restore`
pub mod types;

/// Progress logging
pub mod logging;

/// Restore client
pub mod client;

/// Restore operations
pub mod operation;

/// Client configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
