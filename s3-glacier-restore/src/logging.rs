/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::sync::Arc;

/// Receives the human readable progress messages emitted by restore operations.
///
/// The default implementation, [`TracingProgressLogger`], forwards messages as `tracing`
/// events. Supply your own through [`Builder::progress_logger`](crate::config::Builder::progress_logger)
/// to route them elsewhere.
pub trait ProgressLogger: fmt::Debug + Send + Sync {
    /// Detailed progress information
    fn debug(&self, msg: &str);

    /// Per-object progress information
    fn info(&self, msg: &str);
}

/// A shareable, type erased [`ProgressLogger`]
#[derive(Clone, Debug)]
pub struct SharedProgressLogger(Arc<dyn ProgressLogger>);

impl SharedProgressLogger {
    /// Wrap a logger so it can be cheaply cloned
    pub fn new(logger: impl ProgressLogger + 'static) -> Self {
        Self(Arc::new(logger))
    }
}

impl Default for SharedProgressLogger {
    fn default() -> Self {
        Self::new(TracingProgressLogger)
    }
}

impl ProgressLogger for SharedProgressLogger {
    fn debug(&self, msg: &str) {
        self.0.debug(msg)
    }

    fn info(&self, msg: &str) {
        self.0.info(msg)
    }
}

/// Emits progress messages as `tracing` events with the `s3_glacier_restore` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgressLogger;

impl ProgressLogger for TracingProgressLogger {
    fn debug(&self, msg: &str) {
        tracing::debug!(target: "s3_glacier_restore", "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!(target: "s3_glacier_restore", "{msg}");
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgressLogger;

impl ProgressLogger for NoopProgressLogger {
    fn debug(&self, _msg: &str) {}

    fn info(&self, _msg: &str) {}
}
