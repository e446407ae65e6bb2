/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Paginated listing of the objects under the configured prefix
pub(crate) mod list_objects;

/// Types for single object restore operation
pub mod restore_object;

/// Types for restoring every object under the configured prefix
pub mod restore_objects;

/// Types for checking the restore status of a single object
pub mod restore_status;

/// Types for waiting until every object under the configured prefix is restored
pub mod wait_for_restore;
