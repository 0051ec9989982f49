// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Returned by [`OverwriteQueue::try_new`] when the requested capacity is
/// zero.
///
/// [`OverwriteQueue::try_new`]: crate::OverwriteQueue::try_new
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("capacity must be at least 1")]
pub struct CapacityError;

/// Why a take from the queue produced no entry.
///
/// Both variants are the same condition (no entry became available within
/// the allowed wait), split so callers can tell an exhausted wait budget
/// from an immediate miss.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum GetError {
    /// The queue held nothing when the take was attempted. Also returned
    /// by a waiter woken while the queue is still empty.
    #[error("queue is empty")]
    Empty,

    /// The wait budget elapsed without an entry arriving.
    #[error("timed out waiting for an entry")]
    TimedOut,
}
