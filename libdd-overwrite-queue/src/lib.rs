// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! A bounded FIFO buffer that sheds its oldest entry instead of stalling
//! the producer.
//!
//! [`OverwriteQueue`] decouples a continuous producer from a slower
//! consumer without backpressure: inserts never block and never fail, and
//! once the fixed capacity is reached each insert discards the oldest
//! buffered entry. Consumers take entries oldest-first and may park,
//! optionally with a timeout, until one arrives.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

mod error;
mod queue;

pub use error::{CapacityError, GetError};
pub use queue::OverwriteQueue;

use std::sync::{Condvar, Mutex, MutexGuard, WaitTimeoutResult};
use std::time::Duration;

/// Extension trait for `Mutex` to provide a method that acquires the lock,
/// panicking if the lock is poisoned.
///
/// Avoids sprinkling `#[allow(clippy::unwrap_used)]` over every lock site.
/// A poisoned lock means a holder panicked mid-update; propagating the
/// panic is the only sound reaction for this crate.
pub(crate) trait MutexExt<T> {
    fn lock_or_panic(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    #[inline(always)]
    #[track_caller]
    fn lock_or_panic(&self) -> MutexGuard<'_, T> {
        #[allow(clippy::unwrap_used)]
        self.lock().unwrap()
    }
}

/// Sibling of [`MutexExt`] for `Condvar` waits, which hand the (possibly
/// poisoned) lock back on return.
pub(crate) trait CondvarExt {
    fn wait_or_panic<'a, T>(&self, guard: MutexGuard<'a, T>) -> MutexGuard<'a, T>;

    fn wait_timeout_or_panic<'a, T>(
        &self,
        guard: MutexGuard<'a, T>,
        timeout: Duration,
    ) -> (MutexGuard<'a, T>, WaitTimeoutResult);
}

impl CondvarExt for Condvar {
    #[inline(always)]
    #[track_caller]
    fn wait_or_panic<'a, T>(&self, guard: MutexGuard<'a, T>) -> MutexGuard<'a, T> {
        #[allow(clippy::unwrap_used)]
        self.wait(guard).unwrap()
    }

    #[inline(always)]
    #[track_caller]
    fn wait_timeout_or_panic<'a, T>(
        &self,
        guard: MutexGuard<'a, T>,
        timeout: Duration,
    ) -> (MutexGuard<'a, T>, WaitTimeoutResult) {
        #[allow(clippy::unwrap_used)]
        self.wait_timeout(guard, timeout).unwrap()
    }
}
