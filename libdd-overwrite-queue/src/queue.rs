// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

use tracing::debug;

use crate::error::{CapacityError, GetError};
use crate::{CondvarExt, MutexExt};

/// A fixed-capacity FIFO buffer whose inserts never block and never fail.
///
/// Once the queue is full, each [`put`](Self::put) discards the oldest
/// buffered entry to make room for the newest, so a consumer that falls
/// behind observes the latest `capacity` entries rather than slowing the
/// producer down. Any number of producer and consumer threads may share
/// one instance.
///
/// All state lives behind a single mutex with an associated condition
/// variable; consumers park on the condvar when the queue is empty and are
/// woken one-per-insert.
#[derive(Debug)]
pub struct OverwriteQueue<T> {
    items: Mutex<VecDeque<T>>,
    available: Condvar,
    capacity: usize,
}

impl<T> OverwriteQueue<T> {
    /// Creates an empty queue retaining at most `capacity` entries.
    ///
    /// Rejects a zero capacity: a queue that can hold nothing would
    /// discard every insert.
    pub fn try_new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }
        Ok(Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            available: Condvar::new(),
            capacity,
        })
    }

    /// Inserts `item` at the tail, discarding the oldest entry if the
    /// queue is full.
    ///
    /// Never blocks and has no error path: producers must be able to push
    /// at full rate regardless of consumer speed. Wakes one parked
    /// consumer per insert.
    pub fn put(&self, item: T) {
        let mut items = self.items.lock_or_panic();
        if items.len() >= self.capacity {
            items.pop_front();
            debug!(
                queue.capacity = self.capacity,
                "queue full, discarded oldest entry"
            );
        }
        items.push_back(item);
        self.available.notify_one();
    }

    /// Removes and returns the oldest entry, parking until one arrives.
    ///
    /// The wait is single-shot: a consumer woken while the queue is still
    /// empty (by [`notify_all`](Self::notify_all), a spurious wake, or
    /// another consumer taking the entry first) returns
    /// [`GetError::Empty`] instead of parking again. Callers that want to
    /// keep waiting call `get` again.
    pub fn get(&self) -> Result<T, GetError> {
        let mut items = self.items.lock_or_panic();
        if items.is_empty() {
            items = self.available.wait_or_panic(items);
        }
        items.pop_front().ok_or(GetError::Empty)
    }

    /// Removes and returns the oldest entry, parking for at most
    /// `timeout`.
    ///
    /// Returns [`GetError::TimedOut`] when the wait expires with nothing
    /// to take; an entry that arrives right at expiry is still returned.
    /// The wait is single-shot, as with [`get`](Self::get). A zero
    /// timeout degenerates to an immediate re-check.
    pub fn get_timeout(&self, timeout: Duration) -> Result<T, GetError> {
        let mut items = self.items.lock_or_panic();
        if items.is_empty() {
            let (guard, wait) = self.available.wait_timeout_or_panic(items, timeout);
            items = guard;
            if wait.timed_out() {
                return items.pop_front().ok_or(GetError::TimedOut);
            }
        }
        items.pop_front().ok_or(GetError::Empty)
    }

    /// Removes and returns the oldest entry if one is present, without
    /// parking.
    pub fn try_get(&self) -> Result<T, GetError> {
        self.items.lock_or_panic().pop_front().ok_or(GetError::Empty)
    }

    /// Wakes every parked consumer without inserting, removing, or
    /// otherwise touching any entry.
    ///
    /// Woken consumers with nothing to take return [`GetError::Empty`];
    /// shutdown layers on top of that (wake all waiters, let them observe
    /// the empty queue and stop retrying).
    pub fn notify_all(&self) {
        let _items = self.items.lock_or_panic();
        self.available.notify_all();
    }

    /// Number of entries currently buffered.
    pub fn len(&self) -> usize {
        self.items.lock_or_panic().len()
    }

    /// Whether the queue currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.lock_or_panic().is_empty()
    }

    /// Maximum number of entries the queue retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
