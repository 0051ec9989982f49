// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Threaded end-to-end scenarios for `OverwriteQueue`.

use libdd_overwrite_queue::{GetError, OverwriteQueue};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
#[cfg_attr(miri, ignore)]
fn entries_are_delivered_exactly_once_across_consumers() {
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: usize = 64;

    // Sized so nothing is evicted; every produced entry must come out once.
    let queue = Arc::new(OverwriteQueue::try_new(PRODUCERS * PER_PRODUCER).unwrap());

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    queue.put((p, i));
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..3)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut received = Vec::new();
                loop {
                    match queue.get_timeout(Duration::from_millis(200)) {
                        Ok(entry) => received.push(entry),
                        // Woken empty-handed by a wake another consumer won;
                        // retrying is the caller's job.
                        Err(GetError::Empty) => continue,
                        Err(GetError::TimedOut) => break,
                    }
                }
                received
            })
        })
        .collect();

    for producer in producers {
        producer.join().unwrap();
    }
    let mut all = Vec::new();
    for consumer in consumers {
        all.extend(consumer.join().unwrap());
    }

    assert_eq!(all.len(), PRODUCERS * PER_PRODUCER);
    let unique: HashSet<_> = all.iter().copied().collect();
    assert_eq!(unique.len(), PRODUCERS * PER_PRODUCER);
}

#[test]
#[cfg_attr(miri, ignore)]
fn outrun_consumer_observes_only_newest_entries() {
    let queue = OverwriteQueue::try_new(8).unwrap();

    // Producer runs to completion before the consumer takes anything.
    for i in 0..1_000u32 {
        queue.put(i);
    }

    let mut drained = Vec::new();
    while let Ok(v) = queue.try_get() {
        drained.push(v);
    }
    assert_eq!(drained, (992..1_000).collect::<Vec<_>>());
}

#[test]
#[cfg_attr(miri, ignore)]
fn notify_all_unblocks_an_unbounded_get() {
    let queue = Arc::new(OverwriteQueue::<u32>::try_new(2).unwrap());
    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.get())
    };

    thread::sleep(Duration::from_millis(50));
    queue.notify_all();

    assert_eq!(consumer.join().unwrap(), Err(GetError::Empty));
}
