//! Shared-state synchronization: the one component in this tour with a
//! real concurrency contract.
//!
//! [`SharedCounter`] owns its integer behind a mutex, so unsynchronized
//! access cannot be expressed by callers; after every worker is joined,
//! the value equals workers x increments-per-worker with no lost
//! updates under any interleaving.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

/// A counter whose integer is reachable only through its guard.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: Mutex<u64>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(0),
        }
    }

    /// Adds 1 under the guard. Safe to call from any number of threads;
    /// waiting callers block until the guard is released.
    pub fn increment(&self) {
        let mut value = self.lock();
        *value += 1;
        // Guard drops here, releasing the lock.
    }

    /// Locks and copies the current value.
    pub fn value(&self) -> u64 {
        *self.lock()
    }

    /// Consumes the counter and reads the final value without locking.
    /// Once ownership is unique, no other thread can hold the guard.
    pub fn into_value(self) -> u64 {
        self.value
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // An interrupted increment cannot tear a plain integer, so a
    // poisoned guard still holds a usable value.
    fn lock(&self) -> MutexGuard<'_, u64> {
        self.value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Spawns `workers` threads that each increment one shared counter
/// `increments_per_worker` times, joins them all, and returns the final
/// value. Zero workers or zero increments yields 0.
pub fn run_workers(workers: usize, increments_per_worker: usize) -> u64 {
    let counter = Arc::new(SharedCounter::new());
    let mut handles = Vec::with_capacity(workers);

    for id in 1..=workers {
        let counter = Arc::clone(&counter);
        let handle = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || {
                for _ in 0..increments_per_worker {
                    counter.increment();
                }
            })
            .expect("spawn worker thread");
        handles.push(handle);
    }

    // Every worker must finish before the final read.
    for handle in handles {
        // A panicked worker still leaves its completed increments in
        // the counter; the join result itself carries nothing.
        let _ = handle.join();
    }

    match Arc::try_unwrap(counter) {
        Ok(counter) => counter.into_value(),
        // Unreachable once every handle is joined, but a locked read
        // is still correct.
        Err(shared) => shared.value(),
    }
}

/// One guarded resource that named callers take turns on, holding the
/// guard across a short simulated delay.
#[derive(Debug, Default)]
pub struct SharedResource {
    guard: Mutex<()>,
}

impl SharedResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_resource(&self, user: &str) {
        let _held = self
            .guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        println!("{user} accessing resource...");
        thread::sleep(Duration::from_millis(10));
        println!("{user} finished with resource");
        // _held drops here; the next caller may enter.
    }
}
