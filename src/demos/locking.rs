//! Mutual exclusion: many workers, one counter, no lost updates.
//!
//! This is the one demonstration with a correctness contract: after
//! every worker is joined, the counter equals workers x increments.

use std::sync::Arc;
use std::thread;

use crate::error::DemoError;
use crate::sync::{run_workers, SharedCounter, SharedResource};

const WORKERS: usize = 5;
const INCREMENTS_PER_WORKER: usize = 100;

pub fn run() -> Result<(), DemoError> {
    println!("\n=== Mutex Counter Example ===");

    let counter = Arc::new(SharedCounter::new());
    let mut handles = Vec::with_capacity(WORKERS);

    for id in 1..=WORKERS {
        let counter = Arc::clone(&counter);
        // Named threads show up in panic messages and profilers.
        let handle = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || {
                for _ in 0..INCREMENTS_PER_WORKER {
                    counter.increment();
                }
                println!("Worker {id} completed");
            })
            .map_err(|err| DemoError::failed("Mutex Counter", err.to_string()))?;
        handles.push(handle);
    }

    // Every worker must finish before the final read.
    for handle in handles {
        let _ = handle.join();
    }

    // All handles are joined, so ownership is unique again and the
    // final read needs no guard.
    let total = match Arc::try_unwrap(counter) {
        Ok(counter) => counter.into_value(),
        Err(shared) => shared.value(),
    };
    println!(
        "Final counter value: {total} (expected: {})",
        WORKERS * INCREMENTS_PER_WORKER
    );

    // Same contract, scaled to however many cores this machine has.
    let workers = num_cpus::get();
    let scaled = run_workers(workers, INCREMENTS_PER_WORKER);
    println!("Machine-scaled run: {workers} workers x {INCREMENTS_PER_WORKER} increments = {scaled}");

    // Two named callers taking turns on one guarded resource.
    let resource = SharedResource::new();
    resource.use_resource("User 1");
    resource.use_resource("User 2");

    Ok(())
}
