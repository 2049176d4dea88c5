//! Sequential demo driver with a single top-level fault boundary.
//!
//! Demos run one after another in declaration order; the first fault
//! (an error return or a panic) stops the run, and nothing after it
//! executes.

use std::panic;

use crate::demos;
use crate::error::DemoError;

/// One runnable demonstration: a display name and its entry point.
pub struct Demo {
    pub name: &'static str,
    pub run: fn() -> Result<(), DemoError>,
}

/// Every demo, in the order the tour presents them.
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "Collection Literals",
        run: demos::collections::run,
    },
    Demo {
        name: "Constructor Shorthand",
        run: demos::constructors::run,
    },
    Demo {
        name: "Closures with Defaults",
        run: demos::closures::run,
    },
    Demo {
        name: "Variadic-style Parameters",
        run: demos::variadics::run,
    },
    Demo {
        name: "Mutex Counter",
        run: demos::locking::run,
    },
    Demo {
        name: "Inline Buffers",
        run: demos::inline_buffers::run,
    },
    Demo {
        name: "Type Aliases",
        run: demos::aliases::run,
    },
    Demo {
        name: "Read-only Borrows",
        run: demos::borrowing::run,
    },
];

/// Runs every demo in order, stopping at the first fault.
pub fn run_all(demos: &[Demo]) -> Result<(), DemoError> {
    for demo in demos {
        run_one(demo)?;
    }
    Ok(())
}

// A panicking demo surfaces as the same flat fault an error return
// does; catch_unwind keeps the unwind from escaping the boundary.
fn run_one(demo: &Demo) -> Result<(), DemoError> {
    match panic::catch_unwind(demo.run) {
        Ok(result) => result,
        Err(payload) => Err(DemoError::panicked(demo.name, payload.as_ref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The stub demos record into one shared log, so these tests take
    // turns on it.
    static TEST_LOCK: Mutex<()> = Mutex::new(());
    static LOG: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

    fn record(entry: &'static str) {
        LOG.lock().unwrap().push(entry);
    }

    fn take_log() -> Vec<&'static str> {
        std::mem::take(&mut *LOG.lock().unwrap())
    }

    fn first() -> Result<(), DemoError> {
        record("first");
        Ok(())
    }

    fn second() -> Result<(), DemoError> {
        record("second");
        Ok(())
    }

    fn third() -> Result<(), DemoError> {
        record("third");
        Ok(())
    }

    fn failing() -> Result<(), DemoError> {
        record("failing");
        Err(DemoError::failed("failing", "boom"))
    }

    fn panicking() -> Result<(), DemoError> {
        record("panicking");
        panic!("demo blew up");
    }

    #[test]
    fn demos_run_in_declaration_order() {
        let _serial = TEST_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        take_log();

        let demos = [
            Demo { name: "first", run: first },
            Demo { name: "second", run: second },
            Demo { name: "third", run: third },
        ];
        assert!(run_all(&demos).is_ok());
        assert_eq!(take_log(), vec!["first", "second", "third"]);
    }

    #[test]
    fn first_fault_stops_the_run() {
        let _serial = TEST_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        take_log();

        let demos = [
            Demo { name: "first", run: first },
            Demo { name: "failing", run: failing },
            Demo { name: "second", run: second },
        ];
        let err = run_all(&demos).unwrap_err();
        assert_eq!(err, DemoError::failed("failing", "boom"));
        // Nothing after the fault executed.
        assert_eq!(take_log(), vec!["first", "failing"]);
    }

    #[test]
    fn panic_is_caught_and_stops_the_run() {
        let _serial = TEST_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        take_log();

        let demos = [
            Demo { name: "panicking", run: panicking },
            Demo { name: "second", run: second },
        ];
        let err = run_all(&demos).unwrap_err();
        assert_eq!(
            err,
            DemoError::Panicked {
                demo: "panicking".to_string(),
                message: "demo blew up".to_string(),
            }
        );
        assert_eq!(take_log(), vec!["panicking"]);
    }

    #[test]
    fn empty_registry_is_a_successful_run() {
        assert!(run_all(&[]).is_ok());
    }

    #[test]
    fn full_registry_runs_clean() {
        let _serial = TEST_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        assert!(run_all(DEMOS).is_ok());
    }
}
