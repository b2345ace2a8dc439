//! Scheduler backed by the tokio local task set.

use centavo_core::field::{Scheduler, Task};

/// Defers tasks onto the current `LocalSet`, yielding once before running.
///
/// Must be used from inside `LocalSet::run_until`.
pub struct LocalScheduler;

impl Scheduler for LocalScheduler {
    fn defer(&self, task: Task) {
        tokio::task::spawn_local(async move {
            tokio::task::yield_now().await;
            task();
        });
    }
}
