//! Deferred callbacks on the host's event loop.

use std::cell::RefCell;
use std::collections::VecDeque;

/// A callback to run on a later turn of the event loop.
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after the current event has been fully handled.
///
/// Implementations must not run the task synchronously inside `defer`.
pub trait Scheduler {
    /// Queues `task` for the next turn of the event loop.
    fn defer(&self, task: Task);
}

/// FIFO run-loop for hosts without their own event loop, and for tests.
///
/// Tasks queue up until [`DeferredQueue::run_pending`] is called.
#[derive(Default)]
pub struct DeferredQueue {
    tasks: RefCell<VecDeque<Task>>,
}

impl DeferredQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Returns true if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Runs queued tasks until the queue is empty, returning how many ran.
    ///
    /// Tasks deferred while draining run in the same call.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            // Release the borrow before running: tasks may defer more work.
            let next = self.tasks.borrow_mut().pop_front();
            let Some(task) = next else {
                break;
            };
            task();
            ran += 1;
        }
        ran
    }
}

impl Scheduler for DeferredQueue {
    fn defer(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
    }
}

impl std::fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.len())
            .finish()
    }
}
