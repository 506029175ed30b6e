//! A one-shot delayed task.
//!
//! [`Timer::run`] blocks the calling thread until the delay expires and then
//! invokes the task there. A [`CancelHandle`] obtained beforehand may be used
//! from any other thread to prevent the task from running.
//!
//! [`Timer::run`]: struct.Timer.html#method.run
//! [`CancelHandle`]: struct.CancelHandle.html

use std::cmp;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// How often a waiting timer checks for cancellation.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

pub struct Timer<F> {
    delay: Duration,
    task: F,
    cancelled: Arc<AtomicBool>,
}

#[derive(Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl<F, T> Timer<F>
where
    F: FnOnce() -> T,
{
    /// Creates a timer which runs `task` once, `delay` after [`run`] is called.
    ///
    /// [`run`]: #method.run
    pub fn once(delay: Duration, task: F) -> Self {
        Self {
            delay,
            task,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.cancelled.clone())
    }

    /// Waits for the delay and runs the task.
    ///
    /// Returns `None` if the timer was cancelled before the delay expired.
    /// Consuming `self` guarantees the task fires at most once.
    pub fn run(self) -> Option<T> {
        let deadline = Instant::now() + self.delay;
        loop {
            if self.cancelled.load(Ordering::SeqCst) {
                debug!("timer cancelled");
                return None;
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep(cmp::min(deadline - now, POLL_INTERVAL));
        }

        trace!("timer fired after {:?}", self.delay);
        Some((self.task)())
    }
}

impl CancelHandle {
    /// Prevents the task from running. Has no effect once it has fired.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
