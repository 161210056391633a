// Copyright (c) 2026 rezky_nightky

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Cloneable handle that ends a [`RepeatingTimer`] run from anywhere.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fixed-rate scheduler that runs its callback on the calling thread.
#[derive(Debug)]
pub struct RepeatingTimer {
    interval: Duration,
    deadline: Option<Instant>,
    stop: StopHandle,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            stop: StopHandle::default(),
        }
    }

    /// Stops the run once `after` has elapsed from now.
    pub fn with_deadline(mut self, after: Duration) -> Self {
        self.deadline = Some(Instant::now() + after);
        self
    }

    pub fn handle(&self) -> StopHandle {
        self.stop.clone()
    }

    fn expired(&self, now: Instant) -> bool {
        self.stop.is_stopped() || self.deadline.is_some_and(|d| now >= d)
    }

    /// Invokes `callback` every interval until stopped, the deadline passes,
    /// or the callback fails. Returns the number of completed ticks.
    ///
    /// A tick that runs late is not made up for: the next one is scheduled
    /// a full interval after it.
    pub fn schedule_repeating<F, E>(&mut self, mut callback: F) -> Result<u64, E>
    where
        F: FnMut() -> Result<(), E>,
    {
        let mut ticks: u64 = 0;
        let mut next_tick = Instant::now() + self.interval;

        loop {
            if self.expired(Instant::now()) {
                break;
            }

            callback()?;
            ticks = ticks.saturating_add(1);

            let now = Instant::now();
            if now > next_tick {
                next_tick = now + self.interval;
            }

            // sleep in slices so a stop lands within one interval at most
            while !self.expired(Instant::now()) {
                let now = Instant::now();
                if now >= next_tick {
                    break;
                }
                let mut wait = next_tick - now;
                if let Some(d) = self.deadline {
                    wait = wait.min(d.saturating_duration_since(now));
                }
                thread::sleep(wait.min(Duration::from_millis(50)));
            }
            next_tick += self.interval;
        }

        log::debug!("repeating timer stopped after {} ticks", ticks);
        Ok(ticks)
    }
}
