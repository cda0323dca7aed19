//! Counting semaphore used as the server's wake signal.
//!
//! `std::sync` carries no counting semaphore, so this is the classic
//! mutex-plus-condvar construction. The count is never exposed: producers
//! only `release`, the consumer only blocks in `acquire`.

use std::sync::{Condvar, Mutex};

/// A counting semaphore.
///
/// Each `release` adds one permit and wakes one blocked acquirer; `acquire`
/// blocks while no permit is available, then takes one.
pub struct Semaphore {
    permits: Mutex<usize>,
    nonzero: Condvar,
}

impl Semaphore {
    /// Creates a semaphore holding `permits` initial permits.
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            nonzero: Condvar::new(),
        }
    }

    /// Blocks until a permit is available, then takes it.
    pub fn acquire(&self) {
        let mut permits = self.permits.lock().expect("semaphore mutex poisoned");
        while *permits == 0 {
            permits = self
                .nonzero
                .wait(permits)
                .expect("semaphore mutex poisoned");
        }
        *permits -= 1;
    }

    /// Adds one permit and wakes one blocked acquirer, if any.
    pub fn release(&self) {
        let mut permits = self.permits.lock().expect("semaphore mutex poisoned");
        *permits = permits
            .checked_add(1)
            .expect("semaphore permit count overflow");
        self.nonzero.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_initial_permits_consumed_without_blocking() {
        let sem = Semaphore::new(2);
        sem.acquire();
        sem.acquire();
    }

    #[test]
    fn test_release_wakes_blocked_acquirer() {
        let sem = Arc::new(Semaphore::new(0));
        let (tx, rx) = mpsc::channel();

        let waiter = {
            let sem = sem.clone();
            thread::spawn(move || {
                sem.acquire();
                tx.send(()).unwrap();
            })
        };

        // The acquirer must still be blocked: no permit exists yet.
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

        sem.release();
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        waiter.join().unwrap();
    }

    #[test]
    fn test_permits_accumulate_across_releases() {
        let sem = Arc::new(Semaphore::new(0));
        let releasers: Vec<_> = (0..4)
            .map(|_| {
                let sem = sem.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        sem.release();
                    }
                })
            })
            .collect();
        for h in releasers {
            h.join().unwrap();
        }

        // All 400 permits must be consumable without blocking.
        for _ in 0..400 {
            sem.acquire();
        }
    }
}
