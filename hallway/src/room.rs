//! Shared waiting-room state for the office-hours rendezvous.
//!
//! A single mutex guards the seat count, the retirement tally, and the
//! closed flag, so every transition is totally ordered across threads.
//! The lock is held only for the duration of one transition; callers wake
//! the server through [`crate::Semaphore`] after the lock is dropped.

use std::sync::Mutex;

/// Outcome of a student's attempt to take a hallway seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// A seat was free. `waiting` is the occupied count including this seat.
    Seated { waiting: usize },
    /// Every seat was taken; the student has to come back later.
    TurnedAway,
}

/// What the server finds in the hallway after a wake-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeOutcome {
    /// A student was waiting and is now being helped. `waiting` is the
    /// occupied count left behind.
    NextStudent { waiting: usize },
    /// Nobody was seated and the room is still open: a stale wake-up.
    Empty,
    /// The room is closed and drained; the server can go home.
    Closed,
}

/// Monotonic tallies of everything that happened to the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomStats {
    /// Seats successfully taken.
    pub admitted: u64,
    /// Admission attempts refused because every seat was taken.
    pub rejected: u64,
    /// Students taken in by the server.
    pub served: u64,
    /// Students permanently done.
    pub finished: usize,
}

struct Shared {
    occupied: usize,
    finished: usize,
    closed: bool,
    admitted: u64,
    rejected: u64,
    served: u64,
}

/// The bounded waiting area plus completion tracking, behind one lock.
///
/// `capacity` and `total_students` are fixed at construction. `occupied`
/// never exceeds `capacity`; `closed` is monotonic. Both facts are asserted
/// on every transition, while the lock is held.
pub struct WaitingRoom {
    capacity: usize,
    total_students: usize,
    shared: Mutex<Shared>,
}

impl WaitingRoom {
    /// Creates an open room with `capacity` seats, expecting `total_students`
    /// students to eventually retire.
    pub fn new(capacity: usize, total_students: usize) -> Self {
        Self {
            capacity,
            total_students,
            shared: Mutex::new(Shared {
                occupied: 0,
                finished: 0,
                closed: false,
                admitted: 0,
                rejected: 0,
                served: 0,
            }),
        }
    }

    /// Number of seats in the hallway.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of students the room was sized for.
    pub fn total_students(&self) -> usize {
        self.total_students
    }

    /// Attempts to take a seat. Never blocks.
    ///
    /// On `Seated` the caller must release one wake-signal permit after this
    /// call returns, so the lock is never held across the notification.
    pub fn try_seat(&self) -> Admission {
        let mut shared = self.lock();
        if shared.occupied < self.capacity {
            shared.occupied += 1;
            shared.admitted += 1;
            assert!(shared.occupied <= self.capacity);
            Admission::Seated {
                waiting: shared.occupied,
            }
        } else {
            shared.rejected += 1;
            Admission::TurnedAway
        }
    }

    /// The server's post-wake check, one critical section.
    ///
    /// Checks closure first: the server leaves only when the room is closed
    /// *and* drained. Otherwise it takes in one waiting student, or reports
    /// a stale wake-up if the hallway is empty.
    pub fn begin_help(&self) -> WakeOutcome {
        let mut shared = self.lock();
        if shared.closed && shared.occupied == 0 {
            WakeOutcome::Closed
        } else if shared.occupied > 0 {
            shared.occupied -= 1;
            shared.served += 1;
            WakeOutcome::NextStudent {
                waiting: shared.occupied,
            }
        } else {
            WakeOutcome::Empty
        }
    }

    /// Records one student as permanently done and returns the new finished
    /// count. The last retirement closes the room.
    pub fn retire(&self) -> usize {
        let mut shared = self.lock();
        shared.finished += 1;
        assert!(shared.finished <= self.total_students);
        if shared.finished == self.total_students {
            shared.closed = true;
        }
        shared.finished
    }

    /// Marks that no further work will ever arrive, arming the server's
    /// exit check. Idempotent.
    pub fn close(&self) {
        let mut shared = self.lock();
        shared.closed = true;
    }

    /// Whether the room has been closed (by the last retirement or by the
    /// shutdown coordinator).
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Current occupied-seat count.
    pub fn occupied(&self) -> usize {
        self.lock().occupied
    }

    /// Snapshot of the monotonic tallies.
    pub fn stats(&self) -> RoomStats {
        let shared = self.lock();
        RoomStats {
            admitted: shared.admitted,
            rejected: shared.rejected,
            served: shared.served,
            finished: shared.finished,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Shared> {
        self.shared.lock().expect("waiting room mutex poisoned")
    }
}
