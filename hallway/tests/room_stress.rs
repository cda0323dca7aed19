//! Integration tests hammering the room and wake signal from many threads.

use std::sync::Arc;
use std::thread;

use hallway::{Admission, Semaphore, WaitingRoom, WakeOutcome};

/// Capacity bound holds under contention: no `Seated` report may ever show
/// more occupants than there are seats, and the final tallies must balance.
#[test]
fn test_capacity_bound_under_contention() {
    let producers = 8;
    let tries_per_producer = 1000;
    let capacity = 4;

    let room = Arc::new(WaitingRoom::new(capacity, producers));
    let wake = Arc::new(Semaphore::new(0));

    let server = {
        let room = room.clone();
        let wake = wake.clone();
        thread::spawn(move || loop {
            wake.acquire();
            match room.begin_help() {
                WakeOutcome::NextStudent { waiting } => assert!(waiting < capacity),
                WakeOutcome::Empty => {}
                WakeOutcome::Closed => break,
            }
        })
    };

    let handles: Vec<_> = (0..producers)
        .map(|_| {
            let room = room.clone();
            let wake = wake.clone();
            thread::spawn(move || {
                for _ in 0..tries_per_producer {
                    match room.try_seat() {
                        Admission::Seated { waiting } => {
                            assert!(waiting <= capacity);
                            wake.release();
                        }
                        Admission::TurnedAway => thread::yield_now(),
                    }
                }
                room.retire();
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    room.close();
    wake.release();
    server.join().unwrap();

    let stats = room.stats();
    assert_eq!(room.occupied(), 0);
    assert_eq!(stats.admitted, stats.served);
    assert_eq!(
        stats.admitted + stats.rejected,
        (producers * tries_per_producer) as u64
    );
    assert_eq!(stats.finished, producers);
}

/// With zero seats, every attempt is refused and the server only ever sees
/// stale wake-ups until the final forced one.
#[test]
fn test_zero_capacity_server_sees_only_forced_wake() {
    let room = Arc::new(WaitingRoom::new(0, 2));
    let wake = Arc::new(Semaphore::new(0));

    let server = {
        let room = room.clone();
        let wake = wake.clone();
        thread::spawn(move || {
            let mut helped = 0u64;
            loop {
                wake.acquire();
                match room.begin_help() {
                    WakeOutcome::NextStudent { .. } => helped += 1,
                    WakeOutcome::Empty => {}
                    WakeOutcome::Closed => break,
                }
            }
            helped
        })
    };

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let room = room.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(room.try_seat(), Admission::TurnedAway);
                }
                room.retire();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    // Both producers retired, so the room closed organically; the forced
    // release still has to be delivered in case the server is parked.
    assert!(room.is_closed());
    wake.release();
    assert_eq!(server.join().unwrap(), 0);
    assert_eq!(room.stats().admitted, 0);
}

/// The server must not exit while a seat is occupied, even when the room is
/// already closed; one wake permit per admission plus the forced one is
/// enough to drain and leave.
#[test]
fn test_close_does_not_strand_seated_students() {
    let room = Arc::new(WaitingRoom::new(3, 1));
    let wake = Arc::new(Semaphore::new(0));

    for expected in 1..=3 {
        assert_eq!(
            room.try_seat(),
            Admission::Seated { waiting: expected }
        );
        wake.release();
    }
    room.retire();
    room.close();
    wake.release();

    let server = {
        let room = room.clone();
        let wake = wake.clone();
        thread::spawn(move || {
            let mut order = Vec::new();
            loop {
                wake.acquire();
                match room.begin_help() {
                    WakeOutcome::NextStudent { waiting } => order.push(waiting),
                    WakeOutcome::Empty => order.push(usize::MAX),
                    WakeOutcome::Closed => break,
                }
            }
            order
        })
    };

    // All three seated students are taken in before the exit, oldest permit
    // first; the forced permit then lands on a drained, closed room.
    assert_eq!(server.join().unwrap(), vec![2, 1, 0]);
    assert_eq!(room.occupied(), 0);
}
