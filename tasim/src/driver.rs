//! Spawns the TA and the students, joins them, runs the shutdown handshake.

use std::sync::Arc;
use std::thread;

use hallway::{Semaphore, WaitingRoom};

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::narrate::Narrator;
use crate::{student, ta};

/// End-of-run tallies, straight from the room's conservation counters.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    /// Seats successfully taken across all students and cycles.
    pub admitted: u64,
    /// Admission attempts refused because the hallway was full.
    pub rejected: u64,
    /// Students the TA took in. Equals `admitted` on a clean run.
    pub served: u64,
    /// Students that retired.
    pub finished: usize,
}

/// Runs one full simulation: spawn the TA, spawn every student, join the
/// students, then perform the shutdown handshake and join the TA.
///
/// The handshake is the only engineered termination: close the room, then
/// deliver exactly one unconditional wake-up so a TA parked on an empty
/// hallway re-evaluates its exit check.
pub fn run(config: &SimConfig, narrator: Arc<dyn Narrator>) -> Result<Summary> {
    let room = Arc::new(WaitingRoom::new(config.chairs, config.students));
    let wake = Arc::new(Semaphore::new(0));

    let ta_handle = {
        let room = room.clone();
        let wake = wake.clone();
        let narrator = narrator.clone();
        let pace = config.pace;
        thread::Builder::new()
            .name("ta".into())
            .spawn(move || ta::run_ta(&room, &wake, narrator.as_ref(), &pace))
            .map_err(Error::Spawn)?
    };

    let mut students = Vec::with_capacity(config.students);
    let mut spawn_error = None;
    for id in 1..=config.students {
        let room = room.clone();
        let wake = wake.clone();
        let narrator = narrator.clone();
        let config = *config;
        let spawned = thread::Builder::new()
            .name(format!("student-{}", id))
            .spawn(move || student::run_student(id, &room, &wake, narrator.as_ref(), &config));
        match spawned {
            Ok(handle) => students.push(handle),
            Err(e) => {
                // Already-running students finish on their own; stop
                // creating new ones and shut down through the normal
                // handshake before reporting the failure.
                spawn_error = Some(Error::Spawn(e));
                break;
            }
        }
    }

    for handle in students {
        handle.join().expect("student thread panicked");
    }

    // All students have retired; nothing will ever take a seat again.
    // Close the room and deliver the one wake-up that is guaranteed even
    // when the hallway stayed empty the whole run.
    room.close();
    wake.release();
    ta_handle.join().expect("ta thread panicked");

    if let Some(e) = spawn_error {
        return Err(e);
    }

    let stats = room.stats();
    Ok(Summary {
        admitted: stats.admitted,
        rejected: stats.rejected,
        served: stats.served,
        finished: stats.finished,
    })
}
