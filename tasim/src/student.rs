//! Student thread: work, request help, retry when the hallway is full.

use std::thread;
use std::time::Duration;

use hallway::{Admission, Semaphore, WaitingRoom};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{Pace, SimConfig};
use crate::narrate::{Event, Narrator};

/// Runs one student for `requests_per_student` cycles, then retires them.
///
/// A refused attempt consumes a cycle exactly like a successful visit, so
/// the total number of admission attempts per student is fixed up front.
pub fn run_student(
    id: usize,
    room: &WaitingRoom,
    wake: &Semaphore,
    narrator: &dyn Narrator,
    config: &SimConfig,
) {
    let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(id as u64));

    for _ in 0..config.requests_per_student {
        let work = work_time(&mut rng, &config.pace);
        narrator.event(Event::Working { id, time: work });
        thread::sleep(work);

        match room.try_seat() {
            Admission::Seated { waiting } => {
                narrator.event(Event::Seated { id, waiting });
                // The seat is taken and the room lock is already dropped;
                // now wake the TA.
                wake.release();
                thread::sleep(config.pace.visit_time);
            }
            Admission::TurnedAway => {
                narrator.event(Event::TurnedAway { id });
                thread::sleep(config.pace.retry_delay);
            }
        }
    }

    let finished = room.retire();
    narrator.event(Event::Retired { id, finished });
}

fn work_time(rng: &mut SmallRng, pace: &Pace) -> Duration {
    if pace.work_max <= pace.work_min {
        return pace.work_min;
    }
    let span_ms = (pace.work_max - pace.work_min).as_millis() as u64;
    pace.work_min + Duration::from_millis(rng.random_range(0..=span_ms))
}
