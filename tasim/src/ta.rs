//! TA thread: sleep until woken, then help one student per wake-up.

use std::thread;

use hallway::{Semaphore, WaitingRoom, WakeOutcome};

use crate::config::Pace;
use crate::narrate::{Event, Narrator};

/// Runs the TA until the room is closed and drained.
///
/// Each wake-up consumes exactly one permit; the hallway is then re-checked
/// under the lock, never inferred from the permit itself, so a permit with
/// nobody seated behind it is a harmless stale wake-up.
pub fn run_ta(room: &WaitingRoom, wake: &Semaphore, narrator: &dyn Narrator, pace: &Pace) {
    loop {
        narrator.event(Event::TaWaiting);
        wake.acquire();

        match room.begin_help() {
            WakeOutcome::NextStudent { waiting } => {
                narrator.event(Event::TaHelping { waiting });
                thread::sleep(pace.help_time);
            }
            WakeOutcome::Empty => {
                narrator.event(Event::TaSpuriousWake);
            }
            WakeOutcome::Closed => {
                narrator.event(Event::TaLeaving);
                break;
            }
        }
    }

    assert_eq!(room.occupied(), 0);
}
