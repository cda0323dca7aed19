//! The observable side channel: typed events and where they go.
//!
//! Every thread reports through one shared [`Narrator`]; the console
//! implementation prints a line per event, and tests install a recorder to
//! assert on the stream instead of scraping output.

use std::time::Duration;

/// One externally observable simulation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A student is programming before the next help request.
    Working { id: usize, time: Duration },
    /// A student took a hallway chair; `waiting` includes them.
    Seated { id: usize, waiting: usize },
    /// A student found every chair taken.
    TurnedAway { id: usize },
    /// A student is permanently done; `finished` is the running tally.
    Retired { id: usize, finished: usize },
    /// The TA is blocked waiting for a wake-up.
    TaWaiting,
    /// The TA took in one student; `waiting` is the count left seated.
    TaHelping { waiting: usize },
    /// The TA woke to an empty hallway.
    TaSpuriousWake,
    /// The TA observed the exit condition and stopped.
    TaLeaving,
}

/// Sink for simulation events. Called concurrently from every thread.
pub trait Narrator: Send + Sync {
    fn event(&self, event: Event);
}

/// Prints each event as one line on stdout.
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn event(&self, event: Event) {
        match event {
            Event::Working { id, time } => println!(
                "Student {}: programming for {:.1}s.",
                id,
                time.as_secs_f64()
            ),
            Event::Seated { id, waiting } => println!(
                "Student {}: sitting in the hallway, {} waiting.",
                id, waiting
            ),
            Event::TurnedAway { id } => {
                println!("Student {}: hallway full, coming back later.", id)
            }
            Event::Retired { id, finished } => {
                println!("Student {}: done for the day ({} finished).", id, finished)
            }
            Event::TaWaiting => println!("TA: waiting for a student."),
            Event::TaHelping { waiting } => {
                println!("TA: helping a student, {} still waiting.", waiting)
            }
            Event::TaSpuriousWake => println!("TA: woke up to an empty hallway."),
            Event::TaLeaving => println!("TA: everyone is done, going home."),
        }
    }
}
