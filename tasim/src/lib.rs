//! Sleeping-TA office hours: one TA thread, many student threads, and a
//! bounded hallway that turns students away when every chair is taken.
//!
//! The synchronization layer (seat accounting and the wake signal) lives in
//! the `hallway` crate; this crate supplies the actors, the driver, the CLI
//! configuration, and the narration side channel.

pub mod config;
pub mod driver;
pub mod error;
pub mod narrate;
pub mod student;
pub mod ta;

pub use config::{Cli, Pace, SimConfig};
pub use driver::{run, Summary};
pub use error::Error;
