//! Synchronization layer for the bounded office-hours rendezvous.
//!
//! This crate provides:
//! - `room`: the lock-guarded waiting-room state (seats, retirements, closing)
//! - `semaphore`: the counting wake signal consumed by the server thread

pub mod room;
pub mod semaphore;

pub use room::{Admission, RoomStats, WaitingRoom, WakeOutcome};
pub use semaphore::Semaphore;
