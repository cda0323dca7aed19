//! Run configuration: CLI flags, interactive prompts, validation.

use std::io::{self, BufRead, Write};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::error::{Error, Result};

/// How many times each student asks for help before calling it a day.
/// A refused attempt consumes a slot just like a successful visit.
pub const REQUESTS_PER_STUDENT: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "tasim")]
#[command(about = "Sleeping-TA office hours simulation")]
pub struct Cli {
    /// Number of student threads (prompted for when omitted)
    #[arg(short = 's', long)]
    pub students: Option<usize>,

    /// Number of hallway chairs; 0 is legal and turns every request away
    /// (prompted for when omitted)
    #[arg(short = 'c', long)]
    pub chairs: Option<usize>,

    /// Seed for the per-student work-time generators
    #[arg(long)]
    pub seed: Option<u64>,

    /// Millisecond-scale pauses instead of second-scale ones
    #[arg(long)]
    pub fast: bool,
}

/// Simulated pause lengths. Every pause happens outside the room lock.
#[derive(Debug, Clone, Copy)]
pub struct Pace {
    /// Shortest stretch of programming between help requests.
    pub work_min: Duration,
    /// Longest stretch of programming between help requests.
    pub work_max: Duration,
    /// Time the TA spends on one student.
    pub help_time: Duration,
    /// Time a seated student spends at the office before moving on.
    pub visit_time: Duration,
    /// How long a turned-away student waits before working again.
    pub retry_delay: Duration,
}

impl Pace {
    /// Second-scale pacing matching the classic classroom demonstration.
    pub fn classroom() -> Self {
        Self {
            work_min: Duration::from_secs(1),
            work_max: Duration::from_secs(3),
            help_time: Duration::from_secs(1),
            visit_time: Duration::from_secs(1),
            retry_delay: Duration::from_secs(1),
        }
    }

    /// Millisecond-scale pacing for quick demo runs.
    pub fn quick() -> Self {
        Self {
            work_min: Duration::from_millis(10),
            work_max: Duration::from_millis(30),
            help_time: Duration::from_millis(10),
            visit_time: Duration::from_millis(10),
            retry_delay: Duration::from_millis(10),
        }
    }

    /// No pauses at all. Used by tests that only care about the protocol.
    pub const fn instant() -> Self {
        Self {
            work_min: Duration::ZERO,
            work_max: Duration::ZERO,
            help_time: Duration::ZERO,
            visit_time: Duration::ZERO,
            retry_delay: Duration::ZERO,
        }
    }
}

/// Everything a run needs, validated before any thread starts.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub students: usize,
    pub chairs: usize,
    pub requests_per_student: usize,
    pub seed: u64,
    pub pace: Pace,
}

impl SimConfig {
    /// Builds a validated configuration from CLI flags, prompting on stdin
    /// for anything missing, matching the original interactive programs.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let students = match cli.students {
            Some(n) => n,
            None => prompt("Enter number of students: ")?,
        };
        let chairs = match cli.chairs {
            Some(n) => n,
            None => prompt("Enter number of chairs in hallway: ")?,
        };
        if students == 0 {
            return Err(Error::NoStudents);
        }

        Ok(Self {
            students,
            chairs,
            requests_per_student: REQUESTS_PER_STUDENT,
            seed: cli.seed.unwrap_or_else(seed_from_clock),
            pace: if cli.fast {
                Pace::quick()
            } else {
                Pace::classroom()
            },
        })
    }
}

fn prompt(message: &str) -> Result<usize> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| Error::InvalidNumber(trimmed.to_string()))
}

fn seed_from_clock() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(_) => 0,
    }
}
