use std::process;
use std::sync::Arc;

use clap::Parser;

use tasim::config::{Cli, SimConfig};
use tasim::narrate::ConsoleNarrator;

fn main() {
    let cli = Cli::parse();

    let config = match SimConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tasim: {}", e);
            process::exit(1);
        }
    };

    eprintln!(
        "tasim: {} students, {} chairs, {} requests each, seed {}",
        config.students, config.chairs, config.requests_per_student, config.seed
    );

    match tasim::run(&config, Arc::new(ConsoleNarrator)) {
        Ok(summary) => {
            println!(
                "Office closed: {} seated, {} turned away, {} helped, {} students finished.",
                summary.admitted, summary.rejected, summary.served, summary.finished
            );
        }
        Err(e) => {
            eprintln!("tasim: {}", e);
            process::exit(1);
        }
    }
}
