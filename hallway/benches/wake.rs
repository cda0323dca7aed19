// Wake-signal benchmark for measuring handoff cost between two threads.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use hallway::Semaphore;

const ITERATIONS: usize = 100_000;

fn bench_prepaid_acquire() {
    let sem = Semaphore::new(ITERATIONS);

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        sem.acquire();
    }
    let elapsed = start.elapsed();

    println!("prepaid acquire benchmark:");
    println!("  Iterations: {}", ITERATIONS);
    println!("  Time: {:?}", elapsed);
    println!(
        "  Latency: {:.2} ns/op",
        elapsed.as_nanos() as f64 / ITERATIONS as f64
    );
}

fn bench_ping_pong() {
    let ping = Arc::new(Semaphore::new(0));
    let pong = Arc::new(Semaphore::new(0));

    let peer = {
        let ping = ping.clone();
        let pong = pong.clone();
        thread::spawn(move || {
            for _ in 0..ITERATIONS {
                ping.acquire();
                pong.release();
            }
        })
    };

    let start = Instant::now();
    for _ in 0..ITERATIONS {
        ping.release();
        pong.acquire();
    }
    let elapsed = start.elapsed();

    peer.join().unwrap();

    println!("\nping-pong benchmark:");
    println!("  Round trips: {}", ITERATIONS);
    println!("  Time: {:?}", elapsed);
    println!(
        "  Latency: {:.2} ns/round-trip",
        elapsed.as_nanos() as f64 / ITERATIONS as f64
    );
}

fn main() {
    println!("Wake Signal Benchmark");
    println!();

    bench_prepaid_acquire();
    bench_ping_pong();
}
