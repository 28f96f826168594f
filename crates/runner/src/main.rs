//! Demonstration runner for the Kairos clock infrastructure
//!
//! Reads the real clock across an actual delay, then drives a virtual
//! clock through the same motions under explicit control. Log output is
//! filtered through `RUST_LOG` (default `info`).

use kairos_clock::{Clock, RealClock, VirtualClock};
use kairos_core::{NANOS_PER_MILLI, NANOS_PER_SEC};
use std::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Kairos v0.1.0 - clock demonstration");

    let real = RealClock::new();
    let t1 = real.now();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let t2 = real.now();

    log::info!(
        "{}: {} ms elapsed across a 100 ms sleep (virtual: {})",
        real.name(),
        (t2 - t1) / NANOS_PER_MILLI,
        real.is_virtual()
    );

    let mut clock = VirtualClock::new(None);
    log::info!("{}: initial time {} ns", clock.name(), clock.now());

    clock.advance(NANOS_PER_SEC);
    log::info!("{}: after advance(1s) {} ns", clock.name(), clock.now());

    clock.set_time(5 * NANOS_PER_SEC);
    log::info!(
        "{}: after set_time(5s) {} ns (virtual: {})",
        clock.name(),
        clock.now(),
        clock.is_virtual()
    );
}
