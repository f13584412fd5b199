//! Basic Rain Monitoring Example
//!
//! Feeds a simulated drizzle into the monitor and watches the derived
//! values and the hold decision evolve.
//!
//! ## What You'll Learn
//!
//! - Creating a monitor with a threshold and accumulation window
//! - Ingesting cumulative gauge readings
//! - Reading accumulation, intensity, and the hold decision
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_monitoring
//! ```

use pluvio_core::{
    constants::time::MS_PER_MINUTE,
    time::{FixedTime, TimeSource},
    RainMonitor,
};

fn main() {
    println!("Pluvio Basic Monitoring Example");
    println!("===============================\n");

    // Hold irrigation once 5 mm accumulates within 24 hours.
    let mut monitor: RainMonitor = RainMonitor::with_window_hours(5.0, 24);
    println!("Monitor configured:");
    println!("  Threshold: {:.1} mm", monitor.threshold_mm());
    println!("  Window:    {} h\n", monitor.window_ms() / 3_600_000);

    // Simulated clock: one gauge update every 10 minutes.
    let mut clock = FixedTime::new(0);

    // Cumulative gauge counter ramping up through a shower.
    let gauge_values = [0.0, 0.2, 0.7, 1.8, 3.4, 5.2];

    println!("Feeding gauge readings:\n");
    for value in gauge_values {
        clock.advance(10 * MS_PER_MINUTE);
        monitor.record_reading(clock.now(), value).unwrap();

        let decision = match monitor.hold_decision() {
            Some(reason) => reason.code(),
            None => "clear to water",
        };
        println!(
            "  t={:3}min gauge={:4.1}mm  ->  {}  [{}]",
            clock.now() / MS_PER_MINUTE,
            value,
            monitor.snapshot(),
            decision,
        );
    }

    println!("\nKey Insights:");
    println!("- Accumulation is the sum of positive deltas inside the window");
    println!("- Intensity comes from the two most recent samples");
    println!("- Accumulated rain keeps irrigation held after the rate drops");
}
