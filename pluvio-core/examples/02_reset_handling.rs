//! Gauge Reset Handling Example
//!
//! Demonstrates the two reset paths and why neither corrupts the
//! accumulated total:
//!
//! - a detected counter regression (sensor power-cycle)
//! - the scheduled day boundary (host zeroes the baseline)
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_reset_handling
//! ```

use pluvio_core::{constants::time::MS_PER_MINUTE, RainEvents, RainMonitor};

fn main() {
    println!("Pluvio Reset Handling Example");
    println!("=============================\n");

    let mut monitor: RainMonitor = RainMonitor::with_window_hours(5.0, 24);
    let minute = MS_PER_MINUTE;

    // A wet evening: the counter climbs normally.
    println!("Normal climb:");
    for (t, v) in [(10, 1.0f32), (20, 2.0), (30, 3.0)] {
        monitor.record_reading(t * minute, v).unwrap();
        println!("  t={}min gauge={:.1}mm  accumulation={:.1}mm", t, v, monitor.accumulation_mm());
    }

    // The sensor power-cycles and restarts near zero. The regression is
    // logged as a reset marker; the pre-reset rain stays counted.
    println!("\nSensor power-cycle (counter falls back to 0.2):");
    monitor.record_reading(40 * minute, 0.2).unwrap();
    println!("  accumulation={:.1}mm (2.0 mm from the climb survives)", monitor.accumulation_mm());

    // Rain continues on the fresh counter.
    monitor.record_reading(50 * minute, 1.2).unwrap();
    println!("  t=50min gauge=1.2mm  accumulation={:.1}mm", monitor.accumulation_mm());

    // Midnight: the host's scheduler fires the day boundary through the
    // event seam. Derived values refresh on the next reading.
    println!("\nDay boundary at t=60min:");
    monitor.day_boundary(60 * minute);
    monitor.gauge_changed(70 * minute, "0.5");
    println!("  t=70min gauge=0.5mm  accumulation={:.1}mm", monitor.accumulation_mm());

    println!("\nKey Insights:");
    println!("- A falling counter is treated as a reset, not negative rain");
    println!("- Post-reset readings accumulate from the new baseline");
    println!("- The day boundary only seeds a zero baseline for the next delta");
}
