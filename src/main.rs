//! GPU vector addition demo.
//!
//! Takes no flags and no configuration: run it, and it adds two 64 MiB
//! arrays of random floats on the GPU, verifies every element on the CPU,
//! and prints the elapsed time and achieved memory bandwidth.
//!
//! ```bash
//! wgpu-vecadd
//! 12 ms
//! BW: 10.417 GB/s
//! ```
//!
//! Exits 0 on success; any device, compilation, or verification failure is
//! logged and exits 1.

use std::process;

use wgpu_vecadd::{logging, AddHarness, ARRAY_LENGTH};

fn main() {
    logging::init_from_env();

    let report = AddHarness::new(ARRAY_LENGTH).and_then(|harness| harness.run());
    match report {
        Ok(report) => {
            println!("{} ms", report.elapsed_ms);
            println!("BW: {:.3} GB/s", report.bandwidth_gb_s);
        }
        Err(err) => {
            log::error!("{}", err);
            process::exit(1);
        }
    }
}
