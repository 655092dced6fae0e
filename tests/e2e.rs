//! End-to-end harness runs against a live adapter.
//!
//! These tests skip when no GPU adapter is present.

use wgpu_vecadd::harness::bandwidth_gb_s;
use wgpu_vecadd::{logging, AddHarness, WgpuContext, ARRAY_LENGTH};

#[test]
fn test_round_trip_small() {
    logging::init_test();
    if !WgpuContext::is_available() {
        println!("GPU not available, skipping");
        return;
    }

    let n = 1 << 16;
    let harness = AddHarness::new(n).expect("harness init failed");
    assert_eq!(harness.numel(), n);

    let report = harness.run().expect("run failed");
    let byte_size = n * std::mem::size_of::<f32>();
    if report.elapsed_ms > 0 {
        assert_eq!(
            report.bandwidth_gb_s,
            bandwidth_gb_s(byte_size, report.elapsed_ms)
        );
    } else {
        assert!(report.bandwidth_gb_s.is_infinite());
    }
}

#[test]
fn test_round_trip_full_size() {
    logging::init_test();
    if !WgpuContext::is_available() {
        println!("GPU not available, skipping");
        return;
    }

    // The full 2^24 elements exercises the 2D workgroup grid fold.
    let harness = AddHarness::new(ARRAY_LENGTH).expect("harness init failed");
    let report = harness.run().expect("run failed");
    println!(
        "{} ms, BW: {:.3} GB/s",
        report.elapsed_ms, report.bandwidth_gb_s
    );
}

#[test]
fn test_run_with_odd_element_count() {
    logging::init_test();
    if !WgpuContext::is_available() {
        println!("GPU not available, skipping");
        return;
    }

    // Not a multiple of the workgroup size; tail threads must bounds-check.
    let harness = AddHarness::new((1 << 12) + 3).expect("harness init failed");
    harness.run().expect("run failed");
}
