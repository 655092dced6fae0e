//! GPU vector addition harness.
//!
//! Adds two large f32 arrays on the GPU via a runtime-compiled WGSL compute
//! kernel, verifies every element against a CPU-computed reference, and
//! reports the submit-to-completion wall time plus the achieved memory
//! bandwidth.
//!
//! The whole program is one linear pass: acquire a device, generate and
//! compile the kernel, allocate and fill the buffers, dispatch once, wait,
//! verify, report. There is no scheduler, no kernel cache, and no recovery
//! path — every failure is fatal.

pub mod codegen;
pub mod harness;
pub mod logging;
pub mod wgpu_backend;

pub use harness::{AddHarness, RunReport, ARRAY_LENGTH, BUFFER_SIZE};
pub use wgpu_backend::device_init::WgpuContext;
