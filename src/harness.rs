//! Compute harness — orchestrates one GPU round trip.
//!
//! Phases run in strict sequence: device acquisition, kernel compilation,
//! buffer allocation and fill, one timed dispatch, exhaustive CPU-side
//! verification, report. Every GPU object is created once, used once, and
//! dropped when the harness goes away.

use rand::Rng;

use crate::codegen::wgsl;
use crate::wgpu_backend::buffer_ops::GpuBuffer;
use crate::wgpu_backend::compile::{self, CompiledKernel};
use crate::wgpu_backend::device_init::WgpuContext;
use crate::wgpu_backend::dispatch;

/// Number of f32 elements per array.
pub const ARRAY_LENGTH: usize = 1 << 24;

/// Byte size of each of the three buffers.
pub const BUFFER_SIZE: usize = ARRAY_LENGTH * std::mem::size_of::<f32>();

/// Timing report for one completed, verified run.
pub struct RunReport {
    /// Submit-to-completion wall time in whole milliseconds.
    pub elapsed_ms: u128,
    /// Achieved memory bandwidth in GB/s over the two input buffers.
    pub bandwidth_gb_s: f64,
}

/// First verification failure: the device result and the host-computed sum.
#[derive(Debug, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub actual: f32,
    pub expected: f32,
}

/// Fill a vector with uniform random f32 values in [0,1).
///
/// Uses the thread-local generator, unseeded — two runs see different data.
pub fn fill_random(len: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0.0f32..1.0)).collect()
}

/// Compare every element of `result` against `a[i] + b[i]`.
///
/// Equality is bitwise: the kernel performs the identical single-precision
/// add the host does, so no tolerance applies. Returns the first mismatch.
pub fn verify_results(a: &[f32], b: &[f32], result: &[f32]) -> Result<(), Mismatch> {
    for (index, ((&x, &y), &r)) in a.iter().zip(b).zip(result).enumerate() {
        let expected = x + y;
        if r != expected {
            return Err(Mismatch {
                index,
                actual: r,
                expected,
            });
        }
    }
    Ok(())
}

/// Bandwidth in GB/s for `byte_size` bytes read twice in `elapsed_ms`.
///
/// The constant 2000 folds the two-buffer traffic and the ms-to-seconds
/// conversion. A zero-millisecond run reports infinity.
pub fn bandwidth_gb_s(byte_size: usize, elapsed_ms: u128) -> f64 {
    2000.0 * byte_size as f64 / 1024.0 / 1024.0 / 1024.0 / elapsed_ms as f64
}

/// One-shot vector-add harness: device, queue, and compiled kernel.
pub struct AddHarness {
    ctx: WgpuContext,
    kernel: CompiledKernel,
    numel: usize,
}

impl AddHarness {
    /// Acquire the device and compile the add kernel for `numel` elements.
    ///
    /// The workgroup size is clamped against the device's reported maximum
    /// and the element count before it is baked into the kernel source.
    pub fn new(numel: usize) -> Result<Self, String> {
        let ctx = WgpuContext::new().ok_or("no GPU device available")?;

        let wg = wgsl::workgroup_size_for(ctx.max_threads_per_group(), numel);
        log::info!("compiling add kernel, workgroup size {}", wg);
        let source = wgsl::emit_add_kernel(wg);
        let kernel = compile::compile_wgsl(&ctx, &source, wgsl::ENTRY_POINT, wg)?;

        Ok(AddHarness { ctx, kernel, numel })
    }

    /// Generate inputs, dispatch once, verify exhaustively, and report.
    pub fn run(&self) -> Result<RunReport, String> {
        let byte_size = self.numel * std::mem::size_of::<f32>();

        log::info!("generating {} random elements per input", self.numel);
        let a = fill_random(self.numel);
        let b = fill_random(self.numel);

        let buf_a = GpuBuffer::from_bytes(&self.ctx, bytemuck::cast_slice(&a))
            .ok_or("failed to create input buffer A")?;
        let buf_b = GpuBuffer::from_bytes(&self.ctx, bytemuck::cast_slice(&b))
            .ok_or("failed to create input buffer B")?;
        let buf_result =
            GpuBuffer::allocate(&self.ctx, byte_size).ok_or("failed to allocate result buffer")?;
        debug_assert_eq!(buf_a.byte_size(), byte_size);
        debug_assert_eq!(buf_b.byte_size(), byte_size);
        debug_assert_eq!(buf_result.byte_size(), byte_size);

        let elapsed = dispatch::dispatch(
            &self.ctx,
            &self.kernel,
            &[&buf_a, &buf_b, &buf_result],
            self.numel,
        )?;

        let bytes = buf_result
            .read_to_vec(&self.ctx)
            .ok_or("failed to read back result buffer")?;
        let result: &[f32] = bytemuck::cast_slice(&bytes);

        verify_results(&a, &b, result).map_err(|m| {
            format!(
                "compute error: index={} result={} vs {}=a+b",
                m.index, m.actual, m.expected
            )
        })?;
        log::info!("verified {} elements", self.numel);

        let elapsed_ms = elapsed.as_millis();
        Ok(RunReport {
            elapsed_ms,
            bandwidth_gb_s: bandwidth_gb_s(byte_size, elapsed_ms),
        })
    }

    /// Element count this harness was built for.
    pub fn numel(&self) -> usize {
        self.numel
    }
}
