//! Compute kernel dispatch — encodes, submits, and waits for GPU work.

use std::time::{Duration, Instant};

use wgpu;

use super::buffer_ops::GpuBuffer;
use super::compile::CompiledKernel;
use super::device_init::WgpuContext;

/// Fold a 1D workgroup count into a 2D grid bounded by the per-dimension cap.
///
/// The kernel linearizes the invocation index over this grid, so every
/// element keeps exactly one thread; overshoot threads bounds-check out.
pub fn workgroup_grid(total_groups: u32, max_per_dimension: u32) -> (u32, u32) {
    if total_groups <= max_per_dimension {
        (total_groups, 1)
    } else {
        (max_per_dimension, total_groups.div_ceil(max_per_dimension))
    }
}

/// Dispatch a compiled kernel over `numel` elements in one submission.
///
/// `buffers` are bound at `@binding(0..n)` in order. Blocks until the
/// device signals completion and returns the submit-to-completion wall
/// time, which excludes command encoding.
pub fn dispatch(
    ctx: &WgpuContext,
    kernel: &CompiledKernel,
    buffers: &[&GpuBuffer],
    numel: usize,
) -> Result<Duration, String> {
    if numel == 0 {
        return Ok(Duration::ZERO);
    }

    let wg_size = kernel.workgroup_size as usize;
    let total_groups = numel.div_ceil(wg_size);
    let total_groups =
        u32::try_from(total_groups).map_err(|_| "workgroup count exceeds u32".to_string())?;
    let (groups_x, groups_y) = workgroup_grid(total_groups, ctx.max_workgroups_per_dimension());
    if groups_y > ctx.max_workgroups_per_dimension() {
        return Err(format!(
            "dispatch of {} workgroups exceeds device limits",
            total_groups
        ));
    }
    log::debug!(
        "dispatching {} workgroups of {} threads as {}x{}",
        total_groups,
        wg_size,
        groups_x,
        groups_y
    );

    let entries: Vec<wgpu::BindGroupEntry> = buffers
        .iter()
        .enumerate()
        .map(|(i, buf)| wgpu::BindGroupEntry {
            binding: i as u32,
            resource: buf.buffer.as_entire_binding(),
        })
        .collect();

    let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("vecadd_bind_group"),
        layout: &kernel.bind_group_layout,
        entries: &entries,
    });

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("vecadd_dispatch"),
        });

    {
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("vecadd_pass"),
            timestamp_writes: None,
        });
        pass.set_pipeline(&kernel.pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.dispatch_workgroups(groups_x, groups_y, 1);
    }

    let start = Instant::now();
    ctx.queue.submit(std::iter::once(encoder.finish()));
    ctx.device.poll(wgpu::Maintain::Wait);

    Ok(start.elapsed())
}
