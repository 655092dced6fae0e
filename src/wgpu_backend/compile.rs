//! WGSL shader compilation — WGSL source → wgpu::ComputePipeline.

use wgpu;

use super::device_init::WgpuContext;

/// A compiled compute kernel ready for dispatch.
pub struct CompiledKernel {
    pub pipeline: wgpu::ComputePipeline,
    pub bind_group_layout: wgpu::BindGroupLayout,
    /// Workgroup size the source was emitted with; the dispatch side uses
    /// it to compute workgroup counts.
    pub workgroup_size: u32,
}

/// Compile WGSL source code into a compute pipeline.
///
/// The bind group layout is auto-derived from shader reflection.
pub fn compile_wgsl(
    ctx: &WgpuContext,
    source: &str,
    entry_point: &str,
    workgroup_size: u32,
) -> Result<CompiledKernel, String> {
    let shader_module = ctx
        .device
        .create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vecadd_shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

    let pipeline = ctx
        .device
        .create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("vecadd_pipeline"),
            layout: None, // auto-derive from shader
            module: &shader_module,
            entry_point: Some(entry_point),
            compilation_options: Default::default(),
            cache: None,
        });

    let bind_group_layout = pipeline.get_bind_group_layout(0);

    Ok(CompiledKernel {
        pipeline,
        bind_group_layout,
        workgroup_size,
    })
}
