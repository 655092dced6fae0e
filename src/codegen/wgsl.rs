//! WebGPU Shading Language (WGSL) code generation for the add kernel.
//!
//! The generated kernel reads storage arrays `a` and `b` and writes their
//! elementwise sum into `result`, one thread per element. The invocation
//! index is linearized from a 2D workgroup grid so that dispatches larger
//! than the per-dimension workgroup cap still fit in a single submission.

/// Default workgroup size for the add kernel.
pub const WORKGROUP_SIZE: u32 = 256;

/// Entry point name of the generated kernel.
pub const ENTRY_POINT: &str = "add_arrays";

/// Clamp the workgroup size against the device's reported maximum
/// invocations per workgroup and the total element count.
///
/// Never returns 0, so the emitted source stays valid even for tiny inputs.
pub fn workgroup_size_for(max_threads_per_group: u32, numel: usize) -> u32 {
    let numel = numel.min(u32::MAX as usize) as u32;
    WORKGROUP_SIZE.min(max_threads_per_group).min(numel).max(1)
}

/// Generate WGSL source for the elementwise add kernel.
///
/// `workgroup_size` must match what the dispatch side assumes when it
/// computes workgroup counts; it is substituted into both the
/// `@workgroup_size` attribute and the index linearization.
pub fn emit_add_kernel(workgroup_size: u32) -> String {
    format!(
        r#"@group(0) @binding(0) var<storage, read> a: array<f32>;
@group(0) @binding(1) var<storage, read> b: array<f32>;
@group(0) @binding(2) var<storage, read_write> result: array<f32>;

@compute @workgroup_size({workgroup_size})
fn {ENTRY_POINT}(
    @builtin(global_invocation_id) gid: vec3<u32>,
    @builtin(num_workgroups) grid: vec3<u32>,
) {{
    let index = gid.y * (grid.x * {workgroup_size}u) + gid.x;
    if (index >= arrayLength(&a)) {{
        return;
    }}
    result[index] = a[index] + b[index];
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_add_kernel() {
        let src = emit_add_kernel(WORKGROUP_SIZE);
        assert!(src.contains("fn add_arrays"));
        assert!(src.contains("var<storage, read> a: array<f32>"));
        assert!(src.contains("var<storage, read> b: array<f32>"));
        assert!(src.contains("var<storage, read_write> result: array<f32>"));
        assert!(src.contains("a[index] + b[index]"));
        assert!(src.contains("@compute @workgroup_size(256)"));
    }

    #[test]
    fn test_emit_respects_workgroup_size() {
        let src = emit_add_kernel(64);
        assert!(src.contains("@workgroup_size(64)"));
        assert!(src.contains("grid.x * 64u"));
    }

    #[test]
    fn test_workgroup_size_clamps_to_device_limit() {
        assert_eq!(workgroup_size_for(1024, 1 << 24), WORKGROUP_SIZE);
        assert_eq!(workgroup_size_for(128, 1 << 24), 128);
    }

    #[test]
    fn test_workgroup_size_clamps_to_element_count() {
        assert_eq!(workgroup_size_for(1024, 7), 7);
        assert_eq!(workgroup_size_for(1024, 0), 1);
    }
}
