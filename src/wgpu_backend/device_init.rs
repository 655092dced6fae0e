//! WebGPU device initialization via wgpu.

use wgpu;

/// GPU context wrapping device + queue, owned for the process lifetime.
pub struct WgpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    adapter_info: wgpu::AdapterInfo,
}

impl WgpuContext {
    /// Create a new wgpu context using the best available adapter.
    pub fn new() -> Option<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))?;

        let adapter_info = adapter.get_info();
        log::info!(
            "GPU adapter: {} ({:?})",
            adapter_info.name,
            adapter_info.backend
        );

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("vecadd_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            },
            None,
        ))
        .ok()?;

        Some(WgpuContext {
            device,
            queue,
            adapter_info,
        })
    }

    /// Check if a GPU adapter is available on this system.
    pub fn is_available() -> bool {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .is_some()
    }

    /// Description of the adapter backing this context.
    pub fn adapter_info(&self) -> &wgpu::AdapterInfo {
        &self.adapter_info
    }

    /// Maximum compute invocations per workgroup the device supports.
    pub fn max_threads_per_group(&self) -> u32 {
        self.device.limits().max_compute_invocations_per_workgroup
    }

    /// Maximum workgroups per dispatch dimension the device supports.
    pub fn max_workgroups_per_dimension(&self) -> u32 {
        self.device.limits().max_compute_workgroups_per_dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_creation() {
        let available = WgpuContext::is_available();
        println!("GPU available: {}", available);
        if available {
            let ctx = WgpuContext::new().expect("failed to create wgpu context");
            assert!(ctx.max_threads_per_group() > 0);
            assert!(ctx.max_workgroups_per_dimension() > 0);
            println!("adapter: {}", ctx.adapter_info().name);
        }
    }
}
