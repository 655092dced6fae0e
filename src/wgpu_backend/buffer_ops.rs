//! GPU buffer operations — allocation, upload, and staged readback.

use wgpu;
use wgpu::util::DeviceExt;

use super::device_init::WgpuContext;

/// Storage buffer wrapper with its byte size.
pub struct GpuBuffer {
    pub(crate) buffer: wgpu::Buffer,
    byte_size: usize,
}

impl GpuBuffer {
    /// Create a buffer initialized with a copy of `data`.
    pub fn from_bytes(ctx: &WgpuContext, data: &[u8]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let buffer = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("vecadd_buffer"),
                contents: data,
                usage: wgpu::BufferUsages::STORAGE
                    | wgpu::BufferUsages::COPY_SRC
                    | wgpu::BufferUsages::COPY_DST,
            });

        Some(GpuBuffer {
            buffer,
            byte_size: data.len(),
        })
    }

    /// Allocate an empty buffer of the given byte size.
    pub fn allocate(ctx: &WgpuContext, byte_size: usize) -> Option<Self> {
        if byte_size == 0 {
            return None;
        }

        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vecadd_buffer"),
            size: byte_size as u64,
            usage: wgpu::BufferUsages::STORAGE
                | wgpu::BufferUsages::COPY_SRC
                | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Some(GpuBuffer { buffer, byte_size })
    }

    /// Read the buffer contents back to the CPU via a staging buffer.
    pub fn read_to_vec(&self, ctx: &WgpuContext) -> Option<Vec<u8>> {
        let staging = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vecadd_staging"),
            size: self.byte_size as u64,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("vecadd_readback"),
            });
        encoder.copy_buffer_to_buffer(&self.buffer, 0, &staging, 0, self.byte_size as u64);
        ctx.queue.submit(std::iter::once(encoder.finish()));

        let slice = staging.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        ctx.device.poll(wgpu::Maintain::Wait);

        match rx.recv() {
            Ok(Ok(())) => {
                let data = slice.get_mapped_range().to_vec();
                staging.unmap();
                Some(data)
            }
            _ => None,
        }
    }

    /// Get the byte size of the buffer.
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_readback_roundtrip() {
        if !WgpuContext::is_available() {
            println!("GPU not available, skipping");
            return;
        }

        let ctx = WgpuContext::new().unwrap();
        let data: Vec<f32> = (0..256).map(|i| i as f32).collect();
        let buf = GpuBuffer::from_bytes(&ctx, bytemuck::cast_slice(&data)).unwrap();
        assert_eq!(buf.byte_size(), 256 * std::mem::size_of::<f32>());

        let bytes = buf.read_to_vec(&ctx).expect("readback failed");
        let roundtrip: &[f32] = bytemuck::cast_slice(&bytes);
        assert_eq!(roundtrip, data.as_slice());
    }

    #[test]
    fn test_empty_buffer_rejected() {
        if !WgpuContext::is_available() {
            println!("GPU not available, skipping");
            return;
        }

        let ctx = WgpuContext::new().unwrap();
        assert!(GpuBuffer::from_bytes(&ctx, &[]).is_none());
        assert!(GpuBuffer::allocate(&ctx, 0).is_none());
    }
}
