//! WebGPU backend (cross-platform via wgpu).

pub mod buffer_ops;
pub mod compile;
pub mod device_init;
pub mod dispatch;
