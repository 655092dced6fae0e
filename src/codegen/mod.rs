//! GPU kernel source code generation.
//!
//! Emits the WGSL compute-shader source that is runtime-compiled on the
//! device. The workgroup size is baked into the emitted source, so it must
//! be decided (clamped against device limits) before compilation.

pub mod wgsl;
