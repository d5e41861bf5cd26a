//! SSE4.1 SIMD implementations for 128-bit vector operations.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Penryn (2008+) or AMD Bulldozer (2011+)
//! - **Target Architecture**: x86 or x86_64
//! - **Instructions**: `cmpltps` for the ordered masks, `blendvps` for the
//!   selects (the reason SSE4.1 is needed rather than plain SSE2)
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`]: 128-bit vector containing 4 packed single-precision values
//!
//! # Entry Points
//!
//! - [`clamp::clamp_32f_a_sse4_1`]: 16-byte aligned buffers (`movaps`)
//! - [`clamp::clamp_32f_u_sse4_1`]: any 4-byte aligned buffers (`movups`)
//!
//! Both are compiled on every x86 target with `#[target_feature]`; the caller
//! checks that the host actually has SSE4.1 before calling them.

pub mod f32x4;

pub mod clamp;
