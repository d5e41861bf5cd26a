//! AVX2 SIMD implementations for 256-bit vector operations.
//!
//! This module contains SIMD implementations using Intel's Advanced Vector Extensions 2 (AVX2)
//! instruction set, which provides 256-bit vector operations.
//! AVX2 is available on most Intel processors since Haswell (2013) and AMD processors since
//! Excavator (2015).
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: none here; callers check `is_x86_feature_detected!("avx2")`
//!   or build with `-C target-feature=+avx2`
//!
//! # Available Types
//!
//! - [`f32x8::F32x8`]: 256-bit vector containing 8 packed single-precision floating-point values
//!
//! # Entry Points
//!
//! - [`clamp::clamp_32f_a_avx2`]: 32-byte aligned buffers
//! - [`clamp::clamp_32f_u_avx2`]: any 4-byte aligned buffers
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 256 bits (8 × f32)
//! - **Memory Alignment**: the aligned entry saves the split-line penalty of
//!   `vmovups` when the caller can guarantee 32-byte boundaries

pub mod f32x8;

pub mod clamp;
