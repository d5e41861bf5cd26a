//! ARM NEON SIMD implementations for 128-bit vector operations.
//!
//! This module contains SIMD implementations using ARM's Advanced SIMD (NEON) instruction set,
//! which provides 128-bit vector operations on ARM processors.
//! NEON is part of the baseline of every AArch64 processor, including Apple Silicon,
//! AWS Graviton, and modern mobile devices.
//!
//! # Architecture Requirements
//!
//! - **Target Architecture**: AArch64
//! - **Compilation**: NEON is enabled by default on `aarch64-*` targets
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`]: `float32x4_t` wrapper, 4 lanes
//!
//! # Entry Points
//!
//! - [`clamp::clamp_32f_a_neon`]: caller guarantees 16-byte aligned buffers
//! - [`clamp::clamp_32f_u_neon`]: any 4-byte aligned buffers
//!
//! # Platform Support
//!
//! - **Apple Silicon**: M1, M2, M3 processors (macOS, iOS)
//! - **AWS Graviton**: Graviton2, Graviton3 processors
//! - **Mobile**: Modern Android and iOS devices

pub mod f32x4;

pub mod clamp;
