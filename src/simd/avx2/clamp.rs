//! AVX2 clamp kernels (8 lanes).

use crate::simd::{avx2::f32x8::F32x8, kernel::clamp_blocks};

/// Clamps `num_points` floats using 32-byte aligned loads and stores.
///
/// # Safety
///
/// - The CPU must support AVX2.
/// - `out` and `input` must both be 32-byte aligned. Debug builds assert this
///   when at least one full block is processed; release builds fault.
/// - `input` must be valid for `num_points` reads, `out` for `num_points`
///   writes, and the two must be equal or disjoint.
#[target_feature(enable = "avx,avx2")]
pub unsafe fn clamp_32f_a_avx2(
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    clamp_blocks::<F32x8, true>(out, input, min, max, num_points)
}

/// Clamps `num_points` floats using unaligned loads and stores.
///
/// # Safety
///
/// - The CPU must support AVX2.
/// - `input` must be valid for `num_points` reads, `out` for `num_points`
///   writes, and the two must be equal or disjoint.
#[target_feature(enable = "avx,avx2")]
pub unsafe fn clamp_32f_u_avx2(
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    clamp_blocks::<F32x8, false>(out, input, min, max, num_points)
}
