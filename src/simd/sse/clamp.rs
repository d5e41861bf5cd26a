//! SSE4.1 clamp kernels (4 lanes).

use crate::simd::{kernel::clamp_blocks, sse::f32x4::F32x4};

/// Clamps `num_points` floats using 16-byte aligned loads and stores.
///
/// # Safety
///
/// - The CPU must support SSE4.1.
/// - `out` and `input` must both be 16-byte aligned. Debug builds assert this
///   when at least one full block is processed; release builds fault.
/// - `input` must be valid for `num_points` reads, `out` for `num_points`
///   writes, and the two must be equal or disjoint.
#[target_feature(enable = "sse4.1")]
pub unsafe fn clamp_32f_a_sse4_1(
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    clamp_blocks::<F32x4, true>(out, input, min, max, num_points)
}

/// Clamps `num_points` floats using unaligned loads and stores.
///
/// # Safety
///
/// - The CPU must support SSE4.1.
/// - `input` must be valid for `num_points` reads, `out` for `num_points`
///   writes, and the two must be equal or disjoint.
#[target_feature(enable = "sse4.1")]
pub unsafe fn clamp_32f_u_sse4_1(
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    clamp_blocks::<F32x4, false>(out, input, min, max, num_points)
}
