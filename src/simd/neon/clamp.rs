//! NEON clamp kernels (4 lanes).
//!
//! AArch64 has no alignment-checking vector load, so both entries issue
//! `ld1`/`st1`. The aligned entry still carries the 16-byte contract of the
//! other 128-bit variant and checks it in debug builds.

use crate::simd::{kernel::clamp_blocks, neon::f32x4::F32x4};

/// Clamps `num_points` floats; the caller promises 16-byte aligned buffers.
///
/// # Safety
///
/// - `out` and `input` must both be 16-byte aligned (asserted in debug builds
///   when at least one full block is processed).
/// - `input` must be valid for `num_points` reads, `out` for `num_points`
///   writes, and the two must be equal or disjoint.
#[target_feature(enable = "neon")]
pub unsafe fn clamp_32f_a_neon(
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    clamp_blocks::<F32x4, true>(out, input, min, max, num_points)
}

/// Clamps `num_points` floats with no alignment requirement.
///
/// # Safety
///
/// `input` must be valid for `num_points` reads, `out` for `num_points`
/// writes, and the two must be equal or disjoint.
#[target_feature(enable = "neon")]
pub unsafe fn clamp_32f_u_neon(
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    clamp_blocks::<F32x4, false>(out, input, min, max, num_points)
}
