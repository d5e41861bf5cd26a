//! Block loop shared by every SIMD clamp variant.
//!
//! The per-ISA entry points only differ in the register type and in whether
//! they use aligned or unaligned loads/stores, so the loop is written once
//! over [`SimdVec`] and inlined into each `#[target_feature]` function.

use crate::simd::{generic::clamp_32f_generic, traits::SimdVec};

/// Clamps `num_points` floats, `V::LANE_COUNT` at a time, then finishes the
/// tail with the scalar reference.
///
/// Per block both masks are computed from the loaded value, then the high
/// clip is blended in before the low clip. For `min <= max` at most one mask
/// is set per lane, which makes the result bit-identical to
/// [`clamp_32f_generic`].
///
/// # Safety
///
/// - The CPU must support the instruction set behind `V`.
/// - `input`/`out` must be valid for `num_points` reads/writes and either be
///   equal or not overlap.
/// - With `ALIGNED = true` both pointers must be aligned to `V::ALIGNMENT`.
#[inline(always)]
pub(crate) unsafe fn clamp_blocks<V: SimdVec, const ALIGNED: bool>(
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    let step = V::LANE_COUNT;
    let nb_blocks = num_points / step;

    // Only block loads/stores fault on a bad address; the scalar tail never does.
    debug_assert!(
        !ALIGNED || nb_blocks == 0 || (V::is_aligned(input) && V::is_aligned(out)),
        "aligned clamp requires {}-byte aligned buffers (input={:p}, out={:p})",
        V::ALIGNMENT,
        input,
        out
    );

    let vmin = V::splat(min);
    let vmax = V::splat(max);

    for block in 0..nb_blocks {
        let offset = block * step;

        let res = if ALIGNED {
            V::load_aligned(input.add(offset))
        } else {
            V::load_unaligned(input.add(offset))
        };

        let hi_mask = vmax.lt_elements(res);
        let lo_mask = res.lt_elements(vmin);

        let res = res.blend(vmax, hi_mask).blend(vmin, lo_mask);

        if ALIGNED {
            res.store_aligned_at(out.add(offset));
        } else {
            res.store_unaligned_at(out.add(offset));
        }
    }

    let done = nb_blocks * step;
    clamp_32f_generic(out.add(done), input.add(done), min, max, num_points - done);
}
