//! Scalar reference clamp.
//!
//! This is the definition every SIMD variant is tested against, and the code
//! every SIMD variant runs on its trailing `num_points % LANE_COUNT` elements.

/// Clamps one value.
///
/// The `> max` test runs first and both tests are strict, so:
/// - NaN fails both comparisons and is returned unchanged,
/// - `+inf` becomes a finite `max`, `-inf` a finite `min`,
/// - a zero sitting exactly on a zero bound keeps its own sign.
///
/// Do not replace this with `f32::clamp`/`f32::min`/`f32::max`: those differ on
/// NaN and on signed zeros.
#[inline(always)]
pub fn clamp_scalar(x: f32, min: f32, max: f32) -> f32 {
    if x > max {
        max
    } else if x < min {
        min
    } else {
        x
    }
}

/// Clamps `num_points` floats from `input` into `out`, one at a time.
///
/// # Safety
///
/// - `input` must be valid for `num_points` reads and `out` for `num_points`
///   writes (both only need natural `f32` alignment).
/// - `out` and `input` must either be the same pointer or not overlap.
#[inline]
pub unsafe fn clamp_32f_generic(
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    for i in 0..num_points {
        // Read before write keeps `out == input` well defined.
        let x = input.add(i).read();
        out.add(i).write(clamp_scalar(x, min, max));
    }
}
