//! Helpers shared by the kernel unit tests.

use crate::simd::{generic::clamp_32f_generic, slice::Kernel};

pub(crate) use crate::simd::aligned_buf::AlignedBuf;

/// Inputs that exercise every interesting class of float.
pub(crate) fn special_values() -> Vec<f32> {
    vec![
        -2.0,
        -1.0,
        -0.5,
        -0.0,
        0.0,
        0.5,
        1.0,
        2.0,
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::MIN_POSITIVE,
        -f32::MIN_POSITIVE,
        f32::from_bits(1),
        f32::from_bits(0x8000_0001),
        f32::MAX,
        f32::MIN,
        3.5,
        -3.5,
        1.0e-3,
    ]
}

/// Runs the reference on `input` and returns the result.
pub(crate) fn reference(input: &[f32], min: f32, max: f32) -> Vec<f32> {
    let mut out = vec![0.0f32; input.len()];
    unsafe { clamp_32f_generic(out.as_mut_ptr(), input.as_ptr(), min, max, input.len()) };
    out
}

/// Bitwise comparison that accepts any NaN where the reference has a NaN.
pub(crate) fn assert_bitwise_eq(actual: &[f32], expected: &[f32], context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}: length differs");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "{context}: index {i} expected NaN, got {a}");
        } else {
            assert_eq!(
                a.to_bits(),
                e.to_bits(),
                "{context}: index {i} expected {e:?}, got {a:?}"
            );
        }
    }
}

/// Checks `kernel` against the reference for every length up to
/// `4 * lanes + 3`, on buffers placed at `offset` floats past a 64-byte boundary.
pub(crate) fn check_against_reference(kernel: Kernel, lanes: usize, offset: usize) {
    let pool = special_values();
    let bounds = [(-1.0f32, 1.0f32), (-1.5, 1.5), (0.0, 0.0), (-0.0, 0.0), (5.0, 5.0)];

    for &(min, max) in &bounds {
        for len in 0..=(4 * lanes + 3) {
            let data: Vec<f32> = (0..len).map(|i| pool[(i * 7 + len) % pool.len()]).collect();
            let expected = reference(&data, min, max);

            let input = AlignedBuf::from_slice(&data, offset);
            let mut out = AlignedBuf::filled(len, 0.0, offset);
            unsafe { kernel(out.as_mut_ptr(), input.as_ptr(), min, max, len) };

            assert_bitwise_eq(
                out.as_slice(),
                &expected,
                &format!("len={len} min={min} max={max} offset={offset}"),
            );
        }
    }
}
