//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use simdclamp::simd::{generic::clamp_32f_generic, slice::Kernel};

#[path = "../../src/simd/aligned_buf.rs"]
mod aligned_buf;

pub(crate) use aligned_buf::AlignedBuf;

/// One raw entry point together with its alignment contract.
#[derive(Clone, Copy)]
pub struct Variant {
    pub name: &'static str,
    pub kernel: Kernel,
    /// Lane width W.
    pub lanes: usize,
    /// Whether the entry requires `lanes * 4`-byte aligned buffers.
    pub aligned: bool,
}

/// Every variant the host can run. SIMD variants whose instruction set the
/// CPU lacks are left out.
pub fn variants() -> Vec<Variant> {
    let mut list = vec![Variant {
        name: "generic",
        kernel: clamp_32f_generic,
        lanes: 1,
        aligned: false,
    }];

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        use simdclamp::simd::{avx2::clamp::*, sse::clamp::*};

        if is_x86_feature_detected!("sse4.1") {
            list.push(Variant {
                name: "a_sse4_1",
                kernel: clamp_32f_a_sse4_1,
                lanes: 4,
                aligned: true,
            });
            list.push(Variant {
                name: "u_sse4_1",
                kernel: clamp_32f_u_sse4_1,
                lanes: 4,
                aligned: false,
            });
        } else {
            eprintln!("host lacks SSE4.1, skipping its variants");
        }

        if is_x86_feature_detected!("avx2") {
            list.push(Variant {
                name: "a_avx2",
                kernel: clamp_32f_a_avx2,
                lanes: 8,
                aligned: true,
            });
            list.push(Variant {
                name: "u_avx2",
                kernel: clamp_32f_u_avx2,
                lanes: 8,
                aligned: false,
            });
        } else {
            eprintln!("host lacks AVX2, skipping its variants");
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        use simdclamp::simd::neon::clamp::*;

        list.push(Variant {
            name: "a_neon",
            kernel: clamp_32f_a_neon,
            lanes: 4,
            aligned: true,
        });
        list.push(Variant {
            name: "u_neon",
            kernel: clamp_32f_u_neon,
            lanes: 4,
            aligned: false,
        });
    }

    list
}

/// Offsets (in floats) the variant may legally be called with.
pub fn offsets_for(variant: &Variant) -> Vec<usize> {
    if variant.aligned {
        vec![0]
    } else {
        vec![0, 1, 3]
    }
}

/// Runs `variant` on a copy of `input` placed at `offset` and returns the output.
pub fn run(variant: &Variant, input: &[f32], min: f32, max: f32, offset: usize) -> Vec<f32> {
    let src = AlignedBuf::from_slice(input, offset);
    let mut dst = AlignedBuf::filled(input.len(), 0.0, offset);
    unsafe { (variant.kernel)(dst.as_mut_ptr(), src.as_ptr(), min, max, input.len()) };
    dst.as_slice().to_vec()
}

/// Runs `variant` with `out == in` and returns the buffer afterwards.
pub fn run_in_place(variant: &Variant, input: &[f32], min: f32, max: f32, offset: usize) -> Vec<f32> {
    let mut buf = AlignedBuf::from_slice(input, offset);
    let ptr = buf.as_mut_ptr();
    unsafe { (variant.kernel)(ptr, ptr, min, max, input.len()) };
    buf.as_slice().to_vec()
}

/// The scalar reference, on ordinary vectors.
pub fn reference(input: &[f32], min: f32, max: f32) -> Vec<f32> {
    let mut out = vec![0.0f32; input.len()];
    unsafe { clamp_32f_generic(out.as_mut_ptr(), input.as_ptr(), min, max, input.len()) };
    out
}

/// Bit-for-bit comparison; a NaN in `expected` only requires a NaN in `actual`.
pub fn assert_bitwise_eq(actual: &[f32], expected: &[f32], context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}: length differs");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "{context}: index {i} expected NaN, got {a:?}");
        } else {
            assert_eq!(
                a.to_bits(),
                e.to_bits(),
                "{context}: index {i} expected {e:?}, got {a:?}"
            );
        }
    }
}

/// Normals, signed zeros, infinities, NaNs and subnormals.
pub fn value_pool() -> Vec<f32> {
    vec![
        0.0,
        -0.0,
        0.25,
        -0.25,
        1.0,
        -1.0,
        1.5,
        -1.5,
        2.0,
        -2.0,
        100.0,
        -100.0,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::NAN,
        -f32::NAN,
        f32::from_bits(0x7fc0_0001),
        f32::MIN_POSITIVE,
        -f32::MIN_POSITIVE,
        f32::from_bits(0x0000_0001),
        f32::from_bits(0x8000_0001),
        f32::from_bits(0x007f_ffff),
        f32::MAX,
        f32::MIN,
        f32::EPSILON,
    ]
}
