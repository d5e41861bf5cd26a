//! AVX2 8-lane f32 SIMD vector implementation.
//!
//! This module provides `F32x8`, a SIMD vector type that wraps Intel's `__m256`
//! intrinsic type and exposes what the clamp kernels need from it.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel processors with AVX2 support (Haswell and later)
//! - **Target Architecture**: x86_64 (and x86 with SSE compatibility)
//!
//! # Supported Operations
//!
//! ## Loading and Storing
//! - `load_aligned()`, `load_unaligned()` - `_mm256_load_ps` / `_mm256_loadu_ps`
//! - `store_aligned_at()`, `store_unaligned_at()` - `_mm256_store_ps` / `_mm256_storeu_ps`
//!
//! ## Masks
//! - `lt_elements()` - ordered `_CMP_LT_OS` comparison
//! - `blend()` - `_mm256_blendv_ps`

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::SimdVec;

/// AVX2 memory alignment requirement in bytes.
///
/// `_mm256_load_ps` and `_mm256_store_ps` fault unless the address is a
/// multiple of this value.
pub(crate) const AVX_ALIGNMENT: usize = 32;

/// Number of f32 elements that fit in an AVX2 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// AVX2 SIMD vector containing 8 packed f32 values.
///
/// # Usage
///
/// ```rust
/// # #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
/// # {
/// use simdclamp::simd::avx2::f32x8::F32x8;
/// use simdclamp::simd::traits::SimdVec;
///
/// if is_x86_feature_detected!("avx2") {
///     let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
///     let mut out = [0.0f32; 8];
///     unsafe {
///         let v = F32x8::load_unaligned(data.as_ptr());
///         let hi = F32x8::splat(4.0);
///         v.blend(hi, hi.lt_elements(v)).store_unaligned_at(out.as_mut_ptr());
///     }
///     assert_eq!(out, [1.0, 2.0, 3.0, 4.0, 4.0, 4.0, 4.0, 4.0]);
/// }
/// # }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// AVX2 256-bit vector register containing 8 packed f32 values
    pub elements: __m256,
}

impl SimdVec for F32x8 {
    const LANE_COUNT: usize = LANE_COUNT;
    const ALIGNMENT: usize = AVX_ALIGNMENT;

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self {
            elements: _mm256_set1_ps(value),
        }
    }

    /// Loads 8 elements from 32-byte aligned memory.
    ///
    /// This is the fastest loading method when alignment is guaranteed.
    /// Uses the `_mm256_load_ps` intrinsic.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        Self {
            elements: _mm256_load_ps(ptr),
        }
    }

    /// Loads 8 elements from unaligned memory.
    ///
    /// Works with any memory alignment. Uses the `_mm256_loadu_ps` intrinsic.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: _mm256_loadu_ps(ptr),
        }
    }

    /// Stores 8 elements to 32-byte aligned memory with `_mm256_store_ps`.
    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        _mm256_store_ps(ptr, self.elements)
    }

    /// Stores 8 elements to unaligned memory with `_mm256_storeu_ps`.
    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        _mm256_storeu_ps(ptr, self.elements)
    }

    /// Ordered, signaling less-than: NaN lanes compare false.
    ///
    /// `_CMP_LT_OQ` would give the same lanes; the unordered `_CMP_NGE_*`
    /// predicates would not and must not be used here.
    #[inline(always)]
    unsafe fn lt_elements(&self, rhs: Self) -> Self {
        Self {
            elements: _mm256_cmp_ps::<_CMP_LT_OS>(self.elements, rhs.elements),
        }
    }

    #[inline(always)]
    unsafe fn blend(&self, other: Self, mask: Self) -> Self {
        Self {
            elements: _mm256_blendv_ps(self.elements, other.elements, mask.elements),
        }
    }
}
