//! SSE4.1 4-lane f32 SIMD vector implementation.
//!
//! `F32x4` wraps an `__m128` and exposes the handful of operations the clamp
//! kernels need: broadcast, aligned/unaligned load and store, ordered
//! less-than and mask blend.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::SimdVec;

/// SSE memory alignment requirement in bytes.
///
/// `_mm_load_ps` and `_mm_store_ps` fault on addresses that are not a multiple
/// of this value.
pub(crate) const SSE_ALIGNMENT: usize = 16;

/// Number of f32 elements that fit in a 128-bit SSE register.
pub(crate) const LANE_COUNT: usize = 4;

/// SSE vector containing 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// SSE 128-bit register containing 4 packed f32 values
    pub elements: __m128,
}

impl SimdVec for F32x4 {
    const LANE_COUNT: usize = LANE_COUNT;
    const ALIGNMENT: usize = SSE_ALIGNMENT;

    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self {
            elements: _mm_set1_ps(value),
        }
    }

    /// Loads 4 elements with `_mm_load_ps`.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        Self {
            elements: _mm_load_ps(ptr),
        }
    }

    /// Loads 4 elements with `_mm_loadu_ps`.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: _mm_loadu_ps(ptr),
        }
    }

    /// Stores 4 elements with `_mm_store_ps`.
    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        _mm_store_ps(ptr, self.elements)
    }

    /// Stores 4 elements with `_mm_storeu_ps`.
    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.elements)
    }

    /// `_mm_cmplt_ps` is the ordered, signaling `LT_OS` predicate.
    #[inline(always)]
    unsafe fn lt_elements(&self, rhs: Self) -> Self {
        Self {
            elements: _mm_cmplt_ps(self.elements, rhs.elements),
        }
    }

    /// `_mm_blendv_ps` picks `other` wherever the mask lane's sign bit is set.
    #[inline(always)]
    unsafe fn blend(&self, other: Self, mask: Self) -> Self {
        Self {
            elements: _mm_blendv_ps(self.elements, other.elements, mask.elements),
        }
    }
}
