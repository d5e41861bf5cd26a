//! NEON 4-lane f32 SIMD vector implementation.

use std::arch::aarch64::*;

use crate::simd::traits::SimdVec;

/// Alignment the aligned NEON entry point promises its callers.
///
/// `vld1q_f32`/`vst1q_f32` accept any 4-byte aligned address, so the value is
/// a contract shared with the other 128-bit variant rather than a hardware
/// requirement.
pub(crate) const NEON_ALIGNMENT: usize = 16;

/// Number of f32 elements that fit in a 128-bit NEON register.
pub(crate) const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    pub elements: float32x4_t,
}

impl SimdVec for F32x4 {
    const LANE_COUNT: usize = LANE_COUNT;
    const ALIGNMENT: usize = NEON_ALIGNMENT;

    /// Creates a new vector with all elements set to the same value.
    #[inline(always)]
    unsafe fn splat(value: f32) -> Self {
        Self {
            elements: vdupq_n_f32(value),
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        Self {
            elements: vld1q_f32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: vld1q_f32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn lt_elements(&self, rhs: Self) -> Self {
        // fcmgt with swapped operands: false whenever a NaN is involved.
        let mask = vcltq_f32(self.elements, rhs.elements);

        Self {
            elements: vreinterpretq_f32_u32(mask),
        }
    }

    #[inline(always)]
    unsafe fn blend(&self, other: Self, mask: Self) -> Self {
        Self {
            elements: vbslq_f32(
                vreinterpretq_u32_f32(mask.elements),
                other.elements,
                self.elements,
            ),
        }
    }
}
