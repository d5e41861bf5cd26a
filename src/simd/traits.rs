/// Packed `f32` register used by the clamp kernels.
///
/// Each instruction set provides one implementation (`F32x4` for SSE4.1 and
/// NEON, `F32x8` for AVX2). Methods are thin wrappers around intrinsics and are
/// meant to be inlined into a `#[target_feature]` caller.
pub trait SimdVec: Copy {
    /// Number of `f32` lanes in the register.
    const LANE_COUNT: usize;

    /// Byte alignment required by [`SimdVec::load_aligned`] and
    /// [`SimdVec::store_aligned_at`].
    const ALIGNMENT: usize;

    /// Broadcasts `value` to every lane.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set backing `Self`.
    unsafe fn splat(value: f32) -> Self;

    /// Returns `true` if `ptr` is a multiple of [`SimdVec::ALIGNMENT`].
    #[inline(always)]
    fn is_aligned(ptr: *const f32) -> bool {
        (ptr as usize) % Self::ALIGNMENT == 0
    }

    /// Loads `LANE_COUNT` floats from an aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to [`SimdVec::ALIGNMENT`] and valid for
    /// `LANE_COUNT` reads.
    unsafe fn load_aligned(ptr: *const f32) -> Self;

    /// Loads `LANE_COUNT` floats from any 4-byte aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANE_COUNT` reads.
    unsafe fn load_unaligned(ptr: *const f32) -> Self;

    /// Stores all lanes to an aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be aligned to [`SimdVec::ALIGNMENT`] and valid for
    /// `LANE_COUNT` writes.
    unsafe fn store_aligned_at(&self, ptr: *mut f32);

    /// Stores all lanes to any 4-byte aligned address.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANE_COUNT` writes.
    unsafe fn store_unaligned_at(&self, ptr: *mut f32);

    /// Lane-wise `self < rhs` as an all-ones / all-zeros mask.
    ///
    /// The comparison is ordered: a NaN in either operand yields a zero lane.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set backing `Self`.
    unsafe fn lt_elements(&self, rhs: Self) -> Self;

    /// Lane-wise `mask ? other : self`.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set backing `Self`. `mask` must
    /// come from a comparison (every lane all-ones or all-zeros).
    unsafe fn blend(&self, other: Self, mask: Self) -> Self;
}

/// Clamp for `f32` slices, in the same scalar / SIMD / parallel SIMD flavours
/// as the rest of the crate's slice operations.
pub trait SimdClamp {
    type Output;

    fn simd_clamp(self, min: f32, max: f32) -> Self::Output;
    fn par_simd_clamp(self, min: f32, max: f32) -> Self::Output;
    fn scalar_clamp(self, min: f32, max: f32) -> Self::Output;
}
