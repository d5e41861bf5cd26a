//! Safe slice-level clamp built on the raw kernels.
//!
//! The raw kernels in [`crate::simd::generic`], `sse`, `avx2` and `neon` take
//! pointers and trust their caller. This module adds:
//!
//! - [`SimdClamp`] for `&[f32]`: scalar, SIMD and parallel SIMD flavours that
//!   return a new vector,
//! - [`clamp_into`], [`clamp_in_place`] and [`clamp_into_aligned`]: checked
//!   entry points that write into caller buffers and report misuse as
//!   [`ClampError`](crate::ClampError).
//!
//! # Variant selection
//!
//! [`Backend::active`] is decided at compile time from the enabled target
//! features, so the widest variant is only used when the binary is built for
//! it (`-C target-cpu=native`, `-C target-feature=+avx2`, ...). There is no
//! runtime CPU probing here. A default `x86_64` build therefore runs the scalar
//! reference; `aarch64` builds always have NEON.
//!
//! Within a backend, the aligned entry is used whenever both buffers happen to
//! sit on the backend's alignment boundary, the unaligned entry otherwise.
//!
//! # Thresholds
//!
//! | Elements                          | Path                         |
//! |-----------------------------------|------------------------------|
//! | `< SIMD_THRESHOLD`                | scalar reference             |
//! | up to `PARALLEL_SIMD_THRESHOLD`   | single-threaded SIMD         |
//! | above                             | rayon, `PARALLEL_CHUNK_SIZE` elements per task |

use std::fmt;

use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    error::{invalid_bounds, length_mismatch, misaligned, Result},
    simd::{
        generic::{clamp_32f_generic, clamp_scalar},
        traits::SimdClamp,
    },
    PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD, SIMD_THRESHOLD,
};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::simd::{
    avx2::clamp::{clamp_32f_a_avx2, clamp_32f_u_avx2},
    sse::clamp::{clamp_32f_a_sse4_1, clamp_32f_u_sse4_1},
};

#[cfg(target_arch = "aarch64")]
use crate::simd::neon::clamp::{clamp_32f_a_neon, clamp_32f_u_neon};

/// Raw kernel signature shared by every clamp variant.
pub type Kernel = unsafe fn(*mut f32, *const f32, f32, f32, usize);

/// Kernel family used by the safe slice layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// 8 lanes, `clamp_32f_{a,u}_avx2`.
    Avx2,
    /// 4 lanes, `clamp_32f_{a,u}_sse4_1`.
    Sse41,
    /// 4 lanes, `clamp_32f_{a,u}_neon`.
    Neon,
    /// Scalar reference, `clamp_32f_generic`.
    Generic,
}

impl Backend {
    /// The widest backend the crate was compiled for.
    pub const fn active() -> Self {
        if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "avx2"
        )) {
            Backend::Avx2
        } else if cfg!(all(
            any(target_arch = "x86", target_arch = "x86_64"),
            target_feature = "sse4.1"
        )) {
            Backend::Sse41
        } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
            Backend::Neon
        } else {
            Backend::Generic
        }
    }

    /// Floats processed per vector block.
    pub const fn lane_count(self) -> usize {
        match self {
            Backend::Avx2 => 8,
            Backend::Sse41 | Backend::Neon => 4,
            Backend::Generic => 1,
        }
    }

    /// Byte alignment the backend's aligned entry point requires.
    pub const fn alignment(self) -> usize {
        self.lane_count() * std::mem::size_of::<f32>()
    }

    /// `(aligned, unaligned)` entry points of this backend.
    ///
    /// Backends whose instruction set does not exist on the current target
    /// architecture resolve to the scalar reference.
    ///
    /// The kernels assume the CPU supports the backend's instruction set.
    /// That always holds for [`Backend::active`]; for any other backend the
    /// caller has to check before invoking them.
    pub fn kernels(self) -> (Kernel, Kernel) {
        match self {
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Backend::Avx2 => (clamp_32f_a_avx2 as Kernel, clamp_32f_u_avx2 as Kernel),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Backend::Sse41 => (clamp_32f_a_sse4_1 as Kernel, clamp_32f_u_sse4_1 as Kernel),
            #[cfg(target_arch = "aarch64")]
            Backend::Neon => (clamp_32f_a_neon as Kernel, clamp_32f_u_neon as Kernel),
            _ => (clamp_32f_generic as Kernel, clamp_32f_generic as Kernel),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Avx2 => "avx2",
            Backend::Sse41 => "sse4.1",
            Backend::Neon => "neon",
            Backend::Generic => "generic",
        };
        f.write_str(name)
    }
}

#[inline(always)]
fn is_aligned_to(ptr: *const f32, alignment: usize) -> bool {
    (ptr as usize) % alignment == 0
}

/// Runs the active backend, preferring its aligned entry when possible.
///
/// # Safety
///
/// `input`/`out` valid for `num_points` reads/writes, equal or disjoint.
#[inline]
unsafe fn clamp_raw(out: *mut f32, input: *const f32, min: f32, max: f32, num_points: usize) {
    clamp_with(Backend::active(), out, input, min, max, num_points)
}

/// # Safety
///
/// As [`clamp_raw`], and the CPU must support `backend`'s instruction set.
#[inline]
unsafe fn clamp_with(
    backend: Backend,
    out: *mut f32,
    input: *const f32,
    min: f32,
    max: f32,
    num_points: usize,
) {
    let (aligned, unaligned) = backend.kernels();
    let alignment = backend.alignment();

    if is_aligned_to(out, alignment) && is_aligned_to(input, alignment) {
        aligned(out, input, min, max, num_points)
    } else {
        unaligned(out, input, min, max, num_points)
    }
}

fn validate_bounds(min: f32, max: f32) -> Result<()> {
    if min.is_nan() || max.is_nan() || min > max {
        debug!("rejecting clamp bounds min={min} max={max}");
        return Err(invalid_bounds(min, max));
    }
    Ok(())
}

fn validate_lengths(out: &[f32], input: &[f32]) -> Result<()> {
    if out.len() != input.len() {
        debug!(
            "rejecting clamp: input has {} elements, output has {}",
            input.len(),
            out.len()
        );
        return Err(length_mismatch(input.len(), out.len()));
    }
    Ok(())
}

/// Clamps every element of `a` with the scalar reference.
#[inline(always)]
pub fn scalar_clamp(a: &[f32], min: f32, max: f32) -> Vec<f32> {
    a.iter().map(|&x| clamp_scalar(x, min, max)).collect()
}

/// Clamps `a` into a freshly allocated vector with the active backend.
#[inline(always)]
fn simd_clamp(a: &[f32], min: f32, max: f32) -> Vec<f32> {
    // For small arrays, fall back to scalar to avoid SIMD overhead
    if a.len() < SIMD_THRESHOLD {
        return scalar_clamp(a, min, max);
    }

    let size = a.len();
    let mut c: Vec<f32> = Vec::with_capacity(size);

    // SAFETY: `c` has capacity for `size` floats and does not alias `a`; the
    // kernel writes every one of them before `set_len` exposes them.
    unsafe {
        clamp_raw(c.as_mut_ptr(), a.as_ptr(), min, max, size);
        c.set_len(size);
    }

    c
}

/// Clamps `a` across rayon's thread pool.
#[inline(always)]
fn parallel_simd_clamp(a: &[f32], min: f32, max: f32) -> Vec<f32> {
    // For small arrays, fall back to regular SIMD to avoid threading overhead
    if a.len() <= PARALLEL_SIMD_THRESHOLD {
        return simd_clamp(a, min, max);
    }

    let size = a.len();
    let mut c: Vec<f32> = Vec::with_capacity(size);

    trace!(
        "parallel clamp: {size} elements, {} chunks, backend {}",
        size.div_ceil(PARALLEL_CHUNK_SIZE),
        Backend::active()
    );

    // Chunk boundaries are multiples of every lane width, so each chunk keeps
    // the alignment of the buffer start.
    c.spare_capacity_mut()[..size]
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .zip(a.par_chunks(PARALLEL_CHUNK_SIZE))
        .for_each(|(c_chunk, a_chunk)| {
            // SAFETY: chunks are disjoint and have matching lengths.
            unsafe {
                clamp_raw(
                    c_chunk.as_mut_ptr() as *mut f32,
                    a_chunk.as_ptr(),
                    min,
                    max,
                    a_chunk.len(),
                )
            };
        });

    // SAFETY: every chunk of the spare capacity was written above.
    unsafe { c.set_len(size) };

    c
}

/// Clamps `input` into `out` with the active backend.
///
/// # Errors
///
/// - [`ClampError::LengthMismatch`](crate::ClampError::LengthMismatch) if the
///   slices differ in length.
/// - [`ClampError::InvalidBounds`](crate::ClampError::InvalidBounds) if a bound
///   is NaN or `min > max`.
///
/// `out` is left untouched on error.
///
/// ```rust
/// let input = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.5];
/// let mut out = [0.0f32; 4];
/// simdclamp::clamp_into(&mut out, &input, -1.0, 1.0).unwrap();
/// assert!(out[0].is_nan());
/// assert_eq!(&out[1..], &[1.0, -1.0, 0.5]);
/// ```
pub fn clamp_into(out: &mut [f32], input: &[f32], min: f32, max: f32) -> Result<()> {
    validate_bounds(min, max)?;
    validate_lengths(out, input)?;

    trace!(
        "clamp_into: {} elements, backend {}",
        input.len(),
        Backend::active()
    );

    // SAFETY: equal lengths; `&mut` and `&` slices cannot overlap.
    unsafe { clamp_raw(out.as_mut_ptr(), input.as_ptr(), min, max, input.len()) };
    Ok(())
}

/// Clamps `buf` in place (the `out == in` form of the kernels).
///
/// # Errors
///
/// [`ClampError::InvalidBounds`](crate::ClampError::InvalidBounds) if a bound is
/// NaN or `min > max`; `buf` is left untouched.
///
/// ```rust
/// let mut buf = [1.0f32, 2.0, 3.0];
/// simdclamp::clamp_in_place(&mut buf, 1.5, 2.5).unwrap();
/// assert_eq!(buf, [1.5, 2.0, 2.5]);
/// ```
pub fn clamp_in_place(buf: &mut [f32], min: f32, max: f32) -> Result<()> {
    validate_bounds(min, max)?;

    trace!(
        "clamp_in_place: {} elements, backend {}",
        buf.len(),
        Backend::active()
    );

    let ptr = buf.as_mut_ptr();
    // SAFETY: exact aliasing is part of every kernel's contract.
    unsafe { clamp_raw(ptr, ptr, min, max, buf.len()) };
    Ok(())
}

/// Clamps `input` into `out` through the active backend's aligned entry point.
///
/// Unlike calling the aligned kernel directly, a misaligned buffer is
/// reported instead of faulting.
///
/// # Errors
///
/// - [`ClampError::InvalidBounds`](crate::ClampError::InvalidBounds) and
///   [`ClampError::LengthMismatch`](crate::ClampError::LengthMismatch) as in
///   [`clamp_into`].
/// - [`ClampError::Misaligned`](crate::ClampError::Misaligned) if either base
///   address is not a multiple of [`Backend::alignment`] and the input holds at
///   least one full vector block. Shorter inputs never reach a vector load, so
///   any address is accepted for them.
pub fn clamp_into_aligned(out: &mut [f32], input: &[f32], min: f32, max: f32) -> Result<()> {
    validate_bounds(min, max)?;
    validate_lengths(out, input)?;

    // SAFETY: `active()` only names instruction sets the build targets.
    unsafe { clamp_aligned_with(Backend::active(), out, input, min, max) }
}

/// Alignment check plus aligned entry of `backend`. Lengths and bounds are
/// already validated.
///
/// # Safety
///
/// The CPU must support `backend`'s instruction set.
unsafe fn clamp_aligned_with(
    backend: Backend,
    out: &mut [f32],
    input: &[f32],
    min: f32,
    max: f32,
) -> Result<()> {
    let alignment = backend.alignment();

    if input.len() >= backend.lane_count() {
        for ptr in [input.as_ptr(), out.as_ptr()] {
            if !is_aligned_to(ptr, alignment) {
                debug!("rejecting aligned clamp: {ptr:p} is not {alignment}-byte aligned");
                return Err(misaligned(ptr, alignment));
            }
        }
    }

    let (aligned, _) = backend.kernels();
    // SAFETY: both buffers are aligned whenever a vector block runs.
    aligned(out.as_mut_ptr(), input.as_ptr(), min, max, input.len());
    Ok(())
}

impl SimdClamp for &[f32] {
    type Output = Vec<f32>;

    #[inline(always)]
    fn simd_clamp(self, min: f32, max: f32) -> Self::Output {
        simd_clamp(self, min, max)
    }

    #[inline(always)]
    fn par_simd_clamp(self, min: f32, max: f32) -> Self::Output {
        parallel_simd_clamp(self, min, max)
    }

    #[inline(always)]
    fn scalar_clamp(self, min: f32, max: f32) -> Self::Output {
        scalar_clamp(self, min, max)
    }
}
