//! # simdclamp
//!
//! Element-wise clamp of `f32` buffers to a scalar `[min, max]` range.
//!
//! The crate is organised around a family of kernels that all compute
//!
//! ```text
//! out[i] = (in[i] > max) ? max : (in[i] < min) ? min : in[i]
//! ```
//!
//! - [`simd::generic`]: the scalar reference every other variant must agree with.
//! - `simd::sse` (x86/x86_64): SSE4.1, 4 lanes, aligned and unaligned entries.
//! - `simd::avx2` (x86/x86_64): AVX2, 8 lanes, aligned and unaligned entries.
//! - `simd::neon` (aarch64): NEON, 4 lanes, aligned and unaligned entries.
//!
//! The raw kernels take pointers so that `out == in` can be expressed. They do
//! not detect CPU features: picking a variant the host supports is the caller's job.
//!
//! [`simd::slice`] wraps them in a safe API for slices ([`SimdClamp`],
//! [`clamp_into`], [`clamp_in_place`], [`clamp_into_aligned`]). That layer
//! picks the widest variant enabled at compile time (for example with
//! `RUSTFLAGS="-C target-cpu=native"`).
//!
//! ## Example
//!
//! ```rust
//! use simdclamp::SimdClamp;
//!
//! let x = [-2.0f32, -1.0, 1.0, 2.0];
//! let y = x.as_slice().simd_clamp(-1.5, 1.5);
//! assert_eq!(y, vec![-1.5, -1.0, 1.0, 1.5]);
//! ```

pub mod error;
pub mod simd;

pub use error::{ClampError, Result};
pub use simd::slice::{clamp_in_place, clamp_into, clamp_into_aligned, Backend};
pub use simd::traits::SimdClamp;

/// Below this many elements the slice layer uses the scalar reference.
///
/// Vector setup costs more than it saves on a handful of floats.
pub const SIMD_THRESHOLD: usize = 64;

/// Above this many elements `par_simd_clamp` splits the work across rayon's pool.
///
/// Clamping is memory-bound, so threads only pay off once the buffers are well
/// past the last-level cache.
pub const PARALLEL_SIMD_THRESHOLD: usize = 1 << 20;

/// Number of elements handed to each rayon task.
///
/// 16 KiB of `f32`s per chunk, a multiple of every lane width in the crate.
pub const PARALLEL_CHUNK_SIZE: usize = 4096;
