//! Error types for the safe clamp entry points.
//!
//! The raw kernels have no error channel: misuse there is undefined behaviour.
//! The slice layer validates its inputs up front and reports problems through
//! [`ClampError`] instead of panicking or faulting.

use std::fmt;

/// Errors that can occur when calling the checked clamp functions.
#[derive(Debug, Clone, PartialEq)]
pub enum ClampError {
    /// Input and output buffers do not hold the same number of elements.
    LengthMismatch {
        /// Length of the input slice.
        input_len: usize,
        /// Length of the output slice.
        output_len: usize,
    },
    /// A bound is NaN or `min > max`.
    InvalidBounds {
        /// Lower bound that was supplied.
        min: f32,
        /// Upper bound that was supplied.
        max: f32,
    },
    /// A buffer does not meet the alignment an aligned kernel requires.
    Misaligned {
        /// Base address of the offending buffer.
        address: usize,
        /// Required alignment in bytes.
        alignment: usize,
    },
}

impl fmt::Display for ClampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClampError::LengthMismatch {
                input_len,
                output_len,
            } => write!(
                f,
                "Length mismatch: input has {} elements, output has {}",
                input_len, output_len
            ),
            ClampError::InvalidBounds { min, max } => {
                write!(f, "Invalid bounds: min={}, max={} (need min <= max, no NaN)", min, max)
            }
            ClampError::Misaligned { address, alignment } => write!(
                f,
                "Misaligned buffer: address {:#x} is not a multiple of {} bytes",
                address, alignment
            ),
        }
    }
}

impl std::error::Error for ClampError {}

/// Result type alias for clamp operations.
pub type Result<T> = std::result::Result<T, ClampError>;

/// Creates a length mismatch error.
pub fn length_mismatch(input_len: usize, output_len: usize) -> ClampError {
    ClampError::LengthMismatch {
        input_len,
        output_len,
    }
}

/// Creates an invalid bounds error.
pub fn invalid_bounds(min: f32, max: f32) -> ClampError {
    ClampError::InvalidBounds { min, max }
}

/// Creates a misalignment error for `ptr`.
pub fn misaligned(ptr: *const f32, alignment: usize) -> ClampError {
    ClampError::Misaligned {
        address: ptr as usize,
        alignment,
    }
}
