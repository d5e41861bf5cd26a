pub mod generic;

pub(crate) mod kernel;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod sse;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub mod slice;

pub mod traits;

#[cfg(test)]
pub(crate) mod aligned_buf;

#[cfg(test)]
pub(crate) mod test_utils;
