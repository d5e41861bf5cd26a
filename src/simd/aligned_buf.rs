//! 64-byte aligned `f32` buffers for the unit and integration tests.
//!
//! Uses no crate paths so `tests/common` can include the same file.

#[derive(Copy, Clone)]
#[repr(C, align(64))]
struct Line([f32; 16]);

/// Heap buffer whose first element sits on a 64-byte boundary.
///
/// `offset` shifts the visible window by whole floats so tests can hand an
/// unaligned-but-valid pointer to the `u` kernels.
pub(crate) struct AlignedBuf {
    lines: Vec<Line>,
    offset: usize,
    len: usize,
}

impl AlignedBuf {
    pub(crate) fn from_slice(data: &[f32], offset: usize) -> Self {
        let total = data.len() + offset;
        let nb_lines = total.div_ceil(16).max(1);
        let mut buf = Self {
            lines: vec![Line([0.0; 16]); nb_lines],
            offset,
            len: data.len(),
        };
        buf.as_mut_slice().copy_from_slice(data);
        buf
    }

    pub(crate) fn filled(len: usize, value: f32, offset: usize) -> Self {
        Self::from_slice(&vec![value; len], offset)
    }

    pub(crate) fn as_ptr(&self) -> *const f32 {
        unsafe { (self.lines.as_ptr() as *const f32).add(self.offset) }
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut f32 {
        unsafe { (self.lines.as_mut_ptr() as *mut f32).add(self.offset) }
    }

    pub(crate) fn as_slice(&self) -> &[f32] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        let len = self.len;
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }
}
