//! Reusable scratch memory for multi-pass stencils.
//!
//! A two-pass stencil needs an intermediate Laplacian buffer the size of
//! its output rectangle. [`ScratchRegion`] keeps that buffer alive across
//! sub-steps so the steady-state step loop does not allocate.

/// Bump-allocated scratch region, reset before every stencil call.
///
/// All scratch data is `f32`, allocated as contiguous slices. The backing
/// storage grows on demand and never shrinks.
#[derive(Debug, Default)]
pub struct ScratchRegion {
    buf: Vec<f32>,
    offset: usize,
}

impl ScratchRegion {
    /// Create a scratch region with the given capacity **in f32 slots**.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0.0; capacity],
            offset: 0,
        }
    }

    /// Allocate `count` contiguous f32 slots, zero-initialized.
    ///
    /// Grows the backing storage if needed.
    pub fn alloc(&mut self, count: usize) -> &mut [f32] {
        let start = self.offset;
        let end = start + count;
        if end > self.buf.len() {
            self.buf.resize(end, 0.0);
        }
        self.offset = end;
        let slice = &mut self.buf[start..end];
        slice.fill(0.0);
        slice
    }

    /// Reset the bump pointer.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Total capacity in f32 slots.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Slots used since last reset.
    pub fn used(&self) -> usize {
        self.offset
    }
}
