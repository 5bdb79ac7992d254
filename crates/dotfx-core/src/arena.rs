//! Fixed-capacity frame storage.
//!
//! A simulated frame needs two byte grids (the frame being computed and the
//! one before it) plus one [`PackedRgba`] per cell for the mapped colors, all
//! sized once when the effect is initialized. The total is checked against a
//! fixed byte budget before anything is allocated, and nothing is resized
//! afterwards.

use crate::color::PackedRgba;
use crate::error::DotfxError;

/// Byte budget shared by the three frame buffers.
pub const ARENA_CAPACITY: usize = 0x1f_0000;

/// Bytes one cell costs across both heat grids and the color grid.
pub const BYTES_PER_CELL: usize = 2 * size_of::<u8>() + size_of::<PackedRgba>();

/// Mutable borrows of the three buffers at once.
#[derive(Debug)]
pub struct FrameParts<'a> {
    pub current: &'a mut [u8],
    pub previous: &'a mut [u8],
    pub rgba: &'a mut [PackedRgba],
}

/// Owner of the frame buffers for one initialized effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameArena {
    current: Vec<u8>,
    previous: Vec<u8>,
    rgba: Vec<PackedRgba>,
}

impl FrameArena {
    /// Bytes needed for `cells` cells.
    #[inline]
    pub const fn required_bytes(cells: usize) -> usize {
        cells.saturating_mul(BYTES_PER_CELL)
    }

    /// Allocate zeroed buffers for `cells` cells within [`ARENA_CAPACITY`].
    pub fn allocate(cells: usize) -> Result<Self, DotfxError> {
        Self::allocate_within(cells, ARENA_CAPACITY)
    }

    /// Allocate zeroed buffers for `cells` cells within `capacity` bytes.
    pub fn allocate_within(cells: usize, capacity: usize) -> Result<Self, DotfxError> {
        let required = Self::required_bytes(cells);
        if required > capacity {
            #[cfg(feature = "tracing")]
            tracing::warn!(cells, required, capacity, "frame arena overflow");
            return Err(DotfxError::ArenaOverflow { required, capacity });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(cells, required, "frame arena allocated");

        Ok(Self {
            current: vec![0; cells],
            previous: vec![0; cells],
            rgba: vec![PackedRgba::TRANSPARENT; cells],
        })
    }

    /// Number of cells per buffer.
    #[inline]
    pub fn cells(&self) -> usize {
        self.current.len()
    }

    /// The grid most recently computed.
    #[inline]
    pub fn current(&self) -> &[u8] {
        &self.current
    }

    /// The grid the next step reads from.
    #[inline]
    pub fn previous(&self) -> &[u8] {
        &self.previous
    }

    /// Mapped colors.
    #[inline]
    pub fn rgba(&self) -> &[PackedRgba] {
        &self.rgba
    }

    /// Split into disjoint mutable borrows.
    #[inline]
    pub fn parts_mut(&mut self) -> FrameParts<'_> {
        FrameParts {
            current: &mut self.current,
            previous: &mut self.previous,
            rgba: &mut self.rgba,
        }
    }
}
