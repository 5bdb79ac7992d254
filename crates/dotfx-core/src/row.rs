//! Fixed-layout views over pre-formatted terminal rows.
//!
//! A row is `offset` bytes of line prefix followed by `width` dots. Every dot
//! is `stride` bytes long and carries three decimal fields (red, green, blue)
//! at fixed positions. The renderer only ever overwrites those nine digit
//! bytes per dot; escape sequences, separators and padding are left alone and
//! the buffer never changes length.
//!
//! ```text
//! ESC [ 4 8 : 2 : : R R R : G G G : B B B m ␠ ␠ ESC [ 4 9 m
//! 0           5     8       12      16      20  22        26
//! ```

use crate::color::PackedRgba;
use crate::digits::{FIELD_WIDTH, decimal_field};
use crate::error::{DotfxError, LayoutError};

/// Byte layout of one dot inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowLayout {
    stride: usize,
    fields: [usize; 3],
}

impl RowLayout {
    /// 24-bit background dot: `ESC[48:2::RRR:GGG:BBBm` + two spaces + `ESC[49m`.
    pub const TRUECOLOR: Self = Self {
        stride: 27,
        fields: [8, 12, 16],
    };

    /// Validate and build a layout. `fields` are the red, green and blue
    /// digit-field offsets within one dot.
    pub fn new(stride: usize, fields: [usize; 3]) -> Result<Self, LayoutError> {
        for &field in &fields {
            if field.saturating_add(FIELD_WIDTH) > stride {
                return Err(LayoutError::FieldOutsideStride { field, stride });
            }
        }

        let mut sorted = fields;
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] + FIELD_WIDTH > pair[1] {
                return Err(LayoutError::OverlappingFields {
                    first: pair[0],
                    second: pair[1],
                });
            }
        }

        Ok(Self { stride, fields })
    }

    /// Bytes per dot.
    #[inline]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Red, green and blue field offsets within a dot.
    #[inline]
    pub const fn fields(&self) -> [usize; 3] {
        self.fields
    }

    /// Bytes needed after the prefix for `width` dots.
    #[inline]
    pub const fn row_len(&self, width: u16) -> usize {
        self.stride.saturating_mul(width as usize)
    }

    /// Whether byte `pos` (relative to the first dot) is a digit position.
    pub fn is_digit_position(&self, pos: usize) -> bool {
        let within = pos % self.stride;
        self.fields
            .iter()
            .any(|&f| (f..f + FIELD_WIDTH).contains(&within))
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::TRUECOLOR
    }
}

/// Bounds-checked mutable view over the dots of one row.
///
/// Validation happens once in [`RowView::new`]; after that every column in
/// `0..width` is writable without further checks failing.
#[derive(Debug)]
pub struct RowView<'a> {
    dots: &'a mut [u8],
    width: u16,
    layout: RowLayout,
}

impl<'a> RowView<'a> {
    /// View `width` dots of `buf` starting at `offset`.
    pub fn new(
        buf: &'a mut [u8],
        offset: usize,
        width: u16,
        layout: RowLayout,
    ) -> Result<Self, DotfxError> {
        let required = offset.saturating_add(layout.row_len(width));
        if required > buf.len() {
            #[cfg(feature = "tracing")]
            tracing::warn!(required, len = buf.len(), "row buffer too short");
            return Err(DotfxError::RowTooShort {
                required,
                len: buf.len(),
            });
        }
        let dots = &mut buf[offset..required];
        Ok(Self {
            dots,
            width,
            layout,
        })
    }

    /// Number of dots in the view.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Patch the three color fields of dot `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= width`.
    #[inline]
    pub fn write_dot(&mut self, col: u16, color: PackedRgba) {
        assert!(col < self.width, "column {col} outside row of {}", self.width);
        let base = col as usize * self.layout.stride;
        for (field, channel) in self.layout.fields.iter().zip(color.channels()) {
            let at = base + field;
            self.dots[at..at + FIELD_WIDTH].copy_from_slice(&decimal_field(channel));
        }
    }

    /// Patch every dot from `colors`, one color per column.
    ///
    /// Extra colors are ignored; missing colors leave dots untouched.
    pub fn write_all<I>(&mut self, colors: I)
    where
        I: IntoIterator<Item = PackedRgba>,
    {
        for (col, color) in (0..self.width).zip(colors) {
            self.write_dot(col, color);
        }
    }
}
