//! Placeholder rows for the truecolor layout.
//!
//! Hosts that do not bring their own row formatting can build templates here.
//! A template is filled once; effects then patch its digit fields in place
//! every frame.

use crate::row::RowLayout;

/// Black truecolor dot: background SGR, two spaces, default background.
pub const PLACEHOLDER_DOT: &[u8] = b"\x1b[48:2::000:000:000m  \x1b[49m";

/// How a row positions the cursor before its dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinePrefix {
    /// Continue below the previous row: erase left, return to column 1.
    #[default]
    Continue,
    /// First row of a frame: home the cursor, then erase the line only
    /// (`clear_line`) or the whole display.
    Origin { clear_line: bool },
}

impl LinePrefix {
    /// Escape bytes written before the first dot.
    pub const fn prefix(self) -> &'static [u8] {
        match self {
            // ESC[1K erase to left, ESC[99D cursor back 99 columns.
            Self::Continue => b"\x1b[1K\x1b[99D",
            Self::Origin { clear_line: true } => b"\x1b[1;1H\x1b[2K",
            Self::Origin { clear_line: false } => b"\x1b[1;1H\x1b[2J",
        }
    }

    /// Escape bytes written after the last dot.
    pub const fn suffix(self) -> &'static [u8] {
        match self {
            // ESC[3K erase to right, ESC[8m conceal, ESC[?25l hide cursor.
            Self::Continue => b"\x1b[3K\x1b[8m\x1b[?25l",
            Self::Origin { .. } => b"\x1b[8m\x1b[?25l",
        }
    }
}

/// Builder for one truecolor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTemplate {
    width: u16,
    prefix: LinePrefix,
}

impl RowTemplate {
    /// Row of `width` placeholder dots after a [`LinePrefix::Continue`].
    pub const fn new(width: u16) -> Self {
        Self {
            width,
            prefix: LinePrefix::Continue,
        }
    }

    /// Replace the line prefix.
    #[must_use]
    pub const fn with_prefix(mut self, prefix: LinePrefix) -> Self {
        self.prefix = prefix;
        self
    }

    /// Layout of the dots produced by [`build`](Self::build).
    pub const fn layout(&self) -> RowLayout {
        RowLayout::TRUECOLOR
    }

    /// Byte offset of the first dot; pass this as `offset` to `draw_line`.
    pub const fn offset(&self) -> usize {
        self.prefix.prefix().len()
    }

    /// Total length of the built row.
    pub const fn len(&self) -> usize {
        self.offset() + self.layout().row_len(self.width) + self.prefix.suffix().len()
    }

    /// Whether the row has no dots.
    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Allocate and fill the row.
    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.prefix.prefix());
        for _ in 0..self.width {
            out.extend_from_slice(PLACEHOLDER_DOT);
        }
        out.extend_from_slice(self.prefix.suffix());
        out
    }
}
