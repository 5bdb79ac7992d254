//! Error types shared by the engine crates.

use std::fmt;

/// Why a [`RowLayout`](crate::row::RowLayout) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A digit field starting at `field` does not fit in a dot of `stride` bytes.
    FieldOutsideStride { field: usize, stride: usize },
    /// Two digit fields share at least one byte.
    OverlappingFields { first: usize, second: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldOutsideStride { field, stride } => {
                write!(f, "digit field at {field} does not fit in stride {stride}")
            }
            Self::OverlappingFields { first, second } => {
                write!(f, "digit fields at {first} and {second} overlap")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Precondition failures reported by effects and row views.
///
/// The engine trusts its host for everything except buffer bounds and call
/// ordering; those are checked once per call and reported here instead of
/// writing out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotfxError {
    /// `update_frame` or `draw_line` was called before `init`.
    NotInitialized,
    /// The requested dimensions need more arena bytes than are available.
    ArenaOverflow { required: usize, capacity: usize },
    /// `draw_line` was asked for a row the effect does not have.
    LineOutOfRange { line: u16, height: u16 },
    /// The row buffer is shorter than `offset + width * stride`.
    RowTooShort { required: usize, len: usize },
    /// The row layout is inconsistent.
    Layout(LayoutError),
}

impl fmt::Display for DotfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => f.write_str("effect used before init"),
            Self::ArenaOverflow { required, capacity } => write!(
                f,
                "frame buffers need {required} bytes, arena holds {capacity}"
            ),
            Self::LineOutOfRange { line, height } => {
                write!(f, "line {line} out of range for height {height}")
            }
            Self::RowTooShort { required, len } => {
                write!(f, "row buffer has {len} bytes, needs {required}")
            }
            Self::Layout(e) => write!(f, "invalid row layout: {e}"),
        }
    }
}

impl std::error::Error for DotfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for DotfxError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}
