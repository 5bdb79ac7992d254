#![forbid(unsafe_code)]

//! Frame kernel: colors, the dot PRNG, packed decimal digits, and in-place
//! patching of pre-formatted truecolor rows.

pub mod arena;
pub mod color;
pub mod digits;
pub mod error;
pub mod rng;
pub mod row;
pub mod template;

pub use color::PackedRgba;
pub use error::{DotfxError, LayoutError};
pub use rng::DotRng;
pub use row::{RowLayout, RowView};
