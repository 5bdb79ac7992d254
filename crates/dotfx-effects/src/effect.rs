//! The pluggable effect contract.
//!
//! A host drives every effect the same way:
//!
//! 1. [`FrameEffect::init`] once with a seed and the frame size,
//! 2. [`FrameEffect::update_frame`] once per frame,
//! 3. [`FrameEffect::draw_line`] for each row, patching a pre-filled row
//!    template in place.
//!
//! Calling `init` again starts over: the effect's state afterwards depends on
//! the new arguments only.

use std::fmt;

use dotfx_core::DotfxError;

use crate::dots::RandomDotsFx;
use crate::fire::FireFx;

/// A frame generator that patches truecolor rows in place.
pub trait FrameEffect {
    /// Human-readable name (used for logging / diagnostics).
    fn name(&self) -> &'static str;

    /// Reset all state for a `width` x `height` frame seeded with `seed`.
    fn init(&mut self, seed: u64, width: u16, height: u16) -> Result<(), DotfxError>;

    /// Advance by exactly one frame. Stateless effects do nothing.
    fn update_frame(&mut self) -> Result<(), DotfxError>;

    /// Write row `line` of the current frame into `row`, whose first dot
    /// starts at byte `offset`. Only digit fields are modified.
    fn draw_line(&mut self, row: &mut [u8], offset: usize, line: u16) -> Result<(), DotfxError>;

    /// `(width, height)` once initialized.
    fn dimensions(&self) -> Option<(u16, u16)>;
}

impl<E: FrameEffect + ?Sized> FrameEffect for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn init(&mut self, seed: u64, width: u16, height: u16) -> Result<(), DotfxError> {
        (**self).init(seed, width, height)
    }

    fn update_frame(&mut self) -> Result<(), DotfxError> {
        (**self).update_frame()
    }

    fn draw_line(&mut self, row: &mut [u8], offset: usize, line: u16) -> Result<(), DotfxError> {
        (**self).draw_line(row, offset, line)
    }

    fn dimensions(&self) -> Option<(u16, u16)> {
        (**self).dimensions()
    }
}

/// Runtime selector for the built-in effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectKind {
    /// Cellular-automaton fire.
    #[default]
    Fire,
    /// Independent random color per dot.
    RandomDots,
}

impl EffectKind {
    /// All built-in effects.
    pub const ALL: [Self; 2] = [Self::Fire, Self::RandomDots];

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fire" | "flame" => Some(Self::Fire),
            "dots" | "random-dots" | "random_dots" | "rnd_dots" => Some(Self::RandomDots),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::RandomDots => "dots",
        }
    }

    /// Whether the effect owns frame buffers that count against the arena.
    pub const fn uses_arena(self) -> bool {
        matches!(self, Self::Fire)
    }

    /// Construct an uninitialized effect.
    pub fn build(self) -> Box<dyn FrameEffect + Send> {
        match self {
            Self::Fire => Box::new(FireFx::new()),
            Self::RandomDots => Box::new(RandomDotsFx::new()),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
