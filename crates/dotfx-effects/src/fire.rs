//! Demoscene fire.
//!
//! A heat field where every interior cell becomes the average of its eight
//! neighbours from the previous frame, the whole field scrolls up one row per
//! frame, and the result is mapped through [`FIRE_PALETTE`].
//!
//! # Heat source
//!
//! Nothing is seeded from the PRNG. A cell whose neighbour sum has its two low
//! bits clear loses one unit of heat; in the bottom rows that decrement is
//! applied even at zero and wraps to 255. Those wrapped cells are the sparks
//! that feed the flame, so the pattern is fully determined by the frame size.
//!
//! # Layout
//!
//! The field is two rows taller than the visible frame. Row 0 is never
//! written and the bottom row is never written, so both stay cold; visible
//! row `n` shows field row `n + 1`.
//!
//! # No Per-Frame Allocations
//!
//! All buffers come from one [`FrameArena`] sized at `init`.

use dotfx_core::arena::{FrameArena, FrameParts};
use dotfx_core::{DotfxError, PackedRgba, RowLayout, RowView};

use crate::effect::FrameEffect;
use crate::palette::FIRE_PALETTE;

/// Extra field rows above and below the visible frame.
pub const MARGIN_ROWS: usize = 2;

/// Bottom field rows where cooling may wrap zero to 255.
pub const SPARK_ROWS: usize = 4;

/// Bottom field rows whose dark cells are re-ignited after each frame.
pub const REIGNITE_ROWS: usize = 7;

/// Cells below this heat are re-ignited.
pub const REIGNITE_BELOW: u8 = 15;

/// Re-ignited cells become `REIGNITE_BASE - heat`.
pub const REIGNITE_BASE: u8 = 22;

/// Cells needed for a `width` x `height` visible frame.
#[inline]
pub const fn field_cells(width: u16, height: u16) -> usize {
    (width as usize).saturating_mul(height as usize + MARGIN_ROWS)
}

#[derive(Debug, Clone)]
struct FireState {
    width: u16,
    height: u16,
    arena: FrameArena,
    frame: u64,
}

impl FireState {
    #[inline]
    fn field_height(&self) -> usize {
        self.height as usize + MARGIN_ROWS
    }

    fn step(&mut self) {
        let w = self.width as usize;
        let h = self.field_height();
        let FrameParts {
            current,
            previous,
            rgba,
        } = self.arena.parts_mut();

        diffuse(current, previous, w, h);

        // Commit and scroll up one row; the bottom row is always cold.
        let visible = (h - MARGIN_ROWS) * w;
        previous[..visible].copy_from_slice(&current[w..w + visible]);

        // Keep the base of the flame lit. Row 0 is never shown, so it is
        // left alone even for very short frames.
        let start = h.saturating_sub(REIGNITE_ROWS).max(1) * w;
        let end = (h - 1) * w;
        for heat in &mut current[start.min(end)..end] {
            if *heat < REIGNITE_BELOW {
                *heat = REIGNITE_BASE - *heat;
            }
        }

        for (out, &heat) in rgba[..visible].iter_mut().zip(&current[w..w + visible]) {
            *out = FIRE_PALETTE[heat as usize];
        }

        self.frame += 1;
    }
}

/// Average the eight neighbours of every interior cell of `previous` into
/// `current`, cooling (and in the spark rows, wrapping) as it goes.
fn diffuse(current: &mut [u8], previous: &[u8], w: usize, h: usize) {
    if w < 3 || h < 3 {
        return;
    }
    let spark_start = h.saturating_sub(SPARK_ROWS);

    for y in 1..h - 1 {
        let above = &previous[(y - 1) * w..y * w];
        let row = &previous[y * w..(y + 1) * w];
        let below = &previous[(y + 1) * w..(y + 2) * w];
        let out = &mut current[y * w..(y + 1) * w];

        for x in 1..w - 1 {
            let sum = u16::from(above[x - 1])
                + u16::from(above[x])
                + u16::from(above[x + 1])
                + u16::from(row[x - 1])
                + u16::from(row[x + 1])
                + u16::from(below[x - 1])
                + u16::from(below[x])
                + u16::from(below[x + 1]);
            let mut heat = (sum / 8) as u8;

            if sum & 3 == 0 && (heat > 0 || y >= spark_start) {
                heat = heat.wrapping_sub(1);
            }
            out[x] = heat;
        }
    }
}

/// Cellular-automaton fire effect.
#[derive(Debug, Clone, Default)]
pub struct FireFx {
    layout: RowLayout,
    state: Option<FireState>,
}

impl FireFx {
    /// Create an uninitialized fire effect using the truecolor row layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom row layout for `draw_line`.
    #[must_use]
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Frames simulated since the last `init`.
    pub fn frame_count(&self) -> u64 {
        self.state.as_ref().map_or(0, |s| s.frame)
    }

    /// Most recently computed heat field, `width * (height + 2)` cells.
    pub fn heat(&self) -> Option<&[u8]> {
        self.state.as_ref().map(|s| s.arena.current())
    }

    /// Heat field the next frame diffuses from.
    pub fn previous_heat(&self) -> Option<&[u8]> {
        self.state.as_ref().map(|s| s.arena.previous())
    }

    /// Visible colors, `width * height` cells, row-major.
    pub fn colors(&self) -> Option<&[PackedRgba]> {
        self.state.as_ref().map(|s| {
            let len = s.width as usize * s.height as usize;
            &s.arena.rgba()[..len]
        })
    }
}

impl FrameEffect for FireFx {
    fn name(&self) -> &'static str {
        "Fire"
    }

    fn init(&mut self, _seed: u64, width: u16, height: u16) -> Result<(), DotfxError> {
        self.state = None;
        let arena = FrameArena::allocate(field_cells(width, height))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(effect = "Fire", width, height, "effect initialized");

        self.state = Some(FireState {
            width,
            height,
            arena,
            frame: 0,
        });
        Ok(())
    }

    fn update_frame(&mut self) -> Result<(), DotfxError> {
        let state = self.state.as_mut().ok_or(DotfxError::NotInitialized)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "fx_update",
            effect = "Fire",
            frame = state.frame,
            w = state.width,
            h = state.height
        )
        .entered();

        state.step();
        Ok(())
    }

    fn draw_line(&mut self, row: &mut [u8], offset: usize, line: u16) -> Result<(), DotfxError> {
        let state = self.state.as_ref().ok_or(DotfxError::NotInitialized)?;
        if line >= state.height {
            #[cfg(feature = "tracing")]
            tracing::warn!(effect = "Fire", line, height = state.height, "line out of range");
            return Err(DotfxError::LineOutOfRange {
                line,
                height: state.height,
            });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("fx_draw_line", effect = "Fire", line).entered();

        let w = state.width as usize;
        let start = line as usize * w;
        let mut view = RowView::new(row, offset, state.width, self.layout)?;
        view.write_all(state.arena.rgba()[start..start + w].iter().copied());
        Ok(())
    }

    fn dimensions(&self) -> Option<(u16, u16)> {
        self.state.as_ref().map(|s| (s.width, s.height))
    }
}


#[cfg(test)]
mod fire_proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn same_size_same_frames(width in 0u16..40, height in 0u16..30, frames in 1usize..40) {
            let mut a = FireFx::new();
            let mut b = FireFx::new();
            a.init(0, width, height).unwrap();
            b.init(0, width, height).unwrap();
            for _ in 0..frames {
                a.update_frame().unwrap();
                b.update_frame().unwrap();
            }
            prop_assert_eq!(a.heat(), b.heat());
            prop_assert_eq!(a.colors(), b.colors());
        }

        #[test]
        fn top_row_and_bottom_row_stay_cold(width in 3u16..32, height in 1u16..24, frames in 1usize..60) {
            let mut fx = FireFx::new();
            fx.init(0, width, height).unwrap();
            for _ in 0..frames {
                fx.update_frame().unwrap();
            }
            let w = width as usize;
            let heat = fx.heat().unwrap();
            let last = heat.len() - w;
            prop_assert!(heat[..w].iter().all(|&v| v == 0));
            prop_assert!(heat[last..].iter().all(|&v| v == 0));
        }
    }
}
