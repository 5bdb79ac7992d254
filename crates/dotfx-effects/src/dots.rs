//! Random dots: one fresh PRNG draw per dot, no frame history.

use dotfx_core::{DotRng, DotfxError, PackedRgba, RowLayout, RowView};

use crate::effect::FrameEffect;

/// Bit offsets of the red, green and blue bytes taken from one draw.
///
/// The ranges are disjoint so the three channels are independent.
pub const CHANNEL_SHIFTS: [u32; 3] = [0, 12, 24];

/// Color for one 64-bit PRNG draw.
#[inline]
pub const fn dot_color(draw: u64) -> PackedRgba {
    let [r, g, b] = CHANNEL_SHIFTS;
    PackedRgba::rgb(
        ((draw >> r) % 256) as u8,
        ((draw >> g) % 256) as u8,
        ((draw >> b) % 256) as u8,
    )
}

#[derive(Debug, Clone)]
struct DotsState {
    width: u16,
    height: u16,
    rng: DotRng,
}

/// Random-dot effect.
///
/// `update_frame` does nothing; every `draw_line` consumes `width` draws from
/// the generator, so output depends only on the seed and how many dots have
/// been drawn since `init`.
#[derive(Debug, Clone, Default)]
pub struct RandomDotsFx {
    layout: RowLayout,
    state: Option<DotsState>,
}

impl RandomDotsFx {
    /// Create an uninitialized effect using the truecolor row layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom row layout for `draw_line`.
    #[must_use]
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl FrameEffect for RandomDotsFx {
    fn name(&self) -> &'static str {
        "Random Dots"
    }

    fn init(&mut self, seed: u64, width: u16, height: u16) -> Result<(), DotfxError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(effect = "Random Dots", seed, width, height, "effect initialized");

        self.state = Some(DotsState {
            width,
            height,
            rng: DotRng::from_seed(seed),
        });
        Ok(())
    }

    fn update_frame(&mut self) -> Result<(), DotfxError> {
        if self.state.is_none() {
            return Err(DotfxError::NotInitialized);
        }
        Ok(())
    }

    fn draw_line(&mut self, row: &mut [u8], offset: usize, line: u16) -> Result<(), DotfxError> {
        let state = self.state.as_mut().ok_or(DotfxError::NotInitialized)?;
        if line >= state.height {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                effect = "Random Dots",
                line,
                height = state.height,
                "line out of range"
            );
            return Err(DotfxError::LineOutOfRange {
                line,
                height: state.height,
            });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("fx_draw_line", effect = "Random Dots", line).entered();

        let mut view = RowView::new(row, offset, state.width, self.layout)?;
        for col in 0..state.width {
            view.write_dot(col, dot_color(state.rng.next_u64()));
        }
        Ok(())
    }

    fn dimensions(&self) -> Option<(u16, u16)> {
        self.state.as_ref().map(|s| (s.width, s.height))
    }
}
