//! Frame driver: owns an effect plus one pre-filled row per line.
//!
//! Row 0 homes the cursor (and clears the line or screen); every other row
//! continues below the previous one. [`FrameDriver::step`] advances the effect
//! and patches all rows; [`FrameDriver::write_frame`] emits them.

use std::io::{self, Write};

use dotfx_core::DotfxError;
use dotfx_core::template::{LinePrefix, RowTemplate};

use crate::config::EffectConfig;
use crate::effect::FrameEffect;

/// Template for `line` of a `width`-dot frame.
pub const fn row_template(line: u16, width: u16, clear_line: bool) -> RowTemplate {
    let prefix = if line == 0 {
        LinePrefix::Origin { clear_line }
    } else {
        LinePrefix::Continue
    };
    RowTemplate::new(width).with_prefix(prefix)
}

/// Drives one [`FrameEffect`] frame by frame.
#[derive(Debug)]
pub struct FrameDriver<E> {
    effect: E,
    templates: Vec<RowTemplate>,
    rows: Vec<Vec<u8>>,
    frames: u64,
}

impl<E: FrameEffect> FrameDriver<E> {
    /// Initialize `effect` and build the row templates.
    pub fn new(
        mut effect: E,
        seed: u64,
        width: u16,
        height: u16,
        clear_line: bool,
    ) -> Result<Self, DotfxError> {
        effect.init(seed, width, height)?;
        let templates: Vec<RowTemplate> = (0..height)
            .map(|line| row_template(line, width, clear_line))
            .collect();
        let rows = templates.iter().map(RowTemplate::build).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(effect = effect.name(), width, height, clear_line, "driver ready");

        Ok(Self {
            effect,
            templates,
            rows,
            frames: 0,
        })
    }

    /// Advance one frame and redraw every row.
    pub fn step(&mut self) -> Result<(), DotfxError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "frame",
            effect = self.effect.name(),
            frame = self.frames,
            rows = self.rows.len()
        )
        .entered();

        self.effect.update_frame()?;
        for ((line, template), row) in (0..=u16::MAX).zip(&self.templates).zip(&mut self.rows) {
            self.effect.draw_line(row, template.offset(), line)?;
        }
        self.frames += 1;
        Ok(())
    }

    /// Write every row followed by a newline.
    pub fn write_frame<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            out.write_all(row)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Current row bytes, top to bottom.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Frames stepped so far.
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }
}

impl FrameDriver<Box<dyn FrameEffect + Send>> {
    /// Build the configured effect and initialize it.
    pub fn from_config(config: &EffectConfig) -> Result<Self, DotfxError> {
        Self::new(
            config.effect.build(),
            config.seed,
            config.width,
            config.height,
            config.clear_line,
        )
    }
}
