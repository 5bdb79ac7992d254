#![forbid(unsafe_code)]

//! Play a dotfx effect on stdout.
//!
//! Configured through `DOTFX_*` environment variables; logs go to stderr and
//! are filtered by `DOTFX_LOG` (default `warn`).
//!
//! ```text
//! DOTFX_EFFECT=fire DOTFX_WIDTH=60 DOTFX_HEIGHT=30 cargo run -p dotfx-effects --features demo
//! ```

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use dotfx_effects::{EffectConfig, FrameDriver};
use tracing_subscriber::EnvFilter;

/// Reset attributes and show the cursor again.
const RESTORE_TERMINAL: &[u8] = b"\x1b[0m\x1b[?25h\n";

fn init_logging() {
    let filter = EnvFilter::try_from_env("DOTFX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn play(config: &EffectConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut driver = FrameDriver::from_config(config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let delay = Duration::from_millis(config.delay_ms);

    let result = (|| -> Result<(), Box<dyn std::error::Error>> {
        while config.frames == 0 || driver.frame_count() < config.frames {
            driver.step()?;
            driver.write_frame(&mut out)?;
            out.flush()?;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(())
    })();

    out.write_all(RESTORE_TERMINAL)?;
    out.flush()?;
    result
}

fn main() -> ExitCode {
    init_logging();

    let parsed = EffectConfig::from_env_with_diagnostics();
    for err in &parsed.errors {
        tracing::warn!(field = err.field, value = %err.value, "ignoring config value: {}", err.message);
    }
    let config = parsed.config;
    if let Err(errors) = config.validate() {
        for err in &errors {
            tracing::error!("invalid config: {err}");
            eprintln!("dotfx-play: {err}");
        }
        return ExitCode::FAILURE;
    }

    tracing::info!(config = %config.summary_short(), "starting playback");
    match play(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("playback failed: {err}");
            eprintln!("dotfx-play: {err}");
            ExitCode::FAILURE
        }
    }
}
