//! Environment-driven effect configuration.
//!
//! Every field has a default, so an empty environment yields a usable config.
//! Unparseable values are skipped and reported in [`ConfigParse::errors`]
//! rather than aborting, matching how the rest of the settings surface works.

use std::env;
use std::fmt;

use dotfx_core::arena::{ARENA_CAPACITY, FrameArena};

use crate::effect::EffectKind;
use crate::fire::field_cells;

/// Effect name: `fire` or `dots`.
pub const ENV_EFFECT: &str = "DOTFX_EFFECT";
/// PRNG seed, decimal or `0x`-prefixed hex.
pub const ENV_SEED: &str = "DOTFX_SEED";
/// Frame width in dots.
pub const ENV_WIDTH: &str = "DOTFX_WIDTH";
/// Frame height in dots.
pub const ENV_HEIGHT: &str = "DOTFX_HEIGHT";
/// Clear only the first line instead of the whole screen each frame.
pub const ENV_CLEAR_LINE: &str = "DOTFX_CLEAR_LINE";
/// Number of frames to play; 0 plays forever.
pub const ENV_FRAMES: &str = "DOTFX_FRAMES";
/// Delay between frames in milliseconds.
pub const ENV_DELAY_MS: &str = "DOTFX_DELAY_MS";

/// Settings for one playback session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectConfig {
    pub effect: EffectKind,
    pub seed: u64,
    pub width: u16,
    pub height: u16,
    /// Clear just the first row instead of the whole display. Cheaper, but
    /// can leave artifacts when the terminal is larger than the frame.
    pub clear_line: bool,
    /// Frames to play; 0 = unbounded.
    pub frames: u64,
    pub delay_ms: u64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            effect: EffectKind::Fire,
            seed: 0,
            width: 40,
            height: 20,
            clear_line: false,
            frames: 0,
            delay_ms: 100,
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: EffectConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl EffectConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> EffectConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.width == 0 {
            errors.push(ConfigError::new("width", "0", "must be positive"));
        }
        if self.height == 0 {
            errors.push(ConfigError::new("height", "0", "must be positive"));
        }
        if self.effect.uses_arena() {
            let required = FrameArena::required_bytes(field_cells(self.width, self.height));
            if required > ARENA_CAPACITY {
                errors.push(ConfigError::new(
                    "width x height",
                    format!("{}x{}", self.width, self.height),
                    format!("needs {required} bytes, arena holds {ARENA_CAPACITY}"),
                ));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Short human-readable summary for logs.
    #[must_use]
    pub fn summary_short(&self) -> String {
        format!(
            "{} · {}x{} · seed {:#x} · {} ms",
            self.effect, self.width, self.height, self.seed, self.delay_ms
        )
    }
}

/// Parse config through `get`, so tests can supply a fake environment.
pub fn from_env_with<F>(mut get: F) -> ConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = EffectConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_EFFECT) {
        match EffectKind::parse(&value) {
            Some(parsed) => config.effect = parsed,
            None => errors.push(ConfigError::new("effect", value, "expected fire|dots")),
        }
    }

    if let Some(value) = get(ENV_SEED) {
        match parse_u64(&value) {
            Some(parsed) => config.seed = parsed,
            None => errors.push(ConfigError::new(
                "seed",
                value,
                "expected u64 (decimal or 0x hex)",
            )),
        }
    }

    if let Some(value) = get(ENV_WIDTH) {
        match parse_u16(&value) {
            Some(parsed) => config.width = parsed,
            None => errors.push(ConfigError::new("width", value, "expected 0..=65535")),
        }
    }

    if let Some(value) = get(ENV_HEIGHT) {
        match parse_u16(&value) {
            Some(parsed) => config.height = parsed,
            None => errors.push(ConfigError::new("height", value, "expected 0..=65535")),
        }
    }

    if let Some(value) = get(ENV_CLEAR_LINE) {
        match parse_bool(&value) {
            Some(parsed) => config.clear_line = parsed,
            None => errors.push(ConfigError::new(
                "clear_line",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_FRAMES) {
        match parse_u64(&value) {
            Some(parsed) => config.frames = parsed,
            None => errors.push(ConfigError::new(
                "frames",
                value,
                "expected non-negative integer",
            )),
        }
    }

    if let Some(value) = get(ENV_DELAY_MS) {
        match parse_u64(&value) {
            Some(parsed) => config.delay_ms = parsed,
            None => errors.push(ConfigError::new(
                "delay_ms",
                value,
                "expected non-negative integer",
            )),
        }
    }

    ConfigParse { config, errors }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[inline]
fn parse_u16(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok()
}

fn parse_u64(value: &str) -> Option<u64> {
    let value = value.trim();
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => value.parse::<u64>().ok(),
    }
}
