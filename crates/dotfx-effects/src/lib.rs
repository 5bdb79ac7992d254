#![forbid(unsafe_code)]

//! Frame effects that patch pre-formatted truecolor rows in place.
//!
//! # Example
//!
//! ```
//! use dotfx_core::template::RowTemplate;
//! use dotfx_effects::{EffectKind, FrameEffect};
//!
//! let mut fx = EffectKind::RandomDots.build();
//! fx.init(42, 4, 2).unwrap();
//! fx.update_frame().unwrap();
//!
//! let template = RowTemplate::new(4);
//! let mut row = template.build();
//! fx.draw_line(&mut row, template.offset(), 0).unwrap();
//! assert_eq!(row.len(), template.len());
//! ```

pub mod config;
pub mod dots;
pub mod driver;
pub mod effect;
pub mod fire;
pub mod palette;

pub use config::{ConfigError, ConfigParse, EffectConfig};
pub use dots::RandomDotsFx;
pub use driver::FrameDriver;
pub use effect::{EffectKind, FrameEffect};
pub use fire::FireFx;
pub use palette::{FIRE_PALETTE, fire_color};
