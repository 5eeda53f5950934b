//! A grid of hardware sprites riding a sine wave across a GBA-style display.
//!
//! The interesting parts are the OAM slot allocator in `sprite`, the
//! fixed-point sine table in `trig` and the per-frame update in `game`.
//! Hardware access is hidden behind `display::DisplayBackend`; with the `gba`
//! feature enabled, `gba_display` provides the real thing.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub mod debug_log;

pub mod config;
pub mod display;
pub mod error;
#[cfg(feature = "gba")]
pub mod ewram_alloc;
pub mod game;
#[cfg(feature = "gba")]
pub mod gba_display;
pub mod shared_constants;
pub mod sprite;
pub mod tiles;
pub mod trig;

pub use config::{ConfigError, SceneConfig};
pub use error::WaveError;
pub use game::Game;
