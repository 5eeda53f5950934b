//! This module contains a macro and related types which allows for enabling debug output
//! for particular subsystems at compile time.
//!
//! If a subsystem's debugging is disabled, debug print invocations cause no performance penalty.
//!
//! With the `gba` feature, messages end up in mGBA's debug log.
//! Under `cargo test` they're printed to stderr, otherwise they're dropped.
//!
//! Please disable all subsystems you're not currently working on before publishing a release binary!

use core::fmt;

/// List of subsystems logging can be enabled for.
#[derive(Debug, PartialEq)]
pub enum Subsystems {
    Main,
    Game,
    HWSprite,
    Trig,
    Display,
    Config,
}

impl Subsystems {
    pub fn to_str(&self) -> &str {
        use Subsystems::*;
        match self {
            Main => "MAIN",
            Game => "GAME",
            HWSprite => "HW SPRITE",
            Trig => "TRIG",
            Display => "DISPLAY",
            Config => "CONFIG",
        }
    }

    /// Whether messages for this subsystem are emitted.
    pub fn enabled(&self) -> bool {
        return ENABLED_SUBSYSTEMS.contains(self);
    }
}

/// List of subsystems to enable logging for
pub const ENABLED_SUBSYSTEMS: [Subsystems; 3] =
    [Subsystems::Main, Subsystems::Game, Subsystems::Config];

/// Writes a single message. Use `debug_log!` instead of calling this directly.
#[doc(hidden)]
pub fn emit(subsystem: &Subsystems, args: fmt::Arguments) {
    #[cfg(feature = "gba")]
    {
        use core::fmt::Write;
        use gba::mgba::{MgbaBufferedLogger, MgbaMessageLevel};
        if let Ok(mut logger) = MgbaBufferedLogger::try_new(MgbaMessageLevel::Debug) {
            let _ = write!(logger, "[{}] {}", subsystem.to_str(), args);
        }
    }

    #[cfg(all(test, not(feature = "gba")))]
    {
        std::eprintln!("[{}] {}", subsystem.to_str(), args);
    }

    #[cfg(not(any(test, feature = "gba")))]
    {
        let _ = (subsystem, args);
    }
}

#[macro_export]
macro_rules! debug_log {
  ($subsystem:expr, $($arg:tt)*) => {{
    let subsystem = $subsystem;
    if subsystem.enabled() {
        $crate::debug_log::emit(&subsystem, format_args!($($arg)*));
    }
  }};
}
