#![no_std]
#![no_main]

use core::fmt::Write;

use ansi_rgb::{red, Foreground};
use gba::mgba::{MgbaBufferedLogger, MgbaMessageLevel};

use sprite_wave::debug_log::Subsystems::Main;
use sprite_wave::ewram_alloc::{self, RaceyHeap};
use sprite_wave::gba_display::GbaDisplay;
use sprite_wave::{debug_log, Game, SceneConfig};

/// Scene description baked into the ROM
const SCENE: &str = include_str!("../assets/scene.json");

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // This shows the message in mGBA's log window.
    if let Ok(mut logger) = MgbaBufferedLogger::try_new(MgbaMessageLevel::Fatal) {
        let _ = write!(logger, "{}", info.fg(red()));
    }
    // If we're _not_ running within mGBA then we still need to not return, so
    // loop forever doing nothing.
    loop {}
}

#[no_mangle]
extern "C" fn main() -> ! {
    // Initialize the allocator
    unsafe {
        ALLOCATOR.init(ewram_alloc::EWRAM_BASE, ewram_alloc::EWRAM_SIZE);
    }

    debug_log!(Main, "Starting sprite wave");

    let config = match SceneConfig::from_json(SCENE) {
        Ok(config) => config,
        Err(err) => panic!("{}", err),
    };
    let mut display = unsafe { GbaDisplay::new() };
    let mut game = match Game::init(&mut display, config) {
        Ok(game) => game,
        Err(err) => panic!("{}", err),
    };
    game.run(&mut display);
}

// Heap allocator config
#[global_allocator]
static ALLOCATOR: RaceyHeap = RaceyHeap::empty();
