use arrayvec::ArrayVec;
use fixed::types::I16F16;

use crate::config::SceneConfig;
use crate::debug_log::Subsystems::Game as GameLog;
use crate::display::{Color, DisplayBackend, DisplayMode};
use crate::error::WaveError;
use crate::shared_constants::{NUM_SLOTS, SCREEN_WIDTH, SPRITE_WIDTH};
use crate::sprite::{HWSprite, HWSpriteAllocator, HWSpriteHandle};
use crate::tiles;
use crate::trig::SinTable;

/// A sprite of the wave, together with its place in the grid.
struct WaveSprite {
    handle: HWSpriteHandle,
    color: usize,
    lane: usize,
}

/// The running scene: a grid of sprites scrolling right while bobbing up and down.
pub struct Game {
    sprite_alloc: HWSpriteAllocator,
    sin: SinTable,
    sprites: ArrayVec<[WaveSprite; NUM_SLOTS]>,
    config: SceneConfig,
    amplitude: I16F16,
    /// Frame counter driving the wave. Allowed to overflow.
    angle: u32,
}

impl Game {
    /// Sets up the display and creates the scene described by `config`.
    ///
    /// The display is blanked while graphics are loaded and turned back on with
    /// sprites enabled at the end. Nothing is published to OAM until the first frame.
    pub fn init<D: DisplayBackend>(
        display: &mut D,
        config: SceneConfig,
    ) -> Result<Game, WaveError> {
        config.validate()?;
        display.set_display_mode(DisplayMode::OFF);

        let sin = SinTable::new();

        display.upload_obj_tiles(0, &tiles::gradient_tiles());
        for (i, color) in tiles::obj_palette().iter().enumerate() {
            display.write_obj_palette(i, *color);
        }
        display.write_backdrop(Color::BLACK);

        let mut sprite_alloc = HWSpriteAllocator::new();
        let mut sprites = ArrayVec::new();
        for lane in (0..config.lanes).rev() {
            for color in 0..config.colors {
                let handle = sprite_alloc.alloc()?;
                let sprite = sprite_alloc.sprite_mut(&handle);
                // The x field is 9 bits wide and wraps anyway
                let x = config
                    .lane_spacing
                    .wrapping_mul(lane as i16)
                    .wrapping_sub(config.color_stagger.wrapping_mul(color as i16));
                sprite.set_pos(x, config.start_y);
                sprite.set_tile_index(lane as u16);
                sprite.set_palette(color as u8);
                sprite.set_h_flip(color & 1 != 0);
                sprites.push(WaveSprite {
                    handle: handle,
                    color: color,
                    lane: lane,
                });
            }
        }
        debug_log!(GameLog, "Allocated {} sprites", sprites.len());

        display.set_display_mode(DisplayMode::OFF.with_objects().with_obj_1d_mapping());
        display.enable_vblank_interrupt();

        return Ok(Game {
            sprite_alloc: sprite_alloc,
            sin: sin,
            sprites: sprites,
            amplitude: I16F16::from_num(config.amplitude),
            config: config,
            angle: 0,
        });
    }

    /// Runs the scene forever.
    pub fn run<D: DisplayBackend>(&mut self, display: &mut D) -> ! {
        debug_log!(GameLog, "Entering frame loop");
        loop {
            self.frame(display);
        }
    }

    /// Computes the next frame and shows it.
    pub fn frame<D: DisplayBackend>(&mut self, display: &mut D) {
        self.step();
        self.present(display);
    }

    /// Advances the animation by one frame.
    ///
    /// Only the shadow OAM is modified, nothing becomes visible until `present()`.
    pub fn step(&mut self) {
        self.angle = self.angle.wrapping_add(1);
        for wave in self.sprites.iter() {
            let sprite = self.sprite_alloc.sprite_mut(&wave.handle);

            // Scroll right, re-entering just past the left edge
            let mut x = i32::from(sprite.x()) + 1;
            if x > i32::from(SCREEN_WIDTH) {
                x -= i32::from(SCREEN_WIDTH + SPRITE_WIDTH);
            }

            let color = wave.color as u32;
            let lane = wave.lane as u32;
            let phase = self
                .angle
                .wrapping_mul(color + 1)
                .wrapping_add(lane.wrapping_mul(self.config.lane_phase))
                .wrapping_add(color.wrapping_mul(self.config.color_phase));
            let sin = self.sin.sin(SinTable::normalize(phase));
            let y = wave_offset(sin, self.amplitude) + i32::from(self.config.center_y);

            sprite.set_pos(x as i16, y as i16);
        }
    }

    /// Waits for vblank, then copies the shadow OAM to the display.
    pub fn present<D: DisplayBackend>(&mut self, display: &mut D) {
        display.await_vblank();
        self.sprite_alloc.update_all(display);
    }

    /// Attributes of the sprite with the given color and lane, if the scene has one.
    pub fn sprite_at(&self, color: usize, lane: usize) -> Option<&HWSprite> {
        return self
            .sprites
            .iter()
            .find(|wave| wave.color == color && wave.lane == lane)
            .map(|wave| self.sprite_alloc.sprite(&wave.handle));
    }

    /// Number of frames computed so far, modulo 2^32.
    pub fn angle(&self) -> u32 {
        return self.angle;
    }

    pub fn sprite_count(&self) -> usize {
        return self.sprites.len();
    }

    pub fn sprite_alloc(&self) -> &HWSpriteAllocator {
        return &self.sprite_alloc;
    }
}

/// Scales a sine by the amplitude and truncates to whole pixels.
///
/// Both operands carry 16 fractional bits, so the 64 bit product has 32, which a
/// single shift removes.
fn wave_offset(sin: I16F16, amplitude: I16F16) -> i32 {
    let product = i64::from(sin.to_bits()) * i64::from(amplitude.to_bits());
    return (product >> 32) as i32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;
    use crate::shared_constants::SCREEN_HEIGHT;

    fn default_game() -> (Game, RecordingDisplay) {
        let mut display = RecordingDisplay::new();
        let game = Game::init(&mut display, SceneConfig::default()).unwrap();
        return (game, display);
    }

    #[test]
    fn init_sets_up_display() {
        let (_game, display) = default_game();
        assert_eq!(
            display.modes,
            vec![
                DisplayMode::OFF,
                DisplayMode::OFF.with_objects().with_obj_1d_mapping()
            ]
        );
        assert_eq!(display.obj_tiles.len(), 16);
        assert_eq!(display.obj_tiles[3], (3, tiles::gradient_tiles()[3]));
        assert_eq!(display.obj_palette.len(), 96);
        assert_eq!(display.palette_entry(47), Some(Color::from_rgb(0, 0, 0x1F)));
        assert_eq!(display.backdrop, Some(Color::BLACK));
        assert!(display.vblank_irq_enabled);
        // Nothing is shown before the first frame
        assert_eq!(display.publish_count, 0);
    }

    #[test]
    fn init_lays_out_grid() {
        let (game, _display) = default_game();
        assert_eq!(game.sprite_count(), 96);
        assert_eq!(game.sprite_alloc().num_free(), NUM_SLOTS - 96);
        for lane in 0..16 {
            for color in 0..6 {
                let sprite = game.sprite_at(color, lane).unwrap();
                assert_eq!(
                    sprite.position(),
                    ((16 * lane as i16) - (8 * color as i16), 80)
                );
                assert_eq!(sprite.tile_index(), lane as u16);
                assert_eq!(sprite.palette(), color as u8);
                assert_eq!(sprite.h_flip(), color % 2 == 1);
                assert!(!sprite.v_flip());
            }
        }
        assert!(game.sprite_at(6, 0).is_none());
        assert!(game.sprite_at(0, 16).is_none());
    }

    #[test]
    fn allocation_starts_with_last_lane() {
        let (game, _display) = default_game();
        let words = game.sprite_alloc().as_words();
        // Slot 0 went to lane 15 of color 0, slot 95 to lane 0 of color 5
        assert_eq!(&words[0..4], &game.sprite_at(0, 15).unwrap().words()[..]);
        assert_eq!(&words[95 * 4..96 * 4], &game.sprite_at(5, 0).unwrap().words()[..]);
        // Unused slots stay hidden
        assert_eq!(&words[96 * 4..97 * 4], &HWSprite::hidden().words()[..]);
    }

    #[test]
    fn first_step_follows_wave() {
        let (mut game, _display) = default_game();
        game.step();
        assert_eq!(game.angle(), 1);

        let sprite = game.sprite_at(0, 0).unwrap();
        assert_eq!(sprite.x(), 1);
        let expected = ((1f64).to_radians().sin() * 40.0).round() as i16 + 76;
        assert!((sprite.y() - expected).abs() <= 1);
        // The shift truncates 0.698 down
        assert_eq!(sprite.y(), 76);

        // Color 2, lane 3: phase 1 * 3 + 3 * 16 + 2 * 45 = 141
        let sprite = game.sprite_at(2, 3).unwrap();
        assert_eq!(sprite.x(), 48 - 16 + 1);
        let expected = ((141f64).to_radians().sin() * 40.0) as i16 + 76;
        assert!((sprite.y() - expected).abs() <= 1);
    }

    #[test]
    fn sprites_wrap_at_right_edge() {
        let (mut game, _display) = default_game();
        // Lane 15, color 0 starts exactly at the right edge
        assert_eq!(game.sprite_at(0, 15).unwrap().x(), SCREEN_WIDTH);
        game.step();
        assert_eq!(
            game.sprite_at(0, 15).unwrap().x(),
            SCREEN_WIDTH + 1 - (SCREEN_WIDTH + SPRITE_WIDTH)
        );
        // One full lap brings every sprite back to where it was
        let before = game.sprite_at(3, 7).unwrap().x();
        for _ in 0..(SCREEN_WIDTH + SPRITE_WIDTH) {
            game.step();
        }
        assert_eq!(game.sprite_at(3, 7).unwrap().x(), before);
    }

    #[test]
    fn wave_stays_within_amplitude() {
        let (mut game, _display) = default_game();
        for _ in 0..720 {
            game.step();
            for color in 0..6 {
                for lane in 0..16 {
                    let y = game.sprite_at(color, lane).unwrap().y();
                    assert!(y >= 76 - 40 && y <= 76 + 40, "y = {}", y);
                    assert!(y < SCREEN_HEIGHT);
                }
            }
        }
    }

    #[test]
    fn every_frame_waits_for_vblank_before_publishing() {
        let (mut game, mut display) = default_game();
        for frame in 1..=5 {
            game.frame(&mut display);
            assert_eq!(display.vblank_count, frame);
            assert_eq!(display.publish_count, frame);
        }
        let published = display.published.unwrap();
        assert_eq!(&published[..], game.sprite_alloc().as_words());
    }

    #[test]
    fn smaller_scene_from_config() {
        let mut display = RecordingDisplay::new();
        let config =
            SceneConfig::from_json(r#"{"colors": 2, "lanes": 3, "amplitude": 10}"#).unwrap();
        let mut game = Game::init(&mut display, config).unwrap();
        assert_eq!(game.sprite_count(), 6);
        game.frame(&mut display);
        for color in 0..2 {
            for lane in 0..3 {
                let y = game.sprite_at(color, lane).unwrap().y();
                assert!(y >= 66 && y <= 86);
            }
        }
    }

    #[test]
    fn invalid_config_is_rejected_before_touching_display() {
        let mut display = RecordingDisplay::new();
        let mut config = SceneConfig::default();
        config.colors = 9;
        match Game::init(&mut display, config) {
            Err(WaveError::Config(_)) => {}
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("scene with 9 colors was accepted"),
        }
        assert!(display.modes.is_empty());
    }

    #[test]
    fn large_lane_spacing_wraps_like_the_x_field() {
        let mut display = RecordingDisplay::new();
        let config = SceneConfig::from_json(r#"{"lanes": 3, "lane_spacing": 20000}"#).unwrap();
        let game = Game::init(&mut display, config).unwrap();
        // 20000 * lane - 8 * color, reduced to 9 bits
        assert_eq!(game.sprite_at(0, 0).unwrap().x(), 0);
        assert_eq!(game.sprite_at(0, 1).unwrap().x(), 32);
        assert_eq!(game.sprite_at(0, 2).unwrap().x(), 64);
        assert_eq!(game.sprite_at(1, 2).unwrap().x(), 56);
        assert_eq!(game.sprite_at(5, 0).unwrap().x(), -40);
    }

    #[test]
    fn wave_offset_truncates_towards_negative_infinity() {
        let amplitude = I16F16::from_num(40);
        assert_eq!(wave_offset(I16F16::from_num(1), amplitude), 40);
        assert_eq!(wave_offset(I16F16::from_num(-1), amplitude), -40);
        assert_eq!(wave_offset(I16F16::from_bits(0x0477), amplitude), 0);
        assert_eq!(wave_offset(I16F16::from_bits(-0x0477), amplitude), -1);
    }
}
