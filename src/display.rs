//! The services the scene needs from the display hardware.
//!
//! Everything that touches video memory or waits on the display goes through
//! `DisplayBackend`, so the sprite and animation code never deals with
//! addresses directly.

/// A 4bpp 8x8 tile as it's laid out in object VRAM.
pub type Tile4 = [u32; 8];

/// A 15 bit BGR color, as stored in palette RAM.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0);

    /// Builds a color from 5 bit channels. Higher bits are discarded.
    pub const fn from_rgb(r: u16, g: u16, b: u16) -> Color {
        return Color((r & 0x1F) | ((g & 0x1F) << 5) | ((b & 0x1F) << 10));
    }
}

/// Settings for the display control register.
///
/// The bits are the hardware DISPCNT bits, so backends can write them as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode(u16);

impl DisplayMode {
    /// Tiled mode 0 with every layer switched off.
    pub const OFF: DisplayMode = DisplayMode(0);

    const OBJ_1D_MAP: u16 = 0x0040;
    const OBJ_ENABLE: u16 = 0x1000;

    /// Render objects (sprites).
    pub const fn with_objects(self) -> DisplayMode {
        return DisplayMode(self.0 | DisplayMode::OBJ_ENABLE);
    }

    /// Lay out object tiles one after another instead of in a 32x32 tile matrix.
    pub const fn with_obj_1d_mapping(self) -> DisplayMode {
        return DisplayMode(self.0 | DisplayMode::OBJ_1D_MAP);
    }

    pub fn objects_enabled(&self) -> bool {
        return self.0 & DisplayMode::OBJ_ENABLE != 0;
    }

    pub fn obj_1d_mapping(&self) -> bool {
        return self.0 & DisplayMode::OBJ_1D_MAP != 0;
    }

    pub fn bits(&self) -> u16 {
        return self.0;
    }
}

/// The display hardware as seen by the scene.
///
/// None of these operations can fail; a misconfigured display simply shows
/// garbage or, for `await_vblank()`, blocks forever.
pub trait DisplayBackend {
    /// Writes the display control register.
    fn set_display_mode(&mut self, mode: DisplayMode);

    /// Copies tiles into object VRAM, starting at the given tile slot.
    fn upload_obj_tiles(&mut self, first_tile: usize, tiles: &[Tile4]);

    /// Writes a single entry of the 256 color object palette.
    fn write_obj_palette(&mut self, index: usize, color: Color);

    /// Sets the color shown where nothing else is drawn.
    fn write_backdrop(&mut self, color: Color);

    /// Copies a complete attribute table into OAM.
    ///
    /// Only call this right after `await_vblank()`, otherwise the display may
    /// show a half updated table.
    fn publish_attributes(&mut self, table: &[u16]);

    /// Blocks until the next vertical blank begins.
    fn await_vblank(&mut self);

    /// Makes the display raise an interrupt at the start of each vertical blank,
    /// which is what `await_vblank()` sleeps on.
    fn enable_vblank_interrupt(&mut self);
}

#[cfg(test)]
pub(crate) use recording::RecordingDisplay;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_packs_bgr555() {
        assert_eq!(Color::from_rgb(0x1F, 0, 0), Color(0x001F));
        assert_eq!(Color::from_rgb(0, 0x1F, 0), Color(0x03E0));
        assert_eq!(Color::from_rgb(0, 0, 0x1F), Color(0x7C00));
        assert_eq!(Color::from_rgb(0x20, 0, 0), Color::BLACK);
    }

    #[test]
    fn display_mode_matches_dispcnt_bits() {
        let mode = DisplayMode::OFF.with_objects().with_obj_1d_mapping();
        assert_eq!(mode.bits(), 0x1040);
        assert!(mode.objects_enabled());
        assert!(mode.obj_1d_mapping());
        assert!(!DisplayMode::OFF.objects_enabled());
    }

    #[test]
    #[should_panic(expected = "outside of vblank")]
    fn recording_display_rejects_publish_without_vblank() {
        let mut display = RecordingDisplay::new();
        display.publish_attributes(&[0; 4]);
    }
}
