//! Fixed-point trigonometry.
//!
//! The GBA has no FPU, so sines are looked up in a table of 16.16 fixed-point
//! values, one per whole degree, which is built once at startup from a
//! quarter wave.

use fixed::types::I16F16;

use crate::debug_log::Subsystems::Trig;

/// Number of entries in the full table, one per degree.
pub const DEGREES: usize = 360;

/// sin(0°)..=sin(90°) as unsigned 0.16 fixed-point magnitudes.
///
/// sin(90°) doesn't fit into 16 bits and saturates; the table builder never reads it.
pub const SIN_QUARTER_WAVE: [u16; 91] = [
    0x0000, 0x0477, 0x08EF, 0x0D65, 0x11DB, 0x164F, 0x1AC2, 0x1F32, //
    0x23A0, 0x280C, 0x2C74, 0x30D8, 0x3539, 0x3996, 0x3DEE, 0x4241, //
    0x4690, 0x4AD8, 0x4F1B, 0x5358, 0x578E, 0x5BBE, 0x5FE6, 0x6406, //
    0x681F, 0x6C30, 0x7039, 0x7438, 0x782F, 0x7C1C, 0x7FFF, 0x83D9, //
    0x87A8, 0x8B6D, 0x8F27, 0x92D5, 0x9679, 0x9A10, 0x9D9B, 0xA11B, //
    0xA48D, 0xA7F3, 0xAB4C, 0xAE97, 0xB1D5, 0xB504, 0xB826, 0xBB39, //
    0xBE3E, 0xC134, 0xC41B, 0xC6F3, 0xC9BB, 0xCC73, 0xCF1B, 0xD1B3, //
    0xD43B, 0xD6B3, 0xD919, 0xDB6F, 0xDDB3, 0xDFE7, 0xE208, 0xE419, //
    0xE617, 0xE803, 0xE9DE, 0xEBA6, 0xED5B, 0xEEFF, 0xF08F, 0xF20D, //
    0xF378, 0xF4D0, 0xF615, 0xF746, 0xF865, 0xF970, 0xFA67, 0xFB4B, //
    0xFC1C, 0xFCD9, 0xFD82, 0xFE17, 0xFE98, 0xFF06, 0xFF60, 0xFFA6, //
    0xFFD8, 0xFFF6, 0xFFFF,
];

/// A full period of sine in 16.16 fixed-point, indexed by degree.
pub struct SinTable {
    table: [I16F16; DEGREES],
}

impl SinTable {
    /// Builds the table by mirroring the quarter wave into the other three quadrants.
    ///
    /// The quadrant boundaries are set to exactly 0, 1, 0 and -1.
    pub fn new() -> SinTable {
        let mut table = [I16F16::from_bits(0); DEGREES];
        for d in 1..90 {
            let rising = I16F16::from_bits(i32::from(SIN_QUARTER_WAVE[d]));
            let falling = I16F16::from_bits(i32::from(SIN_QUARTER_WAVE[90 - d]));
            table[d] = rising;
            table[d + 90] = falling;
            table[d + 180] = -rising;
            table[d + 270] = -falling;
        }
        table[0] = I16F16::from_num(0);
        table[90] = I16F16::from_num(1);
        table[180] = I16F16::from_num(0);
        table[270] = I16F16::from_num(-1);

        debug_log!(Trig, "Built {} entry sine table", DEGREES);
        return SinTable { table: table };
    }

    /// Looks up the sine of the given angle.
    ///
    /// The angle has to be in [0, 360). Use `normalize()` on anything else first.
    pub fn sin(&self, degree: usize) -> I16F16 {
        return self.table[degree];
    }

    /// Wraps an arbitrary angle in degrees into [0, 360).
    pub fn normalize(angle: u32) -> usize {
        return (angle % DEGREES as u32) as usize;
    }
}

impl Default for SinTable {
    fn default() -> Self {
        return SinTable::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_boundaries_are_exact() {
        let sin = SinTable::new();
        assert_eq!(sin.sin(0).to_bits(), 0);
        assert_eq!(sin.sin(90).to_bits(), 0x0001_0000);
        assert_eq!(sin.sin(180).to_bits(), 0);
        assert_eq!(sin.sin(270).to_bits(), -0x0001_0000);
    }

    #[test]
    fn table_is_symmetric() {
        let sin = SinTable::new();
        for d in 1..90 {
            assert_eq!(sin.sin(d), sin.sin(180 - d), "sin({}) != sin({})", d, 180 - d);
            assert_eq!(sin.sin(d + 180), -sin.sin(d), "sin({}) != -sin({})", d + 180, d);
            assert_eq!(sin.sin(360 - d), -sin.sin(d), "sin({}) != -sin({})", 360 - d, d);
        }
    }

    #[test]
    fn table_follows_float_sine() {
        let sin = SinTable::new();
        for d in 0..DEGREES {
            let expected = reference_sin(d);
            let actual: f64 = sin.sin(d).to_num();
            assert!(
                (actual - expected).abs() < 0.001,
                "sin({}) = {}, expected {}",
                d,
                actual,
                expected
            );
        }
    }

    #[test]
    fn negative_half_is_sign_extended() {
        let sin = SinTable::new();
        assert_eq!(sin.sin(181).to_bits(), -0x0477);
        assert_eq!(sin.sin(359).to_bits(), -0x0477);
        assert!(sin.sin(269) < I16F16::from_num(0));
    }

    #[test]
    fn normalize_wraps_into_one_period() {
        assert_eq!(SinTable::normalize(0), 0);
        assert_eq!(SinTable::normalize(359), 359);
        assert_eq!(SinTable::normalize(360), 0);
        assert_eq!(SinTable::normalize(725), 5);
        assert_eq!(SinTable::normalize(u32::MAX), (u32::MAX % 360) as usize);
    }

    /// The host's float sine, only used as a reference here.
    fn reference_sin(degree: usize) -> f64 {
        return (degree as f64).to_radians().sin();
    }
}
