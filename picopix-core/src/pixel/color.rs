//! Color types and packing

/// 8-bit per channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Shift every channel left by `level` bits, dropping overflow
    pub fn shifted(self, level: u8) -> Self {
        let shift = |c: u8| (c as u32).checked_shl(level as u32).unwrap_or(0) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }

    /// Bitwise inverse of every channel
    pub const fn inverted(self) -> Self {
        Self::new(self.r ^ 0xFF, self.g ^ 0xFF, self.b ^ 0xFF)
    }
}

/// 24-bit color word in strip order
///
/// Layout is `0x00GGRRBB`. WS2812-type LEDs clock green first, so the word
/// can be shifted straight out MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedGrb(u32);

impl PackedGrb {
    pub const BLACK: PackedGrb = PackedGrb(0);

    /// Pack channel values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((g as u32) << 16) | ((r as u32) << 8) | (b as u32))
    }

    /// Wrap a raw word, ignoring bits above 23
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & 0x00FF_FFFF)
    }

    /// Raw word
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Unpack into channel values
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: (self.0 >> 8) as u8,
            g: (self.0 >> 16) as u8,
            b: self.0 as u8,
        }
    }
}

impl From<Rgb> for PackedGrb {
    fn from(c: Rgb) -> Self {
        PackedGrb::from_rgb(c.r, c.g, c.b)
    }
}

impl From<PackedGrb> for Rgb {
    fn from(p: PackedGrb) -> Self {
        p.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_order() {
        assert_eq!(PackedGrb::from_rgb(0x11, 0x22, 0x33).bits(), 0x0022_1133);
        assert_eq!(PackedGrb::from_rgb(0xFF, 0, 0).bits(), 0x0000_FF00);
        assert_eq!(PackedGrb::from_rgb(0, 0xFF, 0).bits(), 0x00FF_0000);
    }

    #[test]
    fn test_unpack() {
        let c = PackedGrb::from_bits(0x0022_1133).to_rgb();
        assert_eq!(c, Rgb::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_from_bits_masks_top_byte() {
        assert_eq!(PackedGrb::from_bits(0xFF12_3456).bits(), 0x0012_3456);
    }

    #[test]
    fn test_shifted_truncates() {
        // 7 << 5 = 224 fits, 8 << 5 = 256 wraps to 0
        assert_eq!(Rgb::new(7, 8, 1).shifted(5), Rgb::new(224, 0, 32));
        assert_eq!(Rgb::new(1, 1, 1).shifted(0), Rgb::new(1, 1, 1));
        assert_eq!(Rgb::new(255, 255, 255).shifted(8), Rgb::BLACK);
        assert_eq!(Rgb::new(255, 255, 255).shifted(40), Rgb::BLACK);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(Rgb::new(224, 0, 32).inverted(), Rgb::new(31, 255, 223));
        assert_eq!(Rgb::BLACK.inverted(), Rgb::WHITE);
    }
}
