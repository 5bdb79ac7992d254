#![forbid(unsafe_code)]

//! Packed 32-bit colors.

/// A compact RGBA color.
///
/// - **Size:** 4 bytes, so a frame of `n` dots costs `4 * n` bytes of arena.
/// - **Layout:** `0xRRGGBBAA` (R in bits 31..24, A in bits 7..0).
///
/// The line renderer only reads the three color channels; alpha is carried so
/// frames can be composited by a host that wants to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Create an opaque color from 6-bit VGA DAC components (0..=63).
    ///
    /// Each component is scaled by 4, so 63 maps to 252, not 255. Components
    /// above 63 are masked to their low 6 bits.
    #[inline]
    pub const fn from_vga(r: u8, g: u8, b: u8) -> Self {
        Self::rgb((r & 0x3f) << 2, (g & 0x3f) << 2, (b & 0x3f) << 2)
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// The `(r, g, b)` channels, in patch order.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constants() {
        assert_eq!(PackedRgba::TRANSPARENT, PackedRgba(0));
        assert_eq!(PackedRgba::BLACK.channels(), [0, 0, 0]);
        assert_eq!(PackedRgba::BLACK.a(), 255);
        assert_eq!(PackedRgba::WHITE.channels(), [255, 255, 255]);
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(PackedRgba::default(), PackedRgba::TRANSPARENT);
    }

    #[test]
    fn layout_is_rrggbbaa() {
        assert_eq!(PackedRgba::rgba(0x12, 0x34, 0x56, 0x78).0, 0x1234_5678);
    }

    #[test]
    fn vga_components_scale_by_four() {
        let c = PackedRgba::from_vga(63, 29, 0);
        assert_eq!(c.channels(), [252, 116, 0]);
        assert_eq!(c.a(), 255);
    }

    #[test]
    fn vga_components_mask_to_six_bits() {
        assert_eq!(PackedRgba::from_vga(64, 65, 127), PackedRgba::from_vga(0, 1, 63));
    }
}

/// Top-level `#[cfg(test)]` scope: `proptest!` has edition-2024 issues when
/// nested inside another test module.
#[cfg(test)]
mod color_proptests {
    use super::PackedRgba;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrips_all_components(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
            let c = PackedRgba::rgba(r, g, b, a);
            prop_assert_eq!(c.channels(), [r, g, b]);
            prop_assert_eq!(c.a(), a);
        }
    }
}
