//! Fire palette: cold black through red, orange and yellow to white heat.

use dotfx_core::PackedRgba;

// ---------------------------------------------------------------------------
// Jare's FirePal (64 VGA 6-bit entries, then white heat)
// ---------------------------------------------------------------------------

const FIRE_RAMP: [(u8, u8, u8); 64] = [
    (0, 0, 0),   // 0: black
    (0, 1, 1),   // 1
    (0, 4, 5),   // 2
    (0, 7, 9),   // 3
    (0, 8, 11),  // 4
    (0, 9, 12),  // 5: blue-black smoke
    (15, 6, 8),  // 6
    (25, 4, 4),  // 7
    (33, 3, 3),  // 8
    (40, 2, 2),  // 9
    (48, 2, 2),  // 10
    (55, 1, 1),  // 11
    (63, 0, 0),  // 12: full red
    (63, 0, 0),  // 13
    (63, 3, 0),  // 14
    (63, 7, 0),  // 15
    (63, 10, 0), // 16
    (63, 13, 0), // 17
    (63, 16, 0), // 18
    (63, 20, 0), // 19
    (63, 23, 0), // 20
    (63, 26, 0), // 21
    (63, 29, 0), // 22: re-ignited base
    (63, 33, 0), // 23
    (63, 36, 0), // 24
    (63, 39, 0), // 25
    (63, 39, 0), // 26
    (63, 40, 0), // 27
    (63, 40, 0), // 28
    (63, 41, 0), // 29
    (63, 42, 0), // 30
    (63, 42, 0), // 31
    (63, 43, 0), // 32
    (63, 44, 0), // 33
    (63, 44, 0), // 34
    (63, 45, 0), // 35
    (63, 45, 0), // 36
    (63, 46, 0), // 37
    (63, 47, 0), // 38
    (63, 47, 0), // 39
    (63, 48, 0), // 40
    (63, 49, 0), // 41
    (63, 49, 0), // 42
    (63, 50, 0), // 43
    (63, 51, 0), // 44
    (63, 51, 0), // 45
    (63, 52, 0), // 46
    (63, 53, 0), // 47
    (63, 53, 0), // 48
    (63, 54, 0), // 49
    (63, 55, 0), // 50
    (63, 55, 0), // 51
    (63, 56, 0), // 52
    (63, 57, 0), // 53
    (63, 57, 0), // 54
    (63, 58, 0), // 55
    (63, 58, 0), // 56
    (63, 59, 0), // 57
    (63, 60, 0), // 58
    (63, 60, 0), // 59
    (63, 61, 0), // 60
    (63, 62, 0), // 61
    (63, 62, 0), // 62
    (63, 63, 0), // 63: yellow
];

/// First intensity at full red saturation.
pub const FULL_RED: u8 = 12;

/// First intensity rendered as white heat.
pub const WHITE_HEAT_START: u8 = FIRE_RAMP.len() as u8;

/// Color of every intensity from [`WHITE_HEAT_START`] up.
pub const WHITE_HEAT: PackedRgba = PackedRgba::from_vga(63, 63, 63);

/// Intensity-to-color lookup, indexed by heat.
pub const FIRE_PALETTE: [PackedRgba; 256] = build_fire_palette();

const fn build_fire_palette() -> [PackedRgba; 256] {
    let mut out = [WHITE_HEAT; 256];
    let mut i = 0;
    while i < FIRE_RAMP.len() {
        let (r, g, b) = FIRE_RAMP[i];
        out[i] = PackedRgba::from_vga(r, g, b);
        i += 1;
    }
    out
}

/// Color for a heat value.
#[inline]
pub const fn fire_color(heat: u8) -> PackedRgba {
    FIRE_PALETTE[heat as usize]
}
