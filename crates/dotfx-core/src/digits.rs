//! Packed decimal digits for in-place ANSI color fields.
//!
//! An 8-bit channel has at most three decimal digits, so its packed form
//! keeps ones in bits 0..4, tens in bits 4..8 and hundreds in bits 8..12.
//! Missing leading digits are zero nibbles, which print as `0`; truecolor SGR
//! parameters accept leading zeros, so every field stays exactly three bytes.

/// ASCII `'0'`. Digit nibbles are OR-ed onto it.
pub const ASCII_ZERO: u8 = b'0';

/// Width in bytes of one decimal color field.
pub const FIELD_WIDTH: usize = 3;

/// Pack the decimal digits of `v` into 4-bit fields, least significant first.
///
/// `pack_decimal(255) == 0x255`, `pack_decimal(7) == 0x007`.
#[inline]
pub const fn pack_decimal(v: u8) -> u16 {
    let mut v = v as u16;
    let mut acc = 0u16;
    let mut shift = 0;
    while v > 0 {
        acc |= (v % 10) << shift;
        shift += 4;
        v /= 10;
    }
    acc
}

/// Three zero-padded ASCII digits of `v`, most significant first.
#[inline]
pub const fn decimal_field(v: u8) -> [u8; FIELD_WIDTH] {
    let packed = pack_decimal(v);
    [
        ((packed >> 8) & 0xf) as u8 | ASCII_ZERO,
        ((packed >> 4) & 0xf) as u8 | ASCII_ZERO,
        (packed & 0xf) as u8 | ASCII_ZERO,
    ]
}

/// Parse a three-digit field written by [`decimal_field`].
///
/// Returns `None` for non-digits or values above 255.
pub fn parse_field(field: &[u8]) -> Option<u8> {
    if field.len() != FIELD_WIDTH || !field.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let v = field
        .iter()
        .fold(0u16, |acc, &d| acc * 10 + u16::from(d - ASCII_ZERO));
    u8::try_from(v).ok()
}
