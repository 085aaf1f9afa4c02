use glam::Vec4;

use crate::errors::{Result, ShowroomError};

/// Parses a `RRGGBB` hex string (with or without a leading `#`) into sRGB
/// RGBA components in `[0, 1]` with alpha 1.
pub fn parse_hex_color(hex: &str) -> Result<Vec4> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ShowroomError::InvalidColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| f32::from(v) / 255.0)
            .map_err(|_| ShowroomError::InvalidColor(hex.to_string()))
    };

    Ok(Vec4::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0))
}
