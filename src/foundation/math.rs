pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// BT.601 luma of an 8-bit RGB triple, rounded.
pub(crate) fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((y + 500) / 1000) as u8
}

/// Linear interpolation between two channel values, `t` clamped to `[0, 1]`.
pub(crate) fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let tt = ((t.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16;
    let it = 255u16 - tt;
    let v = mul_div255_u16(u16::from(a), it) + mul_div255_u16(u16::from(b), tt);
    v.min(255) as u8
}

/// Float to channel value with rounding and saturation.
pub(crate) fn to_u8_sat(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
