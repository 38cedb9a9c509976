pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255_u8(px[0] as u16, a);
        px[1] = mul_div255_u8(px[1] as u16, a);
        px[2] = mul_div255_u8(px[2] as u16, a);
    }
}

/// Convert premultiplied RGBA8 to straight alpha in place.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Blend `src` onto `dst` using `mask` (0..=255) as coverage.
///
/// Color channels follow `src * m + dst * (1 - m)`; alpha accumulates as `m + dst_a * (1 - m)`
/// so an opaque destination stays opaque.
pub(crate) fn mask_blend_px(dst: [u8; 4], src: [u8; 4], mask: u8) -> [u8; 4] {
    match mask {
        0 => dst,
        255 => [src[0], src[1], src[2], 255],
        m => {
            let m = u16::from(m);
            let inv = 255 - m;
            let mut out = [0u8; 4];
            for i in 0..3 {
                let s = mul_div255_u16(u16::from(src[i]), m);
                let d = mul_div255_u16(u16::from(dst[i]), inv);
                out[i] = (s + d).min(255) as u8;
            }
            out[3] = (m + mul_div255_u16(u16::from(dst[3]), inv)).min(255) as u8;
            out
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
