use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn unpremultiply_restores_opaque_and_clears_transparent() {
    let mut px = vec![10u8, 20, 30, 255, 99, 99, 99, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 20, 30, 255, 0, 0, 0, 0]);
}

#[test]
fn unpremultiply_half_alpha() {
    let mut px = vec![64u8, 0, 128, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![128, 0, 255, 128]);
}

#[test]
fn mask_blend_endpoints() {
    let dst = [1, 2, 3, 255];
    let src = [200, 100, 50, 255];
    assert_eq!(mask_blend_px(dst, src, 0), dst);
    assert_eq!(mask_blend_px(dst, src, 255), src);
}

#[test]
fn mask_blend_keeps_opaque_dst_opaque() {
    let dst = [0, 0, 0, 255];
    let src = [255, 255, 255, 128];
    let out = mask_blend_px(dst, src, 128);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
}

#[test]
fn premultiply_scales_color_by_alpha() {
    let mut px = vec![100u8, 50, 200, 128, 9, 9, 9, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(
        px,
        vec![
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128,
            0,
            0,
            0,
            0
        ]
    );
}

#[test]
fn mask_blend_onto_transparent_dst() {
    let out = mask_blend_px([0, 0, 0, 0], [255, 0, 0, 255], 128);
    assert_eq!(out, [128, 0, 0, 128]);
}
