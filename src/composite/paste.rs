use image::RgbaImage;
use image::imageops::FilterType;

use crate::foundation::math::{
    mask_blend_px, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
};

/// Resample a straight-alpha bitmap to `width`x`height` with a bicubic filter.
///
/// Resampling happens in premultiplied space so transparent pixels do not bleed dark fringes into
/// glyph edges.
pub(crate) fn resize_rgba(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    let mut premul = src.clone();
    premultiply_rgba8_in_place(&mut premul);
    let mut out = image::imageops::resize(&premul, width, height, FilterType::CatmullRom);
    unpremultiply_rgba8_in_place(&mut out);
    out
}

/// Paste `overlay` onto `base` with its top-left at `(x, y)`, using overlay alpha as the mask.
///
/// Any part of the overlay outside `base` is dropped.
pub(crate) fn paste_masked(base: &mut RgbaImage, overlay: &RgbaImage, x: i64, y: i64) {
    let (bw, bh) = (i64::from(base.width()), i64::from(base.height()));
    let (ow, oh) = (i64::from(overlay.width()), i64::from(overlay.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + ow).min(bw);
    let y1 = (y + oh).min(bh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for by in y0..y1 {
        for bx in x0..x1 {
            let src = overlay.get_pixel((bx - x) as u32, (by - y) as u32).0;
            if src[3] == 0 {
                continue;
            }
            let dst = base.get_pixel_mut(bx as u32, by as u32);
            dst.0 = mask_blend_px(dst.0, src, src[3]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/paste.rs"]
mod tests;
