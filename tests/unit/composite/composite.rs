use image::Rgba;

use super::*;
use crate::assets::decode::decode_photo;

fn photo(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255]))
}

fn red_sign(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([255, 0, 0, 255]))
}

#[test]
fn door_scenario_offset() {
    let out = composite(&photo(1000, 800), &red_sign(300, 240), Placement::default()).unwrap();
    assert_eq!(out.offset, (350, 280));
    assert_eq!(out.sign_size, (300, 240));
    assert_eq!(out.image.dimensions(), (1000, 800));
    assert_eq!(out.image.get_pixel(350, 280).0, [255, 0, 0, 255]);
    assert_eq!(out.image.get_pixel(649, 519).0, [255, 0, 0, 255]);
    assert_eq!(out.image.get_pixel(349, 280).0, [93, 24, 90, 255]);
    assert_eq!(out.image.get_pixel(650, 519).0, [138, 7, 90, 255]);
}

#[test]
fn origin_placement_pins_top_left() {
    let out = composite(
        &photo(64, 48),
        &red_sign(10, 6),
        Placement::new(0.0, 0.0, 100.0),
    )
    .unwrap();
    assert_eq!(out.offset, (0, 0));
    assert_eq!(out.image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(out.image.get_pixel(10, 6).0, [10, 6, 90, 255]);
}

#[test]
fn far_placement_pins_bottom_right() {
    let out = composite(
        &photo(64, 48),
        &red_sign(10, 6),
        Placement::new(100.0, 100.0, 100.0),
    )
    .unwrap();
    assert_eq!(out.offset, (54, 42));
    assert_eq!(out.image.get_pixel(63, 47).0, [255, 0, 0, 255]);
    assert_eq!(out.image.get_pixel(53, 47).0, [53, 47, 90, 255]);
}

#[test]
fn scale_resizes_sign() {
    let out = composite(
        &photo(100, 100),
        &red_sign(20, 10),
        Placement::new(0.0, 0.0, 150.0),
    )
    .unwrap();
    assert_eq!(out.sign_size, (30, 15));
    assert_eq!(out.image.get_pixel(29, 14).0, [255, 0, 0, 255]);
    assert_eq!(out.image.get_pixel(30, 14).0, [30, 14, 90, 255]);
}

#[test]
fn oversized_sign_is_clipped_not_rejected() {
    let base = photo(40, 30);
    let out = composite(&base, &red_sign(60, 50), Placement::new(50.0, 50.0, 200.0)).unwrap();
    assert_eq!(out.sign_size, (120, 100));
    assert_eq!(out.offset, (-40, -35));
    assert_eq!(out.image.dimensions(), (40, 30));
    assert!(out.image.pixels().all(|p| p.0 == [255, 0, 0, 255]));
}

#[test]
fn transparent_sign_leaves_photo_unchanged() {
    let base = photo(32, 32);
    let sign = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
    let out = composite(&base, &sign, Placement::default()).unwrap();
    assert_eq!(out.image, base);
}

#[test]
fn invalid_placement_is_rejected() {
    let err = composite(
        &photo(8, 8),
        &red_sign(2, 2),
        Placement::new(0.0, 0.0, 300.0),
    )
    .unwrap_err();
    assert!(matches!(err, SignscaleError::Validation(_)));
}

#[test]
fn png_round_trip_is_exact() {
    let out = composite(&photo(50, 40), &red_sign(7, 5), Placement::default()).unwrap();
    let back = decode_photo(&out.to_png().unwrap()).unwrap();
    assert_eq!(back, out.image);
}
