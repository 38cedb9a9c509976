use super::*;

#[test]
fn parse_hex_accepts_rgb_and_rgba() {
    assert_eq!(Rgba8::parse_hex("#000000").unwrap(), Rgba8::BLACK);
    assert_eq!(Rgba8::parse_hex("ffffff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse_hex("#FF336680").unwrap(),
        Rgba8 {
            r: 0xff,
            g: 0x33,
            b: 0x66,
            a: 0x80
        }
    );
}

#[test]
fn parse_hex_rejects_malformed() {
    assert!(Rgba8::parse_hex("#fff").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
    assert!(Rgba8::parse_hex("").is_err());
    assert!(Rgba8::parse_hex("#ééé").is_err());
}

#[test]
fn display_matches_hex_input() {
    assert_eq!(Rgba8::opaque(255, 51, 102).to_string(), "#FF3366");
    let c: Rgba8 = "#10203040".parse().unwrap();
    assert_eq!(c.to_string(), "#10203040");
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_str("\"#ff0000\"").unwrap();
    assert_eq!(c, Rgba8::opaque(255, 0, 0));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#FF0000\"");
    assert!(serde_json::from_str::<Rgba8>("\"red\"").is_err());
}
