use super::*;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!("#ff0000".parse::<Rgba8>().unwrap(), Rgba8::RED);
    assert_eq!("11AABB".parse::<Rgba8>().unwrap(), Rgba8::rgb(0x11, 0xaa, 0xbb));
    assert_eq!(
        "#11223344".parse::<Rgba8>().unwrap(),
        Rgba8::new(0x11, 0x22, 0x33, 0x44)
    );
}

#[test]
fn parses_named_basics_case_insensitively() {
    assert_eq!("black".parse::<Rgba8>().unwrap(), Rgba8::BLACK);
    assert_eq!("White".parse::<Rgba8>().unwrap(), Rgba8::WHITE);
    assert_eq!("BLUE".parse::<Rgba8>().unwrap(), Rgba8::BLUE);
    assert_eq!("transparent".parse::<Rgba8>().unwrap(), Rgba8::TRANSPARENT);
}

#[test]
fn rejects_malformed_colors() {
    assert!("#12345".parse::<Rgba8>().is_err());
    assert!("#gg0000".parse::<Rgba8>().is_err());
    assert!("chartreuse".parse::<Rgba8>().is_err());
}

#[test]
fn display_roundtrips_through_from_str() {
    for color in [Rgba8::RED, Rgba8::new(1, 2, 3, 4), Rgba8::GRAY] {
        let shown = color.to_string();
        assert_eq!(shown.parse::<Rgba8>().unwrap(), color);
    }
}

#[test]
fn serde_uses_the_string_form() {
    let json = serde_json::to_string(&Rgba8::RED).unwrap();
    assert_eq!(json, "\"#ff0000\"");
    let back: Rgba8 = serde_json::from_str("\"red\"").unwrap();
    assert_eq!(back, Rgba8::RED);
}

#[test]
fn with_opacity_scales_alpha_only() {
    let c = Rgba8::RED.with_opacity(0.5);
    assert_eq!((c.r, c.g, c.b), (255, 0, 0));
    assert_eq!(c.a, 128);
    assert_eq!(Rgba8::RED.with_opacity(2.0).a, 255);
    assert_eq!(Rgba8::RED.with_opacity(-1.0).a, 0);
}

#[test]
fn premul_bytes_are_scaled_by_alpha() {
    assert_eq!(Rgba8::WHITE.to_premul_bytes(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::TRANSPARENT.to_premul_bytes(), [0, 0, 0, 0]);
    let half = Rgba8::new(255, 0, 255, 128).to_premul_bytes();
    assert_eq!(half, [128, 0, 128, 128]);
}
