use huekit::color::Color;

#[test]
fn decode_selects_shape_by_digit_count() {
    // 1. 3-digit shorthand replicates each nibble (0xF -> 255)
    let c = Color::from_hex("fff");
    assert_eq!((c.r8(), c.g8(), c.b8(), c.a8()), (255, 255, 255, 255));

    // 2. 6-digit RRGGBB, decoration stripped before parsing
    let c = Color::from_hex("#ae2d27");
    assert_eq!((c.r8(), c.g8(), c.b8(), c.a8()), (174, 45, 39, 255));

    // 3. 8-digit carries alpha as the FIRST byte
    let c = Color::from_hex("80ae2d27");
    assert_eq!(c.a8(), 128);
    assert_eq!((c.r8(), c.g8(), c.b8()), (174, 45, 39));
}

#[test]
fn decode_ignores_decoration() {
    let plain = Color::from_hex("ae2d27");
    assert_eq!(Color::from_hex("#ae2d27"), plain);
    assert_eq!(Color::from_hex("ae 2d 27"), plain);
    assert_eq!(Color::from_hex("##AE2D27!!"), plain);
}

#[test]
fn decode_falls_back_instead_of_failing() {
    // Any digit count other than 3/6/8 yields the near-transparent fallback
    for input in ["xy", "", "abcd", "1234567", "#ae2d275f0"] {
        let c = Color::from_hex(input);
        assert_eq!((c.r8(), c.g8(), c.b8(), c.a8()), (1, 1, 1, 0), "{input:?}");
    }
}

#[test]
fn encode_reproduces_every_six_digit_input() {
    for hex in ["#AE2D27", "#1ED55F", "#FFFF03", "#DFB492", "#000000", "#FFFFFF"] {
        assert_eq!(Color::from_hex(hex).to_hex(), hex);
    }
    // Lowercase input normalizes to uppercase output
    assert_eq!(Color::from_hex("#eb262f").to_hex(), "#EB262F");
}

#[test]
fn every_byte_value_survives_the_round_trip() {
    // Truncation-after-scale must not lose a single step anywhere in 0..=255
    for n in 0..=255u8 {
        let hex = format!("#{:02X}{:02X}{:02X}", n, n, n);
        assert_eq!(Color::from_hex(&hex).to_hex(), hex);
    }
}

#[test]
fn decode_of_encode_stays_within_one_step() {
    let c = Color {
        r: 0.123,
        g: 0.456,
        b: 0.789,
        a: 1.0,
    };
    let back = Color::from_hex(&c.to_hex());
    assert!((back.r - c.r).abs() <= 1.0 / 255.0);
    assert!((back.g - c.g).abs() <= 1.0 / 255.0);
    assert!((back.b - c.b).abs() <= 1.0 / 255.0);
}

#[test]
fn white_is_achromatic() {
    let hsl = Color::from_hex("#ffffff").to_hsl();
    assert_eq!(hsl.hue, 0.0);
    assert_eq!(hsl.saturation, 0.0);
    assert_eq!(hsl.lightness, 100.0);
    assert_eq!(hsl.alpha, 100.0);
}

#[test]
fn hsl_of_deep_red_matches_the_formula() {
    // Expected values computed by hand from rgb(174, 45, 39):
    // max 174/255, min 39/255, delta 135/255
    let hsl = Color::from_hex("#ae2d27").to_hsl();
    assert!((hsl.hue - 2.6667).abs() < 0.01, "hue {}", hsl.hue);
    assert!((hsl.saturation - 63.3803).abs() < 0.01, "sat {}", hsl.saturation);
    assert!((hsl.lightness - 41.7647).abs() < 0.01, "light {}", hsl.lightness);
    assert_eq!(hsl.alpha, 100.0);
}

#[test]
fn hsl_alpha_passes_through_as_percentage() {
    let hsl = Color::from_hex("80ae2d27").to_hsl();
    assert!((hsl.alpha - 128.0 / 255.0 * 100.0).abs() < 1e-9);
}

#[test]
fn hsl_construction_inverts_the_derivation() {
    for hex in ["#1ed55f", "#ae2d27", "#ffc934", "#eb262f"] {
        let hsl = Color::from_hex(hex).to_hsl();
        let back = Color::from_hsl(hsl.hue, hsl.saturation, hsl.lightness).to_hsl();
        assert!((back.hue - hsl.hue).abs() < 1e-9, "{hex}");
        assert!((back.saturation - hsl.saturation).abs() < 1e-9, "{hex}");
        assert!((back.lightness - hsl.lightness).abs() < 1e-9, "{hex}");
    }
}

#[test]
fn hsl_construction_wraps_hue() {
    assert_eq!(
        Color::from_hsl(370.0, 50.0, 50.0),
        Color::from_hsl(10.0, 50.0, 50.0)
    );
    assert_eq!(
        Color::from_hsl(-20.0, 50.0, 50.0),
        Color::from_hsl(340.0, 50.0, 50.0)
    );
}

#[test]
fn display_renders_the_hex_form() {
    assert_eq!(Color::from_hex("1ed55f").to_string(), "#1ED55F");
}
