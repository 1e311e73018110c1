use huekit::color::Color;
use huekit::palette;

#[test]
fn groups_hold_three_consistent_entries() {
    assert_eq!(palette::BACKGROUNDS.len(), 3);
    assert_eq!(palette::ELEMENTS.len(), 3);

    for entry in palette::all_entries() {
        // The hex and color fields must describe the same value
        assert_eq!(Color::from_hex(entry.hex), entry.color, "{}", entry.name);
        assert_eq!(entry.color.to_hex(), entry.hex.to_uppercase(), "{}", entry.name);
    }
}

#[test]
fn all_entries_lists_backgrounds_first() {
    let all = palette::all_entries();
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].name, "Deep Red");
    assert_eq!(all[1].name, "Sandy Beige");
    assert_eq!(all[2].name, "Bright Yellow");
    assert_eq!(all[3].name, "Vibrant Green");
    assert_eq!(all[4].name, "Neon Yellow");
    assert_eq!(all[5].name, "Bold Red");
}

#[test]
fn complementary_rotates_half_the_wheel() {
    let base = Color::from_hex("#1ed55f");
    let base_hsl = base.to_hsl();
    let comp_hsl = palette::complementary(base).to_hsl();

    let delta = (comp_hsl.hue - base_hsl.hue).rem_euclid(360.0);
    assert!((delta - 180.0).abs() < 1e-6, "hue delta {delta}");
    assert!((comp_hsl.saturation - base_hsl.saturation).abs() < 1e-6);
    assert!((comp_hsl.lightness - base_hsl.lightness).abs() < 1e-6);
}

#[test]
fn analogous_returns_both_neighbors_in_order() {
    let base = Color::from_hex("#dfb492");
    let base_hsl = base.to_hsl();
    let [plus, minus] = palette::analogous(base);
    let plus_hsl = plus.to_hsl();
    let minus_hsl = minus.to_hsl();

    let up = (plus_hsl.hue - base_hsl.hue).rem_euclid(360.0);
    let down = (base_hsl.hue - minus_hsl.hue).rem_euclid(360.0);
    assert!((up - 30.0).abs() < 1e-6, "up {up}");
    assert!((down - 30.0).abs() < 1e-6, "down {down}");

    for neighbor in [plus_hsl, minus_hsl] {
        assert!((neighbor.saturation - base_hsl.saturation).abs() < 1e-6);
        assert!((neighbor.lightness - base_hsl.lightness).abs() < 1e-6);
    }
}

#[test]
fn analogous_wraps_at_the_low_end_of_the_wheel() {
    // Deep Red sits ~2.7 degrees in, so -30 must land near 332.7, not negative
    let base = Color::from_hex("#ae2d27");
    let [_, minus] = palette::analogous(base);
    let hue = minus.to_hsl().hue;
    assert!((300.0..360.0).contains(&hue), "hue {hue}");
}
