use schemer::scheme::Color;

#[test]
fn opaque_hex_round_trips() {
    for s in ["#000000", "#ffffff", "#88846f", "#1e1e1e", "#b3d7ff"] {
        let color = Color::from_hex(s).unwrap();
        assert_eq!(color.to_hex(), s, "expected {s} to round-trip");
        assert_eq!(color.a, 1.0, "missing alpha must mean fully opaque");
    }
}

#[test]
fn translucent_hex_round_trips() {
    for s in ["#00000000", "#ffffff7f", "#88846f01", "#12345678"] {
        let color = Color::from_hex(s).unwrap();
        assert_eq!(color.to_hex(), s, "expected {s} to round-trip");
    }
}

#[test]
fn explicit_full_alpha_collapses_to_six_digits() {
    let color = Color::from_hex("#88846fff").unwrap();
    assert_eq!(color.to_hex(), "#88846f");
}

#[test]
fn parsing_is_case_insensitive_and_output_is_lowercase() {
    let upper = Color::from_hex("#ABCDEF").unwrap();
    let lower = Color::from_hex("#abcdef").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.to_hex(), "#abcdef");
}

#[test]
fn visibility_threshold_is_one_two_fifty_fifth() {
    assert!(!Color::rgba(1.0, 1.0, 1.0, 0.0).is_visible());
    assert!(!Color::rgba(1.0, 1.0, 1.0, 0.9 / 255.0).is_visible());
    assert!(Color::rgba(1.0, 1.0, 1.0, 1.0 / 255.0).is_visible());
    assert!(Color::rgba(1.0, 1.0, 1.0, 1.0).is_visible());
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = Color::rgba(0.1, 0.2, 0.3, 0.4);
    let b = Color::rgba(0.9, 0.8, 0.7, 0.6);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
}

#[test]
fn lerp_clamps_t() {
    let a = Color::rgba(0.1, 0.2, 0.3, 0.4);
    let b = Color::rgba(0.9, 0.8, 0.7, 0.6);
    assert_eq!(a.lerp(b, -2.0), a);
    assert_eq!(a.lerp(b, 3.5), b);
}

#[test]
fn lerp_midpoint_blends_componentwise() {
    let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
    assert_eq!(mid, Color::rgba(0.5, 0.5, 0.5, 1.0));
}
