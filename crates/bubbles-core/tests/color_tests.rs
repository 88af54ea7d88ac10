use bubbles_core::color::{canonicalize, is_light_color, luminance, ColorError};

#[test]
fn canonicalize_uppercases_and_prefixes() {
    assert_eq!(
        canonicalize("a4c8ec"),
        Ok(("#A4C8EC".to_owned(), [0xA4, 0xC8, 0xEC]))
    );
    assert_eq!(
        canonicalize("#ff3b30"),
        Ok(("#FF3B30".to_owned(), [0xFF, 0x3B, 0x30]))
    );
    assert_eq!(
        canonicalize("  #05347E "),
        Ok(("#05347E".to_owned(), [0x05, 0x34, 0x7E]))
    );
}

#[test]
fn canonicalize_accepts_the_full_channel_range() {
    assert_eq!(canonicalize("#000000").unwrap().1, [0, 0, 0]);
    assert_eq!(canonicalize("#FFFFFF").unwrap().1, [255, 255, 255]);
}

#[test]
fn canonicalize_rejects_wrong_length() {
    assert!(matches!(canonicalize("#FFF"), Err(ColorError::BadLength(_))));
    assert!(matches!(canonicalize(""), Err(ColorError::BadLength(_))));
    assert!(matches!(
        canonicalize("#AABBCCDD"),
        Err(ColorError::BadLength(_))
    ));
}

#[test]
fn canonicalize_rejects_bad_digits() {
    assert!(matches!(canonicalize("#GGGGGG"), Err(ColorError::BadDigit(_))));
    assert!(matches!(canonicalize("zzzzzz"), Err(ColorError::BadDigit(_))));
    // Multi-byte input must error, not panic on a byte slice.
    assert!(canonicalize("#ööö").is_err());
}

#[test]
fn luminance_matches_rec709_weights() {
    assert_eq!(luminance([0, 0, 0]), 0.0);
    assert!((luminance([255, 255, 255]) - 1.0).abs() < 1e-4);
    assert!((luminance([255, 0, 0]) - 0.2126).abs() < 1e-4);
    assert!((luminance([0, 255, 0]) - 0.7152).abs() < 1e-4);
}

#[test]
fn light_classification_threshold() {
    assert!(is_light_color([255, 255, 255]));
    assert!(is_light_color([0xE5, 0xE5, 0xEA]));
    assert!(!is_light_color([0x05, 0x34, 0x7E]));
    assert!(!is_light_color([0xCE, 0x00, 0x00]));
}
