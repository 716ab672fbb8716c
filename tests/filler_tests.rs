use numstr::text::MAX_REPEAT_COUNT;
use numstr::{Error, TextFieldSpecFiller};
use pretty_assertions::assert_eq;

#[test]
fn test_constructors_agree() {
    let from_str = TextFieldSpecFiller::new("-", 4).unwrap();
    let from_rune = TextFieldSpecFiller::new_rune('-', 4).unwrap();
    let from_runes = TextFieldSpecFiller::new_rune_array(&['-'], 4).unwrap();
    assert_eq!(from_str, from_rune);
    assert_eq!(from_rune, from_runes);
}

#[test]
fn test_unicode_filler_width_counts_chars() {
    let filler = TextFieldSpecFiller::new("─•", 3).unwrap();
    assert_eq!(filler.formatted_text(), "─•─•─•");
    assert_eq!(filler.text_width(), 6);
    assert_eq!(filler.formatted_text().chars().count(), filler.text_width());
}

#[test]
fn test_copy_out_is_equal_and_independent() {
    let original = TextFieldSpecFiller::new("ab", 2).unwrap();
    let mut copy = original.copy_out().unwrap();
    assert_eq!(copy, original);

    copy.set_text_filler_rune('z', 1).unwrap();
    assert_ne!(copy, original);
    assert_eq!(original.formatted_text(), "abab");
}

#[test]
fn test_copy_in_from_valid_source() {
    let source = TextFieldSpecFiller::new_rune('*', 7).unwrap();
    let mut target = TextFieldSpecFiller::default();
    target.copy_in(&source).unwrap();
    assert_eq!(target, source);
    assert!(target.is_valid_instance());
}

#[test]
fn test_setters_validate_before_mutating() {
    let mut filler = TextFieldSpecFiller::new("=", 2).unwrap();

    let err = filler
        .set_text_filler_rune_array(&['x'], MAX_REPEAT_COUNT + 1)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidRepeatCount { count, max }
        if count == MAX_REPEAT_COUNT + 1 && max == MAX_REPEAT_COUNT));

    let err = filler.set_text_filler("", 5).unwrap_err();
    assert!(matches!(err, Error::InvalidFillerChars(_)));

    assert_eq!(filler.to_string(), "==");
}

#[test]
fn test_display_matches_formatted_text() {
    let filler = TextFieldSpecFiller::new("-+", 2).unwrap();
    assert_eq!(format!("[{}]", filler), "[-+-+]");
}
