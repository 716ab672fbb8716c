use crate::core::TextJustify;

/// Pad `text` with spaces to `field_length` characters.
///
/// Text at least as wide as the field is returned unchanged. Center places
/// the smaller half of the padding on the left.
pub fn justify_text(text: &str, field_length: usize, justification: TextJustify) -> String {
    let width = text.chars().count();
    if field_length <= width {
        return text.to_string();
    }

    let pad = field_length - width;
    let (left, right) = match justification {
        TextJustify::Left => (0, pad),
        TextJustify::Right => (pad, 0),
        TextJustify::Center => (pad / 2, pad - pad / 2),
    };

    let mut out = String::with_capacity(text.len().saturating_add(pad));
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_justify_pads_left() {
        assert_eq!(justify_text("12.5", 7, TextJustify::Right), "   12.5");
    }

    #[test]
    fn test_left_justify_pads_right() {
        assert_eq!(justify_text("12.5", 7, TextJustify::Left), "12.5   ");
    }

    #[test]
    fn test_center_puts_extra_space_right() {
        assert_eq!(justify_text("ab", 5, TextJustify::Center), " ab  ");
        assert_eq!(justify_text("ab", 6, TextJustify::Center), "  ab  ");
    }

    #[test]
    fn test_narrow_field_returns_text() {
        assert_eq!(justify_text("123.456", 3, TextJustify::Right), "123.456");
        assert_eq!(justify_text("€5", 2, TextJustify::Left), "€5");
    }

    #[test]
    fn test_empty_text_fills_field() {
        assert_eq!(justify_text("", 3, TextJustify::Center), "   ");
    }
}
