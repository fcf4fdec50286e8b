use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten a slot caption by dropping trailing characters until it fits in
/// `width` terminal columns.
pub fn fit_caption(caption: &str, width: usize) -> &str {
    if caption.width() <= width {
        return caption;
    }
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in caption.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    &caption[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_captions_are_untouched() {
        assert_eq!(fit_caption("Base1", 10), "Base1");
        assert_eq!(fit_caption("Base1", 5), "Base1");
    }

    #[test]
    fn long_captions_are_cut() {
        assert_eq!(fit_caption("campaign two final", 8), "campaign");
        assert_eq!(fit_caption("anything", 0), "");
    }

    #[test]
    fn wide_characters_count_double() {
        // Each CJK ideograph takes two columns.
        assert_eq!(fit_caption("基地基地", 5), "基地");
    }
}
