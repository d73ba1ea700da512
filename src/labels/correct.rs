use std::borrow::Cow;

/// Letters that recognizers commonly return in place of digits, Cyrillic
/// look-alikes included.
const CONFUSIONS: &[(char, char)] = &[
    ('O', '0'),
    ('o', '0'),
    ('О', '0'),
    ('о', '0'),
    ('I', '1'),
    ('i', '1'),
    ('l', '1'),
    ('L', '1'),
    ('B', '8'),
    ('В', '8'),
    ('S', '5'),
    ('s', '5'),
    ('G', '6'),
    ('T', '7'),
    ('Z', '2'),
    ('z', '2'),
];

fn digit_for(c: char) -> Option<char> {
    CONFUSIONS
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
}

/// Whether `text` looks numeric enough to be corrected: it already holds an
/// ASCII digit or is at most three characters long.
pub fn looks_numeric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit()) || text.chars().count() <= 3
}

/// Replace letter/digit confusions in short or numeric-looking text.
///
/// Longer natural-language text is returned unchanged.
pub fn correct_confusions(text: &str) -> Cow<'_, str> {
    if !looks_numeric(text) || !text.chars().any(|c| digit_for(c).is_some()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(|c| digit_for(c).unwrap_or(c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_corrected() {
        assert_eq!(correct_confusions("1O"), "10");
        assert_eq!(correct_confusions("lS"), "15");
        assert_eq!(correct_confusions("Zо"), "20");
    }

    #[test]
    fn text_with_digits_is_corrected() {
        assert_eq!(correct_confusions("Step 1"), "5tep 1");
        assert_eq!(correct_confusions("B2B"), "828");
    }

    #[test]
    fn long_words_are_untouched() {
        let text = "Order";
        assert!(matches!(correct_confusions(text), Cow::Borrowed(_)));
        assert_eq!(correct_confusions("Login"), "Login");
    }

    #[test]
    fn length_counts_characters() {
        // Three Cyrillic letters span six bytes.
        assert!(looks_numeric("ВОо"));
        assert_eq!(correct_confusions("ВОо"), "800");
    }
}
