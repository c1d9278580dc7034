/// Normalize raw text for matching
/// lowercases the input and removes every ASCII punctuation character.
/// Whitespace is left as-is, so removing punctuation never merges words.
///
/// # Arguments
/// * `text` - raw text (FAQ question or user query)
///
/// # Returns
/// * `String` - normalized text
///
/// # Examples
/// ```
/// use faq_matcher::utils::normalizer::normalize;
/// assert_eq!(normalize("Is hostel facility available?"), "is hostel facility available");
/// ```
#[inline]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Split normalized text into whitespace-delimited tokens
#[inline]
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// normalize + tokenize in one go
/// tokens are returned owned because the normalized buffer is temporary
pub fn normalized_tokens(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    tokenize(&normalized).into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("What courses are offered in the college?"), "what courses are offered in the college");
        assert_eq!(normalize("HELLO, World!!"), "hello world");
    }

    #[test]
    fn punctuation_inside_words_is_removed_without_splitting() {
        // "9:00" -> "900", "don't" -> "dont"
        assert_eq!(normalize("Don't open at 9:00"), "dont open at 900");
    }

    #[test]
    fn whitespace_is_not_collapsed() {
        assert_eq!(normalize("a , b"), "a  b");
        assert_eq!(tokenize(&normalize("a , b")), vec!["a", "b"]);
    }

    #[test]
    fn empty_and_punctuation_only_inputs() {
        assert_eq!(normalize(""), "");
        assert!(normalized_tokens("?!...").is_empty());
        assert!(normalized_tokens("   ").is_empty());
    }

    #[test]
    fn non_ascii_punctuation_is_kept() {
        assert_eq!(normalize("¿Qué?"), "¿qué");
    }
}
