//! Plain-text measurement helpers shared by the layout estimator and the
//! DOCX exporter.
//!
//! All counting is whitespace-based: a "word" is a maximal run of
//! non-whitespace characters. Blank or empty input always measures zero.

/// Count the words in a string.
///
/// # Examples
///
/// ```
/// assert_eq!(folio::text::word_count("one two  three"), 3);
/// assert_eq!(folio::text::word_count("   "), 0);
/// assert_eq!(folio::text::word_count(""), 0);
/// ```
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into greedy chunks of at most `words_per_chunk` words.
///
/// Words are never broken apart; joining the chunks with single spaces
/// reproduces the whitespace-normalized input. Blank input yields no
/// chunks.
pub fn chunk_words(text: &str, words_per_chunk: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        if current.len() >= words_per_chunk {
            chunks.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        chunks.push(current.join(" "));
    }
    chunks
}

/// Strip a leading `1.2.3 `-style numeric prefix from a stored subsection
/// title.
///
/// Display numbering is always regenerated from structural position, so a
/// prefix baked into the stored title must not survive. The prefix is only
/// removed when it is digits (optionally dot-separated) followed by
/// whitespace; a bare number with no following text is left alone.
///
/// # Examples
///
/// ```
/// assert_eq!(folio::text::strip_numeric_prefix("2.7 Overview"), "Overview");
/// assert_eq!(folio::text::strip_numeric_prefix("Overview"), "Overview");
/// assert_eq!(folio::text::strip_numeric_prefix("1.2"), "1.2");
/// ```
pub fn strip_numeric_prefix(title: &str) -> &str {
    let title = title.trim();
    let bytes = title.as_bytes();
    let mut i = 0;

    loop {
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            // no digits where a group was expected
            return title;
        }
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            continue;
        }
        break;
    }

    // the prefix must be terminated by whitespace to count
    let rest = &title[i..];
    let stripped = rest.trim_start();
    if stripped.len() < rest.len() && !stripped.is_empty() {
        stripped
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_word_count_blank() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \t\n "), 0);
        assert_eq!(word_count("word"), 1);
    }

    #[test]
    fn test_chunk_words_exact_boundary() {
        let chunks = chunk_words("a b c d", 2);
        assert_eq!(chunks, vec!["a b", "c d"]);
    }

    #[test]
    fn test_chunk_words_remainder() {
        let chunks = chunk_words("a b c d e", 2);
        assert_eq!(chunks, vec!["a b", "c d", "e"]);
    }

    #[test]
    fn test_chunk_words_blank_is_empty() {
        assert!(chunk_words("", 10).is_empty());
        assert!(chunk_words("   ", 10).is_empty());
    }

    #[test]
    fn test_strip_numeric_prefix_variants() {
        assert_eq!(strip_numeric_prefix("1 Intro"), "Intro");
        assert_eq!(strip_numeric_prefix("1.1 Intro"), "Intro");
        assert_eq!(strip_numeric_prefix("10.2.3  Deep Title"), "Deep Title");
        assert_eq!(strip_numeric_prefix("No Prefix"), "No Prefix");
        assert_eq!(strip_numeric_prefix("3D Modeling"), "3D Modeling");
        assert_eq!(strip_numeric_prefix("1."), "1.");
        assert_eq!(strip_numeric_prefix("2.7 "), "2.7");
    }

    proptest! {
        #[test]
        fn prop_word_count_zero_iff_blank(s in "\\PC*") {
            let blank = s.chars().all(char::is_whitespace);
            prop_assert_eq!(word_count(&s) == 0, blank);
        }

        #[test]
        fn prop_chunking_is_lossless(
            s in "\\PC*",
            n in 1usize..40,
        ) {
            let joined = chunk_words(&s, n).join(" ");
            let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
            prop_assert_eq!(joined, normalized);
        }

        #[test]
        fn prop_chunks_respect_budget(
            s in "\\PC*",
            n in 1usize..40,
        ) {
            for chunk in chunk_words(&s, n) {
                prop_assert!(word_count(&chunk) <= n);
                prop_assert!(word_count(&chunk) > 0);
            }
        }
    }
}
