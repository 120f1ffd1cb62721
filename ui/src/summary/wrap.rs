//! Greedy word-wrap against a caller-supplied width measure.

/// Wrap `text` to `max_width` using `measure` for pixel widths.
///
/// Explicit newlines are honored as hard breaks first; each resulting line is
/// then filled greedily, joining words with single spaces while the measured
/// candidate still fits. A word that alone exceeds `max_width` is placed on
/// its own line rather than broken mid-word, so the wrapper always advances.
pub fn wrap<F>(text: &str, measure: F, max_width: f32) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();

    for hard_line in text.split('\n') {
        let mut current = String::new();

        for word in hard_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ten pixels per character keeps the arithmetic easy to eyeball.
    fn char_width(text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(wrap("", char_width, 100.0).is_empty());
        assert!(wrap("   \n  ", char_width, 100.0).is_empty());
    }

    #[test]
    fn words_fill_greedily() {
        let lines = wrap("one two three four", char_width, 80.0);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn explicit_newlines_break_first() {
        let lines = wrap("a b\nc d", char_width, 1000.0);
        assert_eq!(lines, vec!["a b", "c d"]);
    }

    #[test]
    fn oversized_word_is_placed_alone_without_looping() {
        let lines = wrap("tiny absolutelyenormousword end", char_width, 60.0);
        assert_eq!(lines, vec!["tiny", "absolutelyenormousword", "end"]);
    }

    #[test]
    fn round_trip_preserves_word_order() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        for width in [40.0, 70.0, 120.0, 500.0] {
            let lines = wrap(text, char_width, width);
            let rejoined = lines.join(" ");
            let original: Vec<&str> = text.split_whitespace().collect();
            let reflowed: Vec<&str> = rejoined.split_whitespace().collect();
            assert_eq!(original, reflowed, "width {width}");
        }
    }
}
