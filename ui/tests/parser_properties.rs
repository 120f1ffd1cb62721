//! Integration-level checks of the public parsing and wrapping API: every
//! well-formed `label SEP number` line survives, in order, and wrapped text
//! reflows without losing a word.

use ui::core::parse::{count_matching, parse};
use ui::summary::wrap::wrap;

#[test]
fn parse_keeps_exactly_the_well_formed_lines() {
    let raw = "국어: 15\n수학: 10\nㅋㅋㅋ\n사회, 20\n체육 30\n없음";
    let series = parse(raw);

    assert_eq!(series.len(), 4);
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["국어", "수학", "사회", "체육"]);
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    assert_eq!(values, [15.0, 10.0, 20.0, 30.0]);
}

#[test]
fn parse_twice_is_the_same_series() {
    let raw = "a: 1\nnoise line\nb, 2.5\nc 3";
    assert_eq!(parse(raw), parse(raw));
}

#[test]
fn counting_ignores_quotes_and_surrounding_space() {
    let data = " 돈까스 \n스파게티\n돈까스\n";
    assert_eq!(count_matching(data, "\"돈까스\""), 2);
}

#[test]
fn wrapped_words_rejoin_in_order_at_any_generous_width() {
    let text = "every great dish begins with honest ingredient prep and a patient chef";
    let widest_word = text
        .split_whitespace()
        .map(|word| word.chars().count() as f32 * 8.0)
        .fold(0.0f32, f32::max);

    let measure = |candidate: &str| candidate.chars().count() as f32 * 8.0;
    for width in [widest_word, widest_word + 40.0, 10_000.0] {
        let lines = wrap(text, measure, width);
        let rejoined = lines.join(" ");
        assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>(),
            "width {width}"
        );
    }
}
