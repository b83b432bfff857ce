use super::*;

fn p(text: &str) -> Segment {
    Segment::Paragraph(text.to_owned())
}

fn code(text: &str) -> Segment {
    Segment::Code(text.to_owned())
}

#[test]
fn inline_fence_yields_three_segments() {
    assert_eq!(
        format_message("intro ```code``` outro"),
        vec![p("intro"), code("code"), p("outro")]
    );
}

#[test]
fn empty_text_yields_nothing() {
    assert!(format_message("").is_empty());
}

#[test]
fn blank_lines_are_dropped_and_lines_split() {
    assert_eq!(
        format_message("first line\n\n   \nsecond line\n"),
        vec![p("first line"), p("second line")]
    );
}

#[test]
fn code_block_keeps_inner_newlines_and_language_tag() {
    let text = "Here:\n```rust\nfn main() {\n    run();\n}\n```\nDone.";
    assert_eq!(
        format_message(text),
        vec![p("Here:"), code("rust\nfn main() {\n    run();\n}"), p("Done.")]
    );
}

#[test]
fn odd_fence_count_treats_tail_as_text() {
    assert_eq!(
        format_message("a ```b``` c ```d\ne"),
        vec![p("a"), code("b"), p("c"), p("d"), p("e")]
    );
}

#[test]
fn single_unmatched_fence_is_all_text() {
    assert_eq!(format_message("before ```after"), vec![p("before"), p("after")]);
}

#[test]
fn adjacent_blocks_alternate() {
    assert_eq!(
        format_message("```one```between```two```"),
        vec![code("one"), p("between"), code("two")]
    );
}
