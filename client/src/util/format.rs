//! Bot reply formatting: fenced code blocks vs. paragraph lines.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const CODE_FENCE: &str = "```";

/// One renderable piece of a bot reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Paragraph(String),
    Code(String),
}

/// Split a bot reply into paragraphs and code blocks.
///
/// Text between matched fences becomes a trimmed [`Segment::Code`]. Everything
/// else is split into lines; blank lines are dropped and each remaining line is
/// its own [`Segment::Paragraph`]. With an odd number of fences the trailing
/// unmatched piece is treated as text.
pub fn format_message(text: &str) -> Vec<Segment> {
    let blocks: Vec<&str> = text.split(CODE_FENCE).collect();
    let unmatched_tail = blocks.len() % 2 == 0;
    let last = blocks.len() - 1;

    let mut out = Vec::new();
    for (index, block) in blocks.into_iter().enumerate() {
        let is_code = index % 2 == 1 && !(unmatched_tail && index == last);
        if is_code {
            out.push(Segment::Code(block.trim().to_owned()));
            continue;
        }
        out.extend(
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| Segment::Paragraph(line.to_owned())),
        );
    }
    out
}
