//! Code block masking
//!
//! Scrapbox marks a code block with a `code:<label>` line followed by the body, indented by at
//! least one space or tab:
//!
//! ```text
//! code:js
//!  let x = 1;
//!  let y = 2;
//! ```
//!
//! The per-line rules would happily turn that body into list items, so before any rule runs the
//! page is split into [`Line`]s where every block becomes a single [`Line::Code`] entry. The
//! body never goes back into the text stream: the rewriter only ever sees [`Line::Text`], and
//! [`CodeBlock::to_markdown`] unfolds each block into a fenced block when the lines are joined.
//!
//! Nothing is written into the page to mark a block, so no input character can be mistaken
//! for a folded line break.

use crate::lines::split_lines;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Markdown fence opening and closing a code block
pub const FENCE: &str = "```";

// The marker line is only matched when a `\n` follows it, so CRLF documents keep their
// `code:` lines as plain text.
static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)^code:([^\r\n]+)((?:\n[ \t][^\r\n]*)+)").expect("code block pattern")
});

/// One logical line of a page once code blocks are masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Ordinary text, subject to the rewrite rules
    Text(&'a str),
    /// A whole `code:<label>` block, occupying a single line slot
    Code(CodeBlock<'a>),
}

/// A `code:<label>` block as found in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    label: &'a str,
    // The captured run of `\n<indent><line>` segments.
    body: &'a str,
}

impl<'a> CodeBlock<'a> {
    /// Everything after `code:` on the marker line, used as the fence info string.
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Body lines with exactly one leading space or tab removed.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.body.split('\n').skip(1).map(dedent_once)
    }

    /// Renders the block as a fenced Markdown code block.
    pub fn to_markdown(&self) -> String {
        let mut fenced = String::with_capacity(self.label.len() + self.body.len() + 8);
        fenced.push_str(FENCE);
        fenced.push_str(self.label);
        for line in self.lines() {
            fenced.push('\n');
            fenced.push_str(line);
        }
        fenced.push('\n');
        fenced.push_str(FENCE);
        fenced
    }
}

/// Splits a page into lines, folding every `code:<label>` block into one [`Line::Code`].
///
/// Blocks are matched left to right, greedily, and never overlap. Text outside of them is split
/// on `\r\n`, `\r` or `\n` exactly like [`split_lines`], so a page without code blocks yields
/// one [`Line::Text`] per line.
pub fn mask_code_blocks(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut last = 0;
    let mut blocks = 0usize;

    for caps in CODE_BLOCK.captures_iter(text) {
        let (Some(whole), Some(label), Some(body)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        push_text(&mut lines, &text[last..whole.start()], blocks > 0, true);
        lines.push(Line::Code(CodeBlock {
            label: label.as_str(),
            body: body.as_str(),
        }));
        last = whole.end();
        blocks += 1;
    }
    push_text(&mut lines, &text[last..], blocks > 0, false);

    debug!(blocks, "masked code blocks");
    lines
}

/// Pushes the lines of the text between blocks.
///
/// A block always starts a line and ends right before a terminator (or the end of the page), so
/// the gap before a block ends in the break that block's line owns, and the gap after it starts
/// with one. Those two edges are empty pieces of the split and are dropped.
fn push_text<'a>(lines: &mut Vec<Line<'a>>, gap: &'a str, after_block: bool, before_block: bool) {
    let mut pieces = split_lines(gap);
    if before_block {
        pieces.pop();
    }
    let skip = usize::from(after_block);
    lines.extend(pieces.into_iter().skip(skip).map(Line::Text));
}

fn dedent_once(line: &str) -> &str {
    line.strip_prefix([' ', '\t']).unwrap_or(line)
}
