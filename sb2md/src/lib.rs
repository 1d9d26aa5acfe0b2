//! Scrapbox to Markdown conversion
//!
//!     This crate converts pages written in Scrapbox notation into Markdown text. It is a pure
//!     lib: it powers the sb2md cli but is shell agnostic, no code here reads stdin, prints or
//!     looks at env vars.
//!
//! Architecture
//!
//!     There is no AST. Scrapbox notation is line oriented, so the conversion is a small pipeline
//!     of text passes:
//!
//!         raw text
//!           → mask code blocks, split into lines  (./code_block.rs, ./lines.rs)
//!           → first line as heading, rewrite every other text line (./rules.rs)
//!           → render code blocks as fences        (./code_block.rs)
//!           → join with '\n'
//!
//!     The code block pass exists so that the line oriented rules never see the body of a code
//!     block: every `code:<lang>` block takes a single line slot of its own ([`Line::Code`]) and
//!     only text lines go through the rule set. The block body is kept out of band, never
//!     folded into the page text, so there is no placeholder that page content could collide
//!     with.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── options.rs              # ConvertOptions (list nesting knobs)
//!     ├── code_block.rs           # code:<lang> masking and fenced rendering
//!     ├── lines.rs                # line splitting
//!     ├── rules.rs                # ordered per-line rewrite rules
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── convert
//!     │   └── <topic>.rs
//!     └── fixtures
//!         └── <page>.sb
//!
//!     As with any rust crate, subdirectory tests are wired in through tests/lib.rs.
//!
//! Rule Ordering
//!
//!     The rules are applied in a fixed order and each one sees the output of the previous one.
//!     Whole line rules (headings, image blocks) come before the inline rules that match the same
//!     brackets, so that `[[Title]]` alone on a line becomes a heading while `[[Title]]` inside a
//!     sentence becomes bold text. See [`rules::RULES`] for the table.
//!
pub mod code_block;
pub mod error;
pub mod lines;
pub mod options;
pub mod rules;

pub use code_block::Line;
pub use error::ConvertError;
pub use options::ConvertOptions;

use tracing::debug;

/// Converts a Scrapbox page into Markdown using the default options.
///
/// The first line always becomes a level 1 heading, code blocks become fenced blocks and every
/// other line runs through [`rules::RULES`]. Lines no rule matches pass through unchanged.
pub fn convert(text: &str) -> String {
    convert_with(text, &ConvertOptions::default())
}

/// Converts a Scrapbox page into Markdown.
///
/// Options are taken as given; callers building them from user input should run
/// [`ConvertOptions::validate`] first.
pub fn convert_with(text: &str, options: &ConvertOptions) -> String {
    let lines = code_block::mask_code_blocks(text);
    debug!(lines = lines.len(), "rewriting lines");

    let mut rewritten = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let markdown = match line {
            Line::Code(block) if index == 0 => format!("# {}", block.to_markdown()),
            Line::Code(block) => block.to_markdown(),
            Line::Text(title) if index == 0 => format!("# {title}"),
            Line::Text(text) => rules::rewrite_line(text, options),
        };
        rewritten.push(markdown);
    }

    rewritten.join("\n")
}
