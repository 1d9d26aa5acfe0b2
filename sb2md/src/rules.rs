//! Per-line rewrite rules
//!
//! Every line except the first one (which is always the page title) runs through [`RULES`] in
//! order, each rule seeing the output of the previous one. A rule either covers the whole line
//! ([`Scope::WholeLine`], anchored at both ends and rewritten at most once) or rewrites every
//! occurrence inside it ([`Scope::Inline`]).
//!
//! # Rule Table
//!
//! | Name            | Scope      | Scrapbox                     | Markdown                  |
//! |-----------------|------------|------------------------------|---------------------------|
//! | heading         | whole line | `[[Title]]`                  | `## Title`                |
//! | heading-star    | whole line | `[* Title]`                  | `## Title`                |
//! | link-text-url   | inline     | `[text https://url]`         | `[text](https://url)`     |
//! | link-url-text   | inline     | `[https://url text]`         | `[text](https://url)`     |
//! | image           | whole line | `[https://host/a.png]`       | `![](https://host/a.png)` |
//! | image-gyazo     | whole line | `[https://gyazo.com/id]`     | `![](https://gyazo.com/id.png)` |
//! | list-item       | whole line | one to three leading blanks  | `- `, `  - `, `    - `    |
//! | bold            | inline     | `[[text]]`                   | `**text**`                |
//! | bold-star       | inline     | `[* text]`                   | `**text**`                |
//! | italic          | inline     | `[/ text]`                   | `*text*`                  |
//!
//! Whole line rules come first so that a line made only of `[[Title]]` becomes a heading rather
//! than a bold paragraph.
//!
//! # List Nesting
//!
//! A line indented by 1..=[`ConvertOptions::max_list_depth`] spaces or tabs and followed by a
//! non blank character is a list item. Deeper lines are left exactly as they are: with the
//! default depth of 3, a line indented by four spaces is not rewritten at all.
//!
//! Lines starting with a fence are never rewritten, see [`crate::code_block`].

use crate::code_block::FENCE;
use crate::options::ConvertOptions;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

/// Where a rule looks for its pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The pattern must span the entire line
    WholeLine,
    /// Every non-overlapping occurrence is rewritten
    Inline,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::WholeLine => "whole-line",
            Scope::Inline => "inline",
        }
    }
}

enum Rewrite {
    Pattern {
        regex: Regex,
        replacement: &'static str,
    },
    ListItem,
}

/// A single named rewrite rule
pub struct Rule {
    pub name: &'static str,
    pub scope: Scope,
    pub description: &'static str,
    rewrite: Rewrite,
}

impl Rule {
    fn pattern(
        name: &'static str,
        scope: Scope,
        description: &'static str,
        pattern: &str,
        replacement: &'static str,
    ) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|err| panic!("rule '{name}' has an invalid pattern: {err}"));
        Rule {
            name,
            scope,
            description,
            rewrite: Rewrite::Pattern { regex, replacement },
        }
    }

    fn list_item(name: &'static str, description: &'static str) -> Self {
        Rule {
            name,
            scope: Scope::WholeLine,
            description,
            rewrite: Rewrite::ListItem,
        }
    }

    /// Applies the rule to a line.
    ///
    /// Returns the line borrowed when the rule does not match.
    pub fn apply<'a>(&self, line: &'a str, options: &ConvertOptions) -> Cow<'a, str> {
        match &self.rewrite {
            Rewrite::Pattern { regex, replacement } => match self.scope {
                Scope::WholeLine => regex.replace(line, *replacement),
                Scope::Inline => regex.replace_all(line, *replacement),
            },
            Rewrite::ListItem => list_item(line, options),
        }
    }
}

/// The ordered rule set applied to every line after the title.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::pattern(
            "heading",
            Scope::WholeLine,
            "[[Title]] alone on a line becomes ## Title",
            r"^\[\[([^\[\]]+)\]\]$",
            "## ${1}",
        ),
        Rule::pattern(
            "heading-star",
            Scope::WholeLine,
            "[* Title] alone on a line becomes ## Title",
            r"^\[\*\s+(\S[^\[\]]*)\]$",
            "## ${1}",
        ),
        Rule::pattern(
            "link-text-url",
            Scope::Inline,
            "[text https://url] becomes [text](https://url)",
            r"\[(\S.*)\s+(https?://\S+)\]",
            "[${1}](${2})",
        ),
        Rule::pattern(
            "link-url-text",
            Scope::Inline,
            "[https://url text] becomes [text](https://url)",
            r"\[(https?://\S+)\s+(\S.*)\]",
            "[${2}](${1})",
        ),
        Rule::pattern(
            "image",
            Scope::WholeLine,
            "[url.png|gif|jpg|jpeg] alone on a line becomes ![](url)",
            r"^\[(https?://\S+\.(?:png|gif|jpe?g))\]$",
            "![](${1})",
        ),
        Rule::pattern(
            "image-gyazo",
            Scope::WholeLine,
            "[https://gyazo.com/id] alone on a line becomes ![](https://gyazo.com/id.png)",
            r"^\[(https://gyazo\.com/\S+)\]$",
            "![](${1}.png)",
        ),
        Rule::list_item("list-item", "indented line becomes a nested list item"),
        Rule::pattern(
            "bold",
            Scope::Inline,
            "[[text]] becomes **text**",
            r"\[\[([^\[\]]+)\]\]",
            "**${1}**",
        ),
        Rule::pattern(
            "bold-star",
            Scope::Inline,
            "[* text] becomes **text**",
            r"\[\*\s+([^\[\]]+)\]",
            "**${1}**",
        ),
        Rule::pattern(
            "italic",
            Scope::Inline,
            "[/ text] becomes *text*",
            r"\[/\s+([^\[\]]+)\]",
            "*${1}*",
        ),
    ]
});

/// Whether the line opens a Markdown fence; such lines are never rewritten.
pub fn is_fenced(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Runs a single line through [`RULES`].
pub fn rewrite_line(line: &str, options: &ConvertOptions) -> String {
    if is_fenced(line) {
        return line.to_string();
    }

    RULES.iter().fold(line.to_string(), |current, rule| {
        let rewritten = match rule.apply(&current, options) {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        match rewritten {
            Some(next) => {
                trace!(rule = rule.name, line = %next, "rewrote line");
                next
            }
            None => current,
        }
    })
}

fn list_item<'a>(line: &'a str, options: &ConvertOptions) -> Cow<'a, str> {
    let depth = line
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    if depth == 0 || depth > options.max_list_depth {
        return Cow::Borrowed(line);
    }

    let rest = &line[depth..];
    match rest.chars().next() {
        Some(first) if !first.is_whitespace() => Cow::Owned(format!(
            "{}- {rest}",
            options.list_indent.repeat(depth - 1)
        )),
        _ => Cow::Borrowed(line),
    }
}
