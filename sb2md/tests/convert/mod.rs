//! Conversion tests
//!
//! End to end Scrapbox → Markdown checks through the public `convert` entry points.

mod document;
mod markdown;
mod properties;
