//! Whole page conversion, checked against an inline snapshot.

use insta::assert_snapshot;
use sb2md::convert;

const SAMPLE_PAGE: &str = include_str!("../fixtures/sample-page.sb");

#[test]
fn test_sample_page() {
    let markdown = convert(SAMPLE_PAGE);
    assert_snapshot!(markdown, @r#"
    # Weekly notes
    ## Overview
    This week we shipped **sb2md** and wrote *a lot* of notes.
    ## Links
    - [Project page](https://example.com/sb2md)
    - [Documentation](https://example.com/docs)
      - **nested** detail
        - third level
        fourth level stays as is
    ![](https://gyazo.com/0123abcd.png)
    ![](https://example.com/diagram.png)
    ```rust
    fn main() {
        println!("hi");
    }
    ```
    Done.
    "#);
}

#[test]
fn test_sample_page_keeps_trailing_newline_as_empty_line() {
    let markdown = convert(SAMPLE_PAGE);
    assert!(markdown.ends_with("```\nDone.\n"));
}

#[test]
fn test_whole_line_versus_inline_brackets() {
    assert_eq!(convert("Page\n[[Title]]"), "# Page\n## Title");
    assert_eq!(
        convert("Page\nThis is [[Title]] mid-sentence"),
        "# Page\nThis is **Title** mid-sentence"
    );
}

#[test]
fn test_links_both_orders() {
    assert_eq!(
        convert("Page\n[Click here https://example.com]"),
        "# Page\n[Click here](https://example.com)"
    );
    assert_eq!(
        convert("Page\n[https://example.com Click here]"),
        "# Page\n[Click here](https://example.com)"
    );
}

#[test]
fn test_gyazo_image() {
    assert_eq!(
        convert("Page\n[https://gyazo.com/abc123]"),
        "# Page\n![](https://gyazo.com/abc123.png)"
    );
}

#[test]
fn test_list_nesting_stops_at_three_levels() {
    let text = "Page\n one\n  two\n   three\n    four";
    assert_eq!(
        convert(text),
        "# Page\n- one\n  - two\n    - three\n    four"
    );
}

#[test]
fn test_crlf_document() {
    assert_eq!(
        convert("Page\r\n[[Title]]\r\n item"),
        "# Page\n## Title\n- item"
    );
}

#[test]
fn test_lone_carriage_returns() {
    assert_eq!(convert("Page\r[/ it]\r"), "# Page\n*it*\n");
}
