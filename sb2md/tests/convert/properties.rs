use proptest::prelude::*;
use sb2md::convert;

proptest! {
    #[test]
    fn first_line_becomes_heading(
        first in "[a-zA-Z0-9 :/.*\\[\\]]{0,40}",
        rest in "[ -~\n]{0,200}",
    ) {
        // A page opening with a code block folds its title line into the fence.
        prop_assume!(!first.starts_with("code:"));

        let markdown = convert(&format!("{first}\n{rest}"));
        let title = markdown.split('\n').next().unwrap_or_default();
        prop_assert_eq!(title, format!("# {first}"));
    }

    #[test]
    fn plain_paragraphs_are_fixed_points(line in "[a-zA-Z0-9,.][a-zA-Z0-9 ,.]{0,60}") {
        let markdown = convert(&format!("Title\n{line}"));
        prop_assert_eq!(markdown, format!("# Title\n{line}"));
    }

    #[test]
    fn line_count_is_preserved_without_code_blocks(text in "[ -~\n\u{F8FF}]{0,200}") {
        prop_assume!(!text.contains("code:"));

        let markdown = convert(&text);
        prop_assert_eq!(markdown.split('\n').count(), text.split('\n').count());
    }
}
