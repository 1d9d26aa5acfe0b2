//! Structural checks on the produced Markdown
//!
//! The converted text is parsed back with comrak to make sure the rewrites land on real
//! CommonMark constructs rather than just looking right as strings.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use sb2md::convert;

/// Helper to convert Scrapbox source to Markdown and parse to Comrak AST
fn scrapbox_to_comrak_ast<'a>(source: &str, arena: &'a Arena<AstNode<'a>>) -> &'a AstNode<'a> {
    let md = convert(source);
    let options = ComrakOptions::default();
    parse_document(arena, &md, &options)
}

fn headings<'a>(root: &'a AstNode<'a>) -> Vec<u8> {
    root.descendants()
        .filter_map(|node| match &node.data.borrow().value {
            NodeValue::Heading(heading) => Some(heading.level),
            _ => None,
        })
        .collect()
}

fn count<'a>(root: &'a AstNode<'a>, pred: impl Fn(&NodeValue) -> bool) -> usize {
    root.descendants()
        .filter(|node| pred(&node.data.borrow().value))
        .count()
}

#[test]
fn test_headings() {
    let arena = Arena::new();
    let root = scrapbox_to_comrak_ast("Title\n[[Section]]\n\n[* Other]", &arena);
    assert_eq!(headings(root), vec![1, 2, 2]);
}

#[test]
fn test_nested_list() {
    let arena = Arena::new();
    let root = scrapbox_to_comrak_ast("Title\n one\n  two\n   three", &arena);

    let lists = count(root, |value| matches!(value, NodeValue::List(_)));
    let items = count(root, |value| matches!(value, NodeValue::Item(_)));
    assert_eq!(lists, 3);
    assert_eq!(items, 3);
}

#[test]
fn test_code_block() {
    let arena = Arena::new();
    let root = scrapbox_to_comrak_ast("Title\ncode:python\n print(1)\n print(2)", &arena);

    let blocks: Vec<_> = root
        .descendants()
        .filter_map(|node| match &node.data.borrow().value {
            NodeValue::CodeBlock(block) => Some((block.info.clone(), block.literal.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        blocks,
        vec![("python".to_string(), "print(1)\nprint(2)\n".to_string())]
    );
}

#[test]
fn test_links_and_images() {
    let arena = Arena::new();
    let root = scrapbox_to_comrak_ast(
        "Title\n[docs https://example.com/docs]\n\n[https://gyazo.com/abc]",
        &arena,
    );

    let mut links = Vec::new();
    let mut images = Vec::new();
    for node in root.descendants() {
        match &node.data.borrow().value {
            NodeValue::Link(link) => links.push(link.url.clone()),
            NodeValue::Image(image) => images.push(image.url.clone()),
            _ => {}
        }
    }
    assert_eq!(links, vec!["https://example.com/docs"]);
    assert_eq!(images, vec!["https://gyazo.com/abc.png"]);
}

#[test]
fn test_emphasis() {
    let arena = Arena::new();
    let root = scrapbox_to_comrak_ast("Title\n[[strong]] and [/ soft] and [* loud]", &arena);

    let strong = count(root, |value| matches!(value, NodeValue::Strong));
    let emph = count(root, |value| matches!(value, NodeValue::Emph));
    assert_eq!(strong, 2);
    assert_eq!(emph, 1);
}
