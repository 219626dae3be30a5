#![deny(missing_docs)]
// This is an HTML parser. HTML can be untrusted input from the internet.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod htmlstring;
mod node;
mod reader;
/// The debug outline serializer, used by tests and `src/bin/tagsoup-dump.rs`.
pub mod serialize;
mod state;
mod token;
mod tokenizer;
mod tree;

pub use htmlstring::HtmlString;
pub use node::{Element, Node};
pub use state::State;
pub use token::{Doctype, EndTag, StartTag, Token};
pub use tokenizer::Tokenizer;
pub use tree::TreeBuilder;

/// Tokenize and tree-construct `input` in one call.
///
/// Equivalent to `TreeBuilder::build(Tokenizer::new(input).run())`, mirroring
/// the `parse()` free function the C++ implementation this crate's algorithm
/// is distilled from exposes as its single entry point.
#[must_use]
pub fn parse(input: &[u8]) -> Element {
    TreeBuilder::build(Tokenizer::new(input).run())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let root = parse(b"");
        assert_eq!(root.name, b"root".to_vec());
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_plain_text_only() {
        let root = parse(b"hello");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].as_text().unwrap(), b"hello".to_vec());
    }

    #[test]
    fn test_simple_element_with_text() {
        let root = parse(b"<p>hi</p>");
        assert_eq!(root.children.len(), 1);
        let p = root.children[0].as_element().unwrap();
        assert_eq!(p.name, b"p".to_vec());
        assert_eq!(p.children.len(), 1);
        assert_eq!(p.children[0].as_text().unwrap(), b"hi".to_vec());
    }

    #[test]
    fn test_void_elements_and_attributes() {
        let root = parse(b"<br><img src=\"x\">end");
        assert_eq!(root.children.len(), 3);
        let br = root.children[0].as_element().unwrap();
        assert_eq!(br.name, b"br".to_vec());
        assert!(br.children.is_empty());
        let img = root.children[1].as_element().unwrap();
        assert_eq!(img.name, b"img".to_vec());
        assert_eq!(img.attributes.get(b"src".as_slice()).unwrap(), b"x".as_slice());
        assert_eq!(
            root.children[2].as_text().unwrap(),
            b"end".to_vec()
        );
    }

    #[test]
    fn test_doctype_is_root_attached() {
        let root = parse(b"<!DOCTYPE html><html><body>ok</body></html>");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].as_element().unwrap().name, b"DOCTYPE".to_vec());
        let html = root.children[1].as_element().unwrap();
        assert_eq!(html.name, b"html".to_vec());
        let body = html.children[0].as_element().unwrap();
        assert_eq!(body.name, b"body".to_vec());
        assert_eq!(body.children[0].as_text().unwrap(), b"ok".to_vec());
    }

    #[test]
    fn test_single_and_double_quoted_attributes() {
        let root = parse(b"<div class='a' id=\"b\">x<span>y</span></div>");
        let div = root.children[0].as_element().unwrap();
        assert_eq!(div.attributes.get(b"class".as_slice()).unwrap(), b"a".as_slice());
        assert_eq!(div.attributes.get(b"id".as_slice()).unwrap(), b"b".as_slice());
        assert_eq!(div.children[0].as_text().unwrap(), b"x".to_vec());
        let span = div.children[1].as_element().unwrap();
        assert_eq!(span.name, b"span".to_vec());
        assert_eq!(span.children[0].as_text().unwrap(), b"y".to_vec());
    }

    #[test]
    fn test_comment_is_ignored() {
        let root = parse(b"<!-- c <!-- d -->tail");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].as_text().unwrap(), b"tail".to_vec());
    }

    #[test]
    fn test_script_raw_text_not_parsed_as_markup() {
        let root = parse(b"<script>var x = \"</b>\";</script>after");
        assert_eq!(root.children.len(), 2);
        let script = root.children[0].as_element().unwrap();
        assert_eq!(script.name, b"script".to_vec());
        assert_eq!(
            script.children[0].as_text().unwrap(),
            b"var x = \"</b>\";".to_vec()
        );
        assert_eq!(root.children[1].as_text().unwrap(), b"after".to_vec());
    }

    #[test]
    fn test_duplicate_attribute_last_wins() {
        let root = parse(b"<a href=\"one\" href=\"two\">x</a>");
        let a = root.children[0].as_element().unwrap();
        assert_eq!(a.attributes.len(), 1);
        assert_eq!(a.attributes.get(b"href".as_slice()).unwrap(), b"two".as_slice());
    }

    #[test]
    fn test_mismatched_end_tag_is_ignored() {
        let root = parse(b"<div>x</span></div>y");
        let div = root.children[0].as_element().unwrap();
        assert_eq!(div.children[0].as_text().unwrap(), b"x".to_vec());
        assert_eq!(root.children[1].as_text().unwrap(), b"y".to_vec());
    }

    #[test]
    fn test_unclosed_element_stays_in_tree() {
        let root = parse(b"<div>x");
        assert_eq!(root.children.len(), 1);
        let div = root.children[0].as_element().unwrap();
        assert_eq!(div.children[0].as_text().unwrap(), b"x".to_vec());
    }

    #[test]
    fn test_text_inside_head_is_discarded() {
        let root = parse(b"<head>ignored</head><body>kept</body>");
        let head = root.children[0].as_element().unwrap();
        assert!(head.children.is_empty());
        let body = root.children[1].as_element().unwrap();
        assert_eq!(body.children[0].as_text().unwrap(), b"kept".to_vec());
    }

    #[test]
    #[should_panic(expected = "unimplemented tokenizer transition")]
    fn test_unimplemented_transition_panics() {
        parse(b"<?xml?>");
    }
}
