use std::fmt::Write as _;

use crate::node::{Element, Node};

/// Render `node` as the crate's debug outline: one line per node, `2 *
/// depth` leading spaces, `- ` prefix, elements as `tagname attr="v"` and
/// text as a quoted, escaped string.
///
/// This format has no documented stability contract of its own — attribute
/// order follows the element's `BTreeMap` (sorted by name, not source
/// order). It exists for tests and the CLI, not as a serialization format
/// callers should parse.
#[must_use]
pub fn dump(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Element(element) => {
            write_element_line(out, element, &indent);
            for child in &element.children {
                write_node(out, child, depth + 2);
            }
        }
        Node::Text(text) => {
            writeln!(out, "{indent}- \"{}\"", escape(text)).expect("writing to String can't fail");
        }
    }
}

fn write_element_line(out: &mut String, element: &Element, indent: &str) {
    write!(out, "{indent}- {}", escape(&element.name)).expect("writing to String can't fail");
    for (name, value) in &element.attributes {
        write!(out, " {}=\"{}\"", escape(name), escape(value))
            .expect("writing to String can't fail");
    }
    out.push('\n');
}

/// Escape `\n` and `"` so the debug outline stays one node per line and
/// attribute values stay unambiguous.
fn escape(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'\n' => out.push_str("\\n"),
            b'"' => out.push_str("\\\""),
            _ => out.push(byte as char),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::htmlstring::HtmlString;

    #[test]
    fn test_escapes_newline_and_quote() {
        assert_eq!(escape(b"a\nb\"c"), "a\\nb\\\"c");
    }

    #[test]
    fn test_dump_text_node() {
        let node = Node::Text(HtmlString(b"hi".to_vec()));
        assert_eq!(dump(&node), "- \"hi\"\n");
    }

    #[test]
    fn test_dump_element_with_child() {
        let mut child = Element::new(HtmlString(b"p".to_vec()));
        child.children.push(Node::Text(HtmlString(b"hi".to_vec())));
        let mut root = Element::new(HtmlString(b"root".to_vec()));
        root.children.push(Node::Element(child));
        assert_eq!(dump(&Node::Element(root)), "- root\n    - p\n        - \"hi\"\n");
    }
}
