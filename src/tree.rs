use crate::htmlstring::HtmlString;
use crate::node::{Element, Node};
use crate::token::Token;

/// Elements that never have content or a closing tag, and are therefore
/// never pushed onto the open-elements stack.
const VOID_ELEMENTS: &[&[u8]] = &[
    b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
    b"source", b"track", b"wbr",
];

fn is_void_element(name: &[u8]) -> bool {
    VOID_ELEMENTS.iter().any(|void| *void == name)
}

/// Turns a [`Token`] sequence into a single root [`Element`].
///
/// This is a deliberately shallow stack-discipline tree builder: no
/// insertion modes, no element scopes, no reconstruction of active
/// formatting elements. Mismatched end tags are ignored rather than
/// recovered from structurally.
pub struct TreeBuilder {
    open_elements: Vec<Element>,
    text: Vec<u8>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        TreeBuilder {
            open_elements: vec![Element::new(HtmlString(b"root".to_vec()))],
            text: Vec::new(),
        }
    }
}

impl TreeBuilder {
    /// Consume a token sequence and return the root element.
    #[must_use]
    pub fn build(tokens: Vec<Token>) -> Element {
        let mut builder = TreeBuilder::default();
        for token in tokens {
            builder.process(token);
        }
        builder.flush_text();
        while builder.open_elements.len() > 1 {
            let finished = builder.open_elements.pop().expect("checked non-empty above");
            builder.top_mut().children.push(Node::Element(finished));
        }
        builder.open_elements.pop().expect("root always present")
    }

    fn top_mut(&mut self) -> &mut Element {
        self.open_elements.last_mut().expect("root always present")
    }

    fn top(&self) -> &Element {
        self.open_elements.last().expect("root always present")
    }

    /// Append any buffered text to the current top element's children,
    /// unless `head` is open — in which case the buffer is dropped
    /// unconditionally rather than just its whitespace, a stronger rule than
    /// the real HTML spec's head-section suppression.
    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let buffered = std::mem::take(&mut self.text);
        if self.top().name != b"head" {
            self.top_mut()
                .children
                .push(Node::Text(HtmlString(buffered)));
        }
    }

    fn process(&mut self, token: Token) {
        match token {
            Token::StartTag(tag) => {
                self.flush_text();
                let mut element = Element::new(tag.name.clone());
                for (name, value) in tag.attributes {
                    element.attributes.insert(name, value);
                }
                let void = is_void_element(&tag.name);
                if tag.self_closing || void {
                    self.top_mut().children.push(Node::Element(element));
                } else {
                    self.open_elements.push(element);
                }
            }
            Token::EndTag(tag) => {
                self.flush_text();
                if self.open_elements.len() > 1 && self.top().name == tag.name {
                    let finished = self
                        .open_elements
                        .pop()
                        .expect("just checked len > 1");
                    self.top_mut().children.push(Node::Element(finished));
                }
                // mismatched close: ignored, per the stack-discipline contract.
            }
            Token::Character(byte) => self.text.push(byte),
            Token::Doctype(_) => {
                self.flush_text();
                let doctype = Element::new(HtmlString(b"DOCTYPE".to_vec()));
                self.open_elements[0].children.push(Node::Element(doctype));
            }
            Token::Comment(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Doctype, EndTag, StartTag};

    fn tag(name: &str) -> StartTag {
        StartTag {
            name: HtmlString(name.as_bytes().to_vec()),
            attributes: Vec::new(),
            self_closing: false,
        }
    }

    fn close(name: &str) -> Token {
        Token::EndTag(EndTag {
            name: HtmlString(name.as_bytes().to_vec()),
        })
    }

    #[test]
    fn test_void_element_is_never_pushed() {
        let root = TreeBuilder::build(vec![
            Token::StartTag(tag("br")),
            Token::Character(b'x'),
        ]);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].as_element().unwrap().name, b"br".to_vec());
        assert_eq!(root.children[1].as_text().unwrap(), b"x".to_vec());
    }

    #[test]
    fn test_doctype_always_attaches_to_root_even_when_nested() {
        let root = TreeBuilder::build(vec![
            Token::StartTag(tag("html")),
            Token::Doctype(Doctype {
                name: HtmlString(b"html".to_vec()),
            }),
            close("html"),
        ]);
        assert_eq!(root.children.len(), 2);
        assert_eq!(
            root.children[0].as_element().unwrap().name,
            b"DOCTYPE".to_vec()
        );
        assert_eq!(root.children[1].as_element().unwrap().name, b"html".to_vec());
    }

    #[test]
    fn test_mismatched_end_tag_is_ignored_not_restructured() {
        let root = TreeBuilder::build(vec![
            Token::StartTag(tag("div")),
            close("span"),
            Token::Character(b'x'),
            close("div"),
        ]);
        assert_eq!(root.children.len(), 1);
        let div = root.children[0].as_element().unwrap();
        assert_eq!(div.children[0].as_text().unwrap(), b"x".to_vec());
    }

    #[test]
    fn test_text_buffered_while_head_open_is_discarded() {
        let root = TreeBuilder::build(vec![
            Token::StartTag(tag("head")),
            Token::Character(b'x'),
            close("head"),
        ]);
        let head = root.children[0].as_element().unwrap();
        assert!(head.children.is_empty());
    }

    #[test]
    fn test_duplicate_attribute_name_keeps_last_value() {
        let mut start = tag("a");
        start.attributes.push((HtmlString(b"href".to_vec()), HtmlString(b"1".to_vec())));
        start.attributes.push((HtmlString(b"href".to_vec()), HtmlString(b"2".to_vec())));
        let root = TreeBuilder::build(vec![Token::StartTag(start), close("a")]);
        let a = root.children[0].as_element().unwrap();
        assert_eq!(a.attributes.len(), 1);
        assert_eq!(a.attributes.get(b"href".as_slice()).unwrap(), b"2".as_slice());
    }

    #[test]
    fn test_unclosed_tag_remains_on_stack_and_attaches_at_end() {
        let root = TreeBuilder::build(vec![Token::StartTag(tag("div")), Token::Character(b'x')]);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].as_element().unwrap().name, b"div".to_vec());
    }
}
