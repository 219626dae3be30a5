use crate::htmlstring::HtmlString;

/// A HTML start tag, such as `<p>` or `<img src="x">`.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct StartTag {
    /// The tag's name, exactly as it appeared in the source — no case
    /// folding is performed.
    pub name: HtmlString,

    /// This tag's attributes, in source order. Duplicate names are kept at
    /// this layer; it's the tree constructor's job to resolve them
    /// last-wins.
    pub attributes: Vec<(HtmlString, HtmlString)>,

    /// Whether this tag was closed with `/>`. A self-closing tag is never
    /// pushed onto the tree constructor's open-elements stack.
    pub self_closing: bool,
}

/// A HTML end tag, such as `</p>`.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct EndTag {
    /// The tag's name, exactly as it appeared in the source.
    pub name: HtmlString,
}

/// A doctype declaration, such as `<!DOCTYPE html>`.
///
/// Only the root name survives tokenization; public/system identifier text
/// is read (to stay in sync with the cursor) and discarded.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Doctype {
    /// The doctype's root name, e.g. `html`.
    pub name: HtmlString,
}

/// A single token produced by the [`crate::Tokenizer`] and consumed, in
/// order, by the [`crate::TreeBuilder`].
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Token {
    /// An opening tag.
    StartTag(StartTag),
    /// A closing tag.
    EndTag(EndTag),
    /// A single byte of body text.
    Character(u8),
    /// A doctype declaration.
    Doctype(Doctype),
    /// A comment body, with the delimiters stripped.
    Comment(HtmlString),
}

impl Token {
    pub(crate) fn as_start_tag_mut(&mut self) -> &mut StartTag {
        match self {
            Token::StartTag(tag) => tag,
            _ => panic!("current token is not a start tag"),
        }
    }

    pub(crate) fn as_doctype_mut(&mut self) -> &mut Doctype {
        match self {
            Token::Doctype(doctype) => doctype,
            _ => panic!("current token is not a doctype"),
        }
    }

    pub(crate) fn as_comment_mut(&mut self) -> &mut HtmlString {
        match self {
            Token::Comment(body) => body,
            _ => panic!("current token is not a comment"),
        }
    }
}
