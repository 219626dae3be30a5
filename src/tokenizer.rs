use crate::htmlstring::HtmlString;
use crate::reader::Reader;
use crate::state::State;
use crate::token::Token;

/// `true` for the three whitespace bytes this tokenizer recognizes.
///
/// This is narrower than the real HTML spec's whitespace set (no `\r`, no
/// form feed) — matching what the reference implementation this crate is
/// based on actually checks for.
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b' ')
}

fn is_ascii_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

macro_rules! unimplemented_transition {
    ($self:expr, $state:expr, $byte:expr) => {
        panic!(
            "unimplemented tokenizer transition: state {:?}, byte {:?} at byte offset {} ({}:{})",
            $state,
            $byte.map(|b: u8| b as char),
            $self.reader.pos(),
            file!(),
            line!(),
        )
    };
}

/// A deterministic, character-driven state machine that turns an input byte
/// slice into a sequence of [`Token`]s.
///
/// See the crate's top-level documentation for the states this tokenizer
/// implements and which transitions are deliberately left unimplemented
/// (and therefore panic).
pub struct Tokenizer<'a> {
    reader: Reader<'a>,
    state: State,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Build a tokenizer over `input`. No work happens until [`Tokenizer::run`]
    /// is called.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Tokenizer {
            reader: Reader::new(input),
            state: State::Data,
            tokens: Vec::new(),
        }
    }

    /// Run the state machine to completion and return the resulting tokens.
    ///
    /// If the state is not [`State::Data`] when the input is exhausted, any
    /// token under construction that hadn't yet been pushed onto the output
    /// is simply never started — whatever was already pushed stays as-is.
    /// This crate does not implement end-of-file transitions for states with
    /// non-trivial EOF rules (e.g. an unterminated comment just stops).
    #[must_use]
    pub fn run(mut self) -> Vec<Token> {
        while !self.reader.eof() {
            self.step();
        }
        self.tokens
    }

    fn current(&mut self) -> &mut Token {
        self.tokens.last_mut().expect("no current token")
    }

    fn push_character(&mut self, byte: u8) {
        self.tokens.push(Token::Character(byte));
    }

    fn begin_start_tag(&mut self) {
        self.tokens.push(Token::StartTag(Default::default()));
    }

    fn begin_end_tag(&mut self) {
        self.tokens.push(Token::EndTag(Default::default()));
    }

    fn begin_comment(&mut self) {
        self.tokens.push(Token::Comment(HtmlString::default()));
    }

    fn begin_doctype(&mut self) {
        self.tokens.push(Token::Doctype(Default::default()));
    }

    fn begin_attribute(&mut self) {
        self.current()
            .as_start_tag_mut()
            .attributes
            .push((HtmlString::default(), HtmlString::default()));
    }

    fn append_to_current_attribute_name(&mut self, byte: u8) {
        self.current()
            .as_start_tag_mut()
            .attributes
            .last_mut()
            .expect("no current attribute")
            .0
            .push(byte);
    }

    fn append_to_current_attribute_value(&mut self, byte: u8) {
        self.current()
            .as_start_tag_mut()
            .attributes
            .last_mut()
            .expect("no current attribute")
            .1
            .push(byte);
    }

    /// Enter `Data`, unless the tag just closed was a `<script>`/`<style>`
    /// start tag, in which case enter the matching raw-text state.
    ///
    /// This check is an exact byte match, not case-insensitive: the spec's
    /// case-handling rules call out only `DOCTYPE`, `PUBLIC`, `</script>`,
    /// and `</style>` as ASCII-case-insensitive, so `<SCRIPT>` does not
    /// trigger raw-text mode here.
    fn enter_data_or_raw_text(&mut self) {
        let name = match self.tokens.last() {
            Some(Token::StartTag(tag)) => Some(tag.name.clone()),
            _ => None,
        };
        self.state = match name {
            Some(name) if name == b"script" => State::ScriptData,
            Some(name) if name == b"style" => State::StyleData,
            _ => State::Data,
        };
    }

    fn step(&mut self) {
        if self.state == State::MarkupDeclarationOpen {
            self.step_markup_declaration_open();
            return;
        }
        if self.state == State::ScriptData {
            self.step_raw_text(b"</script>", State::ScriptData);
            return;
        }
        if self.state == State::StyleData {
            self.step_raw_text(b"</style>", State::StyleData);
            return;
        }

        let byte = self.reader.consume().expect("step called at EOF");
        match self.state {
            State::Data => self.step_data(byte),
            State::TagOpen => self.step_tag_open(byte),
            State::EndTagOpen => self.step_end_tag_open(byte),
            State::TagName => self.step_tag_name(byte),
            State::BeforeAttributeName => self.step_before_attribute_name(byte),
            State::AttributeName => self.step_attribute_name(byte),
            State::AfterAttributeName => self.step_after_attribute_name(byte),
            State::BeforeAttributeValue => self.step_before_attribute_value(byte),
            State::AttributeValueDoubleQuoted => {
                self.step_attribute_value_quoted(byte, b'"');
            }
            State::AttributeValueSingleQuoted => {
                self.step_attribute_value_quoted(byte, b'\'');
            }
            State::AttributeValueUnquoted => self.step_attribute_value_unquoted(byte),
            State::AfterAttributeValueQuoted => self.step_after_attribute_value_quoted(byte),
            State::SelfClosingStartTag => self.step_self_closing_start_tag(byte),
            State::CommentStart => self.step_comment_start(byte),
            State::CommentStartDash => self.step_comment_start_dash(byte),
            State::Comment => self.step_comment(byte),
            State::CommentLessThanSign => self.step_comment_less_than_sign(byte),
            State::CommentLessThanSignBang => self.step_comment_less_than_sign_bang(byte),
            State::CommentLessThanSignBangDash => {
                self.step_comment_less_than_sign_bang_dash(byte);
            }
            State::CommentLessThanSignBangDashDash => {
                self.step_comment_less_than_sign_bang_dash_dash(byte);
            }
            State::CommentEndDash => self.step_comment_end_dash(byte),
            State::CommentEnd => self.step_comment_end(byte),
            State::Doctype => self.step_doctype(byte),
            State::BeforeDoctypeName => self.step_before_doctype_name(byte),
            State::DoctypeName => self.step_doctype_name(byte),
            State::AfterDoctypeName => self.step_after_doctype_name(byte),
            State::AfterDoctypePublicKeyword => self.step_after_doctype_public_keyword(byte),
            State::BeforeDoctypePublicIdentifier => {
                self.step_before_doctype_public_identifier(byte);
            }
            State::DoctypePublicIdentifierDoubleQuoted => {
                self.step_doctype_public_identifier_double_quoted(byte);
            }
            State::AfterDoctypePublicIdentifier => {
                self.step_after_doctype_public_identifier(byte);
            }
            State::MarkupDeclarationOpen | State::ScriptData | State::StyleData => unreachable!(),
        }
    }

    fn step_data(&mut self, byte: u8) {
        if byte == b'<' {
            self.state = State::TagOpen;
        } else {
            self.push_character(byte);
        }
    }

    fn step_tag_open(&mut self, byte: u8) {
        match byte {
            b'!' => self.state = State::MarkupDeclarationOpen,
            b'/' => self.state = State::EndTagOpen,
            _ if is_ascii_letter(byte) => {
                self.begin_start_tag();
                self.reader.reconsume();
                self.state = State::TagName;
            }
            _ => unimplemented_transition!(self, State::TagOpen, Some(byte)),
        }
    }

    fn step_end_tag_open(&mut self, byte: u8) {
        if is_ascii_letter(byte) {
            self.begin_end_tag();
            self.reader.reconsume();
            self.state = State::TagName;
        } else {
            unimplemented_transition!(self, State::EndTagOpen, Some(byte));
        }
    }

    fn step_tag_name(&mut self, byte: u8) {
        match byte {
            b'>' => self.enter_data_or_raw_text(),
            b'/' => self.state = State::SelfClosingStartTag,
            _ if is_whitespace(byte) => self.state = State::BeforeAttributeName,
            _ => {
                let token = self.current();
                let name = match token {
                    Token::StartTag(tag) => &mut tag.name,
                    Token::EndTag(tag) => &mut tag.name,
                    _ => unreachable!("current token is a tag while in TagName"),
                };
                name.push(byte);
            }
        }
    }

    fn step_markup_declaration_open(&mut self) {
        let rest = self.reader.rest();
        if rest.len() >= 7 && rest[..7].eq_ignore_ascii_case(b"DOCTYPE") {
            self.reader.advance(7);
            self.state = State::Doctype;
        } else if rest.len() >= 2 && &rest[..2] == b"--" {
            self.reader.advance(2);
            self.begin_comment();
            self.state = State::CommentStart;
        } else {
            unimplemented_transition!(self, State::MarkupDeclarationOpen, self.reader.peek(0));
        }
    }

    fn step_doctype(&mut self, byte: u8) {
        if byte == b' ' {
            self.state = State::BeforeDoctypeName;
        } else {
            unimplemented_transition!(self, State::Doctype, Some(byte));
        }
    }

    fn step_before_doctype_name(&mut self, byte: u8) {
        if is_ascii_letter(byte) {
            self.begin_doctype();
            self.reader.reconsume();
            self.state = State::DoctypeName;
        } else {
            unimplemented_transition!(self, State::BeforeDoctypeName, Some(byte));
        }
    }

    fn step_doctype_name(&mut self, byte: u8) {
        if is_whitespace(byte) {
            self.state = State::AfterDoctypeName;
        } else if byte == b'>' {
            self.state = State::Data;
        } else {
            self.current().as_doctype_mut().name.push(byte);
        }
    }

    fn step_after_doctype_name(&mut self, byte: u8) {
        if is_whitespace(byte) {
            // ignored
        } else if byte == b'>' {
            self.state = State::Data;
        } else if self.reader.peek(-1).map_or(false, |b| b.eq_ignore_ascii_case(&b'P'))
            && self.reader.peek(0).map_or(false, |b| b.eq_ignore_ascii_case(&b'U'))
            && self.reader.peek(1).map_or(false, |b| b.eq_ignore_ascii_case(&b'B'))
            && self.reader.peek(2).map_or(false, |b| b.eq_ignore_ascii_case(&b'L'))
            && self.reader.peek(3).map_or(false, |b| b.eq_ignore_ascii_case(&b'I'))
            && self.reader.peek(4).map_or(false, |b| b.eq_ignore_ascii_case(&b'C'))
        {
            self.reader.advance(5);
            self.state = State::AfterDoctypePublicKeyword;
        } else {
            unimplemented_transition!(self, State::AfterDoctypeName, Some(byte));
        }
    }

    fn step_after_doctype_public_keyword(&mut self, byte: u8) {
        if is_whitespace(byte) {
            self.state = State::BeforeDoctypePublicIdentifier;
        } else {
            unimplemented_transition!(self, State::AfterDoctypePublicKeyword, Some(byte));
        }
    }

    fn step_before_doctype_public_identifier(&mut self, byte: u8) {
        if is_whitespace(byte) {
            // ignored
        } else if byte == b'"' {
            self.state = State::DoctypePublicIdentifierDoubleQuoted;
        } else {
            unimplemented_transition!(self, State::BeforeDoctypePublicIdentifier, Some(byte));
        }
    }

    fn step_doctype_public_identifier_double_quoted(&mut self, byte: u8) {
        if byte == b'"' {
            self.state = State::AfterDoctypePublicIdentifier;
        }
        // else: discarded, per the identifier-text-is-not-retained rule.
    }

    fn step_after_doctype_public_identifier(&mut self, byte: u8) {
        if byte == b'>' {
            self.state = State::Data;
        } else {
            unimplemented_transition!(self, State::AfterDoctypePublicIdentifier, Some(byte));
        }
    }

    fn step_before_attribute_name(&mut self, byte: u8) {
        match byte {
            _ if is_whitespace(byte) => {}
            b'/' | b'>' => {
                self.reader.reconsume();
                self.state = State::AfterAttributeName;
            }
            b'=' => unimplemented_transition!(self, State::BeforeAttributeName, Some(byte)),
            _ => {
                self.begin_attribute();
                self.reader.reconsume();
                self.state = State::AttributeName;
            }
        }
    }

    fn step_attribute_name(&mut self, byte: u8) {
        match byte {
            _ if is_whitespace(byte) || byte == b'/' || byte == b'>' => {
                self.reader.reconsume();
                self.state = State::AfterAttributeName;
            }
            b'=' => self.state = State::BeforeAttributeValue,
            b'"' | b'\'' | b'<' => {
                unimplemented_transition!(self, State::AttributeName, Some(byte));
            }
            _ => self.append_to_current_attribute_name(byte),
        }
    }

    fn step_after_attribute_name(&mut self, byte: u8) {
        match byte {
            _ if is_whitespace(byte) => {}
            b'=' => self.state = State::BeforeAttributeValue,
            b'/' => self.state = State::SelfClosingStartTag,
            b'>' => self.enter_data_or_raw_text(),
            _ => {
                self.begin_attribute();
                self.reader.reconsume();
                self.state = State::AttributeName;
            }
        }
    }

    fn step_before_attribute_value(&mut self, byte: u8) {
        match byte {
            _ if is_whitespace(byte) => {}
            b'"' => self.state = State::AttributeValueDoubleQuoted,
            b'\'' => self.state = State::AttributeValueSingleQuoted,
            b'>' => unimplemented_transition!(self, State::BeforeAttributeValue, Some(byte)),
            _ => {
                self.reader.reconsume();
                self.state = State::AttributeValueUnquoted;
            }
        }
    }

    fn step_attribute_value_quoted(&mut self, byte: u8, quote: u8) {
        if byte == quote {
            self.state = State::AfterAttributeValueQuoted;
        } else {
            self.append_to_current_attribute_value(byte);
        }
    }

    fn step_attribute_value_unquoted(&mut self, byte: u8) {
        if is_whitespace(byte) {
            self.state = State::BeforeAttributeName;
        } else if byte == b'>' {
            self.enter_data_or_raw_text();
        } else {
            self.append_to_current_attribute_value(byte);
        }
    }

    fn step_after_attribute_value_quoted(&mut self, byte: u8) {
        match byte {
            _ if is_whitespace(byte) => self.state = State::BeforeAttributeName,
            b'/' => self.state = State::SelfClosingStartTag,
            b'>' => self.enter_data_or_raw_text(),
            _ => unimplemented_transition!(self, State::AfterAttributeValueQuoted, Some(byte)),
        }
    }

    fn step_self_closing_start_tag(&mut self, byte: u8) {
        if byte == b'>' {
            self.current().as_start_tag_mut().self_closing = true;
            self.state = State::Data;
        } else {
            unimplemented_transition!(self, State::SelfClosingStartTag, Some(byte));
        }
    }

    fn step_comment_start(&mut self, byte: u8) {
        match byte {
            b'-' => self.state = State::CommentStartDash,
            b'>' => unimplemented_transition!(self, State::CommentStart, Some(byte)),
            _ => {
                self.reader.reconsume();
                self.state = State::Comment;
            }
        }
    }

    fn step_comment_start_dash(&mut self, byte: u8) {
        match byte {
            b'-' => self.state = State::CommentEnd,
            b'>' => unimplemented_transition!(self, State::CommentStartDash, Some(byte)),
            _ => {
                self.current().as_comment_mut().push(b'-');
                self.reader.reconsume();
                self.state = State::Comment;
            }
        }
    }

    fn step_comment(&mut self, byte: u8) {
        match byte {
            b'<' => {
                self.current().as_comment_mut().push(b'<');
                self.state = State::CommentLessThanSign;
            }
            b'-' => self.state = State::CommentEndDash,
            _ => self.current().as_comment_mut().push(byte),
        }
    }

    fn step_comment_less_than_sign(&mut self, byte: u8) {
        match byte {
            b'<' => self.current().as_comment_mut().push(b'<'),
            b'!' => self.state = State::CommentLessThanSignBang,
            _ => {
                self.reader.reconsume();
                self.state = State::Comment;
            }
        }
    }

    fn step_comment_less_than_sign_bang(&mut self, byte: u8) {
        if byte == b'-' {
            self.state = State::CommentLessThanSignBangDash;
        } else {
            self.reader.reconsume();
            self.state = State::Comment;
        }
    }

    fn step_comment_less_than_sign_bang_dash(&mut self, byte: u8) {
        if byte == b'-' {
            self.state = State::CommentLessThanSignBangDashDash;
        } else {
            self.reader.reconsume();
            self.state = State::Comment;
        }
    }

    fn step_comment_less_than_sign_bang_dash_dash(&mut self, byte: u8) {
        // Tolerant of non-conforming input even on the "else" branch here —
        // observed in the wild from pages that don't close this nesting
        // cleanly.
        if byte != b'>' {
            self.reader.reconsume();
        }
        self.state = State::CommentEnd;
    }

    fn step_comment_end_dash(&mut self, byte: u8) {
        if byte == b'-' {
            self.state = State::CommentEnd;
        } else {
            self.current().as_comment_mut().push(b'-');
            self.reader.reconsume();
            self.state = State::Comment;
        }
    }

    fn step_comment_end(&mut self, byte: u8) {
        match byte {
            b'>' => self.state = State::Data,
            b'!' => unimplemented_transition!(self, State::CommentEnd, Some(byte)),
            b'-' => self.current().as_comment_mut().push(b'-'),
            _ => {
                self.current().as_comment_mut().extend_from_slice(b"--");
                self.reader.reconsume();
                self.state = State::Comment;
            }
        }
    }

    /// Shared scanner for `ScriptData`/`StyleData`: look for `needle`
    /// (`</script>` or `</style>`, including the closing `>`) at the cursor,
    /// case-insensitively. On a match, skip past it without emitting an end
    /// tag and return to `Data`; otherwise emit one `Character` token and
    /// stay in the raw-text state.
    fn step_raw_text(&mut self, needle: &[u8], _state: State) {
        let rest = self.reader.rest();
        if rest.len() >= needle.len() && rest[..needle.len()].eq_ignore_ascii_case(needle) {
            self.reader.advance(needle.len());
            self.state = State::Data;
        } else {
            let byte = self.reader.consume().expect("step called at EOF");
            self.push_character(byte);
        }
    }
}
