/// The tokenizer's internal state.
///
/// Unlike a conformant HTML5 tokenizer this enum only covers the states this
/// crate actually implements — there is no character-reference machinery, no
/// CDATA, no foreign-content states. See the crate's top-level documentation
/// for what's deliberately missing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    /// Plain body text. The default state, and the one EOF is expected in.
    Data,
    /// Just consumed `<`.
    TagOpen,
    /// Just consumed `</`.
    EndTagOpen,
    /// Accumulating a start or end tag's name.
    TagName,
    /// Between a tag name (or prior attribute) and the next attribute.
    BeforeAttributeName,
    /// Accumulating an attribute name.
    AttributeName,
    /// Just finished an attribute name, looking for `=` or the next one.
    AfterAttributeName,
    /// Between `=` and the attribute value.
    BeforeAttributeValue,
    /// Accumulating a `"`-quoted attribute value.
    AttributeValueDoubleQuoted,
    /// Accumulating a `'`-quoted attribute value.
    AttributeValueSingleQuoted,
    /// Accumulating an unquoted attribute value.
    AttributeValueUnquoted,
    /// Just finished a quoted attribute value.
    AfterAttributeValueQuoted,
    /// Just consumed `/` inside a start tag.
    SelfClosingStartTag,
    /// Just consumed `<!`.
    MarkupDeclarationOpen,
    /// `<!--` was just consumed; nothing of the comment body seen yet.
    CommentStart,
    /// One `-` consumed right after `<!--`.
    CommentStartDash,
    /// Accumulating a comment body.
    Comment,
    /// Consumed `<` inside a comment body.
    CommentLessThanSign,
    /// Consumed `<!` inside a comment body.
    CommentLessThanSignBang,
    /// Consumed `<!-` inside a comment body.
    CommentLessThanSignBangDash,
    /// Consumed `<!--` inside a comment body.
    CommentLessThanSignBangDashDash,
    /// One `-` consumed while accumulating a comment body.
    CommentEndDash,
    /// Two consecutive `-` consumed while accumulating a comment body.
    CommentEnd,
    /// `<!` was consumed and the next seven bytes don't spell `DOCTYPE`... or
    /// do, and a space was just consumed after it.
    Doctype,
    /// Whitespace after `<!DOCTYPE` consumed, name not started yet.
    BeforeDoctypeName,
    /// Accumulating a doctype's root name.
    DoctypeName,
    /// Whitespace after a doctype name consumed.
    AfterDoctypeName,
    /// `PUBLIC` keyword consumed after a doctype name.
    AfterDoctypePublicKeyword,
    /// Whitespace after the `PUBLIC` keyword consumed.
    BeforeDoctypePublicIdentifier,
    /// Inside a `"`-quoted doctype public identifier (contents discarded).
    DoctypePublicIdentifierDoubleQuoted,
    /// The closing `"` of a doctype public identifier consumed.
    AfterDoctypePublicIdentifier,
    /// Inside a `<script>` element, scanning for `</script>`.
    ScriptData,
    /// Inside a `<style>` element, scanning for `</style>`.
    StyleData,
}
