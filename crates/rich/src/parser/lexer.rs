//! Lexer for Rich markup.
//!
//! Converts input text into a stream of positioned tokens. Lexing never
//! fails: anything that does not look like a tag is text.

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Opening tag content (without brackets): `bold red`
    OpenTag(&'a str),
    /// Closing tag: `None` for `[/]`, `Some("bold")` for `[/bold]`
    CloseTag(Option<&'a str>),
    /// A bracket written doubled (`[[`).
    EscapedBracket(char),
}

/// Lexer for Rich markup text.
///
/// Yields `(byte_position, token)` pairs.
///
/// # Examples
///
/// ```
/// use rich::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("[bold]Hello[/]").map(|(_, t)| t).collect();
/// assert_eq!(
///     tokens,
///     vec![Token::OpenTag("bold"), Token::Text("Hello"), Token::CloseTag(None)]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Length in bytes of the tag starting at the current `[`, brackets
    /// included, if there is one.
    fn tag_len(&self) -> Option<usize> {
        let rest = self.remaining();
        let opener = rest[1..].chars().next()?;
        if !(opener.is_ascii_alphabetic() || matches!(opener, '#' | '/' | '@')) {
            return None;
        }
        for (index, c) in rest.char_indices().skip(1) {
            match c {
                ']' => return Some(index + 1),
                '[' | '\n' => return None,
                _ => {}
            }
        }
        None
    }

    fn tag_token(content: &'a str) -> Token<'a> {
        match content.strip_prefix('/') {
            Some(rest) if rest.trim().is_empty() => Token::CloseTag(None),
            Some(rest) => Token::CloseTag(Some(rest.trim())),
            None => Token::OpenTag(content),
        }
    }

    /// Text up to the next `[` that is not the very first character.
    fn text_len(&self) -> usize {
        let rest = self.remaining();
        let first = rest.chars().next().map_or(0, char::len_utf8);
        rest[first..]
            .find('[')
            .map_or(rest.len(), |index| index + first)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }

        if rest.starts_with("[[") {
            self.pos += 2;
            return Some((start, Token::EscapedBracket('[')));
        }
        if rest.starts_with('[') {
            if let Some(len) = self.tag_len() {
                self.pos += len;
                return Some((start, Self::tag_token(&rest[1..len - 1])));
            }
        }

        let len = self.text_len();
        self.pos += len;
        Some((start, Token::Text(&rest[..len])))
    }
}
