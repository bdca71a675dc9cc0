//! Main markup parser for Rich text.
//!
//! Combines the lexer and tag parser with a style stack to turn markup into
//! `(text, style)` pairs.

use crate::error::{MarkupError, RichError};
use crate::style::Style;
use crate::theme::Theme;

use super::lexer::{Lexer, Token};
use super::tag::{TagContent, normalize};

/// Parses Rich markup into `(text, style)` pairs.
///
/// The pairs cover every character of the rendered text, in order. Each
/// style is the combination of all tags open at that point, outermost
/// first. Tags left open at the end are closed implicitly.
///
/// # Examples
///
/// ```
/// use rich::parser::parse;
/// use rich::{Attributes, Theme};
///
/// let pairs = parse("[bold]Hello[/] World", &Theme::default()).unwrap();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].0, "Hello");
/// assert!(pairs[0].1.has(Attributes::BOLD));
/// assert!(pairs[1].1.is_null());
/// ```
pub fn parse(input: &str, theme: &Theme) -> Result<Vec<(String, Style)>, RichError> {
    let mut parser = Parser::new(theme);
    for (position, token) in Lexer::new(input) {
        parser.process_token(position, token)?;
    }
    Ok(parser.finish())
}

/// An entry on the style stack.
#[derive(Clone, Debug)]
struct StackEntry {
    /// Normalized tag name, for matching close tags.
    name: String,
    style: Style,
}

struct Parser<'t> {
    theme: &'t Theme,
    stack: Vec<StackEntry>,
    /// Fold of the stack, kept in sync on every push and pop.
    current: Style,
    /// Text accumulated under `current`.
    pending: String,
    output: Vec<(String, Style)>,
}

impl<'t> Parser<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            stack: Vec::new(),
            current: Style::null(),
            pending: String::new(),
            output: Vec::new(),
        }
    }

    fn process_token(&mut self, position: usize, token: Token<'_>) -> Result<(), RichError> {
        match token {
            Token::Text(text) => self.pending.push_str(text),
            Token::EscapedBracket(c) => self.pending.push(c),
            Token::OpenTag(content) => self.open(TagContent::parse(content))?,
            Token::CloseTag(None) => self.close_innermost(position)?,
            Token::CloseTag(Some(name)) => self.close_named(name, position)?,
        }
        Ok(())
    }

    fn open(&mut self, tag: TagContent<'_>) -> Result<(), RichError> {
        let style = match tag {
            TagContent::Style(definition) => self.theme.resolve(definition)?,
            TagContent::Link(url) => Style::new().with_link(url),
            TagContent::Meta(..) => Style::null(),
            TagContent::CloseAll | TagContent::Close(_) => return Ok(()),
        };
        self.flush();
        self.stack.push(StackEntry {
            name: tag.name(),
            style,
        });
        self.refold();
        Ok(())
    }

    fn close_innermost(&mut self, position: usize) -> Result<(), RichError> {
        if self.stack.is_empty() {
            return Err(MarkupError::NothingToClose { position }.into());
        }
        self.flush();
        self.stack.pop();
        self.refold();
        Ok(())
    }

    fn close_named(&mut self, name: &str, position: usize) -> Result<(), RichError> {
        let name = normalize(name);
        let index = self
            .stack
            .iter()
            .rposition(|entry| entry.name == name)
            .ok_or_else(|| MarkupError::UnmatchedClose {
                tag: name.clone(),
                position,
            })?;
        self.flush();
        self.stack.remove(index);
        self.refold();
        Ok(())
    }

    fn refold(&mut self) {
        self.current = Style::combine_all(self.stack.iter().map(|entry| &entry.style));
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.output.push((text, self.current.clone()));
        }
    }

    fn finish(mut self) -> Vec<(String, Style)> {
        self.flush();
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::MissingStyle;
    use crate::style::Attributes;

    fn run(input: &str) -> Result<Vec<(String, Style)>, RichError> {
        parse(input, &Theme::default())
    }

    fn texts(pairs: &[(String, Style)]) -> Vec<&str> {
        pairs.iter().map(|(text, _)| text.as_str()).collect()
    }

    #[test]
    fn parse_plain_text() {
        let pairs = run("Hello World").unwrap();
        assert_eq!(pairs, vec![("Hello World".to_string(), Style::null())]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(run("").unwrap().is_empty());
    }

    #[test]
    fn nested_styles_fold_outermost_first() {
        let pairs = run("[red]a[blue]b[/]c[/]").unwrap();
        assert_eq!(texts(&pairs), vec!["a", "b", "c"]);
        assert_eq!(pairs[0].1.fg, Some(Color::Standard(1)));
        assert_eq!(pairs[1].1.fg, Some(Color::Standard(4)));
        assert_eq!(pairs[2].1.fg, Some(Color::Standard(1)));
    }

    #[test]
    fn nested_keeps_outer_attributes() {
        let pairs = run("[green]'[bold]foo[/bold]'").unwrap();
        assert_eq!(texts(&pairs), vec!["'", "foo", "'"]);
        assert!(pairs[1].1.has(Attributes::BOLD));
        assert_eq!(pairs[1].1.fg, Some(Color::Standard(2)));
        assert!(!pairs[2].1.has(Attributes::BOLD));
    }

    #[test]
    fn close_by_name_removes_inner_match() {
        let pairs = run("[bold][italic]a[/bold]b[/italic]c").unwrap();
        assert_eq!(texts(&pairs), vec!["a", "b", "c"]);
        assert!(pairs[1].1.has(Attributes::ITALIC));
        assert!(!pairs[1].1.has(Attributes::BOLD));
        assert!(pairs[2].1.is_null());
    }

    #[test]
    fn close_without_open_fails() {
        assert_eq!(
            run("ab[/]").unwrap_err(),
            RichError::Markup(MarkupError::NothingToClose { position: 2 })
        );
    }

    #[test]
    fn mismatched_close_fails() {
        assert_eq!(
            run("[bold]x[/italic]").unwrap_err(),
            RichError::Markup(MarkupError::UnmatchedClose {
                tag: "italic".into(),
                position: 7,
            })
        );
    }

    #[test]
    fn unknown_style_fails() {
        let err = run("[nosuchstyle]x").unwrap_err();
        assert!(matches!(
            err,
            RichError::MissingStyle(MissingStyle { ref name, .. }) if name == "nosuchstyle"
        ));
    }

    #[test]
    fn theme_names_resolve() {
        let pairs = run("[repr.str]x").unwrap();
        assert_eq!(pairs[0].1.fg, Some(Color::Standard(2)));
    }

    #[test]
    fn doubled_bracket_is_literal() {
        let pairs = run("[[bold]x").unwrap();
        assert_eq!(pairs, vec![("[bold]x".to_string(), Style::null())]);
    }

    #[test]
    fn link_tag() {
        let pairs = run("[link=https://example.com]here[/link]").unwrap();
        assert_eq!(pairs[0].1.link(), Some("https://example.com"));
    }

    #[test]
    fn meta_tag_carries_no_style() {
        let pairs = run("[@click=app.quit]Exit[/@click]").unwrap();
        assert_eq!(pairs, vec![("Exit".to_string(), Style::null())]);
    }

    #[test]
    fn unclosed_tags_close_at_end() {
        let pairs = run("[bold]Hello").unwrap();
        assert_eq!(texts(&pairs), vec!["Hello"]);
        assert!(pairs[0].1.has(Attributes::BOLD));
    }
}
