//! Tag content parser for Rich markup.
//!
//! Classifies the content inside `[...]`. Style definitions are resolved
//! later against a theme; this module only splits the tag apart.

/// The meaning of one tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagContent<'a> {
    /// A style name or definition: `[bold red on blue]`, `[repr.str]`
    Style(&'a str),
    /// A hyperlink: `[link=https://example.com]`
    Link(&'a str),
    /// A metadata entry such as `[@click=app.quit]`; carries no style.
    Meta(&'a str, &'a str),
    /// Close the innermost tag: `[/]`
    CloseAll,
    /// Close the innermost tag with this name: `[/bold]`
    Close(&'a str),
}

impl<'a> TagContent<'a> {
    /// Classify tag content (the text inside `[...]`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::parser::TagContent;
    ///
    /// assert_eq!(TagContent::parse("bold red"), TagContent::Style("bold red"));
    /// assert_eq!(TagContent::parse("link=http://x"), TagContent::Link("http://x"));
    /// assert_eq!(TagContent::parse("/"), TagContent::CloseAll);
    /// ```
    pub fn parse(content: &'a str) -> Self {
        let content = content.trim();

        if let Some(rest) = content.strip_prefix('/') {
            let rest = rest.trim();
            return if rest.is_empty() {
                TagContent::CloseAll
            } else {
                TagContent::Close(rest)
            };
        }

        if content.starts_with('@') {
            return match content.split_once('=') {
                Some((key, value)) => TagContent::Meta(key.trim(), value.trim()),
                None => TagContent::Meta(content, ""),
            };
        }

        if let Some((key, value)) = content.split_once('=') {
            if key.trim().eq_ignore_ascii_case("link") {
                return TagContent::Link(value.trim());
            }
        }

        TagContent::Style(content)
    }

    /// The name a closing tag uses to refer to this tag.
    ///
    /// Whitespace runs are collapsed so `[bold  red]` is closed by
    /// `[/bold red]`.
    pub fn name(&self) -> String {
        match self {
            TagContent::Style(definition) => normalize(definition),
            TagContent::Link(_) => "link".to_string(),
            TagContent::Meta(key, _) => normalize(key),
            TagContent::Close(name) => normalize(name),
            TagContent::CloseAll => String::new(),
        }
    }

    pub fn is_close(&self) -> bool {
        matches!(self, TagContent::CloseAll | TagContent::Close(_))
    }
}

/// Collapse whitespace runs to single spaces.
pub(crate) fn normalize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_style_tag() {
        assert_eq!(TagContent::parse(" bold "), TagContent::Style("bold"));
    }

    #[test]
    fn parse_close_tags() {
        assert_eq!(TagContent::parse("/"), TagContent::CloseAll);
        assert_eq!(TagContent::parse("/ bold"), TagContent::Close("bold"));
        assert!(TagContent::parse("/x").is_close());
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            TagContent::parse("link = https://example.com/?q=1"),
            TagContent::Link("https://example.com/?q=1")
        );
    }

    #[test]
    fn parse_meta() {
        assert_eq!(
            TagContent::parse("@click=set_background('cyan')"),
            TagContent::Meta("@click", "set_background('cyan')")
        );
        assert_eq!(TagContent::parse("@hover"), TagContent::Meta("@hover", ""));
    }

    #[test]
    fn names_are_normalized() {
        assert_eq!(TagContent::parse("bold   red").name(), "bold red");
        assert_eq!(TagContent::parse("/bold \t red").name(), "bold red");
        assert_eq!(TagContent::parse("link=x").name(), "link");
    }
}
