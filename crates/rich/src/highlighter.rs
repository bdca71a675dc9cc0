//! Regex-driven highlighting of plain text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MissingStyle;
use crate::span::Span;
use crate::text::Text;
use crate::theme::Theme;

/// Adds styles to a [`Text`] based on its content.
pub trait Highlighter: Send + Sync {
    /// Style `text` in place, looking style names up in `theme`.
    fn highlight(&self, text: &mut Text, theme: &Theme) -> Result<(), MissingStyle>;
}

/// Highlights the parts of text that look like literal values.
///
/// Matches go beneath any styles already on the text, so explicit markup
/// keeps precedence.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReprHighlighter;

static REPR_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("repr.brace", r"[\[\]{}()]"),
        ("repr.bool_true", r"\b(?:True|true)\b"),
        ("repr.bool_false", r"\b(?:False|false)\b"),
        ("repr.none", r"\b(?:None|null)\b"),
        ("repr.number", r"-?\b\d+(?:\.\d+)?(?:[eE][-+]?\d+)?\b"),
        ("repr.str", r#"b?'(?:[^'\\\n]|\\.)*'|b?"(?:[^"\\\n]|\\.)*""#),
        ("repr.url", r"(?:https?|file)://[-0-9a-zA-Z$_+!`(),.?/;:&=%#~]*"),
    ]
    .into_iter()
    .filter_map(|(name, pattern)| Regex::new(pattern).ok().map(|regex| (name, regex)))
    .collect()
});

impl Highlighter for ReprHighlighter {
    fn highlight(&self, text: &mut Text, theme: &Theme) -> Result<(), MissingStyle> {
        let mut spans = Vec::new();
        for (name, regex) in REPR_PATTERNS.iter() {
            let mut matches = regex.find_iter(text.plain()).peekable();
            if matches.peek().is_none() {
                continue;
            }
            let style = theme.resolve(name)?;
            spans.extend(matches.map(|m| Span::new(m.start(), m.end(), style.clone())));
        }
        text.prepend_spans(spans);
        Ok(())
    }
}

/// Highlights with a caller-supplied list of `(style name, regex)` rules.
#[derive(Clone, Debug, Default)]
pub struct RegexHighlighter {
    rules: Vec<(String, Regex)>,
}

impl RegexHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, style: impl Into<String>, regex: Regex) -> Self {
        self.rules.push((style.into(), regex));
        self
    }
}

impl Highlighter for RegexHighlighter {
    fn highlight(&self, text: &mut Text, theme: &Theme) -> Result<(), MissingStyle> {
        let mut spans = Vec::new();
        for (name, regex) in &self.rules {
            let style = theme.resolve(name)?;
            spans.extend(
                regex
                    .find_iter(text.plain())
                    .map(|m| Span::new(m.start(), m.end(), style.clone())),
            );
        }
        text.prepend_spans(spans);
        Ok(())
    }
}
