//! Replaying recorded segments as plain text or HTML.

use std::collections::HashMap;
use std::fmt::Write as _;

use rich::color::hex;
use rich::{Segment, TerminalTheme};

use crate::strip::Strip;

/// Settings for [`export_html`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Put each span's CSS in a `style` attribute instead of a class rule.
    pub inline_styles: bool,
    /// Clear the console's record after exporting.
    pub clear: bool,
    /// Colors for `default` and the 16 standard colors.
    pub theme: TerminalTheme,
}

impl HtmlOptions {
    pub fn inline() -> Self {
        Self {
            inline_styles: true,
            ..Self::default()
        }
    }
}

/// The visible text of `segments`, with styles and controls dropped.
pub fn export_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|segment| !segment.is_control())
        .map(Segment::text)
        .collect()
}

/// `segments` as a standalone HTML document.
///
/// In class mode identical declarations share one `.rN` rule, numbered in
/// order of first use. Styles with no CSS, such as a bare link, get no
/// class.
pub fn export_html(segments: &[Segment], options: &HtmlOptions) -> String {
    let text_only = segments.iter().filter(|s| !s.is_control()).cloned();
    let simplified = Strip::from_iter(text_only).simplify();

    let mut code = String::new();
    let mut classes: HashMap<String, usize> = HashMap::new();
    let mut rules: Vec<String> = Vec::new();

    for segment in simplified.segments() {
        let text = escape(segment.text());
        let Some(style) = segment.style() else {
            code.push_str(&text);
            continue;
        };

        let css = style.css(&options.theme);
        let link = style.link();
        if css.is_empty() {
            match link {
                Some(url) => {
                    let _ = write!(code, "<a href=\"{}\">{text}</a>", escape(url));
                }
                None => code.push_str(&text),
            }
            continue;
        }

        if options.inline_styles {
            let inner = match link {
                Some(url) => format!("<a href=\"{}\">{text}</a>", escape(url)),
                None => text,
            };
            let _ = write!(code, "<span style=\"{css}\">{inner}</span>");
        } else {
            let next = classes.len() + 1;
            let number = *classes.entry(css.clone()).or_insert_with(|| {
                rules.push(format!(".r{next} {{{css}}}"));
                next
            });
            match link {
                Some(url) => {
                    let _ = write!(
                        code,
                        "<a class=\"r{number}\" href=\"{}\">{text}</a>",
                        escape(url)
                    );
                }
                None => {
                    let _ = write!(code, "<span class=\"r{number}\">{text}</span>");
                }
            }
        }
    }

    render_document(&rules.join("\n"), &code, &options.theme)
}

fn render_document(stylesheet: &str, code: &str, theme: &TerminalTheme) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <head>\n\
         <style>\n\
         {stylesheet}\n\
         body {{\n    color: {foreground};\n    background-color: {background};\n}}\n\
         </style>\n\
         </head>\n\
         <html>\n\
         <body>\n    \
         <code>\n        \
         <pre style=\"font-family:Menlo,'DejaVu Sans Mono',consolas,'Courier New',monospace\">{code}</pre>\n    \
         </code>\n\
         </body>\n\
         </html>\n",
        foreground = hex(theme.foreground),
        background = hex(theme.background),
    )
}

/// Escapes text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
