use std::sync::LazyLock;
use std::vec::IntoIter;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME_NAME: &str = "base16-ocean.dark";

static HIGHLIGHTER: LazyLock<PulldownHighlighter> = LazyLock::new(PulldownHighlighter::new);

pub struct PulldownHighlighter {
    syntaxset: SyntaxSet,
    theme: Theme,
}

/// Loads syntect's default syntaxes once; loading them is the slow part.
impl PulldownHighlighter {
    pub fn new() -> PulldownHighlighter {
        let syntaxset = SyntaxSet::load_defaults_newlines();
        let mut themeset = ThemeSet::load_defaults();
        let theme = themeset.themes.remove(THEME_NAME).unwrap_or_default();

        PulldownHighlighter { syntaxset, theme }
    }

    /// Replaces fenced and indented code blocks with pre-highlighted HTML.
    ///
    /// A block that fails to highlight is emitted as escaped plain text
    /// rather than dropped.
    pub fn highlight<'a, It>(&self, events: It) -> Vec<Event<'a>>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let plain = self.syntaxset.find_syntax_plain_text();
        let mut syntax = plain;
        let mut in_code_block = false;
        let mut to_highlight = String::new();
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    syntax = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            self.syntaxset.find_syntax_by_token(&lang).unwrap_or(plain)
                        }
                        CodeBlockKind::Indented => plain,
                    };
                    in_code_block = true;
                }
                Event::End(TagEnd::CodeBlock) if in_code_block => {
                    let html = highlighted_html_for_string(
                        &to_highlight,
                        &self.syntaxset,
                        syntax,
                        &self.theme,
                    )
                    .unwrap_or_else(|_| format!("<pre><code>{}</code></pre>", escape(&to_highlight)));

                    to_highlight.clear();
                    in_code_block = false;
                    out_events.push(Event::Html(CowStr::from(html)));
                }
                Event::Text(t) if in_code_block => to_highlight.push_str(&t),
                e => out_events.push(e),
            }
        }

        out_events
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Apply syntax highlighting to a pulldown-cmark event stream using the
/// shared highlighter.
pub fn highlight<'a, It>(events: It) -> IntoIter<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    HIGHLIGHTER.highlight(events).into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{html::push_html, Parser};

    fn render(md: &str) -> String {
        let mut out = String::new();
        push_html(&mut out, highlight(Parser::new(md)));
        out
    }

    #[test]
    fn test_code_block_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_prose_untouched() {
        let html = render("plain *text* here");
        assert_eq!(html, "<p>plain <em>text</em> here</p>\n");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a & b>"), "&lt;a &amp; b&gt;");
    }
}
