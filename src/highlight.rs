use std::sync::LazyLock;
use std::vec::IntoIter;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

static HIGHLIGHTER: LazyLock<CodeHighlighter> = LazyLock::new(CodeHighlighter::new);

/// Syntect-backed code block renderer. Loading the default syntax and theme
/// sets is expensive, so a single instance is shared process-wide.
struct CodeHighlighter {
    syntaxset: SyntaxSet,
    themeset: ThemeSet,
}

impl CodeHighlighter {
    fn new() -> CodeHighlighter {
        CodeHighlighter {
            syntaxset: SyntaxSet::load_defaults_newlines(),
            themeset: ThemeSet::load_defaults(),
        }
    }

    /// Replace fenced code blocks in a pulldown-cmark event stream with
    /// pre-highlighted HTML blocks. Unknown languages fall back to plain text.
    fn highlight<'a, It>(&self, events: It) -> Vec<Event<'a>>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let mut in_code_block = false;
        let mut syntax = self.syntaxset.find_syntax_plain_text();
        let theme = self
            .themeset
            .themes
            .get("base16-ocean.dark")
            .expect("Couldn't find theme");

        let mut to_highlight = String::new();
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    if let CodeBlockKind::Fenced(lang) = kind {
                        syntax = self.syntaxset.find_syntax_by_token(&lang).unwrap_or(syntax);
                    }
                    in_code_block = true;
                }
                Event::End(TagEnd::CodeBlock) if in_code_block => {
                    let html =
                        highlighted_html_for_string(&to_highlight, &self.syntaxset, syntax, theme)
                            .expect("Couldn't highlight");
                    to_highlight.clear();
                    in_code_block = false;
                    out_events.push(Event::Html(CowStr::from(html)));
                }
                Event::Text(t) if in_code_block => {
                    to_highlight.push_str(&t);
                }
                e => {
                    out_events.push(e);
                }
            }
        }

        out_events
    }
}

/// Apply syntax highlighting to a pulldown-cmark event stream.
pub fn highlight<'a, It>(events: It) -> IntoIter<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    HIGHLIGHTER.highlight(events).into_iter()
}
