//! Markdown rendering with optional syntax highlighting and sanitization

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;

/// Link schemes that can execute script when clicked or loaded
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Markdown renderer
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
    line_numbers: bool,
    sanitize: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer for trusted content
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default(), true)
    }

    /// Create with custom settings
    pub fn with_options(highlight: &HighlightConfig, trusted: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: highlight.theme.clone(),
            highlight: highlight.enable,
            line_numbers: highlight.line_number,
            sanitize: !trusted,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Front-matter is stripped before we get here, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a fenced block that will be highlighted
        let mut code_block: Option<String> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref lang)))
                    if self.highlight && !lang.is_empty() =>
                {
                    code_block = Some(lang.to_string());
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) if code_block.is_some() => {
                    let lang = code_block.take().unwrap_or_default();
                    let highlighted = self.highlight_code(&code_block_content, &lang);
                    events.push(Event::Html(CowStr::from(highlighted)));
                }
                Event::Text(text) if code_block.is_some() => {
                    code_block_content.push_str(&text);
                }
                event if self.sanitize => events.push(sanitize_event(event)),
                event => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted =
            theme.and_then(|t| highlighted_html_for_string(code, &self.syntax_set, syntax, t).ok());

        match highlighted {
            Some(highlighted) if self.line_numbers => {
                self.add_line_numbers(&highlighted, code.lines().count(), lang)
            }
            Some(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ),
            None => {
                // Fallback to plain code block
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    html_escape(lang),
                    html_escape(code)
                )
            }
        }
    }

    /// Add a line-number gutter beside highlighted code.
    ///
    /// `line_count` is taken from the source, since syntect's `<pre>`
    /// wrapper adds lines of its own.
    fn add_line_numbers(&self, highlighted: &str, line_count: usize, lang: &str) -> String {
        let gutter = (1..=line_count)
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
            html_escape(lang),
            gutter,
            highlighted
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Neutralize raw HTML and script-bearing link targets
fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if UNSAFE_SCHEMES.iter().any(|s| normalized.starts_with(s)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
