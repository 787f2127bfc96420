//! Document model: ordered chapter blocks rendered into one HTML5 page.

use std::borrow::Cow;
use std::fmt::Write as _;

/// Inline stylesheet. Wide layout, light theme.
const PAGE_CSS: &str = "\
body{margin:0;padding:2rem 4vw;font-family:system-ui,-apple-system,'Segoe UI',sans-serif;color:#262730;background:#fff;line-height:1.6}\
h1{font-size:2.4rem;margin:0 0 1rem}\
h2{font-size:1.7rem;margin:1.5rem 0 .5rem}\
hr{border:0;border-top:1px solid #e6e6e6;margin:2rem 0}\
.chart svg{width:100%;height:auto;display:block}\
.artifact{width:100%;border:0;display:block}\
.warning{padding:1rem;border-radius:.5rem;background:#fffce7;color:#926c05}\
blockquote{margin:1rem 0;padding-left:1rem;border-left:3px solid #e6e6e6}";

/// Escapes text for HTML element content and quoted attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 16);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// The single visual a chapter carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    /// Inline SVG markup produced by [`crate::chart`].
    Chart(String),
    /// Pre-rendered HTML embedded verbatim in a scrollable frame.
    Frame { file_name: String, html: String, height: u32 },
    /// Non-fatal notice shown in place of a missing visual.
    Warning(String),
}

impl Visual {
    fn write_html(&self, out: &mut String) {
        match self {
            Self::Chart(svg) => {
                let _ = writeln!(out, "<figure class=\"chart\">{svg}</figure>");
            },
            Self::Frame { file_name, html, height } => {
                let _ = writeln!(
                    out,
                    "<iframe class=\"artifact\" title=\"{}\" height=\"{height}\" style=\"height:{height}px\" \
                     scrolling=\"yes\" sandbox=\"allow-scripts\" srcdoc=\"{}\"></iframe>",
                    escape_html(file_name),
                    escape_html(html),
                );
            },
            Self::Warning(message) => {
                let _ = writeln!(
                    out,
                    "<div class=\"warning\" role=\"alert\">\u{26a0}\u{fe0f} {}</div>",
                    escape_html(message)
                );
            },
        }
    }
}

/// One rendered section of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterBlock {
    pub slug: &'static str,
    pub html: String,
}

/// Builds a [`ChapterBlock`] from heading, prose and an optional visual.
#[derive(Debug)]
pub struct SectionBuilder {
    slug: &'static str,
    html: String,
}

impl SectionBuilder {
    #[must_use]
    pub fn new(slug: &'static str) -> Self {
        let mut html = String::new();
        let _ = writeln!(html, "<section id=\"{slug}\">");
        Self { slug, html }
    }

    /// Page title (`<h1>`), used once by the introduction.
    #[must_use]
    pub fn title(mut self, text: &str) -> Self {
        let _ = writeln!(self.html, "<h1>{}</h1>", escape_html(text));
        self
    }

    #[must_use]
    pub fn heading(mut self, text: &str) -> Self {
        let _ = writeln!(self.html, "<h2>{}</h2>", escape_html(text));
        self
    }

    #[must_use]
    pub fn paragraphs(mut self, paragraphs: &[&str]) -> Self {
        for p in paragraphs {
            let _ = writeln!(self.html, "<p>{}</p>", escape_html(p));
        }
        self
    }

    #[must_use]
    pub fn quote(mut self, text: &str, attribution: &str) -> Self {
        let _ = writeln!(
            self.html,
            "<blockquote><em>\u{201c}{}\u{201d}</em> \u{2013} {}</blockquote>",
            escape_html(text),
            escape_html(attribution)
        );
        self
    }

    #[must_use]
    pub fn visual(mut self, visual: &Visual) -> Self {
        visual.write_html(&mut self.html);
        self
    }

    #[must_use]
    pub fn build(mut self) -> ChapterBlock {
        self.html.push_str("</section>\n");
        ChapterBlock { slug: self.slug, html: self.html }
    }
}

/// Complete page: title plus ordered blocks separated by rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<ChapterBlock>,
}

impl Document {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), blocks: Vec::new() }
    }

    pub fn push(&mut self, block: ChapterBlock) {
        self.blocks.push(block);
    }

    #[must_use]
    pub fn block(&self, slug: &str) -> Option<&ChapterBlock> {
        self.blocks.iter().find(|b| b.slug == slug)
    }

    /// Serializes the page. Output depends only on the blocks, so repeated
    /// calls produce identical bytes.
    #[must_use]
    pub fn render(&self) -> String {
        let body_len: usize = self.blocks.iter().map(|b| b.html.len() + 8).sum();
        let mut out = String::with_capacity(body_len + PAGE_CSS.len() + 256);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_html(&self.title));
        let _ = writeln!(out, "<style>{PAGE_CSS}</style>");
        out.push_str("</head>\n<body>\n<main>\n");
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push_str("<hr>\n");
            }
            out.push_str(&block.html);
        }
        out.push_str("</main>\n</body>\n</html>\n");
        out
    }
}
