//! HTML digest renderer.
//!
//! Produces one self-contained document: header, table of contents, then one
//! article per paper with a takeaway box and a Q&A body.

use super::blocks::render_blocks;
use super::stylesheet::STYLESHEET;
use super::{render_each, RenderOptions};
use crate::inline::{process_inline, InlineMode};
use crate::model::ScoredPaper;
use crate::normalize::{escape_attr, escape_html, normalize_unicode};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A sentence end must sit after this character index to count as a takeaway.
pub const TAKEAWAY_MIN_INDEX: usize = 20;
/// A sentence end must sit before this character index to count as a takeaway.
pub const TAKEAWAY_MAX_INDEX: usize = 200;
/// Characters kept when no sentence end qualifies.
pub const TAKEAWAY_FALLBACK_CHARS: usize = 150;
/// Longer table-of-contents titles are cut to this many characters plus `...`.
pub const TOC_TITLE_CHARS: usize = 50;

static RE_INLINE_H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([^#\n])(##)").unwrap());

static RE_INLINE_LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^ \n])([-*] )").unwrap());

static RE_INLINE_Q_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Q[0-9]+)\s*:").unwrap());

static RE_Q_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Q[0-9]+$").unwrap());

/// HTML renderer.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Creates a new renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders the full document.
    pub fn render(&self, date: NaiveDate, papers: &[ScoredPaper]) -> String {
        let title = escape_html(&self.options.title);
        let mut output = String::with_capacity(STYLESHEET.len() + papers.len() * 4096);

        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!(
            "<html lang=\"{}\"><head><meta charset=\"UTF-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            escape_attr(&self.options.html_lang)
        ));
        output.push_str(&format!("<title>{}</title>\n", title));
        output.push_str("<style>\n");
        output.push_str(STYLESHEET);
        output.push_str("</style>\n</head><body>\n");

        // Document header
        output.push_str("<header class='doc-header'>\n");
        output.push_str(&format!("<h1>📊 {}</h1>\n", title));
        output.push_str(&format!(
            "<p class='subtitle'>{}</p>\n",
            escape_html(&self.options.subtitle)
        ));
        output.push_str(&format!(
            "<p class='meta-info'>Generated: {} &nbsp;|&nbsp; Total Papers: <strong>{}</strong></p>\n",
            date.format("%Y-%m-%d"),
            papers.len()
        ));
        output.push_str("</header>\n\n");

        output.push_str(&self.render_toc(papers));

        let articles = render_each(papers, self.options.parallel, |num, paper| {
            self.render_article(num, paper)
        });
        for (i, article) in articles.iter().enumerate() {
            if i > 0 {
                output.push_str("<div class='page-break'></div>\n");
            }
            output.push_str(article);
        }

        output.push_str("</body></html>");

        tracing::debug!(papers = papers.len(), bytes = output.len(), "rendered html digest");
        output
    }

    fn render_toc(&self, papers: &[ScoredPaper]) -> String {
        let mut output = String::from("<nav class='toc'>\n<h2>📑 目录 / Contents</h2>\n<ul>\n");
        for (i, scored) in papers.iter().enumerate() {
            output.push_str(&format!(
                "<li><a href='#paper{}'>{}. {}</a></li>\n",
                i + 1,
                i + 1,
                escape_html(&toc_title(&scored.paper.title))
            ));
        }
        output.push_str("</ul>\n</nav>\n\n");
        output
    }

    /// Renders one paper article.
    pub fn render_article(&self, num: usize, scored: &ScoredPaper) -> String {
        let paper = &scored.paper;
        let mut output = format!("<article class='paper' id='paper{}'>\n", num);

        output.push_str("<header class='paper__head'>\n");
        output.push_str(&format!(
            "<h2 class='paper__title'>{}. {}</h2>\n",
            num,
            escape_html(&paper.title)
        ));
        output.push_str(&format!(
            "<p class='paper__meta'>🔗 <a href='{}'>{}</a> <span class='paper__score'>Score: {}</span></p>\n",
            escape_attr(&paper.url),
            escape_html(&paper.url),
            scored.score
        ));

        if self.options.include_takeaway {
            let takeaway = extract_takeaway(&paper.summary);
            if !takeaway.is_empty() {
                output.push_str("<div class='paper__takeaway'>\n");
                output.push_str("<p class='paper__takeaway-title'>💡 One-line Takeaway</p>\n");
                output.push_str(&format!(
                    "<p class='paper__takeaway-content'>{}</p>\n",
                    escape_html(&takeaway)
                ));
                output.push_str("</div>\n");
            }
        }
        output.push_str("</header>\n\n");

        output.push_str("<div class='paper__body'>\n");
        output.push_str(&summary_to_qa(&paper.summary));
        output.push_str("</div>\n");

        output.push_str("</article>\n\n");
        output
    }
}

/// Picks a one-line takeaway from a summary.
///
/// The first `.`, `!` or `。` whose character index lies strictly between
/// [`TAKEAWAY_MIN_INDEX`] and [`TAKEAWAY_MAX_INDEX`] ends the takeaway.
/// Without one, long summaries are cut to [`TAKEAWAY_FALLBACK_CHARS`]
/// characters plus `...`, and short ones are returned whole.
pub fn extract_takeaway(summary: &str) -> String {
    for (i, (byte_idx, c)) in summary.char_indices().enumerate() {
        if i >= TAKEAWAY_MAX_INDEX {
            break;
        }
        if i > TAKEAWAY_MIN_INDEX && matches!(c, '.' | '!' | '。') {
            return summary[..byte_idx + c.len_utf8()].to_string();
        }
    }

    if summary.chars().count() > TAKEAWAY_FALLBACK_CHARS {
        let mut takeaway = truncate_chars(summary, TAKEAWAY_FALLBACK_CHARS);
        takeaway.push_str("...");
        return takeaway;
    }
    summary.to_string()
}

/// Converts a markdown-ish summary into Q&A HTML blocks.
///
/// `### Qn` headings become `div.qa` blocks, other `###` headings plain
/// `<h3>`, and everything else goes through the block renderer.
pub fn summary_to_qa(summary: &str) -> String {
    let text = preprocess_summary(&normalize_unicode(summary));
    let mut output = String::new();

    for (i, section) in text.split("###").enumerate() {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }

        if i == 0 {
            output.push_str(&render_blocks(section));
            continue;
        }

        let (header, content) = match section.split_once('\n') {
            Some((header, content)) => (header, content.trim()),
            None => (section, ""),
        };
        let header = header.trim();
        let header = header.strip_prefix("##").unwrap_or(header).trim();
        let header_html = process_inline(header, InlineMode::Html);

        if RE_Q_HEADER.is_match(header) {
            output.push_str("<div class='qa'>\n");
            output.push_str(&format!("<h3 class='qa__q'>{}</h3>\n", header_html));
            if !content.is_empty() {
                output.push_str(&format!("<div class='qa__a'>{}</div>\n", render_blocks(content)));
            }
            output.push_str("</div>\n");
        } else {
            output.push_str(&format!("<h3>{}</h3>\n", header_html));
            if !content.is_empty() {
                output.push_str(&render_blocks(content));
            }
        }
    }

    output
}

/// Puts headings, list markers and `Qn:` markers on lines of their own.
fn preprocess_summary(text: &str) -> String {
    let text = text.replace("###", "\n###");
    let text = RE_INLINE_H2.replace_all(&text, "${1}\n${2}");
    // "** " closes a bold span; it is not a list marker
    let text = RE_INLINE_LIST_MARKER.replace_all(&text, |caps: &Captures| {
        if &caps[1] == "*" && caps[2].starts_with('*') {
            caps[0].to_string()
        } else {
            format!("{}\n{}", &caps[1], &caps[2])
        }
    });
    RE_INLINE_Q_MARKER
        .replace_all(&text, "\n${1}:")
        .into_owned()
}

fn toc_title(title: &str) -> String {
    if title.chars().count() > TOC_TITLE_CHARS {
        format!("{}...", truncate_chars(title, TOC_TITLE_CHARS))
    } else {
        title.to_string()
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paper;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
    }

    fn scored(title: &str, url: &str, summary: &str, score: u32) -> ScoredPaper {
        ScoredPaper::new(
            Paper::new(title, title).with_url(url).with_summary(summary),
            score,
        )
    }

    #[test]
    fn test_takeaway_first_sentence() {
        let summary = "This paper proposes a sparse attention scheme. It also evaluates it.";
        assert_eq!(
            extract_takeaway(summary),
            "This paper proposes a sparse attention scheme."
        );
    }

    #[test]
    fn test_takeaway_skips_early_period() {
        let summary = "Short. Then a much longer sentence follows here!";
        assert_eq!(extract_takeaway(summary), summary);
    }

    #[test]
    fn test_takeaway_fallback_truncates_by_chars() {
        let summary = "长".repeat(300);
        let takeaway = extract_takeaway(&summary);
        assert_eq!(takeaway.chars().count(), TAKEAWAY_FALLBACK_CHARS + 3);
        assert!(takeaway.ends_with("..."));
    }

    #[test]
    fn test_takeaway_cjk_full_stop() {
        let summary = format!("{}。后续内容", "研".repeat(30));
        assert_eq!(extract_takeaway(&summary), format!("{}。", "研".repeat(30)));
    }

    #[test]
    fn test_takeaway_short_and_empty() {
        assert_eq!(extract_takeaway("tiny"), "tiny");
        assert_eq!(extract_takeaway(""), "");
    }

    #[test]
    fn test_qa_blocks() {
        let html = summary_to_qa("### Q1\nWhat problem?\n### Q2\n- a\n- b");
        assert_eq!(
            html,
            "<div class='qa'>\n<h3 class='qa__q'>Q1</h3>\n<div class='qa__a'><p>What problem?</p>\n</div>\n</div>\n\
             <div class='qa'>\n<h3 class='qa__q'>Q2</h3>\n<div class='qa__a'><ul>\n<li>a</li>\n<li>b</li>\n</ul>\n</div>\n</div>\n"
        );
    }

    #[test]
    fn test_non_q_heading_and_preamble() {
        let html = summary_to_qa("Intro text\n### Methods\nWe train.");
        assert_eq!(html, "<p>Intro text</p>\n<h3>Methods</h3>\n<p>We train.</p>\n");
    }

    #[test]
    fn test_q_heading_without_content() {
        let html = summary_to_qa("### Q3");
        assert_eq!(html, "<div class='qa'>\n<h3 class='qa__q'>Q3</h3>\n</div>\n");
    }

    #[test]
    fn test_inline_list_markers_split() {
        let html = summary_to_qa("Findings:- fast- accurate");
        assert!(html.contains("<ul>\n<li>fast</li>\n<li>accurate</li>\n</ul>\n"));
    }

    #[test]
    fn test_closing_bold_not_split() {
        let html = summary_to_qa("The **key idea** is simple");
        assert_eq!(html, "<p>The <strong>key idea</strong> is simple</p>\n");
    }

    #[test]
    fn test_document_shape() {
        let papers = vec![
            scored("First <paper>", "https://arxiv.org/abs/1", "A fairly long first sentence here. More.", 9),
            scored("Second", "https://arxiv.org/abs/2", "", 4),
        ];
        let html = HtmlRenderer::default().render(date(), &papers);

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"zh-CN\">"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("Generated: 2026-02-26 &nbsp;|&nbsp; Total Papers: <strong>2</strong>"));
        assert!(html.contains("<li><a href='#paper1'>1. First &lt;paper&gt;</a></li>"));
        assert!(html.contains("<li><a href='#paper2'>2. Second</a></li>"));
        assert_eq!(html.matches("<article class='paper'").count(), 2);
        assert_eq!(html.matches("<div class='page-break'></div>").count(), 1);
        assert!(html.contains("<span class='paper__score'>Score: 9</span>"));
        assert!(html.contains(
            "<p class='paper__takeaway-content'>A fairly long first sentence here.</p>"
        ));
        assert_eq!(html.matches("paper__takeaway'").count(), 1, "empty summary has no takeaway");
        assert!(!html.contains("<paper>"));
    }

    #[test]
    fn test_toc_title_truncated() {
        let title = "T".repeat(80);
        let html = HtmlRenderer::default().render(date(), &[scored(&title, "", "", 1)]);
        assert!(html.contains(&format!("1. {}...</a></li>", "T".repeat(TOC_TITLE_CHARS))));
        assert!(html.contains(&format!("<h2 class='paper__title'>1. {}</h2>", title)));
    }

    #[test]
    fn test_takeaway_can_be_disabled() {
        let renderer = HtmlRenderer::new(RenderOptions::default().without_takeaway());
        let html = renderer.render_article(1, &scored("A", "", "A fairly long first sentence here.", 1));
        assert!(!html.contains("paper__takeaway"));
    }

    #[test]
    fn test_url_attribute_escaped() {
        let html = HtmlRenderer::default()
            .render_article(1, &scored("A", "https://x.org/?a=1&b='2'", "", 1));
        assert!(html.contains("href='https://x.org/?a=1&amp;b=&#39;2&#39;'"));
    }

    #[test]
    fn test_empty_digest_still_complete() {
        let html = HtmlRenderer::default().render(date(), &[]);
        assert!(html.contains("Total Papers: <strong>0</strong>"));
        assert!(html.contains("<ul>\n</ul>\n</nav>"));
        assert!(!html.contains("<article"));
        assert!(html.ends_with("</body></html>"));
    }
}
