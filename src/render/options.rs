//! Rendering options for digest output.

/// Options shared by the Markdown and HTML renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title.
    /// Default: "Paper Radar Digest"
    pub title: String,

    /// Subtitle shown under the HTML title.
    pub subtitle: String,

    /// Value of the HTML `lang` attribute.
    /// Default: "zh-CN"
    pub html_lang: String,

    /// Whether to show the one-line takeaway box in HTML output.
    pub include_takeaway: bool,

    /// Whether flat (line-break-less) Q-section content is re-segmented.
    pub reformat_flat_content: bool,

    /// Whether papers are rendered on the rayon thread pool.
    /// Output order always follows input order.
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Paper Radar Digest".to_string(),
            subtitle: "Weekly Research Summary".to_string(),
            html_lang: "zh-CN".to_string(),
            include_takeaway: true,
            reformat_flat_content: true,
            parallel: true,
        }
    }
}

impl RenderOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the HTML subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Sets the HTML `lang` attribute.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.html_lang = lang.into();
        self
    }

    /// Omits the takeaway box from HTML output.
    pub fn without_takeaway(mut self) -> Self {
        self.include_takeaway = false;
        self
    }

    /// Emits Q-section content as stored, even when it looks flat.
    pub fn without_reformat(mut self) -> Self {
        self.reformat_flat_content = false;
        self
    }

    /// Disables parallel rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
