use serde::Deserialize;

/// Every user-visible string on the board.
///
/// Loaded from the `[messages]` config table. Templates use `{domain}`,
/// `{detail}` and `{link}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub loading: String,
    pub phase_fetching: String,
    pub phase_analyzing: String,
    pub phase_collecting: String,
    pub complete: String,
    pub empty: String,
    pub category_empty: String,
    /// `{domain}` is replaced with the article's display domain.
    pub source_label: String,
    pub error_title: String,
    /// `{detail}` is replaced with the failure detail.
    pub error_detail: String,
    /// `{link}` marks where the link to the raw endpoint goes.
    pub error_hint: String,
    /// Detail shown for connectivity failures; the full error goes to the log.
    pub network_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            loading: "Loading news...".to_string(),
            phase_fetching: "Fetching news feeds...".to_string(),
            phase_analyzing: "Analyzing articles...".to_string(),
            phase_collecting: "Collecting the latest news...".to_string(),
            complete: "Loading complete!".to_string(),
            empty: "No news data available.".to_string(),
            category_empty: "No articles in this category.".to_string(),
            source_label: "Source: {domain}".to_string(),
            error_title: "Error while loading".to_string(),
            error_detail: "Details: {detail}".to_string(),
            error_hint: "Try visiting {link} to see the raw data.".to_string(),
            network_error: "Could not reach the news service".to_string(),
        }
    }
}

impl Messages {
    pub fn source_label(&self, domain: &str) -> String {
        self.source_label.replace("{domain}", domain)
    }

    pub fn error_detail(&self, detail: &str) -> String {
        self.error_detail.replace("{detail}", detail)
    }

    /// Text before and after the `{link}` placeholder of the error hint.
    ///
    /// Without a placeholder the whole hint comes first and the link is
    /// appended at the end.
    pub fn error_hint_parts(&self) -> (&str, &str) {
        self.error_hint
            .split_once("{link}")
            .unwrap_or((self.error_hint.as_str(), ""))
    }
}
