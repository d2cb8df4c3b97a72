//! Non-board displays: the loading indicator, the "no data" message and the
//! error block.

use super::messages::Messages;
use super::styling::{Role, StyleMode};
use crate::dom::Element;

pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const PROGRESS_TEXT_ID: &str = "progress-text";
pub const PROGRESS_MESSAGE_ID: &str = "progress-message";

/// Loading indicator, optionally with a progress bar starting at 0%.
pub fn loading_view(style: StyleMode, messages: &Messages, with_progress: bool) -> Element {
    let mut view = style
        .apply(Element::new("div"), Role::Loading)
        .with_child(
            style
                .apply(Element::new("div"), Role::LoadingTitle)
                .with_text(&messages.loading),
        );

    if with_progress {
        let bar = style
            .apply(Element::new("div"), Role::ProgressBar)
            .with_id(PROGRESS_BAR_ID)
            .with_style("width", "0%")
            .with_child(
                Element::new("span")
                    .with_id(PROGRESS_TEXT_ID)
                    .with_text("0%"),
            );
        view.append(
            style
                .apply(Element::new("div"), Role::ProgressTrack)
                .with_child(bar),
        );
        view.append(
            style
                .apply(Element::new("div"), Role::ProgressMessage)
                .with_id(PROGRESS_MESSAGE_ID)
                .with_text(&messages.phase_fetching),
        );
    }

    view
}

/// Move the progress bar inside `container` to `percent` and show `message`.
///
/// A no-op when the container holds no progress bar.
pub fn update_progress(container: &mut Element, percent: u8, message: &str) {
    let label = format!("{percent}%");
    if let Some(bar) = container.find_by_id_mut(PROGRESS_BAR_ID) {
        bar.set_style("width", label.as_str());
    }
    if let Some(text) = container.find_by_id_mut(PROGRESS_TEXT_ID) {
        text.set_text(label.as_str());
    }
    if let Some(msg) = container.find_by_id_mut(PROGRESS_MESSAGE_ID) {
        msg.set_text(message);
    }
}

/// Shown when the backend returned no categories at all.
pub fn empty_view(style: StyleMode, messages: &Messages) -> Element {
    style
        .apply(Element::new("p"), Role::Empty)
        .with_text(&messages.empty)
}

/// Error block: fixed title, failure detail and a link to the raw endpoint.
pub fn error_view(style: StyleMode, messages: &Messages, detail: &str, endpoint: &str) -> Element {
    let (before, after) = messages.error_hint_parts();

    let mut hint = style.apply(Element::new("p"), Role::ErrorHint);
    if !before.is_empty() {
        hint.append_text(before);
    }
    hint.append(
        Element::new("a")
            .with_attr("href", endpoint)
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
            .with_text(endpoint),
    );
    if !after.is_empty() {
        hint.append_text(after);
    }

    style
        .apply(Element::new("div"), Role::ErrorBlock)
        .with_child(
            style
                .apply(Element::new("p"), Role::ErrorTitle)
                .with_text(&messages.error_title),
        )
        .with_child(
            style
                .apply(Element::new("p"), Role::ErrorDetail)
                .with_text(messages.error_detail(detail)),
        )
        .with_child(hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_loading_view_without_progress() {
        let view = loading_view(StyleMode::Stylesheet, &Messages::default(), false);
        assert!(view.has_class("news-loading"));
        assert_eq!(view.text_content(), "Loading news...");
        assert!(view.find_by_id(PROGRESS_BAR_ID).is_none());
    }

    #[test]
    fn test_loading_view_with_progress_starts_at_zero() {
        let view = loading_view(StyleMode::Stylesheet, &Messages::default(), true);
        let bar = view.find_by_id(PROGRESS_BAR_ID).unwrap();
        assert_eq!(bar.style("width"), Some("0%"));
        assert_eq!(view.find_by_id(PROGRESS_TEXT_ID).unwrap().text_content(), "0%");
        assert_eq!(
            view.find_by_id(PROGRESS_MESSAGE_ID).unwrap().text_content(),
            "Fetching news feeds..."
        );
    }

    #[test]
    fn test_update_progress() {
        let mut container = Element::new("div").with_child(loading_view(
            StyleMode::Inline,
            &Messages::default(),
            true,
        ));
        update_progress(&mut container, 42, "Analyzing articles...");

        let bar = container.find_by_id(PROGRESS_BAR_ID).unwrap();
        assert_eq!(bar.style("width"), Some("42%"));
        // Inline declarations survive the width update
        assert_eq!(bar.style("height"), Some("100%"));
        assert_eq!(container.find_by_id(PROGRESS_TEXT_ID).unwrap().text_content(), "42%");
        assert_eq!(
            container.find_by_id(PROGRESS_MESSAGE_ID).unwrap().text_content(),
            "Analyzing articles..."
        );
    }

    #[test]
    fn test_update_progress_without_bar_is_noop() {
        let mut container = Element::new("div").with_child(loading_view(
            StyleMode::Stylesheet,
            &Messages::default(),
            false,
        ));
        let before = container.clone();
        update_progress(&mut container, 50, "ignored");
        assert_eq!(container, before);
    }

    #[test]
    fn test_empty_view() {
        let view = empty_view(StyleMode::Stylesheet, &Messages::default());
        assert_eq!(
            view.to_html(),
            r#"<p class="news-empty">No news data available.</p>"#
        );
    }

    #[test]
    fn test_error_view() {
        let view = error_view(
            StyleMode::Stylesheet,
            &Messages::default(),
            "HTTP error: status 500",
            "http://127.0.0.1:8000/news",
        );
        assert_eq!(
            view.to_html(),
            concat!(
                r#"<div class="news-error">"#,
                r#"<p class="error-title">Error while loading</p>"#,
                r#"<p class="error-detail">Details: HTTP error: status 500</p>"#,
                r#"<p class="error-hint">Try visiting "#,
                r#"<a href="http://127.0.0.1:8000/news" target="_blank" rel="noopener noreferrer">http://127.0.0.1:8000/news</a>"#,
                r#" to see the raw data.</p>"#,
                r#"</div>"#
            )
        );
    }
}
