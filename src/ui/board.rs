use super::messages::Messages;
use super::styling::{Role, StyleMode};
use crate::dom::Element;
use crate::feed::{Article, Category, NewsPayload};
use crate::util::derive_domain;

/// Builds the populated board: one section per category, in payload order.
///
/// For each category the container receives an `<h2>` with the name, then
/// either a `<p class="category-empty">` or a `<ul class="article-list">`.
/// Each `<li>` holds a link opening in a new browsing context and, when the
/// URL yields a domain, a `<small>` source annotation.
pub struct Renderer<'a> {
    style: StyleMode,
    messages: &'a Messages,
}

impl<'a> Renderer<'a> {
    pub fn new(style: StyleMode, messages: &'a Messages) -> Self {
        Self { style, messages }
    }

    /// Append the board for `payload` to `container`.
    ///
    /// Existing children of `container` are left untouched.
    pub fn render(&self, payload: &NewsPayload, container: &mut Element) {
        for category in payload.categories() {
            self.render_category(category, container);
        }
    }

    fn render_category(&self, category: &Category, container: &mut Element) {
        container.append(
            self.style
                .apply(Element::new("h2"), Role::CategoryHeading)
                .with_text(&category.name),
        );

        if category.articles.is_empty() {
            container.append(
                self.style
                    .apply(Element::new("p"), Role::CategoryEmpty)
                    .with_text(&self.messages.category_empty),
            );
            return;
        }

        let list = category
            .articles
            .iter()
            .fold(self.style.apply(Element::new("ul"), Role::ArticleList), |list, article| {
                list.with_child(self.article_item(article))
            });
        container.append(list);
    }

    fn article_item(&self, article: &Article) -> Element {
        let link = self
            .style
            .apply(Element::new("a"), Role::ArticleLink)
            .with_attr("href", &article.url)
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
            .with_text(&article.title);

        let mut item = self
            .style
            .apply(Element::new("li"), Role::ArticleItem)
            .with_child(link);

        match derive_domain(&article.url) {
            Some(domain) => item.append(
                self.style
                    .apply(Element::new("small"), Role::ArticleSource)
                    .with_text(self.messages.source_label(&domain)),
            ),
            None => tracing::debug!(url = %article.url, "Invalid article URL, omitting source"),
        }

        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article(url: &str, title: &str) -> Article {
        Article {
            url: url.to_string(),
            title: title.to_string(),
        }
    }

    fn render(payload: &NewsPayload, style: StyleMode) -> Element {
        let messages = Messages::default();
        let mut container = Element::new("div").with_id("news-list");
        Renderer::new(style, &messages).render(payload, &mut container);
        container
    }

    #[test]
    fn test_article_markup() {
        let payload = NewsPayload::new(vec![Category::new(
            "PQC",
            vec![article("https://www.nist.gov/pqc", "NIST finalizes standards")],
        )]);
        let container = render(&payload, StyleMode::Stylesheet);

        assert_eq!(
            container.to_html(),
            concat!(
                r#"<div id="news-list">"#,
                r#"<h2 class="category-title">PQC</h2>"#,
                r#"<ul class="article-list"><li class="article">"#,
                r#"<a class="article-link" href="https://www.nist.gov/pqc" target="_blank" rel="noopener noreferrer">NIST finalizes standards</a>"#,
                r#"<small class="article-source">Source: nist.gov</small>"#,
                r#"</li></ul></div>"#
            )
        );
    }

    #[test]
    fn test_empty_category_renders_message_not_list() {
        let payload = NewsPayload::new(vec![Category::new("Cryptography", vec![])]);
        let container = render(&payload, StyleMode::Stylesheet);

        let children: Vec<&Element> = container.child_elements().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag(), "h2");
        assert_eq!(children[1].tag(), "p");
        assert!(children[1].has_class("category-empty"));
        assert_eq!(children[1].text_content(), "No articles in this category.");
        assert!(container.find_all("ul").is_empty());
    }

    #[test]
    fn test_invalid_url_omits_source_only() {
        let payload = NewsPayload::new(vec![Category::new(
            "News",
            vec![
                article("not a url", "Broken"),
                article("https://example.org/ok", "Fine"),
            ],
        )]);
        let container = render(&payload, StyleMode::Stylesheet);

        let items = container.find_all("li");
        assert_eq!(items.len(), 2);

        let broken: Vec<&str> = items[0].child_elements().map(Element::tag).collect();
        assert_eq!(broken, vec!["a"]);
        assert_eq!(items[0].find_all("a")[0].attr("href"), Some("not a url"));

        let fine: Vec<&str> = items[1].child_elements().map(Element::tag).collect();
        assert_eq!(fine, vec!["a", "small"]);
        assert_eq!(items[1].find_all("small")[0].text_content(), "Source: example.org");
    }

    #[test]
    fn test_title_is_verbatim_text() {
        let payload = NewsPayload::new(vec![Category::new(
            "News",
            vec![article("https://example.org", "<b>Bold</b> & co")],
        )]);
        let container = render(&payload, StyleMode::Stylesheet);
        let link = container.find_all("a")[0];
        assert_eq!(link.text_content(), "<b>Bold</b> & co");
        assert!(container.find_all("b").is_empty());
    }

    #[test]
    fn test_inline_mode_sets_role_styles() {
        let payload = NewsPayload::new(vec![Category::new(
            "News",
            vec![article("https://example.org", "Title")],
        )]);
        let container = render(&payload, StyleMode::Inline);

        assert_eq!(container.find_all("ul")[0].style("list-style"), Some("none"));
        assert_eq!(container.find_all("a")[0].style("color"), Some("#0066cc"));
        assert_eq!(container.find_all("small")[0].style("color"), Some("#666"));
    }

    #[test]
    fn test_render_appends_to_existing_children() {
        let messages = Messages::default();
        let mut container = Element::new("div").with_child(Element::new("p").with_text("keep"));
        let payload = NewsPayload::new(vec![Category::new("A", vec![])]);
        Renderer::new(StyleMode::Stylesheet, &messages).render(&payload, &mut container);
        assert_eq!(container.child_elements().count(), 3);
    }

    #[test]
    fn test_custom_source_label() {
        let messages = Messages {
            source_label: "via {domain}".to_string(),
            ..Messages::default()
        };
        let payload = NewsPayload::new(vec![Category::new(
            "News",
            vec![article("https://www.example.org/a", "A")],
        )]);
        let mut container = Element::new("div");
        Renderer::new(StyleMode::Stylesheet, &messages).render(&payload, &mut container);
        assert_eq!(container.find_all("small")[0].text_content(), "via example.org");
    }
}
