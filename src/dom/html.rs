use super::element::{Element, Node};

/// Elements that never carry children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

pub(super) fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());

    for (name, value) in el.attributes() {
        write_attribute(out, name, value);
    }

    if !el.styles().is_empty() {
        let declarations = el
            .styles()
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        write_attribute(out, "style", &declarations);
    }

    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag()) {
        return;
    }

    for child in el.children() {
        match child {
            Node::Element(inner) => write_element(inner, out),
            Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        }
    }

    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}

/// Wrap a rendered container in a standalone HTML5 document.
///
/// `stylesheet` is an optional href for an external stylesheet, used when the
/// board is rendered with class names only.
pub fn page_document(title: &str, stylesheet: Option<&str>, body: &Element) -> String {
    let mut head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(Element::new("title").with_text(title));
    if let Some(href) = stylesheet {
        head.append(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", href),
        );
    }

    let document = Element::new("html")
        .with_attr("lang", "en")
        .with_child(head)
        .with_child(
            Element::new("body")
                .with_child(Element::new("h1").with_text(title))
                .with_child(body.clone()),
        );

    let mut out = String::from("<!DOCTYPE html>\n");
    write_element(&document, &mut out);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_is_escaped() {
        let el = Element::new("p").with_text("<script>alert('x')</script> & more");
        assert_eq!(
            el.to_html(),
            "<p>&lt;script&gt;alert('x')&lt;/script&gt; &amp; more</p>"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let el = Element::new("a").with_attr("href", "https://example.com/?a=1&b=\"2\"");
        assert_eq!(
            el.to_html(),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\"></a>"
        );
    }

    #[test]
    fn test_styles_serialize_after_attributes() {
        let el = Element::new("div")
            .with_style("width", "10%")
            .with_id("progress-bar")
            .with_style("height", "100%");
        assert_eq!(
            el.to_html(),
            "<div id=\"progress-bar\" style=\"width: 10%; height: 100%\"></div>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let el = Element::new("meta").with_attr("charset", "utf-8");
        assert_eq!(el.to_html(), "<meta charset=\"utf-8\">");
    }

    #[test]
    fn test_page_document_wraps_container() {
        let list = Element::new("div").with_id("news-list");
        let page = page_document("News", Some("style.css"), &list);
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(page.contains("<title>News</title>"));
        assert!(page.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
        assert!(page.contains("<div id=\"news-list\"></div>"));
    }

    #[test]
    fn test_page_document_without_stylesheet() {
        let list = Element::new("div").with_id("news-list");
        let page = page_document("News", None, &list);
        assert!(!page.contains("<link"));
    }
}
