//! Minimal in-memory DOM for the news board page.
//!
//! The board is built as a tree of [`Element`]s and serialized to HTML at the
//! end of a render cycle. Only the operations the pipeline needs exist here:
//! building elements, replacing text content, clearing children, looking up
//! nodes by id or tag, and serializing.
//!
//! # Example
//!
//! ```
//! use newsboard::dom::Element;
//!
//! let mut list = Element::new("div").with_id("news-list");
//! list.append(Element::new("h2").with_text("Cryptography"));
//! assert_eq!(list.to_html(), r#"<div id="news-list"><h2>Cryptography</h2></div>"#);
//! ```

mod element;
mod html;

pub use element::{Element, Node};
pub use html::page_document;
