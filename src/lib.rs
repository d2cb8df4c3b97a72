//! Renders a categorized news feed into an HTML news board.
//!
//! The pipeline fetches a JSON document mapping category names to article
//! lists, validates it, and builds the board inside a container element. A
//! [`ui::Presenter`] owns that container and moves it from the loading view
//! to exactly one of three terminal displays: the populated board, the
//! "no data" message, or an error block.
//!
//! ```ignore
//! use newsboard::dom::Element;
//! use newsboard::feed::Fetcher;
//! use newsboard::ui::{Presenter, PresenterOptions};
//!
//! let fetcher = Fetcher::new(reqwest::Client::new(), endpoint);
//! let mut presenter = Presenter::new(Element::new("div").with_id("news-list"), PresenterOptions::default());
//! presenter.run(&fetcher).await;
//! println!("{}", presenter.container().to_html());
//! ```

pub mod config;
pub mod dom;
pub mod feed;
pub mod ui;
pub mod util;
